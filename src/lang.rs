//! Main module for langfile library functionality

pub mod error;
pub mod formats;
pub mod parsing;
pub mod scanning;
pub mod token;
pub mod tokenizing;
