//! Command-line interface for langfile
//! This binary is used to inspect .lang files and the tokens of their values.
//!
//! Usage:
//!   langfile scan `<text>` [--kinds `<kinds>`]                 - Run a single scan call
//!   langfile tokens `<text>` [--format `<format>`]             - Tokenize a value
//!   langfile parse `<path>` [--format `<format>`] [--config `<file>`] - Parse a file

use clap::{Arg, ArgAction, ArgMatches, Command};
use langfile::lang::error::Error;
use langfile::lang::formats::{render_document, render_tokens, Format};
use langfile::lang::parsing::parse_document_with;
use langfile::lang::scanning::{decode_source, scan, StrStream};
use langfile::lang::token::{TokenKind, TokenKindSet};
use langfile::lang::tokenizing::{tokenize_with_options, TokenizeOptions};
use langfile_config::{LangfileConfig, Loader};
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    let format_arg = Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: tag, json or yaml (default from configuration)");
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the built-in defaults");

    Command::new("langfile")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting .lang localization files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("Run one scan call at the start of the text")
                .arg(Arg::new("text").help("Text to scan").required(true).index(1))
                .arg(
                    Arg::new("kinds")
                        .long("kinds")
                        .short('k')
                        .help("Comma separated acceptable kinds (default: all)")
                        .value_delimiter(','),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a value")
                .arg(Arg::new("text").help("Value text").required(true).index(1))
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Keep the scanner's cut points instead of merging text")
                        .action(ArgAction::SetTrue),
                )
                .arg(format_arg.clone())
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a .lang file")
                .arg(
                    Arg::new("path")
                        .help("Path to the .lang file")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg)
                .arg(config_arg),
        )
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("scan", scan_matches)) => handle_scan_command(scan_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        _ => unreachable!("a subcommand is required"),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the scan command
fn handle_scan_command(matches: &ArgMatches) -> Result<String, Error> {
    let text = required(matches, "text");
    let acceptable = match matches.get_many::<String>("kinds") {
        Some(names) => names
            .map(|name| name.parse::<TokenKind>())
            .collect::<Result<TokenKindSet, _>>()?,
        None => TokenKindSet::all(),
    };

    let mut stream = StrStream::new(text);
    let output = match scan(&mut stream, acceptable) {
        Some(token) => format!(
            "{} {}..{} {:?}\n",
            token.kind,
            token.span.start,
            token.span.end,
            token.text(text)
        ),
        None => "no match\n".to_string(),
    };
    Ok(output)
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<String, Error> {
    let text = required(matches, "text");
    let config = load_config(matches)?;
    let mut options = TokenizeOptions::from_config(&config.tokenize)?;
    if matches.get_flag("raw") {
        options.coalesce_text = false;
    }

    let tokens = tokenize_with_options(text, &options);
    // Tokens default to the line listing unless a format is asked for explicitly
    let format = match matches.get_one::<String>("format") {
        Some(name) => name.parse::<Format>()?,
        None => Format::Tag,
    };
    Ok(render_tokens(text, &tokens, format, config.output.pretty)?)
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<String, Error> {
    let path = PathBuf::from(required(matches, "path"));
    let config = load_config(matches)?;
    let options = TokenizeOptions::from_config(&config.tokenize)?;
    let format = output_format(matches, &config)?;

    let bytes = std::fs::read(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("parsing {}", path.display());
    let doc = parse_document_with(&decode_source(&bytes), &options)?;

    let mut output = render_document(&doc, format, config.output.pretty)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<LangfileConfig, Error> {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    Ok(loader.build()?)
}

fn output_format(matches: &ArgMatches, config: &LangfileConfig) -> Result<Format, Error> {
    match matches.get_one::<String>("format") {
        Some(name) => Ok(name.parse::<Format>()?),
        None => Ok(config.output.format.into()),
    }
}
