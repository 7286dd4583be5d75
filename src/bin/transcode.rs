//! Command-line interface for transcode
//! This binary converts source files between the supported language pairs.
//!
//! Usage:
//!   transcode convert `<path>` --language `<name>` [--strict]   - Convert a file (or '-' for stdin)
//!   transcode tokens `<path>` --language `<name>` [--format `<format>`] - Dump the scanned token stream
//!   transcode list-languages                                  - List all available conversions

use clap::{Arg, ArgAction, Command};
use std::io::Read;

use transcode::transcode::languages::{Language, LanguageRegistry};
use transcode::transcode::processor::{
    dump_tokens, transcode, transcode_strict, DumpFormat,
};

fn main() {
    let matches = Command::new("transcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Token-level source-to-source transcoders")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a source file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or '-' for standard input")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Conversion to apply (see list-languages)")
                        .required(true),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on the first lexical error instead of recovering")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the scanned token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or '-' for standard input")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Conversion whose scanner to use")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .subcommand(Command::new("list-languages").about("List available conversions"))
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let language = convert_matches.get_one::<String>("language").unwrap();
            let strict = convert_matches.get_flag("strict");
            handle_convert_command(path, language, strict);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let language = tokens_matches.get_one::<String>("language").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, language, format);
        }
        Some(("list-languages", _)) => {
            handle_list_languages_command();
        }
        _ => unreachable!(),
    }
}

/// Read the input file, or all of standard input when the path is "-"
fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading standard input: {}", e);
                std::process::exit(1);
            });
        source
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}

fn lookup_language(name: &str) -> &'static Language {
    LanguageRegistry::global().get(name).unwrap_or_else(|| {
        eprintln!(
            "Unknown language pair '{}'. Available: {}",
            name,
            LanguageRegistry::global().available().join(", ")
        );
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(path: &str, language_name: &str, strict: bool) {
    let source = read_source(path);
    let language = lookup_language(language_name);

    if strict {
        match transcode_strict(&source, language) {
            Ok(transcription) => print!("{}", transcription.output),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let transcription = transcode(&source, language);
        for diagnostic in &transcription.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
        if transcription.layout.underflows > 0 {
            eprintln!(
                "warning: {} unmatched closing brace(s)",
                transcription.layout.underflows
            );
        }
        print!("{}", transcription.output);
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, language_name: &str, format_name: &str) {
    let source = read_source(path);
    let language = lookup_language(language_name);

    let format = DumpFormat::from_string(format_name).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = dump_tokens(&source, language, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-languages command
fn handle_list_languages_command() {
    println!("Available conversions:\n");
    let registry = LanguageRegistry::global();
    for name in registry.available() {
        let language = registry.get(name).unwrap();
        println!("  {}", name);
        println!("    {}", language.description());
    }
}
