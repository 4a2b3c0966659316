//! Command-line interface for acip
//! This binary is used to inspect ACIP files: dump the raw classified
//! matches, or run the full analysis chain (tokenizer + filters).
//!
//! Usage:
//!   acip tokens `<path>` [--format `<format>`]    - Dump raw scanner matches
//!   acip analyze `<path>` [--stop-words `<file>`] - Run the analysis chain

use clap::{Arg, Command};

use acip::acip::scanner;
use acip::acip::stream::TokenSource;
use acip::acip::AcipAnalyzer;

fn main() {
    env_logger::init();

    let matches = Command::new("acip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting ACIP transliteration text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Dump the raw classified matches for a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the ACIP file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Run the full analysis chain over a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the ACIP file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("stop-words")
                        .long("stop-words")
                        .short('s')
                        .help("Path to a stop-word list (one word per line)"),
                )
                .arg(
                    Arg::new("max-token-length")
                        .long("max-token-length")
                        .short('m')
                        .help("Skip matches longer than this")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("analyze", analyze_matches)) => {
            let path = analyze_matches.get_one::<String>("path").unwrap();
            let format = analyze_matches.get_one::<String>("format").unwrap();
            let stop_words = analyze_matches.get_one::<String>("stop-words");
            let max_token_length = analyze_matches.get_one::<usize>("max-token-length");
            handle_analyze_command(path, format, stop_words, max_token_length);
        }
        _ => unreachable!(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let matches = scanner::scan_all(&source).unwrap_or_else(|e| {
        eprintln!("Scan error: {}", e);
        std::process::exit(1);
    });

    match format {
        "json" => {
            let records: Vec<serde_json::Value> = matches
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "kind": m.kind.label(),
                        "text": &source[m.start..m.end],
                        "start": m.start,
                        "end": m.end,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records).unwrap());
        }
        _ => {
            for m in &matches {
                println!(
                    "{}..{}\t{}\t{}",
                    m.start,
                    m.end,
                    m.kind.label(),
                    &source[m.start..m.end]
                );
            }
        }
    }
}

/// Handle the analyze command
fn handle_analyze_command(
    path: &str,
    format: &str,
    stop_words: Option<&String>,
    max_token_length: Option<&usize>,
) {
    let mut analyzer = match stop_words {
        Some(stop_path) => AcipAnalyzer::from_stop_words_file(stop_path).unwrap_or_else(|e| {
            eprintln!("Error loading stop words: {}", e);
            std::process::exit(1);
        }),
        None => AcipAnalyzer::new(),
    };

    if let Some(length) = max_token_length {
        analyzer.set_max_token_length(*length).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    }

    let file = std::fs::File::open(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let mut stream = analyzer.token_stream(file).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut tokens = Vec::new();
    loop {
        match stream.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(e) => {
                eprintln!("Analysis error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let end = stream.end().unwrap_or_else(|e| {
        eprintln!("Analysis error: {}", e);
        std::process::exit(1);
    });

    match format {
        "json" => {
            let output = serde_json::json!({
                "tokens": tokens,
                "end": end,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        _ => {
            for token in &tokens {
                println!(
                    "{}..{}\t+{}\t{}",
                    token.start_offset, token.end_offset, token.position_increment, token.text
                );
            }
            println!("end: {} (+{})", end.offset, end.position_increment);
        }
    }

    if let Err(e) = stream.close() {
        eprintln!("Error closing stream: {}", e);
        std::process::exit(1);
    }
}
