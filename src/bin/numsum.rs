use std::io::{self, Read};
use std::process;

use clap::Parser;
use log::debug;

use numsum::{unescape, Summer};

/// Sum delimited integer strings.
///
/// Numbers are separated by `,` or newlines. An expression starting with
/// `;<delim>\n` uses <delim> (or `;` when empty) alongside newlines instead.
#[derive(Debug, Parser)]
#[command(name = "numsum", version)]
struct Cli {
    /// Expressions to sum, one result per line; put negative ones after `--`
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    exprs: Vec<String>,

    /// Read a single expression from stdin
    #[arg(long)]
    stdin: bool,

    /// Decode \n, \r, \t and \\ in expressions given as arguments
    #[arg(short = 'e', long, conflicts_with = "stdin")]
    escapes: bool,

    /// Do not recognise a leading `;<delim>\n` header
    #[arg(long)]
    no_header: bool,

    /// Increase log verbosity (repeatable); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut summer = Summer::default();
    if cli.no_header {
        summer = summer.without_header();
    }

    let inputs: Vec<String> = if cli.stdin {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("error: failed to read stdin: {e}");
            process::exit(1);
        }
        vec![input]
    } else if cli.escapes {
        cli.exprs.iter().map(|e| unescape(e)).collect()
    } else {
        cli.exprs
    };

    for input in &inputs {
        debug!("expression {input:?}");
        match summer.sum(input) {
            Ok(total) => println!("{total}"),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(2);
            }
        }
    }
}
