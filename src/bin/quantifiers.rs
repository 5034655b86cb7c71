use clap::Parser;
use quantifiers::harness::{self, Config};
use std::process::ExitCode;

/// Runs quantifier test pairs against a grammar profile.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Quote arguments to avoid shell expansion, e.g. '{2,5}:{2,5}'.")]
struct Cli {
    /// `sep=SEP` sets the separator [default: ","]; `encaps=OPEN,CLOSE` adds
    /// a bracket pair (the first one is fixed); `ARGUMENT:EXPECT` is a test
    /// pair, where EXPECT is a token or an error name such as `FormatError`.
    #[arg(required = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Config { grammar, pairs } = match Config::from_tokens(&cli.tokens) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("==== Using ====");
    println!("{grammar}");

    let report = harness::run(&grammar, &pairs);
    println!("{report}");

    ExitCode::SUCCESS
}
