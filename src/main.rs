use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser as ClapParser, ValueEnum};
use funclang::{
    ast::ast::Item,
    driver::{Driver, TopLevelHandler},
    lexer::{lexer::Lexer, source::ByteChars},
    parser::{
        config::{ImportMode, ParserConfig},
        parser::Parser,
        precedence::{OperatorEntry, PrecedenceTable},
    },
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Parse a funclang program and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "funclang", version)]
struct Cli {
    /// Source file to parse (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Add or override a binary operator, as OP=PREC[:left|right].
    #[arg(long = "op", value_name = "OP=PREC")]
    ops: Vec<OperatorEntry>,

    /// Start from an empty operator table instead of `+ - * /`.
    #[arg(long)]
    no_default_ops: bool,

    /// What to do with `import` (reject or placeholder).
    #[arg(long, default_value = "reject")]
    imports: ImportMode,

    /// How parsed items are printed.
    #[arg(long, value_enum, default_value_t = Format::Sexpr)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Sexpr,
    Debug,
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "funclang=warn",
        1 => "funclang=debug",
        _ => "funclang=trace",
    }
}

struct Printer<W> {
    out: W,
    format: Format,
}

impl<W: Write> TopLevelHandler for Printer<W> {
    fn handle_item(&mut self, item: Item) {
        let written = match self.format {
            Format::Sexpr => writeln!(self.out, "{}", item),
            Format::Debug => writeln!(self.out, "{:#?}", item),
        };
        if let Err(error) = written {
            warn!(%error, "failed to print item");
        }
    }
}

fn build_config(cli: &Cli) -> ParserConfig {
    let mut table = if cli.no_default_ops {
        PrecedenceTable::new()
    } else {
        PrecedenceTable::arithmetic()
    };
    for entry in &cli.ops {
        entry.apply(&mut table);
    }

    ParserConfig::new(table, cli.imports)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli);
    debug!(operators = config.precedence.len(), imports = ?config.import_mode, "configured parser");

    let (reader, file): (Box<dyn Read>, Option<String>) = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => (Box::new(file), Some(path.display().to_string())),
            Err(error) => {
                eprintln!("Error: cannot open {}: {}", path.display(), error);
                return ExitCode::from(2);
            }
        },
        None => (Box::new(io::stdin()), None),
    };

    let lexer = Lexer::new(ByteChars::new(reader), file);
    let mut driver = Driver::new(Parser::new(lexer, config));
    let mut printer = Printer {
        out: io::stdout().lock(),
        format: cli.format,
    };

    match driver.run(&mut printer, &mut io::stderr().lock()) {
        Ok(summary) => {
            info!(?summary, "done");
            if summary.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(error) => {
            eprintln!("Error: cannot write diagnostics: {}", error);
            ExitCode::from(2)
        }
    }
}
