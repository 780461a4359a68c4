use anyhow::Context;
use clap::Parser;
use loxlex::{EmptyStrings, KeywordCase, Options, Scanner};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EX_DATAERR: i32 = 65;
const EX_NOINPUT: i32 = 66;
const EX_IOERR: i32 = 74;

/// Tokenize Lox source and print one token per line.
#[derive(Parser, Debug)]
#[command(name = "loxlex", version)]
struct Cli {
    /// Source file to tokenize. Starts an interactive prompt when omitted.
    path: Option<PathBuf>,

    /// Drop `""` literals instead of emitting an empty string token
    #[arg(long)]
    suppress_empty_strings: bool,

    /// Match keywords regardless of case (`AND` is the keyword `and`)
    #[arg(long)]
    case_insensitive_keywords: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options::default();
        if self.suppress_empty_strings {
            options = options.empty_strings(EmptyStrings::Suppress);
        }
        if self.case_insensitive_keywords {
            options = options.keyword_case(KeywordCase::Insensitive);
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.options();
    debug!(?options, "starting");

    let result = match &cli.path {
        Some(path) => match read_source(path) {
            Ok(contents) => run_file(&contents, options),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                process::exit(EX_NOINPUT);
            },
        },
        None => run_prompt(options),
    };

    match result {
        Ok(0) => (),
        Ok(status) => process::exit(status),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EX_IOERR);
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}

fn run_file(contents: &str, options: Options) -> anyhow::Result<i32> {
    let mut session = Session::new(options, io::stdout().lock(), io::stderr().lock());
    let had_errors = session.run(contents)?;
    Ok(if had_errors { EX_DATAERR } else { 0 })
}

fn run_prompt(options: Options) -> anyhow::Result<i32> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buffer = String::new();

    let mut session = Session::new(options, io::stdout(), io::stderr());

    loop {
        write!(session.out, "> ")?;
        session.out.flush()?;

        buffer.clear();
        let num_bytes = input.read_line(&mut buffer).context("could not read from stdin")?;
        if num_bytes == 0 { break };
        if buffer.trim().is_empty() { continue };

        session.run(&buffer)?;
    }

    Ok(0)
}

struct Session<Out, ErrOut> {
    options: Options,
    out: Out,
    err_out: ErrOut,
}

impl<Out: Write, ErrOut: Write> Session<Out, ErrOut> {
    fn new(options: Options, out: Out, err_out: ErrOut) -> Self {
        Self { options, out, err_out }
    }

    /// Prints every token and error in `source`. Returns whether any
    /// lexical error was reported.
    fn run(&mut self, source: &str) -> io::Result<bool> {
        let (tokens, errors) = Scanner::with_options(source, self.options).tokenize();

        for token in tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }
        for e in errors.iter() {
            writeln!(self.err_out, "{}", e)?;
        }

        Ok(!errors.is_empty())
    }
}
