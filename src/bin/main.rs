use {
    std::{
        fs,
        io::{self, Read, Write},
        path::PathBuf,
    },
    anyhow::{Context, Result},
    clap::{ArgAction, Parser},
    tracing_subscriber::EnvFilter,
    connectivity::{
        input::{split_len, Pairs},
        Algorithm,
    },
};

/// Solve the connectivity problem for a stream of pairs with QF, QU, WQU and CWQU.
#[derive(Parser, Debug)]
#[command(name = "connectivity", version, about, long_about = None)]
struct Cli {
    /// File with whitespace separated pairs; standard input when omitted
    input: Option<PathBuf>,

    /// Number of elements; read from the first token of the input when omitted
    #[arg(short = 'n', long)]
    len: Option<usize>,

    /// Algorithm to run (qf, qu, wqu, cwqu); may be repeated, all four when omitted
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Only print the summary of each run
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity; RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Splits the input into the universe size and its pairs.
fn split_input(text: &[u8], len: Option<usize>) -> Result<(usize, Pairs<'_>)> {
    match len {
        Some(len) => Ok((len, Pairs::new(text))),
        None => split_len(text)
            .context("the input does not start with the number of elements; pass --len"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    // Read as bytes; a token that is not UTF-8 ends the pairs like any malformed token.
    let text = match &cli.input {
        Some(path) => fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = Vec::new();
            io::stdin().read_to_end(&mut text).context("failed to read standard input")?;
            text
        },
    };

    let (len, pairs) = split_input(&text, cli.len)?;

    let algorithms = if cli.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algorithms
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for algorithm in algorithms {
        let report = algorithm.run(len, pairs.clone())
            .with_context(|| format!("{} failed", algorithm))?;

        if cli.quiet {
            write!(out, "{}", report.summary())?;
        } else {
            write!(out, "{}", report)?;
        }
    }

    Ok(())
}
