use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use wordflow::{DEFAULT_WIDTH, WrapOptions, rewrite, wrap_bytes_with, wrap_reader};

#[derive(Parser)]
#[command(version, about = "Reflow text so that no line exceeds a given width")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Text files to wrap; standard input is used when none are given
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct FormatOpts {
    /// Maximum line width in characters; 0 disables wrapping
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Expand tabs to stops every N columns; 0 keeps tabs
    #[arg(short, long = "tab-width", default_value_t = 0)]
    tab_width: usize,
    /// Prefix written at the start of every wrapped line after the first
    #[arg(short, long, default_value = "")]
    prefix: String,
    /// Also write the prefix before the first line
    #[arg(long = "first-prefix")]
    first_prefix: bool,
    /// Extra characters after which a line may break, such as "-/"
    #[arg(short, long, default_value = "")]
    breakpoints: String,
    /// Columns already used on the first line; negative values lengthen it
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    position: isize,
}

impl From<&FormatOpts> for WrapOptions {
    fn from(opts: &FormatOpts) -> Self {
        WrapOptions::new(opts.width)
            .tab_width(opts.tab_width)
            .prefix(opts.prefix.as_str())
            .first_line_prefix(opts.first_prefix)
            .breakpoints(opts.breakpoints.as_str())
            .position(opts.position)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn wrap_stdin(opts: &WrapOptions) -> anyhow::Result<()> {
    let mut stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let read = wrap_reader(&mut stdin, stdout, opts).context("failed to wrap standard input")?;
    debug!(bytes = read, "wrapped standard input");
    Ok(())
}

fn rewrite_all(files: &[PathBuf], opts: &WrapOptions) -> anyhow::Result<()> {
    let results: Vec<anyhow::Result<()>> = files
        .par_iter()
        .map(|path| {
            rewrite(path, opts).with_context(|| format!("failed to rewrite {}", path.display()))
        })
        .collect();
    first_error(results)
}

fn print_all(files: &[PathBuf], opts: &WrapOptions) -> anyhow::Result<()> {
    let results: Vec<anyhow::Result<Vec<u8>>> = files
        .par_iter()
        .map(|path| {
            let text =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            Ok(wrap_bytes_with(&text, opts))
        })
        .collect();

    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut outcomes = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(wrapped) => {
                stdout.write_all(&wrapped)?;
                outcomes.push(Ok(()));
            }
            Err(err) => outcomes.push(Err(err)),
        }
    }
    stdout.flush()?;
    first_error(outcomes)
}

/// Report every failure and return the first one.
fn first_error(results: impl IntoIterator<Item = anyhow::Result<()>>) -> anyhow::Result<()> {
    let mut errors = results.into_iter().filter_map(Result::err);
    let Some(first) = errors.next() else {
        return Ok(());
    };
    for err in errors {
        error!("{err:#}");
    }
    Err(first)
}

/// Entry point for the command-line tool that wraps text to a given width.
///
/// Reads standard input when no files are given and streams the wrapped text
/// to standard output. Files are wrapped in parallel and printed in argument
/// order, or rewritten in place with `--in-place`.
///
/// # Examples
///
/// ```sh
/// # Wrap a file to 72 columns and print it
/// wordflow --width 72 notes.txt
///
/// # Quote a message, rewriting it in place
/// wordflow --prefix "> " --first-prefix --in-place reply.txt
///
/// # Wrap standard input
/// fortune | wordflow -w 40
/// ```
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let opts = WrapOptions::from(&cli.opts);

    if cli.files.is_empty() {
        return wrap_stdin(&opts);
    }
    if cli.in_place {
        rewrite_all(&cli.files, &opts)
    } else {
        print_all(&cli.files, &opts)
    }
}
