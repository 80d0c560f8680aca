use bigdiff::artifacts::options::{DEFAULT_MAX_TEXT_SIZE, Options};
use bigdiff::artifacts::size::{SizeError, parse_size};
use bigdiff::{Session, SessionError};
use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "bigdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Materialize the differences between two directory trees",
    long_about = "Compares a base tree with a target tree and writes a browsable output tree: \
    new files are marked '.new', removed files and directories '.deleted', \
    and changed text files are rewritten as '.modified' with inline DELETED/NEW annotations.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The base directory (A)")]
    base: PathBuf,
    #[arg(index = 2, help = "The target directory (B)")]
    target: PathBuf,
    #[arg(index = 3, help = "The output directory, created when missing")]
    output: PathBuf,
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        help = "Glob pattern to ignore (repeatable, or comma-separated)"
    )]
    ignore: Vec<String>,
    #[arg(
        short = 'E',
        long,
        help = "Normalize line endings (CRLF/CR to LF) before comparing text"
    )]
    normalize_eol: bool,
    #[arg(
        short = 'S',
        long,
        value_name = "SIZE",
        default_value = "5MB",
        help = "Largest file to line-diff, e.g. 5MB or 8MiB; bigger files are copied"
    )]
    max_text_size: String,
    #[arg(long, help = "Print what would be done without writing anything")]
    dry_run: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");

            if err.is::<SessionError>() || err.is::<SizeError>() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let max_text_size = parse_size(&cli.max_text_size)?;
    log::debug!(
        "text diff limit: {max_text_size} bytes (default {DEFAULT_MAX_TEXT_SIZE})"
    );

    let options = Options::new(cli.normalize_eol, max_text_size, cli.ignore, cli.dry_run);
    let session = Session::new(
        &cli.base,
        &cli.target,
        &cli.output,
        options,
        Box::new(std::io::stdout()),
    )?;

    if session.options().dry_run {
        session.preview()?;
    } else {
        session.run()?;
    }

    Ok(())
}
