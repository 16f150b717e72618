use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use linediff::areas::options::{DEFAULT_MAX_LINES, DiffOptions};
use linediff::areas::session::Session;
use linediff::artifacts::core::ColorMode;
use linediff::artifacts::diff::format::DiffMode;
use linediff::artifacts::diff::hunk::DEFAULT_CONTEXT;
use linediff::artifacts::lines::filter::LineFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Exit status for trouble, as opposed to 0 (identical) and 1 (different).
const TROUBLE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare files line by line",
    long_about = "Compare two files line by line using Myers' diff algorithm and print \
    the differences in normal or unified format. Marker lines and blank lines can be \
    filtered out of both files before they are compared.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        value_name = "FILE",
        help = "The files to compare (one with --print); '-' reads standard input"
    )]
    files: Vec<PathBuf>,
    #[arg(short, long, help = "Output in unified format with 3 lines of context")]
    unified: bool,
    #[arg(
        short = 'U',
        long = "context",
        value_name = "NUM",
        help = "Output in unified format with NUM lines of context"
    )]
    context: Option<usize>,
    #[arg(
        long,
        value_enum,
        default_value_t = ColorMode::Auto,
        help = "When to color the output"
    )]
    color: ColorMode,
    #[arg(
        short,
        long,
        value_name = "STR",
        help = "Ignore lines starting with STR after leading whitespace (quotes are stripped)"
    )]
    marker: Option<String>,
    #[arg(short = 'B', long = "skip-empty", help = "Ignore lines that are empty or whitespace only")]
    skip_empty: bool,
    #[arg(short = 'q', long, help = "Report only whether the files differ")]
    brief: bool,
    #[arg(
        long,
        conflicts_with_all = ["unified", "context", "brief"],
        help = "Print a single file as it is compared, after filtering"
    )]
    print: bool,
    #[arg(long = "strip-trailing-cr", help = "Strip trailing carriage returns from lines")]
    strip_cr: bool,
    #[arg(
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_MAX_LINES,
        help = "Refuse to compare files with more than NUM lines in total"
    )]
    max_lines: usize,
    #[arg(short, long, action = ArgAction::Count, help = "Log progress to stderr (repeat for more detail)")]
    verbose: u8,
}

impl Cli {
    fn check_file_count(&self) {
        let expected = if self.print { 1 } else { 2 };
        if self.files.len() != expected {
            Cli::command()
                .error(
                    ErrorKind::WrongNumberOfValues,
                    format!(
                        "expected {expected} file argument(s), got {}",
                        self.files.len()
                    ),
                )
                .exit();
        }
    }

    fn options(&self) -> DiffOptions {
        let mode = if self.unified || self.context.is_some() {
            DiffMode::Unified {
                context: self.context.unwrap_or(DEFAULT_CONTEXT),
            }
        } else {
            DiffMode::Normal
        };

        DiffOptions {
            mode,
            color: self.color.enabled(),
            filter: LineFilter::from_args(self.marker.as_deref(), self.skip_empty),
            strip_cr: self.strip_cr,
            max_lines: self.max_lines,
            brief: self.brief,
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let pwd = std::env::current_dir()?;
    let session = Session::new(
        &pwd.to_string_lossy(),
        Box::new(std::io::stdout()),
        cli.options(),
    )?;

    if cli.print {
        session.print_file(&cli.files[0])?;
        return Ok(0);
    }

    let status = session.diff(&cli.files[0], &cli.files[1])?;
    Ok(status.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.check_file_count();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("linediff: {error:#}");
            ExitCode::from(TROUBLE)
        }
    }
}
