use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use nh_roster::cli;
use nh_roster::config::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nh-roster")]
#[command(about = "Build the IT onboarding sheet for a batch of new hires.")]
#[command(long_about = "NH Roster - new-hire onboarding sheets from the FTE Hire tracker

Reads the 'FTE Hire' sheet of the hiring tracker, picks a batch of hires,
derives usernames, email aliases and start times, and writes the batch as a
styled NH_<Month>_<DD>_<YYYY> sheet into the onboarding workbook.

SELECTING A BATCH:
  --start-date MM/DD/YYYY      Hires starting that day
                               (SPOC + Neo aliases, First Name column)
  --start-row N --end-row M    Tracker rows N..=M, 1-based, header excluded
                               (SPOC aliases, alias paragraph + Zoom columns)

COMMANDS:
  build     - Write the sheet into the onboarding workbook and open it
  preview   - Show the selected hires without writing anything

EXAMPLES:
  nh-roster build -i tracker.xlsx -o onboarding.xlsx --start-date 03/03/2025
  nh-roster build --config roster.yaml --no-open
  nh-roster preview -i tracker.xlsx -o onboarding.xlsx --start-row 12 --end-row 18")]
#[command(version)]
struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SelectionArgs {
    /// YAML config file (input_file, output_file, start_date | start_row + end_row)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hiring tracker workbook with an 'FTE Hire' sheet
    #[arg(short, long, env = "NH_ROSTER_INPUT")]
    input: Option<PathBuf>,

    /// Onboarding workbook to create or update (.xlsx)
    #[arg(short, long, env = "NH_ROSTER_OUTPUT")]
    output: Option<PathBuf>,

    /// Select hires starting on this date (MM/DD/YYYY)
    #[arg(long, env = "NH_ROSTER_START_DATE", conflicts_with_all = ["start_row", "end_row"])]
    start_date: Option<String>,

    /// First tracker row to select (1-based, header excluded)
    #[arg(long, requires = "end_row")]
    start_row: Option<usize>,

    /// Last tracker row to select (inclusive)
    #[arg(long, requires = "start_row")]
    end_row: Option<usize>,
}

impl SelectionArgs {
    fn split(self) -> (Option<PathBuf>, Settings) {
        let flags = Settings {
            input_file: self.input,
            output_file: self.output,
            start_date: self.start_date,
            start_row: self.start_row,
            end_row: self.end_row,
        };
        (self.config, flags)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Build the onboarding sheet and save it into the output workbook.

The output workbook is created if missing. A sheet with the same name is
replaced entirely; all other sheets are kept. The file is saved atomically
and then opened in the default spreadsheet viewer (skip with --no-open).

Two runs writing the same workbook at the same time are not coordinated:
the last one to save wins.")]
    /// Write the onboarding sheet into the output workbook
    Build {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Don't open the workbook after saving
        #[arg(long, env = "NH_ROSTER_NO_OPEN")]
        no_open: bool,

        /// Print the records without writing the workbook
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show the selected hires and their derived fields
    Preview {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "nh_roster=info"
    } else {
        "nh_roster=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            selection,
            no_open,
            dry_run,
        } => {
            let (config, flags) = selection.split();
            cli::build(config, flags, dry_run, no_open, cli.verbose)
        }

        Commands::Preview { selection } => {
            let (config, flags) = selection.split();
            cli::preview(config, flags)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red());
            if e.is_configuration() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
