use crate::config::{RunConfig, Settings};
use crate::core::pipeline::{self, SheetPlan};
use crate::error::RosterResult;
use crate::excel::formatter::RosterStyle;
use crate::launcher::{Launcher, NoLaunch, SystemLauncher};
use crate::types::OutputColumn;
use colored::Colorize;
use std::path::PathBuf;

/// Layer the optional config file under the command-line settings and resolve.
pub fn load_config(config_file: Option<PathBuf>, flags: Settings) -> RosterResult<RunConfig> {
    let base = match config_file {
        Some(path) => Settings::from_file(&path)?,
        None => Settings::default(),
    };
    base.merge(flags).resolve()
}

fn print_run_header(title: &str, config: &RunConfig) {
    println!("{}", title.bold().green());
    println!("   Input:  {}", config.input_file.display());
    println!("   Output: {}", config.output_file.display());
    println!("   Select: {}\n", config.mode.describe().bright_yellow());
}

/// Execute the build command
pub fn build(
    config_file: Option<PathBuf>,
    flags: Settings,
    dry_run: bool,
    no_open: bool,
    verbose: bool,
) -> RosterResult<()> {
    let config = load_config(config_file, flags)?;
    print_run_header("📋 NH Roster - Building onboarding sheet", &config);

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
        let plan = pipeline::plan(&config)?;
        print_plan_records(&plan);
        println!("{}", "📋 Dry run complete - no changes written".yellow());
        return Ok(());
    }

    if verbose {
        println!("{}", "📖 Reading FTE Hire sheet...".cyan());
    }

    let launcher: Box<dyn Launcher> = if no_open {
        Box::new(NoLaunch)
    } else {
        Box::new(SystemLauncher)
    };
    let result = pipeline::run(&config, &RosterStyle::default(), launcher.as_ref())?;

    if verbose {
        println!(
            "   {} row(s) written{}",
            result.rows_written,
            if result.replaced_existing {
                ", replacing the existing sheet"
            } else {
                ""
            }
        );
        println!("   Sheets: {}\n", result.sheet_names.join(", "));
    }

    if result.rows_written == 0 {
        println!(
            "{}",
            "⚠️  No hires matched - the sheet only has a header row".yellow()
        );
    }

    println!(
        "{}",
        format!(
            "✅ New Excel sheet '{}' created and formatted successfully in '{}'!",
            result.sheet_name,
            result.path.display()
        )
        .bold()
        .green()
    );

    Ok(())
}

/// Execute the preview command - show the batch without writing anything
pub fn preview(config_file: Option<PathBuf>, flags: Settings) -> RosterResult<()> {
    let config = load_config(config_file, flags)?;
    print_run_header("🔍 NH Roster - Preview", &config);

    let plan = pipeline::plan(&config)?;
    print_plan_table(&plan);
    Ok(())
}

const PREVIEW_COLUMNS: [OutputColumn; 6] = [
    OutputColumn::FullName,
    OutputColumn::Username,
    OutputColumn::EmailAlias,
    OutputColumn::FrontSetupNeeded,
    OutputColumn::StartDate,
    OutputColumn::StartTime,
];

fn print_plan_summary(plan: &SheetPlan) -> bool {
    println!(
        "   Sheet: {} ({} hire(s))\n",
        plan.sheet_name.bright_blue().bold(),
        plan.records.len()
    );
    if plan.records.is_empty() {
        println!("{}", "   No hires selected\n".yellow());
        return false;
    }
    true
}

/// Every column of every record, one block per hire.
fn print_plan_records(plan: &SheetPlan) {
    if !print_plan_summary(plan) {
        return;
    }
    let headers = plan.layout.headers();
    for (i, record) in plan.records.iter().enumerate() {
        println!("   {}", format!("#{}", i + 1).cyan());
        for (header, value) in headers.iter().zip(record.row(plan.layout.columns())) {
            println!("      {:<26} {}", header, value);
        }
    }
    println!();
}

/// Key derived fields as an aligned table.
fn print_plan_table(plan: &SheetPlan) {
    if !print_plan_summary(plan) {
        return;
    }

    let widths: Vec<usize> = PREVIEW_COLUMNS
        .iter()
        .map(|c| {
            plan.records
                .iter()
                .map(|r| r.value(*c).chars().count())
                .chain(std::iter::once(c.header().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = PREVIEW_COLUMNS
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:<w$}", c.header(), w = *w))
        .collect();
    println!("   {}", header.join("  ").bold());
    println!(
        "   {}",
        "─".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
    );
    for record in &plan.records {
        let line: Vec<String> = PREVIEW_COLUMNS
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", record.value(*c), w = *w))
            .collect();
        println!("   {}", line.join("  "));
    }
    println!();
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
