use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use covbadge::{pipeline, Config, HttpBadgeClient, PipelineOutcome};

const CONFIG_FILE: &str = "covbadge.toml";

#[derive(Parser)]
#[command(name = "covbadge")]
#[command(about = "Coverage gate and badge generator for CI")]
#[command(version)]
struct Cli {
    /// Path to config file (default: covbadge.toml, optional)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let code = match run() {
        Ok(outcome) => exit_code(&outcome),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
}

/// Non-zero when the gate blocked the build
fn exit_code(outcome: &PipelineOutcome) -> i32 {
    if outcome.success() {
        0
    } else {
        1
    }
}

fn run() -> Result<PipelineOutcome> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load(&path)?,
        None => Config::load_or_default(Path::new(CONFIG_FILE))?,
    };

    println!(
        "\n{} {}",
        "📊".cyan(),
        config.report.display().to_string().bold()
    );

    let client = HttpBadgeClient::new()?;
    let outcome = pipeline::run(&config, &client)?;

    match &outcome {
        PipelineOutcome::BelowThreshold(gate) => {
            if let Some(message) = gate.failure_message() {
                eprintln!("{}", message.red().bold());
            }
        }
        PipelineOutcome::Published { files, .. } => {
            println!(
                "\n{} {} badges written",
                "✓".green(),
                files.len().to_string().bold()
            );
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covbadge::{check_threshold, Badge, CoverageRatio};

    #[test]
    fn test_exit_code_below_threshold() {
        let gate = check_threshold(CoverageRatio::new(91, 100), 0.92);
        assert_eq!(exit_code(&PipelineOutcome::BelowThreshold(gate)), 1);
    }

    #[test]
    fn test_exit_code_published() {
        let outcome = PipelineOutcome::Published {
            statements: Badge::from_ratio(CoverageRatio::new(92, 100)),
            methods: Badge::from_ratio(CoverageRatio::new(75, 100)),
            files: vec![PathBuf::from("code_coverage.svg")],
        };
        assert_eq!(exit_code(&outcome), 0);
    }
}
