//! Report → gate → badges

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::badge::{download_badge, Badge, BadgeClient};
use crate::config::Config;
use crate::coverage::{check_threshold, read_report, GateOutcome};

/// How a pipeline run ended
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Statement coverage under the threshold; nothing was fetched
    BelowThreshold(GateOutcome),
    Published {
        statements: Badge,
        methods: Badge,
        files: Vec<PathBuf>,
    },
}

impl PipelineOutcome {
    pub fn success(&self) -> bool {
        matches!(self, PipelineOutcome::Published { .. })
    }
}

/// Read the report, apply the gate, then fetch both badges in order
pub fn run(config: &Config, client: &dyn BadgeClient) -> Result<PipelineOutcome> {
    let report = read_report(&config.report)?;

    let statements_ratio = report.statement_ratio();
    let gate = check_threshold(statements_ratio, config.threshold);
    gate.print_summary();
    if !gate.passed() {
        return Ok(PipelineOutcome::BelowThreshold(gate));
    }

    let methods_ratio = report.method_ratio();
    println!(
        "  {} Methods coverage: {:.1}%",
        "•".dimmed(),
        methods_ratio.percentage()
    );

    let statements = Badge::from_ratio(statements_ratio);
    let methods = Badge::from_ratio(methods_ratio);

    let files = vec![config.statements_path(), config.methods_path()];
    download_badge(
        client,
        &config.endpoint,
        &config.statements.caption,
        &statements,
        &files[0],
    )?;
    download_badge(
        client,
        &config.endpoint,
        &config.methods.caption,
        &methods,
        &files[1],
    )?;

    Ok(PipelineOutcome::Published {
        statements,
        methods,
        files,
    })
}
