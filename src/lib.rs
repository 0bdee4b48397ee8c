//! covbadge - coverage gate and badge generator
//!
//! Reads a Clover XML coverage report and:
//! - Fails the build when statement coverage is under the threshold
//! - Derives percentage labels and color tiers for statements and methods
//! - Downloads the matching badge images from shields.io

pub mod badge;
pub mod config;
pub mod coverage;
pub mod errors;
pub mod pipeline;

pub use badge::{badge_url, format_label, Badge, BadgeClient, BadgeColor, HttpBadgeClient};
pub use config::Config;
pub use coverage::{check_threshold, read_report, CoverageRatio, CoverageReport, GateOutcome};
pub use errors::ReportError;
pub use pipeline::{run, PipelineOutcome};
