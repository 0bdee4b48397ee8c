//! Badge module
//!
//! Provides:
//! - Color tiers and percentage labels for coverage ratios
//! - Badge image downloads

mod fetcher;

pub use fetcher::*;

use std::fmt;

use crate::coverage::{format_percentage, CoverageRatio};

/// Color tier of a coverage badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Yellow,
    Green,
    BrightGreen,
}

impl BadgeColor {
    /// Lower bounds are inclusive: 0.60 is yellow, 0.80 green, 0.92 brightgreen
    pub fn from_ratio(ratio: CoverageRatio) -> Self {
        let value = ratio.value();
        if value < 0.6 {
            BadgeColor::Red
        } else if value < 0.8 {
            BadgeColor::Yellow
        } else if value < 0.92 {
            BadgeColor::Green
        } else {
            BadgeColor::BrightGreen
        }
    }

    /// Color name understood by shields.io
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Red => "red",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Green => "green",
            BadgeColor::BrightGreen => "brightgreen",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and color of one badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Percentage with the percent sign already escaped, e.g. `92%25`
    pub label: String,
    pub color: BadgeColor,
}

impl Badge {
    pub fn from_ratio(ratio: CoverageRatio) -> Self {
        Self {
            label: format_label(ratio),
            color: BadgeColor::from_ratio(ratio),
        }
    }
}

/// Render a ratio as a URL-ready percentage label.
///
/// The percentage is rounded to one decimal with `{:.1}`, which rounds the
/// exact binary value (ties to even). Whole results drop the decimal, so
/// 0.8 gives `80%25` and 0.801 gives `80.1%25`.
pub fn format_label(ratio: CoverageRatio) -> String {
    format!("{}%25", format_percentage(ratio.percentage()))
}
