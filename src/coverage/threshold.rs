//! Statement coverage gate

use colored::Colorize;

use super::{format_percentage, CoverageRatio};

/// Minimum statement coverage accepted by the gate
pub const DEFAULT_THRESHOLD: f64 = 0.92;

/// Result of the threshold gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateOutcome {
    Passed {
        ratio: CoverageRatio,
        threshold: f64,
    },
    Failed {
        ratio: CoverageRatio,
        threshold: f64,
    },
}

impl GateOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, GateOutcome::Passed { .. })
    }

    pub fn print_summary(&self) {
        let (status, ratio, threshold) = match *self {
            GateOutcome::Passed { ratio, threshold } => ("✓".green(), ratio, threshold),
            GateOutcome::Failed { ratio, threshold } => ("✗".red(), ratio, threshold),
        };

        let delta = ratio.percentage() - threshold * 100.0;
        let delta_str = if delta >= 0.0 {
            format!("+{:.1}%", delta).green()
        } else {
            format!("{:.1}%", delta).red()
        };

        println!(
            "  {} Code coverage: {:.1}% (threshold: {:.1}%, {})",
            status,
            ratio.percentage(),
            threshold * 100.0,
            delta_str
        );
    }

    /// Diagnostic printed when the gate blocks the build
    pub fn failure_message(&self) -> Option<String> {
        match *self {
            GateOutcome::Failed { threshold, .. } => {
                Some(format!("Code coverage < {}%", format_percentage(threshold * 100.0)))
            }
            GateOutcome::Passed { .. } => None,
        }
    }
}

/// Compare statement coverage against the threshold; equal passes
pub fn check_threshold(ratio: CoverageRatio, threshold: f64) -> GateOutcome {
    if ratio.value() < threshold {
        GateOutcome::Failed { ratio, threshold }
    } else {
        GateOutcome::Passed { ratio, threshold }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let at = check_threshold(CoverageRatio::new(92, 100), DEFAULT_THRESHOLD);
        assert!(at.passed());

        let below = check_threshold(CoverageRatio::new(91, 100), DEFAULT_THRESHOLD);
        assert!(!below.passed());
        assert_eq!(below.failure_message().as_deref(), Some("Code coverage < 92%"));
    }

    #[test]
    fn test_custom_threshold() {
        let ratio = CoverageRatio::new(9199, 10000);
        assert!(!check_threshold(ratio, DEFAULT_THRESHOLD).passed());
        assert!(check_threshold(ratio, 0.9).passed());

        let outcome = check_threshold(CoverageRatio::new(1, 2), 0.8);
        assert_eq!(outcome.failure_message().as_deref(), Some("Code coverage < 80%"));
    }

    #[test]
    fn test_failure_message_rounds_threshold() {
        let outcome = check_threshold(CoverageRatio::new(1, 10), 0.29);
        assert_eq!(outcome.failure_message().as_deref(), Some("Code coverage < 29%"));

        let outcome = check_threshold(CoverageRatio::new(1, 10), 0.755);
        assert_eq!(outcome.failure_message().as_deref(), Some("Code coverage < 75.5%"));
    }

    #[test]
    fn test_full_coverage_passes() {
        let outcome = check_threshold(CoverageRatio::new(7, 7), DEFAULT_THRESHOLD);
        assert!(outcome.passed());
        assert_eq!(outcome.failure_message(), None);
    }
}
