//! Coverage module
//!
//! Provides:
//! - Clover XML report reading
//! - Threshold gate

mod clover;
mod threshold;

pub use clover::*;
pub use threshold::*;

/// Project-wide counters taken from a coverage report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoverageReport {
    pub covered_statements: u64,
    pub total_statements: u64,
    pub covered_methods: u64,
    pub total_methods: u64,
}

impl CoverageReport {
    pub fn statement_ratio(&self) -> CoverageRatio {
        CoverageRatio::new(self.covered_statements, self.total_statements)
    }

    pub fn method_ratio(&self) -> CoverageRatio {
        CoverageRatio::new(self.covered_methods, self.total_methods)
    }
}

/// Fraction of measured units exercised by tests, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CoverageRatio(f64);

impl CoverageRatio {
    /// `total` must be non-zero; the report reader rejects zero totals.
    pub fn new(covered: u64, total: u64) -> Self {
        Self(covered as f64 / total as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn percentage(self) -> f64 {
        self.0 * 100.0
    }
}

/// One decimal place, dropped when the rounded value is whole: `92`, `80.1`
pub fn format_percentage(percentage: f64) -> String {
    let rounded = format!("{:.1}", percentage);
    match rounded.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_from_report() {
        let report = CoverageReport {
            covered_statements: 92,
            total_statements: 100,
            covered_methods: 3,
            total_methods: 4,
        };

        assert_eq!(report.statement_ratio().value(), 0.92);
        assert_eq!(report.method_ratio().value(), 0.75);
        assert!((report.method_ratio().percentage() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(92.0), "92");
        assert_eq!(format_percentage(0.29 * 100.0), "29");
        assert_eq!(format_percentage(80.1), "80.1");
        assert_eq!(format_percentage(79.99), "80");
    }
}
