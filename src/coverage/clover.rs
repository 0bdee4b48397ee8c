//! Clover XML report reader
//!
//! The project-wide counters live in the last child of the root's first
//! child, i.e. the `<metrics>` element that closes `<project>`:
//!
//! ```xml
//! <coverage>
//!   <project>
//!     <file name="...">...</file>
//!     <metrics statements="100" coveredstatements="92" methods="10" coveredmethods="9"/>
//!   </project>
//! </coverage>
//! ```

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::CoverageReport;
use crate::errors::ReportError;

/// Read a Clover XML report from disk
pub fn read_report(path: &Path) -> Result<CoverageReport, ReportError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::NotFound(path.to_path_buf()),
        _ => ReportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_report_str(&content)
}

/// Parse Clover XML content from a string
pub fn parse_report_str(content: &str) -> Result<CoverageReport, ReportError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut locator = RecordLocator::default();
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                locator.open(e, depth);
            }
            Ok(Event::Empty(ref e)) => {
                locator.open(e, depth + 1);
                locator.close(depth + 1);
            }
            Ok(Event::End(_)) => {
                locator.close(depth);
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ReportError::format(format!(
                    "malformed XML at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    locator
        .record
        .ok_or_else(|| ReportError::format("no metrics record under the project element"))?
        .into_report()
}

/// Tracks the last child element of the root's first child
#[derive(Default)]
struct RecordLocator {
    project_seen: bool,
    in_project: bool,
    record: Option<MetricsRecord>,
}

impl RecordLocator {
    fn open(&mut self, e: &BytesStart, level: usize) {
        match level {
            2 if !self.project_seen => {
                self.project_seen = true;
                self.in_project = true;
            }
            3 if self.in_project => {
                self.record = Some(MetricsRecord::from_element(e));
            }
            _ => {}
        }
    }

    fn close(&mut self, level: usize) {
        if level == 2 {
            self.in_project = false;
        }
    }
}

/// Raw attribute values of the metrics record
#[derive(Debug, Default)]
struct MetricsRecord {
    element: String,
    covered_statements: Option<String>,
    statements: Option<String>,
    covered_methods: Option<String>,
    methods: Option<String>,
}

impl MetricsRecord {
    fn from_element(e: &BytesStart) -> Self {
        let mut record = MetricsRecord {
            element: String::from_utf8_lossy(e.name().as_ref()).to_string(),
            ..Default::default()
        };

        for attr in e.attributes().filter_map(|a| a.ok()) {
            let value = String::from_utf8_lossy(&attr.value).to_string();
            match attr.key.as_ref() {
                b"coveredstatements" => record.covered_statements = Some(value),
                b"statements" => record.statements = Some(value),
                b"coveredmethods" => record.covered_methods = Some(value),
                b"methods" => record.methods = Some(value),
                _ => {}
            }
        }

        record
    }

    fn into_report(self) -> Result<CoverageReport, ReportError> {
        let element = self.element.as_str();
        let report = CoverageReport {
            covered_statements: counter(element, "coveredstatements", self.covered_statements)?,
            total_statements: counter(element, "statements", self.statements)?,
            covered_methods: counter(element, "coveredmethods", self.covered_methods)?,
            total_methods: counter(element, "methods", self.methods)?,
        };

        if report.total_statements == 0 {
            return Err(ReportError::format("report declares zero statements"));
        }
        if report.total_methods == 0 {
            return Err(ReportError::format("report declares zero methods"));
        }

        Ok(report)
    }
}

fn counter(element: &str, name: &str, value: Option<String>) -> Result<u64, ReportError> {
    let value = value.ok_or_else(|| {
        ReportError::format(format!("<{}> has no '{}' attribute", element, name))
    })?;

    value.trim().parse::<u64>().map_err(|_| {
        ReportError::format(format!(
            "'{}' on <{}> is not a non-negative integer: {:?}",
            name, element, value
        ))
    })
}
