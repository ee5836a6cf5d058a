//! Plain-text report format
//!
//! ```text
//! # comment
//! engineering: Guillaume, Joseph, Paul
//! marketing: Katie, Anna
//! ```
//!
//! One department per line, employees comma-separated. Blank lines and
//! `#` comments are skipped.

use std::str::FromStr;

use tracing::debug;

use super::{Report, ReportError};

impl Report {
    /// Parse a report from its text form.
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let mut report = Report::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, rest) = line
                .split_once(':')
                .ok_or(ReportError::MissingSeparator { line: line_no })?;

            let employees: Vec<String> = if rest.trim().is_empty() {
                Vec::new()
            } else {
                rest.split(',').map(|entry| entry.trim().to_string()).collect()
            };

            debug!(
                line = line_no,
                department = name.trim(),
                employees = employees.len(),
                "parsed department"
            );
            report.insert(line_no, name, employees)?;
        }

        debug!(
            departments = report.departments.len(),
            employees = report.employee_count(),
            "report parsed"
        );
        Ok(report)
    }
}

impl FromStr for Report {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let text = "# staff\n\nengineering: Ann, Bob\n  \nsales:Cy\n";
        let report = Report::parse(text).expect("parse succeeds");
        let names: Vec<&str> = report.iter().collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cy"]);
    }

    #[test]
    fn test_parse_reports_line_of_missing_separator() {
        let err = Report::parse("a: x\n\nno separator here").unwrap_err();
        assert_eq!(err, ReportError::MissingSeparator { line: 3 });
        assert_eq!(err.to_string(), "line 3: expected `department: name, name, ...`");
    }

    #[test]
    fn test_parse_rejects_trailing_comma() {
        let err = Report::parse("ops: Ann,").unwrap_err();
        assert_eq!(
            err,
            ReportError::EmptyEmployee {
                line: 1,
                department: "ops".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_department() {
        let report: Report = "hr:".parse().expect("parse succeeds");
        assert_eq!(report.departments()[0].employees.len(), 0);
    }
}
