//! Report flattening and parsing through the public API

mod common;

use common::{read_fixture, staff_report};
use rollcall::{join_default, Report, ReportError, SequenceIterator};
use test_case::test_case;

#[test]
fn test_report_iterates_departments_in_order() {
    let report = staff_report();
    assert_eq!(
        join_default(report.employees_iter()),
        "Guillaume | Joseph | Paul | Katie | Anna | Anna-Kim"
    );
}

#[test]
fn test_report_iterator_can_be_used_in_for_loop() {
    let report = staff_report();
    let mut count = 0;
    for name in report.employees_iter() {
        assert!(!name.is_empty());
        count += 1;
    }
    assert_eq!(count, report.employee_count());
}

#[test]
fn test_report_iterator_is_not_restartable() {
    let report = staff_report();
    let mut it = report.employees_iter();
    assert_eq!(it.source_len(), 6);
    assert_eq!(join_default(&mut it), join_default(report.iter()));
    assert!(it.pull().is_done());

    let fresh: SequenceIterator<&str> = report.employees_iter();
    assert_eq!(fresh.remaining(), 6);
}

#[test]
fn test_fixture_round_trips_through_from_str() {
    let parsed: Report = read_fixture("staff.txt").parse().expect("parses");
    assert_eq!(parsed, staff_report());
    assert_eq!(
        parsed.department("marketing").map(|d| d.employees.len()),
        Some(3)
    );
}

#[test_case("ops Ann", ReportError::MissingSeparator { line: 1 } ; "missing colon")]
#[test_case("ok: A\n: B", ReportError::EmptyDepartment { line: 2 } ; "blank department")]
#[test_case(
    "ops: A\nops: B",
    ReportError::DuplicateDepartment { line: 2, department: "ops".to_string() }
    ; "duplicate department"
)]
#[test_case(
    "ops: A,,B",
    ReportError::EmptyEmployee { line: 1, department: "ops".to_string() }
    ; "blank employee"
)]
fn rejects_malformed_report(text: &str, expected: ReportError) {
    assert_eq!(Report::parse(text).unwrap_err(), expected);
}

#[test]
fn test_empty_report_joins_to_empty_string() {
    let report = Report::parse("# nothing here\n\n").expect("parses");
    assert!(report.departments().is_empty());
    assert_eq!(join_default(report.employees_iter()), "");
}
