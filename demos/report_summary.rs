//! Flatten a small department report and print it as one line.

use rollcall::{join, Report};

fn main() -> anyhow::Result<()> {
    let report = Report::new()
        .with_department("engineering", ["Guillaume", "Joseph", "Paul", "Filipe", "Kevin"])?
        .with_department("design", ["Angela", "Jonathan"])?
        .with_department("marketing", ["Katie", "Anna"])?;

    let mut employees = report.employees_iter();
    println!("{} employees", employees.source_len());
    println!("{}", join(&mut employees, " | "));

    // Exhausted: a second pass only sees completion.
    assert!(employees.pull().is_done());

    Ok(())
}
