//! Department reports
//!
//! A report maps department names to ordered employee lists. Iterating a
//! report visits departments in insertion order and, inside each, the
//! employees in the order they were listed.

mod parse;

use thiserror::Error;

use crate::sequence::SequenceIterator;

/// Errors that can occur while building or parsing a report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Line has no `:` between department and employees.
    #[error("line {line}: expected `department: name, name, ...`")]
    MissingSeparator {
        /// 1-based line number
        line: usize,
    },

    /// Department name is blank.
    #[error("line {line}: department name is empty")]
    EmptyDepartment {
        /// 1-based line number (0 when added programmatically)
        line: usize,
    },

    /// An employee entry is blank, e.g. `Sales: Ann, , Bob`.
    #[error("line {line}: empty employee name in department {department}")]
    EmptyEmployee {
        /// 1-based line number (0 when added programmatically)
        line: usize,
        /// Department holding the blank entry
        department: String,
    },

    /// The same department appears twice.
    #[error("line {line}: department {department} already defined")]
    DuplicateDepartment {
        /// 1-based line number (0 when added programmatically)
        line: usize,
        /// Repeated department name
        department: String,
    },
}

/// One department and its employees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Department {
    /// Department name
    pub name: String,
    /// Employees, in listing order
    pub employees: Vec<String>,
}

/// Ordered collection of departments.
///
/// Deserialization goes through [`Report::try_from`], so the same name
/// checks apply as for [`Report::add_department`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Department>", into = "Vec<Department>")
)]
pub struct Report {
    departments: Vec<Department>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self {
            departments: Vec::new(),
        }
    }

    /// Builder form of [`Report::add_department`].
    pub fn with_department<I, S>(mut self, name: &str, employees: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_department(name, employees)?;
        Ok(self)
    }

    /// Append a department after the existing ones.
    pub fn add_department<I, S>(&mut self, name: &str, employees: I) -> Result<(), ReportError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(0, name, employees.into_iter().map(Into::into).collect())
    }

    fn insert(&mut self, line: usize, name: &str, employees: Vec<String>) -> Result<(), ReportError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReportError::EmptyDepartment { line });
        }
        if self.department(name).is_some() {
            return Err(ReportError::DuplicateDepartment {
                line,
                department: name.to_string(),
            });
        }
        let employees: Vec<String> = employees
            .into_iter()
            .map(|employee| employee.trim().to_string())
            .collect();
        if employees.iter().any(String::is_empty) {
            return Err(ReportError::EmptyEmployee {
                line,
                department: name.to_string(),
            });
        }

        self.departments.push(Department {
            name: name.to_string(),
            employees,
        });
        Ok(())
    }

    /// Departments in insertion order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Look up a department by name.
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|department| department.name == name)
    }

    /// Total employees across all departments.
    pub fn employee_count(&self) -> usize {
        self.departments
            .iter()
            .map(|department| department.employees.len())
            .sum()
    }

    /// Borrowing iterator over the flattened employee list.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.departments
            .iter()
            .flat_map(|department| department.employees.iter().map(String::as_str))
    }

    /// Pull-based iterator over all employees, department by department.
    pub fn employees_iter(&self) -> SequenceIterator<&str> {
        SequenceIterator::new(self.iter())
    }
}

impl TryFrom<Vec<Department>> for Report {
    type Error = ReportError;

    fn try_from(departments: Vec<Department>) -> Result<Self, Self::Error> {
        let mut report = Report::new();
        for department in departments {
            report.add_department(&department.name, department.employees)?;
        }
        Ok(report)
    }
}

impl From<Report> for Vec<Department> {
    fn from(report: Report) -> Self {
        report.departments
    }
}
