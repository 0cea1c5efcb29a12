//! Static staff reference data: employees and their single production role.

use super::{BoardDomainError, EmployeeId, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A person eligible for task assignment under exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    role: Role,
}

impl Employee {
    /// Creates an employee record.
    #[must_use]
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the employee's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the single role the employee belongs to.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the employee's full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Errors returned while loading a staff directory from configuration.
#[derive(Debug, Error)]
pub enum DirectoryLoadError {
    /// The configuration payload is not valid JSON.
    #[error("invalid staff directory payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The directory entries violate a domain invariant.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Immutable directory of employees, keyed by identifier.
///
/// Loaded once at process start and injected into the board service;
/// there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffDirectory {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl StaffDirectory {
    /// Creates a directory from employee records.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateEmployee`] when two records share
    /// an identifier.
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Result<Self, BoardDomainError> {
        let mut indexed = BTreeMap::new();
        for employee in employees {
            let id = employee.id();
            if indexed.insert(id, employee).is_some() {
                return Err(BoardDomainError::DuplicateEmployee(id));
            }
        }
        Ok(Self { employees: indexed })
    }

    /// Loads a directory from a JSON array of employee records.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryLoadError::Parse`] for malformed JSON and
    /// [`DirectoryLoadError::Domain`] for duplicate identifiers.
    pub fn from_json(payload: &str) -> Result<Self, DirectoryLoadError> {
        let employees: Vec<Employee> = serde_json::from_str(payload)?;
        Ok(Self::new(employees)?)
    }

    /// Returns the sample content-production roster.
    #[must_use]
    pub fn content_production() -> Self {
        let roster = [
            (1, "Alice", "Johnson", Role::Scriptwriting),
            (2, "Bob", "Smith", Role::Scriptwriting),
            (3, "Charlie", "Brown", Role::Scriptwriting),
            (4, "Dave", "Wilson", Role::Voiceover),
            (5, "Grace", "Miller", Role::FileOrganization),
            (6, "Judy", "Davis", Role::VideoEdit),
            (7, "Karl", "Anderson", Role::VideoEdit),
            (8, "Liam", "Moore", Role::VideoEdit),
            (9, "Mallory", "Taylor", Role::Thumbnail),
            (10, "Niaj", "Thomas", Role::Thumbnail),
            (11, "Olivia", "Jackson", Role::Thumbnail),
        ];

        let employees = roster
            .into_iter()
            .map(|(id, first, last, role)| {
                let employee = Employee::new(EmployeeId::new(id), first, last, role);
                (employee.id(), employee)
            })
            .collect();
        Self { employees }
    }

    /// Looks up an employee by identifier.
    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Returns whether the directory contains the identifier.
    #[must_use]
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    /// Iterates over all employees in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Iterates over the employees holding the given role.
    pub fn employees_in_role(&self, role: Role) -> impl Iterator<Item = &Employee> {
        self.employees
            .values()
            .filter(move |employee| employee.role() == role)
    }

    /// Returns the only employee in the role, if the role has exactly one.
    #[must_use]
    pub fn sole_member(&self, role: Role) -> Option<&Employee> {
        let mut members = self.employees_in_role(role);
        let first = members.next()?;
        members.next().is_none().then_some(first)
    }

    /// Validates that the employee exists and holds the targeted role.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownEmployee`] for identifiers absent
    /// from the directory and [`BoardDomainError::RoleMismatch`] when the
    /// employee belongs to a different role.
    pub fn validate_assignment(
        &self,
        role: Role,
        employee_id: EmployeeId,
    ) -> Result<(), BoardDomainError> {
        let employee = self
            .get(employee_id)
            .ok_or(BoardDomainError::UnknownEmployee(employee_id))?;
        if employee.role() != role {
            return Err(BoardDomainError::RoleMismatch {
                employee: employee_id,
                role,
            });
        }
        Ok(())
    }

    /// Returns the number of employees in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
