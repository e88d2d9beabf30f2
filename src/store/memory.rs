//! In-memory record store for handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::department::{Department, DepartmentRecord};
use crate::model::employee::{Employee, EmployeeRecord};
use crate::model::leave::{Leave, LeaveChanges, LeaveDates, NewLeave};
use crate::model::user::{NewUser, User};
use crate::store::{DepartmentStore, EmployeeStore, LeaveStore, UserStore};

fn employee_row(id: u64, r: &EmployeeRecord) -> Employee {
    Employee {
        id,
        name: r.name.clone(),
        office: r.office.clone(),
        email: r.email.clone(),
        salary: r.salary,
        role: r.role.clone(),
        status: r.status.clone(),
        firstname: r.firstname.clone(),
        last_name: r.last_name.clone(),
        position: r.position.clone(),
        team: r.team.clone(),
        department_id: Some(r.department_id),
        joining_date: r.joining_date,
        invite_email: r.invite_email,
        employment_type: r.employment_type.clone(),
        country_of_employment: r.country_of_employment.clone(),
        line_manager: r.line_manager.clone(),
        currency: r.currency.clone(),
        frequency: r.frequency.clone(),
    }
}

fn department_row(id: u64, r: &DepartmentRecord) -> Department {
    Department {
        id,
        name: r.name.clone(),
        status: r.status.clone(),
        description: r.description.clone(),
    }
}

#[derive(Default)]
struct Tables {
    next_id: u64,
    employees: BTreeMap<u64, Employee>,
    leaves: BTreeMap<u64, Leave>,
    departments: BTreeMap<u64, Department>,
    users: BTreeMap<u64, User>,
}

impl Tables {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_with: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later call fail as if the database were unreachable.
    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(StoreError::Database(sqlx::Error::Protocol(message)));
        }
        Ok(self.tables.lock().unwrap())
    }

    pub fn leave(&self, id: u64) -> Option<Leave> {
        self.tables.lock().unwrap().leaves.get(&id).cloned()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn insert_employee(&self, record: &EmployeeRecord) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        let id = t.next_id();
        t.employees.insert(id, employee_row(id, record));
        Ok(id)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.tables()?.employees.values().cloned().collect())
    }

    async fn find_employee(&self, id: u64) -> Result<Option<Employee>, StoreError> {
        Ok(self.tables()?.employees.get(&id).cloned())
    }

    async fn update_employee(&self, id: u64, record: &EmployeeRecord) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        match t.employees.get_mut(&id) {
            Some(row) => {
                *row = employee_row(id, record);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_employee(&self, id: u64) -> Result<u64, StoreError> {
        Ok(self.tables()?.employees.remove(&id).map_or(0, |_| 1))
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn insert_leave(&self, leave: &NewLeave) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        let id = t.next_id();
        t.leaves.insert(
            id,
            Leave {
                id,
                employee_id: leave.employee_id,
                start_date: leave.start_date,
                end_date: leave.end_date,
                duration: leave.duration,
                status: leave.status.clone(),
                reason: leave.reason.clone(),
                leave_type: Some(leave.leave_type.clone()),
            },
        );
        Ok(id)
    }

    async fn list_leaves(&self) -> Result<Vec<Leave>, StoreError> {
        Ok(self.tables()?.leaves.values().cloned().collect())
    }

    async fn list_leaves_for_employee(&self, employee_id: u64) -> Result<Vec<Leave>, StoreError> {
        Ok(self
            .tables()?
            .leaves
            .values()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn find_leave(&self, id: u64) -> Result<Option<Leave>, StoreError> {
        Ok(self.tables()?.leaves.get(&id).cloned())
    }

    async fn find_leave_dates(&self, id: u64) -> Result<Option<LeaveDates>, StoreError> {
        Ok(self.tables()?.leaves.get(&id).map(|l| LeaveDates {
            start_date: l.start_date,
            end_date: l.end_date,
        }))
    }

    async fn update_leave(&self, id: u64, changes: &LeaveChanges) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        match t.leaves.get_mut(&id) {
            Some(row) => {
                row.start_date = changes.start_date;
                row.end_date = changes.end_date;
                row.duration = changes.duration;
                row.status = changes.status.clone();
                row.reason = changes.reason.clone();
                row.leave_type = changes.leave_type.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_leave(&self, id: u64) -> Result<u64, StoreError> {
        Ok(self.tables()?.leaves.remove(&id).map_or(0, |_| 1))
    }
}

#[async_trait]
impl DepartmentStore for MemoryStore {
    async fn insert_department(&self, record: &DepartmentRecord) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        let id = t.next_id();
        t.departments.insert(id, department_row(id, record));
        Ok(id)
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        Ok(self.tables()?.departments.values().cloned().collect())
    }

    async fn find_department(&self, id: u64) -> Result<Option<Department>, StoreError> {
        Ok(self.tables()?.departments.get(&id).cloned())
    }

    async fn update_department(
        &self,
        id: u64,
        record: &DepartmentRecord,
    ) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        match t.departments.get_mut(&id) {
            Some(row) => {
                *row = department_row(id, record);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_department(&self, id: u64) -> Result<u64, StoreError> {
        Ok(self.tables()?.departments.remove(&id).map_or(0, |_| 1))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: &NewUser) -> Result<u64, StoreError> {
        let mut t = self.tables()?;
        if t.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(format!(
                "Duplicate entry '{}' for key 'users.email'",
                user.email
            )));
        }
        let id = t.next_id();
        t.users.insert(
            id,
            User {
                id,
                username: user.username.clone(),
                email: user.email.clone(),
                password: user.password_hash.clone(),
            },
        );
        Ok(id)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .tables()?
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}
