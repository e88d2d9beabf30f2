//! Record store ports. Handlers receive these as `web::Data<dyn ...>` so the
//! MySQL backend can be swapped for the in-memory double in tests.

use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::department::{Department, DepartmentRecord};
use crate::model::employee::{Employee, EmployeeRecord};
use crate::model::leave::{Leave, LeaveChanges, LeaveDates, NewLeave};
use crate::model::user::{NewUser, User};

#[cfg(test)]
pub mod memory;
pub mod mysql;

/// Write operations return the number of matched rows; zero means "no such id".
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert_employee(&self, record: &EmployeeRecord) -> Result<u64, StoreError>;
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_employee(&self, id: u64) -> Result<Option<Employee>, StoreError>;
    async fn update_employee(&self, id: u64, record: &EmployeeRecord) -> Result<u64, StoreError>;
    async fn delete_employee(&self, id: u64) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn insert_leave(&self, leave: &NewLeave) -> Result<u64, StoreError>;
    async fn list_leaves(&self) -> Result<Vec<Leave>, StoreError>;
    async fn list_leaves_for_employee(&self, employee_id: u64) -> Result<Vec<Leave>, StoreError>;
    async fn find_leave(&self, id: u64) -> Result<Option<Leave>, StoreError>;
    async fn find_leave_dates(&self, id: u64) -> Result<Option<LeaveDates>, StoreError>;
    async fn update_leave(&self, id: u64, changes: &LeaveChanges) -> Result<u64, StoreError>;
    async fn delete_leave(&self, id: u64) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait DepartmentStore: Send + Sync {
    async fn insert_department(&self, record: &DepartmentRecord) -> Result<u64, StoreError>;
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError>;
    async fn find_department(&self, id: u64) -> Result<Option<Department>, StoreError>;
    async fn update_department(
        &self,
        id: u64,
        record: &DepartmentRecord,
    ) -> Result<u64, StoreError>;
    async fn delete_department(&self, id: u64) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`StoreError::Duplicate`] when the email is taken.
    async fn insert_user(&self, user: &NewUser) -> Result<u64, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// One handle per port, ready to register as app data.
#[derive(Clone)]
pub struct Stores {
    pub employees: Data<dyn EmployeeStore>,
    pub leaves: Data<dyn LeaveStore>,
    pub departments: Data<dyn DepartmentStore>,
    pub users: Data<dyn UserStore>,
}

impl Stores {
    pub fn new<S>(backend: Arc<S>) -> Self
    where
        S: EmployeeStore + LeaveStore + DepartmentStore + UserStore + 'static,
    {
        let employees: Arc<dyn EmployeeStore> = backend.clone();
        let leaves: Arc<dyn LeaveStore> = backend.clone();
        let departments: Arc<dyn DepartmentStore> = backend.clone();
        let users: Arc<dyn UserStore> = backend;

        Self {
            employees: Data::from(employees),
            leaves: Data::from(leaves),
            departments: Data::from(departments),
            users: Data::from(users),
        }
    }

    /// Registers every port on an app or scope.
    pub fn register(&self, cfg: &mut ServiceConfig) {
        cfg.app_data(self.employees.clone())
            .app_data(self.leaves.clone())
            .app_data(self.departments.clone())
            .app_data(self.users.clone());
    }
}
