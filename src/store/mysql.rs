use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::StoreError;
use crate::model::department::{Department, DepartmentRecord};
use crate::model::employee::{Employee, EmployeeRecord};
use crate::model::leave::{Leave, LeaveChanges, LeaveDates, NewLeave};
use crate::model::user::{NewUser, User};
use crate::store::{DepartmentStore, EmployeeStore, LeaveStore, UserStore};

const EMPLOYEE_COLUMNS: &str = r#"
    id, name, office, email, salary, role, status, firstname, lastName, position, team,
    departmentId, joiningDate, inviteEmail, employmentType, countryOfEmployment,
    lineManager, currency, frequency
"#;

const LEAVE_COLUMNS: &str =
    "id, employee_id, start_date, end_date, duration, status, reason, leave_type";

/// Record store backed by the MySQL pool.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    async fn insert_employee(&self, r: &EmployeeRecord) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees
                (name, office, email, salary, role, status, firstname, lastName, position, team,
                 departmentId, joiningDate, inviteEmail, employmentType, countryOfEmployment,
                 lineManager, currency, frequency)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&r.name)
        .bind(&r.office)
        .bind(&r.email)
        .bind(r.salary)
        .bind(&r.role)
        .bind(&r.status)
        .bind(&r.firstname)
        .bind(&r.last_name)
        .bind(&r.position)
        .bind(&r.team)
        .bind(r.department_id)
        .bind(r.joining_date)
        .bind(r.invite_email)
        .bind(&r.employment_type)
        .bind(&r.country_of_employment)
        .bind(&r.line_manager)
        .bind(&r.currency)
        .bind(&r.frequency)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id");
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_employee(&self, id: u64) -> Result<Option<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_employee(&self, id: u64, r: &EmployeeRecord) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                name = ?, office = ?, email = ?, salary = ?, role = ?, status = ?,
                firstname = ?, lastName = ?, position = ?, team = ?, departmentId = ?,
                joiningDate = ?, inviteEmail = ?, employmentType = ?, countryOfEmployment = ?,
                lineManager = ?, currency = ?, frequency = ?
            WHERE id = ?
            "#,
        )
        .bind(&r.name)
        .bind(&r.office)
        .bind(&r.email)
        .bind(r.salary)
        .bind(&r.role)
        .bind(&r.status)
        .bind(&r.firstname)
        .bind(&r.last_name)
        .bind(&r.position)
        .bind(&r.team)
        .bind(r.department_id)
        .bind(r.joining_date)
        .bind(r.invite_email)
        .bind(&r.employment_type)
        .bind(&r.country_of_employment)
        .bind(&r.line_manager)
        .bind(&r.currency)
        .bind(&r.frequency)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_employee(&self, id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl LeaveStore for MySqlStore {
    async fn insert_leave(&self, leave: &NewLeave) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO leaves
                (employee_id, start_date, end_date, status, reason, leave_type, duration)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(leave.employee_id)
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(&leave.status)
        .bind(&leave.reason)
        .bind(&leave.leave_type)
        .bind(leave.duration)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn list_leaves(&self) -> Result<Vec<Leave>, StoreError> {
        let sql = format!("SELECT {LEAVE_COLUMNS} FROM leaves ORDER BY id");
        let rows = sqlx::query_as::<_, Leave>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_leaves_for_employee(&self, employee_id: u64) -> Result<Vec<Leave>, StoreError> {
        let sql = format!("SELECT {LEAVE_COLUMNS} FROM leaves WHERE employee_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Leave>(&sql)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_leave(&self, id: u64) -> Result<Option<Leave>, StoreError> {
        let sql = format!("SELECT {LEAVE_COLUMNS} FROM leaves WHERE id = ?");
        let row = sqlx::query_as::<_, Leave>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_leave_dates(&self, id: u64) -> Result<Option<LeaveDates>, StoreError> {
        let row = sqlx::query_as::<_, LeaveDates>(
            "SELECT start_date, end_date FROM leaves WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_leave(&self, id: u64, changes: &LeaveChanges) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE leaves
            SET start_date = ?, end_date = ?, status = ?, reason = ?, leave_type = ?, duration = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.start_date)
        .bind(changes.end_date)
        .bind(&changes.status)
        .bind(&changes.reason)
        .bind(&changes.leave_type)
        .bind(changes.duration)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_leave(&self, id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM leaves WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl DepartmentStore for MySqlStore {
    async fn insert_department(&self, record: &DepartmentRecord) -> Result<u64, StoreError> {
        let result =
            sqlx::query("INSERT INTO department (name, status, description) VALUES (?, ?, ?)")
                .bind(&record.name)
                .bind(&record.status)
                .bind(&record.description)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_id())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let rows = sqlx::query_as::<_, Department>(
            "SELECT id, name, status, description FROM department ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_department(&self, id: u64) -> Result<Option<Department>, StoreError> {
        let row = sqlx::query_as::<_, Department>(
            "SELECT id, name, status, description FROM department WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_department(
        &self,
        id: u64,
        record: &DepartmentRecord,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE department SET name = ?, status = ?, description = ? WHERE id = ?",
        )
        .bind(&record.name)
        .bind(&record.status)
        .bind(&record.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_department(&self, id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM department WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UserStore for MySqlStore {
    async fn insert_user(&self, user: &NewUser) -> Result<u64, StoreError> {
        let result = sqlx::query("INSERT INTO users (username, email, password) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
