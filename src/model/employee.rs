use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::defaults::{self, present};
use crate::model::leave::parse_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "office": "Dhaka",
        "email": "john.doe@company.com",
        "salary": 50000.0,
        "role": "engineer",
        "status": "active",
        "firstname": "John",
        "lastName": "Doe",
        "position": "Backend Developer",
        "team": "Platform",
        "departmentId": 1,
        "joiningDate": "2024-01-01",
        "inviteEmail": false,
        "employmentType": "full-time",
        "countryOfEmployment": "Bangladesh",
        "lineManager": "Jane Roe",
        "currency": "USD",
        "frequency": "monthly"
    })
)]
pub struct Employee {
    pub id: u64,
    pub name: Option<String>,
    pub office: Option<String>,
    pub email: Option<String>,
    pub salary: Option<f64>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub firstname: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub department_id: Option<u64>,
    #[schema(value_type = Option<String>, format = "date")]
    pub joining_date: Option<NaiveDate>,
    pub invite_email: bool,
    pub employment_type: Option<String>,
    pub country_of_employment: Option<String>,
    pub line_manager: Option<String>,
    pub currency: Option<String>,
    pub frequency: Option<String>,
}

/// Employee body for create and (full-replace) update.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub office: Option<String>,
    #[schema(example = "john.doe@company.com")]
    pub email: Option<String>,
    pub salary: Option<f64>,
    pub role: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "firstName")]
    #[schema(example = "John")]
    pub firstname: Option<String>,
    #[serde(alias = "lastname")]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub department_id: Option<u64>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(format = "date", example = "2024-01-01")]
    pub joining_date: Option<String>,
    pub invite_email: Option<bool>,
    pub employment_type: Option<String>,
    pub country_of_employment: Option<String>,
    pub line_manager: Option<String>,
    pub currency: Option<String>,
    pub frequency: Option<String>,
}

/// Employee columns after defaulting, written as-is by insert and update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub name: Option<String>,
    pub office: Option<String>,
    pub email: Option<String>,
    pub salary: Option<f64>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub firstname: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub department_id: u64,
    pub joining_date: Option<NaiveDate>,
    pub invite_email: bool,
    pub employment_type: Option<String>,
    pub country_of_employment: Option<String>,
    pub line_manager: Option<String>,
    pub currency: Option<String>,
    pub frequency: Option<String>,
}

impl EmployeePayload {
    /// Record for a new employee: `firstname`, `lastName` and `email` must be present.
    pub fn into_new_record(self) -> Result<EmployeeRecord, ApiError> {
        let mut missing = Vec::new();
        if self.firstname.as_deref().is_none_or(str::is_empty) {
            missing.push("firstname");
        }
        if self.last_name.as_deref().is_none_or(str::is_empty) {
            missing.push("lastName");
        }
        if self.email.as_deref().is_none_or(str::is_empty) {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(ApiError::missing_fields(&missing));
        }

        self.into_record()
    }

    /// Applies the employee defaults. Every other omitted field stays `None`,
    /// so an update nulls it.
    pub fn into_record(self) -> Result<EmployeeRecord, ApiError> {
        let firstname = present(self.firstname);
        let last_name = present(self.last_name);

        let name = present(self.name).or_else(|| {
            let joined = [firstname.as_deref(), last_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            (!joined.is_empty()).then_some(joined)
        });
        let department_id = self
            .department_id
            .filter(|id| *id != 0)
            .unwrap_or(defaults::EMPLOYEE_DEPARTMENT_ID);
        let joining_date = present(self.joining_date)
            .map(|raw| parse_date("joiningDate", &raw))
            .transpose()?;

        Ok(EmployeeRecord {
            name,
            office: self.office,
            email: present(self.email),
            salary: self.salary,
            role: self.role,
            status: self.status,
            firstname,
            last_name,
            position: self.position,
            team: self.team,
            department_id,
            joining_date,
            invite_email: self.invite_email.unwrap_or(defaults::EMPLOYEE_INVITE_EMAIL),
            employment_type: self.employment_type,
            country_of_employment: self.country_of_employment,
            line_manager: self.line_manager,
            currency: self.currency,
            frequency: self.frequency,
        })
    }
}
