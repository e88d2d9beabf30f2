use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::defaults::{self, or_default, present};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Department {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Engineering")]
    pub name: String,
    #[schema(example = "active")]
    pub status: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DepartmentPayload {
    #[schema(example = "Engineering")]
    pub name: Option<String>,
    #[schema(example = "active")]
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRecord {
    pub name: String,
    pub status: String,
    pub description: Option<String>,
}

impl DepartmentPayload {
    pub fn into_record(self) -> Result<DepartmentRecord, ApiError> {
        let name = present(self.name).ok_or_else(|| ApiError::missing_fields(&["name"]))?;

        Ok(DepartmentRecord {
            name,
            status: or_default(self.status, defaults::DEPARTMENT_STATUS),
            description: present(self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_active() {
        let record = DepartmentPayload {
            name: Some("Finance".into()),
            ..Default::default()
        }
        .into_record()
        .unwrap();
        assert_eq!(record.status, "active");
        assert_eq!(record.description, None);
    }

    #[test]
    fn name_is_required() {
        let err = DepartmentPayload::default().into_record().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: name");
    }
}
