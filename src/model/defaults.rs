//! Field defaults, applied once per entity on both create and update.
//!
//! | Entity     | Field          | Default                       |
//! |------------|----------------|-------------------------------|
//! | Employee   | `name`         | `firstname + " " + lastName`  |
//! | Employee   | `departmentId` | [`EMPLOYEE_DEPARTMENT_ID`]    |
//! | Employee   | `inviteEmail`  | [`EMPLOYEE_INVITE_EMAIL`]     |
//! | Leave      | `status`       | [`LEAVE_STATUS`]              |
//! | Leave      | `reason`       | null                          |
//! | Department | `status`       | [`DEPARTMENT_STATUS`]         |
//! | Department | `description`  | null                          |

pub const EMPLOYEE_DEPARTMENT_ID: u64 = 1;
pub const EMPLOYEE_INVITE_EMAIL: bool = false;
pub const LEAVE_STATUS: &str = "pending";
pub const DEPARTMENT_STATUS: &str = "active";

/// Treats empty strings as absent, the way the web client sends blank inputs.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Falls back to `default` when `value` is absent or empty.
pub fn or_default(value: Option<String>, default: &str) -> String {
    present(value).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_absent() {
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(Some(" ".into())), Some(" ".into()));
        assert_eq!(or_default(Some(String::new()), LEAVE_STATUS), "pending");
        assert_eq!(or_default(Some("approved".into()), LEAVE_STATUS), "approved");
    }
}
