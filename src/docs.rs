use crate::api::upload::UploadForm;
use crate::model::department::{Department, DepartmentPayload};
use crate::model::employee::{Employee, EmployeePayload};
use crate::model::leave::{Leave, LeavePayload};
use crate::model::user::UserInfo;
use crate::models::{LoginReqDto, LoginResponse, RegisterReq};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Backend API",
        version = "1.0.0",
        description = r#"
## Payroll Backend

REST API behind the payroll dashboard.

### Key Features
- **Employees**: create, list, view, replace and delete employee records
- **Leaves**: request leave, edit it partially, list per employee; duration is always computed from the dates
- **Departments**: maintain the department list
- **Uploads**: store JPEG/PNG images on disk
- **Accounts**: register, log in and log out with a session cookie

### Response Format
Successful writes answer `{"message": ...}`; failures answer `{"error": ...}`.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::leave::create_leave,
        crate::api::leave::leave_list,
        crate::api::leave::employee_leaves,
        crate::api::leave::get_leave,
        crate::api::leave::update_leave,
        crate::api::leave::delete_leave,

        crate::api::department::create_department,
        crate::api::department::list_departments,
        crate::api::department::get_department,
        crate::api::department::update_department,
        crate::api::department::delete_department,

        crate::api::upload::upload_image,

        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::logout
    ),
    components(
        schemas(
            Employee,
            EmployeePayload,
            Leave,
            LeavePayload,
            Department,
            DepartmentPayload,
            UploadForm,
            RegisterReq,
            LoginReqDto,
            LoginResponse,
            UserInfo
        )
    ),
    tags(
        (name = "Employee", description = "Employee records"),
        (name = "Leave", description = "Leave requests"),
        (name = "Department", description = "Departments"),
        (name = "Upload", description = "Image uploads"),
        (name = "Auth", description = "Registration and sessions"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/employees",
            "/api/employees/{id}",
            "/api/leaves",
            "/api/leaves/{id}",
            "/api/leaves/employee/{employee_id}",
            "/api/department",
            "/api/department/{id}",
            "/api/upload",
            "/api/register",
            "/api/login",
            "/api/logout",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
