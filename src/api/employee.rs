use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, error};

use crate::{
    error::ApiError,
    model::employee::EmployeePayload,
    store::EmployeeStore,
};

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Object, example = json!({
            "message": "Employee added",
            "id": 1
        })),
        (status = 400, description = "Missing firstname, lastName or email", body = Object, example = json!({
            "error": "Missing required fields: email"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let record = payload.into_inner().into_new_record()?;

    let id = store
        .insert_employee(&record)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to create employee"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added",
        "id": id
    })))
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [crate::model::employee::Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, ApiError> {
    let employees = store
        .list_employees()
        .await
        .inspect_err(|e| error!(error = %e, "Failed to fetch employees"))?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let employee = store
        .find_employee(employee_id)
        .await
        .inspect_err(|e| error!(error = %e, employee_id, "Failed to fetch employee"))?;

    match employee {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::NotFound("Employee not found".to_string())),
    }
}

/// Update Employee. Every field is replaced; omitted fields become null.
/// Only the name, department and invite flag defaults apply.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Object, example = json!({
            "message": "Employee updated successfully"
        })),
        (status = 400, description = "Malformed body or joiningDate"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<u64>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let record = payload.into_inner().into_record()?;

    let affected = store
        .update_employee(employee_id, &record)
        .await
        .inspect_err(|e| error!(error = %e, employee_id, "Failed to update employee"))?;

    if affected == 0 {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully"
    })))
}

/// Delete Employee. Leaves owned by the employee are kept.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee deleted"
        })),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let affected = store
        .delete_employee(employee_id)
        .await
        .inspect_err(|e| error!(error = %e, employee_id, "Failed to delete employee"))?;

    if affected == 0 {
        debug!(employee_id, "Delete matched no employee");
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted"
    })))
}
