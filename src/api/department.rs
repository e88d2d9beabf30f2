use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::error;

use crate::{
    error::ApiError,
    model::department::DepartmentPayload,
    store::DepartmentStore,
};

#[utoipa::path(
    post,
    path = "/api/department",
    request_body = DepartmentPayload,
    responses(
        (status = 201, description = "Department created", body = Object, example = json!({
            "message": "Department added",
            "id": 1
        })),
        (status = 400, description = "Missing name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn create_department(
    store: web::Data<dyn DepartmentStore>,
    payload: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let record = payload.into_inner().into_record()?;

    let id = store
        .insert_department(&record)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to create department"))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Department added",
        "id": id
    })))
}

#[utoipa::path(
    get,
    path = "/api/department",
    responses(
        (status = 200, description = "All departments", body = [crate::model::department::Department]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn list_departments(
    store: web::Data<dyn DepartmentStore>,
) -> Result<HttpResponse, ApiError> {
    let departments = store
        .list_departments()
        .await
        .inspect_err(|e| error!(error = %e, "Failed to fetch departments"))?;

    Ok(HttpResponse::Ok().json(departments))
}

#[utoipa::path(
    get,
    path = "/api/department/{id}",
    params(
        ("id" = u64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = crate::model::department::Department),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn get_department(
    store: web::Data<dyn DepartmentStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let department_id = path.into_inner();

    store
        .find_department(department_id)
        .await
        .inspect_err(|e| error!(error = %e, department_id, "Failed to fetch department"))?
        .map(|department| HttpResponse::Ok().json(department))
        .ok_or_else(|| ApiError::NotFound("Department not found".to_string()))
}

/// Full replace of name, status and description.
#[utoipa::path(
    put,
    path = "/api/department/{id}",
    params(
        ("id" = u64, Path, description = "Department ID")
    ),
    request_body = DepartmentPayload,
    responses(
        (status = 200, description = "Department updated", body = Object, example = json!({
            "message": "Department updated"
        })),
        (status = 400, description = "Missing name"),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn update_department(
    store: web::Data<dyn DepartmentStore>,
    path: web::Path<u64>,
    payload: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let department_id = path.into_inner();
    let record = payload.into_inner().into_record()?;

    let affected = store
        .update_department(department_id, &record)
        .await
        .inspect_err(|e| error!(error = %e, department_id, "Failed to update department"))?;

    if affected == 0 {
        return Err(ApiError::NotFound("Department not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Department updated"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/department/{id}",
    params(
        ("id" = u64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department deleted (also for unknown ids)", body = Object, example = json!({
            "message": "Department deleted"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn delete_department(
    store: web::Data<dyn DepartmentStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let department_id = path.into_inner();

    store
        .delete_department(department_id)
        .await
        .inspect_err(|e| error!(error = %e, department_id, "Failed to delete department"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Department deleted"
    })))
}
