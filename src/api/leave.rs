use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{error, info};

use crate::{
    error::ApiError,
    model::leave::LeavePayload,
    service::leave::{update_leave as apply_leave_update, validate_new_leave},
    store::LeaveStore,
};

/* =========================
Create leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body(
        content = LeavePayload,
        description = "Leave request payload; duration is always computed",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave created", body = Object, example = json!({
            "message": "Leave created",
            "id": 1,
            "duration": 3
        })),
        (status = 400, description = "Missing or malformed field", body = Object, example = json!({
            "error": "Missing required fields: employee_id, start_date, end_date, leave_type"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: web::Data<dyn LeaveStore>,
    payload: web::Json<LeavePayload>,
) -> Result<HttpResponse, ApiError> {
    let leave = validate_new_leave(payload.into_inner())?;

    let id = store.insert_leave(&leave).await.inspect_err(|e| {
        error!(error = %e, employee_id = leave.employee_id, "Failed to create leave")
    })?;

    info!(leave_id = id, employee_id = leave.employee_id, duration = leave.duration, "Leave created");

    Ok(HttpResponse::Created().json(json!({
        "message": "Leave created",
        "id": id,
        "duration": leave.duration
    })))
}

#[utoipa::path(
    get,
    path = "/api/leaves",
    responses(
        (status = 200, description = "All leaves", body = [crate::model::leave::Leave]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn leave_list(store: web::Data<dyn LeaveStore>) -> Result<HttpResponse, ApiError> {
    let leaves = store
        .list_leaves()
        .await
        .inspect_err(|e| error!(error = %e, "Failed to fetch leaves"))?;

    Ok(HttpResponse::Ok().json(leaves))
}

#[utoipa::path(
    get,
    path = "/api/leaves/employee/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee whose leaves to list")
    ),
    responses(
        (status = 200, description = "Leaves of one employee", body = [crate::model::leave::Leave]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn employee_leaves(
    store: web::Data<dyn LeaveStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let leaves = store
        .list_leaves_for_employee(employee_id)
        .await
        .inspect_err(|e| error!(error = %e, employee_id, "Failed to fetch employee leaves"))?;

    Ok(HttpResponse::Ok().json(leaves))
}

#[utoipa::path(
    get,
    path = "/api/leaves/{id}",
    params(
        ("id" = u64, Path, description = "Leave ID")
    ),
    responses(
        (status = 200, description = "Leave found", body = crate::model::leave::Leave),
        (status = 404, description = "Leave not found", body = Object, example = json!({
            "error": "Leave not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    store: web::Data<dyn LeaveStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let leave_id = path.into_inner();

    let leave = store
        .find_leave(leave_id)
        .await
        .inspect_err(|e| error!(error = %e, leave_id, "Failed to fetch leave"))?;

    match leave {
        Some(data) => Ok(HttpResponse::Ok().json(data)),
        None => Err(ApiError::NotFound("Leave not found".to_string())),
    }
}

/* =========================
Update leave (full or partial)
========================= */
/// Omitted dates are taken from the stored leave before the duration is
/// recomputed. Status falls back to `pending`, reason to null.
#[utoipa::path(
    put,
    path = "/api/leaves/{id}",
    params(
        ("id" = u64, Path, description = "Leave ID")
    ),
    request_body = LeavePayload,
    responses(
        (status = 200, description = "Leave updated", body = Object, example = json!({
            "message": "Leave updated",
            "id": 1,
            "duration": 3
        })),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Leave not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn update_leave(
    store: web::Data<dyn LeaveStore>,
    path: web::Path<u64>,
    payload: web::Json<LeavePayload>,
) -> Result<HttpResponse, ApiError> {
    let leave_id = path.into_inner();

    let changes = apply_leave_update(store.get_ref(), leave_id, payload.into_inner())
        .await
        .inspect_err(|e| {
            if matches!(e, ApiError::Store(_)) {
                error!(error = %e, leave_id, "Failed to update leave");
            }
        })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave updated",
        "id": leave_id,
        "duration": changes.duration
    })))
}

/// Deleting an unknown id still answers 200.
#[utoipa::path(
    delete,
    path = "/api/leaves/{id}",
    params(
        ("id" = u64, Path, description = "Leave ID")
    ),
    responses(
        (status = 200, description = "Leave deleted", body = Object, example = json!({
            "message": "Leave deleted"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn delete_leave(
    store: web::Data<dyn LeaveStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let leave_id = path.into_inner();

    store
        .delete_leave(leave_id)
        .await
        .inspect_err(|e| error!(error = %e, leave_id, "Failed to delete leave"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave deleted"
    })))
}
