use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::error::ApiError;
use actix_web::middleware::Next;
use actix_web::{
    Error, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    web::Data,
};
use tracing::debug;

/// Rejects requests without a live session when `require_session` is on.
pub async fn require_session(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .cloned()
        .ok_or_else(|| ErrorInternalServerError("App config missing"))?;

    if !config.require_session {
        return next.call(req).await;
    }

    let sessions = req
        .app_data::<Data<SessionStore>>()
        .cloned()
        .ok_or_else(|| ErrorInternalServerError("Session store missing"))?;

    let user = match req.cookie(&config.session_cookie) {
        Some(cookie) => sessions.get(cookie.value()).await,
        None => None,
    };

    match user {
        Some(user) => {
            debug!(user_id = user.id, "Session accepted");
            next.call(req).await
        }
        None => {
            let resp = ApiError::Unauthorized("Authentication required".to_string()).error_response();
            Ok(req.into_response(resp))
        }
    }
}
