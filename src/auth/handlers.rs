use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    auth::{
        password::{hash_password, verify_password},
        session::SessionStore,
    },
    config::Config,
    error::{ApiError, StoreError},
    model::{
        defaults::present,
        user::{NewUser, UserInfo},
    },
    models::{LoginReqDto, LoginResponse, RegisterReq},
    store::UserStore,
};

fn session_cookie(config: &Config, value: String) -> Cookie<'static> {
    Cookie::build(config.session_cookie.clone(), value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .finish()
}

/// User registration handler
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "User registered", body = Object, example = json!({
            "message": "User registered",
            "id": 1
        })),
        (status = 400, description = "Missing field"),
        (status = 409, description = "Email already registered", body = Object, example = json!({
            "error": "Email already registered"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_register", skip(users, payload))]
pub async fn register(
    users: web::Data<dyn UserStore>,
    payload: web::Json<RegisterReq>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();

    let (Some(firstname), Some(lastname), Some(email), Some(password)) = (
        present(req.firstname),
        present(req.lastname),
        present(req.email),
        present(req.password),
    ) else {
        return Err(ApiError::Validation(
            "Missing firstname, lastname, email or password".to_string(),
        ));
    };

    let username = format!("{} {}", firstname.trim(), lastname.trim())
        .trim()
        .to_string();

    let password_hash = web::block(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| {
            error!(error = %e, "Password hashing failed");
            ApiError::Internal("Failed to register user".to_string())
        })?;

    let new_user = NewUser {
        username,
        email,
        password_hash,
    };

    match users.insert_user(&new_user).await {
        Ok(id) => {
            info!(user_id = id, "User registered");
            Ok(HttpResponse::Created().json(json!({
                "message": "User registered",
                "id": id
            })))
        }
        Err(StoreError::Duplicate(_)) => {
            info!("Registration rejected: email already registered");
            Err(ApiError::Conflict("Email already registered".to_string()))
        }
        Err(e) => {
            error!(error = %e, "Failed to register user");
            Err(e.into())
        }
    }
}

/// Login handler; starts a session and sets its cookie.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "error": "Invalid credentials"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(users, sessions, config, payload))]
pub async fn login(
    users: web::Data<dyn UserStore>,
    sessions: web::Data<SessionStore>,
    config: web::Data<Config>,
    payload: web::Json<LoginReqDto>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    let req = payload.into_inner();
    let (Some(email), Some(password)) = (present(req.email), present(req.password)) else {
        info!("Validation failed: empty email or password");
        return Err(ApiError::Validation("Missing email or password".to_string()));
    };

    debug!("Fetching user from database");

    let user = users
        .find_user_by_email(&email)
        .await
        .inspect_err(|e| error!(error = %e, "Database error while fetching user"))?;

    let Some(user) = user else {
        info!("Invalid credentials: user not found");
        return Err(ApiError::invalid_credentials());
    };

    let hashed = user.password.clone();
    let verified = web::block(move || verify_password(&password, &hashed))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if let Err(e) = verified {
        match e {
            argon2::password_hash::Error::Password => {
                info!(user_id = user.id, "Invalid credentials: password mismatch")
            }
            other => warn!(user_id = user.id, error = %other, "Stored password hash unusable"),
        }
        return Err(ApiError::invalid_credentials());
    }

    let info = UserInfo::from(&user);
    let session_id = sessions.create(info.clone()).await;

    info!(user_id = user.id, "Login successful");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&config, session_id))
        .json(LoginResponse {
            message: "Login successful".to_string(),
            user: info,
        }))
}

/// Ends the caller's session, if any, and clears the cookie.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Logged out", body = Object, example = json!({
            "message": "Logged out"
        }))
    ),
    tag = "Auth"
)]
pub async fn logout(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    config: web::Data<Config>,
) -> HttpResponse {
    if let Some(cookie) = req.cookie(&config.session_cookie) {
        sessions.remove(cookie.value()).await;
        debug!("Session removed");
    }

    let mut removal = session_cookie(&config, String::new());
    removal.make_removal();

    HttpResponse::Ok().cookie(removal).json(json!({
        "message": "Logged out"
    }))
}
