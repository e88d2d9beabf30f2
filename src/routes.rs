use crate::{
    api::{department, employee, leave, upload},
    auth::{handlers, middleware::require_session},
    config::Config,
    error::ApiError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{
    HttpResponse,
    middleware::{Condition, from_fn},
    web,
};
use serde_json::json;


async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello from backend" }))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .milliseconds_per_request(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("period and burst size are non-zero");
        Governor::new(&cfg)
    }

    let limits_on = config.rate_limit_enabled;

    // Body and path extraction failures answer in the same `{error}` shape.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    );

    cfg.service(
        web::scope(&config.api_prefix)
            .route("/hello", web::get().to(hello))
            // Public auth routes
            .service(
                web::resource("/register")
                    .wrap(Condition::new(
                        limits_on,
                        build_limiter(config.rate_register_per_min),
                    ))
                    .route(web::post().to(handlers::register)),
            )
            .service(
                web::resource("/login")
                    .wrap(Condition::new(
                        limits_on,
                        build_limiter(config.rate_login_per_min),
                    ))
                    .route(web::post().to(handlers::login)),
            )
            .service(web::resource("/logout").route(web::post().to(handlers::logout)))
            // Records
            .service(
                web::scope("/employees")
                    .wrap(from_fn(require_session))
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/leaves")
                    .wrap(from_fn(require_session))
                    // /leaves
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::leave_list))
                            .route(web::post().to(leave::create_leave)),
                    )
                    // /leaves/employee/{employee_id}
                    .service(
                        web::resource("/employee/{employee_id}")
                            .route(web::get().to(leave::employee_leaves)),
                    )
                    // /leaves/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(leave::get_leave))
                            .route(web::put().to(leave::update_leave))
                            .route(web::delete().to(leave::delete_leave)),
                    ),
            )
            .service(
                web::scope("/department")
                    .wrap(from_fn(require_session))
                    // /department
                    .service(
                        web::resource("")
                            .route(web::post().to(department::create_department))
                            .route(web::get().to(department::list_departments)),
                    )
                    // /department/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(department::get_department))
                            .route(web::put().to(department::update_department))
                            .route(web::delete().to(department::delete_department)),
                    ),
            )
            .service(
                web::resource("/upload")
                    .wrap(from_fn(require_session))
                    .route(web::post().to(upload::upload_image)),
            ),
    );
}
