//! Route registration.

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::handlers::{files, users};

/// Register every endpoint on the application.
///
/// `/users/random` must come before `/users/{id}`; actix matches services
/// in registration order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::random_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(files::upload_file)
        .service(files::download_file)
        .route("/healthz", web::get().to(healthz));
}

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
