//! User CRUD handlers.

use std::sync::Arc;

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::debug;

use roster_core::{NewUser, ProfileSource, UserPatch, UserQuery, UserStore};

use crate::error::ApiError;

/// GET /users - list with optional filter and skip/take window.
///
/// Returns `{ "result": [...], "count": n }` where `count` is the match
/// count before the window.
#[get("/users")]
pub async fn list_users(
    store: web::Data<Arc<dyn UserStore>>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    query.validate().map_err(roster_core::Error::from)?;

    let page = store.find_all(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /users/random - fetch a profile from the external source to
/// pre-fill the create form. Registered ahead of `/users/{id}` so
/// `random` never parses as an id.
#[get("/users/random")]
pub async fn random_user(
    profiles: web::Data<Arc<dyn ProfileSource>>,
) -> Result<HttpResponse, ApiError> {
    let profile = profiles.fetch_random().await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// GET /users/{id}
#[get("/users/{id}")]
pub async fn get_user(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    let user = store.find_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /users - validate and insert, returning the stored record with
/// its assigned id.
#[post("/users")]
pub async fn create_user(
    store: web::Data<Arc<dyn UserStore>>,
    body: web::Json<NewUser>,
) -> Result<HttpResponse, ApiError> {
    let new_user = body.into_inner();
    new_user.validate().map_err(roster_core::Error::from)?;

    let user = store.insert(new_user).await?;
    debug!(id = user.id, "Created user");
    Ok(HttpResponse::Created().json(user))
}

/// PUT /users/{id} - merge the patch, then return the updated record.
#[put("/users/{id}")]
pub async fn update_user(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<u32>,
    body: web::Json<UserPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let patch = body.into_inner();
    patch.validate().map_err(roster_core::Error::from)?;

    store.update(id, patch).await?;
    let user = store.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /users/{id}
#[delete("/users/{id}")]
pub async fn delete_user(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    store.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
