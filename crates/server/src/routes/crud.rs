//! Generic handlers binding the five CRUD operations of any `CrudService`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::pagination::ListQuery;
use service::CrudService;
use uuid::Uuid;

use crate::{errors::ApiError, extract::{ApiPath, ApiQuery, ValidatedJson}};

/// `GET/POST /` and `GET/PATCH/DELETE /:id` for one resource.
pub fn routes<S: CrudService>(svc: Arc<S>) -> Router {
    Router::new()
        .route("/", get(list::<S>).post(create::<S>))
        .route("/:id", get(find_one::<S>).patch(update::<S>).delete(remove::<S>))
        .with_state(svc)
}

async fn list<S: CrudService>(
    State(svc): State<Arc<S>>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<S::Record>>, ApiError> {
    Ok(Json(svc.find_all(query).await?))
}

async fn find_one<S: CrudService>(
    State(svc): State<Arc<S>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<S::Record>, ApiError> {
    Ok(Json(svc.find_by_id(id).await?))
}

async fn create<S: CrudService>(
    State(svc): State<Arc<S>>,
    ValidatedJson(input): ValidatedJson<S::Create>,
) -> Result<(StatusCode, Json<S::Record>), ApiError> {
    let created = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update<S: CrudService>(
    State(svc): State<Arc<S>>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(input): ValidatedJson<S::Update>,
) -> Result<Json<S::Record>, ApiError> {
    Ok(Json(svc.update(id, input).await?))
}

async fn remove<S: CrudService>(
    State(svc): State<Arc<S>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<S::Record>, ApiError> {
    Ok(Json(svc.remove(id).await?))
}
