use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use models::{work_order::AssignUsers, work_order_comment::CreateComment};
use service::work_order_service::{WorkOrderRecord, WorkOrderService};
use uuid::Uuid;

use crate::{errors::ApiError, extract::{ApiPath, ValidatedJson}, routes::crud};

/// CRUD plus assignee replacement and comment append.
pub fn routes(svc: Arc<WorkOrderService>) -> Router {
    let extra = Router::new()
        .route("/:id/assignees", put(assign))
        .route("/:id/comments", post(add_comment))
        .with_state(svc.clone());
    crud::routes(svc).merge(extra)
}

async fn assign(
    State(svc): State<Arc<WorkOrderService>>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(input): ValidatedJson<AssignUsers>,
) -> Result<Json<WorkOrderRecord>, ApiError> {
    Ok(Json(svc.assign(id, input.user_ids).await?))
}

async fn add_comment(
    State(svc): State<Arc<WorkOrderService>>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(input): ValidatedJson<CreateComment>,
) -> Result<(StatusCode, Json<WorkOrderRecord>), ApiError> {
    let record = svc.add_comment(id, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
