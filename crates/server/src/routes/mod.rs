use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::{
    organization_service::OrganizationService,
    resources::{
        AssetService, AttachmentService, CategoryService, InventoryService, LocationService, MeterService,
        ProcedureService, PurchaseOrderService, ReminderService, TeamService, UserService, VendorService,
    },
    work_order_service::WorkOrderService,
};

use crate::state::ServerState;

pub mod crud;
pub mod health;
pub mod work_orders;

/// Every resource router, keyed by its path segment under `/v1`.
fn v1(state: &ServerState) -> Router {
    let db = &state.db;
    Router::new()
        .nest("/organizations", crud::routes(Arc::new(OrganizationService::new(db.clone()))))
        .nest("/users", crud::routes(Arc::new(UserService::new(db.clone()))))
        .nest("/teams", crud::routes(Arc::new(TeamService::new(db.clone()))))
        .nest("/locations", crud::routes(Arc::new(LocationService::new(db.clone()))))
        .nest("/categories", crud::routes(Arc::new(CategoryService::new(db.clone()))))
        .nest("/assets", crud::routes(Arc::new(AssetService::new(db.clone()))))
        .nest("/meters", crud::routes(Arc::new(MeterService::new(db.clone()))))
        .nest("/vendors", crud::routes(Arc::new(VendorService::new(db.clone()))))
        .nest("/inventory", crud::routes(Arc::new(InventoryService::new(db.clone()))))
        .nest("/procedures", crud::routes(Arc::new(ProcedureService::new(db.clone()))))
        .nest("/attachments", crud::routes(Arc::new(AttachmentService::new(db.clone()))))
        .nest("/purchase-orders", crud::routes(Arc::new(PurchaseOrderService::new(db.clone()))))
        .nest("/work-orders", work_orders::routes(Arc::new(WorkOrderService::new(db.clone()))))
        .nest("/reminders", crud::routes(Arc::new(ReminderService::new(db.clone()))))
        .nest("/notifications", crud::routes(Arc::clone(&state.notifications)))
}

/// Build the full application router: `/health` plus the `/v1` resources.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new().route("/health", get(health::health)).with_state(state.clone());

    public
        .nest("/v1", v1(&state))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
