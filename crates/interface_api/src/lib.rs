//! HTTP API Layer
//!
//! This crate provides the REST API for the voter service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for voters and their history entries
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Maps the shared error taxonomy onto HTTP statuses
//!
//! The transport is a thin seam: it decodes wire input into domain values,
//! calls one domain adapter, and renders the result. All validation beyond
//! body decoding happens in the adapters.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::from_repository(repository));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_voter::ports::{
    CreateRepository, DeleteRepository, ReadRepository, UpdateRepository,
};
use domain_voter::{CreateAdapter, DeleteAdapter, ReadAdapter, UpdateAdapter};

use crate::handlers::{health, history, voter};

/// Application state shared across handlers: the four domain adapters
#[derive(Clone)]
pub struct AppState {
    pub create: CreateAdapter,
    pub read: ReadAdapter,
    pub update: UpdateAdapter,
    pub delete: DeleteAdapter,
}

impl AppState {
    /// Wires all four adapters over one repository implementation
    ///
    /// Each adapter receives the repository through its own capability trait;
    /// tests pass the in-memory repository here, the server binary passes the
    /// Redis one.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: CreateRepository + ReadRepository + UpdateRepository + DeleteRepository + 'static,
    {
        Self {
            create: CreateAdapter::new(repository.clone()),
            read: ReadAdapter::new(repository.clone()),
            update: UpdateAdapter::new(repository.clone()),
            delete: DeleteAdapter::new(repository),
        }
    }
}

/// Creates the API router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let voter_routes = Router::new()
        .route(
            "/voters",
            get(voter::list_voters).delete(voter::delete_all_voters),
        )
        .route(
            "/voters/:id",
            post(voter::create_voter)
                .get(voter::get_voter)
                .put(voter::update_voter)
                .delete(voter::delete_voter),
        )
        .route("/voters/:voter_id/polls", get(history::list_history))
        .route(
            "/voters/:voter_id/polls/:poll_id",
            post(history::create_history)
                .get(history::get_history)
                .put(history::update_history)
                .delete(history::delete_history),
        );

    Router::new()
        .merge(health_routes)
        .merge(voter_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
