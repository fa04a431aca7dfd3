//! Router composition and the per-library handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use docrouter_resolver::DocTable;
use docrouter_shared::{ContextEnvelope, DocRequest, DocRouterError, ResolvedContext};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::{backend, frontend};

/// The full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(backend::router())
        .merge(frontend::router())
        .route("/mcp/{library}/context", get(library_context))
        .route("/mcp/{library}/functions", get(library_functions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct RootBody {
    pub message: &'static str,
    pub available_endpoints: Vec<String>,
}

async fn root(State(state): State<AppState>) -> Json<RootBody> {
    let mut available_endpoints = state.registry.context_paths();
    available_endpoints.push("/mcp/backend/context".to_string());
    available_endpoints.push("/mcp/frontend/context".to_string());

    Json(RootBody {
        message: "docrouter is running",
        available_endpoints,
    })
}

/// Both parameters are required; `language` is passed through untouched.
#[derive(Debug, Deserialize)]
pub struct ContextQuery {
    pub language: String,
    pub function: String,
}

async fn library_context(
    State(state): State<AppState>,
    Path(library): Path<String>,
    query: Result<Query<ContextQuery>, QueryRejection>,
) -> ApiResult<Json<ContextEnvelope<ResolvedContext>>> {
    let resolver = state
        .registry
        .get(&library)
        .ok_or_else(|| ApiError::not_found(format!("unknown library '{library}'")))?;
    let Query(query) = query.map_err(|e| DocRouterError::validation(e.body_text()))?;

    let request = DocRequest::new(query.language, query.function);
    let context = resolver.resolve(&request).await;
    Ok(Json(ContextEnvelope::new(context)))
}

#[derive(Debug, Serialize)]
pub struct FunctionsBody {
    pub functions: DocTable,
}

async fn library_functions(
    State(state): State<AppState>,
    Path(library): Path<String>,
) -> ApiResult<Json<FunctionsBody>> {
    let resolver = state
        .registry
        .get(&library)
        .ok_or_else(|| ApiError::not_found(format!("unknown library '{library}'")))?;

    Ok(Json(FunctionsBody {
        functions: resolver.profile().table.clone(),
    }))
}
