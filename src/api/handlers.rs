//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheStats, Lookup, TtlCache};
use crate::config::CacheOptions;
use crate::error::{CacheError, Result};
use crate::models::{
    CleanupResponse, ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetRequest,
    SetResponse,
};

/// Application state shared across all handlers.
///
/// Built once at start-up and handed to the router and the sweep task, so
/// the cache is never a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache of JSON values
    pub cache: Arc<RwLock<TtlCache<Value>>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: TtlCache<Value>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configured cache options.
    pub fn from_options(options: &CacheOptions) -> Self {
        Self::new(TtlCache::from_options(options))
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Answers 404 for both absent and expired keys, with a message telling
/// them apart.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: lookups update counters and drop expired entries
    let mut cache = state.cache.write().await;

    match cache.lookup(&key) {
        Lookup::Hit(value) => Ok(Json(GetResponse::new(key, value))),
        Lookup::Absent => Err(CacheError::NotFound(key)),
        Lookup::Expired => {
            debug!(key = %key, "Lookup hit an expired entry");
            Err(CacheError::Expired(key))
        }
    }
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut cache = state.cache.write().await;

    if cache.delete(&key) {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(key))
    }
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.write().await.clear();
    Json(ClearResponse::cleared())
}

/// Handler for POST /cleanup
///
/// Runs the same sweep as the background task, on demand.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.cleanup();

    Json(CleanupResponse {
        removed,
        remaining: cache.len(),
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    let cache = state.cache.read().await;
    Json(cache.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
