use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::mcp_transport;
use crate::tools::registry::ToolRegistry;
use crate::tools::tool_router;

/// Minimal app: `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default() -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(tool_router::factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Minimal app **plus** the legacy JSON-RPC route at `/rpc`, backed by the
/// explicit tool registry.
pub fn build_app_with_rpc(registry: ToolRegistry) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(tool_router::factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/rpc", post(crate::api::rpc::http))
        .with_state(registry)
}
