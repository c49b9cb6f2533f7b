//! Generic MCP transport helpers (stdio + streamable HTTP) decoupled from tool logic.

use std::sync::Arc;

use rmcp::handler::server::router::Router;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::serve_server;
use rmcp::transport::streamable_http_server::tower::{
    StreamableHttpServerConfig, StreamableHttpService,
};

pub use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
pub use rmcp::ServerHandler;

/// Speak JSON-RPC over stdin/stdout. Blocks until the peer disconnects.
pub async fn serve_stdio<H>(
    factory: impl FnOnce() -> (H, ToolRouter<H>),
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    H: ServerHandler,
{
    let (handler, tools) = factory();
    let service = Router::new(handler).with_tools(tools);
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    serve_server(service, (stdin, stdout)).await?;
    Ok(())
}

/// Build the streamable HTTP service (POST frames + GET SSE) for mounting
/// under an axum route.
pub fn make_streamable_http_service<H>(
    factory: impl Fn() -> (H, ToolRouter<H>) + Send + Sync + Clone + 'static,
    session_mgr: Arc<LocalSessionManager>,
) -> StreamableHttpService<Router<H>, LocalSessionManager>
where
    H: ServerHandler,
{
    let cfg = StreamableHttpServerConfig::default();
    let service_factory = move || {
        let (handler, tools) = factory();
        let service = Router::new(handler).with_tools(tools);
        Ok(service)
    };
    StreamableHttpService::new(service_factory, session_mgr, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::tool_router;

    #[tokio::test]
    async fn streamable_http_service_builds_from_calc_factory() {
        let session_mgr = Arc::new(LocalSessionManager::default());
        let _service = make_streamable_http_service(tool_router::factory, session_mgr);
    }

    #[test]
    fn factory_produces_handler_and_router() {
        let (_handler, tools) = tool_router::factory();
        assert_eq!(tools.into_iter().count(), 4);
    }
}
