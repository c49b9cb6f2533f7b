//! Legacy JSON-RPC shim over the explicit tool registry.
//!
//! Accepts `initialize`, `shutdown`, `tools.list` and `tools.call` (slash
//! spellings too) at POST /rpc. The MCP-proper surface lives at /mcp.

use axum::Json;
use serde_json::{json, Value as J};

use crate::core::error::CalcError;
use crate::core::rpc::{RpcReq, RpcResp};
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, CalcError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| CalcError::Message("missing tool name".into()))?;
    let args = params.get("arguments").unwrap_or(&J::Null);
    reg.call(name, args).await
}

pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    Json(req): Json<RpcReq>,
) -> Json<RpcResp> {
    tracing::debug!(method = %req.method, id = ?req.id, "rpc handler invoked");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => http_json::ok(
            id,
            json!({ "serverInfo": { "name": "calc-mcp-gateway", "version": env!("CARGO_PKG_VERSION") }, "capabilities": {} }),
        )
        .0,
        "shutdown" => http_json::ok(id, J::Null).0,
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(&reg)).0,
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id, out).0,
            Err(e) => {
                tracing::warn!(error = %e, "tools.call failed");
                http_json::from_calc_error(id, e).0
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)).0,
    };
    Json(resp)
}
