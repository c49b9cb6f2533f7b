use axum::Json;

use crate::core::error::CalcError;
use crate::core::rpc::{err as rpc_err, ok as rpc_ok, RpcResp};

pub fn ok(id: serde_json::Value, result: serde_json::Value) -> Json<RpcResp> {
    Json(rpc_ok(id, result))
}

pub fn error(id: serde_json::Value, code: i32, message: impl Into<String>) -> Json<RpcResp> {
    Json(rpc_err(id, code, message, None))
}

/// Map a CalcError into a JSON-RPC error response (-32000 application error)
pub fn from_calc_error(id: serde_json::Value, err: CalcError) -> Json<RpcResp> {
    error(id, -32000, err.to_string())
}
