//! MCP tool router for the calculator service.
//!
//! Inputs are plain JSON objects ({"a": .., "b": ..}) and results go to
//! `structuredContent` as {"result": ..}, avoiding schemars version drift.

use std::future::Future;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::JsonObject;
use rmcp::ErrorData as McpError;

use crate::infra::mcp_transport::ServerHandler;
use crate::tools::arithmetic;

#[derive(Clone, Default)]
pub struct CalcSvc;

impl ServerHandler for CalcSvc {}

fn int_args(obj: &JsonObject) -> Result<(i64, i64), McpError> {
    let get = |k: &str| {
        obj.get(k)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| McpError::invalid_params(format!("missing or non-integer field: {k}"), None))
    };
    Ok((get("a")?, get("b")?))
}

fn num_args(obj: &JsonObject) -> Result<(f64, f64), McpError> {
    let get = |k: &str| {
        obj.get(k)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| McpError::invalid_params(format!("missing or non-numeric field: {k}"), None))
    };
    Ok((get("a")?, get("b")?))
}

#[rmcp::tool_router]
impl CalcSvc {
    #[rmcp::tool(
        name = "calc.add",
        description = "Add two integers and return {\"result\": a + b}"
    )]
    async fn calc_add(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let (a, b) = int_args(&params.0)?;
        tracing::info!(tool = "calc.add", a, b, "tool invoked");
        let result =
            arithmetic::add(a, b).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(tool = "calc.add", result, "tool completed");
        Ok(rmcp::Json(serde_json::json!({ "result": result })))
    }

    #[rmcp::tool(
        name = "calc.subtract",
        description = "Subtract b from a and return {\"result\": a - b}"
    )]
    async fn calc_subtract(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let (a, b) = int_args(&params.0)?;
        tracing::info!(tool = "calc.subtract", a, b, "tool invoked");
        let result = arithmetic::subtract(a, b)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(tool = "calc.subtract", result, "tool completed");
        Ok(rmcp::Json(serde_json::json!({ "result": result })))
    }

    #[rmcp::tool(
        name = "calc.multiply",
        description = "Multiply two integers and return {\"result\": a * b}"
    )]
    async fn calc_multiply(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let (a, b) = int_args(&params.0)?;
        tracing::info!(tool = "calc.multiply", a, b, "tool invoked");
        let result = arithmetic::multiply(a, b)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(tool = "calc.multiply", result, "tool completed");
        Ok(rmcp::Json(serde_json::json!({ "result": result })))
    }

    #[rmcp::tool(
        name = "calc.divide",
        description = "Divide a by b and return {\"result\": a / b} as floating point"
    )]
    async fn calc_divide(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let (a, b) = num_args(&params.0)?;
        tracing::info!(tool = "calc.divide", a, b, "tool invoked");
        let result = arithmetic::divide(a, b)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(tool = "calc.divide", result, "tool completed");
        Ok(rmcp::Json(serde_json::json!({ "result": result })))
    }
}

pub type CalcRouter = ToolRouter<CalcSvc>;

impl CalcSvc {
    /// Wrapper to expose the macro-generated private tool_router.
    pub fn router() -> CalcRouter {
        Self::tool_router()
    }
}

/// Factory shape required by the rmcp streamable HTTP and stdio transports.
pub fn factory() -> (CalcSvc, CalcRouter) {
    (CalcSvc, CalcSvc::router())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(v: serde_json::Value) -> Parameters<JsonObject> {
        Parameters(v.as_object().unwrap().clone())
    }

    #[test]
    fn router_contains_the_four_operations() {
        let router: CalcRouter = CalcSvc::router();
        let mut names: Vec<String> = router.into_iter().map(|r| r.name().to_string()).collect();
        names.sort();
        assert_eq!(
            names,
            vec!["calc.add", "calc.divide", "calc.multiply", "calc.subtract"]
        );
    }

    #[tokio::test]
    async fn add_returns_structured_result() {
        let rmcp::Json(v) = CalcSvc.calc_add(params(json!({"a": 15, "b": 27}))).await.unwrap();
        assert_eq!(v["result"], 42);
    }

    #[tokio::test]
    async fn subtract_and_multiply_follow_the_script() {
        let rmcp::Json(v) = CalcSvc
            .calc_subtract(params(json!({"a": 50, "b": 10})))
            .await
            .unwrap();
        assert_eq!(v["result"], 40);
        let rmcp::Json(v) = CalcSvc
            .calc_multiply(params(json!({"a": 8, "b": 6})))
            .await
            .unwrap();
        assert_eq!(v["result"], 48);
    }

    #[tokio::test]
    async fn divide_returns_floating_point() {
        let rmcp::Json(v) = CalcSvc
            .calc_divide(params(json!({"a": 100, "b": 4})))
            .await
            .unwrap();
        assert_eq!(v["result"], 25.0);
    }

    #[tokio::test]
    async fn divide_by_zero_is_invalid_params() {
        let err = CalcSvc
            .calc_divide(params(json!({"a": 100, "b": 0})))
            .await
            .err()
            .unwrap();
        // JSON-RPC invalid params is -32602
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("division by zero"));
    }

    #[tokio::test]
    async fn integer_overflow_is_invalid_params() {
        let err = CalcSvc
            .calc_add(params(json!({"a": i64::MAX, "b": 1})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("integer overflow in add"));
    }

    #[tokio::test]
    async fn missing_operand_is_invalid_params() {
        let err = CalcSvc
            .calc_add(params(json!({"a": 1})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("missing or non-integer field: b"));
    }

    #[tokio::test]
    async fn non_numeric_operand_is_rejected() {
        let err = CalcSvc
            .calc_divide(params(json!({"a": "ten", "b": 2})))
            .await
            .err()
            .unwrap();
        assert!(err.message.contains("missing or non-numeric field: a"));
    }
}
