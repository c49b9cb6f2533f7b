use async_trait::async_trait;

use crate::core::error::CalcError;

/// Minimal metadata every tool must expose.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
}

/// Tool = metadata + an async handler. Handlers are pure; logging happens at
/// the dispatch layer, not inside the tool.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, CalcError>;
}
