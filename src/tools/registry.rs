use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::CalcError;
use crate::core::tool::Tool;
use crate::tools::arithmetic::{AddTool, DivideTool, MultiplyTool, SubtractTool};

/// Explicit tool registry: name -> handler + schema, built once at startup
/// and handed to the transport layer. Dispatch logs entry and completion so
/// individual handlers stay pure.
#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn with_tools<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in iter.into_iter() {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    /// Catalog entries, sorted by name for stable listings.
    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub async fn call(&self, name: &str, args: &serde_json::Value) -> Result<serde_json::Value, CalcError> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| CalcError::Message(format!("unknown tool: {name}")))?;
        metrics::counter!("tool_calls_total", "tool" => name.to_string()).increment(1);
        tracing::info!(tool = name, args = %args, "tool invoked");
        let out = t.call(args).await;
        match &out {
            Ok(v) => tracing::info!(tool = name, result = %v, "tool completed"),
            Err(e) => tracing::warn!(tool = name, error = %e, "tool failed"),
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// The calculator catalog: four arithmetic tools, immutable after startup.
pub fn build_registry() -> ToolRegistry {
    ToolRegistry::with_tools([
        Arc::new(AddTool) as Arc<dyn Tool>,
        Arc::new(SubtractTool) as Arc<dyn Tool>,
        Arc::new(MultiplyTool) as Arc<dyn Tool>,
        Arc::new(DivideTool) as Arc<dyn Tool>,
    ])
}
