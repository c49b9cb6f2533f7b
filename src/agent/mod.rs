//! Client agent: connects to the calculator server, discovers the tool
//! catalog, runs the fixed four-step task script and prints a report.
//!
//! Failure model is deliberately flat: if the server cannot be reached or
//! the catalog cannot be listed, the script is skipped and the process
//! still exits cleanly. No retries, no backoff.

use chrono::{SecondsFormat, Utc};
use rmcp::{
    model::CallToolRequestParam,
    service::RunningService,
    transport::StreamableHttpClientTransport,
    RoleClient, ServiceExt,
};
use serde_json::Value as JsonValue;

use crate::core::error::CalcError;

type CalcClient = RunningService<RoleClient, ()>;

pub struct TaskStep {
    pub tool: &'static str,
    pub symbol: &'static str,
    pub a: i64,
    pub b: i64,
}

/// The fixed task sequence: 15+27, 50-10, 8*6, 100/4.
pub fn task_script() -> Vec<TaskStep> {
    vec![
        TaskStep { tool: "calc.add", symbol: "+", a: 15, b: 27 },
        TaskStep { tool: "calc.subtract", symbol: "-", a: 50, b: 10 },
        TaskStep { tool: "calc.multiply", symbol: "*", a: 8, b: 6 },
        TaskStep { tool: "calc.divide", symbol: "/", a: 100, b: 4 },
    ]
}

pub struct StepReport {
    pub expression: String,
    pub outcome: Result<JsonValue, String>,
}

/// Pull {"result": ..} out of a tool call's structured content.
pub fn extract_result(structured: Option<&JsonValue>) -> Option<JsonValue> {
    structured?.get("result").cloned()
}

pub fn render_report(steps: &[StepReport]) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let _ = writeln!(out, "calculator report ({stamp})");
    for step in steps {
        match &step.outcome {
            Ok(v) => { let _ = writeln!(out, "  {} = {}", step.expression, v); }
            Err(e) => { let _ = writeln!(out, "  {} = error ({})", step.expression, e); }
        }
    }
    out
}

fn connection_failure_message(url: &str, err: &CalcError) -> String {
    format!("connection error: calculator server at {url} is unavailable ({err})")
}

fn report_connection_failure(url: &str, err: &CalcError) {
    tracing::warn!(url, error = %err, "connection failure");
    println!("{}", connection_failure_message(url, err));
    println!("task sequence skipped");
}

/// Disconnected -> Connected(tools loaded) -> Done.
pub async fn run(url: &str) -> anyhow::Result<()> {
    tracing::info!(url, "connecting to calculator server");
    let transport = StreamableHttpClientTransport::from_uri(url.to_owned());
    let client: CalcClient = match ().serve(transport).await {
        Ok(c) => c,
        Err(e) => {
            report_connection_failure(url, &CalcError::Connection(e.to_string()));
            return Ok(());
        }
    };

    match discover_tools(&client).await {
        Ok(names) => {
            println!("discovered tools: {}", names.join(", "));
            let steps = execute_script(&client).await;
            print!("{}", render_report(&steps));
        }
        Err(e) => report_connection_failure(url, &e),
    }

    // Release the connection on every exit path.
    if let Err(e) = client.cancel().await {
        tracing::debug!(error = %e, "client shutdown");
    }
    Ok(())
}

async fn discover_tools(client: &CalcClient) -> Result<Vec<String>, CalcError> {
    let tools = client
        .peer()
        .list_all_tools()
        .await
        .map_err(|e| CalcError::Connection(e.to_string()))?;
    let mut names: Vec<String> = tools.into_iter().map(|t| t.name.to_string()).collect();
    names.sort();
    tracing::info!(count = names.len(), "discovered tools");
    Ok(names)
}

async fn execute_script(client: &CalcClient) -> Vec<StepReport> {
    let mut reports = Vec::new();
    for step in task_script() {
        let expression = format!("{} {} {}", step.a, step.symbol, step.b);
        let arguments = serde_json::json!({ "a": step.a, "b": step.b })
            .as_object()
            .cloned();
        let outcome = match client
            .peer()
            .call_tool(CallToolRequestParam { name: step.tool.into(), arguments })
            .await
        {
            Ok(res) => match extract_result(res.structured_content.as_ref()) {
                Some(v) => Ok(v),
                None => Err("malformed tool result".to_string()),
            },
            Err(e) => Err(e.to_string()),
        };
        match &outcome {
            Ok(v) => tracing::info!(tool = step.tool, result = %v, "step completed"),
            Err(e) => tracing::warn!(tool = step.tool, error = %e, "step failed"),
        }
        reports.push(StepReport { expression, outcome });
    }
    reports
}
