//! The four calculator operations, as pure functions plus their registry
//! wrappers. Integer ops stay integer; divide is always floating-point.

use async_trait::async_trait;
use serde_json::json;

use crate::core::error::CalcError;
use crate::core::tool::{Tool, ToolSpec};

pub fn add(a: i64, b: i64) -> Result<i64, CalcError> {
    a.checked_add(b)
        .ok_or_else(|| CalcError::Message("integer overflow in add".into()))
}

pub fn subtract(a: i64, b: i64) -> Result<i64, CalcError> {
    a.checked_sub(b)
        .ok_or_else(|| CalcError::Message("integer overflow in subtract".into()))
}

pub fn multiply(a: i64, b: i64) -> Result<i64, CalcError> {
    a.checked_mul(b)
        .ok_or_else(|| CalcError::Message("integer overflow in multiply".into()))
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

fn integer_pair_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "a": { "type": "integer" },
            "b": { "type": "integer" }
        },
        "required": ["a", "b"]
    })
}

fn number_pair_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "a": { "type": "number" },
            "b": { "type": "number" }
        },
        "required": ["a", "b"]
    })
}

fn int_args(arguments: &serde_json::Value) -> Result<(i64, i64), CalcError> {
    let get = |k: &str| {
        arguments
            .get(k)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| CalcError::Message(format!("missing or non-integer field: {k}")))
    };
    Ok((get("a")?, get("b")?))
}

fn num_args(arguments: &serde_json::Value) -> Result<(f64, f64), CalcError> {
    let get = |k: &str| {
        arguments
            .get(k)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| CalcError::Message(format!("missing or non-numeric field: {k}")))
    };
    Ok((get("a")?, get("b")?))
}

#[derive(Clone, Default)]
pub struct AddTool;

impl ToolSpec for AddTool {
    fn name(&self) -> &'static str {
        "calc.add"
    }
    fn description(&self) -> &'static str {
        "Add two integers and return {\"result\": a + b}"
    }
    fn input_schema(&self) -> serde_json::Value {
        integer_pair_schema()
    }
}

#[async_trait]
impl Tool for AddTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, CalcError> {
        let (a, b) = int_args(arguments)?;
        Ok(json!({ "result": add(a, b)? }))
    }
}

#[derive(Clone, Default)]
pub struct SubtractTool;

impl ToolSpec for SubtractTool {
    fn name(&self) -> &'static str {
        "calc.subtract"
    }
    fn description(&self) -> &'static str {
        "Subtract b from a and return {\"result\": a - b}"
    }
    fn input_schema(&self) -> serde_json::Value {
        integer_pair_schema()
    }
}

#[async_trait]
impl Tool for SubtractTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, CalcError> {
        let (a, b) = int_args(arguments)?;
        Ok(json!({ "result": subtract(a, b)? }))
    }
}

#[derive(Clone, Default)]
pub struct MultiplyTool;

impl ToolSpec for MultiplyTool {
    fn name(&self) -> &'static str {
        "calc.multiply"
    }
    fn description(&self) -> &'static str {
        "Multiply two integers and return {\"result\": a * b}"
    }
    fn input_schema(&self) -> serde_json::Value {
        integer_pair_schema()
    }
}

#[async_trait]
impl Tool for MultiplyTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, CalcError> {
        let (a, b) = int_args(arguments)?;
        Ok(json!({ "result": multiply(a, b)? }))
    }
}

#[derive(Clone, Default)]
pub struct DivideTool;

impl ToolSpec for DivideTool {
    fn name(&self) -> &'static str {
        "calc.divide"
    }
    fn description(&self) -> &'static str {
        "Divide a by b and return {\"result\": a / b} as floating point"
    }
    fn input_schema(&self) -> serde_json::Value {
        number_pair_schema()
    }
}

#[async_trait]
impl Tool for DivideTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, CalcError> {
        let (a, b) = num_args(arguments)?;
        let quotient = divide(a, b)?;
        Ok(json!({ "result": quotient }))
    }
}
