pub mod agent;
pub mod api;
pub mod cli;
pub mod core;
pub mod infra;
pub mod tools;
