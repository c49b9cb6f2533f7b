//! Core types & traits: domain-agnostic contracts for tools and the RPC envelope.

pub mod error;
pub mod rpc;
pub mod tool;
