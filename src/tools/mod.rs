pub mod arithmetic;
pub mod registry;
pub mod tool_router;
