// Tool-call dispatch: decision/resolution types, the resolver, and a registry for direct invocation.

pub mod types;
pub mod resolver;
pub mod registry;

pub use types::{ToolCallDecision, ToolResolution};
pub use resolver::{execute_checked, find_tool, resolve_and_execute_tool_call};
pub use registry::ToolRegistry;
