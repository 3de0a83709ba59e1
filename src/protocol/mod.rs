//! Protocol types for collaborator-facing operations
//!
//! This module contains the tool contract; transports live with the host.

mod tool;

pub use tool::{required_str, Tool, ToolDefinition, ToolError, ToolResult};
