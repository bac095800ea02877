//! Tools exposed to LLM function calling.
//!
//! Each builder returns a [`ToolDefinition`] whose handler takes the call
//! arguments as JSON and answers with `{ "content": [{ "type": "text", ... }] }`
//! plus a structured field for callers that want the raw value.

mod core;
mod dice;
mod name;
mod stat_block;

use std::sync::Arc;

pub use self::core::{
    ToolDefinition,
    ToolHandler,
    ToolParameters,
    ToolParametersBuilder,
    extract_text,
    text_content,
};
pub use dice::build_dice_tool;
pub use name::build_name_tool;
pub use stat_block::build_stat_block_tool;

use crate::names::NameGenerator;
use crate::stat_block::FillOptions;

/// All built-in tools sharing one name generator.
pub fn build_default_tools(generator: Arc<NameGenerator>, options: FillOptions) -> Vec<ToolDefinition> {
    vec![
        build_dice_tool(),
        build_stat_block_tool(Arc::clone(&generator), options),
        build_name_tool(generator),
    ]
}
