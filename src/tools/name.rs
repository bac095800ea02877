use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::{ToolDefinition, ToolParametersBuilder, text_content};
use crate::names::{NameGenerator, generate_legacy_name};

/// 名前生成ツール。`legacy: true` で旧方式 (beginning + middle + ending)。
pub fn build_name_tool(generator: Arc<NameGenerator>) -> ToolDefinition {
    let params = ToolParametersBuilder::new_object()
        .add_boolean("legacy", Some("Use the older fragment-based generator (optional)"))
        .additional_properties(false)
        .build();

    ToolDefinition::new(
        "getName",
        "Generates a pronounceable fantasy character name.",
        params,
        Arc::new(move |args: &Value| {
            let legacy = args.get("legacy").and_then(Value::as_bool).unwrap_or(false);
            let name = if legacy { generate_legacy_name() } else { generator.generate_name() };
            info!(target: "tools", %name, legacy, "name_generated");
            let mut out = text_content(format!("Generated name: {name}"));
            out["name"] = Value::String(name);
            Ok(out)
        }),
    )
}
