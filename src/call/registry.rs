use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use super::resolver::{execute_checked, find_tool, resolve_and_execute_tool_call};
use super::types::{ToolCallDecision, ToolResolution};
use crate::names::NameGenerator;
use crate::stat_block::FillOptions;
use crate::tools::{ToolDefinition, build_default_tools};

/// Named set of tools that can be listed and invoked directly, without a model
/// in the loop.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    /// The built-in dice, stat-block and name tools.
    pub fn with_defaults(generator: Arc<NameGenerator>, options: FillOptions) -> Self {
        Self::new(build_default_tools(generator, options))
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn find(&self, method: &str) -> Option<&ToolDefinition> {
        find_tool(&self.tools, method)
    }

    /// `{ "tools": [ {name, description, parameters}, ... ] }`
    pub fn list(&self) -> Value {
        let tools: Vec<Value> = self.tools.iter().map(ToolDefinition::describe).collect();
        json!({ "tools": tools })
    }

    /// Invoke `method` with already-parsed params. `null` params count as `{}`.
    #[instrument(name = "invoke_tool", skip(self, params))]
    pub fn invoke(&self, method: &str, params: &Value) -> ToolResolution {
        let Some(tool) = self.find(method) else {
            info!(target: "dispatch", method, "tool_not_found");
            return ToolResolution::ToolNotFound { requested: method.to_string() };
        };
        let empty = json!({});
        let params = if params.is_null() { &empty } else { params };
        debug!(target: "dispatch", tool = tool.name, params = %params, "invoking_tool");
        execute_checked(tool, params)
    }

    pub fn resolve(&self, decision: ToolCallDecision) -> ToolResolution {
        resolve_and_execute_tool_call(decision, &self.tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::with_defaults(Arc::new(NameGenerator::default()), FillOptions::default())
    }

    #[test]
    fn list_contains_builtin_tools() {
        let listing = registry().list();
        let names: Vec<&str> = listing["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["getDice", "getStatBlock", "getName"]);
    }

    #[test]
    fn missing_required_parameter_is_reported() {
        let res = registry().invoke("getDice", &json!({"numRolls": 2}));
        assert_eq!(
            res,
            ToolResolution::MissingParameter { name: "getDice".into(), parameter: "numSides".into() }
        );
        assert_eq!(res.to_response()["error"], "Missing required parameter: numSides");
    }

    #[test]
    fn null_params_are_empty_object() {
        let res = registry().invoke("getName", &Value::Null);
        assert!(res.is_executed(), "{res}");
    }

    #[test]
    fn unknown_method() {
        let res = registry().invoke("castFireball", &json!({}));
        assert_eq!(res.to_response()["error"], "Tool 'castFireball' not found.");
    }
}
