use serde_json::Value;
use tracing::{debug, warn};

use super::types::{ToolCallDecision, ToolResolution};
use crate::tools::ToolDefinition;

/// 名前でツールを探す。完全一致がなければ `_` を取り除いた名前でも照合する
/// (`get_Dice` → `getDice`)。
pub fn find_tool<'a>(tools: &'a [ToolDefinition], name: &str) -> Option<&'a ToolDefinition> {
    tools.iter().find(|t| t.name == name).or_else(|| {
        let stripped = name.replace('_', "");
        tools.iter().find(|t| t.name == stripped)
    })
}

/// `required` を確認してから実行する
pub fn execute_checked(tool: &ToolDefinition, args: &Value) -> ToolResolution {
    for param in tool.parameters.required() {
        if args.get(param).is_none() {
            debug!(target: "dispatch", tool = tool.name, parameter = param, "missing_required_parameter");
            return ToolResolution::MissingParameter {
                name: tool.name.to_string(),
                parameter: param.to_string(),
            };
        }
    }
    match tool.execute(args) {
        Ok(result) => ToolResolution::Executed { name: tool.name.to_string(), result },
        Err(e) => {
            warn!(target: "dispatch", tool = tool.name, error = %e, "tool_execution_failed");
            ToolResolution::ExecutionError { name: tool.name.to_string(), error: e.to_string() }
        }
    }
}

/// 与えられた `ToolCallDecision` を利用可能な `ToolDefinition` の集合に対して解決し、
/// 実際にツールを実行して `ToolResolution` を返す。
/// - `Text` の場合は `ModelText`
/// - `ToolCall` の場合は: ツール検索→JSONパース→必須チェック→execute の順
pub fn resolve_and_execute_tool_call(decision: ToolCallDecision, tools: &[ToolDefinition]) -> ToolResolution {
    match decision {
        ToolCallDecision::Text(t) => ToolResolution::ModelText(t),
        ToolCallDecision::ToolCall { name, arguments } => {
            let tool = match find_tool(tools, &name) {
                Some(t) => t,
                None => return ToolResolution::ToolNotFound { requested: name },
            };
            // 空文字は引数なしとして扱う
            let raw = if arguments.trim().is_empty() { "{}" } else { arguments.as_str() };
            let parsed: Value = match serde_json::from_str(raw) {
                Ok(v) => v,
                Err(e) => {
                    return ToolResolution::ArgumentsParseError {
                        name: tool.name.to_string(),
                        raw: arguments,
                        error: e.to_string(),
                    };
                }
            };
            execute_checked(tool, &parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::build_dice_tool;

    #[test]
    fn resolve_text_passthrough() {
        let res = resolve_and_execute_tool_call(ToolCallDecision::Text("hello".into()), &[]);
        assert!(matches!(res, ToolResolution::ModelText(ref t) if t == "hello"));
    }

    #[test]
    fn resolve_tool_executes() {
        let tools = vec![build_dice_tool()];
        let decision = ToolCallDecision::ToolCall {
            name: "getDice".into(),
            arguments: r#"{"numRolls": 1, "numSides": 4}"#.into(),
        };
        match resolve_and_execute_tool_call(decision, &tools) {
            ToolResolution::Executed { name, result } => {
                assert_eq!(name, "getDice");
                assert!((1..=4).contains(&result["roll"]["total"].as_u64().unwrap()));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn resolve_tool_not_found() {
        let decision = ToolCallDecision::ToolCall { name: "nope".into(), arguments: "{}".into() };
        let res = resolve_and_execute_tool_call(decision, &[]);
        assert!(matches!(res, ToolResolution::ToolNotFound { .. }));
    }

    #[test]
    fn resolve_args_parse_error() {
        let tools = vec![build_dice_tool()];
        let decision = ToolCallDecision::ToolCall { name: "getDice".into(), arguments: "{not json}".into() };
        let res = resolve_and_execute_tool_call(decision, &tools);
        assert!(matches!(res, ToolResolution::ArgumentsParseError { .. }));
    }

    #[test]
    fn underscore_variant_is_found() {
        let tools = vec![build_dice_tool()];
        assert!(find_tool(&tools, "get_Dice").is_some());
        assert!(find_tool(&tools, "getDice").is_some());
        assert!(find_tool(&tools, "get_dice").is_none());
    }
}
