use serde_json::Value;
use std::fmt::{self, Display};

/// モデル（または CLI / RPC 呼び出し元）が出した「次に何をするか」
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCallDecision {
    /// そのまま返すテキスト
    Text(String),
    /// ツール呼び出し。`arguments` は未パースの JSON 文字列
    ToolCall { name: String, arguments: String },
}

/// ツール呼び出しを解決・実行した結果。失敗も panic せず enum で表現する。
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResolution {
    ModelText(String),
    Executed { name: String, result: Value },
    ToolNotFound { requested: String },
    ArgumentsParseError { name: String, raw: String, error: String },
    MissingParameter { name: String, parameter: String },
    ExecutionError { name: String, error: String },
}

impl ToolResolution {
    pub fn is_executed(&self) -> bool {
        matches!(self, ToolResolution::Executed { .. })
    }

    /// RPC 応答用の JSON: 成功なら `{ result }`、失敗なら `{ error }`
    pub fn to_response(&self) -> Value {
        match self {
            ToolResolution::ModelText(t) => serde_json::json!({ "result": t }),
            ToolResolution::Executed { result, .. } => serde_json::json!({ "result": result }),
            ToolResolution::ToolNotFound { requested } => {
                serde_json::json!({ "error": format!("Tool '{requested}' not found.") })
            }
            ToolResolution::MissingParameter { parameter, .. } => {
                serde_json::json!({ "error": format!("Missing required parameter: {parameter}") })
            }
            ToolResolution::ArgumentsParseError { error, .. } => {
                serde_json::json!({ "error": "Invalid request", "cause": error })
            }
            ToolResolution::ExecutionError { error, .. } => {
                serde_json::json!({ "error": format!("Failed to execute tool: {error}") })
            }
        }
    }
}

impl Display for ToolCallDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolCallDecision::Text(t) => write!(f, "Text(len={}):\n{}", t.len(), t),
            ToolCallDecision::ToolCall { name, arguments } => {
                write!(f, "ToolCall name={} args={} (len={})", name, arguments, arguments.len())
            }
        }
    }
}

impl Display for ToolResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolResolution::ModelText(t) => write!(f, "ModelText(len={}):\n{}", t.len(), t),
            ToolResolution::Executed { name, result } => {
                write!(f, "Executed name={} result={} (json)", name, result)
            }
            ToolResolution::ToolNotFound { requested } => write!(f, "ToolNotFound requested={}", requested),
            ToolResolution::ArgumentsParseError { name, raw, error } => {
                write!(f, "ArgumentsParseError name={} error={} raw={}", name, error, raw)
            }
            ToolResolution::MissingParameter { name, parameter } => {
                write!(f, "MissingParameter name={} parameter={}", name, parameter)
            }
            ToolResolution::ExecutionError { name, error } => {
                write!(f, "ExecutionError name={} error={}", name, error)
            }
        }
    }
}
