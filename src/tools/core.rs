use std::fmt;
use std::sync::Arc;

use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};
use color_eyre::Result;
use serde_json::{Map, Value, json};

/// ランタイムで実行するツール関数の型。
/// 引数(JSON)を受け取り、結果(JSON)を返す。
pub type ToolHandler = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync + 'static>;

/// JSON Schema (type = object) をラップした引数定義
#[derive(Debug, Clone, PartialEq)]
pub struct ToolParameters(Value);

impl ToolParameters {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `required` に列挙されたパラメータ名
    pub fn required(&self) -> Vec<&str> {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// オブジェクト型スキーマを組み立てるビルダー
#[derive(Debug, Default)]
pub struct ToolParametersBuilder {
    properties: Map<String, Value>,
    required: Vec<String>,
    additional_properties: Option<bool>,
}

impl ToolParametersBuilder {
    pub fn new_object() -> Self {
        Self::default()
    }

    fn property(mut self, name: &str, mut schema: Value, description: Option<&str>) -> Self {
        if let (Some(d), Some(obj)) = (description, schema.as_object_mut()) {
            obj.insert("description".into(), Value::String(d.to_string()));
        }
        self.properties.insert(name.to_string(), schema);
        self
    }

    pub fn add_string(self, name: &str, description: Option<&str>) -> Self {
        self.property(name, json!({ "type": "string" }), description)
    }

    pub fn add_string_enum(self, name: &str, description: Option<&str>, values: &[&str]) -> Self {
        self.property(name, json!({ "type": "string", "enum": values }), description)
    }

    pub fn add_boolean(self, name: &str, description: Option<&str>) -> Self {
        self.property(name, json!({ "type": "boolean" }), description)
    }

    pub fn add_integer(self, name: &str, description: Option<&str>, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        let mut schema = json!({ "type": "integer" });
        if let Some(min) = minimum {
            schema["minimum"] = json!(min);
        }
        if let Some(max) = maximum {
            schema["maximum"] = json!(max);
        }
        self.property(name, schema, description)
    }

    /// 小数も受け付ける数値 (`type: number`)
    pub fn add_number(self, name: &str, description: Option<&str>) -> Self {
        self.property(name, json!({ "type": "number" }), description)
    }

    pub fn required(mut self, name: &str) -> Self {
        if !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
        self
    }

    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    pub fn build(self) -> ToolParameters {
        let mut schema = json!({
            "type": "object",
            "properties": Value::Object(self.properties),
            "required": self.required,
        });
        if let Some(allowed) = self.additional_properties {
            schema["additionalProperties"] = json!(allowed);
        }
        ToolParameters(schema)
    }
}

/// OpenAI function calling に渡すメタデータと実行ハンドラをまとめた定義。
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: ToolParameters,
    pub strict: bool,
    handler: ToolHandler,
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("strict", &self.strict)
            .finish()
    }
}

impl ToolDefinition {
    pub fn new(
        name: &'static str,
        description: &'static str,
        parameters: ToolParameters,
        handler: ToolHandler,
    ) -> Self {
        Self { name, description, parameters, strict: false, handler }
    }

    pub fn function_object(&self) -> FunctionObject {
        FunctionObject {
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            parameters: Some(self.parameters.as_value().clone()),
            strict: Some(self.strict),
        }
    }

    /// ChatCompletionTool 形式（APIへ渡す vector 用）
    pub fn as_chat_tool(&self) -> ChatCompletionTool {
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: self.function_object(),
        }
    }

    /// 一覧表示用の `{name, description, parameters}`
    pub fn describe(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters.as_value(),
        })
    }

    pub fn execute(&self, args: &Value) -> Result<Value> {
        (self.handler)(args)
    }
}

/// ツール結果の共通形 `{ content: [{ type: "text", text }] }`
pub fn text_content(text: impl Into<String>) -> Value {
    json!({ "content": [ { "type": "text", "text": text.into() } ] })
}

/// ツール結果から表示用テキストを取り出す。
/// 文字列はそのまま、`content[0].text` があればそれ、それ以外は JSON 文字列。
pub fn extract_text(result: &Value) -> String {
    if let Some(s) = result.as_str() {
        return s.to_string();
    }
    if let Some(text) = result.pointer("/content/0/text").and_then(Value::as_str) {
        return text.to_string();
    }
    result.to_string()
}
