use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use serde_json::Value;
use tracing::info;

use super::{ToolDefinition, ToolParametersBuilder, text_content};
use crate::dice::{DiceRequest, MAX_ROLLS, MAX_SIDES};

/// ダイスロールツール。`numRolls` 個の `numSides` 面ダイスを振って合計を返す。
pub fn build_dice_tool() -> ToolDefinition {
    let params = ToolParametersBuilder::new_object()
        .add_integer("numRolls", Some("Number of dice to roll (e.g., 2 means roll two dice)"), Some(1), Some(i64::from(MAX_ROLLS)))
        .add_integer("numSides", Some("Number of sides on each die (e.g., 6 for a standard d6)"), Some(2), Some(i64::from(MAX_SIDES)))
        .add_string("reason", Some("Reason for rolling the dice (optional)"))
        .required("numRolls")
        .required("numSides")
        .build();

    ToolDefinition::new(
        "getDice",
        "Rolls one or more dice and returns the result.",
        params,
        Arc::new(|args: &Value| {
            let req: DiceRequest = serde_json::from_value(args.clone())
                .wrap_err("invalid getDice arguments")?;
            let roll = req.roll()?;
            info!(target: "tools", num_rolls = roll.num_rolls, num_sides = roll.num_sides, total = roll.total, "dice_rolled");
            let mut out = text_content(roll.to_string());
            out["roll"] = serde_json::to_value(&roll)?;
            Ok(out)
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dice_tool_rolls() {
        let tool = build_dice_tool();
        let out = tool.execute(&json!({"numRolls": 2, "numSides": 6, "reason": "damage"})).unwrap();
        let text = out["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Rolled 2d6 (damage): "), "{text}");
        let total = out["roll"]["total"].as_u64().unwrap();
        assert!((2..=12).contains(&total));
    }

    #[test]
    fn dice_tool_rejects_one_sided_die() {
        let tool = build_dice_tool();
        let err = tool.execute(&json!({"numRolls": 2, "numSides": 1})).unwrap_err();
        assert!(err.to_string().contains("numSides"));
    }

    #[test]
    fn dice_tool_rejects_huge_dice() {
        let tool = build_dice_tool();
        let err = tool.execute(&json!({"numRolls": 4, "numSides": 4294967295u64})).unwrap_err();
        assert!(err.to_string().contains("at most"), "{err}");
    }

    #[test]
    fn dice_tool_schema_requires_counts() {
        let tool = build_dice_tool();
        assert_eq!(tool.parameters.required(), vec!["numRolls", "numSides"]);
        let props = &tool.parameters.as_value()["properties"];
        assert_eq!(props["numRolls"]["maximum"], MAX_ROLLS);
        assert_eq!(props["numSides"]["maximum"], MAX_SIDES);
    }
}
