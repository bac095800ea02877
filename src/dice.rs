//! ダイスロール
//!
//! `NdM` 形式のロールと、ツール/CLI から渡される引数の検証を行う。

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

/// 1 回の要求で振れるダイスの上限
pub const MAX_ROLLS: u32 = 1000;
/// ダイスの面数の上限
pub const MAX_SIDES: u32 = 1000;

/// ロール要求の検証エラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("numRolls must be at least 1 (got {0})")]
    TooFewRolls(u32),
    #[error("numSides must be at least 2 (got {0})")]
    TooFewSides(u32),
    #[error("numRolls must be at most 1000 (got {0})")]
    TooManyRolls(u32),
    #[error("numSides must be at most 1000 (got {0})")]
    TooManySides(u32),
}

/// `num_rolls` 個の `num_sides` 面ダイスを振った合計を返す（0 個なら 0）
pub fn roll_dice(num_rolls: u32, num_sides: u32) -> u32 {
    roll_dice_with(num_rolls, num_sides, &mut rand::thread_rng())
}

/// 合計は `u32::MAX` で頭打ちになる
pub fn roll_dice_with(num_rolls: u32, num_sides: u32, rng: &mut impl Rng) -> u32 {
    if num_sides == 0 {
        return 0;
    }
    (0..num_rolls).fold(0u32, |acc, _| acc.saturating_add(rng.gen_range(1..=num_sides)))
}

/// 各ダイスの出目を個別に返す
pub fn roll_each(num_rolls: u32, num_sides: u32, rng: &mut impl Rng) -> Vec<u32> {
    if num_sides == 0 {
        return vec![0; num_rolls as usize];
    }
    (0..num_rolls).map(|_| rng.gen_range(1..=num_sides)).collect()
}

/// ツール引数として受け取るロール要求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRequest {
    pub num_rolls: u32,
    pub num_sides: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DiceRequest {
    pub fn new(num_rolls: u32, num_sides: u32, reason: Option<String>) -> Result<Self, DiceError> {
        let req = Self { num_rolls, num_sides, reason };
        req.validate()?;
        Ok(req)
    }

    pub fn validate(&self) -> Result<(), DiceError> {
        if self.num_rolls < 1 {
            return Err(DiceError::TooFewRolls(self.num_rolls));
        }
        if self.num_rolls > MAX_ROLLS {
            return Err(DiceError::TooManyRolls(self.num_rolls));
        }
        if self.num_sides < 2 {
            return Err(DiceError::TooFewSides(self.num_sides));
        }
        if self.num_sides > MAX_SIDES {
            return Err(DiceError::TooManySides(self.num_sides));
        }
        Ok(())
    }

    pub fn roll(&self) -> Result<DiceRoll, DiceError> {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with(&self, rng: &mut impl Rng) -> Result<DiceRoll, DiceError> {
        self.validate()?;
        let rolls = roll_each(self.num_rolls, self.num_sides, rng);
        let total = rolls.iter().sum();
        Ok(DiceRoll {
            num_rolls: self.num_rolls,
            num_sides: self.num_sides,
            reason: self.reason.clone(),
            rolls,
            total,
        })
    }
}

/// ロール結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRoll {
    pub num_rolls: u32,
    pub num_sides: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub rolls: Vec<u32>,
    pub total: u32,
}

impl Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rolled {}d{}", self.num_rolls, self.num_sides)?;
        if let Some(reason) = self.reason.as_deref().filter(|r| !r.is_empty()) {
            write!(f, " ({reason})")?;
        }
        write!(f, ": {}", self.total)
    }
}
