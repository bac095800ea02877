//! キャラクターのステータスブロック生成
//!
//! 入力で与えられた値はそのまま使い、欠けている値だけをダイスや名前生成器で埋める。
//! `show_source` が有効なら各値に `(PROVIDED_AS_INPUT)` / `(GENERATED_BY_TOOL)` を付ける。

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::debug;

use crate::dice::{roll_dice_with, roll_each};
use crate::names::NameGenerator;

pub const PROVIDED_MARK: &str = "(PROVIDED_AS_INPUT)";
pub const GENERATED_MARK: &str = "(GENERATED_BY_TOOL)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
    Assassin,
    Unknown,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 14] = [
        Self::Barbarian,
        Self::Bard,
        Self::Cleric,
        Self::Druid,
        Self::Fighter,
        Self::Monk,
        Self::Paladin,
        Self::Ranger,
        Self::Rogue,
        Self::Sorcerer,
        Self::Warlock,
        Self::Wizard,
        Self::Assassin,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
            Self::Assassin => "Assassin",
            Self::Unknown => "Unknown",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }

    /// `Unknown` 以外からランダムに選ぶ
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[..Self::ALL.len() - 1].choose(rng).copied().unwrap_or(Self::Unknown)
    }
}

impl Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterRace {
    Human,
    Elf,
    Dwarf,
    Halfling,
    Dragonborn,
    Gnome,
    #[serde(rename = "Half-Elf")]
    HalfElf,
    #[serde(rename = "Half-Orc")]
    HalfOrc,
    Tiefling,
    Unknown,
}

impl CharacterRace {
    pub const ALL: [CharacterRace; 10] = [
        Self::Human,
        Self::Elf,
        Self::Dwarf,
        Self::Halfling,
        Self::Dragonborn,
        Self::Gnome,
        Self::HalfElf,
        Self::HalfOrc,
        Self::Tiefling,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Halfling => "Halfling",
            Self::Dragonborn => "Dragonborn",
            Self::Gnome => "Gnome",
            Self::HalfElf => "Half-Elf",
            Self::HalfOrc => "Half-Orc",
            Self::Tiefling => "Tiefling",
            Self::Unknown => "Unknown",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[..Self::ALL.len() - 1].choose(rng).copied().unwrap_or(Self::Unknown)
    }
}

impl Display for CharacterRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 能力値: 4d6 を振って最小の 1 個を捨てた合計 (3..=18)
pub fn roll_stat(rng: &mut impl Rng) -> u32 {
    let mut rolls = roll_each(4, 6, rng);
    rolls.sort_unstable();
    rolls.iter().skip(1).sum()
}

/// レベル: 3d3 - 2 (1..=7)
pub fn roll_level(rng: &mut impl Rng) -> u32 {
    roll_dice_with(3, 3, rng) - 2
}

/// 入力。0 や空文字は「未指定」とみなす。
/// 数値は JSON の `number` をそのまま受け取り、小数や負数も入力値として残す。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatBlockInput {
    pub level: Option<f64>,
    pub name: Option<String>,
    pub character_class: Option<CharacterClass>,
    pub race: Option<CharacterRace>,
    pub intelligence: Option<f64>,
    pub wisdom: Option<f64>,
    pub charisma: Option<f64>,
    pub strength: Option<f64>,
    pub dexterity: Option<f64>,
    pub constitution: Option<f64>,
    pub ac: Option<f64>,
    pub hp: Option<f64>,
    pub max_hp: Option<f64>,
}

/// 出力。値は出所の注記を含むので文字列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub level: String,
    pub name: String,
    pub character_class: String,
    pub race: String,
    pub intelligence: String,
    pub wisdom: String,
    pub charisma: String,
    pub strength: String,
    pub dexterity: String,
    pub constitution: String,
    pub ac: String,
    pub hp: String,
    pub max_hp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptions {
    pub show_source: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self { show_source: true }
    }
}

fn provided_number(v: Option<f64>) -> Option<f64> {
    v.filter(|n| n.is_finite() && *n != 0.0)
}

fn render<T: Display>(provided: Option<T>, generate: impl FnOnce() -> T, show_source: bool) -> String {
    let (value, mark) = match provided {
        Some(v) => (v, PROVIDED_MARK),
        None => (generate(), GENERATED_MARK),
    };
    if show_source { format!("{value} {mark}") } else { value.to_string() }
}

/// スレッドローカル RNG で欠けた値を埋める
pub fn fill_stat_block(input: &StatBlockInput, options: FillOptions, names: &NameGenerator) -> StatBlock {
    fill_stat_block_with(input, options, names, &mut rand::thread_rng())
}

pub fn fill_stat_block_with(
    input: &StatBlockInput,
    options: FillOptions,
    names: &NameGenerator,
    rng: &mut impl Rng,
) -> StatBlock {
    let show = options.show_source;

    // クラス名がそのまま名前に入ってきた場合は名前として扱わない
    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .filter(|n| input.character_class.map_or(true, |c| !c.as_str().eq_ignore_ascii_case(n)))
        .map(str::to_string);
    if input.name.is_some() && name.is_none() {
        debug!(target: "tools", raw = ?input.name, "stat_block_name_discarded");
    }

    StatBlock {
        level: render(provided_number(input.level), || f64::from(roll_level(rng)), show),
        name: render(name, || names.generate_name_with(rng), show),
        character_class: render(input.character_class, || CharacterClass::random(rng), show),
        race: render(input.race, || CharacterRace::random(rng), show),
        intelligence: render(provided_number(input.intelligence), || f64::from(roll_stat(rng)), show),
        wisdom: render(provided_number(input.wisdom), || f64::from(roll_stat(rng)), show),
        charisma: render(provided_number(input.charisma), || f64::from(roll_stat(rng)), show),
        strength: render(provided_number(input.strength), || f64::from(roll_stat(rng)), show),
        dexterity: render(provided_number(input.dexterity), || f64::from(roll_stat(rng)), show),
        constitution: render(provided_number(input.constitution), || f64::from(roll_stat(rng)), show),
        ac: render(provided_number(input.ac), || f64::from(roll_stat(rng)), show),
        hp: render(provided_number(input.hp), || f64::from(roll_stat(rng)), show),
        max_hp: render(provided_number(input.max_hp), || f64::from(roll_stat(rng)), show),
    }
}
