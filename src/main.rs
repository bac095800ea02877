use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use tabletop_tools::call::{ToolCallDecision, ToolRegistry, ToolResolution};
use tabletop_tools::dice::DiceRequest;
use tabletop_tools::names::generate_legacy_name_with;
use tabletop_tools::stat_block::{FillOptions, StatBlockInput, fill_stat_block};
use tabletop_tools::{Config, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "tabletop_tools")]
#[command(about = "Dice, stat blocks and fantasy names for LLM tool calling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate fantasy names
    Name {
        /// How many names to print
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Use the older fragment-based generator
        #[arg(long)]
        legacy: bool,

        /// Random seed (uses the thread RNG if not specified)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Roll NdM dice
    Roll {
        num_rolls: u32,
        num_sides: u32,

        #[arg(short, long)]
        reason: Option<String>,
    },
    /// Fill a character stat block from (partial) JSON input
    StatBlock {
        /// JSON object with any of level, name, characterClass, race, ...
        #[arg(short, long)]
        input: Option<String>,

        /// Do not annotate values with PROVIDED_AS_INPUT / GENERATED_BY_TOOL
        #[arg(long)]
        hide_source: bool,
    },
    /// Print the tool listing as JSON
    Tools,
    /// Invoke a tool by name with JSON params
    Call {
        method: String,
        params: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // .env があれば読み込む（無ければ無視）
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    // _guard を drop するとログが失われるため main の終わりまで保持
    let _guard = init_tracing(&config.log_dir)?;

    // 音節数の設定ミスはここで止める
    let generator = Arc::new(config.name_generator()?);
    let registry = ToolRegistry::with_defaults(Arc::clone(&generator), config.fill_options());

    tracing::info!(target: "app", command = ?cli.command, "start");

    match cli.command {
        Command::Name { count, legacy, seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            for _ in 0..count {
                let name = if legacy {
                    generate_legacy_name_with(&mut rng)
                } else {
                    generator.generate_name_with(&mut rng)
                };
                println!("{name}");
            }
        }
        Command::Roll { num_rolls, num_sides, reason } => {
            let roll = DiceRequest::new(num_rolls, num_sides, reason)?.roll()?;
            println!("{roll}");
        }
        Command::StatBlock { input, hide_source } => {
            let input: StatBlockInput = match input {
                Some(raw) => serde_json::from_str(&raw).wrap_err("stat block input must be a JSON object")?,
                None => StatBlockInput::default(),
            };
            let options = if hide_source {
                FillOptions { show_source: false }
            } else {
                config.fill_options()
            };
            let block = fill_stat_block(&input, options, &generator);
            println!("{}", serde_json::to_string_pretty(&block)?);
        }
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&registry.list())?);
        }
        Command::Call { method, params } => {
            let decision = ToolCallDecision::ToolCall { name: method, arguments: params.unwrap_or_default() };
            let resolution = registry.resolve(decision);
            tracing::debug!(target: "app", resolution = %resolution, "call_resolved");
            println!("{}", serde_json::to_string_pretty(&resolution.to_response())?);
            if !resolution.is_executed() {
                return Err(eyre!("{}", error_message(&resolution)));
            }
        }
    }
    Ok(())
}

fn error_message(resolution: &ToolResolution) -> String {
    match resolution.to_response().get("error") {
        Some(Value::String(s)) => s.clone(),
        _ => resolution.to_string(),
    }
}
