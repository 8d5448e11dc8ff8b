use crate::codepoint::normalize;
use crate::kitchen::{CombinationView, EmojiKitchen};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "emojikitchen.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Emoji Kitchen combination lookup", long_about = None)]
pub struct Args {
    /// One emoji to list its combinations, or two to look up their combo.
    /// Each may be a glyph (😀), a codepoint (1f600) or an escape (u1f600)
    #[arg(value_name = "EMOJI", required = true, num_args = 1..=2)]
    pub emoji: Vec<String>,

    /// Path to the emoji kitchen dataset
    #[arg(long, env = "EMOJI_KITCHEN_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log lookups and dataset loading
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A query built from the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every combination of one emoji
    List { arg: String, codepoint: String },
    /// The combination of a left and right emoji
    Combo {
        left_arg: String,
        right_arg: String,
        left: String,
        right: String,
    },
}

impl Query {
    /// Normalize the raw arguments. `None` unless there are one or two.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [arg] => Some(Query::List {
                arg: arg.clone(),
                codepoint: normalize(arg),
            }),
            [left_arg, right_arg] => Some(Query::Combo {
                left_arg: left_arg.clone(),
                right_arg: right_arg.clone(),
                left: normalize(left_arg),
                right: normalize(right_arg),
            }),
            _ => None,
        }
    }

    /// Header line printed before text results
    pub fn header(&self) -> String {
        match self {
            Query::List { arg, codepoint } => {
                format!("=== All combinations for {} ({}) ===", arg, codepoint)
            }
            Query::Combo {
                left_arg,
                right_arg,
                ..
            } => format!("=== Combo: {} + {} ===", left_arg, right_arg),
        }
    }

    pub fn run(&self, kitchen: &EmojiKitchen) -> Vec<CombinationView> {
        match self {
            Query::List { codepoint, .. } => kitchen.list_combinations(codepoint),
            Query::Combo { left, right, .. } => {
                kitchen.get_combo(left, right).into_iter().collect()
            }
        }
    }
}

/// Render results in the requested format
pub fn render(
    query: &Query,
    results: &[CombinationView],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = query.header();
            out.push('\n');
            for view in results {
                out.push_str(&format!("{}\n\n", view));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = match query {
                Query::List { .. } => serde_json::to_string_pretty(results)?,
                Query::Combo { .. } => serde_json::to_string_pretty(&results.first())?,
            };
            Ok(json + "\n")
        }
    }
}
