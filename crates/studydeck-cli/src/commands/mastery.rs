use clap::Subcommand;
use studydeck_core::mastery::stars;
use studydeck_core::Config;

use super::{open_store, CmdResult};

#[derive(Subcommand)]
pub enum MasteryAction {
    /// Rate your grasp of a topic from 1 to 5
    Add {
        /// Topic name
        topic: String,
        /// Score, 1-5 (leading number is used, e.g. "4 stars")
        #[arg(allow_hyphen_values = true)]
        score: String,
    },
    /// List ratings, newest date first
    List {
        /// How many entries to show (defaults to display.mastery_rows)
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MasteryAction) -> CmdResult {
    let mut store = open_store()?;
    match action {
        MasteryAction::Add { topic, score } => {
            store.add_mastery_raw(&topic, &score)?;
        }
        MasteryAction::List { limit, json } => {
            let limit = limit.unwrap_or_else(|| Config::load_or_default().display.mastery_rows);
            let entries: Vec<_> = store.mastery_by_date().into_iter().take(limit).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No mastery entries yet");
            } else {
                for m in entries {
                    println!("({}) {}: {}", m.date, m.topic, stars(m.score));
                }
            }
        }
    }
    Ok(())
}
