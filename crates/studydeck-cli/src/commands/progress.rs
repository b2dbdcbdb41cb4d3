use clap::Subcommand;

use super::{open_store, CmdResult};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Set chapter counts and the daily goal
    Set {
        /// Total chapters
        total: String,
        /// Chapters done
        done: String,
        /// Chapters per day
        daily_goal: String,
    },
    /// Mark today's goal done (+1 streak)
    MarkToday,
    /// Show progress
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProgressAction) -> CmdResult {
    let mut store = open_store()?;
    match action {
        ProgressAction::Set {
            total,
            done,
            daily_goal,
        } => {
            store.set_progress_raw(&total, &done, &daily_goal)?;
        }
        ProgressAction::MarkToday => {
            store.mark_today_done()?;
        }
        ProgressAction::Show { json } => {
            let progress = &store.state().progress;
            if json {
                println!("{}", serde_json::to_string_pretty(progress)?);
            } else {
                println!(
                    "Progress: {}% ({}/{} chapters)",
                    progress.percent(),
                    progress.done,
                    progress.total
                );
                println!("Daily goal: {}", progress.daily_goal);
                println!("Streak: {}", progress.streak);
            }
        }
    }
    Ok(())
}
