use chrono::Local;
use clap::Subcommand;
use studydeck_core::{Reminder, ReminderStatus};

use super::{open_store, CmdResult};

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Add a reminder
    Add {
        /// What is due
        title: String,
        /// When, e.g. 2026-10-20T09:00
        when: String,
    },
    /// List reminders with time left
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a reminder by its 1-based position
    Delete {
        /// Position shown by `reminder list`
        position: usize,
    },
    /// Delete every reminder
    Clear,
}

pub fn run(action: ReminderAction) -> CmdResult {
    let mut store = open_store()?;
    match action {
        ReminderAction::Add { title, when } => {
            store.add_reminder(&title, &when)?;
        }
        ReminderAction::List { json } => {
            let reminders = &store.state().reminders;
            if json {
                println!("{}", serde_json::to_string_pretty(reminders)?);
            } else if reminders.is_empty() {
                println!("No reminders");
            } else {
                let now = Local::now();
                for (i, r) in reminders.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, describe(r, now));
                }
            }
        }
        ReminderAction::Delete { position } => {
            let index = position.checked_sub(1).ok_or("positions start at 1")?;
            store.delete_reminder(index)?;
        }
        ReminderAction::Clear => {
            store.clear_reminders()?;
        }
    }
    Ok(())
}

pub fn describe(reminder: &Reminder, now: chrono::DateTime<Local>) -> String {
    let when = reminder
        .due_at()
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| reminder.when.clone());
    let left = match reminder.status(now) {
        ReminderStatus::PastDue => "Past Due".to_string(),
        ReminderStatus::DaysLeft(days) => format!("{days} days left"),
        ReminderStatus::Unknown => "unknown date".to_string(),
    };
    format!("{} - {when} ({left})", reminder.title)
}
