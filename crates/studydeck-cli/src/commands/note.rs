use chrono::{Local, TimeZone};
use clap::Subcommand;
use studydeck_core::text::{enhance, solve_doubt};

use super::{open_store, CmdResult};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Save a note to the local deck
    Save {
        /// Note text
        text: String,
    },
    /// List saved notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarise notes and list their key points
    Enhance {
        /// Note text
        text: String,
    },
    /// Ask a question about your notes
    Ask {
        /// The question
        text: String,
    },
}

pub fn run(action: NoteAction) -> CmdResult {
    match action {
        NoteAction::Save { text } => {
            let mut store = open_store()?;
            store.save_note(&text)?;
        }
        NoteAction::List { json } => {
            let store = open_store()?;
            let notes = &store.state().notes;
            if json {
                println!("{}", serde_json::to_string_pretty(notes)?);
            } else if notes.is_empty() {
                println!("No notes yet");
            } else {
                for note in notes {
                    let created = Local
                        .timestamp_millis_opt(note.created)
                        .single()
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_default();
                    println!("[{created}] {}", note.text);
                }
            }
        }
        NoteAction::Enhance { text } => {
            if text.trim().is_empty() {
                return Err("No notes".into());
            }
            let out = enhance(text.trim());
            println!("Summary: {}", out.summary);
            println!();
            println!("Key Points:");
            for point in &out.key_points {
                println!("  \u{2022} {point}");
            }
            println!();
            println!("Exam Tip: Focus on definitions and one worked example per topic.");
        }
        NoteAction::Ask { text } => {
            if text.trim().is_empty() {
                return Err("Type your specific doubt or question first".into());
            }
            println!("{}", solve_doubt(text.trim()).message());
        }
    }
    Ok(())
}
