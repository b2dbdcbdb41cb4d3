use chrono::Local;
use studydeck_core::mastery::stars;
use studydeck_core::text::motivational_quote;
use studydeck_core::Config;

use super::reminder::describe;
use super::{open_store, CmdResult};

/// Full redraw of every section from the stored document.
pub fn run(json: bool) -> CmdResult {
    let store = open_store()?;
    let state = store.state();
    if json {
        println!("{}", store.export_document()?);
        return Ok(());
    }
    let config = Config::load_or_default();

    let p = &state.progress;
    println!("== Progress");
    println!("  {}% ({}/{} chapters), daily goal {}", p.percent(), p.done, p.total, p.daily_goal);
    println!("  Streak: {}", p.streak);

    println!("== Pomodoro");
    println!("  Completed sessions: {}", state.pomodoro.completed);

    println!("== Notes");
    match state.notes.first() {
        Some(note) => println!("  {} saved, latest: {}", state.notes.len(), note.text),
        None => println!("  No notes yet"),
    }

    println!("== Flashcards");
    match state.flashcards.first() {
        Some(card) => println!("  {} cards, first: {}", state.flashcards.len(), card.front),
        None => println!("  No flashcards yet"),
    }

    println!("== Reminders");
    if state.reminders.is_empty() {
        println!("  None");
    }
    let now = Local::now();
    for r in &state.reminders {
        println!("  {}", describe(r, now));
    }

    println!("== Mastery");
    let recent = store.mastery_by_date();
    if recent.is_empty() {
        println!("  None");
    }
    for m in recent.into_iter().take(config.display.mastery_rows) {
        println!("  ({}) {}: {}", m.date, m.topic, stars(m.score));
    }

    println!("== Saved tests: {}", state.saved_tests.len());
    Ok(())
}

pub fn motivate() -> CmdResult {
    println!("\"{}\"", motivational_quote(&mut rand::thread_rng()));
    Ok(())
}
