use clap::Subcommand;
use studydeck_core::DeckCursor;

use super::{load_view, open_store, save_view, CmdResult};

const CURSOR_KEY: &str = "flash_cursor";

#[derive(Subcommand)]
pub enum FlashAction {
    /// Replace the deck with cards generated from notes
    Generate {
        /// Note text; one card per sentence
        text: String,
    },
    /// Show the current card
    Show,
    /// Move to the next card
    Next,
    /// Move to the previous card
    Prev,
    /// Turn the current card over
    Flip,
    /// List every card
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: FlashAction) -> CmdResult {
    let mut store = open_store()?;
    let mut cursor: DeckCursor = load_view(store.backend(), CURSOR_KEY);

    match action {
        FlashAction::Generate { text } => {
            store.generate_flashcards(&text)?;
            cursor = DeckCursor::default();
        }
        FlashAction::Show => {}
        FlashAction::Next => cursor.next(store.state().flashcards.len()),
        FlashAction::Prev => cursor.prev(store.state().flashcards.len()),
        FlashAction::Flip => cursor.flip(),
        FlashAction::List { json } => {
            let deck = &store.state().flashcards;
            if json {
                println!("{}", serde_json::to_string_pretty(deck)?);
            } else {
                for (i, card) in deck.iter().enumerate() {
                    println!("{:>2}. {} | {}", i + 1, card.front, card.back);
                }
            }
            return Ok(());
        }
    }

    let deck = &store.state().flashcards;
    if cursor.index() >= deck.len() {
        cursor = DeckCursor::default();
    }
    match cursor.face(deck) {
        Some(face) => println!("[{}/{}] {face}", cursor.index() + 1, deck.len()),
        None => println!("No flashcards yet"),
    }
    save_view(store.backend(), CURSOR_KEY, &cursor)?;
    Ok(())
}
