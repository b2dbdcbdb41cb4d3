use clap::Subcommand;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use studydeck_core::text::generate_mcqs;
use studydeck_core::Quiz;

use super::{load_view, open_store, save_view, CmdResult};

const QUIZ_KEY: &str = "pending_quiz";

#[derive(Subcommand)]
pub enum QuizAction {
    /// Generate a mock test from notes
    Generate {
        /// Note text
        text: String,
        /// Number of questions
        #[arg(long, default_value = "10")]
        count: usize,
        /// Seed for a reproducible test
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the test in progress
    Show,
    /// Pick an option for a question (both 1-based)
    Answer {
        question: usize,
        option: usize,
    },
    /// Score the test in progress
    Submit,
    /// Keep the test in progress with your saved tests
    Save,
}

pub fn run(action: QuizAction) -> CmdResult {
    let mut store = open_store()?;
    let mut quiz: Quiz = load_view(store.backend(), QUIZ_KEY);

    match action {
        QuizAction::Generate { text, count, seed } => {
            if text.trim().is_empty() {
                return Err("Paste notes to generate MCQs".into());
            }
            let mut rng = match seed {
                Some(seed) => Pcg64::seed_from_u64(seed),
                None => Pcg64::from_entropy(),
            };
            quiz = Quiz::new(generate_mcqs(text.trim(), count, &mut rng));
            print_quiz(&quiz);
        }
        QuizAction::Show => {
            if quiz.is_empty() {
                return Err("No test in progress".into());
            }
            print_quiz(&quiz);
        }
        QuizAction::Answer { question, option } => {
            let index = question.checked_sub(1).ok_or("questions start at 1")?;
            let choice = quiz
                .questions
                .get(index)
                .and_then(|q| q.opts.get(option.wrapping_sub(1)))
                .cloned()
                .ok_or("no such question or option")?;
            quiz.answer(index, &choice)?;
            println!("Q{question}: {choice}");
        }
        QuizAction::Submit => {
            if quiz.is_empty() {
                return Err("No test to submit".into());
            }
            for (i, q) in quiz.questions.iter().enumerate() {
                let mark = if q.is_correct() { "correct" } else { "wrong" };
                let picked = q.selected.as_deref().unwrap_or("-");
                println!("Q{}. {mark}: picked {picked}, answer {}", i + 1, q.ans);
            }
            let score = quiz.score();
            println!(
                "Test Submitted! Score: {}/{} ({}%)",
                score.correct, score.total, score.percent
            );
        }
        QuizAction::Save => {
            if quiz.is_empty() {
                return Err("No test".into());
            }
            store.save_test(quiz.questions.clone())?;
        }
    }

    save_view(store.backend(), QUIZ_KEY, &quiz)?;
    Ok(())
}

fn print_quiz(quiz: &Quiz) {
    for (i, q) in quiz.questions.iter().enumerate() {
        println!("Q{}. {}", i + 1, q.q);
        for (j, opt) in q.opts.iter().enumerate() {
            let marker = if q.selected.as_deref() == Some(opt.as_str()) { "*" } else { " " };
            println!("  {marker}{}. {opt}", j + 1);
        }
    }
}
