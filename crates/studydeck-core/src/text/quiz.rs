//! Mock multiple-choice tests built from notes.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sentences;
use crate::error::ValidationError;
use crate::model::Mcq;

const OPTIONS_PER_QUESTION: usize = 4;
/// Distractors come from the first few words of a random sentence.
const DISTRACTOR_WORD_WINDOW: usize = 5;
const MAX_DISTRACTOR_DRAWS: usize = 64;

/// Build `n` questions from `text`, cycling through its sentences.
///
/// Each question blanks the middle word of a sentence; the options are that
/// word plus three distinct distractors, shuffled.
pub fn generate_mcqs<R: Rng>(text: &str, n: usize, rng: &mut R) -> Vec<Mcq> {
    let mut pool = sentences(text);
    if pool.is_empty() {
        pool.push(text);
    }

    (0..n)
        .map(|i| {
            let sentence = pool[i % pool.len()];
            let words: Vec<&str> = sentence.split(' ').filter(|w| !w.is_empty()).collect();
            let key = words
                .get(words.len() / 2)
                .or_else(|| words.first())
                .copied()
                .unwrap_or("answer");

            let question = match find_ignore_case(sentence, key) {
                Some((start, end)) => format!("{}...{}", &sentence[..start], &sentence[end..]),
                None => sentence.to_string(),
            };

            let mut opts = vec![key.to_string()];
            let mut draws = 0;
            while opts.len() < OPTIONS_PER_QUESTION {
                let candidate = if draws < MAX_DISTRACTOR_DRAWS {
                    draws += 1;
                    let source = pool[rng.gen_range(0..pool.len())];
                    source
                        .split(' ')
                        .nth(rng.gen_range(0..DISTRACTOR_WORD_WINDOW))
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("opt{}", rng.gen_range(0..100)))
                } else {
                    format!("opt{}", rng.gen_range(0..1000))
                };
                if candidate.chars().count() > 2 && !opts.contains(&candidate) {
                    opts.push(candidate);
                }
            }
            opts.shuffle(rng);

            Mcq {
                q: question,
                opts,
                ans: key.to_string(),
                selected: None,
            }
        })
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    'outer: for (start, _) in haystack.char_indices() {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for nc in needle.chars() {
            match rest.next() {
                Some((offset, hc)) if hc.to_lowercase().eq(nc.to_lowercase()) => {
                    end = start + offset + hc.len_utf8();
                }
                _ => continue 'outer,
            }
        }
        return Some((start, end));
    }
    None
}

/// A test being taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Mcq>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl Quiz {
    pub fn new(questions: Vec<Mcq>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Select `option` for question `index`, replacing any earlier choice.
    pub fn answer(&mut self, index: usize, option: &str) -> Result<(), ValidationError> {
        let len = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or_else(|| ValidationError::OutOfBounds {
                collection: "questions".into(),
                index,
                len,
            })?;
        question.selected = Some(option.to_string());
        Ok(())
    }

    pub fn score(&self) -> QuizScore {
        let total = self.questions.len();
        let correct = self.questions.iter().filter(|q| q.is_correct()).count();
        let percent = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };
        QuizScore {
            correct,
            total,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const NOTES: &str = "Photosynthesis converts light energy into chemical energy. \
        Chlorophyll absorbs mostly blue and red light. \
        Oxygen is released as a byproduct";

    #[test]
    fn questions_cycle_through_sentences() {
        let mut rng = Pcg64::seed_from_u64(42);
        let mcqs = generate_mcqs(NOTES, 10, &mut rng);
        assert_eq!(mcqs.len(), 10);
        assert_eq!(mcqs[0].ans, "energy");
        assert_eq!(mcqs[0].q, "Photosynthesis converts light ... into chemical energy");
        assert_eq!(mcqs[1].ans, "blue");
        assert_eq!(mcqs[3].ans, mcqs[0].ans);
    }

    #[test]
    fn options_are_distinct_and_contain_answer() {
        let mut rng = Pcg64::seed_from_u64(1);
        for q in generate_mcqs(NOTES, 6, &mut rng) {
            assert_eq!(q.opts.len(), 4);
            assert!(q.opts.contains(&q.ans));
            let mut unique = q.opts.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn tiny_input_still_fills_options() {
        let mut rng = Pcg64::seed_from_u64(3);
        let mcqs = generate_mcqs("Ok", 2, &mut rng);
        assert_eq!(mcqs[0].ans, "Ok");
        assert_eq!(mcqs[0].q, "...");
        assert_eq!(mcqs[0].opts.len(), 4);
    }

    #[test]
    fn same_seed_same_test() {
        let a = generate_mcqs(NOTES, 5, &mut Pcg64::seed_from_u64(9));
        let b = generate_mcqs(NOTES, 5, &mut Pcg64::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn blanking_is_case_insensitive() {
        assert_eq!(find_ignore_case("Energy and energy", "energy"), Some((0, 6)));
        assert_eq!(find_ignore_case("abc", "x"), None);
    }

    #[test]
    fn scoring_counts_matching_answers() {
        let mut rng = Pcg64::seed_from_u64(5);
        let mut quiz = Quiz::new(generate_mcqs(NOTES, 3, &mut rng));
        let first = quiz.questions[0].ans.to_uppercase();
        quiz.answer(0, &first).unwrap();
        quiz.answer(1, "definitely wrong").unwrap();
        assert!(quiz.answer(7, "x").is_err());

        assert_eq!(
            quiz.score(),
            QuizScore {
                correct: 1,
                total: 3,
                percent: 33
            }
        );
    }
}
