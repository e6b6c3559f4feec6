//! "What element does this describe?" questions built from a random sample.

use rand::Rng;
use rusqlite::Connection;

use crate::db::fetch_random_sample_with;
use crate::error::StoreError;
use crate::models::Element;

/// Choices offered per question.
pub const QUIZ_CHOICES: usize = 4;
/// Replaces the answer's name inside the prompt.
pub const PLACEHOLDER: &str = "??????";

/// Replace every ASCII case-insensitive occurrence of `name` in `desc`.
pub fn redact(desc: &str, name: &str) -> String {
    if name.is_empty() {
        return desc.to_string();
    }

    // ASCII lowercasing keeps byte offsets identical, so indices found in the
    // folded copy are valid in `desc`.
    let haystack = desc.to_ascii_lowercase();
    let needle = name.to_ascii_lowercase();

    let mut redacted = String::with_capacity(desc.len());
    let mut cursor = 0;
    while let Some(found) = haystack[cursor..].find(&needle) {
        let start = cursor + found;
        redacted.push_str(&desc[cursor..start]);
        redacted.push_str(PLACEHOLDER);
        cursor = start + needle.len();
    }
    redacted.push_str(&desc[cursor..]);
    redacted
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { answer: String },
}

#[derive(Debug, Clone)]
pub struct Quiz {
    choices: Vec<Element>,
    answer: usize,
    prompt: String,
    picked: Option<usize>,
}

impl Quiz {
    /// Build a question from sampled elements, picking the answer uniformly.
    /// Returns `None` when there is nothing to ask about.
    pub fn new<R: Rng + ?Sized>(choices: Vec<Element>, rng: &mut R) -> Option<Self> {
        if choices.is_empty() {
            return None;
        }
        let answer = rng.gen_range(0..choices.len());
        let prompt = redact(&choices[answer].desc, &choices[answer].name);
        Some(Self {
            choices,
            answer,
            prompt,
            picked: None,
        })
    }

    /// Sample [`QUIZ_CHOICES`] elements from the store and build a question.
    pub fn from_store<R: Rng + ?Sized>(conn: &Connection, rng: &mut R) -> Result<Self, StoreError> {
        let choices = fetch_random_sample_with(conn, QUIZ_CHOICES, rng)?;
        let found = choices.len();
        if found < 2 {
            return Err(StoreError::NotEnoughData {
                wanted: QUIZ_CHOICES,
                found,
            });
        }
        Quiz::new(choices, rng).ok_or(StoreError::NotEnoughData {
            wanted: QUIZ_CHOICES,
            found,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[Element] {
        &self.choices
    }

    pub fn answer(&self) -> &Element {
        &self.choices[self.answer]
    }

    pub fn picked(&self) -> Option<usize> {
        self.picked
    }

    pub fn is_answered(&self) -> bool {
        self.picked.is_some()
    }

    /// Lock in a choice. Only the first pick counts; out-of-range indices are
    /// ignored and return `None`.
    pub fn choose(&mut self, index: usize) -> Option<Verdict> {
        if self.picked.is_none() {
            if index >= self.choices.len() {
                return None;
            }
            self.picked = Some(index);
        }
        self.verdict()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        let picked = self.picked?;
        if self.choices[picked].name == self.answer().name {
            Some(Verdict::Correct)
        } else {
            Some(Verdict::Incorrect {
                answer: self.answer().name.clone(),
            })
        }
    }
}
