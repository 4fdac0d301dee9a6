//! The mood check-in: question bank, scoring, resumable quiz state and
//! result reporting.

pub mod evaluator;
pub mod questions;
pub mod quiz;
pub mod report;
pub mod store;

pub use evaluator::{evaluate_score, MoodEvaluation, MoodKey};
pub use questions::{AnswerVector, Severity, MAX_SCORE, MOOD_QUESTIONS};
pub use quiz::{Advance, MoodQuiz};
