//! The fixed mood check-in question bank.
//!
//! Every question offers exactly three options whose severities cover
//! `0`, `1` and `2` once each, so the highest reachable total is
//! [`MAX_SCORE`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questions in the check-in.
pub const QUESTION_COUNT: usize = 8;

/// Largest severity a single answer can carry.
pub const MAX_SEVERITY: u8 = 2;

/// Severity of a single answer, always within `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const LOW: Severity = Severity(0);
    pub const MODERATE: Severity = Severity(1);
    pub const HIGH: Severity = Severity(2);

    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_SEVERITY).then_some(Severity(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Severity::new(value).ok_or_else(|| format!("invalid answer severity: {value}"))
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slot per question; `None` means the question has not been answered.
pub type AnswerVector = [Option<Severity>; QUESTION_COUNT];

/// An answer vector with every question unanswered.
pub const EMPTY_ANSWERS: AnswerVector = [None; QUESTION_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [AnswerOption; 3],
}

const fn option(label: &'static str, severity: u8) -> AnswerOption {
    AnswerOption {
        label,
        severity: Severity(severity),
    }
}

pub const MOOD_QUESTIONS: [MoodQuestion; QUESTION_COUNT] = [
    MoodQuestion {
        id: "calm",
        prompt: "In the last 24 hours, how often did you feel calm or relaxed?",
        options: [
            option("Most of the time", 0),
            option("Some of the time", 1),
            option("Rarely or not at all", 2),
        ],
    },
    MoodQuestion {
        id: "sleep",
        prompt: "How much trouble did you have falling asleep or staying asleep?",
        options: [
            option("Not at all", 0),
            option("Some trouble", 1),
            option("A lot / very restless", 2),
        ],
    },
    MoodQuestion {
        id: "worry",
        prompt: "How often did worry or anxious thoughts interrupt what you were doing?",
        options: [
            option("Almost never", 0),
            option("Sometimes", 1),
            option("Often or constantly", 2),
        ],
    },
    MoodQuestion {
        id: "motivation",
        prompt: "How motivated did you feel to do small tasks today?",
        options: [
            option("Very motivated", 0),
            option("Somewhat motivated", 1),
            option("Not motivated", 2),
        ],
    },
    MoodQuestion {
        id: "connection",
        prompt: "How connected did you feel to others today?",
        options: [
            option("Connected", 0),
            option("Sometimes connected", 1),
            option("Isolated", 2),
        ],
    },
    MoodQuestion {
        id: "joy",
        prompt: "How much were you able to enjoy small things or hobbies?",
        options: [
            option("A lot", 0),
            option("A little", 1),
            option("Not at all", 2),
        ],
    },
    MoodQuestion {
        id: "overwhelm",
        prompt: "How often did you feel overwhelmed by tasks or emotions?",
        options: [
            option("Rarely", 0),
            option("Sometimes", 1),
            option("Often", 2),
        ],
    },
    MoodQuestion {
        id: "energy",
        prompt: "Overall, how would you rate your energy level today?",
        options: [
            option("High", 0),
            option("Okay", 1),
            option("Very low", 2),
        ],
    },
];

/// Highest total a fully answered check-in can reach.
pub const MAX_SCORE: u32 = MOOD_QUESTIONS.len() as u32 * MAX_SEVERITY as u32;

/// Sum of every answered slot; unanswered slots count as zero.
pub fn total_score(answers: &[Option<Severity>]) -> u32 {
    answers
        .iter()
        .flatten()
        .map(|severity| u32::from(severity.value()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_covers_each_severity_once() {
        for question in MOOD_QUESTIONS.iter() {
            let mut severities: Vec<u8> = question
                .options
                .iter()
                .map(|option| option.severity.value())
                .collect();
            severities.sort_unstable();
            assert_eq!(severities, vec![0, 1, 2], "question {}", question.id);
        }
    }

    #[test]
    fn question_order_is_fixed() {
        let ids: Vec<&str> = MOOD_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                "calm",
                "sleep",
                "worry",
                "motivation",
                "connection",
                "joy",
                "overwhelm",
                "energy"
            ]
        );
    }

    #[test]
    fn max_score_matches_question_bank() {
        assert_eq!(MAX_SCORE, 16);
        assert_eq!(total_score(&[Some(Severity::HIGH); QUESTION_COUNT]), MAX_SCORE);
    }

    #[test]
    fn unanswered_slots_do_not_count() {
        let answers = [
            Some(Severity::LOW),
            Some(Severity::MODERATE),
            None,
            Some(Severity::HIGH),
            Some(Severity::MODERATE),
            None,
            None,
            None,
        ];
        assert_eq!(total_score(&answers), 4);
        assert_eq!(total_score(&EMPTY_ANSWERS), 0);
    }

    #[test]
    fn severity_rejects_out_of_range_values() {
        assert!(Severity::new(3).is_none());
        assert!(Severity::try_from(7u8).is_err());
        assert_eq!(Severity::new(2), Some(Severity::HIGH));
    }

    #[test]
    fn answer_vectors_serialize_with_nulls() {
        let mut answers = EMPTY_ANSWERS;
        answers[0] = Some(Severity::LOW);
        answers[3] = Some(Severity::HIGH);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, "[0,null,null,2,null,null,null,null]");
    }
}
