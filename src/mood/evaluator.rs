//! Score-to-mood classification.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodKey {
    Calm,
    Neutral,
    SlightlyStressed,
    Stressed,
    HighDistress,
}

impl MoodKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodKey::Calm => "calm",
            MoodKey::Neutral => "neutral",
            MoodKey::SlightlyStressed => "slightly-stressed",
            MoodKey::Stressed => "stressed",
            MoodKey::HighDistress => "high-distress",
        }
    }

    fn details(self) -> MoodDetails {
        match self {
            MoodKey::Calm => MoodDetails {
                explanation: "You're showing signs of feeling balanced today. Keep nurturing those grounding routines.",
                tips: &[
                    "Take a moment to celebrate something that went well.",
                    "Share your good energy with a friend or loved one.",
                ],
            },
            MoodKey::Neutral => MoodDetails {
                explanation: "You're managing things fairly well. A small pause for yourself could make it even better.",
                tips: &[
                    "Drink water and stretch for a few minutes.",
                    "Schedule a mini-activity you enjoy before the day ends.",
                ],
            },
            MoodKey::SlightlyStressed => MoodDetails {
                explanation: "You might be carrying some tension. A gentle reset can help you feel lighter.",
                tips: &[
                    "Take 5 deep breaths and write down one worry to revisit later.",
                    "Listen to a short calming playlist or guided breathing.",
                ],
            },
            MoodKey::Stressed => MoodDetails {
                explanation: "Things feel heavy right now. It's okay to slow down and ask for support.",
                tips: &[
                    "Reach out to someone you trust and share how you're feeling.",
                    "Give yourself permission to take a short break from responsibilities.",
                ],
            },
            MoodKey::HighDistress => MoodDetails {
                explanation: "You're experiencing intense stress. Please prioritize your well-being and consider talking to a professional.",
                tips: &[
                    "Contact a trusted friend, mentor, or counselor as soon as you can.",
                    "If things feel overwhelming, reach out to a local helpline or emergency service.",
                ],
            },
        }
    }

    /// Visual parameters for the result face shown next to a classification.
    pub fn face(self) -> MoodFace {
        match self {
            MoodKey::Calm => MoodFace {
                color: "#BCEAD5",
                mouth: "M20 28 Q24 32 28 28",
                eye_offset: 0.0,
            },
            MoodKey::Neutral => MoodFace {
                color: "#A8D8EA",
                mouth: "M20 28 L28 28",
                eye_offset: 0.0,
            },
            MoodKey::SlightlyStressed => MoodFace {
                color: "#F4B731",
                mouth: "M18 29 Q24 24 30 29",
                eye_offset: 0.5,
            },
            MoodKey::Stressed => MoodFace {
                color: "#F6A5A5",
                mouth: "M18 30 Q24 22 30 30",
                eye_offset: 1.0,
            },
            MoodKey::HighDistress => MoodFace {
                color: "#F17070",
                mouth: "M18 32 Q24 20 30 32",
                eye_offset: 1.5,
            },
        }
    }
}

impl fmt::Display for MoodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct MoodDetails {
    explanation: &'static str,
    tips: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodFace {
    pub color: &'static str,
    pub mouth: &'static str,
    pub eye_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodThreshold {
    /// Inclusive upper bound of the band.
    pub max: u32,
    pub mood_key: MoodKey,
    pub mood_label: &'static str,
}

/// Ordered by ascending upper bound; the first band containing a score wins.
pub const MOOD_THRESHOLDS: [MoodThreshold; 5] = [
    MoodThreshold {
        max: 3,
        mood_key: MoodKey::Calm,
        mood_label: "Calm & Grounded",
    },
    MoodThreshold {
        max: 7,
        mood_key: MoodKey::Neutral,
        mood_label: "Steady & Neutral",
    },
    MoodThreshold {
        max: 10,
        mood_key: MoodKey::SlightlyStressed,
        mood_label: "Slightly Stressed",
    },
    MoodThreshold {
        max: 13,
        mood_key: MoodKey::Stressed,
        mood_label: "Feeling Stressed",
    },
    MoodThreshold {
        max: 16,
        mood_key: MoodKey::HighDistress,
        mood_label: "High Distress",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEvaluation {
    pub mood_key: MoodKey,
    pub mood_label: &'static str,
    pub face_type: MoodKey,
    pub explanation: &'static str,
    pub tips: &'static [&'static str],
}

/// Classify a quiz total. Totals past the last band fall back to it.
pub fn evaluate_score(total_score: u32) -> MoodEvaluation {
    let last = &MOOD_THRESHOLDS[MOOD_THRESHOLDS.len() - 1];
    let threshold = MOOD_THRESHOLDS
        .iter()
        .find(|band| total_score <= band.max)
        .unwrap_or(last);
    let details = threshold.mood_key.details();

    MoodEvaluation {
        mood_key: threshold.mood_key,
        mood_label: threshold.mood_label,
        face_type: threshold.mood_key,
        explanation: details.explanation,
        tips: details.tips,
    }
}
