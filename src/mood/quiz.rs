//! Mood check-in state machine.

use crate::mood::evaluator::{evaluate_score, MoodEvaluation};
use crate::mood::questions::{
    total_score, AnswerVector, MoodQuestion, Severity, EMPTY_ANSWERS, MOOD_QUESTIONS,
    QUESTION_COUNT,
};
use crate::mood::store::{QuizStore, StoredProgress};
use tracing::warn;

/// What happened when the user asked to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// The current question has no answer yet.
    NeedsAnswer,
    /// On the last question, but an earlier one is still unanswered.
    Incomplete { first_unanswered: usize },
    /// Every question is answered; the result is now available.
    Finished(MoodEvaluation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub percent: usize,
}

pub struct MoodQuiz<S: QuizStore> {
    store: S,
    current_index: usize,
    answers: AnswerVector,
    finished: bool,
}

impl<S: QuizStore> MoodQuiz<S> {
    /// Start a quiz, resuming from whatever progress the store holds.
    pub fn start(store: S) -> Self {
        let progress = store.load().unwrap_or_default();
        Self {
            store,
            current_index: progress.current_index,
            answers: progress.answers,
            finished: false,
        }
    }

    /// Whether this quiz picked up progress from an earlier run.
    pub fn is_resumed(&self) -> bool {
        self.current_index > 0 || self.answers.iter().any(Option::is_some)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &'static MoodQuestion {
        &MOOD_QUESTIONS[self.current_index]
    }

    pub fn current_answer(&self) -> Option<Severity> {
        self.answers[self.current_index]
    }

    pub fn answers(&self) -> &AnswerVector {
        &self.answers
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn total_score(&self) -> u32 {
        total_score(&self.answers)
    }

    pub fn progress(&self) -> QuizProgress {
        let position = self.current_index + 1;
        QuizProgress {
            position,
            total: QUESTION_COUNT,
            percent: (position * 100 + QUESTION_COUNT / 2) / QUESTION_COUNT,
        }
    }

    /// The evaluation, once the quiz has been completed.
    pub fn result(&self) -> Option<MoodEvaluation> {
        self.finished.then(|| evaluate_score(self.total_score()))
    }

    /// Record an answer for the current question.
    pub fn select(&mut self, severity: Severity) {
        if self.finished {
            return;
        }
        self.answers[self.current_index] = Some(severity);
        self.persist();
    }

    pub fn next(&mut self) -> Advance {
        if self.finished {
            return Advance::Finished(evaluate_score(self.total_score()));
        }
        if self.current_answer().is_none() {
            return Advance::NeedsAnswer;
        }
        if self.current_index < QUESTION_COUNT - 1 {
            self.current_index += 1;
            self.persist();
            return Advance::Moved(self.current_index);
        }
        if let Some(first_unanswered) = self.answers.iter().position(Option::is_none) {
            return Advance::Incomplete { first_unanswered };
        }

        self.finished = true;
        if let Err(err) = self.store.clear() {
            warn!("could not clear finished quiz progress: {err}");
        }
        Advance::Finished(evaluate_score(self.total_score()))
    }

    /// Step back one question. Returns `false` on the first question.
    pub fn back(&mut self) -> bool {
        if self.finished || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.persist();
        true
    }

    /// Jump to a question, typically to fill in one that was skipped.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.finished || index >= QUESTION_COUNT {
            return false;
        }
        self.current_index = index;
        self.persist();
        true
    }

    /// Start over: no answers, first question, nothing stored.
    pub fn reset(&mut self) {
        self.answers = EMPTY_ANSWERS;
        self.current_index = 0;
        self.finished = false;
        if let Err(err) = self.store.clear() {
            warn!("could not clear quiz progress: {err}");
        }
    }

    fn persist(&mut self) {
        let progress = StoredProgress {
            current_index: self.current_index,
            answers: self.answers,
        };
        if let Err(err) = self.store.save(&progress) {
            warn!("could not save quiz progress: {err}");
        }
    }
}
