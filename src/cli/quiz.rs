//! Interactive mood check-in.

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::mood::evaluator::{MoodEvaluation, MoodKey};
use crate::mood::quiz::{Advance, MoodQuiz};
use crate::mood::report::{save_notice, MoodReporter};
use crate::mood::store::QuizStore;

const INTRO: &str = "Mood check-in: eight quick questions about the past few days.
Scores are indicators, not diagnoses. If you feel unsafe, please reach out to a trusted person or local helpline immediately.";

const HIGH_DISTRESS_NOTICE: &str = "If this feels severe, please consider reaching out to a trusted person or professional helpline for immediate support.";

const CHAT_INVITATION: &str = "Looking for a caring conversation? HOPEr is always available to listen, reflect, and share calming prompts tailored to how you're feeling. You can chat anonymously and step away whenever you need.";

const CARE_DISCLAIMER: &str = "HOPEr isn't a substitute for professional care, but it can help you process emotions and discover next steps. If you're in crisis, please reach out to a trusted person or local helpline right away.";

/// How the user left the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizExit {
    Done,
    /// The user asked to talk to HOPEr from the result screen.
    OpenChat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// 0-based option index.
    Choose(usize),
    Next,
    Back,
    Quit,
    Invalid,
}

pub fn parse_quiz_input(line: &str) -> QuizInput {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => QuizInput::Choose(0),
        "2" => QuizInput::Choose(1),
        "3" => QuizInput::Choose(2),
        "" | "n" | "next" => QuizInput::Next,
        "b" | "back" => QuizInput::Back,
        "q" | "quit" => QuizInput::Quit,
        _ => QuizInput::Invalid,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultInput {
    Save,
    Retake,
    Chat,
    Quit,
    Invalid,
}

pub fn parse_result_input(line: &str) -> ResultInput {
    match line.trim().to_ascii_lowercase().as_str() {
        "s" | "save" => ResultInput::Save,
        "r" | "retake" => ResultInput::Retake,
        "c" | "chat" => ResultInput::Chat,
        "" | "q" | "quit" => ResultInput::Quit,
        _ => ResultInput::Invalid,
    }
}

pub fn render_question<S: QuizStore>(quiz: &MoodQuiz<S>) -> String {
    let progress = quiz.progress();
    let question = quiz.current_question();
    let selected = quiz.current_answer();

    let mut out = format!(
        "Question {} of {} ({}%)\n{}\n",
        progress.position, progress.total, progress.percent, question.prompt
    );
    for (number, option) in question.options.iter().enumerate() {
        let mark = if selected == Some(option.severity) { "*" } else { " " };
        out.push_str(&format!("  {mark} {}) {}\n", number + 1, option.label));
    }
    out
}

pub fn render_result(evaluation: &MoodEvaluation) -> String {
    let mut out = format!(
        "\nYour mood snapshot: {}\n{}\n\nGentle support tips:\n",
        evaluation.mood_label, evaluation.explanation
    );
    for tip in evaluation.tips {
        out.push_str(&format!("  - {tip}\n"));
    }
    if evaluation.mood_key == MoodKey::HighDistress {
        out.push_str(&format!("\n{HIGH_DISTRESS_NOTICE}\n"));
    }
    out.push_str(&format!("\n{CHAT_INVITATION}\n{CARE_DISCLAIMER}\n"));
    out
}

/// Run the check-in on the terminal.
pub async fn run_quiz<S: QuizStore>(
    quiz: &mut MoodQuiz<S>,
    reporter: &dyn MoodReporter,
) -> Result<QuizExit, Box<dyn Error>> {
    let stdin = BufReader::new(tokio::io::stdin());
    drive_quiz(quiz, reporter, stdin, &mut io::stdout()).await
}

/// The check-in flow over any line source and output sink.
pub async fn drive_quiz<S, R, W>(
    quiz: &mut MoodQuiz<S>,
    reporter: &dyn MoodReporter,
    input: R,
    out: &mut W,
) -> Result<QuizExit, Box<dyn Error>>
where
    S: QuizStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "{INTRO}\n")?;
    if quiz.is_resumed() {
        writeln!(out, "Welcome back! Picking up where you left off.\n")?;
    }

    loop {
        if quiz.is_finished() {
            write!(out, "[s]ave result, [r]etake, [c]hat with HOPEr or [q]uit: ")?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                return Ok(QuizExit::Done);
            };
            match parse_result_input(&line) {
                ResultInput::Save => {
                    writeln!(out, "Saving...")?;
                    let outcome = reporter.save(quiz.answers()).await;
                    let notice = save_notice(&outcome);
                    let icon = if notice.is_error { "❌" } else { "✅" };
                    writeln!(out, "{icon} {}: {}", notice.title, notice.description)?;
                }
                ResultInput::Retake => {
                    quiz.reset();
                    writeln!(out)?;
                }
                ResultInput::Chat => return Ok(QuizExit::OpenChat),
                ResultInput::Quit => return Ok(QuizExit::Done),
                ResultInput::Invalid => writeln!(out, "Please type s, r, c or q.")?,
            }
            continue;
        }

        writeln!(out, "{}", render_question(quiz))?;
        write!(out, "Choose 1-3, [n]ext, [b]ack or [q]uit: ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            return Ok(QuizExit::Done);
        };
        match parse_quiz_input(&line) {
            QuizInput::Choose(option) => {
                let severity = quiz.current_question().options[option].severity;
                quiz.select(severity);
                advance(quiz, out)?;
            }
            QuizInput::Next => advance(quiz, out)?,
            QuizInput::Back => {
                if !quiz.back() {
                    writeln!(out, "This is the first question.")?;
                }
            }
            QuizInput::Quit => {
                writeln!(
                    out,
                    "Your answers are kept. Run `hoper quiz` again to pick up where you left off."
                )?;
                return Ok(QuizExit::Done);
            }
            QuizInput::Invalid => writeln!(out, "Please type 1, 2 or 3 to answer.")?,
        }
    }
}

fn advance<S: QuizStore, W: Write>(quiz: &mut MoodQuiz<S>, out: &mut W) -> io::Result<()> {
    match quiz.next() {
        Advance::Moved(_) => Ok(()),
        Advance::NeedsAnswer => writeln!(out, "Please choose an answer first."),
        Advance::Incomplete { first_unanswered } => {
            quiz.go_to(first_unanswered);
            writeln!(
                out,
                "Question {} still needs an answer.",
                first_unanswered + 1
            )
        }
        Advance::Finished(evaluation) => writeln!(out, "{}", render_result(&evaluation)),
    }
}
