//! Line-oriented chat loop.
//!
//! Input is read from stdin while replies arrive in the background, so the
//! loop reacts to two sources: typed lines and [`SessionEvent`]s from the
//! session. Everything shown on screen comes from those events.

use std::error::Error;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::core::constants::THINKING_INDICATOR;
use crate::core::message::Message;
use crate::core::session::{ChatSession, SendError, SendOutcome, SessionEvent};
use crate::core::starters::CONVERSATION_STARTERS;
use crate::utils::logging::TranscriptLog;

const HELP_TEXT: &str = "Commands:
  /starters      List conversation starters
  /starter <n>   Send starter number n
  /log           Pause or resume the transcript log
  /reset         Start the conversation over
  /help          Show this help
  /quit          Leave the chat";

/// A typed line, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Send(&'a str),
    /// 0-based index into [`CONVERSATION_STARTERS`].
    Starter(usize),
    InvalidStarter(&'a str),
    ListStarters,
    ToggleLog,
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
    Empty,
}

pub fn parse_command(line: &str) -> ChatCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ChatCommand::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ChatCommand::Send(line);
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "starter" if arg.is_empty() => ChatCommand::ListStarters,
        "starter" => match arg.parse::<usize>() {
            Ok(number) if number > 0 => ChatCommand::Starter(number - 1),
            _ => ChatCommand::InvalidStarter(arg),
        },
        "starters" => ChatCommand::ListStarters,
        "log" => ChatCommand::ToggleLog,
        "reset" | "clear" => ChatCommand::Reset,
        "help" => ChatCommand::Help,
        "quit" | "exit" => ChatCommand::Quit,
        _ => ChatCommand::Unknown(line),
    }
}

/// Terminal rendering of one transcript entry.
pub fn format_message(message: &Message) -> String {
    let mut out = if message.is_user() {
        format!("You: {}", message.content)
    } else {
        format!("HOPEr: {}", message.content)
    };
    if let Some(sources) = &message.sources {
        out.push_str(&format!("\n  Sources: {}", sources.join(", ")));
    }
    out
}

pub fn print_starters() {
    println!("Conversation starters:");
    for (number, starter) in CONVERSATION_STARTERS.iter().enumerate() {
        println!("  {:>2}. {starter}", number + 1);
    }
}

/// Report a failed send once its task completes.
fn report_send(handle: JoinHandle<Result<SendOutcome, SendError>>) {
    tokio::spawn(async move {
        match handle.await {
            Ok(Ok(_)) => {}
            Ok(Err(err)) => eprintln!("⚠️  {err}"),
            Err(err) => warn!("chat send task failed: {err}"),
        }
    });
}

pub async fn run_chat(session: ChatSession, mut log: TranscriptLog) -> Result<(), Box<dyn Error>> {
    let mut events = session.subscribe().await;

    for message in session.transcript().await {
        println!("{}\n", format_message(&message));
    }
    println!("Type a message and press Enter. /starters lists ideas, /help shows commands.\n");

    report_send(tokio::spawn({
        let session = session.clone();
        async move { session.activate().await }
    }));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    // The user's own line is already on screen; skip the echo from the session.
    let mut typed_echo: Option<String> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    ChatCommand::Empty => {}
                    ChatCommand::Send(text) => {
                        typed_echo = Some(text.to_string());
                        report_send(session.spawn_send(text));
                    }
                    ChatCommand::Starter(index) => {
                        let session = session.clone();
                        report_send(tokio::spawn(async move { session.send_starter(index).await }));
                    }
                    ChatCommand::InvalidStarter(arg) => {
                        eprintln!("⚠️  '{arg}' is not a starter number. Use /starters to list them.");
                    }
                    ChatCommand::ListStarters => print_starters(),
                    ChatCommand::ToggleLog => match log.toggle() {
                        Ok(status) => println!("{status}"),
                        Err(err) => eprintln!("⚠️  {err}"),
                    },
                    ChatCommand::Reset => session.reset().await,
                    ChatCommand::Help => println!("{HELP_TEXT}"),
                    ChatCommand::Quit => break,
                    ChatCommand::Unknown(command) => {
                        eprintln!("⚠️  Unknown command: {command}. Type /help for the list.");
                    }
                }
            }
            Some(event) = events.recv() => match event {
                SessionEvent::MessageAppended(message) => {
                    if let Err(err) = log.log_message(&message) {
                        warn!("could not write transcript log: {err}");
                    }
                    let echoed = message.is_user()
                        && typed_echo.as_deref() == Some(message.content.as_str());
                    if echoed {
                        typed_echo = None;
                    } else {
                        println!("{}\n", format_message(&message));
                    }
                }
                SessionEvent::PendingChanged(true) => println!("{THINKING_INDICATOR}"),
                SessionEvent::PendingChanged(false) => {}
                SessionEvent::Reset => {
                    println!("Conversation cleared.\n");
                    if let Some(greeting) = session.transcript().await.first() {
                        println!("{}\n", format_message(greeting));
                    }
                }
            },
        }
    }

    Ok(())
}
