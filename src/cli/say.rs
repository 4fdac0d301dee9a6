//! One-shot `say` command: send a single prompt and print the reply.

use std::error::Error;
use std::sync::Arc;

use crate::cli::chat::format_message;
use crate::core::session::{ChatSession, SendOutcome};
use crate::core::transport::ChatTransport;

pub async fn run_say(
    prompt: Vec<String>,
    transport: Arc<dyn ChatTransport>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: hoper say <prompt>");
        std::process::exit(1);
    }

    let session = ChatSession::new(transport);
    if let SendOutcome::Replied(reply) = session.send_message(&prompt).await? {
        println!("{}", format_message(&reply));
    }
    Ok(())
}
