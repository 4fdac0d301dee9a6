//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod chat;
pub mod quiz;
pub mod say;
pub mod settings;
pub mod starter_list;

use std::error::Error;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::cli::chat::run_chat;
use crate::cli::quiz::{run_quiz, QuizExit};
use crate::cli::say::run_say;
use crate::cli::settings::{run_set, run_unset};
use crate::cli::starter_list::list_starters;
use crate::core::config::data::Config;
use crate::core::session::ChatSession;
use crate::core::transport::{ChatTransport, HttpChatTransport};
use crate::mood::quiz::MoodQuiz;
use crate::mood::report::HttpMoodReporter;
use crate::mood::store::{FileQuizStore, MemoryQuizStore};
use crate::utils::logging::{init_tracing, TranscriptLog};

#[derive(Parser)]
#[command(name = "hoper")]
#[command(about = "Talk with HOPEr, an empathetic support companion, from your terminal")]
#[command(
    long_about = "HOPEr is a supportive chat companion backed by a retrieval-augmented \
assistant. Chat with it, try a conversation starter, or take the eight-question mood \
check-in.\n\n\
HOPEr isn't a substitute for professional care. If you're in crisis, please reach out \
to a trusted person or local helpline right away.\n\n\
Environment Variables:\n\
  HOPER_CHAT_BASE_URL   Chat backend base URL (overrides the config file)\n\
  RUST_LOG              Diagnostic log filter (default: warn)\n\n\
Chat commands:\n\
  /starters         List conversation starters\n\
  /starter <n>      Send starter number n\n\
  /log              Pause or resume the transcript log\n\
  /reset            Start the conversation over\n\
  /quit             Leave the chat"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Append the chat transcript to this file
    #[arg(short = 'l', long, global = true)]
    pub log: Option<String>,

    /// Chat backend base URL
    #[arg(short = 'b', long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive chat (default)
    Chat {
        /// Message to send as soon as the chat opens
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Send a single message and print HOPEr's reply
    Say {
        /// The message to send
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Take the mood check-in
    Quiz,
    /// List the conversation starters
    Starters,
    /// Set configuration values, or show them when no value is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Chat { message: None }) {
        Commands::Set { key, value } => {
            if let Err(err) = run_set(key, value) {
                err.print();
                std::process::exit(err.exit_code());
            }
            Ok(())
        }
        Commands::Unset { key } => {
            if let Err(err) = run_unset(&key) {
                err.print();
                std::process::exit(err.exit_code());
            }
            Ok(())
        }
        Commands::Starters => {
            list_starters();
            Ok(())
        }
        Commands::Say { prompt } => {
            let config = Config::load()?;
            let transport = chat_transport(&config, args.base_url.as_deref())?;
            run_say(prompt, transport).await
        }
        Commands::Chat { message } => {
            let config = Config::load()?;
            let transport = chat_transport(&config, args.base_url.as_deref())?;
            start_chat(transport, message, args.log).await
        }
        Commands::Quiz => {
            let config = Config::load()?;
            let client = reqwest::Client::builder()
                .timeout(config.request_timeout())
                .build()?;
            let reporter = HttpMoodReporter::new(client, config.site_base_url());
            debug!(endpoint = reporter.endpoint(), "mood results endpoint");

            let exit = match FileQuizStore::default_location() {
                Some(store) => run_quiz(&mut MoodQuiz::start(store), &reporter).await?,
                None => {
                    warn!("no data directory available; quiz progress will not be kept");
                    run_quiz(&mut MoodQuiz::start(MemoryQuizStore::new()), &reporter).await?
                }
            };

            if exit == QuizExit::OpenChat {
                let transport = chat_transport(&config, args.base_url.as_deref())?;
                start_chat(transport, None, args.log).await?;
            }
            Ok(())
        }
    }
}

fn chat_transport(
    config: &Config,
    base_url: Option<&str>,
) -> Result<Arc<dyn ChatTransport>, Box<dyn Error>> {
    let base_url = config.chat_base_url(base_url);
    let transport = HttpChatTransport::with_timeout(&base_url, config.request_timeout())?;
    debug!(endpoint = transport.endpoint(), "chat endpoint");
    Ok(Arc::new(transport))
}

async fn start_chat(
    transport: Arc<dyn ChatTransport>,
    message: Option<String>,
    log_file: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let log = TranscriptLog::new(log_file)?;
    run_chat(ChatSession::with_seed(transport, message), log).await
}
