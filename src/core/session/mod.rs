//! One chat conversation: the transcript, the pending flag and the exchange
//! with the chat backend.
//!
//! A [`ChatSession`] is a cheap handle; clones share the same conversation.
//! Every send appends exactly one user message and, once the backend has
//! answered or failed, exactly one assistant message. Backend failures are
//! never returned to the caller. They become a supportive fallback reply in
//! the transcript instead.
//!
//! Only one exchange can be in flight per session. A send issued while
//! another is pending is rejected with [`SendError::Busy`] and leaves the
//! transcript untouched.

use crate::api::ChatResponse;
use crate::core::citation::citation_labels;
use crate::core::constants::{
    CONNECTIVITY_FALLBACK, EMPTY_ANSWER_FALLBACK, GREETING, GREETING_SOURCES,
};
use crate::core::message::{Message, MessageId};
use crate::core::starters::CONVERSATION_STARTERS;
use crate::core::transport::ChatTransport;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};


#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The text was empty after trimming; nothing happened.
    Ignored,
    /// The exchange completed and this assistant message was appended.
    Replied(Message),
    /// Every handle to the session was dropped before the reply arrived.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// Another exchange is still waiting for the backend.
    Busy,
    /// No conversation starter exists at this index.
    UnknownStarter(usize),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Busy => write!(f, "HOPEr is still replying to your last message"),
            SendError::UnknownStarter(index) => write!(f, "No conversation starter #{index}"),
        }
    }
}

impl StdError for SendError {}

/// Change notifications for a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    MessageAppended(Message),
    PendingChanged(bool),
    /// The transcript was replaced by a fresh greeting.
    Reset,
}

struct SessionState {
    transcript: Vec<Message>,
    pending: bool,
    input: String,
    seed: Option<String>,
    has_auto_sent: bool,
    next_id: u64,
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl SessionState {
    fn new(seed: Option<String>) -> Self {
        let mut state = Self {
            transcript: Vec::new(),
            pending: false,
            input: String::new(),
            seed,
            has_auto_sent: false,
            next_id: 1,
            subscribers: Vec::new(),
        };
        state.push_greeting();
        state
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn push_greeting(&mut self) {
        let id = self.allocate_id();
        let sources: Vec<String> = GREETING_SOURCES.iter().map(|s| s.to_string()).collect();
        self.transcript
            .push(Message::assistant(id, GREETING, Some(sources)));
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    fn append(&mut self, message: Message) {
        self.transcript.push(message.clone());
        self.emit(SessionEvent::MessageAppended(message));
    }

    fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
        self.emit(SessionEvent::PendingChanged(pending));
    }

    /// Append the user's message and mark the session as waiting.
    fn begin_exchange(&mut self, prompt: &str) -> Result<(), SendError> {
        if self.pending {
            return Err(SendError::Busy);
        }
        let id = self.allocate_id();
        self.append(Message::user(id, prompt));
        self.input.clear();
        self.set_pending(true);
        Ok(())
    }

    fn finish_exchange(&mut self, reply: Reply) -> Message {
        let id = self.allocate_id();
        let message = Message::assistant(id, reply.content, reply.sources);
        self.append(message.clone());
        self.set_pending(false);
        message
    }
}

struct Reply {
    content: String,
    sources: Option<Vec<String>>,
}

impl Reply {
    fn from_response(response: ChatResponse) -> Self {
        let sources = citation_labels(response.sources.as_deref());
        let content = response
            .answer
            .filter(|answer| !answer.is_empty())
            .unwrap_or_else(|| EMPTY_ANSWER_FALLBACK.to_string());
        Self { content, sources }
    }

    fn unreachable() -> Self {
        Self {
            content: CONNECTIVITY_FALLBACK.to_string(),
            sources: None,
        }
    }
}

async fn request_reply(transport: &dyn ChatTransport, prompt: &str) -> Reply {
    match transport.ask(prompt).await {
        Ok(response) => Reply::from_response(response),
        Err(err) => {
            warn!("{err}");
            Reply::unreachable()
        }
    }
}

#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<Mutex<SessionState>>,
    transport: Arc<dyn ChatTransport>,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self::with_seed(transport, None)
    }

    /// A session that sends `seed` on its first [`activate`](Self::activate).
    pub fn with_seed(transport: Arc<dyn ChatTransport>, seed: Option<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState::new(seed))),
            transport,
        }
    }

    /// Send `text` and wait for the assistant's reply.
    pub async fn send_message(&self, text: &str) -> Result<SendOutcome, SendError> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        self.inner.lock().await.begin_exchange(prompt)?;
        let reply = request_reply(self.transport.as_ref(), prompt).await;
        let message = self.inner.lock().await.finish_exchange(reply);
        Ok(SendOutcome::Replied(message))
    }

    /// Like [`send_message`](Self::send_message), but runs detached and does
    /// not keep the session alive while waiting for the backend.
    pub fn spawn_send(&self, text: impl Into<String>) -> JoinHandle<Result<SendOutcome, SendError>> {
        let state = Arc::downgrade(&self.inner);
        let transport = Arc::clone(&self.transport);
        let text = text.into();

        tokio::spawn(async move {
            let prompt = text.trim();
            if prompt.is_empty() {
                return Ok(SendOutcome::Ignored);
            }

            let Some(inner) = state.upgrade() else {
                return Ok(SendOutcome::Discarded);
            };
            inner.lock().await.begin_exchange(prompt)?;
            drop(inner);

            let reply = request_reply(transport.as_ref(), prompt).await;

            let Some(inner) = state.upgrade() else {
                debug!("chat session closed before the reply arrived");
                return Ok(SendOutcome::Discarded);
            };
            let message = inner.lock().await.finish_exchange(reply);
            Ok(SendOutcome::Replied(message))
        })
    }

    /// Send the seed message the first time this is called.
    ///
    /// Later calls, and sessions without a non-blank seed, are ignored.
    pub async fn activate(&self) -> Result<SendOutcome, SendError> {
        let prompt = {
            let mut state = self.inner.lock().await;
            if state.has_auto_sent {
                return Ok(SendOutcome::Ignored);
            }
            let Some(prompt) = state
                .seed
                .as_deref()
                .map(str::trim)
                .filter(|seed| !seed.is_empty())
                .map(str::to_string)
            else {
                return Ok(SendOutcome::Ignored);
            };
            state.begin_exchange(&prompt)?;
            state.has_auto_sent = true;
            prompt
        };

        let reply = request_reply(self.transport.as_ref(), &prompt).await;
        let message = self.inner.lock().await.finish_exchange(reply);
        Ok(SendOutcome::Replied(message))
    }

    /// Send one of the [`CONVERSATION_STARTERS`].
    pub async fn send_starter(&self, index: usize) -> Result<SendOutcome, SendError> {
        let starter = CONVERSATION_STARTERS
            .get(index)
            .ok_or(SendError::UnknownStarter(index))?;
        self.send_message(starter).await
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        self.inner.lock().await.input = text.into();
    }

    pub async fn input(&self) -> String {
        self.inner.lock().await.input.clone()
    }

    /// Send whatever is in the input buffer.
    pub async fn send_input(&self) -> Result<SendOutcome, SendError> {
        let text = self.input().await;
        self.send_message(&text).await
    }

    /// Start the conversation over from the greeting.
    ///
    /// Message ids keep counting up and the seed is not sent again. A reply
    /// still in flight is appended after the new greeting.
    pub async fn reset(&self) {
        let mut state = self.inner.lock().await;
        state.transcript.clear();
        state.input.clear();
        state.push_greeting();
        state.emit(SessionEvent::Reset);
    }

    pub async fn transcript(&self) -> Vec<Message> {
        self.inner.lock().await.transcript.clone()
    }

    pub async fn is_pending(&self) -> bool {
        self.inner.lock().await.pending
    }

    pub async fn has_auto_sent(&self) -> bool {
        self.inner.lock().await.has_auto_sent
    }

    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.lock().await.subscribers.push(tx);
        rx
    }
}
