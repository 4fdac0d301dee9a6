//! Shared constants used across the application

pub const DEFAULT_CHAT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SITE_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Environment variable that overrides the configured chat backend.
pub const CHAT_BASE_URL_ENV: &str = "HOPER_CHAT_BASE_URL";

pub const CHAT_ENDPOINT: &str = "chat";
pub const MOOD_EVALUATE_ENDPOINT: &str = "api/mood/evaluate";

pub const GREETING: &str = "Hello! I'm HOPEr, your empathetic AI companion. I'm here to provide safe, supportive guidance whenever you need it. How are you feeling today?";
pub const GREETING_SOURCES: [&str; 2] = ["Mental Health First Aid Guide", "Mindfulness for Students"];

/// Used when the backend answers without any text.
pub const EMPTY_ANSWER_FALLBACK: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

/// Used whenever the backend cannot be reached or answers with garbage.
pub const CONNECTIVITY_FALLBACK: &str = "I'm sorry, I'm having trouble connecting right now. Please check your connection and try again. If the problem persists, I'm still here to listen and support you.";

pub const THINKING_INDICATOR: &str = "HOPEr is thinking...";
