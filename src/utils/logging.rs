use crate::core::message::Message;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` picks the filter; without it only warnings are shown. Calling
/// this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Plain-text transcript written next to the interactive chat.
pub struct TranscriptLog {
    file_path: Option<String>,
    is_active: bool,
}

impl TranscriptLog {
    pub fn new(log_file: Option<String>) -> io::Result<Self> {
        let mut log = TranscriptLog {
            file_path: None,
            is_active: false,
        };
        if let Some(path) = log_file {
            log.set_log_file(path)?;
        }
        Ok(log)
    }

    pub fn set_log_file(&mut self, path: String) -> io::Result<String> {
        test_file_access(&path)?;

        let status = format!("Logging enabled to: {path}");
        self.file_path = Some(path);
        self.is_active = true;
        Ok(status)
    }

    /// Pause or resume writing. Fails when no file was ever configured.
    pub fn toggle(&mut self) -> Result<String, String> {
        let Some(path) = &self.file_path else {
            return Err("No log file specified. Start with --log <file> to keep a transcript.".into());
        };
        self.is_active = !self.is_active;
        if self.is_active {
            Ok(format!("Logging resumed to: {path}"))
        } else {
            Ok(format!("Logging paused (file: {path})"))
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Append one transcript entry followed by a blank line.
    pub fn log_message(&self, message: &Message) -> io::Result<()> {
        let Some(path) = self.file_path.as_deref().filter(|_| self.is_active) else {
            return Ok(());
        };

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        write_entry(&mut writer, message)?;
        writer.flush()
    }

    pub fn status_string(&self) -> String {
        match (&self.file_path, self.is_active) {
            (None, _) => "disabled".to_string(),
            (Some(path), active) => format!(
                "{} ({})",
                if active { "active" } else { "paused" },
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
        }
    }
}

fn write_entry(writer: &mut impl Write, message: &Message) -> io::Result<()> {
    let content = if message.is_user() {
        format!("You: {}", message.content)
    } else {
        message.content.clone()
    };
    for line in content.lines() {
        writeln!(writer, "{line}")?;
    }
    if let Some(sources) = &message.sources {
        writeln!(writer, "Sources: {}", sources.join(", "))?;
    }
    writeln!(writer)
}

fn test_file_access(path: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::MessageId;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn entries_are_written_in_transcript_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat.log");
        let log = TranscriptLog::new(Some(path.to_string_lossy().into_owned())).unwrap();

        log.log_message(&Message::user(MessageId::new(2), "Hello"))
            .unwrap();
        log.log_message(&Message::assistant(
            MessageId::new(3),
            "Hi there\nHow can I help?",
            Some(vec!["guide.pdf".to_string(), "notes.md".to_string()]),
        ))
        .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "You: Hello\n\nHi there\nHow can I help?\nSources: guide.pdf, notes.md\n\n"
        );
    }

    #[test]
    fn paused_log_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat.log");
        let mut log = TranscriptLog::new(Some(path.to_string_lossy().into_owned())).unwrap();
        assert_eq!(log.status_string(), "active (chat.log)");

        log.toggle().unwrap();
        assert!(!log.is_active());
        assert_eq!(log.status_string(), "paused (chat.log)");
        log.log_message(&Message::user(MessageId::new(2), "private"))
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        log.toggle().unwrap();
        log.log_message(&Message::user(MessageId::new(4), "again"))
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "You: again\n\n");
    }

    #[test]
    fn disabled_log_cannot_toggle() {
        let mut log = TranscriptLog::new(None).unwrap();
        assert_eq!(log.status_string(), "disabled");
        assert!(log.toggle().is_err());
        log.log_message(&Message::user(MessageId::new(2), "ignored"))
            .unwrap();
    }

    #[test]
    fn unwritable_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("chat.log");
        assert!(TranscriptLog::new(Some(path.to_string_lossy().into_owned())).is_err());
    }
}
