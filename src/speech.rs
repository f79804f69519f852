//! Pronunciation through an external text-to-speech program.

use parking_lot::Mutex;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;

use crate::config::SpeechConfig;

/// Fire-and-forget speech output.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str);
}

/// Runs `{program} -v {language} {text}` per utterance.
///
/// Children are never awaited; finished ones are reaped on the next call.
pub struct CommandSpeaker {
    program: String,
    language: String,
    children: Mutex<Vec<Child>>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            language: language.into(),
            children: Mutex::new(Vec::new()),
        }
    }

    fn command(&self, text: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-v")
            .arg(&self.language)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) {
        let mut children = self.children.lock();
        children.retain_mut(|child| matches!(child.try_wait(), Ok(None)));

        match self.command(text).spawn() {
            Ok(child) => {
                tracing::debug!(word = text, pid = child.id(), "speaking");
                children.push(child);
            }
            Err(err) => {
                tracing::warn!("Failed to start speech program '{}': {}", self.program, err);
            }
        }
    }
}

/// Used when speech is disabled.
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, text: &str) {
        tracing::debug!(word = text, "speech disabled");
    }
}

/// Pick the speaker for the given settings.
pub fn speaker_from_config(config: &SpeechConfig) -> Arc<dyn Speaker> {
    if config.enabled {
        Arc::new(CommandSpeaker::new(&config.program, &config.language))
    } else {
        Arc::new(SilentSpeaker)
    }
}
