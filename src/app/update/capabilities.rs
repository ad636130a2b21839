//! Speech, share and clipboard handlers.
//!
//! Each capability is optional and degrades to a toast; a share the user
//! backed out of stays silent, only genuine failures fall through to the
//! clipboard.

use iced::Task;
use tracing::warn;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::share::{self, ShareOutcome};

impl App {
    /// Handle capability-related messages
    pub fn handle_capabilities(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SpeakQuote => {
                let Some(quote) = &self.library.current_quote else {
                    return Some(Task::none());
                };
                if !self.core.speech.is_available() {
                    return Some(Task::done(Message::ShowErrorToast(
                        "Speech not supported on this system ❌".to_string(),
                    )));
                }
                match self.core.speech.speak(&quote.spoken()) {
                    Ok(()) => Some(Task::done(Message::ShowToast(
                        "Speaking quote... 🔊".to_string(),
                    ))),
                    Err(e) => {
                        warn!("speech synthesis failed: {}", e);
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not start speech ❌".to_string(),
                        )))
                    }
                }
            }

            Message::ShareQuote => {
                let Some(quote) = &self.library.current_quote else {
                    return Some(Task::none());
                };
                let body = quote.formatted();
                Some(Task::perform(
                    async move {
                        // share_text blocks on the opener; keep it off the UI thread
                        tokio::task::spawn_blocking(move || {
                            share::share_text("Inspirational Quote", &body)
                        })
                        .await
                        .unwrap_or_else(|e| ShareOutcome::Failed(e.to_string()))
                    },
                    Message::ShareFinished,
                ))
            }

            Message::ShareFinished(outcome) => {
                if let ShareOutcome::Failed(e) = outcome {
                    warn!("share failed: {}", e);
                }
                if share::needs_clipboard_fallback(outcome) {
                    Some(Task::done(Message::CopyQuote))
                } else if *outcome == ShareOutcome::Shared {
                    Some(Task::done(Message::ShowToast("Quote shared! 📤".to_string())))
                } else {
                    // User backed out; not an error
                    Some(Task::none())
                }
            }

            Message::CopyQuote => {
                let Some(quote) = &self.library.current_quote else {
                    return Some(Task::none());
                };
                let text = quote.formatted();
                match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
                    Ok(()) => Some(Task::done(Message::ShowToast(
                        "Quote copied to clipboard! 📋".to_string(),
                    ))),
                    Err(e) => {
                        warn!("clipboard error: {}", e);
                        Some(Task::done(Message::ShowErrorToast(
                            "Failed to copy quote ❌".to_string(),
                        )))
                    }
                }
            }

            _ => None,
        }
    }
}
