//! Mood catalog and quote fetch handlers.
//!
//! Every fetch is tagged with a sequence number; only the response matching
//! the latest request is applied, so rapid mood switches can never paint a
//! stale quote over a newer one. Every failure path substitutes fallback
//! content - nothing here surfaces an error to the user.

use iced::Task;
use tracing::{debug, warn};

use crate::api;
use crate::api::Quote;
use crate::app::message::{Message, QuoteRequest};
use crate::app::state::App;

impl App {
    /// Handle quote and mood catalog related messages
    pub fn handle_quotes(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::MoodsLoaded(result) => {
                match result {
                    Ok(moods) => self.library.moods = moods.clone(),
                    Err(e) => {
                        warn!("failed to load moods, using built-in catalog: {}", e);
                        self.library.moods = api::fallback_moods();
                    }
                }
                Some(Task::none())
            }

            Message::SelectMood(mood) => {
                self.library.current_mood = Some(mood.name.clone());
                Some(self.request_quote(QuoteRequest::Mood(mood.name.clone())))
            }

            Message::RandomQuote | Message::AutoPlayTick => {
                Some(self.request_quote(QuoteRequest::Random))
            }

            Message::QuoteLoaded {
                seq,
                request,
                result,
            } => Some(self.apply_quote_response(*seq, request, result)),

            _ => None,
        }
    }

    /// Start a quote fetch under a fresh sequence number.
    fn request_quote(&mut self, request: QuoteRequest) -> Task<Message> {
        self.library.quote_seq += 1;
        let seq = self.library.quote_seq;
        self.ui.is_loading = true;

        let api = self.core.api.clone();
        Task::perform(
            async move {
                let result = match &request {
                    QuoteRequest::Mood(name) => api.random_quote(Some(name)).await,
                    _ => api.random_quote(None).await,
                };
                (request, result.map_err(|e| e.to_string()))
            },
            move |(request, result)| Message::QuoteLoaded {
                seq,
                request,
                result,
            },
        )
    }

    fn apply_quote_response(
        &mut self,
        seq: u64,
        request: &QuoteRequest,
        result: &Result<Quote, String>,
    ) -> Task<Message> {
        if seq != self.library.quote_seq {
            debug!(
                "discarding stale quote response (seq {}, latest {})",
                seq, self.library.quote_seq
            );
            return Task::none();
        }
        self.ui.is_loading = false;

        match (request, result) {
            (QuoteRequest::Initial, Ok(quote)) => {
                self.library.current_quote = Some(quote.clone());
                Task::none()
            }
            (QuoteRequest::Initial, Err(e)) => {
                warn!("startup quote fetch failed: {}", e);
                self.library.current_quote = Some(api::welcome_quote());
                Task::none()
            }

            (QuoteRequest::Random, Ok(quote)) => {
                self.library.current_quote = Some(quote.clone());
                self.library.current_mood = Some("random".to_string());
                Task::done(Message::ShowToast("New random inspiration! 🎲".to_string()))
            }
            (QuoteRequest::Random, Err(e)) => {
                warn!("random quote fetch failed: {}", e);
                self.library.current_quote = Some(api::welcome_quote());
                Task::none()
            }

            (QuoteRequest::Mood(name), Ok(quote)) => {
                self.library.current_quote = Some(quote.clone());
                Task::done(Message::ShowToast(format!(
                    "Perfect quote for your {} mood! ✨",
                    name
                )))
            }
            (QuoteRequest::Mood(name), Err(e)) => {
                warn!("quote fetch for mood '{}' failed: {}", name, e);
                self.library.current_quote = Some(api::fallback_quote(name));
                Task::done(Message::ShowToast(
                    "Here's some inspiration for you! 🌟".to_string(),
                ))
            }
        }
    }
}
