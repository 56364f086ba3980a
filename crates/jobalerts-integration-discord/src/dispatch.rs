//! Chat dispatch
//!
//! Maps inbound chat input to replies. Platform independent: replies go out
//! through a [`ReplySink`], so the whole flow can be exercised without Discord.

use async_trait::async_trait;
use jobalerts::{JobSearchService, ListingSource, SearchError, SearchQuery, REPLY_SEPARATOR};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::input::{Callback, ChatInput, Command};
use crate::reply::{join_within_limit, texts, Keyboard, Reply};

/// Errors surfaced by the dispatch layer
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to send reply: {0}")]
    Send(String),
}

/// Destination for replies to one conversation
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, reply: Reply) -> Result<(), DispatchError>;
}

/// Routes commands, button clicks and search text
pub struct Dispatcher<S: ListingSource> {
    search: Arc<JobSearchService<S>>,
    suggestions: Vec<String>,
}

impl<S: ListingSource> Dispatcher<S> {
    pub fn new(search: Arc<JobSearchService<S>>, suggestions: Vec<String>) -> Self {
        Self {
            search,
            suggestions,
        }
    }

    /// Handle one inbound event from `user_id`, sending replies to `sink`
    pub async fn handle<R>(
        &self,
        user_id: &str,
        input: ChatInput,
        sink: &R,
    ) -> Result<(), DispatchError>
    where
        R: ReplySink + ?Sized,
    {
        match input {
            ChatInput::Command {
                command: Command::Start,
            } => {
                info!(user_id = %user_id, "Received /start");
                sink.send(Reply::new(texts::MAIN_MENU).with_keyboard(Keyboard::MainMenu))
                    .await
            }
            ChatInput::Command {
                command: Command::Status,
            } => {
                info!(user_id = %user_id, "Received /status");
                sink.send(Reply::new(texts::STATUS)).await
            }
            ChatInput::Callback {
                callback: Callback::SearchJobs,
            } => {
                info!(user_id = %user_id, "User opened job search");
                sink.send(Reply::new(texts::SEARCH_PROMPT).with_keyboard(self.suggestions_keyboard()))
                    .await
            }
            ChatInput::Callback {
                callback: Callback::About,
            } => {
                info!(user_id = %user_id, "User requested bot info");
                sink.send(Reply::new(texts::ABOUT)).await
            }
            ChatInput::Callback {
                callback: Callback::Query { text },
            }
            | ChatInput::Text { text } => self.search(user_id, &text, sink).await,
        }
    }

    /// Run a search and render it as a single message body.
    ///
    /// Unreachable and empty results are already rendered as placeholders;
    /// an `Err` means an unexpected fault. Entries that would push the
    /// message past Discord's length limit are left out.
    pub async fn search_reply(&self, query: &SearchQuery) -> Result<String, SearchError> {
        let lines = self.search.search(query).await?.lines();
        let content = join_within_limit(&lines, REPLY_SEPARATOR);

        let sent = content.split(REPLY_SEPARATOR).count();
        if sent < lines.len() {
            warn!(
                query = %query,
                found = lines.len(),
                sent = sent,
                "Reply trimmed to fit message length limit"
            );
        }

        Ok(content)
    }

    async fn search<R>(&self, user_id: &str, text: &str, sink: &R) -> Result<(), DispatchError>
    where
        R: ReplySink + ?Sized,
    {
        let Some(query) = SearchQuery::parse(text) else {
            debug!(user_id = %user_id, "Ignoring blank search text");
            return Ok(());
        };

        info!(user_id = %user_id, query = %query, "Received job search request");
        sink.send(Reply::new(texts::SEARCHING)).await?;

        let content = match self.search_reply(&query).await {
            Ok(content) => content,
            Err(e) => {
                error!(
                    user_id = %user_id,
                    query = %query,
                    error = %e,
                    "Job search failed"
                );
                texts::SEARCH_FAILED.to_string()
            }
        };

        sink.send(Reply::new(content).with_keyboard(self.suggestions_keyboard()))
            .await
    }

    fn suggestions_keyboard(&self) -> Keyboard {
        Keyboard::Suggestions(self.suggestions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobalerts::{JobListing, NO_MATCHES_PLACEHOLDER, UNREACHABLE_PLACEHOLDER};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        replies: Mutex<Vec<Reply>>,
    }

    impl RecordingSink {
        fn replies(&self) -> Vec<Reply> {
            self.replies.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send(&self, reply: Reply) -> Result<(), DispatchError> {
            self.replies.lock().unwrap().push(reply);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl ReplySink for FailingSink {
        async fn send(&self, _reply: Reply) -> Result<(), DispatchError> {
            Err(DispatchError::Send("channel gone".into()))
        }
    }

    enum Outcome {
        Found(usize),
        LongTitles(usize),
        Unreachable,
        Fault,
    }

    struct StubSource {
        outcome: Outcome,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ListingSource for StubSource {
        async fn fetch_listings(
            &self,
            query: &SearchQuery,
            limit: usize,
        ) -> Result<Vec<JobListing>, SearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            match self.outcome {
                Outcome::Found(n) => Ok((1..=n.min(limit))
                    .map(|i| {
                        JobListing::new(
                            format!("{query} {i}"),
                            format!("https://www.work.ua/jobs/{i}/"),
                        )
                    })
                    .collect()),
                Outcome::LongTitles(n) => Ok((1..=n.min(limit))
                    .map(|i| {
                        JobListing::new(
                            format!("{i:02} {}", "Senior engineer ".repeat(8)),
                            format!("https://www.work.ua/jobs/{i}/"),
                        )
                    })
                    .collect()),
                Outcome::Unreachable => Err(SearchError::Unreachable("connection refused".into())),
                Outcome::Fault => Err(SearchError::Extraction("task panicked".into())),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn dispatcher(outcome: Outcome) -> (Dispatcher<StubSource>, Arc<StubSource>) {
        dispatcher_with_limit(outcome, jobalerts::DEFAULT_MAX_RESULTS)
    }

    fn dispatcher_with_limit(
        outcome: Outcome,
        max_results: usize,
    ) -> (Dispatcher<StubSource>, Arc<StubSource>) {
        let source = Arc::new(StubSource {
            outcome,
            queries: Mutex::new(Vec::new()),
        });
        let search =
            Arc::new(JobSearchService::new(source.clone()).with_max_results(max_results));
        let suggestions = vec!["Python".to_string(), "Менеджер".to_string()];
        (Dispatcher::new(search, suggestions), source)
    }

    fn text(t: &str) -> ChatInput {
        ChatInput::from_message(t).unwrap()
    }

    #[tokio::test]
    async fn test_start_shows_main_menu() {
        let (dispatcher, _) = dispatcher(Outcome::Found(1));
        let sink = RecordingSink::default();

        dispatcher.handle("42", text("/start"), &sink).await.unwrap();

        let replies = sink.replies();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].content, texts::MAIN_MENU);
        assert_eq!(replies[0].keyboard, Some(Keyboard::MainMenu));
    }

    #[tokio::test]
    async fn test_status_reply() {
        let (dispatcher, source) = dispatcher(Outcome::Found(1));
        let sink = RecordingSink::default();

        dispatcher.handle("42", text("/status"), &sink).await.unwrap();

        assert_eq!(sink.replies()[0].content, texts::STATUS);
        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_callback_offers_suggestions() {
        let (dispatcher, _) = dispatcher(Outcome::Found(1));
        let sink = RecordingSink::default();

        dispatcher
            .handle("42", ChatInput::callback(Callback::SearchJobs), &sink)
            .await
            .unwrap();

        let replies = sink.replies();
        assert_eq!(replies[0].content, texts::SEARCH_PROMPT);
        assert_eq!(
            replies[0].keyboard,
            Some(Keyboard::Suggestions(vec![
                "Python".to_string(),
                "Менеджер".to_string()
            ]))
        );
    }

    #[tokio::test]
    async fn test_about_callback() {
        let (dispatcher, _) = dispatcher(Outcome::Found(1));
        let sink = RecordingSink::default();

        dispatcher
            .handle("42", ChatInput::callback(Callback::About), &sink)
            .await
            .unwrap();

        assert!(sink.replies()[0].content.contains("Work.ua"));
    }

    #[tokio::test]
    async fn test_text_search_sends_notice_then_results() {
        let (dispatcher, source) = dispatcher(Outcome::Found(3));
        let sink = RecordingSink::default();

        dispatcher.handle("42", text("Python"), &sink).await.unwrap();

        let replies = sink.replies();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].content, texts::SEARCHING);
        assert_eq!(replies[1].content.split("\n\n").count(), 3);
        assert!(replies[1].content.starts_with("🔗 Python 1\nhttps://www.work.ua/jobs/1/"));
        assert!(matches!(replies[1].keyboard, Some(Keyboard::Suggestions(_))));
        assert_eq!(*source.queries.lock().unwrap(), vec!["Python".to_string()]);
    }

    #[tokio::test]
    async fn test_suggestion_button_searches_its_text() {
        let (dispatcher, source) = dispatcher(Outcome::Found(1));
        let sink = RecordingSink::default();
        let callback = Callback::Query {
            text: "Менеджер".to_string(),
        };

        dispatcher
            .handle("42", ChatInput::callback(callback), &sink)
            .await
            .unwrap();

        assert_eq!(*source.queries.lock().unwrap(), vec!["Менеджер".to_string()]);
        assert_eq!(sink.replies()[1].content, "🔗 Менеджер 1\nhttps://www.work.ua/jobs/1/");
    }

    #[tokio::test]
    async fn test_no_matches_and_unreachable_are_distinct_replies() {
        let (empty, _) = dispatcher(Outcome::Found(0));
        let (down, _) = dispatcher(Outcome::Unreachable);
        let empty_sink = RecordingSink::default();
        let down_sink = RecordingSink::default();

        empty.handle("1", text("zzz"), &empty_sink).await.unwrap();
        down.handle("1", text("zzz"), &down_sink).await.unwrap();

        assert_eq!(empty_sink.replies()[1].content, NO_MATCHES_PLACEHOLDER);
        assert_eq!(down_sink.replies()[1].content, UNREACHABLE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_fault_yields_single_generic_reply() {
        let (dispatcher, _) = dispatcher(Outcome::Fault);
        let sink = RecordingSink::default();

        dispatcher.handle("42", text("Python"), &sink).await.unwrap();

        let replies = sink.replies();
        let failures: Vec<&Reply> = replies
            .iter()
            .filter(|r| r.content == texts::SEARCH_FAILED)
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(replies.len(), 2);
        assert!(replies.iter().all(|r| !r.content.contains("🔗")));
    }

    #[tokio::test]
    async fn test_long_results_fit_in_one_message() {
        let (dispatcher, _) = dispatcher_with_limit(Outcome::LongTitles(20), 20);
        let sink = RecordingSink::default();

        dispatcher.handle("42", text("Python"), &sink).await.unwrap();

        let replies = sink.replies();
        assert_eq!(replies.len(), 2);

        let content = &replies[1].content;
        assert!(content.chars().count() <= crate::reply::MAX_MESSAGE_LEN);

        let blocks: Vec<&str> = content.split("\n\n").collect();
        assert!(blocks.len() < 20);
        assert!(blocks[0].starts_with("🔗 01 "));
        let last = blocks[blocks.len() - 1];
        assert!(last.ends_with(&format!("/jobs/{}/", blocks.len())));
    }

    #[tokio::test]
    async fn test_send_failure_is_returned() {
        let (dispatcher, source) = dispatcher(Outcome::Found(1));

        let err = dispatcher
            .handle("42", text("Python"), &FailingSink)
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Send(_)));
        assert!(source.queries.lock().unwrap().is_empty());
    }
}
