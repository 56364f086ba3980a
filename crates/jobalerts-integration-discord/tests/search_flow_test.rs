use async_trait::async_trait;
use jobalerts::{JobSearchService, UNREACHABLE_PLACEHOLDER};
use jobalerts_integration_discord::{
    texts, ChatInput, DispatchError, Dispatcher, Keyboard, Reply, ReplySink, DEFAULT_SUGGESTIONS,
};
use jobalerts_workua::{WorkUaConfig, WorkUaSource};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingSink {
    replies: Mutex<Vec<Reply>>,
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send(&self, reply: Reply) -> Result<(), DispatchError> {
        self.replies.lock().unwrap().push(reply);
        Ok(())
    }
}

fn dispatcher_for(origin: &str) -> Dispatcher<WorkUaSource> {
    let config = WorkUaConfig::default()
        .with_origin(origin)
        .with_timeout(Duration::from_secs(5));
    let source = Arc::new(WorkUaSource::new(config).unwrap());
    let suggestions = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    Dispatcher::new(Arc::new(JobSearchService::new(source)), suggestions)
}

const THREE_CARDS: &str = r#"
<html><body>
  <div class="card card-hover card-visited wordwrap job-link"><h2><a href="/jobs/101/">Python Developer</a></h2></div>
  <div class="card card-hover card-visited wordwrap job-link"><h2><a href="/jobs/102/">Junior Python Engineer</a></h2></div>
  <div class="card card-hover card-visited wordwrap job-link"><h2><a href="/jobs/103/">Data Engineer (Python)</a></h2></div>
</body></html>
"#;

#[tokio::test]
async fn python_search_replies_with_three_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs-Python/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THREE_CARDS))
        .expect(1)
        .mount(&server)
        .await;

    let sink = RecordingSink::default();
    dispatcher_for(&server.uri())
        .handle("7", ChatInput::from_message("Python").unwrap(), &sink)
        .await
        .unwrap();

    let replies = sink.replies.lock().unwrap().clone();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].content, texts::SEARCHING);

    let blocks: Vec<&str> = replies[1].content.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[0],
        format!("🔗 Python Developer\n{}/jobs/101/", server.uri())
    );
    assert_eq!(
        blocks[2],
        format!("🔗 Data Engineer (Python)\n{}/jobs/103/", server.uri())
    );
    assert!(!replies[1].content.contains("No jobs found"));
    assert!(!replies[1].content.ends_with('\n'));
    assert!(matches!(replies[1].keyboard, Some(Keyboard::Suggestions(_))));
}

#[tokio::test]
async fn server_error_replies_with_unreachable_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let sink = RecordingSink::default();
    dispatcher_for(&server.uri())
        .handle("7", ChatInput::from_message("Python").unwrap(), &sink)
        .await
        .unwrap();

    let replies = sink.replies.lock().unwrap().clone();
    assert_eq!(replies[1].content, UNREACHABLE_PLACEHOLDER);
}
