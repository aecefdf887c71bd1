use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use keteai_chat::{format_context_banner, ChatError, ChatSession};
use keteai_llm_api::{LlmClient, LlmError};
use keteai_types::{Role, Turn};
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request as seen by the fake model
#[derive(Debug, Clone)]
struct Recorded {
    history: Vec<Turn>,
    message: String,
}

/// Replays scripted outcomes in order and records every request
struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedClient {
    fn new(outcomes: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(
                outcomes
                    .into_iter()
                    .map(|o| o.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn generate(&self, history: &[Turn], message: &str) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(Recorded {
            history: history.to_vec(),
            message: message.to_string(),
        });
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(LlmError::Api { status: 500, message }),
            None => Err(LlmError::EmptyResponse),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(18, 42, 7)
        .unwrap()
}

#[tokio::test]
async fn test_success_appends_user_and_model_turns() {
    let client = ScriptedClient::new(vec![Ok("Salut !")]);
    let mut session = ChatSession::new(client.clone());

    let reply = session.send_user_input_at("Bonjour", &instant()).await.unwrap();

    assert_eq!(reply, "Salut !");
    let payload = format!("{}Bonjour", format_context_banner(&instant()));
    assert_eq!(session.history(), &[Turn::user(payload.clone()), Turn::model("Salut !")]);

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, payload);
    assert!(requests[0].history.is_empty());
}

#[tokio::test]
async fn test_failure_leaves_history_untouched() {
    let client = ScriptedClient::new(vec![Ok("Salut !"), Err("network down")]);
    let mut session = ChatSession::new(client.clone());
    session.send_message("Bonjour").await.unwrap();

    let err = session.send_message("Encore ?").await.unwrap_err();

    assert!(matches!(err, ChatError::RemoteCall(LlmError::Api { .. })));
    assert_eq!(err.to_string(), "network down");
    assert_eq!(session.history().len(), 2);
    assert_eq!(client.requests().len(), 2);
}

#[tokio::test]
async fn test_each_request_sees_prior_turns_in_order() {
    let client = ScriptedClient::new(vec![Ok("un"), Err("boom"), Ok("deux")]);
    let mut session = ChatSession::new(client.clone());

    session.send_message("a").await.unwrap();
    session.send_message("b").await.unwrap_err();
    session.send_message("c").await.unwrap();

    let requests = client.requests();
    assert_eq!(requests[1].history, vec![Turn::user("a"), Turn::model("un")]);
    // The failed "b" turn was never recorded
    assert_eq!(requests[2].history, vec![Turn::user("a"), Turn::model("un")]);

    let roles: Vec<Role> = session.history().iter().map(Turn::role).collect();
    assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);
    assert_eq!(session.history()[2].text(), "c");
    assert_eq!(session.history()[3].text(), "deux");
}

#[tokio::test]
async fn test_session_reports_client_model() {
    let session = ChatSession::new(ScriptedClient::new(vec![]));
    assert_eq!(session.model_name(), "scripted");
    assert!(session.history().is_empty());
}
