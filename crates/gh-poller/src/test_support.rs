//! Shared fixtures for unit tests

use async_trait::async_trait;
use gh_client::{Author, PullRequestItem, SearchClient};
use gh_poller_config::Settings;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Search client replaying scripted per-call results
///
/// Records every query and token it receives. With a gate, each call waits
/// for a semaphore permit before answering, so tests can hold a run in the
/// Running phase.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<Vec<PullRequestItem>, String>>>,
    calls: Mutex<Vec<(String, String)>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<Vec<PullRequestItem>, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated(responses: Vec<Result<Vec<PullRequestItem>, String>>, gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(responses)
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }
}

#[async_trait]
impl SearchClient for ScriptedClient {
    async fn search_issues(&self, query: &str, token: &str) -> anyhow::Result<Vec<PullRequestItem>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), token.to_string()));

        if let Some(gate) = &self.gate {
            gate.acquire().await?.forget();
        }

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(items)) => Ok(items),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(Vec::new()),
        }
    }
}

pub fn item(repository: &str, number: u64) -> PullRequestItem {
    PullRequestItem {
        id: number * 1000 + repository.len() as u64,
        number,
        title: format!("Change #{}", number),
        author: Author {
            login: "alice".to_string(),
            ..Author::default()
        },
        html_url: format!("https://github.com/{}/pull/{}", repository, number),
        repository: repository.to_string(),
        repository_url: format!("https://api.github.com/repos/{}", repository),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

pub fn settings(users: &[&str]) -> Settings {
    Settings {
        users: users.iter().map(|u| u.to_string()).collect(),
        token: "t".to_string(),
        ..Settings::default()
    }
}
