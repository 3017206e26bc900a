//! Deterministic chat-completion double for offline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatCompletion, ChatMessage, CompletionParams, LlmError};

pub enum Scripted {
    Reply(String),
    Fail,
}

/// Replays canned replies in order and records every request it receives.
/// Once the script runs out every call fails with `EmptyContent`.
#[derive(Default)]
pub struct ScriptedLlm {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(Vec<ChatMessage>, CompletionParams)>>,
}

impl ScriptedLlm {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            replies
                .into_iter()
                .map(|r| Scripted::Reply(r.into()))
                .collect(),
        )
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<(Vec<ChatMessage>, CompletionParams)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedLlm {
    async fn chat_complete(
        &self,
        messages: &[ChatMessage],
        params: CompletionParams,
    ) -> Result<String, LlmError> {
        self.requests
            .lock()
            .unwrap()
            .push((messages.to_vec(), params));

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Fail) => Err(LlmError::Api {
                status: 503,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

/// Never answers; used to exercise call timeouts.
pub struct HangingLlm;

#[async_trait]
impl ChatCompletion for HangingLlm {
    async fn chat_complete(
        &self,
        _messages: &[ChatMessage],
        _params: CompletionParams,
    ) -> Result<String, LlmError> {
        std::future::pending::<()>().await;
        Err(LlmError::EmptyContent)
    }
}
