//! Gateway doubles shared by the use case tests

use crate::ports::provider_gateway::{GatewayError, ProviderGateway};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use war_room_domain::ProviderId;

/// Every call fails as if the provider were down
pub struct FailingGateway;

#[async_trait]
impl ProviderGateway for FailingGateway {
    async fn invoke(
        &self,
        provider: ProviderId,
        _system_prompt: &str,
        _user_text: &str,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Status {
            provider,
            status: 503,
        })
    }
}

/// Answers `"<provider> says: <user text>"`
pub struct EchoGateway;

#[async_trait]
impl ProviderGateway for EchoGateway {
    async fn invoke(
        &self,
        provider: ProviderId,
        _system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        Ok(format!("{} says: {}", provider, user_text))
    }
}

/// Records call start/end events and the system prompts it was given
#[derive(Default)]
pub struct RecordingGateway {
    pub events: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderGateway for RecordingGateway {
    async fn invoke(
        &self,
        provider: ProviderId,
        system_prompt: &str,
        _user_text: &str,
    ) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(system_prompt.to_string());
        self.events.lock().unwrap().push(format!("start:{}", provider));
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        self.events.lock().unwrap().push(format!("end:{}", provider));
        Err(GatewayError::Timeout)
    }
}

/// Panics on every call
pub struct PanickingGateway;

#[async_trait]
impl ProviderGateway for PanickingGateway {
    async fn invoke(
        &self,
        _provider: ProviderId,
        _system_prompt: &str,
        _user_text: &str,
    ) -> Result<String, GatewayError> {
        panic!("adapter bug")
    }
}

/// Fails after a delay that is longest for the first provider in
/// `ProviderId::ALL`, so calls finish out of selection order
pub struct StaggeredGateway;

#[async_trait]
impl ProviderGateway for StaggeredGateway {
    async fn invoke(
        &self,
        provider: ProviderId,
        _system_prompt: &str,
        _user_text: &str,
    ) -> Result<String, GatewayError> {
        let position = ProviderId::ALL
            .iter()
            .position(|p| *p == provider)
            .unwrap_or(0);
        let steps = (ProviderId::ALL.len() - position) as u64;
        tokio::time::sleep(Duration::from_millis(10 * steps)).await;
        Err(GatewayError::Timeout)
    }
}

/// Answers every call with a unique `reply-NN` and keeps the prompt it saw
#[derive(Default)]
pub struct CountingGateway {
    calls: AtomicUsize,
    log: Mutex<Vec<(String, String)>>,
}

impl CountingGateway {
    /// System prompt of the call that produced `reply`
    pub fn prompt_for(&self, reply: &str) -> Option<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .find(|(_, r)| r == reply)
            .map(|(prompt, _)| prompt.clone())
    }
}

#[async_trait]
impl ProviderGateway for CountingGateway {
    async fn invoke(
        &self,
        _provider: ProviderId,
        system_prompt: &str,
        _user_text: &str,
    ) -> Result<String, GatewayError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let reply = format!("reply-{:02}", n);
        self.log
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), reply.clone()));
        Ok(reply)
    }
}
