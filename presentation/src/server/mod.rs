//! JSON HTTP surface
//!
//! `POST /api/chat` always answers 200 with the reply envelope; faults come
//! back as the single offline turn rather than as an HTTP error.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use war_room_application::{ProviderGateway, RunDebateUseCase};
use war_room_domain::{DebateResponse, ProviderId};

/// Roster entry as listed by `GET /api/personas`
#[derive(Debug, Serialize)]
pub struct PersonaView {
    pub name: String,
    pub role: String,
    pub provider: ProviderId,
    pub traits: Vec<String>,
    pub chairman: bool,
}

/// Build the router around a shared debate use case
pub fn router<G: ProviderGateway + 'static>(use_case: Arc<RunDebateUseCase<G>>) -> Router {
    Router::new()
        .route("/api/chat", post(chat::<G>))
        .route("/api/personas", get(personas::<G>))
        .route("/health", get(health))
        .with_state(use_case)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process exits
pub async fn serve<G: ProviderGateway + 'static>(
    use_case: Arc<RunDebateUseCase<G>>,
    addr: SocketAddr,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("War room listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(use_case)).await
}

async fn chat<G: ProviderGateway + 'static>(
    State(use_case): State<Arc<RunDebateUseCase<G>>>,
    body: Bytes,
) -> Json<DebateResponse> {
    Json(use_case.respond_bytes(&body).await)
}

async fn personas<G: ProviderGateway + 'static>(
    State(use_case): State<Arc<RunDebateUseCase<G>>>,
) -> Json<Vec<PersonaView>> {
    let registry = use_case.registry();
    let chairman = registry.chairman();
    let views = registry
        .roster()
        .iter()
        .map(|p| PersonaView {
            name: p.name.clone(),
            role: p.role.clone(),
            provider: p.provider,
            traits: p.traits.clone(),
            chairman: p.name == chairman.name,
        })
        .collect();
    Json(views)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use war_room_application::{DebateConfig, GatewayError, SequenceRandom};
    use war_room_domain::{PersonaRegistry, ScriptBank};

    struct DownGateway;

    #[async_trait]
    impl ProviderGateway for DownGateway {
        async fn invoke(
            &self,
            provider: ProviderId,
            _system_prompt: &str,
            _user_text: &str,
        ) -> Result<String, GatewayError> {
            Err(GatewayError::MissingCredential(provider))
        }
    }

    fn app() -> Router {
        let use_case = RunDebateUseCase::new(
            Arc::new(DownGateway),
            Arc::new(PersonaRegistry::builtin()),
            Arc::new(ScriptBank::builtin()),
            Arc::new(SequenceRandom::zeros()),
        )
        .with_config(DebateConfig::instant());
        router(Arc::new(use_case))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_chat(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_mention() {
        let response = app()
            .oneshot(post_chat(
                r#"{"message":"@grok is it cooked?","matchInfo":{"home":"Inter","away":"Milan"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        let replies = value["replies"].as_array().unwrap();
        assert_eq!(replies.len(), 6);
        assert_eq!(replies[0]["model"], "Grok 3 (Beta)");
        assert!(replies.iter().all(|r| r["isUser"] == false));
    }

    #[tokio::test]
    async fn test_chat_bad_body_is_offline_envelope() {
        let response = app().oneshot(post_chat("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        let replies = value["replies"].as_array().unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["model"], "System");
        assert!(
            replies[0]["logic"]
                .as_str()
                .unwrap()
                .starts_with("War Room Offline: ")
        );
    }

    #[tokio::test]
    async fn test_chat_null_match_info() {
        let response = app()
            .oneshot(post_chat(r#"{"message":"who wins?","matchInfo":null}"#))
            .await
            .unwrap();

        let value = body_json(response).await;
        assert_eq!(value["replies"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_personas() {
        let response = app()
            .oneshot(Request::builder().uri("/api/personas").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        let personas = value.as_array().unwrap();
        assert_eq!(personas.len(), 6);
        assert_eq!(
            personas.iter().filter(|p| p["chairman"] == true).count(),
            1
        );
        assert_eq!(personas[0]["provider"], "deepseek");
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }
}
