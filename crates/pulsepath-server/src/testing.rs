use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use pulsepath_providers::{
    ChatCompleter, PlacesQuery, PlacesSearcher, RelayedResponse, Result, SentimentAnalyzer,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::server::Server;
use crate::state::AppState;

type SentimentScript = Box<dyn Fn(&str) -> Result<RelayedResponse> + Send + Sync>;
type ChatScript = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;
type PlacesScript = Box<dyn Fn(&PlacesQuery) -> Result<String> + Send + Sync>;

pub struct MockSentiment {
    script: SentimentScript,
    pub seen: Mutex<Vec<String>>,
}

impl MockSentiment {
    pub fn scripted(f: impl Fn(&str) -> Result<RelayedResponse> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            script: Box::new(f),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SentimentAnalyzer for MockSentiment {
    fn name(&self) -> &str {
        "mock-sentiment"
    }

    async fn analyze(&self, text: &str) -> Result<RelayedResponse> {
        self.seen.lock().unwrap().push(text.to_string());
        (self.script)(text)
    }
}

pub struct MockChat {
    script: ChatScript,
    pub seen: Mutex<Vec<String>>,
}

impl MockChat {
    pub fn scripted(f: impl Fn(&str) -> Result<String> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            script: Box::new(f),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ChatCompleter for MockChat {
    fn name(&self) -> &str {
        "mock-chat"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        self.seen.lock().unwrap().push(prompt.to_string());
        (self.script)(prompt)
    }
}

pub struct MockPlaces {
    script: PlacesScript,
    pub seen: Mutex<Vec<PlacesQuery>>,
}

impl MockPlaces {
    pub fn scripted(
        f: impl Fn(&PlacesQuery) -> Result<String> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            script: Box::new(f),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PlacesSearcher for MockPlaces {
    fn name(&self) -> &str {
        "mock-places"
    }

    async fn nearby(&self, query: &PlacesQuery) -> Result<String> {
        self.seen.lock().unwrap().push(*query);
        (self.script)(query)
    }
}

pub struct Mocks {
    pub sentiment: Arc<MockSentiment>,
    pub chat: Arc<MockChat>,
    pub places: Arc<MockPlaces>,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            sentiment: MockSentiment::scripted(|_| {
                Ok(RelayedResponse::new(200, r#"{"label":"neutral","confidence":0.5}"#))
            }),
            chat: MockChat::scripted(|_| Ok("Drink water.".to_string())),
            places: MockPlaces::scripted(|_| Ok(r#"{"results":[],"status":"ZERO_RESULTS"}"#.to_string())),
        }
    }
}

impl Mocks {
    pub fn router_state(&self) -> AppState {
        AppState::new(
            self.sentiment.clone(),
            self.chat.clone(),
            self.places.clone(),
        )
    }

    pub fn router(&self) -> Router {
        Server::new(ServerConfig::default(), self.router_state()).router()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}
