use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use leadconnect_signup::adapters::mock_registry::{create_mock_app, MockRegistry, REGISTER_PATH};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Bodies received by a scripted endpoint
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<Value>>>);

impl Received {
    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    async fn serve(app: Router) -> Self {
        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer { addr, base_url }
    }

    /// The in-memory registration service
    pub async fn mock_registry(registry: MockRegistry) -> Self {
        Self::serve(create_mock_app(registry)).await
    }

    /// An endpoint that records each body and always answers `status` with `reply`
    pub async fn scripted(status: StatusCode, reply: Value, delay: Duration) -> (Self, Received) {
        let received = Received::default();
        let app = Router::new()
            .route(
                REGISTER_PATH,
                post(
                    move |State(received): State<Received>, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            received.0.lock().unwrap().push(body);
                            tokio::time::sleep(delay).await;
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(received.clone());

        (Self::serve(app).await, received)
    }

    /// A loopback address nothing listens on
    pub async fn unreachable_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}{}", addr, REGISTER_PATH)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, REGISTER_PATH)
    }
}
