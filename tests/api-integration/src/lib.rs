//! In-process stand-in for the product API, for driving the real HTTP client.
//!
//! Speaks the same JSON as the production backend, including prices encoded
//! as strings, and records every request it receives.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex as StdMutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use vitrine_client::editor::Confirm;
use vitrine_client::notify::{Notification, Notifier};
use vitrine_client::{ClientConfig, HttpProductService};
use vitrine_common::image::decode_data_url;
use vitrine_common::product::Product;

pub const UPDATED_MESSAGE: &str = "Produto atualizado com sucesso";

/// A request as seen by the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Get(String),
    Put(String, Product),
    Delete(String),
}

#[derive(Default)]
struct BackendState {
    products: Mutex<BTreeMap<String, Product>>,
    requests: Mutex<Vec<Recorded>>,
    forced_status: Mutex<Option<StatusCode>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<BackendState>,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Bind an ephemeral port and serve until dropped.
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(BackendState::default());
        let app = Router::new()
            .route(
                "/produtos/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Mock backend stopped: {e}");
            }
        });
        tracing::debug!("Mock backend listening on {addr}");

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            server,
        })
    }

    pub fn service(&self) -> anyhow::Result<HttpProductService> {
        Ok(HttpProductService::new(ClientConfig::new(&self.base_url)?)?)
    }

    pub async fn insert(&self, id: &str, product: Product) {
        self.state
            .products
            .lock()
            .await
            .insert(id.to_string(), product);
    }

    pub async fn product(&self, id: &str) -> Option<Product> {
        self.state.products.lock().await.get(id).cloned()
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().await.clone()
    }

    /// Answer every following request with `status` and an error body.
    pub async fn fail_with(&self, status: StatusCode) {
        *self.state.forced_status.lock().await = Some(status);
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "mensagem": text }))).into_response()
}

async fn forced(state: &BackendState) -> Option<Response> {
    state
        .forced_status
        .lock()
        .await
        .map(|status| message(status, "forced failure"))
}

async fn get_product(State(state): State<Arc<BackendState>>, Path(id): Path<String>) -> Response {
    state.requests.lock().await.push(Recorded::Get(id.clone()));
    if let Some(resp) = forced(&state).await {
        return resp;
    }
    let Some(product) = state.products.lock().await.get(&id).cloned() else {
        return message(StatusCode::NOT_FOUND, "Produto não encontrado");
    };
    let mut body = match serde_json::to_value(&product) {
        Ok(v) => v,
        Err(e) => return message(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };
    // Numeric column: the real backend sends it as a string.
    body["preco"] = Value::String(format!("{:.2}", product.price));
    body["id"] = Value::String(id);
    Json(body).into_response()
}

async fn update_product(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> Response {
    state
        .requests
        .lock()
        .await
        .push(Recorded::Put(id.clone(), product.clone()));
    if let Some(resp) = forced(&state).await {
        return resp;
    }
    if decode_data_url(&product.image).is_err() {
        return message(StatusCode::BAD_REQUEST, "Imagem inválida");
    }
    let mut products = state.products.lock().await;
    match products.get_mut(&id) {
        Some(stored) => {
            *stored = product;
            message(StatusCode::OK, UPDATED_MESSAGE)
        }
        None => message(StatusCode::NOT_FOUND, "Produto não encontrado"),
    }
}

async fn delete_product(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
) -> Response {
    state.requests.lock().await.push(Recorded::Delete(id.clone()));
    if let Some(resp) = forced(&state).await {
        return resp;
    }
    match state.products.lock().await.remove(&id) {
        Some(_) => message(StatusCode::OK, "Produto excluído"),
        None => message(StatusCode::NOT_FOUND, "Produto não encontrado"),
    }
}

/// Notifier that keeps everything it is given.
#[derive(Clone, Default)]
pub struct RecordingNotifier(Arc<StdMutex<Vec<Notification>>>);

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.0.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut shown) = self.0.lock() {
            shown.push(notification);
        }
    }
}

/// Answers every confirmation prompt the same way.
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// A valid product for seeding the backend.
pub fn sample_product() -> Product {
    Product {
        name: "Café torrado".into(),
        price: 24.5,
        description: "Café especial em grãos, 250g".into(),
        image: "data:image/png;base64,iVBORw0KGgo=".into(),
        category_id: 1,
    }
}

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
