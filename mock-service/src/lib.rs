use axum::{
    body::Bytes,
    debug_handler,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::post,
    Json, Router,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
#[allow(unused)]
use metrics::{counter, gauge, histogram};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::{
    num::NonZeroU32,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, PoisonError, RwLock,
    },
    time::Duration,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Behavior knobs for the mock service.
#[derive(Clone, Debug)]
pub struct MockConfig {
    /// Added latency for `/bigfoorequest`.
    pub delay: Duration,
    /// Added latency for `/foo`.
    pub foo_delay: Duration,
    /// Requests to `/bigfoorequest` above this rate are answered with a 500.
    pub max_tps: Option<NonZeroU32>,
    /// Keep every `/bigfoorequest` in the [`Recorder`]. Off by default since bodies are retained
    /// for the lifetime of the service.
    pub record: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            foo_delay: Duration::from_millis(300),
            max_tps: None,
            record: false,
        }
    }
}

impl MockConfig {
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn foo_delay(mut self, delay: Duration) -> Self {
        self.foo_delay = delay;
        self
    }

    pub fn max_tps(mut self, max_tps: NonZeroU32) -> Self {
        self.max_tps = Some(max_tps);
        self
    }

    pub fn record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }
}

/// A request as received by `/bigfoorequest`.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Shared log of every request received, in arrival order.
#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl Recorder {
    fn record(&self, request: RecordedRequest) {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone)]
struct AppState {
    recorder: Recorder,
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
    record: bool,
    delay: Duration,
    foo_delay: Duration,
}

pub fn router(config: &MockConfig) -> (Router, Recorder) {
    let recorder = Recorder::default();
    let state = AppState {
        recorder: recorder.clone(),
        limiter: config.max_tps.map(|tps| Arc::new(rate_limiter(tps))),
        record: config.record,
        delay: config.delay,
        foo_delay: config.foo_delay,
    };

    let app = Router::new()
        .route("/bigfoorequest", post(bigfoo_request))
        .route("/foo", post(foo))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    (app, recorder)
}

/// Serve in the foreground until the listener fails.
pub async fn run(addr: SocketAddr, config: MockConfig) -> anyhow::Result<()> {
    let (app, _recorder) = router(&config);
    let listener = TcpListener::bind(&addr).await?;
    info!("Mock service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind `addr` and serve in the background. Returns the bound address, which differs from `addr`
/// when port 0 is requested. Recording is always on so the returned [`Recorder`] sees every
/// request.
pub async fn spawn(addr: SocketAddr, config: MockConfig) -> anyhow::Result<(SocketAddr, Recorder)> {
    let (app, recorder) = router(&config.record(true));
    let listener = TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            error!("Mock service stopped: {err}");
        }
    });

    debug!("Mock service spawned on {local_addr}");
    Ok((local_addr, recorder))
}

#[debug_handler]
async fn bigfoo_request(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    counter!("mock-server.bigfoorequest").increment(1);
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);

    let received = body.len();
    if state.record {
        state.recorder.record(RecordedRequest {
            method,
            path: uri.path().to_string(),
            headers,
            body,
        });
    }

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    if let Some(limiter) = &state.limiter {
        if limiter.check().is_err() {
            debug!("MOCK SERVER ___ LIMITED");
            counter!("mock-server.bigfoorequest.limited").increment(1);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    Ok(Json(json!({ "received": received })))
}

#[derive(Deserialize)]
struct Person {
    name: String,
}

#[debug_handler]
async fn foo(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, StatusCode> {
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);

    let person: Person =
        serde_json::from_slice(&body).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    tokio::time::sleep(state.foo_delay).await;

    Ok(Json(json!({ "message": format!("Hello {}", person.name) })))
}

/** Utils **/

pub fn rate_limiter(max_tps: NonZeroU32) -> DefaultDirectRateLimiter {
    RateLimiter::direct(Quota::per_second(max_tps))
}

/** TPS Printer **/

static TPS_MEASURE: AtomicU64 = AtomicU64::new(0);

pub async fn tps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let transactions = TPS_MEASURE.swap(0, Ordering::Relaxed);
        info!("{transactions} TPS");
    }
}
