use crate::constants::CONTROL_PATH;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::time::Duration;
use tracing::debug;

/// Carrier for encoded command URLs. Dispatch is best-effort: the camera
/// never answers with anything the caller needs.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, url: &str) -> Result<()>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(&self, url: &str) -> Result<()> {
        self.client.get(url).timeout(self.timeout).send().await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct Hi3510Cam {
    pub(crate) base_url: String,

    pub(crate) transport: Arc<dyn Transport>,

    // Set by Move, cleared by the first Stop after it
    pub(crate) moving: Arc<AtomicBool>,
}

impl Hi3510Cam {
    pub fn new(ip: impl Into<String>) -> Self {
        let ip = ip.into();

        Self {
            base_url: format!("http://{ip}{CONTROL_PATH}"),
            transport: Arc::new(HttpTransport::new(Duration::from_secs(10))),
            moving: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = Arc::new(HttpTransport::new(timeout));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Issue a command context against the camera. Failures are logged and
    /// swallowed; a lost command and a failed one look the same here.
    pub(crate) async fn call(&self, context: &str) {
        let url = format!("{}{}", self.base_url, context);
        if let Err(err) = self.transport.dispatch(&url).await {
            debug!("camera request failed: {err}");
        }
    }
}
