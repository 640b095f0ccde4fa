use cucumber::World;
use lambdaql_core::InvocationResponse;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Something that can run one function invocation from a raw payload.
#[async_trait::async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, payload: Value) -> Result<InvocationResponse, String>;
}

struct DebugInvoker(Arc<dyn Invoker>);
impl fmt::Debug for DebugInvoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoker")
    }
}

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct CertWorld {
    invoker_inner: Option<DebugInvoker>,

    pub responses: Vec<InvocationResponse>,
    pub last_error: Option<String>,
}

impl CertWorld {
    pub fn new() -> Self {
        Self {
            invoker_inner: None,
            responses: Vec::new(),
            last_error: None,
        }
    }

    /// Set the function under certification for this world.
    pub fn set_invoker(&mut self, invoker: Arc<dyn Invoker>) {
        self.invoker_inner = Some(DebugInvoker(invoker));
    }

    pub fn has_invoker(&self) -> bool {
        self.invoker_inner.is_some()
    }

    pub fn invoker(&self) -> Arc<dyn Invoker> {
        Arc::clone(&self.invoker_inner.as_ref().expect("invoker not initialized").0)
    }

    pub fn last_response(&self) -> &InvocationResponse {
        self.responses.last().expect("no response")
    }

    pub fn last_body(&self) -> Value {
        serde_json::from_str(&self.last_response().body).expect("body is not JSON")
    }
}

impl Default for CertWorld {
    fn default() -> Self {
        Self::new()
    }
}
