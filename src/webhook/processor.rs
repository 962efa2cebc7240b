use serde_json::Value;

/// Business logic run on the payload of an authorized webhook.
///
/// Implementations get the raw `data` value, unexamined. Returning an error turns the
/// request into a 500 with a generic message; the detail only reaches the server logs.
pub trait DataProcessor: Send + Sync + 'static {
    fn process(&self, data: &Value) -> Result<(), ProcessError>;
}

/// The default processor. Accepts everything and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProcessor;

impl DataProcessor for NoopProcessor {
    fn process(&self, data: &Value) -> Result<(), ProcessError> {
        tracing::debug!("{:<20} - {data}", "noop processing:");
        Ok(())
    }
}

/// Plain closures can stand in for a processor.
impl<F> DataProcessor for F
where
    F: Fn(&Value) -> Result<(), ProcessError> + Send + Sync + 'static,
{
    fn process(&self, data: &Value) -> Result<(), ProcessError> {
        self(data)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ProcessError(String);

impl ProcessError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<anyhow::Error> for ProcessError {
    fn from(er: anyhow::Error) -> Self {
        Self(format!("{er:#}"))
    }
}
