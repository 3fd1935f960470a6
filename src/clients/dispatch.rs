use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

use crate::transport::{Channel, Status};
use crate::wire::MarshalError;

/// Internal tag for why a remote call produced no result.
///
/// Public client methods never expose this type; they narrow it to their
/// declared `Option` / `bool` shape once it has been logged. Keeping the tag
/// around internally is what makes the failure path testable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum CallError {
    #[error("transport failure: {0}")]
    Transport(#[from] Status),
    #[error("marshaling failure: {0}")]
    Marshal(#[from] MarshalError),
}

/// Runs one remote call end to end: ensure-connected, marshal, invoke,
/// unmarshal.
///
/// Every operation of every client goes through here, so the
/// connect/try/translate skeleton exists exactly once. Failures of any kind
/// are logged with the operation name and returned as [`CallError`] for the
/// caller to narrow; successes are logged at debug level.
pub(crate) async fn dispatch<S, Req, Resp, Out, Marshal, Invoke, Fut, Unmarshal>(
    channel: &Channel<S>,
    operation: &'static str,
    marshal: Marshal,
    invoke: Invoke,
    unmarshal: Unmarshal,
) -> Result<Out, CallError>
where
    S: ?Sized + Send + Sync,
    Marshal: FnOnce() -> Result<Req, MarshalError>,
    Invoke: FnOnce(Arc<S>, Req) -> Fut,
    Fut: Future<Output = Result<Resp, Status>>,
    Unmarshal: FnOnce(Resp) -> Out,
{
    let outcome: Result<Out, CallError> = async {
        let stub = channel.ensure_connected().await?;
        let request = marshal()?;
        debug!("Sending request");
        let response = invoke(stub, request).await?;
        Ok(unmarshal(response))
    }
    .await;

    match &outcome {
        Ok(_) => debug!(operation, "Remote call succeeded"),
        Err(error) => error!(operation, %error, "Remote call failed"),
    }
    outcome
}
