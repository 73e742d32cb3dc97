//! Deferred dashboard redirect on a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use banco_transfer_core::{
    NavigatorPort, PortError, RedirectHandle, RedirectSchedulerPort, Route,
};

pub struct TokioRedirectScheduler<N> {
    handle: tokio::runtime::Handle,
    navigator: Arc<N>,
}

impl<N> TokioRedirectScheduler<N> {
    pub fn new(handle: tokio::runtime::Handle, navigator: Arc<N>) -> Self {
        Self { handle, navigator }
    }
}

impl<N> RedirectSchedulerPort for TokioRedirectScheduler<N>
where
    N: NavigatorPort + Send + Sync + 'static,
{
    fn schedule(&self, route: Route, delay_ms: u64) -> Result<RedirectHandle, PortError> {
        let navigator = Arc::clone(&self.navigator);
        let task = self.handle.spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if let Err(error) = navigator.navigate_to(&route) {
                tracing::warn!(%error, "deferred dashboard redirect failed");
            }
        });
        // Aborting the task before the sleep elapses cancels the redirect.
        Ok(RedirectHandle::new(move || task.abort()))
    }
}
