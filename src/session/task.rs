use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Background task owned by the session. Aborted when dropped.
pub struct SessionTask {
    handle: JoinHandle<()>,
}

impl SessionTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Run `future` once `delay` has elapsed.
    pub fn delayed<F>(delay: Duration, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            future.await;
        })
    }
}

impl Drop for SessionTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
