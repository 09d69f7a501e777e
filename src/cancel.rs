use std::future::Future;

use tokio::sync::watch;

use crate::error::{ClientError, ClientResult};

/// Lifetime of one screen. Requests run through it resolve to
/// `ClientError::Cancelled` once the screen is closed or dropped.
#[derive(Debug)]
pub struct ViewScope {
    tx: watch::Sender<bool>,
}

/// A cloneable handle for work that outlives the borrow of its screen.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    rx: watch::Receiver<bool>,
}

impl ViewScope {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            rx: self.tx.subscribe(),
        }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    pub async fn run<T, F>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        self.handle().run(fut).await
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.tx.send_replace(true);
    }
}

impl ScopeHandle {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    pub async fn run<T, F>(mut self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        if self.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        tokio::select! {
            result = fut => result,
            _ = self.rx.wait_for(|cancelled| *cancelled) => Err(ClientError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn completed_work_passes_through() {
        let scope = ViewScope::new();
        let value = scope.run(async { Ok::<_, ClientError>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn cancelled_scope_short_circuits() {
        let scope = ViewScope::new();
        scope.cancel();
        let result = scope.run(async { Ok::<_, ClientError>(()) }).await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }

    #[tokio::test]
    async fn dropping_the_scope_cancels_pending_work() {
        let scope = ViewScope::new();
        let handle = scope.handle();
        let pending = tokio::spawn(handle.run(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, ClientError>(())
        }));
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(scope);

        let result = pending.await.unwrap();
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }
}
