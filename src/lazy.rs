//! Lazily loaded views
//!
//! A view is produced by an async factory on first activation. Successful
//! loads are cached for the life of the app; failures are handed to every
//! caller waiting on that attempt and the next `load` starts over.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::shared::errors::ViewLoadError;
use crate::shared::logging::{log_view_load_error, log_view_load_start, log_view_load_success};

type Factory<V> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<V, ViewLoadError>>>;
type PendingLoad<V> = Shared<LocalBoxFuture<'static, Result<V, ViewLoadError>>>;

pub struct LazyView<V: Clone + 'static> {
    label: String,
    factory: Factory<V>,
    slot: RefCell<Option<PendingLoad<V>>>,
    load_count: Cell<usize>,
}

impl<V: Clone + 'static> LazyView<V> {
    pub fn new<F, Fut>(label: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<V, ViewLoadError>> + 'static,
    {
        Self {
            label: label.into(),
            factory: Rc::new(move || factory().boxed_local()),
            slot: RefCell::new(None),
            load_count: Cell::new(0),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .and_then(|pending| pending.peek())
            .is_some_and(|result| result.is_ok())
    }

    /// Number of times the factory has been invoked
    pub fn load_count(&self) -> usize {
        self.load_count.get()
    }

    pub async fn load(&self) -> Result<V, ViewLoadError> {
        let pending = {
            let mut slot = self.slot.borrow_mut();
            match slot.as_ref() {
                Some(pending) => pending.clone(),
                None => {
                    log_view_load_start(&self.label);
                    self.load_count.set(self.load_count.get() + 1);
                    let pending = (self.factory)().shared();
                    *slot = Some(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;
        match &result {
            Ok(_) => log_view_load_success(&self.label, self.load_count.get()),
            Err(e) => {
                log_view_load_error(&self.label, &e.to_string());
                let mut slot = self.slot.borrow_mut();
                // A newer attempt may already be in the slot
                if slot.as_ref().is_some_and(|current| current.ptr_eq(&pending)) {
                    *slot = None;
                }
            }
        }
        result
    }
}

impl<V: Clone + 'static> std::fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("label", &self.label)
            .field("loaded", &self.is_loaded())
            .field("load_count", &self.load_count.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use std::collections::VecDeque;

    #[tokio::test]
    async fn test_loads_once_and_caches() {
        let view = LazyView::new("Chat", || async { Ok::<_, ViewLoadError>("chat") });
        assert!(!view.is_loaded());

        assert_eq!(view.load().await.unwrap(), "chat");
        assert_eq!(view.load().await.unwrap(), "chat");
        assert!(view.is_loaded());
        assert_eq!(view.load_count(), 1);
    }

    #[tokio::test]
    async fn test_factory_not_called_before_first_load() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _view = LazyView::new("Chat", move || {
            counter.set(counter.get() + 1);
            async { Ok::<_, ViewLoadError>(1) }
        });
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let attempts = Rc::new(Cell::new(0));
        let counter = attempts.clone();
        let view = LazyView::new("Chat", move || {
            counter.set(counter.get() + 1);
            let attempt = counter.get();
            async move {
                if attempt == 1 {
                    Err(ViewLoadError::new("Chat", "network down"))
                } else {
                    Ok(attempt)
                }
            }
        });

        let err = view.load().await.unwrap_err();
        assert_eq!(err.reason, "network down");
        assert!(!view.is_loaded());

        assert_eq!(view.load().await.unwrap(), 2);
        assert_eq!(view.load_count(), 2);
    }

    /// Each factory call waits on the next gate; no gate left is an error
    fn gated_view(gates: Vec<oneshot::Receiver<u32>>) -> LazyView<u32> {
        let gates = RefCell::new(VecDeque::from(gates));
        LazyView::new("Chat", move || {
            let gate = gates.borrow_mut().pop_front();
            async move {
                match gate {
                    Some(gate) => gate
                        .await
                        .map_err(|_| ViewLoadError::new("Chat", "cancelled")),
                    None => Err(ViewLoadError::new("Chat", "no gate left")),
                }
            }
        })
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_attempt() {
        let (tx, rx) = oneshot::channel::<u32>();
        let view = gated_view(vec![rx]);

        let mut first = Box::pin(view.load());
        let mut second = Box::pin(view.load());
        assert!(first.as_mut().now_or_never().is_none());
        assert!(second.as_mut().now_or_never().is_none());

        // Both callers are parked on the same attempt
        assert_eq!(view.load_count(), 1);
        assert!(!view.is_loaded());

        tx.send(7).unwrap();
        assert_eq!(first.await.unwrap(), 7);
        assert_eq!(second.await.unwrap(), 7);
        assert_eq!(view.load_count(), 1);
        assert!(view.is_loaded());
    }

    #[tokio::test]
    async fn test_abandoned_attempt_fails_all_waiters_then_retries() {
        let (dropped_tx, dropped_rx) = oneshot::channel::<u32>();
        let (retry_tx, retry_rx) = oneshot::channel::<u32>();
        let view = gated_view(vec![dropped_rx, retry_rx]);

        let mut first = Box::pin(view.load());
        let mut second = Box::pin(view.load());
        assert!(first.as_mut().now_or_never().is_none());
        assert!(second.as_mut().now_or_never().is_none());
        assert_eq!(view.load_count(), 1);

        drop(dropped_tx);
        assert_eq!(first.await.unwrap_err().reason, "cancelled");
        assert_eq!(second.await.unwrap_err().reason, "cancelled");
        assert!(!view.is_loaded());
        assert_eq!(view.load_count(), 1);

        retry_tx.send(9).unwrap();
        assert_eq!(view.load().await.unwrap(), 9);
        assert_eq!(view.load_count(), 2);
        assert!(view.is_loaded());
    }
}
