use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// A capability for submitting messages into a running runtime loop.
///
/// A dispatcher is the only way user-facing code may request a state
/// change. It is bound to one runtime's message channel, is cheap to clone,
/// and may be used from any task or thread; submission never blocks and
/// never reorders messages relative to the submitting context.
///
/// The view projection receives a fresh dispatcher on every render. All
/// dispatchers of one runtime address the same channel, so holding on to an
/// older one is harmless.
pub struct Dispatcher<Msg> {
    tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg> Clone for Dispatcher<Msg> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<Msg> Dispatcher<Msg> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self { tx }
    }

    /// Submit a message for processing.
    ///
    /// Returns as soon as the message is enqueued. While the runtime is
    /// alive this cannot fail; once it has stopped, the message is dropped
    /// and a debug event is logged. Use [`try_dispatch`](Self::try_dispatch)
    /// to observe that case.
    pub fn dispatch(&self, msg: Msg) {
        if self.tx.send(msg).is_err() {
            debug!("message dropped: runtime has stopped");
        }
    }

    /// Submit a message, reporting a stopped runtime as an error.
    ///
    /// The message is dropped on failure.
    pub fn try_dispatch(&self, msg: Msg) -> Result<(), DispatchError> {
        self.tx.send(msg).map_err(|_| DispatchError)
    }

    /// Whether the consuming runtime has stopped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Error returned by [`Dispatcher::try_dispatch`] after the runtime stopped.
#[derive(Debug, Error)]
#[error("message channel closed: the runtime has stopped")]
pub struct DispatchError;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_enqueues_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(1);
        dispatcher.clone().dispatch(2);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test]
    async fn test_try_dispatch_after_consumer_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        assert!(dispatcher.is_closed());
        assert!(dispatcher.try_dispatch(1).is_err());
        // Plain dispatch degrades to a drop, never a panic.
        dispatcher.dispatch(2);
    }
}
