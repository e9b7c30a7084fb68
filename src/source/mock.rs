//! Mock source for testing.
//!
//! [`MockSource`] is a controllable source that emits values on demand,
//! enabling deterministic tests without real I/O or time dependencies.
//! Clone it: one copy goes to [`source::spawn`](super::spawn), the others
//! stay in the test to [`emit`](MockSource::emit) values.
//!
//! ```
//! use steep::source::mock::MockSource;
//!
//! let mock = MockSource::<i32>::new();
//! let driver = mock.clone();
//!
//! // Hand `mock` to source::spawn; emit from the test side. Values emitted
//! // before the source is started are buffered.
//! driver.emit(42)?;
//! # Ok::<(), steep::source::mock::EmitError>(())
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use futures::StreamExt;
use futures::stream::BoxStream;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::Source;

/// A controllable source that emits values on demand.
pub struct MockSource<T> {
    tx: mpsc::UnboundedSender<T>,
    rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<T>>>>,
}

impl<T> Clone for MockSource<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T: Send + 'static> MockSource<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            tx,
            rx: Arc::new(Mutex::new(Some(rx))),
        }
    }

    /// Emit a value into the stream.
    ///
    /// Values emitted before the source is started are buffered and
    /// delivered once it is.
    pub fn emit(&self, value: T) -> Result<(), EmitError> {
        self.tx.send(value).map_err(|_| EmitError)
    }
}

impl<T: Send + 'static> Default for MockSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Source for MockSource<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the same mock (or one of its clones) is started twice; a
    /// mock carries a single stream.
    fn stream(self) -> BoxStream<'static, T> {
        let rx = self
            .rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match rx {
            Some(rx) => UnboundedReceiverStream::new(rx).boxed(),
            None => panic!("mock source started twice"),
        }
    }
}

/// Error returned by [`MockSource::emit`] once the stream side is gone.
#[derive(Debug, Error)]
#[error("mock source stream has been dropped")]
pub struct EmitError;
