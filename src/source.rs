//! Long-lived message producers.
//!
//! A [`Source`] is a stream of values that should keep feeding a running
//! loop: timer ticks, external events, test drivers. [`spawn`] drives one on
//! its own task, mapping each value into an application message and
//! submitting it through a [`Dispatcher`]; the returned [`SourceHandle`]
//! stops it again.
//!
//! Sources are started and stopped by the hosting program. The runtime loop
//! itself knows nothing about them; from its point of view they are just
//! more producers on the message channel.

pub mod mock;
pub mod time;

use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::dispatcher::Dispatcher;

/// Handle for a running source task.
pub struct SourceHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl SourceHandle {
    pub fn new(token: CancellationToken, join: JoinHandle<()>) -> Self {
        Self { token, join }
    }

    /// Cancel the source and wait for task completion.
    pub async fn cancel(self) {
        self.token.cancel();
        let _ = self.join.await;
    }
}

/// A long-lived producer of values that become application messages.
pub trait Source: Send {
    /// The values this source emits.
    type Output: Send + 'static;

    /// Turn the source into its stream of values.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Start `source` on its own task, mapping each value into a message for
/// `dispatcher`.
///
/// The task stops when the handle is cancelled or the source's stream ends.
pub fn spawn<S, Msg>(
    source: S,
    dispatcher: Dispatcher<Msg>,
    map: impl Fn(S::Output) -> Msg + Send + 'static,
) -> SourceHandle
where
    S: Source,
    Msg: Send + 'static,
{
    let token = CancellationToken::new();
    let child = token.clone();
    let mut stream = source.stream();

    let join = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = child.cancelled() => break,
                item = stream.next() => match item {
                    Some(value) => dispatcher.dispatch(map(value)),
                    None => break,
                },
            }
        }
    });

    SourceHandle::new(token, join)
}
