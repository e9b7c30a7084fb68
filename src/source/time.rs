//! Timer source for periodic events.

use std::time::Duration;

use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::time::{MissedTickBehavior, interval};
use tokio_stream::wrappers::IntervalStream;

use super::Source;

/// Messages produced by the [`Timer`] source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A timer tick has occurred.
    Tick,
}

/// Emits [`Message::Tick`] at a fixed interval.
///
/// Built on `tokio::time::interval` with `MissedTickBehavior::Skip`, so a
/// loop that falls behind sees a steady tick rate instead of a burst of
/// catch-up ticks. The first tick fires immediately on start.
///
/// # Example
///
/// ```no_run
/// use steep::source::{self, time::Timer};
/// # use steep::dispatcher::Dispatcher;
///
/// enum AppMessage {
///     Tick,
/// }
///
/// # fn wire(dispatcher: Dispatcher<AppMessage>) {
/// // One tick per second.
/// let handle = source::spawn(Timer::new(1000), dispatcher, |_| AppMessage::Tick);
/// # drop(handle);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    interval_ms: u64,
}

impl Timer {
    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms }
    }
}

impl Source for Timer {
    type Output = Message;

    fn stream(self) -> BoxStream<'static, Message> {
        let mut interval = interval(Duration::from_millis(self.interval_ms));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        IntervalStream::new(interval).map(|_| Message::Tick).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_timer_ticks_repeatedly() {
        let mut stream = Timer::new(5).stream();

        for _ in 0..3 {
            let tick = timeout(Duration::from_secs(1), stream.next())
                .await
                .expect("timer should tick");
            assert_eq!(tick, Some(Message::Tick));
        }
    }
}
