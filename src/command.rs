use std::future::Future;

use futures::{
    FutureExt, Stream, StreamExt,
    stream::{self, BoxStream, select_all},
};

/// Follow-up work returned from a state transition.
///
/// Commands represent asynchronous operations whose results re-enter the
/// runtime as messages:
/// - Running async tasks (HTTP requests, file I/O, etc.)
/// - Forwarding an external stream of events
/// - Performing computations in the background
///
/// A command is returned from [`Application::update`] and driven by the
/// runtime on its own task; every message it yields is submitted to the
/// message channel, competing with other producers.
///
/// [`Application::update`]: crate::application::Application::update
///
/// # Examples
///
/// ```
/// use steep::command::Command;
///
/// enum Message {
///     GotResult(i32),
/// }
///
/// // Perform an async operation and turn its result into a message.
/// let cmd = Command::perform(async { 42 }, Message::GotResult);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) stream: Option<BoxStream<'static, Msg>>,
}

impl<Msg: Send + 'static> Command<Msg> {
    /// Create a command that does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    ///
    /// let cmd: Command<i32> = Command::none();
    /// ```
    pub fn none() -> Self {
        Self { stream: None }
    }

    /// Submit a single message as soon as the command is driven.
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    ///
    /// let cmd = Command::message(42);
    /// ```
    pub fn message(msg: Msg) -> Self {
        Self {
            stream: Some(stream::once(async move { msg }).boxed()),
        }
    }

    /// Perform an asynchronous operation and convert its result to a message.
    ///
    /// # Arguments
    ///
    /// * `future` - The async operation to perform
    /// * `f` - Function to convert the result into a message
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    ///
    /// async fn fetch_data() -> String {
    ///     "data".to_string()
    /// }
    ///
    /// enum Message {
    ///     DataReceived(String),
    /// }
    ///
    /// let cmd = Command::perform(fetch_data(), Message::DataReceived);
    /// ```
    pub fn perform<A>(
        future: impl Future<Output = A> + Send + 'static,
        f: impl FnOnce(A) -> Msg + Send + 'static,
    ) -> Self {
        Self::future(future.map(f))
    }

    /// Create a command from a future that directly produces a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    ///
    /// let cmd = Command::future(async { 42 });
    /// ```
    pub fn future(future: impl Future<Output = Msg> + Send + 'static) -> Self {
        Self {
            stream: Some(future.into_stream().boxed()),
        }
    }

    /// Batch multiple commands into a single command.
    ///
    /// All commands are driven concurrently, so the order in which their
    /// messages arrive is not guaranteed. `Command::none()` entries are
    /// filtered out.
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    ///
    /// enum Message {
    ///     First(i32),
    ///     Second(String),
    /// }
    ///
    /// let cmd = Command::batch(vec![
    ///     Command::perform(async { 1 }, Message::First),
    ///     Command::perform(async { "data".to_string() }, Message::Second),
    ///     Command::none(), // filtered out
    /// ]);
    /// ```
    pub fn batch(commands: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let streams: Vec<_> = commands.into_iter().filter_map(|cmd| cmd.stream).collect();

        if streams.is_empty() {
            Self::none()
        } else {
            Self {
                stream: Some(select_all(streams).boxed()),
            }
        }
    }

    /// Create a command from a stream of messages.
    ///
    /// Each item the stream yields is submitted to the runtime in turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    /// use futures::stream;
    ///
    /// let messages = stream::iter(vec![1, 2, 3]);
    /// let cmd = Command::stream(messages);
    /// ```
    pub fn stream(stream: impl Stream<Item = Msg> + Send + 'static) -> Self {
        Self {
            stream: Some(stream.boxed()),
        }
    }

    /// Run a stream and convert each item to a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use steep::command::Command;
    /// use futures::stream;
    ///
    /// enum Message {
    ///     NumberReceived(i32),
    /// }
    ///
    /// let numbers = stream::iter(vec![1, 2, 3]);
    /// let cmd = Command::run(numbers, |n| Message::NumberReceived(n * 2));
    /// ```
    pub fn run<A>(
        stream: impl Stream<Item = A> + Send + 'static,
        f: impl Fn(A) -> Msg + Send + 'static,
    ) -> Self {
        Self::stream(stream.map(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(cmd: Command<i32>) -> Vec<i32> {
        match cmd.stream {
            Some(stream) => stream.collect().await,
            None => vec![],
        }
    }

    #[tokio::test]
    async fn test_batch_empty() {
        let cmd: Command<i32> = Command::batch(vec![]);
        assert!(cmd.stream.is_none());
    }

    #[tokio::test]
    async fn test_batch_single_command() {
        let cmd = Command::batch(vec![Command::future(async { 1 })]);
        assert_eq!(collect(cmd).await, vec![1]);
    }

    #[tokio::test]
    async fn test_batch_multiple_commands() {
        let cmd = Command::batch(vec![
            Command::future(async { 1 }),
            Command::future(async { 2 }),
            Command::future(async { 3 }),
        ]);

        // All messages should be received (order may vary due to concurrent execution)
        let mut results = collect(cmd).await;
        results.sort_unstable();
        assert_eq!(results, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_batch_with_none_commands() {
        let cmd = Command::batch(vec![
            Command::future(async { 1 }),
            Command::none(),
            Command::future(async { 3 }),
        ]);

        // Only non-none commands should produce messages
        let mut results = collect(cmd).await;
        results.sort_unstable();
        assert_eq!(results, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_batch_all_none() {
        let cmd = Command::batch(vec![Command::<i32>::none(), Command::<i32>::none()]);
        assert!(cmd.stream.is_none());
    }

    #[tokio::test]
    async fn test_message() {
        let cmd = Command::message(7);
        assert_eq!(collect(cmd).await, vec![7]);
    }

    #[tokio::test]
    async fn test_stream() {
        let cmd = Command::stream(stream::iter(vec![1, 2, 3]));
        assert_eq!(collect(cmd).await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_run() {
        let cmd = Command::run(stream::iter(vec![1, 2, 3]), |x| x * 2);
        assert_eq!(collect(cmd).await, vec![2, 4, 6]);
    }

    #[tokio::test]
    async fn test_run_with_conversion() {
        #[derive(Debug, PartialEq)]
        enum Message {
            Number(i32),
        }

        let cmd = Command::run(stream::iter(vec![1, 2, 3]), |x| Message::Number(x * 10));

        let results: Vec<Message> = match cmd.stream {
            Some(stream) => stream.collect().await,
            None => vec![],
        };

        assert_eq!(
            results,
            vec![
                Message::Number(10),
                Message::Number(20),
                Message::Number(30)
            ]
        );
    }

    #[tokio::test]
    async fn test_run_with_empty_stream() {
        let cmd = Command::run(stream::iter(Vec::<i32>::new()), |x| x * 2);
        assert!(collect(cmd).await.is_empty(), "empty stream should produce no messages");
    }
}
