use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{
    application::Application, command::Command, dispatcher::Dispatcher, renderer::Renderer,
};

/// Drives an [`Application`]: owns the current model, the message channel,
/// and the cancellation token, and serializes every transition.
///
/// The loop has three states. *Starting*: `init` runs and the initial view
/// is rendered, synchronously, before any handle to the running loop
/// exists. *Running*: the loop waits for the next message or for
/// cancellation; each message is fully processed (update, command spawn,
/// view, render) before the next is considered. *Stopped*: terminal; the
/// final model is handed to whoever awaits the loop.
///
/// Cancellation is cooperative and observed only while the loop is waiting.
/// Messages already queued when cancellation is observed are dropped, and a
/// message submitted concurrently with cancellation may never be seen at
/// all; producers that need a final answer must get it from the model the
/// stopped loop returns.
pub struct Runtime<A: Application> {
    app: A,
    tx: mpsc::UnboundedSender<A::Message>,
    rx: mpsc::UnboundedReceiver<A::Message>,
    cancel: CancellationToken,
}

impl<A: Application> Runtime<A> {
    pub fn new(app: A) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            app,
            tx,
            rx,
            cancel: CancellationToken::new(),
        }
    }

    /// A dispatcher bound to this runtime's message channel.
    pub fn dispatcher(&self) -> Dispatcher<A::Message> {
        Dispatcher::new(self.tx.clone())
    }

    /// The token that stops this runtime when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the loop on the current task until cancelled.
    ///
    /// Obtain a [`Dispatcher`] and the [`CancellationToken`] before calling
    /// this; the future resolves with the final model once cancellation is
    /// observed. Failures in `init`, `update`, or `view` are not caught.
    pub async fn run<R>(mut self, renderer: &mut R) -> A::Model
    where
        R: Renderer<A::Renderable>,
    {
        let model = self.bootstrap(renderer);
        self.consume(model, renderer).await
    }

    /// Run the loop on its own task, returning a [`Handle`] to it.
    ///
    /// `init` and the initial render happen synchronously, before this
    /// returns: by the time a handle exists, the first view is already on
    /// screen and every dispatcher it captured is live.
    pub fn spawn<R>(mut self, mut renderer: R) -> Handle<A>
    where
        A: Send + 'static,
        A::Model: Send + 'static,
        R: Renderer<A::Renderable> + Send + 'static,
    {
        let model = self.bootstrap(&mut renderer);
        let token = self.cancel.clone();
        let dispatcher = self.dispatcher();
        let join = tokio::spawn(self.consume(model, renderer));

        Handle {
            token,
            dispatcher,
            join,
        }
    }

    fn bootstrap<R>(&mut self, renderer: &mut R) -> A::Model
    where
        R: Renderer<A::Renderable>,
    {
        let model = self.app.init();
        renderer.render(self.app.view(&model, self.dispatcher()));
        trace!("initial render complete");
        model
    }

    async fn consume<R>(mut self, mut model: A::Model, mut renderer: R) -> A::Model
    where
        R: Renderer<A::Renderable>,
    {
        loop {
            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => {
                    // Queued messages are dropped, not drained.
                    debug!("cancellation observed, stopping");
                    break;
                }
                Some(msg) = self.rx.recv() => {
                    let (next, cmd) = self.app.update(msg, model);
                    model = next;
                    self.spawn_command(cmd);
                    renderer.render(self.app.view(&model, self.dispatcher()));
                }
            }
        }

        model
    }

    fn spawn_command(&self, cmd: Command<A::Message>) {
        let Some(mut stream) = cmd.stream else {
            return;
        };

        let tx = self.tx.clone();
        tokio::spawn(async move {
            while let Some(msg) = stream.next().await {
                if tx.send(msg).is_err() {
                    trace!("command output dropped: runtime has stopped");
                    break;
                }
            }
        });
    }
}

/// Control and completion handle for a spawned runtime loop.
///
/// Cancelling stops the loop; awaiting [`stopped`](Handle::stopped) (or
/// [`shutdown`](Handle::shutdown)) resolves exactly once, with the final
/// model, after the loop reaches its terminal state. No render happens
/// after that point.
pub struct Handle<A: Application> {
    token: CancellationToken,
    dispatcher: Dispatcher<A::Message>,
    join: JoinHandle<A::Model>,
}

impl<A: Application> Handle<A> {
    /// A dispatcher bound to the running loop's message channel.
    pub fn dispatcher(&self) -> Dispatcher<A::Message> {
        self.dispatcher.clone()
    }

    /// The token that stops the loop when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Request the loop to stop. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the loop to reach its terminal state.
    ///
    /// A panic raised on the loop task (from `update`, `view`, or a
    /// renderer) is resumed here, so failures stay fail-fast across the
    /// task boundary.
    pub async fn stopped(self) -> A::Model {
        match self.join.await {
            Ok(model) => model,
            Err(err) => match err.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(err) => panic!("runtime task aborted: {err}"),
            },
        }
    }

    /// Cancel the loop and wait for it to stop.
    pub async fn shutdown(self) -> A::Model {
        self.token.cancel();
        self.stopped().await
    }
}
