use crate::{command::Command, dispatcher::Dispatcher};

/// The capability triple a program supplies to the runtime: produce an
/// initial model, compute the next model from a message, and project a
/// model into something a renderer can display.
///
/// The runtime owns the model for the whole life of the loop. `update` and
/// `view` are always called from the loop's own task, one at a time, so an
/// implementation never observes two transitions in flight.
///
/// # Type Parameters
///
/// * `Model` - The application state. Moved through the loop by value.
/// * `Message` - Intents to change the state. Must be `Send + 'static`
///   because producers dispatch them from arbitrary tasks.
/// * `Renderable` - The projection handed to the renderer on every cycle.
///
/// # Example
///
/// ```
/// use steep::{application::Application, command::Command, dispatcher::Dispatcher};
///
/// #[derive(Debug, Clone)]
/// enum Message {
///     Increment,
///     Decrement,
/// }
///
/// #[derive(Debug, Clone, Default)]
/// struct Model {
///     count: i64,
/// }
///
/// struct Counter;
///
/// impl Application for Counter {
///     type Model = Model;
///     type Message = Message;
///     type Renderable = String;
///
///     fn init(&self) -> Model {
///         Model::default()
///     }
///
///     fn update(&self, msg: Message, model: Model) -> (Model, Command<Message>) {
///         let count = match msg {
///             Message::Increment => model.count + 1,
///             Message::Decrement => model.count - 1,
///         };
///         (Model { count }, Command::none())
///     }
///
///     fn view(&self, model: &Model, _dispatcher: Dispatcher<Message>) -> String {
///         format!("Count is: {}", model.count)
///     }
/// }
/// ```
pub trait Application {
    /// The application state, owned by the runtime loop.
    type Model;

    /// The type of messages this application processes.
    type Message: Send + 'static;

    /// The projection of the model handed to the renderer.
    type Renderable;

    /// Produce the initial model.
    ///
    /// Called exactly once, synchronously, before the first render.
    fn init(&self) -> Self::Model;

    /// Compute the next model from a message and the current model.
    ///
    /// Called exactly once per consumed message, on the loop's task, never
    /// concurrently with another `update` or with `view`. The returned model
    /// is adopted unconditionally as the new current state; the returned
    /// [`Command`] is driven on its own task and feeds any messages it
    /// produces back into the loop.
    ///
    /// This must be a pure function of its two arguments. Message enums are
    /// matched exhaustively; a variant that is invalid for the current state
    /// is a programmer error and should panic rather than be silently
    /// ignored:
    ///
    /// ```
    /// # use steep::{application::Application, command::Command, dispatcher::Dispatcher};
    /// # #[derive(Debug, Clone)]
    /// # enum Message { Loaded(String), Retry }
    /// # struct Loader;
    /// # impl Application for Loader {
    /// #     type Model = Option<String>;
    /// #     type Message = Message;
    /// #     type Renderable = String;
    /// #     fn init(&self) -> Option<String> { None }
    /// fn update(&self, msg: Message, model: Option<String>) -> (Option<String>, Command<Message>) {
    ///     match msg {
    ///         Message::Loaded(data) => (Some(data), Command::none()),
    ///         Message::Retry => panic!("retry requested before anything was loaded"),
    ///     }
    /// }
    /// #     fn view(&self, model: &Option<String>, _d: Dispatcher<Message>) -> String {
    /// #         format!("{model:?}")
    /// #     }
    /// # }
    /// ```
    fn update(
        &self,
        msg: Self::Message,
        model: Self::Model,
    ) -> (Self::Model, Command<Self::Message>);

    /// Project the model into a renderable value.
    ///
    /// Called exactly once after `init` and exactly once after every
    /// `update`, on the loop's task. The dispatcher is freshly minted for
    /// each render so closures captured by the view always reference the
    /// live channel; all dispatchers of one runtime are interchangeable.
    ///
    /// This should be a pure projection: two calls with the same model must
    /// produce equal renderables.
    fn view(&self, model: &Self::Model, dispatcher: Dispatcher<Self::Message>) -> Self::Renderable;
}
