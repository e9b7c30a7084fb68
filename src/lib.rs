//! # Steep - A minimal Model-Update-View runtime
//!
//! Steep is a small engine for applications written in the [Elm Architecture]
//! style: all state lives in a single **model**, every change to it is
//! described by a **message**, and a **view** projection of the model is
//! re-rendered after every transition. The runtime serializes transitions
//! through one message channel, so an application never has to reason about
//! two updates racing each other.
//!
//! ## Architecture
//!
//! 1. **Model**: your application state, owned by the runtime loop
//! 2. **Message**: an intent to change the state, submitted through a [`Dispatcher`](dispatcher::Dispatcher)
//! 3. **Update**: a pure transition from `(Message, Model)` to the next model
//! 4. **View**: a pure projection of the model into a renderable value
//! 5. **Renderer**: whatever displays the renderable; the runtime only needs
//!    its single `render` operation
//! 6. **Commands**: follow-up work returned from a transition whose output
//!    re-enters the message channel
//!
//! The loop itself is simple: `init`, render, then wait for either the next
//! message or cancellation. On a message it applies `update`, adopts the
//! returned model, renders the new view, and goes back to waiting. On
//! cancellation it stops, handing the final model back to whoever is waiting
//! on the [`Handle`](runtime::Handle).
//!
//! ## Core Components
//!
//! - [`Application`](application::Application): the Init/Update/View triple your program supplies
//! - [`Runtime`](runtime::Runtime): owns the model and drives the loop
//! - [`Dispatcher`](dispatcher::Dispatcher): the only way to request a state change
//! - [`Renderer`](renderer::Renderer): the display seam
//! - [`Command`](command::Command): asynchronous follow-up work
//! - [`Source`](source::Source): long-lived producers of messages (timers, test drivers)
//!
//! ## Example
//!
//! ```rust
//! use steep::prelude::*;
//! use steep::testing::RecordingRenderer;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Increment,
//!     Decrement,
//! }
//!
//! #[derive(Debug, Clone, Default)]
//! struct Model {
//!     count: i64,
//! }
//!
//! struct Counter;
//!
//! impl Application for Counter {
//!     type Model = Model;
//!     type Message = Message;
//!     type Renderable = String;
//!
//!     fn init(&self) -> Model {
//!         Model::default()
//!     }
//!
//!     fn update(&self, msg: Message, model: Model) -> (Model, Command<Message>) {
//!         let count = match msg {
//!             Message::Increment => model.count + 1,
//!             Message::Decrement => model.count - 1,
//!         };
//!         (Model { count }, Command::none())
//!     }
//!
//!     fn view(&self, model: &Model, _dispatcher: Dispatcher<Message>) -> String {
//!         format!("Count is: {}", model.count)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (renderer, mut renders) = RecordingRenderer::new();
//!     let handle = Runtime::new(Counter).spawn(renderer);
//!
//!     assert_eq!(renders.recv().await.as_deref(), Some("Count is: 0"));
//!
//!     handle.dispatcher().dispatch(Message::Increment);
//!     assert_eq!(renders.recv().await.as_deref(), Some("Count is: 1"));
//!
//!     handle.shutdown().await;
//! }
//! ```
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod application;
pub mod command;
pub mod dispatcher;
pub mod prelude;
pub mod renderer;
pub mod runtime;
pub mod source;
pub mod testing;
