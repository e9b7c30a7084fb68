//! Prelude module for convenient imports.
//!
//! ```
//! use steep::prelude::*;
//! ```
//!
//! # What's included
//!
//! - [`Application`] - The main application trait
//! - [`Command`] - For performing side effects
//! - [`Dispatcher`] - For submitting messages into the runtime
//! - [`Renderer`] - The display seam
//! - [`Runtime`] and [`Handle`] - The loop and its control handle
//! - [`Source`] and [`SourceHandle`] - Long-lived message producers

pub use crate::application::Application;
pub use crate::command::Command;
pub use crate::dispatcher::{DispatchError, Dispatcher};
pub use crate::renderer::Renderer;
pub use crate::runtime::{Handle, Runtime};
pub use crate::source::{Source, SourceHandle};
