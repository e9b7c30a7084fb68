//! Test support utilities.

use tokio::sync::mpsc;

use crate::renderer::Renderer;

/// A renderer that records every renderable it is handed.
///
/// The paired receiver yields renders in order, so a test can walk a
/// runtime through its transitions deterministically:
///
/// ```
/// # use steep::testing::RecordingRenderer;
/// # use steep::renderer::Renderer;
/// # #[tokio::main]
/// # async fn main() {
/// let (mut renderer, mut renders) = RecordingRenderer::new();
///
/// renderer.render("Count is: 0".to_string());
/// assert_eq!(renders.recv().await.as_deref(), Some("Count is: 0"));
/// # }
/// ```
///
/// When the renderer is dropped (the runtime loop has stopped), the
/// receiver yields `None`, which makes "no further renders after
/// termination" directly assertable.
pub struct RecordingRenderer<R> {
    tx: mpsc::UnboundedSender<R>,
}

impl<R> RecordingRenderer<R> {
    /// Create a renderer together with the receiving end of its recording.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<R>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl<R> Renderer<R> for RecordingRenderer<R> {
    fn render(&mut self, renderable: R) {
        let _ = self.tx.send(renderable);
    }
}
