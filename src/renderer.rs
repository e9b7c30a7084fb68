/// Consumes successive renderable values and displays them.
///
/// The runtime invokes `render` only from the loop's own task, once for the
/// initial view and once after every transition, so implementations need no
/// internal synchronization. A renderer must tolerate being called
/// repeatedly and should not block indefinitely; ownership of each
/// renderable passes to the renderer.
pub trait Renderer<R> {
    /// Display `renderable`.
    fn render(&mut self, renderable: R);
}

impl<R, T: Renderer<R>> Renderer<R> for &mut T {
    fn render(&mut self, renderable: R) {
        (**self).render(renderable);
    }
}
