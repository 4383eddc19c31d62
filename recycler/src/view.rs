use crate::{Bounds, TemplateId};

/// A host UI element managed by the recycler.
///
/// Views are never destroyed by the engine except through `Drop` (see [`crate::Recycler::clear`]).
pub trait View {
    /// Attaches the view to the live layout (if it is not already) and moves it to `bounds`.
    fn place(&mut self, bounds: Bounds);

    /// Detaches a pooled view from the live layout so it stops drawing and receiving input.
    ///
    /// The view stays alive and may be placed again later.
    fn detach(&mut self);
}

/// Builds fresh views when the pool has nothing to offer for a template.
pub trait ViewFactory<V> {
    fn build(&mut self, template: TemplateId) -> V;
}

impl<V, F> ViewFactory<V> for F
where
    F: FnMut(TemplateId) -> V,
{
    fn build(&mut self, template: TemplateId) -> V {
        self(template)
    }
}
