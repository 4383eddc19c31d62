use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::TemplateId;

/// Supplies item content to a [`crate::Recycler`].
///
/// `count` is queried on every window recomputation, so it should be O(1).
pub trait DataSource<V> {
    fn count(&self) -> usize;

    /// Writes the content of item `index` into `view`.
    ///
    /// Called exactly once per activation, after the view has been placed.
    fn bind(&mut self, view: &mut V, index: usize);

    /// Picks the template for `index`. `None` selects the recycler's default template.
    fn template_at(&self, _index: usize) -> Option<TemplateId> {
        None
    }
}

/// A view that can display a `T`.
pub trait ViewFor<T> {
    fn set(&mut self, value: &T);
}

/// A data source backed by a `Vec<T>`.
pub struct SliceSource<T, V> {
    items: Vec<T>,
    template: Option<TemplateId>,
    _view: PhantomData<fn(&mut V)>,
}

impl<T, V> SliceSource<T, V> {
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Self {
            items: items.into(),
            template: None,
            _view: PhantomData,
        }
    }

    /// Uses `template` for every item instead of the recycler's default.
    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = Some(template);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, V: ViewFor<T>> DataSource<V> for SliceSource<T, V> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn bind(&mut self, view: &mut V, index: usize) {
        if let Some(item) = self.items.get(index) {
            view.set(item);
        }
    }

    fn template_at(&self, _index: usize) -> Option<TemplateId> {
        self.template
    }
}

impl<T: core::fmt::Debug, V> core::fmt::Debug for SliceSource<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliceSource")
            .field("items", &self.items)
            .field("template", &self.template)
            .finish()
    }
}
