use crate::key::IndexMap;
use crate::{TemplateId, Window};

#[derive(Clone, Debug)]
pub(crate) struct ActiveView<V> {
    pub(crate) view: V,
    pub(crate) template: TemplateId,
}

/// Tracks which view backs each index of the active window.
#[derive(Clone, Debug)]
pub struct ActiveSet<V> {
    views: IndexMap<ActiveView<V>>,
    window: Window,
}

impl<V> Default for ActiveSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ActiveSet<V> {
    pub fn new() -> Self {
        Self {
            views: IndexMap::new(),
            window: Window::EMPTY,
        }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub(crate) fn set_window(&mut self, window: Window) {
        self.window = window;
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.views.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.views.get(&index).map(|a| &a.view)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.views.get_mut(&index).map(|a| &mut a.view)
    }

    pub fn template_of(&self, index: usize) -> Option<TemplateId> {
        self.views.get(&index).map(|a| a.template)
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut ActiveView<V>> {
        self.views.get_mut(&index)
    }

    /// Stores `view` for `index`, returning the view it replaces (if any).
    pub(crate) fn insert(&mut self, index: usize, view: V, template: TemplateId) -> Option<V> {
        self.views
            .insert(index, ActiveView { view, template })
            .map(|old| old.view)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<ActiveView<V>> {
        self.views.remove(&index)
    }

    /// Removes every entry and resets the window, handing the views to `f`.
    pub(crate) fn drain(&mut self, mut f: impl FnMut(usize, ActiveView<V>)) {
        for (index, slot) in core::mem::take(&mut self.views) {
            f(index, slot);
        }
        self.window = Window::EMPTY;
    }

    /// Visits active views in ascending index order.
    pub fn for_each(&self, mut f: impl FnMut(usize, &V)) {
        for i in self.window.indexes() {
            if let Some(a) = self.views.get(&i) {
                f(i, &a.view);
            }
        }
    }
}
