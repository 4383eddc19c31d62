use alloc::vec::Vec;

use crate::TemplateId;

#[derive(Clone, Debug)]
struct PoolEntry<V> {
    view: V,
    template: TemplateId,
}

/// Inactive views waiting to be reused.
///
/// Released views are first kept attached ("pending") and only detached by [`Self::commit`].
/// A view released and re-acquired within the same reconciliation therefore never pays the
/// detach cost.
#[derive(Clone, Debug)]
pub struct ViewPool<V> {
    entries: Vec<PoolEntry<V>>,
    // entries[..committed] are detached, entries[committed..] are still attached
    committed: usize,
}

impl<V> Default for ViewPool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ViewPool<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            committed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pooled views already detached from the live layout.
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Number of pooled views released since the last commit.
    pub fn pending(&self) -> usize {
        self.entries.len() - self.committed
    }

    /// Takes the most recently released view built from `template`.
    ///
    /// Returns `None` when the caller has to build a new view. Entries with other templates are
    /// skipped, never consumed.
    pub fn acquire(&mut self, template: TemplateId) -> Option<V> {
        let i = self.entries.iter().rposition(|e| e.template == template)?;
        if i < self.committed {
            self.committed -= 1;
        }
        Some(self.entries.remove(i).view)
    }

    pub fn release(&mut self, view: V, template: TemplateId) {
        self.entries.push(PoolEntry { view, template });
    }

    /// Detaches every pending view and moves the commit marker to the end.
    ///
    /// Returns the number of views detached.
    pub fn commit(&mut self, mut detach: impl FnMut(&mut V)) -> usize {
        let pending = self.pending();
        for entry in &mut self.entries[self.committed..] {
            detach(&mut entry.view);
        }
        self.committed = self.entries.len();
        pending
    }

    /// Drops every pooled view.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.committed = 0;
    }

    /// Counts pooled views built from `template`.
    pub fn count_of(&self, template: TemplateId) -> usize {
        self.entries.iter().filter(|e| e.template == template).count()
    }

    pub fn for_each(&self, mut f: impl FnMut(&V, TemplateId)) {
        for e in &self.entries {
            f(&e.view, e.template);
        }
    }
}
