use alloc::boxed::Box;

use crate::layout::clamp_scroll;
use crate::{
    ActiveSet, Bounds, DataSource, Layout, ReconcileStats, RecyclerOptions, SetupError, Size,
    TemplateId, Vec2, View, ViewFactory, ViewPool, Window,
};

/// A windowing and view-recycling engine.
///
/// The recycler keeps a live view only for the indexes in its active window (the visible range
/// plus `buffer` indexes on each side). When the window moves, views that fall out of it are
/// released to a per-template pool and reused for indexes that come into view.
///
/// It is driven by the host:
/// - [`Self::apply_scroll_offset`] whenever the scroll position changes,
/// - [`Self::invalidate`] whenever the data source changes in a way bound views do not observe.
///
/// All state is owned by the instance; nothing is shared between recyclers.
pub struct Recycler<V, L> {
    options: RecyclerOptions,
    layout: L,
    factory: Box<dyn ViewFactory<V>>,
    source: Option<Box<dyn DataSource<V>>>,
    active: ActiveSet<V>,
    pool: ViewPool<V>,
    viewport: Size,
    scroll_offset: Vec2,
    setup_error: Option<SetupError>,
}

impl<V: View, L: Layout> Recycler<V, L> {
    /// Creates a recycler without a data source.
    ///
    /// Configuration problems (see [`SetupError`]) are logged once and stored; the recycler then
    /// behaves as an empty list until they are fixed.
    pub fn new(
        options: RecyclerOptions,
        layout: L,
        factory: impl ViewFactory<V> + 'static,
    ) -> Self {
        rdebug!(
            buffer = options.buffer,
            has_viewport = options.viewport.is_some(),
            "Recycler::new"
        );
        let mut r = Self {
            viewport: options.viewport.unwrap_or_default(),
            scroll_offset: options.initial_offset,
            options,
            layout,
            factory: Box::new(factory),
            source: None,
            active: ActiveSet::new(),
            pool: ViewPool::new(),
            setup_error: None,
        };
        r.revalidate();
        r.layout.on_invalidate(0, r.viewport);
        r
    }

    fn revalidate(&mut self) {
        let result = self
            .options
            .validate()
            .and_then(|()| self.layout.validate());
        match result {
            Ok(()) => self.setup_error = None,
            Err(err) => {
                if self.setup_error.as_ref() != Some(&err) {
                    rerror!(error = %err, "recycler is misconfigured and will stay empty");
                }
                self.setup_error = Some(err);
            }
        }
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    /// Replaces the options and invalidates.
    ///
    /// The viewport follows `options.viewport`; `None` leaves the recycler unconfigured until
    /// [`Self::set_viewport_size`] is called.
    pub fn set_options(&mut self, options: RecyclerOptions) -> ReconcileStats {
        self.viewport = options.viewport.unwrap_or_default();
        self.options = options;
        self.revalidate();
        self.invalidate()
    }

    pub fn setup_error(&self) -> Option<&SetupError> {
        self.setup_error.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.setup_error.is_none()
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable access to the layout parameters. Call [`Self::invalidate`] afterwards.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn pool(&self) -> &ViewPool<V> {
        &self.pool
    }

    pub fn active(&self) -> &ActiveSet<V> {
        &self.active
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Item count as seen by the engine (0 without a source or when misconfigured).
    pub fn item_count(&self) -> usize {
        if self.setup_error.is_some() {
            return 0;
        }
        self.source.as_ref().map_or(0, |s| s.count())
    }

    pub fn window(&self) -> Window {
        self.active.window()
    }

    /// First active index.
    pub fn start_index(&self) -> usize {
        self.active.window().start
    }

    /// One past the last active index.
    pub fn end_index(&self) -> usize {
        self.active.window().end
    }

    /// Returns the view bound to `index`, or `None` if `index` is not active.
    pub fn view(&self, index: usize) -> Option<&V> {
        self.active.get(index)
    }

    pub fn view_mut(&mut self, index: usize) -> Option<&mut V> {
        self.active.get_mut(index)
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Visits active views in ascending index order.
    pub fn for_each_active(&self, f: impl FnMut(usize, &V)) {
        self.active.for_each(f);
    }

    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// The viewport rectangle in content space.
    pub fn viewport_bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.scroll_offset, self.viewport)
    }

    /// Clamps `offset` to the scrollable range on both axes.
    pub fn clamp_scroll_offset(&self, offset: Vec2) -> Vec2 {
        let content = self.layout.content_size();
        Vec2::new(
            clamp_scroll(offset.x, content.width, self.viewport.width),
            clamp_scroll(offset.y, content.height, self.viewport.height),
        )
    }

    /// The scroll offset that centers `index`, clamped to the scrollable range.
    pub fn centered_offset(&self, index: usize) -> Vec2 {
        self.layout.centered_offset(index, self.viewport)
    }

    /// Sets the data source and rebuilds the window.
    pub fn set_source(&mut self, source: impl DataSource<V> + 'static) -> ReconcileStats {
        self.source = Some(Box::new(source));
        self.invalidate()
    }

    /// Removes the data source. Active views are released to the pool (not destroyed) so a
    /// later [`Self::set_source`] can reuse them.
    pub fn remove_source(&mut self) -> ReconcileStats {
        self.source = None;
        self.invalidate()
    }

    /// Sets the data source and jumps to the offset that centers `index`.
    ///
    /// Returns the new scroll offset so the host can sync its scroll surface.
    pub fn set_source_and_center_on(
        &mut self,
        source: impl DataSource<V> + 'static,
        index: usize,
    ) -> Vec2 {
        self.source = Some(Box::new(source));
        let count = self.item_count();
        if index >= count {
            rwarn!(index, count, "set_source_and_center_on: index out of range");
        }
        self.layout.on_invalidate(count, self.viewport);
        self.scroll_offset = self.centered_offset(index);
        rdebug!(
            index,
            x = self.scroll_offset.x,
            y = self.scroll_offset.y,
            "set_source_and_center_on"
        );
        self.refresh_all();
        self.scroll_offset
    }

    /// Recomputes the content size and rebinds every active index.
    ///
    /// Call this when the source's contents change in a way bound views do not pick up on their
    /// own. Views whose template still matches are rebound in place.
    pub fn invalidate(&mut self) -> ReconcileStats {
        self.layout.on_invalidate(self.item_count(), self.viewport);
        self.refresh_all()
    }

    /// Resizes the viewport and invalidates.
    ///
    /// This also clears a [`SetupError::MissingViewport`] reported at creation.
    pub fn set_viewport_size(&mut self, size: Size) -> ReconcileStats {
        self.viewport = size;
        self.options.viewport = Some(size);
        self.revalidate();
        self.invalidate()
    }

    /// Handles a scroll position change from the host scroll surface.
    ///
    /// Only indexes entering or leaving the window are touched.
    pub fn apply_scroll_offset(&mut self, offset: Vec2) -> ReconcileStats {
        rtrace!(x = offset.x, y = offset.y, "apply_scroll_offset");
        self.scroll_offset = offset;
        self.update_visibility()
    }

    /// Destroys every active and pooled view and removes the data source.
    pub fn clear(&mut self) {
        rdebug!(
            active = self.active.len(),
            pooled = self.pool.len(),
            "Recycler::clear"
        );
        self.source = None;
        self.active.drain(|_, slot| drop(slot));
        self.pool.clear();
    }

    fn default_template(&self) -> TemplateId {
        self.options.default_template.unwrap_or_default()
    }

    fn template_at(&self, index: usize) -> TemplateId {
        self.source
            .as_ref()
            .and_then(|s| s.template_at(index))
            .unwrap_or_else(|| self.default_template())
    }

    /// Target window: raw layout range, widened by `buffer`, clamped to `[0, count)`.
    fn compute_window(&self) -> Window {
        let count = self.item_count();
        if count == 0 {
            return Window::EMPTY;
        }
        let (a, b) = self.layout.visible_raw_range(self.viewport_bounds());
        let buffer = i64::try_from(self.options.buffer).unwrap_or(i64::MAX);
        let count = i64::try_from(count).unwrap_or(i64::MAX);

        let hi = a.max(b).saturating_add(buffer).min(count).max(0);
        let lo = a.min(b).saturating_sub(buffer).max(0).min(hi);
        Window::new(lo as usize, hi as usize)
    }

    /// Scroll path: diff the old window against the new one.
    fn update_visibility(&mut self) -> ReconcileStats {
        let next = self.compute_window();
        let prev = self.active.window();
        let mut stats = ReconcileStats::default();
        if next == prev {
            return stats;
        }

        let diff = Window::diff(prev, next);
        // Deactivate first to bound the number of live views.
        for index in diff.removed_indexes() {
            self.deactivate(index, &mut stats);
        }
        for index in diff.added_indexes() {
            self.activate(index, &mut stats);
        }
        self.active.set_window(next);
        self.commit(&mut stats);
        rtrace!(
            start = next.start,
            end = next.end,
            deactivated = stats.deactivated,
            bound = stats.bound,
            built = stats.built,
            "update_visibility"
        );
        stats
    }

    /// Invalidation path: drop what left the window, (re)bind everything in it.
    fn refresh_all(&mut self) -> ReconcileStats {
        let next = self.compute_window();
        let prev = self.active.window();
        let mut stats = ReconcileStats::default();

        for index in prev.indexes() {
            if !next.contains(index) {
                self.deactivate(index, &mut stats);
            }
        }
        for index in next.indexes() {
            self.activate(index, &mut stats);
        }
        self.active.set_window(next);
        self.commit(&mut stats);
        rdebug!(
            start = next.start,
            end = next.end,
            deactivated = stats.deactivated,
            bound = stats.bound,
            built = stats.built,
            reused = stats.reused,
            "refresh_all"
        );
        stats
    }

    fn activate(&mut self, index: usize, stats: &mut ReconcileStats) {
        let template = self.template_at(index);
        let bounds = self.layout.bounds_for(index);

        if self.active.template_of(index) == Some(template) {
            // Same template: rebind in place.
            if let Some(slot) = self.active.entry_mut(index) {
                slot.view.place(bounds);
            }
        } else {
            if let Some(old) = self.active.remove(index) {
                self.pool.release(old.view, old.template);
                stats.deactivated += 1;
            }
            let mut view = match self.pool.acquire(template) {
                Some(view) => {
                    stats.reused += 1;
                    view
                }
                None => {
                    stats.built += 1;
                    self.factory.build(template)
                }
            };
            view.place(bounds);
            let replaced = self.active.insert(index, view, template);
            debug_assert!(replaced.is_none(), "index {index} was bound twice");
        }

        if let (Some(source), Some(slot)) = (self.source.as_mut(), self.active.entry_mut(index)) {
            source.bind(&mut slot.view, index);
            stats.bound += 1;
        }
    }

    fn deactivate(&mut self, index: usize, stats: &mut ReconcileStats) {
        if let Some(slot) = self.active.remove(index) {
            self.pool.release(slot.view, slot.template);
            stats.deactivated += 1;
        }
    }

    /// Detaches views released since the last commit.
    fn commit(&mut self, stats: &mut ReconcileStats) {
        stats.committed = self.pool.commit(|view| view.detach());
    }
}

impl<V, L: core::fmt::Debug> core::fmt::Debug for Recycler<V, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("options", &self.options)
            .field("layout", &self.layout)
            .field("window", &self.active.window())
            .field("active", &self.active.len())
            .field("pooled", &self.pool.len())
            .field("viewport", &self.viewport)
            .field("scroll_offset", &self.scroll_offset)
            .field("setup_error", &self.setup_error)
            .finish_non_exhaustive()
    }
}
