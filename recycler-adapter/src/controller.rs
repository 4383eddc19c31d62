use recycler::{Layout, ReconcileStats, Recycler, RecyclerOptions, Size, Vec2, View, ViewFactory};

use crate::{Easing, Tween};

/// A frame-driven wrapper around [`Recycler`].
///
/// Scroll events can arrive many times per frame; the controller only remembers the latest one
/// and reconciles once per [`Controller::tick`]. It also drives tweened "scroll to index"
/// animations. Adapters call:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` once per frame
///
/// The offset returned by `tick()` should be written back to the real scroll surface.
pub struct Controller<V, L> {
    r: Recycler<V, L>,
    tween: Option<Tween>,
    pending: Option<Vec2>,
}

impl<V: View, L: Layout> Controller<V, L> {
    pub fn new(
        options: RecyclerOptions,
        layout: L,
        factory: impl ViewFactory<V> + 'static,
    ) -> Self {
        Self::from_recycler(Recycler::new(options, layout, factory))
    }

    pub fn from_recycler(r: Recycler<V, L>) -> Self {
        Self {
            r,
            tween: None,
            pending: None,
        }
    }

    pub fn recycler(&self) -> &Recycler<V, L> {
        &self.r
    }

    pub fn recycler_mut(&mut self) -> &mut Recycler<V, L> {
        &mut self.r
    }

    pub fn into_recycler(self) -> Recycler<V, L> {
        self.r
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Returns `true` if a scroll offset is waiting for the next tick.
    pub fn has_pending_scroll(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_viewport_size(&mut self, size: Size) -> ReconcileStats {
        self.r.set_viewport_size(size)
    }

    /// Records a scroll offset reported by the UI (e.g. wheel/drag).
    ///
    /// This cancels any active tween. Nothing is reconciled until the next tick.
    pub fn on_scroll(&mut self, offset: Vec2) {
        self.cancel_animation();
        self.pending = Some(offset);
    }

    /// Advances the controller.
    ///
    /// - If a tween is active, applies its current sample.
    /// - Otherwise applies the latest offset recorded by `on_scroll`, if any.
    ///
    /// Returns the applied offset, or `None` when there was nothing to do.
    pub fn tick(&mut self, now_ms: u64) -> Option<Vec2> {
        if let Some(tween) = self.tween {
            let offset = tween.sample(now_ms);
            self.r.apply_scroll_offset(offset);
            if tween.is_done(now_ms) {
                self.tween = None;
            }
            return Some(offset);
        }

        let offset = self.pending.take()?;
        self.r.apply_scroll_offset(offset);
        Some(offset)
    }

    /// Jumps to the offset that centers `index` (no animation).
    ///
    /// Returns the applied offset.
    pub fn center_on(&mut self, index: usize) -> Vec2 {
        self.cancel_animation();
        self.pending = None;
        let offset = self.r.centered_offset(index);
        self.r.apply_scroll_offset(offset);
        offset
    }

    /// Starts a tween that ends with `index` centered.
    ///
    /// Returns the target offset.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Vec2 {
        let to = self.r.centered_offset(index);
        self.start_tween_to_offset(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween to `offset`.
    ///
    /// Returns the clamped target offset.
    pub fn start_tween_to_offset(
        &mut self,
        offset: Vec2,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Vec2 {
        let to = self.r.clamp_scroll_offset(offset);
        let from = self.r.scroll_offset();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "recycler_adapter",
            from_x = from.x,
            from_y = from.y,
            to_x = to.x,
            to_y = to.y,
            duration_ms,
            "start_tween_to_offset"
        );
        self.pending = None;
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Moves the target of the active tween, keeping its current position as the new start.
    ///
    /// Returns `false` when no tween is running.
    pub fn retarget_tween(&mut self, offset: Vec2, now_ms: u64, duration_ms: u64) -> bool {
        let to = self.r.clamp_scroll_offset(offset);
        match &mut self.tween {
            Some(tween) => {
                tween.retarget(now_ms, to, duration_ms);
                true
            }
            None => false,
        }
    }
}

impl<V, L: core::fmt::Debug> core::fmt::Debug for Controller<V, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("recycler", &self.r)
            .field("tween", &self.tween)
            .field("pending", &self.pending)
            .finish()
    }
}
