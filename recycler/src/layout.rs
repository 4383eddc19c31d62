use crate::{Axis, Bounds, SetupError, Size, Vec2};

/// Pluggable geometry for one list orientation/shape.
///
/// Implementations are pure index <-> position math. They may cache values derived in
/// [`Layout::on_invalidate`], but the engine never mutates them otherwise.
pub trait Layout {
    /// Recomputes the content size for `count` items shown in a viewport of size `viewport`.
    fn on_invalidate(&mut self, count: usize, viewport: Size);

    /// Total scrollable content size computed by the last [`Layout::on_invalidate`].
    fn content_size(&self) -> Size;

    /// Returns an unclamped, unbuffered index interval covering all content that intersects
    /// `window` (the viewport rectangle in content space).
    ///
    /// The interval may extend outside `[0, count)`; the engine clamps it.
    fn visible_raw_range(&self, window: Bounds) -> (i64, i64);

    /// Placement of the view for `index`.
    fn bounds_for(&self, index: usize) -> Bounds;

    /// The scroll offset that centers `index` in a viewport of size `viewport`, clamped to the
    /// valid scroll range.
    fn centered_offset(&self, index: usize, viewport: Size) -> Vec2;

    /// Rejects parameters the math above cannot work with.
    fn validate(&self) -> Result<(), SetupError> {
        Ok(())
    }
}

/// `floor(pos / step)` without `std` float intrinsics.
pub(crate) fn floor_div(pos: f32, step: f32) -> i64 {
    let q = pos / step;
    let t = q as i64;
    if (t as f32) > q { t - 1 } else { t }
}

/// Clamps a scroll offset to `[0, content - viewport]` (or `0` when the content fits).
pub(crate) fn clamp_scroll(offset: f32, content: f32, viewport: f32) -> f32 {
    let max = (content - viewport).max(0.0);
    offset.min(max).max(0.0)
}

/// Total extent of `n` cells laid out with `spacing` between them.
pub(crate) fn run_extent(n: usize, cell: f32, spacing: f32) -> f32 {
    let n_f = n as f32;
    cell * n_f + n.saturating_sub(1) as f32 * spacing
}

pub(crate) fn check_step(axis: Axis, cell: f32, spacing: f32) -> Result<(), SetupError> {
    let step = cell + spacing;
    if step > 0.0 && cell >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidCellExtent { axis, step })
    }
}
