use crate::layout::{check_step, clamp_scroll, floor_div, run_extent};
use crate::{Axis, Bounds, Layout, Padding, SetupError, Size, Vec2};

/// Fixed-size cells arranged in lines of `limit` cells.
///
/// `axis` is the scrolling (primary) axis: with `Axis::Vertical`, rows of `limit` columns grow
/// downwards; with `Axis::Horizontal`, columns of `limit` rows grow to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub axis: Axis,
    pub cell: Size,
    pub spacing: Vec2,
    pub padding: Padding,
    /// Cells per line along the cross axis.
    pub limit: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    content: Size,
}

impl GridLayout {
    pub fn new(axis: Axis, cell: Size, limit: usize) -> Self {
        Self {
            axis,
            cell,
            spacing: Vec2::ZERO,
            padding: Padding::ZERO,
            limit,
            content: Size::ZERO,
        }
    }

    pub fn with_spacing(mut self, spacing: Vec2) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Switches the scrolling axis. Call `Recycler::invalidate` afterwards.
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    fn step(&self, axis: Axis) -> f32 {
        self.cell.along(axis) + self.spacing.along(axis)
    }

    fn position(&self, axis: Axis, line: usize) -> f32 {
        line as f32 * self.step(axis) + self.padding.leading(axis)
    }

    // limit is validated, but a zero here must not divide by zero
    fn limit(&self) -> usize {
        self.limit.max(1)
    }
}

impl Layout for GridLayout {
    fn on_invalidate(&mut self, count: usize, _viewport: Size) {
        let limit = self.limit();
        let cross = self.axis.cross();
        let lines = count.div_ceil(limit);
        let main = run_extent(lines, self.cell.along(self.axis), self.spacing.along(self.axis))
            + self.padding.total(self.axis);
        let cross_extent = run_extent(limit, self.cell.along(cross), self.spacing.along(cross))
            + self.padding.total(cross);
        self.content = Size::from_axes(self.axis, main, cross_extent);
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn visible_raw_range(&self, window: Bounds) -> (i64, i64) {
        let pad = self.padding.leading(self.axis);
        let step = self.step(self.axis);
        let first = floor_div(window.start(self.axis) - pad, step);
        let past_last = floor_div(window.end(self.axis) - pad, step).saturating_add(1);
        let limit = self.limit() as i64;
        (first.saturating_mul(limit), past_last.saturating_mul(limit))
    }

    fn bounds_for(&self, index: usize) -> Bounds {
        let limit = self.limit();
        let cross = self.axis.cross();
        let main_pos = self.position(self.axis, index / limit);
        let cross_pos = self.position(cross, index % limit);
        Bounds::from_origin_size(
            Vec2::from_axes(self.axis, main_pos, cross_pos),
            self.cell,
        )
    }

    fn centered_offset(&self, index: usize, viewport: Size) -> Vec2 {
        let view = viewport.along(self.axis);
        let cell = self.cell.along(self.axis);
        let main_pos = self.position(self.axis, index / self.limit());
        let offset = main_pos - (view - cell) * 0.5;
        let offset = clamp_scroll(offset, self.content.along(self.axis), view);
        Vec2::from_axes(self.axis, offset, 0.0)
    }

    fn validate(&self) -> Result<(), SetupError> {
        if self.limit == 0 {
            return Err(SetupError::InvalidLimit);
        }
        check_step(self.axis, self.cell.along(self.axis), self.spacing.along(self.axis))
    }
}
