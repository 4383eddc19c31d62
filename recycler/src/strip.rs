use crate::layout::{check_step, clamp_scroll, floor_div, run_extent};
use crate::{Axis, Bounds, Layout, Padding, SetupError, Size, Vec2};

/// A single row or column of fixed-size cells.
///
/// Cells span the viewport's cross axis (minus cross padding).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripLayout {
    pub axis: Axis,
    /// Cell extent along `axis`.
    pub cell: f32,
    pub spacing: f32,
    pub padding: Padding,
    #[cfg_attr(feature = "serde", serde(skip))]
    content: Size,
}

impl StripLayout {
    pub fn new(axis: Axis, cell: f32) -> Self {
        Self {
            axis,
            cell,
            spacing: 0.0,
            padding: Padding::ZERO,
            content: Size::ZERO,
        }
    }

    pub fn vertical(cell: f32) -> Self {
        Self::new(Axis::Vertical, cell)
    }

    pub fn horizontal(cell: f32) -> Self {
        Self::new(Axis::Horizontal, cell)
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn step(&self) -> f32 {
        self.cell + self.spacing
    }

    fn main_position(&self, index: usize) -> f32 {
        index as f32 * self.step() + self.padding.leading(self.axis)
    }
}

impl Layout for StripLayout {
    fn on_invalidate(&mut self, count: usize, viewport: Size) {
        let main = self.padding.total(self.axis) + run_extent(count, self.cell, self.spacing);
        let cross = viewport.along(self.axis.cross());
        self.content = Size::from_axes(self.axis, main, cross);
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn visible_raw_range(&self, window: Bounds) -> (i64, i64) {
        let pad = self.padding.leading(self.axis);
        let lo = floor_div(window.start(self.axis) - pad, self.step());
        // The cell whose step contains the viewport end may start inside it.
        let hi = floor_div(window.end(self.axis) - pad, self.step()).saturating_add(1);
        (lo, hi)
    }

    fn bounds_for(&self, index: usize) -> Bounds {
        let cross_axis = self.axis.cross();
        let cross_pos = self.padding.leading(cross_axis);
        let cross_size =
            (self.content.along(cross_axis) - self.padding.total(cross_axis)).max(0.0);
        Bounds::from_origin_size(
            Vec2::from_axes(self.axis, self.main_position(index), cross_pos),
            Size::from_axes(self.axis, self.cell, cross_size),
        )
    }

    fn centered_offset(&self, index: usize, viewport: Size) -> Vec2 {
        let view = viewport.along(self.axis);
        let offset = self.main_position(index) - (view - self.cell) * 0.5;
        let offset = clamp_scroll(offset, self.content.along(self.axis), view);
        Vec2::from_axes(self.axis, offset, 0.0)
    }

    fn validate(&self) -> Result<(), SetupError> {
        check_step(self.axis, self.cell, self.spacing)
    }
}
