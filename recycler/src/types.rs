/// Identifies the "shape" a view was built from.
///
/// Two views are interchangeable only if they were built from the same template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A 2D offset in content space. Positive `x` scrolls right, positive `y` scrolls down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Builds a vector with `main` on `axis` and `cross` on the other axis.
    pub fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// An axis-aligned rectangle in content space (origin at the top-left of the content).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Start coordinate on `axis`.
    pub fn start(&self, axis: Axis) -> f32 {
        self.origin().along(axis)
    }

    /// End coordinate on `axis` (exclusive).
    pub fn end(&self, axis: Axis) -> f32 {
        self.start(axis) + self.size().along(axis)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub const fn uniform(v: f32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Padding before the first cell on `axis` (left or top).
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Sum of both paddings on `axis`.
    pub fn total(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }
}

/// A half-open range of item indexes `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive
}

impl Window {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns `true` if no index belongs to both windows.
    pub fn is_disjoint(&self, other: &Window) -> bool {
        self.end <= other.start || self.start >= other.end
    }

    pub fn indexes(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }

    /// Computes the minimal set of index ranges to deactivate and activate when moving from
    /// `old` to `new`.
    ///
    /// Disjoint windows produce a single removed range (all of `old`) and a single added range
    /// (all of `new`). Overlapping windows produce up to two ranges on each side: the leading
    /// and trailing edges.
    pub fn diff(old: Window, new: Window) -> WindowDiff {
        if old == new {
            return WindowDiff::default();
        }
        if old.is_empty() || new.is_empty() || old.is_disjoint(&new) {
            return WindowDiff {
                removed: [old, Window::EMPTY],
                added: [new, Window::EMPTY],
            };
        }
        WindowDiff {
            removed: [
                Window::new(old.start, new.start.min(old.end)),
                Window::new(new.end.max(old.start), old.end),
            ],
            added: [
                Window::new(new.start, old.start.min(new.end)),
                Window::new(old.end.max(new.start), new.end),
            ],
        }
    }
}

impl From<core::ops::Range<usize>> for Window {
    fn from(r: core::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

/// The result of [`Window::diff`]. Empty ranges are allowed and mean "nothing to do".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowDiff {
    pub removed: [Window; 2],
    pub added: [Window; 2],
}

impl WindowDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.iter().chain(self.added.iter()).all(Window::is_empty)
    }

    pub fn removed_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.removed.iter().flat_map(Window::indexes)
    }

    pub fn added_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.added.iter().flat_map(Window::indexes)
    }
}

/// Counters describing the work done by a single reconciliation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Views released to the pool.
    pub deactivated: usize,
    /// Calls to `DataSource::bind`.
    pub bound: usize,
    /// Views constructed through the factory.
    pub built: usize,
    /// Views taken back out of the pool.
    pub reused: usize,
    /// Pooled views detached into the dormant area.
    pub committed: usize,
}

impl ReconcileStats {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
