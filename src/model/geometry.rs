//! Virtual-pixel geometry shared by the primitives.
//!
//! Primitives reason in virtual pixels so that radii, spreads and speeds keep
//! their natural units. One terminal cell is [`CELL_WIDTH_PX`] by
//! [`CELL_HEIGHT_PX`] virtual pixels.

/// Width of one terminal cell in virtual pixels.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Height of one terminal cell in virtual pixels.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// A point in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal, growing right.
    pub x: f64,
    /// Vertical, growing down.
    pub y: f64,
}

impl Point {
    /// Point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Center of the cell at `(column, row)`.
    pub fn cell_center(column: u16, row: u16) -> Self {
        Self::new(
            (f64::from(column) + 0.5) * CELL_WIDTH_PX,
            (f64::from(row) + 0.5) * CELL_HEIGHT_PX,
        )
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned bounding box in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Box with its top-left corner at `(left, top)`.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Box covering `width` x `height` cells from `(column, row)`.
    pub fn from_cells(column: u16, row: u16, width: u16, height: u16) -> Self {
        Self::new(
            f64::from(column) * CELL_WIDTH_PX,
            f64::from(row) * CELL_HEIGHT_PX,
            f64::from(width) * CELL_WIDTH_PX,
            f64::from(height) * CELL_HEIGHT_PX,
        )
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// A box with no area has not been laid out yet.
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Strict containment in the box grown by `margin` on every side.
    pub fn contains_with_margin(&self, p: Point, margin: f64) -> bool {
        p.x > self.left - margin
            && p.x < self.right() + margin
            && p.y > self.top - margin
            && p.y < self.bottom() + margin
    }

    /// Bearing from the box center to `p` in degrees, 0 pointing up and
    /// increasing clockwise. Not normalized.
    pub fn bearing_to(&self, p: Point) -> f64 {
        let c = self.center();
        (p.y - c.y).atan2(p.x - c.x).to_degrees() + 90.0
    }
}
