use core::fmt;

/// Integer lattice point (a pixel corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Axis of the segment `self -> other`, or `None` when the two points
    /// share both coordinates or neither.
    pub fn axis_to(self, other: Point) -> Option<Axis> {
        match (self.x == other.x, self.y == other.y) {
            (true, false) => Some(Axis::Vertical),
            (false, true) => Some(Axis::Horizontal),
            _ => None,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Directed unit boundary segment; the owning color lies to the right of
/// travel (with `y` growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// The four clockwise edges of pixel `(x, y)`: top, right, bottom, left.
    pub fn around_pixel(x: i64, y: i64) -> [Edge; 4] {
        let tl = Point::new(x, y);
        let tr = Point::new(x + 1, y);
        let br = Point::new(x + 1, y + 1);
        let bl = Point::new(x, y + 1);
        [
            Edge::new(tl, tr),
            Edge::new(tr, br),
            Edge::new(br, bl),
            Edge::new(bl, tl),
        ]
    }
}
