use ov_core::Point;

/// Closed orthogonal loop on the pixel lattice.
///
/// Points are stored without a duplicate closing point; the segment from the
/// last point back to the first is implicit. A well-formed polygon has only
/// axis-aligned segments and turns at every point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

/// First violation found by [`Polygon::check_orthogonal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonDefect {
    TooFewPoints(usize),
    NonOrthogonal { index: usize, from: Point, to: Point },
    Collinear { index: usize, at: Point },
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Segments in order, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Twice the signed shoelace area.
    ///
    /// Positive for loops that run clockwise on screen (outer boundaries),
    /// negative for holes.
    pub fn signed_area2(&self) -> i64 {
        self.segments().map(|(a, b)| a.x * b.y - b.x * a.y).sum()
    }

    /// Signed enclosed area in pixels.
    pub fn signed_area(&self) -> i64 {
        self.signed_area2() / 2
    }

    /// Checks that every segment is axis-aligned and every point is a turn.
    pub fn check_orthogonal(&self) -> Result<(), PolygonDefect> {
        let n = self.points.len();
        if n < 4 {
            return Err(PolygonDefect::TooFewPoints(n));
        }

        for (i, (a, b)) in self.segments().enumerate() {
            if a.axis_to(b).is_none() {
                return Err(PolygonDefect::NonOrthogonal {
                    index: i,
                    from: a,
                    to: b,
                });
            }
        }

        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let cur = self.points[i];
            let next = self.points[(i + 1) % n];
            if prev.axis_to(cur) == cur.axis_to(next) {
                return Err(PolygonDefect::Collinear { index: i, at: cur });
            }
        }

        Ok(())
    }
}
