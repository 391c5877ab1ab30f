use ahash::{AHashMap, AHashSet};
use ov_core::{Edge, Point};
use smallvec::SmallVec;
use thiserror::Error;

use crate::polygon::Polygon;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The edge pool cannot be closed into loops: no remaining edge starts
    /// where the current trace ends.
    #[error(
        "malformed boundary: no edge continues from {at} (loop started at {loop_start}, {remaining} edges unconsumed)"
    )]
    MalformedBoundary {
        at: Point,
        loop_start: Point,
        remaining: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Merge loops that share a lattice point into one continuous path.
    pub consolidate: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self { consolidate: true }
    }
}

/// Turns one color's edge multiset into closed orthogonal polygons.
///
/// Runs cancellation, trace assembly (with run compaction and start-corner
/// correction) and, if enabled, consolidation. The result is ordered by
/// discovery and fully deterministic for a given edge order.
pub fn resolve_boundaries(
    edges: Vec<Edge>,
    cfg: &ResolveConfig,
) -> Result<Vec<Polygon>, ResolveError> {
    let input = edges.len();
    let boundary = cancel_internal_edges(edges);
    let mut polygons = trace_polygons(boundary)?;
    let traced = polygons.len();

    let merges = if cfg.consolidate {
        consolidate(&mut polygons)
    } else {
        0
    };

    tracing::trace!(
        input_edges = input,
        loops = traced,
        merges,
        polygons = polygons.len(),
        "resolved boundaries"
    );

    Ok(polygons)
}

/// Removes every pair of exactly opposite edges (shared borders between two
/// cells of the same color). Survivors keep their relative order.
pub fn cancel_internal_edges(mut edges: Vec<Edge>) -> Vec<Edge> {
    let mut pending: AHashMap<Edge, usize> = AHashMap::with_capacity(edges.len());
    let mut cancelled = vec![false; edges.len()];

    for (i, &edge) in edges.iter().enumerate() {
        if let Some(j) = pending.remove(&edge.reversed()) {
            cancelled[i] = true;
            cancelled[j] = true;
        } else {
            pending.insert(edge, i);
        }
    }

    let mut idx = 0;
    edges.retain(|_| {
        let keep = !cancelled[idx];
        idx += 1;
        keep
    });
    edges
}

/// Assembles boundary edges into closed loops, one polygon per loop.
///
/// Every loop starts at the earliest unconsumed edge and always continues
/// with the earliest unconsumed edge leaving the current end point, so
/// pinch points (two loops through one lattice point) resolve the same way
/// on every run.
pub fn trace_polygons(edges: Vec<Edge>) -> Result<Vec<Polygon>, ResolveError> {
    let mut pool = EdgePool::new(edges);
    let mut polygons = Vec::new();

    while let Some(first) = pool.take_first() {
        let loop_start = first.start;
        let mut points = vec![first.start, first.end];
        let mut cursor = first.end;

        while cursor != loop_start {
            let Some(edge) = pool.take_from(cursor) else {
                return Err(ResolveError::MalformedBoundary {
                    at: cursor,
                    loop_start,
                    remaining: pool.remaining(),
                });
            };
            extend_run(&mut points, edge.end);
            cursor = edge.end;
        }

        close_at_corner(&mut points);
        polygons.push(Polygon::new(points));
    }

    Ok(polygons)
}

/// Splices polygons that share a lattice point into one another until no
/// two remaining polygons touch. Returns the number of merges.
///
/// For polygons `i < k`, the earliest point of `k` that also lies on `i` is
/// the splice point; `k` is inserted right after the first occurrence of
/// that point in `i`, rotated so that it leaves and re-enters through it.
/// After a merge into `i`, candidates are re-examined from `i + 1`, because
/// the absorbed points can touch polygons that were already skipped.
pub fn consolidate(polygons: &mut Vec<Polygon>) -> usize {
    let mut merges = 0;
    let mut i = 0;

    while i < polygons.len() {
        let mut first_at = point_index(&polygons[i]);
        let mut k = i + 1;

        while k < polygons.len() {
            let touch = polygons[k]
                .points
                .iter()
                .enumerate()
                .find_map(|(l, p)| first_at.get(p).map(|&j| (j, l)));

            let Some((j, l)) = touch else {
                k += 1;
                continue;
            };

            let absorbed = polygons.remove(k);
            splice_at(&mut polygons[i], j, &absorbed, l);
            merges += 1;

            first_at = point_index(&polygons[i]);
            k = i + 1;
        }

        i += 1;
    }

    merges
}

/// Consumable set of directed edges with an index on start points.
///
/// Edges keep their slot for the whole trace; taking one marks the slot and
/// drops it from its start point's bucket.
struct EdgePool {
    edges: Vec<Edge>,
    taken: Vec<bool>,
    by_start: AHashMap<Point, SmallVec<[usize; 2]>>,
    next_free: usize,
    remaining: usize,
}

impl EdgePool {
    fn new(edges: Vec<Edge>) -> Self {
        let mut by_start: AHashMap<Point, SmallVec<[usize; 2]>> =
            AHashMap::with_capacity(edges.len());
        for (i, e) in edges.iter().enumerate() {
            by_start.entry(e.start).or_default().push(i);
        }

        Self {
            taken: vec![false; edges.len()],
            remaining: edges.len(),
            next_free: 0,
            by_start,
            edges,
        }
    }

    fn remaining(&self) -> usize {
        self.remaining
    }

    fn take_first(&mut self) -> Option<Edge> {
        while self.next_free < self.edges.len() && self.taken[self.next_free] {
            self.next_free += 1;
        }
        let idx = self.next_free;
        if idx >= self.edges.len() {
            return None;
        }

        let start = self.edges[idx].start;
        if let Some(bucket) = self.by_start.get_mut(&start) {
            bucket.retain(|i| *i != idx);
        }
        Some(self.mark(idx))
    }

    fn take_from(&mut self, start: Point) -> Option<Edge> {
        let bucket = self.by_start.get_mut(&start)?;
        if bucket.is_empty() {
            return None;
        }
        // Buckets are filled in slot order, so the front is the earliest edge.
        let idx = bucket.remove(0);
        Some(self.mark(idx))
    }

    fn mark(&mut self, idx: usize) -> Edge {
        self.taken[idx] = true;
        self.remaining -= 1;
        self.edges[idx]
    }
}

/// Appends `next` to an open trace, extending the last run in place when
/// `next` continues along the same axis.
fn extend_run(points: &mut Vec<Point>, next: Point) {
    let n = points.len();
    if n >= 2 {
        let prev = points[n - 2];
        let last = &mut points[n - 1];
        if prev.x == last.x && last.x == next.x {
            last.y = next.y;
            return;
        }
        if prev.y == last.y && last.y == next.y {
            last.x = next.x;
            return;
        }
    }
    points.push(next);
}

/// Drops the duplicate closing point of a finished trace and, when the trace
/// started in the middle of a run, moves the start onto the run's corner.
fn close_at_corner(points: &mut Vec<Point>) {
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let n = points.len();
    if n < 3 {
        return;
    }

    let (first, second, last) = (points[0], points[1], points[n - 1]);
    let vertical_run = last.x == first.x && first.x == second.x;
    let horizontal_run = last.y == first.y && first.y == second.y;
    if vertical_run || horizontal_run {
        points[0] = last;
        points.pop();
    }
}

fn point_index(polygon: &Polygon) -> AHashMap<Point, usize> {
    let mut first_at = AHashMap::with_capacity(polygon.len());
    for (j, p) in polygon.points.iter().enumerate() {
        first_at.entry(*p).or_insert(j);
    }
    first_at
}

/// Inserts `other` into `host` after `host[j]`, where `host[j] == other[l]`.
fn splice_at(host: &mut Polygon, j: usize, other: &Polygon, l: usize) {
    let n = other.points.len();
    let rotated = (1..=n).map(|step| other.points[(l + step) % n]);
    host.points.splice(j + 1..j + 1, rotated);
}

/// Lattice points that lie on more than one of `polygons`.
pub fn touching_points(polygons: &[Polygon]) -> Vec<Point> {
    let mut seen: AHashSet<Point> = AHashSet::new();
    let mut shared = Vec::new();
    for polygon in polygons {
        let mut own: AHashSet<Point> = AHashSet::new();
        for p in &polygon.points {
            if own.insert(*p) && !seen.insert(*p) {
                shared.push(*p);
            }
        }
    }
    shared
}
