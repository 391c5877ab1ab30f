use ahash::AHashMap;
use ov_core::{ColorKey, Edge, PixelGrid};

/// Unit boundary edges grouped by color, in first-seen color order.
#[derive(Debug, Clone, Default)]
pub struct ColorEdges {
    width: usize,
    height: usize,
    groups: Vec<(ColorKey, Vec<Edge>)>,
}

impl ColorEdges {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ColorKey> + '_ {
        self.groups.iter().map(|(k, _)| *k)
    }

    pub fn get(&self, key: ColorKey) -> Option<&[Edge]> {
        self.groups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, e)| e.as_slice())
    }

    pub fn into_groups(self) -> Vec<(ColorKey, Vec<Edge>)> {
        self.groups
    }
}

impl IntoIterator for ColorEdges {
    type Item = (ColorKey, Vec<Edge>);
    type IntoIter = std::vec::IntoIter<(ColorKey, Vec<Edge>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Scans `grid` once and emits the four clockwise edges of every pixel,
/// grouped by color.
///
/// The scan runs column by column (`x` outer, `y` inner); colors are ordered
/// by the first pixel that carries them in that scan, which fixes the draw
/// order of the final document. Shared borders are kept here and cancelled
/// by the resolver.
pub fn collect_edges<G: PixelGrid + ?Sized>(grid: &G) -> ColorEdges {
    let width = grid.width();
    let height = grid.height();

    let mut groups: Vec<(ColorKey, Vec<Edge>)> = Vec::new();
    let mut slot_of: AHashMap<ColorKey, usize> = AHashMap::new();

    for x in 0..width {
        for y in 0..height {
            let key = ColorKey::from(grid.color(x, y));
            let slot = *slot_of.entry(key).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[slot]
                .1
                .extend_from_slice(&Edge::around_pixel(x as i64, y as i64));
        }
    }

    tracing::trace!(width, height, colors = groups.len(), "collected edges");

    ColorEdges {
        width,
        height,
        groups,
    }
}
