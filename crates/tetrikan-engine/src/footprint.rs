//! Block footprints: the relative cells one task occupies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tetrikan_core::{Cell, Offset};

/// Largest offset component a footprint accepts from outside input.
pub const MAX_OFFSET: usize = u16::MAX as usize;

/// Ordered, duplicate-free set of offsets normalized so that the minimum
/// `dx` and the minimum `dy` are both zero.
///
/// Most footprints hold four or five blocks, so they live inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Offset>", into = "Vec<Offset>")]
pub struct Footprint {
    offsets: SmallVec<[Offset; 8]>,
}

impl Footprint {
    /// Builds a footprint from arbitrary signed points, normalizing them and
    /// dropping duplicates while keeping first-seen order.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let points: SmallVec<[(i64, i64); 8]> = points.into_iter().collect();
        let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);

        let mut offsets: SmallVec<[Offset; 8]> = SmallVec::with_capacity(points.len());
        for (x, y) in points {
            let offset = Offset::new((x - min_x) as usize, (y - min_y) as usize);
            if !offsets.contains(&offset) {
                offsets.push(offset);
            }
        }
        Self { offsets }
    }

    /// Builds a footprint from offsets, normalizing them.
    pub fn from_offsets<I>(offsets: I) -> Self
    where
        I: IntoIterator<Item = Offset>,
    {
        Self::from_points(
            offsets
                .into_iter()
                .map(|o| (o.dx as i64, o.dy as i64)),
        )
    }

    /// Builds a footprint from absolute cells, returning the anchor (the
    /// minimum corner) alongside it. `None` when `cells` is empty.
    pub fn from_cells<I>(cells: I) -> Option<(Cell, Self)>
    where
        I: IntoIterator<Item = Cell>,
    {
        let cells: SmallVec<[Cell; 8]> = cells.into_iter().collect();
        let min_x = cells.iter().map(|c| c.x).min()?;
        let min_y = cells.iter().map(|c| c.y).min()?;
        let footprint = Self::from_points(cells.iter().map(|c| (c.x as i64, c.y as i64)));
        Some((Cell::new(min_x, min_y), footprint))
    }

    /// A single block at the origin.
    pub fn single() -> Self {
        Self::from_offsets([Offset::ORIGIN])
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn iter(&self) -> impl Iterator<Item = Offset> + '_ {
        self.offsets.iter().copied()
    }

    pub fn contains(&self, offset: Offset) -> bool {
        self.offsets.contains(&offset)
    }

    /// Width and height of the bounding box, in cells.
    pub fn extent(&self) -> (usize, usize) {
        let w = self.offsets.iter().map(|o| o.dx + 1).max().unwrap_or(0);
        let h = self.offsets.iter().map(|o| o.dy + 1).max().unwrap_or(0);
        (w, h)
    }

    /// Absolute cells when the footprint is anchored at `anchor`. A block
    /// whose coordinates overflow comes out as `None`.
    pub fn cells_at(&self, anchor: Cell) -> impl Iterator<Item = Option<Cell>> + '_ {
        self.offsets.iter().map(move |o| anchor.offset_by(*o))
    }

    /// Whether every block lies within a `width` x `height` grid when
    /// anchored at the origin.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        let (w, h) = self.extent();
        w <= width && h <= height
    }

    /// Rotates 90 degrees clockwise about the bounding-box center.
    ///
    /// The pivot uses floor division so odd extents bias toward the lower
    /// coordinate; each point maps `(dx, dy) -> (dy, -dx)` relative to the
    /// pivot, and the result is renormalized.
    pub fn rotated_cw(&self) -> Self {
        if self.offsets.is_empty() {
            return self.clone();
        }
        let (w, h) = self.extent();
        let cx = ((w - 1) / 2) as i64;
        let cy = ((h - 1) / 2) as i64;
        Self::from_points(self.offsets.iter().map(|o| {
            let rel_x = o.dx as i64 - cx;
            let rel_y = o.dy as i64 - cy;
            (rel_y + cx, -rel_x + cy)
        }))
    }

    /// Whether both footprints cover the same offsets, ignoring order.
    pub fn same_cells(&self, other: &Footprint) -> bool {
        self.len() == other.len() && self.offsets.iter().all(|o| other.contains(*o))
    }
}

impl TryFrom<Vec<Offset>> for Footprint {
    type Error = String;

    fn try_from(offsets: Vec<Offset>) -> Result<Self, Self::Error> {
        if offsets.is_empty() {
            return Err("footprint must contain at least one block".to_string());
        }
        if let Some(o) = offsets.iter().find(|o| o.dx > MAX_OFFSET || o.dy > MAX_OFFSET) {
            return Err(format!("footprint offset {} exceeds {}", o, MAX_OFFSET));
        }
        Ok(Self::from_offsets(offsets))
    }
}

impl From<Footprint> for Vec<Offset> {
    fn from(footprint: Footprint) -> Self {
        footprint.offsets.into_vec()
    }
}
