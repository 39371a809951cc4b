//! Shape layout generator.
//!
//! Maps a shape family and a block count to a canonical footprint. Counts of
//! one to four use hard-coded tetromino forms (partial forms for fewer than
//! four blocks); larger counts extend the base form with rows appended in a
//! fixed, family-specific pattern:
//!
//! - `I` fills rows of four, row-major.
//! - `O` fills the smallest square holding `count` cells, row-major.
//! - `L` and `J` start from a five-block corner and add left-aligned rows of
//!   up to three cells.
//! - `S` and `Z` alternate two-cell rows that keep the diagonal stagger going.
//! - `T` extends its stem one cell per row.
//!
//! Every layout holds exactly `count` blocks.

use crate::footprint::Footprint;
use tetrikan_core::{Offset, ShapeFamily};

/// Width of one `I` row.
const I_ROW: usize = 4;
/// Longest row appended to an `L`/`J` arm.
const ARM_ROW: usize = 3;

/// Returns the footprint for `count` blocks of `shape`.
///
/// A count of zero is clamped to one block.
pub fn layout(shape: ShapeFamily, count: usize) -> Footprint {
    let count = if count == 0 {
        tracing::debug!("Block count 0 for shape {} clamped to 1", shape);
        1
    } else {
        count
    };

    let points: Vec<(usize, usize)> = match shape {
        ShapeFamily::I => line(count),
        ShapeFamily::O => square(count),
        ShapeFamily::L => corner(count, false),
        ShapeFamily::J => corner(count, true),
        ShapeFamily::S => stagger(count, false),
        ShapeFamily::Z => stagger(count, true),
        ShapeFamily::T => tee(count),
    };
    debug_assert_eq!(points.len(), count);

    Footprint::from_offsets(points.into_iter().map(Offset::from))
}

fn line(count: usize) -> Vec<(usize, usize)> {
    (0..count).map(|i| (i % I_ROW, i / I_ROW)).collect()
}

fn square(count: usize) -> Vec<(usize, usize)> {
    let mut side = 1;
    while side * side < count {
        side += 1;
    }
    (0..count).map(|i| (i % side, i / side)).collect()
}

fn vertical(count: usize) -> Vec<(usize, usize)> {
    (0..count).map(|y| (0, y)).collect()
}

fn corner(count: usize, mirrored: bool) -> Vec<(usize, usize)> {
    match count {
        1..=3 => vertical(count),
        4 if mirrored => vec![(1, 0), (1, 1), (0, 2), (1, 2)],
        4 => vec![(0, 0), (0, 1), (0, 2), (1, 2)],
        _ => {
            let mut points = if mirrored {
                vec![(2, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
            } else {
                vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
            };
            let mut remaining = count - 5;
            let mut row = 3;
            while remaining > 0 {
                let take = remaining.min(ARM_ROW);
                points.extend((0..take).map(|x| (x, row)));
                remaining -= take;
                row += 1;
            }
            points
        }
    }
}

/// `S` rows alternate `XX.` / `.XX`; `Z` rows alternate `.XX` / `XX.`.
fn stagger(count: usize, z: bool) -> Vec<(usize, usize)> {
    let mut points = match (count, z) {
        (1, _) => vec![(0, 0)],
        (2, _) => vec![(0, 0), (1, 0)],
        (3, false) => vec![(1, 0), (2, 0), (0, 1)],
        (3, true) => vec![(0, 0), (1, 0), (1, 1)],
        (_, false) => vec![(1, 0), (2, 0), (0, 1), (1, 1)],
        (_, true) => vec![(0, 0), (1, 0), (1, 1), (2, 1)],
    };

    let mut remaining = count.saturating_sub(4);
    let mut row = 2;
    while remaining > 0 {
        let left = (row % 2 == 0) != z;
        let cols: [usize; 2] = if left { [0, 1] } else { [1, 2] };
        let take = remaining.min(cols.len());
        points.extend(cols[..take].iter().map(|x| (*x, row)));
        remaining -= take;
        row += 1;
    }
    points
}

fn tee(count: usize) -> Vec<(usize, usize)> {
    match count {
        1..=3 => (0..count).map(|x| (x, 0)).collect(),
        4 => vec![(0, 0), (1, 0), (2, 0), (1, 1)],
        _ => {
            let mut points = vec![(0, 0), (1, 0), (2, 0), (1, 1)];
            points.extend((2..count - 2).map(|y| (1, y)));
            points
        }
    }
}
