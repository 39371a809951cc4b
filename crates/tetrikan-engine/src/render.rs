//! Pixel geometry for a rendering layer.
//!
//! Converts grid coordinates into screen rectangles with square cells of
//! `cell_size` pixels and (0, 0) at the top-left of the grid.

use crate::board::Board;
use serde::Serialize;
use tetrikan_core::{BandLayout, Cell, Status, TaskId};

/// Default side of one grid cell, in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 50;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// The square covering `cell`.
    pub fn of_cell(cell: Cell, cell_size: u32) -> Self {
        Self {
            x: cell.x as u32 * cell_size,
            y: cell.y as u32 * cell_size,
            width: cell_size,
            height: cell_size,
        }
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Rectangles of one placed task, one per block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockGeometry {
    pub task: TaskId,
    pub status: Status,
    pub rects: Vec<PixelRect>,
}

/// Section header for one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandHeader {
    pub status: Status,
    pub title: String,
    /// Top edge in pixels.
    pub top: u32,
    /// Bottom edge in pixels (exclusive).
    pub bottom: u32,
}

/// Pixel rectangles of every placed task, in band order.
pub fn block_geometry(board: &Board, cell_size: u32) -> Vec<BlockGeometry> {
    board
        .tasks()
        .filter(|task| task.is_placed())
        .map(|task| BlockGeometry {
            task: task.id.clone(),
            status: task.status,
            rects: task
                .absolute_cells()
                .into_iter()
                .map(|cell| PixelRect::of_cell(cell, cell_size))
                .collect(),
        })
        .collect()
}

/// Band labels with their pixel row ranges.
pub fn band_headers(layout: &BandLayout, cell_size: u32) -> Vec<BandHeader> {
    layout
        .bands()
        .iter()
        .map(|band| BandHeader {
            status: band.status,
            title: band.title.clone(),
            top: band.start as u32 * cell_size,
            bottom: band.end as u32 * cell_size,
        })
        .collect()
}

/// Grid cell under a pixel, if the pixel lies on the grid.
pub fn cell_at_pixel(layout: &BandLayout, cell_size: u32, px: u32, py: u32) -> Option<Cell> {
    if cell_size == 0 {
        return None;
    }
    let cell = Cell::new((px / cell_size) as usize, (py / cell_size) as usize);
    layout.contains(cell).then_some(cell)
}

/// Status of the band under pixel row `py`.
pub fn band_at_pixel(layout: &BandLayout, cell_size: u32, py: u32) -> Option<Status> {
    if cell_size == 0 {
        return None;
    }
    layout
        .band_for_row((py / cell_size) as usize)
        .map(|band| band.status)
}
