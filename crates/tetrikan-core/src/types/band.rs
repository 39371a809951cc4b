//! Status bands: contiguous row ranges of the grid.

use super::{Cell, Status};
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: usize = 10;
/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: usize = 12;

/// A contiguous row range `[start, end)` owned by one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub status: Status,
    pub title: String,
    pub start: usize,
    pub end: usize,
}

impl Band {
    pub fn new(status: Status, title: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            status,
            title: title.into(),
            start,
            end,
        }
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn height(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains_row(&self, y: usize) -> bool {
        self.rows().contains(&y)
    }
}

/// Grid dimensions plus the bands partitioning its rows.
///
/// Construction validates that bands are non-empty, contiguous from row 0,
/// cover the full height, and map 1:1 onto [`Status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLayout {
    width: usize,
    height: usize,
    bands: Vec<Band>,
}

impl BandLayout {
    pub fn new(width: usize, height: usize, bands: Vec<Band>) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptyGrid { width, height });
        }

        let mut expected = 0;
        let mut seen: Vec<Status> = Vec::with_capacity(bands.len());
        for band in &bands {
            if band.end <= band.start {
                return Err(LayoutError::EmptyBand {
                    status: band.status,
                    start: band.start,
                    end: band.end,
                });
            }
            if band.start != expected {
                return Err(LayoutError::NotContiguous {
                    status: band.status,
                    start: band.start,
                    expected,
                });
            }
            if seen.contains(&band.status) {
                return Err(LayoutError::DuplicateStatus {
                    status: band.status,
                });
            }
            seen.push(band.status);
            expected = band.end;
        }

        if expected != height {
            return Err(LayoutError::IncompleteCoverage {
                covered: expected,
                height,
            });
        }

        if let Some(status) = Status::ALL.iter().find(|s| !seen.contains(s)) {
            return Err(LayoutError::MissingStatus { status: *status });
        }

        Ok(Self {
            width,
            height,
            bands,
        })
    }

    /// The 10x12 board with four bands of three rows each.
    pub fn standard() -> Self {
        let bands = Status::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| Band::new(*status, status.title(), i * 3, i * 3 + 3))
            .collect();
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            bands,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Index of the first band whose row range contains `y`.
    pub fn band_index_for_row(&self, y: usize) -> Option<usize> {
        self.bands.iter().position(|band| band.contains_row(y))
    }

    /// The first band whose row range contains `y`.
    pub fn band_for_row(&self, y: usize) -> Option<&Band> {
        self.band_index_for_row(y).map(|idx| &self.bands[idx])
    }

    pub fn index_of(&self, status: Status) -> usize {
        self.bands
            .iter()
            .position(|band| band.status == status)
            .unwrap_or(0)
    }

    pub fn band(&self, status: Status) -> &Band {
        &self.bands[self.index_of(status)]
    }

    /// Band that receives newly created tasks.
    pub fn first(&self) -> &Band {
        &self.bands[0]
    }

    /// Band in which completed rows are cleared.
    pub fn terminal(&self) -> &Band {
        &self.bands[self.bands.len() - 1]
    }
}

impl Default for BandLayout {
    fn default() -> Self {
        Self::standard()
    }
}
