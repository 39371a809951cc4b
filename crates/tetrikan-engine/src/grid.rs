//! Dense occupancy grid.
//!
//! The grid is a cache derived from the task collection: every occupied cell
//! names the task whose footprint covers it. It is stored as a flat,
//! row-major vector so a whole board snapshot clones in one allocation.

use crate::footprint::Footprint;
use crate::task::Task;
use std::fmt;
use tetrikan_core::{Cell, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<TaskId>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Builds a grid by stamping every placed task, without validation.
    ///
    /// Cells that fall outside the grid are skipped.
    pub fn from_tasks<'a, I>(width: usize, height: usize, tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut grid = Self::new(width, height);
        for task in tasks {
            if let Some(anchor) = task.anchor {
                grid.stamp(anchor, &task.footprint, &task.id);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.y * self.width + cell.x)
    }

    /// Owner of `cell`; `None` for empty or out-of-bounds cells.
    pub fn get(&self, cell: Cell) -> Option<&TaskId> {
        self.index(cell).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Writes `owner` into every in-bounds cell of the footprint.
    pub fn stamp(&mut self, anchor: Cell, footprint: &Footprint, owner: &TaskId) {
        for cell in footprint.cells_at(anchor).flatten() {
            if let Some(idx) = self.index(cell) {
                self.cells[idx] = Some(owner.clone());
            }
        }
    }

    /// Clears the footprint's cells that `owner` still holds.
    pub fn erase(&mut self, anchor: Cell, footprint: &Footprint, owner: &TaskId) {
        for cell in footprint.cells_at(anchor).flatten() {
            if let Some(idx) = self.index(cell) {
                if self.cells[idx].as_ref() == Some(owner) {
                    self.cells[idx] = None;
                }
            }
        }
    }

    /// Owners of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[Option<TaskId>] {
        if y >= self.height {
            return &[];
        }
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Whether every cell of row `y` is occupied.
    pub fn row_is_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(Option::is_some)
    }

    /// Number of occupied orthogonal neighbours of `cell`.
    pub fn occupied_neighbors(&self, cell: Cell) -> usize {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(|(dx, dy)| cell.step(dx, dy))
            .filter(|n| self.is_occupied(*n))
            .count()
    }

    /// Every occupied cell with its owner, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &TaskId)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, owner)| {
            owner
                .as_ref()
                .map(|id| (Cell::new(idx % self.width, idx / self.width), id))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for owner in self.row(y) {
                match owner {
                    Some(id) => write!(f, " {:<3} ", id.short())?,
                    None => write!(f, " --- ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
