//! Serialization and deserialization for board files.
//!
//! A board file is a JSON document holding the task list (with anchors) and
//! the retro history. The grid is never stored; loading always rebuilds it
//! through synchronization.

use crate::board::{Board, BoardSpec, Retro, SyncReport};
use crate::footprint::Footprint;
use crate::layout::layout;
use crate::task::Task;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tetrikan_core::{BandLayout, Cell, ShapeFamily, Status, TaskId};

/// Board file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete board file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFile {
    pub version: String,
    pub metadata: BoardMetadata,
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub retro: Retro,
}

/// Board metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Serialized task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub shape: ShapeFamily,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub anchor: Option<Cell>,
    #[serde(default)]
    pub footprint: Option<Footprint>,
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            name: task.name.clone(),
            description: task.description.clone(),
            company: task.company.clone(),
            skills: task.skills.clone(),
            shape: task.shape,
            status: task.status,
            anchor: task.anchor,
            footprint: Some(task.footprint.clone()),
        }
    }

    /// Converts back into a task for a board with `bands`.
    ///
    /// A missing footprint, one with more blocks than the skill count
    /// allows, or one wider or taller than the grid is regenerated from the
    /// shape. Smaller footprints are kept: they are what is left after a row
    /// clear. An anchor outside the grid is dropped so synchronization
    /// places the task afresh.
    pub fn into_task(self, bands: &BandLayout) -> Task {
        let blocks = self.skills.len().max(1);
        let footprint = match self.footprint {
            Some(footprint)
                if footprint.len() <= blocks
                    && footprint.fits_within(bands.width(), bands.height()) =>
            {
                footprint
            }
            Some(footprint) => {
                tracing::warn!(
                    "Task {} stores {} block(s) spanning {:?} for {} skill(s), regenerating",
                    self.id,
                    footprint.len(),
                    footprint.extent(),
                    blocks
                );
                layout(self.shape, self.skills.len())
            }
            None => layout(self.shape, self.skills.len()),
        };
        let anchor = match self.anchor {
            Some(anchor) if !bands.contains(anchor) => {
                tracing::warn!(
                    "Task {} anchor {} lies outside the grid, dropping",
                    self.id,
                    anchor
                );
                None
            }
            anchor => anchor,
        };
        Task {
            id: self.id,
            name: self.name,
            description: self.description,
            company: self.company,
            skills: self.skills,
            shape: self.shape,
            status: self.status,
            anchor,
            footprint,
        }
    }
}

impl BoardFile {
    /// Create a new empty board file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: BoardMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            tasks: Vec::new(),
            retro: Retro::default(),
        }
    }

    /// Snapshot of a board's tasks and retro history
    pub fn from_board(name: impl Into<String>, board: &Board) -> Self {
        let mut file = Self::new(name);
        file.tasks = board.tasks().map(TaskRecord::from_task).collect();
        file.retro = board.retro().clone();
        file
    }

    /// Rebuild a board from the stored tasks and synchronize it
    pub fn to_board(&self, spec: impl Into<Arc<BoardSpec>>) -> (Board, SyncReport) {
        let spec: Arc<BoardSpec> = spec.into();
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .cloned()
            .map(|record| record.into_task(&spec.layout))
            .collect();
        let (board, report) = Board::from_tasks(spec, tasks);
        (board.with_retro(self.retro.clone()), report)
    }

    /// Save board to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize board")?;

        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write board file {}", path.as_ref().display()))?;

        tracing::info!("Saved {} task(s) to {}", self.tasks.len(), path.as_ref().display());
        Ok(())
    }

    /// Load board from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read board file {}", path.as_ref().display()))?;

        let mut file: BoardFile =
            serde_json::from_str(&content).context("Failed to parse board file")?;

        if file.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Board file version {} differs from {}",
                file.version,
                FILE_FORMAT_VERSION
            );
        }

        // Update modified timestamp
        file.metadata.modified = Utc::now();

        Ok(file)
    }
}
