//! Tasks and task drafts.

use crate::footprint::Footprint;
use crate::layout::layout;
use serde::{Deserialize, Serialize};
use tetrikan_core::{Cell, DraftError, ShapeFamily, Status, TaskId};

/// Skill placeholder the creation form submits for unused slots.
pub const PLACEHOLDER_SKILL: &str = "None";

/// A task on the board.
///
/// The footprint always holds one block per skill (at least one). The
/// anchor is `None` until the task is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: String,
    pub skills: Vec<String>,
    pub shape: ShapeFamily,
    pub status: Status,
    pub anchor: Option<Cell>,
    pub footprint: Footprint,
}

impl Task {
    /// Creates an unplaced task in the default band with the canonical
    /// footprint for its shape and skill count.
    pub fn new(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        shape: ShapeFamily,
        skills: Vec<String>,
    ) -> Self {
        let footprint = layout(shape, skills.len());
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            company: String::new(),
            skills,
            shape,
            status: Status::default(),
            anchor: None,
            footprint,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_anchor(mut self, anchor: Cell) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_details(mut self, description: impl Into<String>, company: impl Into<String>) -> Self {
        self.description = description.into();
        self.company = company.into();
        self
    }

    /// Blocks currently covered by the footprint.
    pub fn block_count(&self) -> usize {
        self.footprint.len()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn is_placed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Absolute cells covered on the grid; empty while unplaced.
    pub fn absolute_cells(&self) -> Vec<Cell> {
        match self.anchor {
            Some(anchor) => self.footprint.cells_at(anchor).flatten().collect(),
            None => Vec::new(),
        }
    }
}

/// Task creation input, as submitted by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub shape: Option<ShapeFamily>,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    pub fn with_shape(mut self, shape: ShapeFamily) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Trims the name, drops blank and placeholder skills, and checks limits.
    ///
    /// A single skill is enough and the description may be empty.
    pub fn validate(mut self, max_skills: usize) -> Result<Self, DraftError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        self.skills = self
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != PLACEHOLDER_SKILL)
            .collect();

        if self.skills.is_empty() {
            return Err(DraftError::NoSkills);
        }
        if self.skills.len() > max_skills {
            return Err(DraftError::TooManySkills {
                max: max_skills,
                count: self.skills.len(),
            });
        }
        Ok(self)
    }
}
