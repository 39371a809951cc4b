use super::{Board, BoardSpec, SyncReport};
use crate::task::Task;
use std::sync::Arc;
use tetrikan_core::{ShapeFamily, Status};

/// `(id, name, shape, status, skills)` for the sample board.
const SAMPLE_TASKS: [(&str, &str, ShapeFamily, Status, &[&str]); 7] = [
    ("1", "Create UI Components", ShapeFamily::I, Status::Todo, &["React", "CSS", "HTML"]),
    ("2", "Implement API", ShapeFamily::L, Status::Todo, &["Node.js", "Express", "MongoDB", "REST"]),
    ("3", "Design Database", ShapeFamily::T, Status::InProgress, &["MongoDB", "Schema Design"]),
    (
        "4",
        "Write Tests",
        ShapeFamily::O,
        Status::InProgress,
        &["Jest", "Testing", "Cypress", "QA", "Documentation"],
    ),
    ("5", "Deploy Application", ShapeFamily::Z, Status::Done, &["DevOps", "AWS", "CI/CD"]),
    ("6", "Security Review", ShapeFamily::J, Status::Test, &["Auth", "Encryption"]),
    (
        "7",
        "Performance Optimization",
        ShapeFamily::S,
        Status::Test,
        &["Webpack", "Code Splitting", "Lazy Loading", "Caching"],
    ),
];

impl Board {
    /// The seven-task sample board, one task per shape family, synchronized.
    pub fn demo(spec: impl Into<Arc<BoardSpec>>) -> (Board, SyncReport) {
        let tasks = SAMPLE_TASKS.iter().map(|(id, name, shape, status, skills)| {
            Task::new(*id, *name, *shape, skills.iter().map(|s| s.to_string()).collect())
                .with_details("Tests", "Intern")
                .with_status(*status)
        });
        Board::from_tasks(spec, tasks)
    }
}
