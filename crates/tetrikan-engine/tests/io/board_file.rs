use tempfile::tempdir;
use tetrikan_core::{Cell, ShapeFamily, Status, TaskId};
use tetrikan_engine::{Board, BoardFile, BoardSpec, Task};

#[test]
fn test_save_and_load_board() {
    let (board, _) = Board::demo(BoardSpec::default());
    let moved = board.move_task(&TaskId::new("4"), Cell::new(5, 10)).board;

    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");
    BoardFile::from_board("Sprint", &moved).save_to_file(&path).unwrap();

    let file = BoardFile::load_from_file(&path).unwrap();
    assert_eq!(file.metadata.name, "Sprint");
    assert_eq!(file.tasks.len(), 7);

    let (loaded, report) = file.to_board(BoardSpec::default());
    assert_eq!(report.kept, 7);
    assert_eq!(loaded.grid(), moved.grid());
    let task = loaded.task(&TaskId::new("4")).unwrap();
    assert_eq!(task.status, Status::Done);
    assert_eq!(task.name, "Write Tests");
    assert_eq!(task.company, "Intern");
}

#[test]
fn test_retro_survives_round_trip() {
    let tasks: Vec<Task> = (0..10)
        .map(|x| {
            Task::new(format!("r{}", x), "r", ShapeFamily::I, vec!["x".into()])
                .with_status(Status::Done)
                .with_anchor(Cell::new(x, 11))
        })
        .collect();
    let (board, _) = Board::from_tasks(BoardSpec::default(), tasks);
    let (cleared, _) = board.clear_completed_rows();

    let dir = tempdir().unwrap();
    let path = dir.path().join("retro.json");
    BoardFile::from_board("retro", &cleared).save_to_file(&path).unwrap();
    let (loaded, _) = BoardFile::load_from_file(&path)
        .unwrap()
        .to_board(BoardSpec::default());
    assert_eq!(loaded.retro(), cleared.retro());
    assert_eq!(loaded.task_count(), 0);
}

#[test]
fn test_minimal_task_list_loads() {
    let json = r#"{
        "version": "1.0",
        "metadata": {
            "name": "hand written",
            "created": "2024-01-01T00:00:00Z",
            "modified": "2024-01-01T00:00:00Z"
        },
        "tasks": [
            {"id": "a", "name": "A", "skills": ["x", "y"], "shape": "L", "status": "in_progress"},
            {"id": "b", "name": "B", "skills": ["x"], "shape": "O", "status": "in_progress",
             "anchor": {"x": 40, "y": 40}}
        ]
    }"#;
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, json).unwrap();

    let (board, report) = BoardFile::load_from_file(&path)
        .unwrap()
        .to_board(BoardSpec::default());
    assert!(report.is_complete());
    assert!(report.displaced.is_empty());
    assert_eq!(report.auto_placed.len(), 2);
    assert_eq!(board.placed_count(), 2);
    assert!(board.retro().is_empty());
}

#[test]
fn test_anchor_at_coordinate_limit_is_replaced() {
    let json = format!(
        r#"{{
        "version": "1.0",
        "metadata": {{
            "name": "corrupt",
            "created": "2024-01-01T00:00:00Z",
            "modified": "2024-01-01T00:00:00Z"
        }},
        "tasks": [
            {{"id": "wide", "name": "W", "skills": ["x", "y"], "shape": "I", "status": "todo",
             "anchor": {{"x": {}, "y": 0}},
             "footprint": [{{"dx": 1, "dy": 0}}, {{"dx": 0, "dy": 0}}]}}
        ]
    }}"#,
        usize::MAX
    );
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, json).unwrap();

    let (board, report) = BoardFile::load_from_file(&path)
        .unwrap()
        .to_board(BoardSpec::default());
    assert!(report.is_complete());
    assert_eq!(board.verify(), Ok(()));
    let task = board.task(&TaskId::new("wide")).unwrap();
    assert!(task.anchor.is_some_and(|a| a.y < 3));
    assert_eq!(task.block_count(), 2);
}

#[test]
fn test_huge_footprint_offset_is_rejected() {
    let json = format!(
        r#"{{
        "version": "1.0",
        "metadata": {{
            "name": "corrupt",
            "created": "2024-01-01T00:00:00Z",
            "modified": "2024-01-01T00:00:00Z"
        }},
        "tasks": [
            {{"id": "t", "name": "T", "skills": ["x", "y"], "shape": "I", "status": "todo",
             "footprint": [{{"dx": {}, "dy": 0}}, {{"dx": 0, "dy": 0}}]}}
        ]
    }}"#,
        usize::MAX
    );
    let dir = tempdir().unwrap();
    let path = dir.path().join("offsets.json");
    std::fs::write(&path, json).unwrap();

    let err = BoardFile::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse board file"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = BoardFile::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read board file"));
}
