use tetrikan_core::{Cell, PlacementError, ShapeFamily, Status, TaskId};
use tetrikan_engine::{Board, BoardSpec, Task};

fn single(id: &str, shape: ShapeFamily, blocks: usize, anchor: Cell) -> Board {
    let task = Task::new(id, id, shape, (0..blocks).map(|i| format!("s{}", i)).collect())
        .with_status(Status::InProgress)
        .with_anchor(anchor);
    Board::from_tasks(BoardSpec::default(), vec![task]).0
}

#[test]
fn test_four_rotations_restore_footprint() {
    let board = single("t", ShapeFamily::T, 4, Cell::new(3, 3));
    let id = TaskId::new("t");
    let original = board.task(&id).unwrap().footprint.clone();

    let mut current = board;
    for _ in 0..4 {
        let t = current.rotate_task(&id);
        assert!(t.is_ok());
        current = t.board;
    }
    assert!(current.task(&id).unwrap().footprint.same_cells(&original));
    assert_eq!(current.task(&id).unwrap().anchor, Some(Cell::new(3, 3)));
}

#[test]
fn test_rotation_blocked_by_neighbor() {
    let blocker = Task::new("b", "b", ShapeFamily::I, vec!["x".into()])
        .with_status(Status::InProgress)
        .with_anchor(Cell::new(0, 4));
    let bar = Task::new("a", "a", ShapeFamily::I, vec!["x".into(); 3])
        .with_status(Status::InProgress)
        .with_anchor(Cell::new(0, 3));
    let (board, _) = Board::from_tasks(BoardSpec::default(), vec![bar, blocker]);

    let t = board.rotate_task(&TaskId::new("a"));
    assert_eq!(
        t.result,
        Err(PlacementError::InvalidRotation {
            task: TaskId::new("a")
        })
    );
    assert!(t.result.as_ref().unwrap_err().is_expected());
    assert_eq!(t.board.grid(), board.grid());
}

#[test]
fn test_rotation_of_unplaced_task() {
    let task = Task::new("u", "u", ShapeFamily::I, vec!["x".into(); 60]);
    let (board, report) = Board::from_tasks(BoardSpec::default(), vec![task]);
    assert!(!report.is_complete());
    let t = board.rotate_task(&TaskId::new("u"));
    assert!(matches!(t.result, Err(PlacementError::NotPlaced { .. })));
}

#[test]
fn test_rotation_keeps_block_count() {
    for shape in ShapeFamily::ALL {
        let board = single("x", shape, 5, Cell::new(4, 3));
        let t = board.rotate_task(&TaskId::new("x"));
        let after = t.board.task(&TaskId::new("x")).unwrap();
        assert_eq!(after.block_count(), 5, "{}", shape);
        assert_eq!(t.board.verify(), Ok(()));
    }
}
