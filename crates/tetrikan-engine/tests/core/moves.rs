use tetrikan_core::{Cell, PlacementError, ShapeFamily, Status, TaskId};
use tetrikan_engine::{Board, BoardSpec, Task};

fn demo() -> Board {
    Board::demo(BoardSpec::default()).0
}

#[test]
fn test_move_to_own_anchor_is_noop() {
    let board = demo();
    let id = TaskId::new("3");
    let anchor = board.task(&id).unwrap().anchor.unwrap();
    let t = board.move_task(&id, anchor);
    let report = t.result.unwrap();
    assert_eq!(report.from, Some(anchor));
    assert_eq!(report.to, anchor);
    assert_eq!(t.board.grid(), board.grid());
    assert_eq!(t.board.generation(), board.generation());
    assert_eq!(t.board.locate(&id), board.locate(&id));
}

#[test]
fn test_move_changes_status_with_band() {
    let board = demo();
    let id = TaskId::new("1");
    let t = board.move_task(&id, Cell::new(5, 10));
    let report = t.result.unwrap();
    assert_eq!(report.status, Status::Done);
    assert_eq!(report.to, Cell::new(5, 10));
    let moved = t.board.task(&id).unwrap();
    assert_eq!(moved.status, Status::Done);
    assert!(t.board.tasks_in(Status::Done).iter().any(|task| task.id == id));
    assert!(t.board.tasks_in(Status::Todo).iter().all(|task| task.id != id));
    for cell in board.task(&id).unwrap().absolute_cells() {
        assert_ne!(t.board.grid().get(cell), Some(&id));
    }
    assert_eq!(t.board.verify(), Ok(()));
}

#[test]
fn test_short_move_may_overlap_own_cells() {
    let (board, _) = Board::from_tasks(
        BoardSpec::default(),
        vec![Task::new("a", "a", ShapeFamily::I, vec!["x".into(); 3]).with_anchor(Cell::new(0, 0))],
    );
    let t = board.move_task(&TaskId::new("a"), Cell::new(1, 0));
    assert_eq!(t.result.unwrap().to, Cell::new(1, 0));
    assert!(!t.board.grid().is_occupied(Cell::new(0, 0)));
    assert!(t.board.grid().is_occupied(Cell::new(3, 0)));
}

#[test]
fn test_move_without_room_leaves_board_unchanged() {
    let mut tasks: Vec<Task> = (0..30)
        .map(|i| {
            Task::new(format!("d{}", i), "d", ShapeFamily::O, vec!["x".into()])
                .with_status(Status::Done)
                .with_anchor(Cell::new(i % 10, 9 + i / 10))
        })
        .collect();
    tasks.push(Task::new("m", "m", ShapeFamily::I, vec!["x".into()]).with_anchor(Cell::new(0, 0)));
    let (board, _) = Board::from_tasks(BoardSpec::default(), tasks);

    let t = board.move_task(&TaskId::new("m"), Cell::new(4, 10));
    assert!(matches!(
        t.result,
        Err(PlacementError::NoValidAnchor { status: Status::Done, .. })
    ));
    assert_eq!(t.board.generation(), board.generation());
    assert_eq!(t.board.task(&TaskId::new("m")).unwrap().anchor, Some(Cell::new(0, 0)));
}

#[test]
fn test_move_unknown_task_resynchronizes() {
    let board = demo();
    let t = board.move_task(&TaskId::new("missing"), Cell::new(0, 0));
    assert_eq!(
        t.result,
        Err(PlacementError::TaskNotFound {
            task: TaskId::new("missing")
        })
    );
    assert_eq!(t.board.task_count(), 7);
    assert_eq!(t.board.verify(), Ok(()));
}
