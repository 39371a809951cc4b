use tetrikan_core::{Cell, PlacementError, ShapeFamily, Status, TaskId};
use tetrikan_engine::{Board, BoardSpec, Task};

fn task(id: &str, shape: ShapeFamily, blocks: usize, status: Status) -> Task {
    Task::new(id, id, shape, (0..blocks).map(|i| format!("s{}", i)).collect()).with_status(status)
}

#[test]
fn test_synchronize_is_stable() {
    let (board, _) = Board::demo(BoardSpec::default());
    let (again, report) = board.synchronize();
    assert_eq!(report.kept, 7);
    assert!(report.auto_placed.is_empty());
    assert_eq!(again.grid(), board.grid());
    assert_eq!(again.generation(), board.generation() + 1);
}

#[test]
fn test_auto_placement_stays_in_band() {
    let tasks: Vec<Task> = (0..6)
        .map(|i| task(&format!("d{}", i), ShapeFamily::ALL[i % 7], 2, Status::Done))
        .collect();
    let (board, report) = Board::from_tasks(BoardSpec::default(), tasks);
    assert!(report.is_complete());
    for task in board.tasks_in(Status::Done) {
        assert!(task.anchor.unwrap().y >= 9);
    }
    assert_eq!(board.verify(), Ok(()));
}

#[test]
fn test_overfull_band_reports_incomplete() {
    // Thirty-one single blocks cannot fit in thirty cells.
    let tasks: Vec<Task> = (0..31)
        .map(|i| task(&format!("t{}", i), ShapeFamily::O, 1, Status::Todo))
        .collect();
    let (board, report) = Board::from_tasks(BoardSpec::default(), tasks);
    assert_eq!(report.unplaced.len(), 1);
    assert_eq!(board.placed_count(), 30);
    assert!(board.grid().row_is_full(0));
    assert!(matches!(
        report.into_result(),
        Err(PlacementError::SynchronizationIncomplete { .. })
    ));
    assert_eq!(board.verify(), Ok(()));
}

#[test]
fn test_out_of_grid_anchor_is_replaced() {
    let stale = task("s", ShapeFamily::I, 4, Status::InProgress).with_anchor(Cell::new(8, 4));
    let (board, report) = Board::from_tasks(BoardSpec::default(), vec![stale]);
    assert_eq!(report.displaced, vec![TaskId::new("s")]);
    assert_eq!(board.task(&TaskId::new("s")).unwrap().anchor, Some(Cell::new(0, 3)));
}
