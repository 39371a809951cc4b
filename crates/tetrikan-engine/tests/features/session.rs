use tetrikan_core::{BoardEvent, Cell, ShapeFamily, Status, TaskId};
use tetrikan_engine::{Board, BoardSession, BoardSpec, InputEvent, Outcome, Task, TaskDraft};

fn nearly_full_bottom_row() -> BoardSession {
    let mut tasks: Vec<Task> = (1..10)
        .map(|x| {
            Task::new(format!("r{}", x), "r", ShapeFamily::O, vec!["x".into()])
                .with_status(Status::Done)
                .with_anchor(Cell::new(x, 11))
        })
        .collect();
    tasks.push(Task::new("last", "last", ShapeFamily::O, vec!["x".into()]).with_anchor(Cell::new(0, 0)));
    let (board, _) = Board::from_tasks(BoardSpec::default(), tasks);
    BoardSession::new(board)
}

#[test]
fn test_drop_completing_row_clears_it() {
    let mut session = nearly_full_bottom_row();
    let mut rx = session.subscribe();
    let outcome = session
        .handle(InputEvent::Drop {
            task: TaskId::new("last"),
            cell: Cell::new(0, 11),
        })
        .unwrap();

    let Outcome::Moved { report, cleared } = outcome else {
        panic!("expected a move");
    };
    assert_eq!(report.to, Cell::new(0, 11));
    assert_eq!(cleared.rows, vec![11]);
    assert_eq!(cleared.removed.len(), 10);
    assert_eq!(session.board().task_count(), 0);
    assert_eq!(session.board().retro().removed_blocks.len(), 10);

    let events: Vec<BoardEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert!(matches!(events[0], BoardEvent::TaskMoved { .. }));
    assert!(matches!(events[1], BoardEvent::RowsCleared { removed: 10, .. }));
    assert_eq!(
        events[2],
        BoardEvent::SnapshotPublished {
            generation: session.board().generation()
        }
    );
}

#[test]
fn test_row_clear_can_be_deferred() {
    let mut session = nearly_full_bottom_row();
    session.set_clear_rows_after_transaction(false);
    session
        .handle(InputEvent::Drop {
            task: TaskId::new("last"),
            cell: Cell::new(0, 11),
        })
        .unwrap();
    assert!(session.board().grid().row_is_full(11));

    let outcome = session.handle(InputEvent::ClearRows).unwrap();
    assert!(matches!(outcome, Outcome::RowsCleared(ref r) if r.rows == vec![11]));
    assert!(!session.board().grid().row_is_full(11));
}

#[test]
fn test_rotate_click_and_unknown_task() {
    let (board, _) = Board::demo(BoardSpec::default());
    let mut session = BoardSession::new(board);
    let mut rx = session.subscribe();

    let outcome = session
        .handle(InputEvent::Click {
            task: TaskId::new("1"),
            rotate_modifier: true,
        })
        .unwrap();
    assert!(matches!(outcome, Outcome::Rotated { .. }));
    assert_eq!(rx.try_recv().unwrap(), BoardEvent::TaskRotated(TaskId::new("1")));

    let before = session.board().generation();
    let err = session
        .handle(InputEvent::Click {
            task: TaskId::new("nope"),
            rotate_modifier: true,
        })
        .unwrap_err();
    assert!(err.is_placement_error());
    assert_eq!(session.board().generation(), before + 1);
    assert_eq!(session.board().task_count(), 7);
}

#[test]
fn test_generations_increase() {
    let mut session = BoardSession::with_spec(BoardSpec::default());
    let mut last = session.board().generation();
    for name in ["a", "b", "c"] {
        session
            .handle(InputEvent::Create(TaskDraft::new(name).with_skill("x")))
            .unwrap();
        assert!(session.board().generation() > last);
        last = session.board().generation();
    }
    session.handle(InputEvent::Repair).unwrap();
    assert!(session.board().generation() > last);
}
