use tetrikan_core::{DraftError, ShapeFamily, Status};
use tetrikan_engine::{Board, BoardSpec, TaskDraft};

#[test]
fn test_insert_uses_shape_hint() {
    let (board, _) = Board::demo(BoardSpec::default());
    let inserted = board
        .insert_task(
            TaskDraft::new("Refactor parser")
                .with_skill("Rust")
                .with_skill("Parsing")
                .with_skill("None")
                .with_shape(ShapeFamily::Z),
        )
        .unwrap();
    let task = inserted.board.task(&inserted.task).unwrap();
    assert_eq!(task.shape, ShapeFamily::Z);
    assert_eq!(task.skills, vec!["Rust".to_string(), "Parsing".to_string()]);
    assert_eq!(task.block_count(), 2);
    assert_eq!(task.status, Status::Todo);
    assert!(task.anchor.unwrap().y < 3);
    assert_eq!(inserted.board.task_count(), 8);
    assert_eq!(inserted.board.verify(), Ok(()));
    // The source snapshot is untouched.
    assert_eq!(board.task_count(), 7);
}

#[test]
fn test_insert_cycles_shapes() {
    let mut board = Board::new(BoardSpec::default());
    let mut shapes = Vec::new();
    for i in 0..8 {
        let inserted = board
            .insert_task(TaskDraft::new(format!("task {}", i)).with_skill("x"))
            .unwrap();
        shapes.push(inserted.board.task(&inserted.task).unwrap().shape);
        board = inserted.board;
    }
    assert_eq!(&shapes[..7], &ShapeFamily::ALL);
    assert_eq!(shapes[7], shapes[0]);
}

#[test]
fn test_insert_respects_max_skills() {
    let spec = BoardSpec {
        max_skills: 2,
        ..BoardSpec::default()
    };
    let board = Board::new(spec);
    let draft = TaskDraft::new("big")
        .with_skill("a")
        .with_skill("b")
        .with_skill("c");
    assert_eq!(
        board.insert_task(draft).unwrap_err(),
        DraftError::TooManySkills { max: 2, count: 3 }
    );
}
