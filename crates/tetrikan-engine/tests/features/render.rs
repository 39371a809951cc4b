use tetrikan_core::{BandLayout, Cell, Status};
use tetrikan_engine::{band_headers, block_geometry, Board, BoardSpec, DEFAULT_CELL_SIZE};

#[test]
fn test_geometry_covers_every_placed_block() {
    let (board, _) = Board::demo(BoardSpec::default());
    let geometry = block_geometry(&board, DEFAULT_CELL_SIZE);
    assert_eq!(geometry.len(), 7);

    let total: usize = geometry.iter().map(|g| g.rects.len()).sum();
    assert_eq!(total, board.grid().occupied_count());

    for block in &geometry {
        let task = board.task(&block.task).unwrap();
        let anchor = task.anchor.unwrap();
        for (rect, offset) in block.rects.iter().zip(task.footprint.iter()) {
            assert_eq!(rect.x as usize, (anchor.x + offset.dx) * 50);
            assert_eq!(rect.y as usize, (anchor.y + offset.dy) * 50);
        }
    }
}

#[test]
fn test_headers_follow_layout() {
    let headers = band_headers(&BandLayout::standard(), 40);
    let titles: Vec<&str> = headers.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Testing", "Done"]);
    assert_eq!(headers[0].status, Status::Todo);
    assert_eq!((headers[2].top, headers[2].bottom), (240, 360));
}

#[test]
fn test_unplaced_tasks_have_no_geometry() {
    let board = Board::new(BoardSpec::default());
    assert!(block_geometry(&board, 50).is_empty());
    assert!(board.task_at(Cell::new(0, 0)).is_none());
}
