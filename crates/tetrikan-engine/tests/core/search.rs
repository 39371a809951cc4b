use tetrikan_core::{Band, Cell, ShapeFamily, Status, TaskId};
use tetrikan_engine::{find_nearest_anchor, layout, Footprint, Grid, SearchLimits};

fn wall(grid: &mut Grid, cells: impl IntoIterator<Item = (usize, usize)>) {
    let id = TaskId::new("wall");
    for (x, y) in cells {
        grid.stamp(Cell::new(x, y), &Footprint::single(), &id);
    }
}

#[test]
fn test_finds_gap_for_whole_footprint() {
    let mut grid = Grid::new(10, 12);
    let band = Band::new(Status::Done, "Done", 9, 12);
    // Leave a 2x2 hole at (6, 10).
    wall(
        &mut grid,
        (9..12)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|(x, y)| !((6..8).contains(x) && (10..12).contains(y))),
    );
    let square = layout(ShapeFamily::O, 4);
    let found = find_nearest_anchor(
        &grid,
        Cell::new(4, 10),
        &square,
        &band,
        None,
        &SearchLimits::default(),
    );
    assert_eq!(found, Some(Cell::new(6, 10)));
}

#[test]
fn test_returns_none_on_full_band_within_bound() {
    let mut grid = Grid::new(10, 12);
    let band = Band::new(Status::Todo, "To Do", 0, 3);
    wall(&mut grid, (0..3).flat_map(|y| (0..10).map(move |x| (x, y))));
    for x in 0..10 {
        assert_eq!(
            find_nearest_anchor(
                &grid,
                Cell::new(x, 1),
                &Footprint::single(),
                &band,
                None,
                &SearchLimits::default()
            ),
            None
        );
    }
}

#[test]
fn test_tight_limits() {
    let mut grid = Grid::new(10, 3);
    let band = Band::new(Status::Todo, "To Do", 0, 3);
    wall(&mut grid, (0..3).flat_map(|y| (0..10).map(move |x| (x, y))).filter(|(x, _)| *x != 9));
    let limits = SearchLimits {
        max_candidates: 1,
        settle_distance: 0,
        max_distance: 2,
    };
    let fp = Footprint::single();
    assert_eq!(find_nearest_anchor(&grid, Cell::new(7, 1), &fp, &band, None, &limits), Some(Cell::new(9, 1)));
    assert_eq!(find_nearest_anchor(&grid, Cell::new(6, 1), &fp, &band, None, &limits), None);
}
