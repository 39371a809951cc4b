use tetrikan_core::{Offset, ShapeFamily};
use tetrikan_engine::layout;

fn offsets(points: &[(usize, usize)]) -> Vec<Offset> {
    points.iter().map(|p| Offset::new(p.0, p.1)).collect()
}

#[test]
fn test_i_three_blocks() {
    let fp = layout(ShapeFamily::I, 3);
    assert_eq!(fp.offsets(), offsets(&[(0, 0), (1, 0), (2, 0)]).as_slice());
}

#[test]
fn test_o_five_blocks() {
    let fp = layout(ShapeFamily::O, 5);
    assert_eq!(
        fp.offsets(),
        offsets(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]).as_slice()
    );
    assert_eq!(fp.extent(), (3, 2));
}

#[test]
fn test_layout_is_deterministic() {
    for shape in ShapeFamily::ALL {
        for count in 1..=12 {
            assert_eq!(layout(shape, count), layout(shape, count));
        }
    }
}

#[test]
fn test_o_squares_grow() {
    assert_eq!(layout(ShapeFamily::O, 9).extent(), (3, 3));
    assert_eq!(layout(ShapeFamily::O, 10).extent(), (4, 3));
}
