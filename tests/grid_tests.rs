//! Grid tests - construction, swap, collapse and refill

use tui_wordfall::core::{CycleLetters, Grid, GridError, LetterWeights, SwapError, WeightedLetters};
use tui_wordfall::types::{Letter, Pos};

fn abc() -> Grid {
    Grid::from_rows(&["ABC", "DEF", "GHI"]).unwrap()
}

#[test]
fn test_create_fills_every_cell() {
    let mut letters = WeightedLetters::new(&LetterWeights::default(), 42).unwrap();
    let grid = Grid::create(12, &mut letters);

    assert_eq!(grid.size(), 12);
    assert_eq!(grid.cells().len(), 144);
    assert!(grid.is_settled());
    // Z has weight zero in the reference table.
    assert!(grid.cells().iter().all(|c| *c != Letter::from_char('Z')));
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert_eq!(
        Grid::from_rows(&["AB", "C"]),
        Err(GridError::Ragged {
            row: 1,
            found: 1,
            expected: 2
        })
    );
    assert_eq!(
        Grid::from_rows(&["ABC", "DEF"]),
        Err(GridError::NotSquare { rows: 2, cols: 3 })
    );
    assert_eq!(
        Grid::from_rows(&["AB", "C1"]),
        Err(GridError::BadLetter {
            ch: '1',
            pos: Pos::new(1, 1)
        })
    );
}

#[test]
fn test_from_rows_accepts_lowercase_and_gaps() {
    let grid = Grid::from_rows(&["ab", "c."]).unwrap();
    assert_eq!(grid.to_string(), "AB\nC.");
    assert!(!grid.is_settled());
    assert_eq!(grid.get(Pos::new(1, 1)), Some(None));
    assert_eq!(grid.get(Pos::new(2, 0)), None);
}

#[test]
fn test_swap_is_self_inverse() {
    let original = abc();
    let mut grid = original.clone();

    grid.swap(Pos::new(1, 1), Pos::new(1, 2)).unwrap();
    assert_eq!(grid.to_string(), "ABC\nDFE\nGHI");
    grid.swap(Pos::new(1, 1), Pos::new(1, 2)).unwrap();
    assert_eq!(grid, original);

    // Order of the pair does not matter.
    grid.swap(Pos::new(2, 0), Pos::new(1, 0)).unwrap();
    grid.swap(Pos::new(1, 0), Pos::new(2, 0)).unwrap();
    assert_eq!(grid, original);
}

#[test]
fn test_swap_rejects_non_adjacent() {
    let mut grid = abc();
    let original = grid.clone();

    assert_eq!(
        grid.swap(Pos::new(0, 0), Pos::new(0, 2)),
        Err(SwapError::NotAdjacent(Pos::new(0, 0), Pos::new(0, 2)))
    );
    assert_eq!(
        grid.swap(Pos::new(0, 0), Pos::new(1, 1)),
        Err(SwapError::NotAdjacent(Pos::new(0, 0), Pos::new(1, 1)))
    );
    assert_eq!(
        grid.swap(Pos::new(1, 1), Pos::new(1, 1)),
        Err(SwapError::NotAdjacent(Pos::new(1, 1), Pos::new(1, 1)))
    );
    assert_eq!(grid, original);
}

#[test]
fn test_swap_rejects_out_of_bounds() {
    let mut grid = abc();
    assert_eq!(
        grid.swap(Pos::new(2, 2), Pos::new(2, 3)),
        Err(SwapError::OutOfBounds(Pos::new(2, 3)))
    );
    assert_eq!(grid, abc());
}

#[test]
fn test_collapse_is_stable_per_column() {
    let mut grid = Grid::from_rows(&["A.C", ".B.", "D.E"]).unwrap();
    let moved = grid.collapse();

    assert_eq!(grid.to_string(), "...\nA.C\nDBE");
    assert_eq!(moved, 3);
}

#[test]
fn test_collapse_keeps_order_of_survivors() {
    let mut grid = Grid::from_rows(&["A...", "B...", "....", "C..."]).unwrap();
    grid.collapse();
    assert_eq!(grid.to_string(), "....\nA...\nB...\nC...");
}

#[test]
fn test_refill_fills_empties_in_row_major_order() {
    let mut grid = Grid::from_rows(&["...", "A.C", "DBE"]).unwrap();
    let filled = grid.refill(&mut CycleLetters::new("XYZ"));

    assert_eq!(
        filled,
        vec![
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(0, 2),
            Pos::new(1, 1)
        ]
    );
    assert_eq!(grid.to_string(), "XYZ\nAXC\nDBE");
    assert!(grid.is_settled());
}

#[test]
fn test_clear_cells() {
    let mut grid = abc();
    grid.clear_cells(&[Pos::new(0, 0), Pos::new(2, 2)]);
    assert_eq!(grid.to_string(), ".BC\nDEF\nGH.");
}
