//! Property tests for the shared-wall consistency check.
use maze_encoding::validate::{check_cell, validate, violations};
use maze_encoding::{Grid, Side, Walls};
use proptest::prelude::*;

fn arb_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(0u8..16, width), height)
    })
}

/// Rows where every shared edge is consistent: each wall bit facing a
/// neighbour is copied from that neighbour.
fn arb_consistent_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    arb_rows().prop_map(|mut rows| {
        let height = rows.len();
        let width = rows[0].len();
        for r in 0..height {
            for c in 0..width {
                if c + 1 < width {
                    let right = (rows[r][c + 1] >> 3) & 1;
                    rows[r][c] = (rows[r][c] & !0b0010) | (right << 1);
                }
                if r + 1 < height {
                    let below = rows[r + 1][c] & 1;
                    rows[r][c] = (rows[r][c] & !0b0100) | (below << 2);
                }
            }
        }
        rows
    })
}

fn to_text(rows: &[Vec<u8>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&v| Walls::new(v).unwrap().to_hex_digit())
                .collect::<String>()
                + "\n"
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Agreeing neighbours never produce a violation on either side.
    #[test]
    fn agreeing_edges_are_never_reported(rows in arb_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        for r in 0..grid.height() {
            for c in 0..grid.width() {
                let cell = grid.get(c, r).unwrap();
                let failed = check_cell(&grid, c, r);
                for side in Side::ALL {
                    if let Some(n) = grid.neighbour(c, r, side) {
                        prop_assert_eq!(
                            failed.contains(&side),
                            cell.has(side) != n.has(side.opposite())
                        );
                    }
                }
            }
        }
    }

    /// Sides pointing off the grid are never checked.
    #[test]
    fn boundary_sides_are_never_reported(rows in arb_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        for v in validate(&grid) {
            if v.row == 0 {
                prop_assert!(!v.sides.contains(&Side::Top));
            }
            if v.row + 1 == grid.height() {
                prop_assert!(!v.sides.contains(&Side::Bottom));
            }
            if v.column == 0 {
                prop_assert!(!v.sides.contains(&Side::Left));
            }
            if v.column + 1 == grid.width() {
                prop_assert!(!v.sides.contains(&Side::Right));
            }
        }
    }

    /// A mismatch on a shared edge is seen from both cells.
    #[test]
    fn mismatches_are_reported_on_both_cells(rows in arb_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        for v in validate(&grid) {
            for &side in &v.sides {
                let (dx, dy) = side.offset();
                let c = v.column.checked_add_signed(dx).unwrap();
                let r = v.row.checked_add_signed(dy).unwrap();
                prop_assert!(check_cell(&grid, c, r).contains(&side.opposite()));
            }
        }
    }

    #[test]
    fn consistent_grids_have_no_violations(rows in arb_consistent_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        prop_assert!(validate(&grid).is_empty());
    }

    /// Reports are unique per cell and strictly increasing in row-major order.
    #[test]
    fn reports_are_row_major_and_unique(rows in arb_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let keys: Vec<(usize, usize)> = validate(&grid).iter().map(|v| (v.row, v.column)).collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn validation_is_deterministic(rows in arb_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let first = validate(&grid);
        let second: Vec<_> = violations(&grid).collect();
        prop_assert_eq!(first, second);
    }

    /// Parsing the textual form gives the same grid as building from rows.
    #[test]
    fn text_and_rows_agree(rows in arb_rows()) {
        let parsed: Grid = to_text(&rows).parse().unwrap();
        prop_assert_eq!(parsed, Grid::from_rows(&rows).unwrap());
    }
}
