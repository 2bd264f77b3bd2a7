//! Generation stepper: applies Conway's rule to build next from current.

use crate::field::{Field, count_neighbors};

/// Conway's B3/S23 rule.
///
/// A dead cell with exactly 3 neighbors is born; a live cell with 2 or 3
/// neighbors survives; everything else is dead.
#[inline]
pub const fn rule(
    alive: bool,
    neighbors: u8,
) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Compute the next generation into the field's next grid.
///
/// Reads only the current grid. Returns the number of cells whose state
/// differs between current and the newly written next; `0` means the
/// population has reached a fixed point.
pub fn step<const N: usize>(field: &mut Field<N>) -> usize {
    let (width, height) = (field.width(), field.height());
    let (current, next) = field.split_mut();
    let mut changed = 0;

    for x in 0..width {
        let col = x * height;
        for y in 0..height {
            let alive = current[col + y];
            let cell = rule(alive, count_neighbors(current, width, height, x, y));
            next[col + y] = cell;
            if cell != alive {
                changed += 1;
            }
        }
    }

    changed
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded<const N: usize>(
        width: usize,
        height: usize,
        cells: &[(usize, usize)],
    ) -> Field<N> {
        let mut field = Field::new(width, height).unwrap();
        for &(x, y) in cells {
            field.set_next(x, y, true);
        }
        field.swap();
        field
    }

    fn next_cells<const N: usize>(field: &Field<N>) -> std::vec::Vec<bool> { field.next().to_vec() }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(rule(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(rule(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut field: Field<36> = seeded(6, 6, &[(2, 2)]);
        assert_eq!(step(&mut field), 1);
        assert!(!field.is_alive_next(2, 2));
    }

    #[test]
    fn test_pair_dies() {
        let mut field: Field<36> = seeded(6, 6, &[(2, 2), (2, 3)]);
        assert_eq!(step(&mut field), 2);
        assert_eq!(field.live_count(), 0);
    }

    #[test]
    fn test_block_is_fixed_point() {
        let mut field: Field<36> = seeded(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        for _ in 0..4 {
            assert_eq!(step(&mut field), 0);
            assert_eq!(field.next(), field.current());
            field.swap();
        }
    }

    #[test]
    fn test_blinker_has_period_two() {
        let mut field: Field<36> = seeded(6, 6, &[(1, 2), (2, 2), (3, 2)]);
        let start = field.current().to_vec();

        assert_eq!(step(&mut field), 4);
        assert!(field.is_alive_next(2, 1));
        assert!(field.is_alive_next(2, 2));
        assert!(field.is_alive_next(2, 3));
        assert_eq!(field.live_count(), 3);
        field.swap();

        assert_eq!(step(&mut field), 4);
        assert_eq!(next_cells(&field), start);
    }

    #[test]
    fn test_step_does_not_touch_current() {
        let mut field: Field<36> = seeded(6, 6, &[(1, 2), (2, 2), (3, 2)]);
        let before = field.current().to_vec();
        step(&mut field);
        assert_eq!(field.current(), &before[..]);
    }

    #[test]
    fn test_birth_across_the_wrap() {
        // Three cells on the left edge give birth on the right edge.
        let mut field: Field<36> = seeded(6, 6, &[(0, 1), (0, 2), (0, 3)]);
        step(&mut field);
        assert!(field.is_alive_next(5, 2));
        assert!(field.is_alive_next(1, 2));
    }

    #[test]
    fn test_glider_returns_shifted_after_four_generations() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut field: Field<64> = seeded(8, 8, &glider);
        for _ in 0..4 {
            assert!(step(&mut field) > 0);
            field.swap();
        }
        for &(x, y) in &glider {
            assert!(field.is_alive(x + 1, y + 1));
        }
        assert_eq!(field.current().iter().filter(|&&c| c).count(), 5);
    }
}
