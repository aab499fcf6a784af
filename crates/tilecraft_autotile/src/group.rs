//! Rule group expansion: one authored rule into its rotated variants.

use crate::{AutotileError, AutotileRule, Rotation, RuleMatrix, TilesetPosition};

/// Expand a base rule into `amount` rotational variants.
///
/// The i-th variant's matrix is the base matrix rotated clockwise by `i`
/// quarter turns, and its display is the i-th cell of the 2×2 tileset block
/// starting at `display`, scanned clockwise from the top-left. Tilesets that
/// lay out a form's rotations this way can author the form once and expand it
/// here.
///
/// `amount` must be between 1 and 4 inclusive; anything else fails with
/// [`AutotileError::InvalidArgument`]. `amount == 1` skips rotation entirely
/// and returns the base rule untouched.
pub fn get_rule_group(
    matrix: RuleMatrix,
    display: TilesetPosition,
    amount: u32,
) -> Result<Vec<AutotileRule>, AutotileError> {
    if amount == 0 {
        return Err(AutotileError::InvalidArgument(
            "amount must be greater than 0".to_string(),
        ));
    }
    if amount > 4 {
        return Err(AutotileError::InvalidArgument(
            "amount must be less than or equal to 4".to_string(),
        ));
    }

    // Single-variant groups bypass the rotation cycle. Keep this branch
    // separate: the cycle's second display cell is a different convention
    // than a lone rule's neighbor slot.
    if amount == 1 {
        return Ok(vec![AutotileRule::new(matrix, display)]);
    }

    Ok(Rotation::CLOCKWISE
        .into_iter()
        .zip(display_cycle(display))
        .take(amount as usize)
        .map(|(rotation, position)| AutotileRule::new(matrix.rotated(rotation), position))
        .collect())
}

/// The 2×2 tileset block holding a form's four rotations, clockwise from the
/// top-left cell.
fn display_cycle(base: TilesetPosition) -> [TilesetPosition; 4] {
    let TilesetPosition { x, y } = base;
    [
        TilesetPosition::new(x, y),
        TilesetPosition::new(x + 1, y),
        TilesetPosition::new(x + 1, y + 1),
        TilesetPosition::new(x, y + 1),
    ]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellRule;

    fn lone_center() -> RuleMatrix {
        let mut cells = [[CellRule::Empty; 3]; 3];
        cells[1][1] = CellRule::Autotile;
        RuleMatrix::new(cells)
    }

    fn corner_marker() -> RuleMatrix {
        let mut cells = [[CellRule::Empty; 3]; 3];
        cells[0][0] = CellRule::SameType;
        RuleMatrix::new(cells)
    }

    #[test]
    fn returns_exactly_amount_rules() {
        for amount in 1..=4 {
            let group = get_rule_group(lone_center(), TilesetPosition::new(0, 0), amount).unwrap();
            assert_eq!(group.len() as u32, amount);
        }
    }

    #[test]
    fn amount_zero_is_rejected() {
        let err = get_rule_group(lone_center(), TilesetPosition::new(0, 0), 0).unwrap_err();
        assert_eq!(
            err,
            AutotileError::InvalidArgument("amount must be greater than 0".to_string())
        );
    }

    #[test]
    fn amount_five_is_rejected() {
        let err = get_rule_group(lone_center(), TilesetPosition::new(0, 0), 5).unwrap_err();
        assert_eq!(
            err,
            AutotileError::InvalidArgument("amount must be less than or equal to 4".to_string())
        );
    }

    #[test]
    fn first_variant_is_the_unrotated_base() {
        let base = corner_marker();
        let group = get_rule_group(base, TilesetPosition::new(4, 4), 4).unwrap();
        assert_eq!(group[0].matrix, base);
    }

    #[test]
    fn single_variant_keeps_base_matrix_and_display() {
        let base = corner_marker();
        let group = get_rule_group(base, TilesetPosition::new(0, 0), 1).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].matrix, base);
        assert_eq!(group[0].display, TilesetPosition::new(0, 0));
    }

    #[test]
    fn displays_walk_the_block_clockwise_from_top_left() {
        let group = get_rule_group(lone_center(), TilesetPosition::new(2, 5), 4).unwrap();
        let displays: Vec<_> = group.iter().map(|rule| rule.display).collect();
        assert_eq!(
            displays,
            vec![
                TilesetPosition::new(2, 5),
                TilesetPosition::new(3, 5),
                TilesetPosition::new(3, 6),
                TilesetPosition::new(2, 6),
            ]
        );
    }

    #[test]
    fn two_variants_take_the_first_two_block_cells() {
        let group = get_rule_group(corner_marker(), TilesetPosition::new(11, 2), 2).unwrap();
        assert_eq!(group[0].display, TilesetPosition::new(11, 2));
        assert_eq!(group[1].display, TilesetPosition::new(12, 2));
        assert_eq!(group[1].matrix, corner_marker().rotated(Rotation::Deg90));
    }

    #[test]
    fn variants_are_successive_quarter_turns() {
        let base = corner_marker();
        let group = get_rule_group(base, TilesetPosition::new(0, 0), 4).unwrap();

        let mut expected = base;
        for rule in &group {
            assert_eq!(rule.matrix, expected);
            expected = expected.rotated(Rotation::Deg90);
        }
    }

    #[test]
    fn rotation_invariant_matrix_repeats_across_variants() {
        // All non-center cells equal, so every rotation yields the same matrix.
        let base = lone_center();
        let group = get_rule_group(base, TilesetPosition::new(2, 5), 4).unwrap();
        for rule in &group {
            assert_eq!(rule.matrix, base);
        }
    }

    #[test]
    fn center_cell_is_identical_across_variants() {
        let group = get_rule_group(lone_center(), TilesetPosition::new(0, 0), 4).unwrap();
        for rule in &group {
            assert_eq!(rule.matrix.center(), CellRule::Autotile);
        }
    }
}
