//! Best-effort provenance check for legacy build codes.
//!
//! The attribute rework at 2.0.202 changed what the encoded numbers
//! mean: older codes baked class bonuses into the attributes, newer
//! exports do not. The creation-point budget stayed the same, so
//! whichever reading of the attributes spends the budget exactly
//! dates the code. Hand-edited or boundary-value codes can satisfy
//! both readings or neither; those stay unclassified rather than
//! being guessed at.

use crate::codes::character::Character;

/// Stat points above this value cost double.
const DOUBLE_COST_THRESHOLD: i32 = 18;

/// Which generation of the game produced a code's attribute numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeOrigin {
    Pre202,
    Post202,
    Indeterminate,
}

/// Creation-point cost of raising one stat from `base` to `value`.
fn stat_cost(base: i32, value: i32) -> i32 {
    if value <= DOUBLE_COST_THRESHOLD {
        value - base
    } else {
        (DOUBLE_COST_THRESHOLD - base) + 2 * (value - DOUBLE_COST_THRESHOLD)
    }
}

/// Classify which format generation produced a character's numbers.
pub fn classify(character: &Character) -> CodeOrigin {
    let base = character.genotype.attribute_base();
    let budget = character.genotype.point_budget();

    let without_bonuses: i32 = character
        .attrs
        .iter()
        .zip(&character.bonuses)
        .map(|(attr, bonus)| stat_cost(base, attr - bonus))
        .sum();
    let with_bonuses: i32 = character
        .attrs
        .iter()
        .map(|attr| stat_cost(base, *attr))
        .sum();

    match (without_bonuses == budget, with_bonuses == budget) {
        (true, false) => CodeOrigin::Pre202,
        (false, true) => CodeOrigin::Post202,
        _ => CodeOrigin::Indeterminate,
    }
}
