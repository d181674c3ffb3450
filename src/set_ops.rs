use crate::{key::Key, range::{KeyRange, RightBound}};

/// Removes every subtrahend from the minuend, returning the surviving
/// disjoint pieces in key order.
///
/// Each subtrahend splits every working piece into at most two: the part
/// below the subtrahend's left edge, and the part at or above its right
/// edge. Empty pieces are discarded as they appear, so a full subtraction
/// simply yields no pieces.
pub fn subtract_many(minuend: &KeyRange, subtrahends: &[KeyRange]) -> Vec<KeyRange> {
    let mut pieces = vec![*minuend];
    pieces.retain(|piece| !piece.is_empty());

    for subtrahend in subtrahends {
        if subtrahend.is_empty() {
            continue;
        }

        let mut survivors = Vec::with_capacity(pieces.len() + 1);
        for piece in &pieces {
            // Below the subtrahend.
            let below = KeyRange::from_parts(Key::min(), RightBound::Bounded(*subtrahend.left()));
            let kept = piece.intersection(&below);
            if !kept.is_empty() {
                survivors.push(kept);
            }

            // At or above the subtrahend, when it has a right edge at all.
            if let RightBound::Bounded(right) = subtrahend.right() {
                let above = KeyRange::from_parts(*right, RightBound::Unbounded);
                let kept = piece.intersection(&above);
                if !kept.is_empty() {
                    survivors.push(kept);
                }
            }
        }
        pieces = survivors;
    }

    pieces
}
