use crate::circle::Circle;

/// Moves and shrinks `circles` so that `enclosure` becomes the unit circle.
pub fn scale<L: Clone>(circles: &[(L, Circle)], enclosure: &Circle) -> Vec<(L, Circle)> {
    circles
        .iter()
        .map(|(label, circle)| (label.clone(), circle.normalized(enclosure)))
        .collect()
}
