use crate::circle::Circle;

/// Candidates are pushed this far out from both source circles, since exact
/// tangency does not survive floating point.
pub const PLACEMENT_MARGIN: f64 = 10.0 * f64::EPSILON;

/// Positions where a circle of `radius` touches both `c1` and `c2` from the
/// outside. Either slot may be empty.
pub fn placement_candidates(radius: f64, c1: &Circle, c2: &Circle) -> [Option<Circle>; 2] {
    let inflated1 = c1.inflate(radius + PLACEMENT_MARGIN);
    let inflated2 = c2.inflate(radius + PLACEMENT_MARGIN);

    let [first, second] = inflated1.intersection(&inflated2).points();
    [
        first.map(|p| Circle::new(p.x, p.y, radius)),
        second.map(|p| Circle::new(p.x, p.y, radius)),
    ]
}
