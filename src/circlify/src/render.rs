use crate::circle::Circle;

/// Debug hook handed the layout at each stage of a run.
///
/// `enclosure` is the circle the layout is currently fitted into, if one is
/// known yet.
pub trait Render<L> {
    fn render(&mut self, circles: &[(L, Circle)], enclosure: Option<&Circle>);
}

impl<L, F> Render<L> for F
where
    F: FnMut(&[(L, Circle)], Option<&Circle>),
{
    fn render(&mut self, circles: &[(L, Circle)], enclosure: Option<&Circle>) {
        self(circles, enclosure)
    }
}
