use log::debug;

/// Slack used by [`Circle::encloses_weak`]. Without it, floating point noise
/// on the boundary makes the enclosing circle solver extend its basis forever.
pub const ENCLOSURE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An immutable circle. Transformations return new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Where the boundaries of two circles meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// Separate, nested or coincident circles.
    Empty,
    Tangent(Point),
    Crossing(Point, Point),
}

impl Intersection {
    pub fn points(&self) -> [Option<Point>; 2] {
        match *self {
            Intersection::Empty => [None, None],
            Intersection::Tangent(p) => [Some(p), None],
            Intersection::Crossing(p, q) => [Some(p), Some(q)],
        }
    }
}

impl Circle {
    /// The circle every layout is normalized into.
    pub const UNIT: Circle = Circle::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point { x, y },
            radius,
        }
    }

    pub fn x(&self) -> f64 {
        self.center.x
    }

    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Gap between the two boundaries: negative when the circles overlap,
    /// zero when they are externally tangent.
    pub fn distance(&self, other: &Circle) -> f64 {
        self.center.distance_to(&other.center) - self.radius - other.radius
    }

    /// Same center, radius grown by `by`.
    pub fn inflate(&self, by: f64) -> Circle {
        Circle {
            center: self.center,
            radius: self.radius + by,
        }
    }

    // See http://stackoverflow.com/a/3349134/798588 for the derivation.
    pub fn intersection(&self, other: &Circle) -> Intersection {
        let (r1, r2) = (self.radius, other.radius);
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        let d = dx.hypot(dy);

        if d > r1 + r2 {
            debug!("no intersection, circles are separate: {:?}, {:?}", self, other);
            return Intersection::Empty;
        }
        if d < (r1 - r2).abs() {
            debug!("no intersection, one circle contains the other: {:?}, {:?}", self, other);
            return Intersection::Empty;
        }
        if d == 0.0 && r1 == r2 {
            debug!("no intersection, circles are coincident: {:?}, {:?}", self, other);
            return Intersection::Empty;
        }

        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        // Rounding can push r1² - a² just below zero for tangent circles.
        let h = (r1 * r1 - a * a).max(0.0).sqrt();
        let xm = self.x() + a * dx / d;
        let ym = self.y() + a * dy / d;

        let first = Point::new(xm + h * dy / d, ym - h * dx / d);
        let second = Point::new(xm - h * dy / d, ym + h * dx / d);

        if first == second {
            Intersection::Tangent(first)
        } else {
            Intersection::Crossing(first, second)
        }
    }

    /// True when `other` lies inside `self`, allowing it to poke out by up to
    /// [`ENCLOSURE_TOLERANCE`].
    pub fn encloses_weak(&self, other: &Circle) -> bool {
        let dr = self.radius - other.radius + ENCLOSURE_TOLERANCE;
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        dr > 0.0 && dr * dr > dx * dx + dy * dy
    }

    pub fn encloses_weak_all(&self, others: &[Circle]) -> bool {
        others.iter().all(|other| self.encloses_weak(other))
    }

    /// True when `other` is not contained in `self`, with no tolerance.
    pub fn encloses_not(&self, other: &Circle) -> bool {
        let dr = self.radius - other.radius;
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        dr < 0.0 || dr * dr < dx * dx + dy * dy
    }

    /// Maps `self` into the frame where `enclosure` is the unit circle.
    pub fn normalized(&self, enclosure: &Circle) -> Circle {
        Circle::new(
            (self.x() - enclosure.x()) / enclosure.radius,
            (self.y() - enclosure.y()) / enclosure.radius,
            self.radius / enclosure.radius,
        )
    }
}
