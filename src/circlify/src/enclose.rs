//! Smallest circle enclosing a set of circles.
//!
//! This is the randomized incremental algorithm d3-hierarchy uses for
//! `packEnclose`: walk a shuffled copy of the circles, and whenever one is
//! not inside the current enclosure, grow the support basis to include it and
//! start the walk over.

use crate::circle::Circle;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the minimal circle weakly enclosing all of `circles`, or `None`
/// when there are none. `rng` only shuffles the scan order; the result does
/// not depend on it beyond rounding.
pub fn enclose<R: Rng + ?Sized>(circles: &[Circle], rng: &mut R) -> Option<Circle> {
    let mut shuffled = circles.to_vec();
    shuffled.shuffle(rng);

    let mut basis: Vec<Circle> = Vec::with_capacity(3);
    let mut enclosure: Option<Circle> = None;
    let mut i = 0;

    while i < shuffled.len() {
        let p = shuffled[i];
        match enclosure {
            Some(e) if e.encloses_weak(&p) => i += 1,
            _ => {
                basis = extend_basis(&basis, &p);
                let e = enclose_basis(&basis);
                trace!("basis of {} now encloses as {:?}", basis.len(), e);
                enclosure = Some(e);
                // A new basis can leave earlier circles outside.
                i = 0;
            }
        }
    }

    enclosure
}

/// The smallest basis containing `p` whose enclosure weakly holds all of
/// `basis` as well.
///
/// Panics if no such basis exists, which means the previous basis was not a
/// valid one.
pub fn extend_basis(basis: &[Circle], p: &Circle) -> Vec<Circle> {
    if p.encloses_weak_all(basis) {
        return vec![*p];
    }

    for b in basis {
        if p.encloses_not(b) && enclose_basis2(b, p).encloses_weak_all(basis) {
            return vec![*b, *p];
        }
    }

    for (i, bi) in basis.iter().enumerate() {
        for bj in &basis[i + 1..] {
            if enclose_basis2(bi, bj).encloses_not(p)
                && enclose_basis2(bi, p).encloses_not(bj)
                && enclose_basis2(bj, p).encloses_not(bi)
                && enclose_basis3(bi, bj, p).encloses_weak_all(basis)
            {
                return vec![*bi, *bj, *p];
            }
        }
    }

    panic!("extend_basis: no basis of {:?} extends to {:?}", basis, p);
}

pub fn enclose_basis(basis: &[Circle]) -> Circle {
    match *basis {
        [a] => a,
        [a, b] => enclose_basis2(&a, &b),
        [a, b, c] => enclose_basis3(&a, &b, &c),
        _ => panic!("enclose_basis: basis of {} circles", basis.len()),
    }
}

/// Smallest circle holding `a` and `b`, internally tangent to both.
pub fn enclose_basis2(a: &Circle, b: &Circle) -> Circle {
    let (x1, y1, r1) = (a.x(), a.y(), a.radius);
    let (x2, y2, r2) = (b.x(), b.y(), b.radius);
    let x21 = x2 - x1;
    let y21 = y2 - y1;
    let r21 = r2 - r1;
    let l = x21.hypot(y21);
    Circle::new(
        (x1 + x2 + x21 / l * r21) / 2.0,
        (y1 + y2 + y21 / l * r21) / 2.0,
        (l + r1 + r2) / 2.0,
    )
}

/// Circle internally tangent to `a`, `b` and `c`.
///
/// Subtracting the tangency equations pairwise leaves the center linear in
/// the radius; substituting back gives a quadratic in the radius whose
/// positive root is taken.
pub fn enclose_basis3(a: &Circle, b: &Circle, c: &Circle) -> Circle {
    let (x1, y1, r1) = (a.x(), a.y(), a.radius);
    let (x2, y2, r2) = (b.x(), b.y(), b.radius);
    let (x3, y3, r3) = (c.x(), c.y(), c.radius);

    let a2 = x1 - x2;
    let a3 = x1 - x3;
    let b2 = y1 - y2;
    let b3 = y1 - y3;
    let c2 = r2 - r1;
    let c3 = r3 - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;

    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = if qa != 0.0 {
        -(qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        -qc / qb
    };

    Circle::new(x1 + xa + xb * r, y1 + ya + yb * r, r)
}
