//! Greedy placement of weighted circles, loosely after the A1.0 heuristic of
//! Huang et al. (https://home.mis.u-picardie.fr/~cli/Publis/circle.pdf).
//!
//! Circles are placed largest first. The first two sit on either side of the
//! origin; every later circle is put tangent to some pair of placed circles,
//! at the non-overlapping position with the highest hole degree.

use crate::candidate::placement_candidates;
use crate::circle::Circle;
use log::info;
use rayon::prelude::*;
use std::fmt::Debug;

/// Packs `weights` so that each circle's area is proportional to its weight.
///
/// Returns the placed circles in placement order. If some label cannot be
/// placed, packing stops there and the circles placed so far are returned;
/// callers notice by comparing lengths.
///
/// With `parallel` set, the pairs of placed circles are scored on the rayon
/// pool. The winner is still picked in pair order, so the layout is the same
/// either way.
pub fn pack<L: Clone + Debug>(weights: &[(L, f64)], parallel: bool) -> Vec<(L, Circle)> {
    let mut order: Vec<&(L, f64)> = weights.iter().collect();
    // Stable, so equal weights keep their input order.
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut placed = Vec::with_capacity(order.len());
    let mut circles: Vec<Circle> = Vec::with_capacity(order.len());

    for (label, weight) in order {
        let radius = weight.sqrt();
        let circle = match circles.len() {
            0 => Circle::new(radius, 0.0, radius),
            1 => Circle::new(-radius, 0.0, radius),
            _ => match best_candidate(radius, &circles, parallel) {
                Some(circle) => circle,
                None => {
                    info!("cannot place circle for {:?}", label);
                    break;
                }
            },
        };
        circles.push(circle);
        placed.push((label.clone(), circle));
    }

    placed
}

/// Minus the summed center distances from `candidate` to every placed circle
/// except the pair `i`, `j` it was built from. Higher means the candidate
/// sits closer to the rest of the layout.
pub fn hole_degree(candidate: &Circle, circles: &[Circle], i: usize, j: usize) -> f64 {
    -circles
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, c)| candidate.center.distance_to(&c.center))
        .sum::<f64>()
}

fn pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect()
}

fn best_candidate(radius: f64, circles: &[Circle], parallel: bool) -> Option<Circle> {
    let pairs = pairs(circles.len());
    let scored: Vec<Option<(f64, Circle)>> = if parallel {
        pairs
            .par_iter()
            .map(|&(i, j)| best_for_pair(radius, circles, i, j))
            .collect()
    } else {
        pairs
            .iter()
            .map(|&(i, j)| best_for_pair(radius, circles, i, j))
            .collect()
    };

    // Ties go to the first pair in canonical order.
    scored
        .into_iter()
        .flatten()
        .fold(None, |best, (score, circle)| match best {
            Some((best_score, _)) if best_score >= score => best,
            _ => Some((score, circle)),
        })
        .map(|(_, circle)| circle)
}

fn best_for_pair(radius: f64, circles: &[Circle], i: usize, j: usize) -> Option<(f64, Circle)> {
    let mut best: Option<(f64, Circle)> = None;
    for candidate in placement_candidates(radius, &circles[i], &circles[j])
        .iter()
        .flatten()
    {
        if circles.iter().any(|c| c.distance(candidate) < 0.0) {
            continue;
        }
        let score = hole_degree(candidate, circles, i, j);
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, *candidate));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn sample_weights() -> Vec<(String, f64)> {
        [
            19.0, 17.0, 13.0, 11.0, 7.0, 5.0, 3.0, 2.0, 1.0, 1.0, 0.5, 0.25, 23.0, 4.0, 6.0,
            8.0, 9.0, 10.0, 0.1, 2.5,
        ]
        .iter()
        .enumerate()
        .map(|(i, &w)| (format!("c{}", i), w))
        .collect()
    }

    #[test]
    fn seeds_on_either_side_of_origin() {
        let placed = pack(&[("a", 4.0), ("b", 1.0)], false);
        assert_eq!(placed, vec![("a", Circle::new(2.0, 0.0, 2.0)), ("b", Circle::new(-1.0, 0.0, 1.0))]);
    }

    #[test]
    fn third_equal_circle_nestles_above() {
        let placed = pack(&[("a", 1.0), ("b", 1.0), ("c", 1.0)], false);
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].1, Circle::new(1.0, 0.0, 1.0));
        assert_eq!(placed[1].1, Circle::new(-1.0, 0.0, 1.0));

        let (label, third) = placed[2];
        assert_eq!(label, "c");
        assert!(approx_eq!(f64, third.x(), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, third.y(), 3.0_f64.sqrt(), epsilon = 1e-9));
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let placed = pack(&[("a", 1.0), ("b", 2.0), ("c", 1.0)], false);
        let labels: Vec<&str> = placed.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn no_two_circles_overlap() {
        let placed = pack(&sample_weights(), false);
        assert_eq!(placed.len(), 20);
        for (i, (_, a)) in placed.iter().enumerate() {
            for (_, b) in &placed[i + 1..] {
                assert!(a.distance(b) >= -1e-9, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn radius_follows_weight() {
        let placed = pack(&sample_weights(), false);
        for window in placed.windows(2) {
            assert!(window[0].1.radius >= window[1].1.radius);
        }
        let (_, largest) = &placed[0];
        assert!(approx_eq!(f64, largest.radius, 23.0_f64.sqrt(), ulps = 2));
    }

    #[test]
    fn parallel_scoring_matches_sequential() {
        let weights = sample_weights();
        assert_eq!(pack(&weights, true), pack(&weights, false));
    }

    #[test]
    fn hole_degree_skips_generating_pair() {
        let circles = [
            Circle::new(1.0, 0.0, 1.0),
            Circle::new(-1.0, 0.0, 1.0),
            Circle::new(0.0, 5.0, 1.0),
        ];
        let candidate = Circle::new(0.0, 2.0, 1.0);
        assert!(approx_eq!(f64, hole_degree(&candidate, &circles, 0, 1), -3.0, ulps = 2));
        assert!(approx_eq!(
            f64,
            hole_degree(&candidate, &circles, 0, 2),
            -(5.0_f64.sqrt()),
            ulps = 2
        ));
    }

    #[test]
    fn no_candidate_between_distant_circles() {
        let circles = [Circle::new(-10.0, 0.0, 1.0), Circle::new(10.0, 0.0, 1.0)];
        assert_eq!(best_candidate(1.0, &circles, false), None);
        assert_eq!(best_candidate(1.0, &circles, true), None);
    }

    #[test]
    fn candidate_found_once_any_pair_can_host_it() {
        let circles = [
            Circle::new(-10.0, 0.0, 1.0),
            Circle::new(10.0, 0.0, 1.0),
            Circle::new(12.0, 0.0, 1.0),
        ];
        let placed = best_candidate(1.0, &circles, false).unwrap();
        assert!(circles.iter().all(|c| c.distance(&placed) >= 0.0));
        assert!(approx_eq!(f64, placed.x(), 11.0, epsilon = 1e-9));
    }

    #[test]
    fn empty_input_places_nothing() {
        let placed: Vec<(&str, Circle)> = pack(&[], false);
        assert!(placed.is_empty());
    }
}
