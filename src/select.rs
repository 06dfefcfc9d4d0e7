//! Candidate elimination: narrows a parsed candidate set to a single winner.
//!
//! Selection runs six sequential passes over the set, each narrowing by one
//! scalar dimension. The first three keep candidates at least as large as
//! the viewport bound (falling back to the largest available when nothing
//! qualifies); the last three keep only the smallest remaining value per
//! dimension. The first survivor wins. Every pass produces a fresh set, so
//! a call is a pure function of its two inputs and safe to repeat.

use crate::{Candidate, Viewport};

// Dimension accessors. An absent width/height bound compares larger than
// any finite value, so undescribed candidates are never dropped as "too
// small" but are fair game for the upper-bound passes.
fn width_of(c: &Candidate) -> f64 {
    c.width.map(f64::from).unwrap_or(f64::INFINITY)
}

fn height_of(c: &Candidate) -> f64 {
    c.height.map(f64::from).unwrap_or(f64::INFINITY)
}

fn density_of(c: &Candidate) -> f64 {
    f64::from(c.density)
}

/// Select the single best candidate for the given viewport.
///
/// Returns `None` only when `candidates` is empty; any non-empty set
/// produces exactly one winner. The viewport is assumed valid (see
/// [`Viewport::new`]); selection does not defend against degenerate
/// geometry.
pub fn select_best(candidates: Vec<Candidate>, viewport: &Viewport) -> Option<Candidate> {
    if candidates.is_empty() {
        return None;
    }
    let set = keep_at_least(candidates, width_of, f64::from(viewport.width));
    let set = keep_at_least(set, height_of, f64::from(viewport.height));
    let set = keep_at_least(set, density_of, f64::from(viewport.pixel_ratio));
    let set = keep_smallest(set, width_of);
    let set = keep_smallest(set, height_of);
    let set = keep_smallest(set, density_of);
    set.into_iter().next()
}

/// Lower-bound pass: drop candidates whose value falls strictly below
/// `bound`. If that would empty the set, keep instead the first candidate
/// holding the greatest value in the pre-pass set.
fn keep_at_least(set: Vec<Candidate>, value: fn(&Candidate) -> f64, bound: f64) -> Vec<Candidate> {
    let survivors: Vec<Candidate> = set.iter().filter(|c| value(c) >= bound).cloned().collect();
    if !survivors.is_empty() {
        return survivors;
    }

    // Safety valve: nothing met the bound, so the largest on offer is the
    // best approximation. Ties resolve to the earliest candidate.
    let mut best: Option<Candidate> = None;
    for candidate in set {
        let replace = match &best {
            Some(current) => value(&candidate) > value(current),
            None => true,
        };
        if replace {
            best = Some(candidate);
        }
    }
    best.into_iter().collect()
}

/// Upper-bound pass: keep only candidates whose value equals the smallest
/// among the survivors. Cannot empty the set, since the minimum is always
/// attained by some member.
fn keep_smallest(set: Vec<Candidate>, value: fn(&Candidate) -> f64) -> Vec<Candidate> {
    let min = set.iter().map(value).fold(f64::INFINITY, f64::min);
    set.into_iter().filter(|c| value(c) <= min).collect()
}
