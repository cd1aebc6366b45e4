//! Bisection over a blend weight. Given a seed color, a target color and a signed score of a
//! candidate (typically the difference between its contrast against two references), [`find`]
//! narrows in on the blend of seed toward target whose score is within epsilon of zero.
//!
//! The score has to be decreasing in the weight: positive scores move the search toward the
//! target, negative ones back toward the seed. A score that isn't monotonic still gives a root,
//! just not necessarily the one intended.

use crate::color::ColorPoint;
use crate::colors::CIELUVColor;
use crate::error::{ColorError, Result};

/// Cap on [`SearchBounds::max_steps`].
const MAX_STEPS: u32 = 64;

/// The interval to search and how close to zero the score has to get.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchBounds {
    /// The lowest blend weight considered.
    pub min: f64,
    /// The highest blend weight considered.
    pub max: f64,
    /// The largest score magnitude that counts as a hit.
    pub epsilon: f64,
}

impl Default for SearchBounds {
    fn default() -> SearchBounds {
        SearchBounds {
            min: 0.0,
            max: 1.0,
            epsilon: 0.005,
        }
    }
}

impl SearchBounds {
    /// Checked constructor: needs `0 <= min < max <= 1` and a non-negative epsilon.
    pub fn new(min: f64, max: f64, epsilon: f64) -> Result<SearchBounds> {
        let bounds = SearchBounds { min, max, epsilon };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Fails with [`ColorError::InvalidArgument`] unless `0 <= min < max <= 1` and
    /// `epsilon >= 0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0 <= self.min && self.min < self.max && self.max <= 1.0) {
            return Err(ColorError::InvalidArgument(format!(
                "search bounds must satisfy 0 <= min < max <= 1, got [{}, {}]",
                self.min, self.max
            )));
        }
        if !(self.epsilon >= 0.0) {
            return Err(ColorError::InvalidArgument(format!(
                "search epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// The number of halvings it takes to shrink the interval below epsilon,
    /// `ceil(log2((max - min) / epsilon))`, at least one and at most 64. A score that changes no
    /// faster than the weight converges within this many steps; a steeper one may take more.
    pub fn max_steps(&self) -> u32 {
        if self.epsilon <= 0.0 {
            return MAX_STEPS;
        }
        let steps = ((self.max - self.min) / self.epsilon).log2().ceil();
        if steps < 1.0 {
            1
        } else if steps > MAX_STEPS as f64 {
            MAX_STEPS
        } else {
            steps as u32
        }
    }
}

/// The outcome of a search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Found {
    /// The blend weight of the returned candidate.
    pub weight: f64,
    /// The seed blended toward the target by `weight`.
    pub color: CIELUVColor,
    /// The candidate's score.
    pub delta: f64,
    /// How many candidates were evaluated.
    pub steps: u32,
    /// Whether `|delta| <= epsilon`. Only false when the interval shrank to a single float without
    /// the score getting there, i.e. the score has no root in the bounds or jumps over it.
    pub converged: bool,
}

/// Bisects the blend weight of `seed` toward `target` until `delta` of the candidate is within
/// `bounds.epsilon` of zero. A positive score continues in the upper half of the interval, anything
/// else in the lower half. If the interval can no longer be halved at double precision, the last
/// candidate is returned unconverged.
///
/// Fails before evaluating anything if the bounds are invalid or the two colors have different
/// illuminants, and fails if `delta` fails or returns NaN.
pub fn find<F>(
    seed: &CIELUVColor,
    target: &CIELUVColor,
    bounds: SearchBounds,
    mut delta: F,
) -> Result<Found>
where
    F: FnMut(&CIELUVColor) -> Result<f64>,
{
    bounds.validate()?;
    seed.check_illuminant(target)?;
    let (mut lo, mut hi) = (bounds.min, bounds.max);
    let mut steps = 0;
    loop {
        let weight = (lo + hi) / 2.0;
        let color = seed.blend(target, weight)?;
        let d = delta(&color)?;
        steps += 1;
        if d.is_nan() {
            return Err(ColorError::InvalidArgument(format!(
                "search score is NaN at weight {}",
                weight
            )));
        }
        let converged = d.abs() <= bounds.epsilon;
        let next = if d > 0.0 { (weight, hi) } else { (lo, weight) };
        let exhausted = (next.0 + next.1) / 2.0 == weight;
        if converged || exhausted {
            if converged {
                debug!(
                    "search converged at weight {:.4} with score {:.4} after {} steps",
                    weight, d, steps
                );
            } else {
                warn!(
                    "search gave up at weight {:.4} with score {:.4} after {} steps",
                    weight, d, steps
                );
            }
            return Ok(Found {
                weight,
                color,
                delta: d,
                steps,
                converged,
            });
        }
        lo = next.0;
        hi = next.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio;
    use crate::error::ErrorKind;

    #[test]
    fn test_linear_score_converges_within_budget() {
        let seed = CIELUVColor::new(20., 0., 0.);
        let target = CIELUVColor::new(21., 0., 0.);
        let bounds = SearchBounds::default();
        let found = find(&seed, &target, bounds, |c| Ok(20.3 - c.l)).unwrap();
        assert!(found.converged);
        assert!(found.delta.abs() <= bounds.epsilon);
        assert!(found.steps <= 8);
        assert_eq!(bounds.max_steps(), 8);
        assert!((found.weight - 0.3).abs() <= bounds.epsilon);
    }

    #[test]
    fn test_exact_midpoint_takes_one_step() {
        let seed = CIELUVColor::new(0., 0., 0.);
        let target = CIELUVColor::new(100., 0., 0.);
        let found = find(&seed, &target, SearchBounds::default(), |c| Ok(50. - c.l)).unwrap();
        assert_eq!(found.steps, 1);
        assert_eq!(found.weight, 0.5);
    }

    #[test]
    fn test_contrast_balance() {
        let bg = CIELUVColor::new(13., 1.8, -0.6);
        let accent = CIELUVColor::new(58., 97., -20.);
        let found = find(&accent, &bg, SearchBounds::default(), |c| {
            Ok(contrast_ratio(c, &bg)?.value() - contrast_ratio(c, &accent)?.value())
        })
        .unwrap();
        assert!(found.converged);
        assert!(found.weight > 0.0 && found.weight < 1.0);
        let to_bg = contrast_ratio(&found.color, &bg).unwrap().value();
        let to_accent = contrast_ratio(&found.color, &accent).unwrap().value();
        assert!((to_bg - to_accent).abs() <= SearchBounds::default().epsilon);
        assert!(to_bg > 1.5 && to_accent > 1.5);
    }

    #[test]
    fn test_steep_score_runs_past_step_estimate() {
        // a score 50 times steeper than the weight needs more halvings than the estimate
        let seed = CIELUVColor::new(0., 0., 0.);
        let target = CIELUVColor::new(100., 0., 0.);
        let bounds = SearchBounds::new(0.0, 1.0, 0.001).unwrap();
        let found = find(&seed, &target, bounds, |c| Ok(50.0 * (0.3 - c.l / 100.0))).unwrap();
        assert!(found.converged);
        assert!(found.delta.abs() <= bounds.epsilon);
        assert!(found.steps > bounds.max_steps());
    }

    #[test]
    fn test_unreachable_score_stops_at_float_precision() {
        let seed = CIELUVColor::new(20., 0., 0.);
        let target = CIELUVColor::new(80., 0., 0.);
        let bounds = SearchBounds::new(0.0, 1.0, 0.01).unwrap();
        let found = find(&seed, &target, bounds, |_| Ok(1.0)).unwrap();
        assert!(!found.converged);
        assert!(found.steps <= 64);
        assert!(1.0 - found.weight <= 1e-15);
    }

    #[test]
    fn test_invalid_bounds() {
        let err = SearchBounds::new(0.6, 0.4, 0.005).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = SearchBounds::new(0.0, 1.0, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(SearchBounds::new(-0.1, 1.0, 0.005).is_err());
        assert!(SearchBounds::new(0.0, 1.1, 0.005).is_err());
        assert!(SearchBounds::new(0.5, 0.5, 0.005).is_err());

        // unchecked bounds are caught before the score is ever called
        let seed = CIELUVColor::new(20., 0., 0.);
        let bounds = SearchBounds {
            min: 0.6,
            max: 0.4,
            epsilon: 0.005,
        };
        let mut called = false;
        let result = find(&seed, &seed, bounds, |_| {
            called = true;
            Ok(0.0)
        });
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_zero_epsilon_is_bounded() {
        let seed = CIELUVColor::new(20., 0., 0.);
        let target = CIELUVColor::new(80., 0., 0.);
        let bounds = SearchBounds::new(0.0, 1.0, 0.0).unwrap();
        let found = find(&seed, &target, bounds, |c| Ok(std::f64::consts::PI * 10. - c.l)).unwrap();
        assert!(found.steps <= 64);
    }
}
