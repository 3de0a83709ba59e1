//! Expected-strokes curves
//!
//! For every lie a curve maps distance to the baseline number of strokes
//! needed to hole out:
//!
//! ```text
//! d <= 0              -> 0
//! d <= first.distance -> first.strokes
//! within anchors      -> linear interpolation between the bracketing pair
//! d > last.distance   -> last.strokes + 0.08 * ln(1 + d - last.distance)
//! ```
//!
//! Curves are validated once when built and are read-only afterwards.

mod baseline;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::CurveError;
use crate::types::Lie;

/// Slope of the logarithmic tail past the last anchor
pub const TAIL_COEFFICIENT: f64 = 0.08;

static BASELINE: LazyLock<ExpectedStrokes> = LazyLock::new(|| {
    ExpectedStrokes::from_anchors(
        baseline::anchors()
            .into_iter()
            .map(|(lie, points)| (lie, points.to_vec())),
    )
    .expect("built-in expected-strokes baseline must be monotonic")
});

/// One `(distance_m, strokes)` anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub distance_m: f64,
    pub strokes: f64,
}

/// A validated piecewise-linear curve for one lie
#[derive(Debug, Clone)]
pub struct Curve {
    anchors: Vec<Anchor>,
}

impl Curve {
    /// Validate anchors: non-empty, finite, strictly increasing distance,
    /// non-decreasing strokes.
    pub fn new(lie: Lie, points: &[(f64, f64)]) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty { lie });
        }

        let mut anchors: Vec<Anchor> = Vec::with_capacity(points.len());
        for (index, &(distance_m, strokes)) in points.iter().enumerate() {
            if !distance_m.is_finite() || !strokes.is_finite() {
                return Err(CurveError::NonFinite { lie, index });
            }
            if let Some(prev) = anchors.last().copied() {
                if distance_m <= prev.distance_m {
                    return Err(CurveError::NonIncreasingDistance { lie, index });
                }
                if strokes < prev.strokes {
                    return Err(CurveError::DecreasingStrokes { lie, index });
                }
            }
            anchors.push(Anchor { distance_m, strokes });
        }

        Ok(Self { anchors })
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Evaluate the curve at `distance_m`
    pub fn evaluate(&self, distance_m: f64) -> f64 {
        if distance_m <= 0.0 {
            return 0.0;
        }

        // Non-empty by construction
        let first = self.anchors[0];
        let last = self.anchors[self.anchors.len() - 1];

        if distance_m <= first.distance_m {
            return first.strokes;
        }
        if distance_m > last.distance_m {
            return last.strokes + TAIL_COEFFICIENT * (distance_m - last.distance_m).ln_1p();
        }

        // First anchor at or beyond the distance; index >= 1 here
        let upper = self.anchors.partition_point(|a| a.distance_m < distance_m);
        let hi = self.anchors[upper];
        let lo = self.anchors[upper - 1];
        let t = (distance_m - lo.distance_m) / (hi.distance_m - lo.distance_m);
        lo.strokes + t * (hi.strokes - lo.strokes)
    }
}

/// Expected-strokes table covering every lie
#[derive(Debug, Clone)]
pub struct ExpectedStrokes {
    curves: HashMap<Lie, Curve>,
}

impl ExpectedStrokes {
    /// Build a table from raw anchors. Every lie must be present.
    pub fn from_anchors<I>(curves: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (Lie, Vec<(f64, f64)>)>,
    {
        let mut table = HashMap::new();
        for (lie, points) in curves {
            table.insert(lie, Curve::new(lie, &points)?);
        }
        for lie in Lie::ALL {
            if !table.contains_key(&lie) {
                return Err(CurveError::Missing { lie });
            }
        }
        Ok(Self { curves: table })
    }

    /// The built-in tour baseline
    pub fn baseline() -> &'static ExpectedStrokes {
        &BASELINE
    }

    pub fn curve(&self, lie: Lie) -> &Curve {
        // Every lie is present by construction
        &self.curves[&lie]
    }

    /// Expected strokes to hole out from `distance_m` on `lie`
    pub fn expected(&self, distance_m: f64, lie: Lie) -> f64 {
        self.curve(lie).evaluate(distance_m)
    }

    /// Same as [`expected`](Self::expected) with a free-form lie label;
    /// unknown labels use the fairway curve.
    pub fn expected_for_label(&self, distance_m: f64, lie: &str) -> f64 {
        self.expected(distance_m, Lie::from_label(lie))
    }
}

/// Expected strokes on the built-in baseline
pub fn expected_strokes(distance_m: f64, lie: Lie) -> f64 {
    ExpectedStrokes::baseline().expected(distance_m, lie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_and_negative_distance() {
        for lie in Lie::ALL {
            assert_eq!(expected_strokes(0.0, lie), 0.0);
            assert_eq!(expected_strokes(-3.0, lie), 0.0);
        }
    }

    #[test]
    fn test_below_first_anchor_clamps() {
        assert_eq!(expected_strokes(0.1, Lie::Green), 1.0);
        assert_eq!(expected_strokes(5.0, Lie::Fairway), 2.18);
        assert_eq!(expected_strokes(40.0, Lie::Tee), 2.92);
    }

    #[test]
    fn test_interpolation_between_anchors() {
        // Midway between (100, 2.80) and (120, 2.85)
        assert!(approx(expected_strokes(110.0, Lie::Fairway), 2.825));
        // Exactly on an anchor
        assert!(approx(expected_strokes(150.0, Lie::Tee), 3.05));
        assert!(approx(expected_strokes(12.0, Lie::Green), 2.05));
    }

    #[test]
    fn test_log_tail_is_continuous() {
        for lie in Lie::ALL {
            let last = *ExpectedStrokes::baseline().curve(lie).anchors().last().unwrap();
            let at = expected_strokes(last.distance_m, lie);
            let just_past = expected_strokes(last.distance_m + 1e-9, lie);
            assert!(approx(at, last.strokes));
            assert!((just_past - at).abs() < 1e-6, "tail jumps for {lie}");
        }
    }

    #[test]
    fn test_log_tail_growth() {
        let last = expected_strokes(300.0, Lie::Fairway);
        let far = expected_strokes(300.0 + std::f64::consts::E - 1.0, Lie::Fairway);
        assert!(approx(far - last, TAIL_COEFFICIENT));
    }

    #[test]
    fn test_baseline_monotonic_on_grid() {
        for lie in Lie::ALL {
            let mut prev = 0.0;
            let mut d = 0.0;
            while d < 800.0 {
                let e = expected_strokes(d, lie);
                assert!(e >= prev, "{lie} decreases at {d}");
                prev = e;
                d += 0.25;
            }
        }
    }

    #[test]
    fn test_label_fallback_to_fairway() {
        let table = ExpectedStrokes::baseline();
        assert_eq!(
            table.expected_for_label(120.0, "cart-path"),
            table.expected(120.0, Lie::Fairway)
        );
    }

    #[test]
    fn test_rejects_non_increasing_distance() {
        let err = Curve::new(Lie::Sand, &[(10.0, 2.0), (10.0, 2.1)]).unwrap_err();
        assert_eq!(err, CurveError::NonIncreasingDistance { lie: Lie::Sand, index: 1 });
    }

    #[test]
    fn test_rejects_decreasing_strokes() {
        let err = Curve::new(Lie::Rough, &[(10.0, 2.5), (20.0, 2.4)]).unwrap_err();
        assert_eq!(err, CurveError::DecreasingStrokes { lie: Lie::Rough, index: 1 });
    }

    #[test]
    fn test_rejects_empty_and_missing() {
        assert_eq!(Curve::new(Lie::Tee, &[]).unwrap_err(), CurveError::Empty { lie: Lie::Tee });

        let partial = ExpectedStrokes::from_anchors(vec![(Lie::Green, vec![(1.0, 1.0)])]);
        assert!(matches!(partial, Err(CurveError::Missing { .. })));
    }
}
