use crate::traits::{is_positive_finite, FloatScalar};

use super::DesignError;

/// The four component values of one Sallen-Key stage.
///
/// `r1` is the input resistor, `r2` the resistor into the buffer, `c1` the
/// feedback capacitor and `c2` the capacitor to ground. Values are either
/// normalized (dimensionless) or absolute (ohms/farads) depending on where in
/// the pipeline the record sits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Components<T> {
    pub r1: T,
    pub r2: T,
    pub c1: T,
    pub c2: T,
}

impl<T: FloatScalar> Components<T> {
    /// Build a record from its four values.
    pub fn new(r1: T, r2: T, c1: T, c2: T) -> Self {
        Self { r1, r2, c1, c2 }
    }

    /// Apply `fr` to both resistors and `fc` to both capacitors.
    #[inline]
    pub fn map(self, fr: impl Fn(T) -> T, fc: impl Fn(T) -> T) -> Self {
        Self {
            r1: fr(self.r1),
            r2: fr(self.r2),
            c1: fc(self.c1),
            c2: fc(self.c2),
        }
    }

    /// `true` when every value is finite and strictly positive.
    pub fn is_physical(&self) -> bool {
        is_positive_finite(self.r1)
            && is_positive_finite(self.r2)
            && is_positive_finite(self.c1)
            && is_positive_finite(self.c2)
    }

    /// `true` when no value is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.r1.is_finite() && self.r2.is_finite() && self.c1.is_finite() && self.c2.is_finite()
    }

    /// Natural frequency of the stage, `1/√(R1·R2·C1·C2)` in rad/s.
    pub fn natural_frequency(&self) -> T {
        T::one() / (self.r1 * self.r2 * self.c1 * self.c2).sqrt()
    }

    /// Coefficient of `s` in the stage denominator, `C2·(R1 + R2)`.
    pub fn damping_term(&self) -> T {
        self.c2 * (self.r1 + self.r2)
    }
}

/// Normalized capacitors for a stage with both resistors fixed at 1.
///
/// `c2 = B/2`, `c1 = 1/c2`, which gives `c1·c2 = 1` and `c2·(r1 + r2) = B`.
///
/// # Errors
///
/// Returns [`DesignError::InvalidCoefficient`] if `b` is not positive and finite.
///
/// # Example
///
/// ```
/// use sallenkey::design::{pole_coefficient, solve_capacitors};
///
/// let b: f64 = pole_coefficient(2, 1);
/// let c = solve_capacitors(b).unwrap();
/// assert!((c.c2 - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!((c.c1 * c.c2 - 1.0).abs() < 1e-12);
/// ```
pub fn solve_capacitors<T: FloatScalar>(b: T) -> Result<Components<T>, DesignError> {
    if !is_positive_finite(b) {
        return Err(DesignError::InvalidCoefficient);
    }
    let c2 = b / T::lit(2.0);
    Ok(Components::new(T::one(), T::one(), T::one() / c2, c2))
}

/// Settings for the integer capacitor-ratio search of [`solve_resistors`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResistorSearch {
    /// Largest ratio `c1/c2` tried before giving up. `None` searches until the
    /// first admissible ratio, which always exists for `B > 0`.
    pub max_ratio: Option<usize>,
}

/// Result of [`solve_resistors`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorSolution<T> {
    /// Normalized components (`c2 = 1`, `c1 = ratio`).
    pub components: Components<T>,
    /// Integer capacitor ratio `c1/c2` the search settled on.
    pub ratio: usize,
    /// Discriminant at the accepted ratio.
    pub discriminant: T,
}

/// Smallest ratio guaranteed to give a non-negative discriminant.
///
/// `disc(i) = i·(i·B² − 4)`, so any `i ≥ 4/B²` works; one extra step absorbs
/// rounding. `None` when that ratio does not fit in a `usize`.
fn admissible_ratio<T: FloatScalar>(b: T) -> Option<usize> {
    let bound = (T::lit(4.0) / (b * b)).ceil();
    if !bound.is_finite() {
        return None;
    }
    bound.to_usize().and_then(|n| n.checked_add(1))
}

/// Normalized resistors for a stage with `c2` fixed at 1.
///
/// Steps `c1 = 1, 2, 3, …` until `(c1·B)² − 4·c1 ≥ 0`, then sets
/// `r2 = (−B + √disc) / (4·c1)` and `r1 = 1 / (c1·r2)`. The discriminant is
/// non-negative for every `c1 ≥ 4/B²`, so the search always terminates for
/// `B > 0`; `settings.max_ratio` can cap it lower.
///
/// The returned resistors are not checked for sign. For some pole pairs
/// (e.g. order 10, `k = 2`) the discriminant at the first admissible ratio is
/// smaller than `B²` and `r2` comes out negative; callers that need physical
/// values must check [`Components::is_physical`].
///
/// # Errors
///
/// Returns [`DesignError::InvalidCoefficient`] if `b` is not positive and
/// finite, and [`DesignError::SearchExhausted`] if the first admissible ratio
/// lies beyond `settings.max_ratio` or beyond `usize::MAX`.
///
/// # Example
///
/// ```
/// use sallenkey::design::{pole_coefficient, solve_resistors, ResistorSearch};
///
/// let b: f64 = pole_coefficient(4, 2);
/// let sol = solve_resistors(b, &ResistorSearch::default()).unwrap();
/// assert_eq!(sol.ratio, 2);
/// assert_eq!(sol.components.c2, 1.0);
/// assert!(sol.components.is_physical());
/// ```
pub fn solve_resistors<T: FloatScalar>(
    b: T,
    settings: &ResistorSearch,
) -> Result<ResistorSolution<T>, DesignError> {
    if !is_positive_finite(b) {
        return Err(DesignError::InvalidCoefficient);
    }
    let Some(natural) = admissible_ratio(b) else {
        log::warn!("first admissible ratio for B = {b} does not fit in usize");
        return Err(DesignError::SearchExhausted);
    };
    let limit = settings.max_ratio.map_or(natural, |cap| cap.min(natural));
    let four = T::lit(4.0);

    for ratio in 1..=limit {
        let c1 = T::from_index(ratio);
        let cb = c1 * b;
        let disc = cb * cb - four * c1;
        log::trace!("ratio search: c1 = {ratio}, discriminant = {disc}");
        if disc < T::zero() {
            continue;
        }

        let r2 = (-b + disc.sqrt()) / (four * c1);
        let r1 = T::one() / (c1 * r2);
        log::debug!("ratio search settled on c1 = {ratio} (B = {b})");
        return Ok(ResistorSolution {
            components: Components::new(r1, r2, c1, T::one()),
            ratio,
            discriminant: disc,
        });
    }

    log::warn!("ratio search stopped at c1 = {limit} before a real solution (B = {b})");
    Err(DesignError::SearchExhausted)
}
