use crate::traits::FloatScalar;
use crate::units::Engineering;

use super::denorm::Denormalization;
use super::pole::pole_coefficient_checked;
use super::solver::{solve_capacitors, solve_resistors, Components, ResistorSearch};
use super::spec::{FilterSpec, Reference};
use super::DesignError;

/// One solved unity-gain Sallen-Key stage.
///
/// Produced by [`solve_stage`]; the values never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stage<T> {
    index: usize,
    coefficient: T,
    normalized: Components<T>,
    components: Components<T>,
    ratio: Option<usize>,
}

impl<T: FloatScalar> Stage<T> {
    /// 1-based pole index `k`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pole coefficient `B` of the stage's section.
    #[inline]
    pub fn coefficient(&self) -> T {
        self.coefficient
    }

    /// Component values before frequency and reference scaling.
    #[inline]
    pub fn normalized(&self) -> Components<T> {
        self.normalized
    }

    /// Absolute component values (ohms, farads).
    #[inline]
    pub fn components(&self) -> Components<T> {
        self.components
    }

    /// Capacitor ratio `c1/c2` for capacitor-fixed designs, `None` otherwise.
    #[inline]
    pub fn ratio(&self) -> Option<usize> {
        self.ratio
    }

    /// Input resistor `R1` in ohms.
    #[inline]
    pub fn r1(&self) -> T {
        self.components.r1
    }

    /// Resistor into the buffer, `R2`, in ohms.
    #[inline]
    pub fn r2(&self) -> T {
        self.components.r2
    }

    /// Feedback capacitor `C1` in farads.
    #[inline]
    pub fn c1(&self) -> T {
        self.components.c1
    }

    /// Capacitor to ground, `C2`, in farads.
    #[inline]
    pub fn c2(&self) -> T {
        self.components.c2
    }
}

impl<T: FloatScalar> core::fmt::Display for Stage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let c = &self.components;
        writeln!(f, "c1: {}", Engineering::new(c.c1, "F"))?;
        writeln!(f, "c2: {}", Engineering::new(c.c2, "F"))?;
        writeln!(f, "r1: {}", Engineering::new(c.r1, "Ohms"))?;
        write!(f, "r2: {}", Engineering::new(c.r2, "Ohms"))
    }
}

/// Solve stage `k` of `spec` with the default ratio search.
///
/// # Errors
///
/// See [`solve_stage_with`].
///
/// # Example
///
/// ```
/// use sallenkey::design::{solve_stage, FilterSpec, Reference};
///
/// let spec = FilterSpec::new(2, None, Reference::Resistance(1.0_f64)).unwrap();
/// let stage = solve_stage(&spec, 1).unwrap();
/// assert_eq!(stage.r1(), 1.0);
/// assert!((stage.c1() - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn solve_stage<T: FloatScalar>(spec: &FilterSpec<T>, k: usize) -> Result<Stage<T>, DesignError> {
    solve_stage_with(spec, k, &ResistorSearch::default())
}

/// Solve stage `k` of `spec`.
///
/// Computes the pole coefficient, solves the normalized components for the
/// spec's reference kind, then scales them to absolute values.
///
/// # Errors
///
/// - [`DesignError::InvalidStageIndex`] if `k` is not in `[1, order/2]`.
/// - [`DesignError::SearchExhausted`] if the capacitor ratio search fails.
/// - [`DesignError::NonFiniteComponent`] if any normalized or absolute value
///   is infinite or NaN, e.g. when scaling overflows.
/// - [`DesignError::NonPositiveComponent`] if any normalized or absolute
///   value is zero or negative.
pub fn solve_stage_with<T: FloatScalar>(
    spec: &FilterSpec<T>,
    k: usize,
    search: &ResistorSearch,
) -> Result<Stage<T>, DesignError> {
    let coefficient: T = pole_coefficient_checked(spec.order(), k)?;

    let (normalized, ratio) = match spec.reference() {
        Reference::Resistance(_) => (solve_capacitors(coefficient)?, None),
        Reference::Capacitance(_) => {
            let sol = solve_resistors(coefficient, search)?;
            (sol.components, Some(sol.ratio))
        }
    };

    let components = Denormalization::from_spec(spec).apply(normalized);
    if !normalized.is_finite() || !components.is_finite() {
        log::warn!("stage {k} of order {} rejected: non-finite values {components:?}", spec.order());
        return Err(DesignError::NonFiniteComponent { stage: k });
    }
    if !normalized.is_physical() || !components.is_physical() {
        log::warn!(
            "stage {k} of order {} rejected: r1 = {}, r2 = {} (normalized)",
            spec.order(),
            normalized.r1,
            normalized.r2
        );
        return Err(DesignError::NonPositiveComponent { stage: k });
    }

    Ok(Stage {
        index: k,
        coefficient,
        normalized,
        components,
        ratio,
    })
}

/// Solve every stage of `spec` into a fixed-size array, without allocating.
///
/// `N` must equal `spec.stage_count()`. Stages are ordered by ascending `k`.
///
/// # Errors
///
/// Returns [`DesignError::SectionCount`] if `N != order / 2`, otherwise the
/// first error from [`solve_stage`].
pub fn design_stages<T: FloatScalar, const N: usize>(
    spec: &FilterSpec<T>,
) -> Result<[Stage<T>; N], DesignError> {
    if N != spec.stage_count() {
        return Err(DesignError::SectionCount);
    }
    let mut stages = [Stage::default(); N];
    for (i, stage) in stages.iter_mut().enumerate() {
        *stage = solve_stage(spec, i + 1)?;
    }
    Ok(stages)
}
