use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::solver::ResistorSearch;
use super::spec::FilterSpec;
use super::stage::{solve_stage_with, Stage};
use super::DesignError;

/// A complete cascade: one solved [`Stage`] per pole pair, in ascending `k`.
///
/// # Example
///
/// ```
/// use sallenkey::design::{FilterDesign, FilterSpec, Reference};
///
/// let spec = FilterSpec::new(8, Some(50.0_f64), Reference::Capacitance(100e-9)).unwrap();
/// let design = FilterDesign::solve(&spec).unwrap();
/// let ks: Vec<usize> = design.iter().map(|s| s.index()).collect();
/// assert_eq!(ks, [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDesign<T> {
    spec: FilterSpec<T>,
    stages: Vec<Stage<T>>,
}

impl<T: FloatScalar> FilterDesign<T> {
    /// Solve all `order / 2` stages of `spec`.
    ///
    /// # Errors
    ///
    /// The first error returned by any stage; no partial design is produced.
    pub fn solve(spec: &FilterSpec<T>) -> Result<Self, DesignError> {
        Self::solve_with(spec, &ResistorSearch::default())
    }

    /// [`solve`](Self::solve) with explicit ratio search settings.
    pub fn solve_with(spec: &FilterSpec<T>, search: &ResistorSearch) -> Result<Self, DesignError> {
        let stages = (1..=spec.stage_count())
            .map(|k| solve_stage_with(spec, k, search))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { spec: *spec, stages })
    }

    /// The specification this design was solved for.
    #[inline]
    pub fn spec(&self) -> &FilterSpec<T> {
        &self.spec
    }

    /// Solved stages, ordered by pole index.
    #[inline]
    pub fn stages(&self) -> &[Stage<T>] {
        &self.stages
    }

    /// Number of stages (`order / 2`).
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// `true` only for an empty cascade, which a valid spec never produces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterate over the stages in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Stage<T>> {
        self.stages.iter()
    }
}

impl<'a, T> IntoIterator for &'a FilterDesign<T> {
    type Item = &'a Stage<T>;
    type IntoIter = core::slice::Iter<'a, Stage<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
