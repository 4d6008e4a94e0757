use crate::traits::FloatScalar;

use super::solver::Components;
use super::spec::{FilterSpec, Reference};

/// Frequency and reference scaling between normalized and absolute values.
///
/// Scaling happens in two passes over all four components:
///
/// 1. Frequency: when a cutoff `fc` is set, every value is multiplied by
///    `ω = 2π·fc`.
/// 2. Reference: a fixed resistance `R0` multiplies the resistors and divides
///    the capacitors; a fixed capacitance `C0` multiplies the capacitors and
///    divides the resistors.
///
/// # Example
///
/// ```
/// use sallenkey::design::{Components, Denormalization, Reference};
///
/// let scale = Denormalization::new(None, Reference::Resistance(1e3_f64));
/// let abs = scale.apply(Components::new(1.0, 1.0, 2.0, 0.5));
/// assert_eq!(abs, Components::new(1e3, 1e3, 2e-3, 5e-4));
/// assert_eq!(scale.invert(abs), Components::new(1.0, 1.0, 2.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denormalization<T> {
    omega: Option<T>,
    reference: Reference<T>,
}

impl<T: FloatScalar> Denormalization<T> {
    /// Scaling for an optional cutoff frequency (Hz) and a reference value.
    pub fn new(cutoff: Option<T>, reference: Reference<T>) -> Self {
        let two_pi = T::lit(2.0 * core::f64::consts::PI);
        Self {
            omega: cutoff.map(|fc| two_pi * fc),
            reference,
        }
    }

    /// Scaling implied by a validated spec.
    pub fn from_spec(spec: &FilterSpec<T>) -> Self {
        Self::new(spec.cutoff(), spec.reference())
    }

    /// Angular frequency factor `2π·fc`, if a cutoff was given.
    #[inline]
    pub fn omega(&self) -> Option<T> {
        self.omega
    }

    /// Normalized → absolute.
    pub fn apply(&self, normalized: Components<T>) -> Components<T> {
        let freq = self.frequency_factor();
        let scaled = normalized.map(|r| r * freq, |c| c * freq);
        match self.reference {
            Reference::Resistance(r0) => scaled.map(|r| r * r0, |c| c / r0),
            Reference::Capacitance(c0) => scaled.map(|r| r / c0, |c| c * c0),
        }
    }

    /// Absolute → normalized; the exact inverse of [`apply`](Self::apply).
    pub fn invert(&self, absolute: Components<T>) -> Components<T> {
        let unscaled = match self.reference {
            Reference::Resistance(r0) => absolute.map(|r| r / r0, |c| c * r0),
            Reference::Capacitance(c0) => absolute.map(|r| r * c0, |c| c / c0),
        };
        let freq = self.frequency_factor();
        unscaled.map(|r| r / freq, |c| c / freq)
    }

    #[inline]
    fn frequency_factor(&self) -> T {
        self.omega.unwrap_or_else(T::one)
    }
}
