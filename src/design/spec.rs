use crate::traits::{is_positive_finite, FloatScalar};

use super::DesignError;

/// Cutoff frequency that makes the angular cutoff exactly 1 rad/s: `1/(2π)` Hz.
pub const UNIT_CUTOFF_HZ: f64 = 0.159_154_943_091_895_35;

/// The component value the designer fixes up front.
///
/// Fixing a resistance leaves the capacitors to be solved; fixing a
/// capacitance leaves the resistors to be solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reference<T> {
    /// Every resistor equals this value (ohms).
    Resistance(T),
    /// Smallest capacitor (farads); the other is an integer multiple of it.
    Capacitance(T),
}

impl<T: FloatScalar> Reference<T> {
    /// Build a reference from the two optional values a user may supply.
    ///
    /// Exactly one must be present.
    ///
    /// # Example
    ///
    /// ```
    /// use sallenkey::design::{DesignError, Reference};
    ///
    /// assert_eq!(Reference::from_options(Some(1e3_f64), None), Ok(Reference::Resistance(1e3)));
    /// assert_eq!(Reference::<f64>::from_options(None, None), Err(DesignError::MissingReference));
    /// ```
    pub fn from_options(res: Option<T>, cap: Option<T>) -> Result<Self, DesignError> {
        match (res, cap) {
            (Some(r), None) => Ok(Reference::Resistance(r)),
            (None, Some(c)) => Ok(Reference::Capacitance(c)),
            (Some(_), Some(_)) => Err(DesignError::ConflictingReference),
            (None, None) => Err(DesignError::MissingReference),
        }
    }

    /// The reference magnitude, whichever kind it is.
    #[inline]
    pub fn value(&self) -> T {
        match *self {
            Reference::Resistance(v) | Reference::Capacitance(v) => v,
        }
    }
}

/// Validated design input: order, optional cutoff and one reference value.
///
/// Construction only validates; nothing is solved until the spec is handed
/// to [`solve_stage`](super::solve_stage) or a design builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec<T> {
    order: usize,
    cutoff: Option<T>,
    reference: Reference<T>,
}

impl<T: FloatScalar> FilterSpec<T> {
    /// Validate and build a filter specification.
    ///
    /// # Errors
    ///
    /// - [`DesignError::InvalidOrder`] if `order` is zero or odd.
    /// - [`DesignError::InvalidFrequency`] if `cutoff` is present and not positive/finite.
    /// - [`DesignError::InvalidReference`] if the reference value is not positive/finite.
    ///
    /// # Example
    ///
    /// ```
    /// use sallenkey::design::{DesignError, FilterSpec, Reference};
    ///
    /// let spec = FilterSpec::new(6, Some(440.0_f64), Reference::Capacitance(10e-9)).unwrap();
    /// assert_eq!(spec.stage_count(), 3);
    ///
    /// let odd = FilterSpec::new(3, None, Reference::Resistance(1.0_f64));
    /// assert_eq!(odd, Err(DesignError::InvalidOrder));
    /// ```
    pub fn new(order: usize, cutoff: Option<T>, reference: Reference<T>) -> Result<Self, DesignError> {
        if order == 0 || order % 2 != 0 {
            return Err(DesignError::InvalidOrder);
        }
        if let Some(fc) = cutoff {
            if !is_positive_finite(fc) {
                return Err(DesignError::InvalidFrequency);
            }
        }
        if !is_positive_finite(reference.value()) {
            return Err(DesignError::InvalidReference);
        }
        Ok(Self {
            order,
            cutoff,
            reference,
        })
    }

    /// Validate a specification given as separate optional resistance and
    /// capacitance, the way a command line supplies them.
    ///
    /// The order is checked first, then the reference pair.
    pub fn from_options(
        order: usize,
        cutoff: Option<T>,
        res: Option<T>,
        cap: Option<T>,
    ) -> Result<Self, DesignError> {
        if order == 0 || order % 2 != 0 {
            return Err(DesignError::InvalidOrder);
        }
        let reference = Reference::from_options(res, cap)?;
        Self::new(order, cutoff, reference)
    }

    /// Filter order `n`.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Cutoff frequency in Hz, if one was given.
    #[inline]
    pub fn cutoff(&self) -> Option<T> {
        self.cutoff
    }

    /// The fixed reference value.
    #[inline]
    pub fn reference(&self) -> Reference<T> {
        self.reference
    }

    /// Number of second-order stages, `n / 2`.
    #[inline]
    pub fn stage_count(&self) -> usize {
        self.order / 2
    }
}
