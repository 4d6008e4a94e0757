//! Butterworth low-pass design with unity-gain Sallen-Key stages.
//!
//! An order-`n` Butterworth low-pass (n even) factors into `n/2` second-order
//! sections `s² + B·s + 1`, one per conjugate pole pair. Each section is
//! realized by one unity-gain Sallen-Key stage whose transfer function is
//!
//! ```text
//! H(s) = 1 / (R1·R2·C1·C2·s² + C2·(R1 + R2)·s + 1)
//! ```
//!
//! Design runs in three steps per stage:
//!
//! 1. [`pole_coefficient`] — the `B` of the stage's section.
//! 2. [`solve_capacitors`] (resistors fixed at 1) or [`solve_resistors`]
//!    (`c2` fixed at 1, `c1` an integer multiple) — normalized components.
//! 3. [`Denormalization`] — scale to the requested cutoff and reference value.
//!
//! [`solve_stage`] composes the three for one pole pair; [`FilterDesign`]
//! (heap-backed) and [`design_stages`] (fixed-size) solve the whole cascade.
//!
//! # Examples
//!
//! ```
//! use sallenkey::design::{FilterDesign, FilterSpec, Reference};
//!
//! // 4th-order at 1 kHz with 10 kΩ resistors
//! let spec = FilterSpec::new(4, Some(1000.0_f64), Reference::Resistance(10e3)).unwrap();
//! let design = FilterDesign::solve(&spec).unwrap();
//! assert_eq!(design.len(), 2);
//! assert_eq!(design.stages()[1].index(), 2);
//! ```
//!
//! ```
//! use sallenkey::design::{design_stages, FilterSpec, Reference, Stage};
//!
//! // No allocation: N must equal order / 2
//! let spec = FilterSpec::new(4, None, Reference::Capacitance(1e-9_f64)).unwrap();
//! let stages: [Stage<f64>; 2] = design_stages(&spec).unwrap();
//! assert_eq!(stages[0].ratio(), Some(7));
//! ```

mod denorm;
#[cfg(feature = "alloc")]
mod filter;
mod pole;
mod solver;
mod spec;
mod stage;


pub use denorm::Denormalization;
#[cfg(feature = "alloc")]
pub use filter::FilterDesign;
pub use pole::{pole_coefficient, pole_coefficient_checked};
pub use solver::{solve_capacitors, solve_resistors, Components, ResistorSearch, ResistorSolution};
pub use spec::{FilterSpec, Reference, UNIT_CUTOFF_HZ};
pub use stage::{design_stages, solve_stage, solve_stage_with, Stage};

/// Errors from filter specification and stage solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignError {
    /// Filter order is zero or odd.
    InvalidOrder,
    /// Cutoff frequency is not finite and positive.
    InvalidFrequency,
    /// Reference resistance or capacitance is not finite and positive.
    InvalidReference,
    /// Neither a reference resistance nor a reference capacitance was given.
    MissingReference,
    /// Both a reference resistance and a reference capacitance were given.
    ConflictingReference,
    /// Pole index `k` is outside `[1, order / 2]`.
    InvalidStageIndex,
    /// `N` (number of stages) does not equal `order / 2`.
    SectionCount,
    /// Pole coefficient handed to a solver is not finite and positive.
    InvalidCoefficient,
    /// The first admissible capacitor ratio lies beyond the search limit.
    SearchExhausted,
    /// A solved component value of the given stage is not strictly positive.
    NonPositiveComponent {
        /// 1-based pole index of the failing stage.
        stage: usize,
    },
    /// A solved component value of the given stage overflowed or is NaN.
    NonFiniteComponent {
        /// 1-based pole index of the failing stage.
        stage: usize,
    },
}

impl core::fmt::Display for DesignError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DesignError::InvalidOrder => write!(f, "filter order must be a positive even number"),
            DesignError::InvalidFrequency => {
                write!(f, "cutoff frequency must be positive and finite")
            }
            DesignError::InvalidReference => {
                write!(f, "reference resistance/capacitance must be positive and finite")
            }
            DesignError::MissingReference => {
                write!(f, "either a reference resistance or capacitance is required")
            }
            DesignError::ConflictingReference => {
                write!(f, "only one of reference resistance or capacitance may be given")
            }
            DesignError::InvalidStageIndex => write!(f, "stage index must be in [1, order/2]"),
            DesignError::SectionCount => write!(f, "stage count must equal order/2"),
            DesignError::InvalidCoefficient => {
                write!(f, "pole coefficient must be positive and finite")
            }
            DesignError::SearchExhausted => {
                write!(f, "capacitor ratio search exceeded its limit")
            }
            DesignError::NonPositiveComponent { stage } => {
                write!(f, "stage {stage} solves to a non-positive component value")
            }
            DesignError::NonFiniteComponent { stage } => {
                write!(f, "stage {stage} solves to a non-finite component value")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DesignError {}
