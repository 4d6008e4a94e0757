//! # sallenkey
//!
//! Component values for even-order Butterworth low-pass filters built as a
//! cascade of unity-gain Sallen-Key stages. no-std compatible; the
//! heap-backed [`FilterDesign`] needs the `alloc` feature.
//!
//! ## Quick start
//!
//! ```
//! use sallenkey::{FilterDesign, FilterSpec, Reference};
//!
//! // 4th-order at 1 kHz, capacitors built from multiples of 10 nF
//! let spec = FilterSpec::new(4, Some(1000.0_f64), Reference::Capacitance(10e-9)).unwrap();
//! let design = FilterDesign::solve(&spec).unwrap();
//! for stage in &design {
//!     println!("STAGE {}\n{}", stage.index(), stage);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`design`] — validated [`FilterSpec`], pole coefficients, the
//!   capacitor and resistor solvers, denormalization, and stage/cascade
//!   assembly. All operations return [`DesignError`] on failure.
//!
//! - [`units`] — [`Engineering`](units::Engineering) display wrapper for
//!   values with `p`…`G` prefixes.
//!
//! - [`schematic`] — ASCII drawing of one stage.
//!
//! - [`traits`] — [`FloatScalar`], the `f32`/`f64` element trait every
//!   algorithm is generic over.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` |
//! | `alloc` | via std | `FilterDesign` (heap-allocated stage list) |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; install
//! any logger to see the capacitor ratio search and rejected stages.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod design;
pub mod schematic;
pub mod traits;
pub mod units;

#[cfg(feature = "alloc")]
pub use design::FilterDesign;
pub use design::{Components, DesignError, FilterSpec, Reference, Stage};
pub use traits::FloatScalar;
