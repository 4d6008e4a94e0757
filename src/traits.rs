use core::fmt::{Debug, Display};
use num_traits::Float;

/// Trait for the real floating-point types component values are computed in.
///
/// Implemented for `f32` and `f64`. Provides lossless-enough conversions from
/// `f64` literals and from stage/order indices so the design code never has to
/// go through a fallible `NumCast`.
pub trait FloatScalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Convert an `f64` constant into `Self`.
    fn lit(v: f64) -> Self;

    /// Convert an index or count into `Self`.
    fn from_index(i: usize) -> Self;
}

/// Concrete impls for real floats — plain `as` casts.
macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn lit(v: f64) -> $t { v as $t }
                #[inline] fn from_index(i: usize) -> $t { i as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// `true` when `x` is finite and strictly greater than zero.
#[inline]
pub(crate) fn is_positive_finite<T: FloatScalar>(x: T) -> bool {
    x.is_finite() && x > T::zero()
}
