use crate::traits::FloatScalar;

use super::DesignError;

/// Coefficient `B` of the normalized section `s² + B·s + 1` for pole pair `k`
/// of an order-`n` Butterworth prototype.
///
/// `B = -2·cos(π·(2k + n - 1) / (2n))`, which lies in `(0, 2)` for every
/// `1 ≤ k ≤ n/2`. No range check is done here; see
/// [`pole_coefficient_checked`].
///
/// # Example
///
/// ```
/// use sallenkey::design::pole_coefficient;
///
/// // 2nd-order: B = √2
/// let b: f64 = pole_coefficient(2, 1);
/// assert!((b - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn pole_coefficient<T: FloatScalar>(order: usize, k: usize) -> T {
    let two = T::lit(2.0);
    let pi = T::lit(core::f64::consts::PI);
    let nf = T::from_index(order);
    let kf = T::from_index(k);

    // θ_k = π·(2k + n - 1) / (2n), in the left half-plane
    let theta = pi * (two * kf + nf - T::one()) / (two * nf);
    -two * theta.cos()
}

/// [`pole_coefficient`] with the order and pole index validated.
///
/// # Errors
///
/// Returns [`DesignError::InvalidOrder`] if `order` is zero or odd, and
/// [`DesignError::InvalidStageIndex`] if `k` is not in `[1, order/2]`.
pub fn pole_coefficient_checked<T: FloatScalar>(order: usize, k: usize) -> Result<T, DesignError> {
    if order == 0 || order % 2 != 0 {
        return Err(DesignError::InvalidOrder);
    }
    if k == 0 || k > order / 2 {
        return Err(DesignError::InvalidStageIndex);
    }
    Ok(pole_coefficient(order, k))
}
