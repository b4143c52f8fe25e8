// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("progress_ring requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn floor(self) -> Self => floor;
    fn sqrt(self) -> Self => sqrt;
    fn sin_cos(self) -> (Self, Self) => sincos;
}

/// Rounds to the nearest integer, with halfway cases rounded towards
/// positive infinity.
///
/// This differs from [`f64::round`], which rounds halfway cases away from
/// zero: `-2.5` becomes `-2.0` here rather than `-3.0`. Negative results
/// that round to zero come back as positive zero.
///
/// # Examples
///
/// ```
/// use progress_ring::common::round_half_up;
///
/// assert_eq!(round_half_up(49.5), 50.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-0.4).to_string(), "0");
/// ```
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    let r = (x + 0.5).floor();
    // Large magnitudes are already integral and `x + 0.5` may not be exact.
    if x.abs() >= 4503599627370496.0 {
        x
    } else if r == 0.0 {
        0.0
    } else {
        r
    }
}
