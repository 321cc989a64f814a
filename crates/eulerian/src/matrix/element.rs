//! Numeric element bound for [`Matrix`](super::Matrix).
//!
//! Restricted to the primitive signed/unsigned integers and floats. The trait is
//! sealed so `char`, `bool` and arbitrary user types cannot slip in.

use nalgebra::Scalar;
use num_traits::{AsPrimitive, Num, NumAssignOps};

mod sealed {
    pub trait Sealed {}
}

/// Arithmetic element type accepted by the matrix engine.
pub trait Element:
    Scalar + Copy + PartialOrd + Num + NumAssignOps + AsPrimitive<f64> + sealed::Sealed
{
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Element for $t {}
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
