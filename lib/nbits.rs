//! Validation of caller-supplied bit widths.
//!
//! Every register and gate constructor funnels its bit width through
//! [`BitWidth::to_nbits`], so that zero, negative, non-integer, and oversized
//! widths are all rejected with the same [`QuError::InvalidArgument`].

use std::fmt;
use crate::error::{ QuError, QuResult };

/// Largest accepted bit width, such that `2^N` still fits in a `usize`.
pub const MAX_NBITS: usize = (usize::BITS - 1) as usize;

/// Anything that can be interpreted as the number of qubits in a register or
/// gate.
pub trait BitWidth: Copy + fmt::Display {
    /// Convert to a qubit count in `1..=MAX_NBITS`.
    fn to_nbits(self) -> QuResult<usize>;
}

fn check<T>(n: Option<usize>, raw: T) -> QuResult<usize>
where T: fmt::Display
{
    n.filter(|n| (1..=MAX_NBITS).contains(n))
        .ok_or_else(|| {
            QuError::InvalidArgument(
                format!("NBits must be a positive integer! got {}", raw))
        })
}

macro_rules! impl_bitwidth_int {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl BitWidth for $t {
                fn to_nbits(self) -> QuResult<usize> {
                    check(usize::try_from(self).ok(), self)
                }
            }
        )*
    }
}
impl_bitwidth_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_bitwidth_float {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl BitWidth for $t {
                fn to_nbits(self) -> QuResult<usize> {
                    let n =
                        (
                            self.is_finite()
                            && self.fract() == 0.0
                            && self >= 1.0
                            && self <= MAX_NBITS as $t
                        )
                        .then_some(self as usize);
                    check(n, self)
                }
            }
        )*
    }
}
impl_bitwidth_float!(f32, f64);

/// Return the number of basis states, `2^nbits`.
///
/// `nbits` must already have been validated.
pub(crate) fn nstates(nbits: usize) -> usize { 1_usize << nbits }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(1_u8.to_nbits(), Ok(1));
        assert_eq!(3_i32.to_nbits(), Ok(3));
        assert_eq!(5_usize.to_nbits(), Ok(5));
        assert_eq!(2.0_f64.to_nbits(), Ok(2));
        assert_eq!(MAX_NBITS.to_nbits(), Ok(MAX_NBITS));
    }

    #[test]
    fn rejects_non_positive() {
        assert!(matches!(0_usize.to_nbits(), Err(QuError::InvalidArgument(_))));
        assert!(matches!(0_i32.to_nbits(), Err(QuError::InvalidArgument(_))));
        assert!(matches!((-1_i32).to_nbits(), Err(QuError::InvalidArgument(_))));
        assert!(matches!((-1.0_f64).to_nbits(), Err(QuError::InvalidArgument(_))));
        assert!(matches!(0.0_f32.to_nbits(), Err(QuError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_non_integer() {
        assert!(matches!(1.5_f64.to_nbits(), Err(QuError::InvalidArgument(_))));
        assert!(matches!(f64::NAN.to_nbits(), Err(QuError::InvalidArgument(_))));
        assert!(matches!(f64::INFINITY.to_nbits(), Err(QuError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_oversized() {
        assert!(matches!(
            (MAX_NBITS + 1).to_nbits(),
            Err(QuError::InvalidArgument(_))
        ));
    }

    #[test]
    fn nstates_is_power_of_two() {
        assert_eq!(nstates(1), 2);
        assert_eq!(nstates(3), 8);
    }
}
