//! Kronecker (tensor) products of gate matrices and register states.
//!
//! In both cases the left-hand operand occupies the most-significant bits of
//! the resulting basis-state index.

use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex64 as C64;
use tracing::trace;
use crate::{
    error::{ QuError, QuResult },
    nbits::BitWidth,
    register::Register,
};

/// Expand a single-qubit matrix to `nbits` qubits by repeated Kronecker
/// self-product, `m ⊗ m ⊗ ... ⊗ m`.
///
/// The result has shape `2^nbits × 2^nbits` and acts identically and
/// independently on every qubit.
pub fn expand_to_nbits<B>(single: &na::DMatrix<C64>, nbits: B)
    -> QuResult<na::DMatrix<C64>>
where B: BitWidth
{
    let nbits = nbits.to_nbits()?;
    if single.shape() != (2, 2) {
        return Err(QuError::mismatch(
            "single-qubit matrix", 2, single.nrows().max(single.ncols())));
    }
    trace!(nbits, "expanding single-qubit matrix");
    Ok((1..nbits).fold(single.clone(), |acc, _| acc.kronecker(single)))
}

/// Join two registers into a single larger register, with `a` at the most
/// significant bits and `b` at the least.
///
/// Fails if either operand's amplitude vector is the wrong length for its
/// declared bit width, or if the joined width is too large to index.
pub fn tensor_product(a: &Register, b: &Register) -> QuResult<Register> {
    a.check_shape()?;
    b.check_shape()?;
    let nbits = (a.nbits() + b.nbits()).to_nbits()?;
    trace!(a = a.nbits(), b = b.nbits(), "joining registers");
    let amps = na::DVector::from_iterator(
        a.nstates() * b.nstates(),
        a.amplitudes().iter()
            .cartesian_product(b.amplitudes().iter())
            .map(|(ak, bk)| *ak * *bk),
    );
    Register::from_amplitudes(nbits, amps)
}

#[cfg(test)]
mod test {
    use super::*;

    fn c(re: f64) -> C64 { C64::from(re) }

    #[test]
    fn expand_single_bit_is_identity_op() {
        let x = na::DMatrix::from_row_slice(2, 2, &[c(0.0), c(1.0), c(1.0), c(0.0)]);
        assert_eq!(expand_to_nbits(&x, 1).unwrap(), x);
    }

    #[test]
    fn expand_two_bits() {
        let z = na::DMatrix::from_row_slice(2, 2, &[c(1.0), c(0.0), c(0.0), c(-1.0)]);
        let zz = expand_to_nbits(&z, 2).unwrap();
        assert_eq!(zz.shape(), (4, 4));
        let diag: Vec<C64> = zz.diagonal().iter().copied().collect();
        assert_eq!(diag, vec![c(1.0), c(-1.0), c(-1.0), c(1.0)]);
        assert_eq!(zz[(0, 1)], c(0.0));
    }

    #[test]
    fn expand_three_bits_shape() {
        let i = na::DMatrix::<C64>::identity(2, 2);
        assert_eq!(expand_to_nbits(&i, 3).unwrap(), na::DMatrix::identity(8, 8));
    }

    #[test]
    fn expand_rejects_bad_input() {
        let i = na::DMatrix::<C64>::identity(2, 2);
        assert!(matches!(expand_to_nbits(&i, 0), Err(QuError::InvalidArgument(_))));
        let big = na::DMatrix::<C64>::identity(4, 4);
        assert!(matches!(
            expand_to_nbits(&big, 2),
            Err(QuError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn join_puts_left_at_msb() {
        // |1> ⊗ |0> = |10> = index 2
        let one = Register::from_amplitudes(
            1, na::DVector::from_vec(vec![c(0.0), c(1.0)])).unwrap();
        let zero = Register::new(1).unwrap();
        let joined = tensor_product(&one, &zero).unwrap();
        assert_eq!(joined.nbits(), 2);
        assert_eq!(joined.nstates(), 4);
        assert_eq!(joined.probabilities(), vec![0.0, 0.0, 1.0, 0.0]);

        let swapped = tensor_product(&zero, &one).unwrap();
        assert_eq!(swapped.probabilities(), vec![0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn join_is_associative() {
        use std::f64::consts::FRAC_1_SQRT_2 as ORT2;
        let a = Register::from_amplitudes(
            1, na::DVector::from_vec(vec![c(ORT2), c(ORT2)])).unwrap();
        let b = Register::from_amplitudes(
            1, na::DVector::from_vec(vec![c(0.0), C64::i()])).unwrap();
        let c3 = Register::from_amplitudes(
            1, na::DVector::from_vec(vec![c(0.6), c(0.8)])).unwrap();
        let left = tensor_product(&tensor_product(&a, &b).unwrap(), &c3).unwrap();
        let right = tensor_product(&a, &tensor_product(&b, &c3).unwrap()).unwrap();
        assert_eq!(left.nbits(), 3);
        assert_eq!(right.nbits(), 3);
        left.amplitudes().iter().zip(right.amplitudes().iter())
            .for_each(|(l, r)| { assert!((l - r).norm() < 1e-12); });
    }

    #[test]
    fn malformed_register_rejected() {
        let bad = Register {
            nbits: 2,
            amps: na::DVector::from_vec(vec![c(1.0), c(0.0)]),
        };
        let good = Register::new(1).unwrap();
        let expected = Err(QuError::DimensionMismatch {
            context: "register amplitudes",
            expected: 4,
            got: 2,
        });
        assert_eq!(tensor_product(&bad, &good), expected);
        assert_eq!(tensor_product(&good, &bad), expected);
        assert_eq!(bad.join(&good), expected);
        assert_eq!(crate::gate::Gate::new(2).unwrap().evolve(&bad), expected);
    }
}
