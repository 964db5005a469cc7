//! *N*-qubit registers represented as dense vectors of complex probability
//! amplitudes.
//!
//! Basis states are indexed by their integer encoding, with qubit 0 at the
//! most significant bit, so that a register of `N` qubits holds `2^N`
//! amplitudes.

use std::fmt;
use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex64 as C64;
use rand::Rng;
use tracing::debug;
use crate::{
    NORM_TOL,
    error::{ QuError, QuResult },
    nbits::{ BitWidth, nstates },
    tensor::tensor_product,
};

/// The state of an `N`-qubit register.
///
/// The squared magnitudes of the amplitudes always sum to 1 (up to
/// floating-point error). A register is only ever replaced wholesale by the
/// output of a gate application; it is never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Register {
    pub(crate) nbits: usize,
    pub(crate) amps: na::DVector<C64>,
}

impl Register {
    /// Create a new register of `nbits` qubits, initialized to ∣0...0⟩.
    pub fn new<B>(nbits: B) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        let mut amps = na::DVector::zeros(nstates(nbits));
        amps[0] = C64::from(1.0);
        Ok(Self { nbits, amps })
    }

    /// Create a register from an explicit amplitude vector.
    ///
    /// Fails if the vector does not have exactly `2^nbits` entries or is not
    /// normalized.
    pub fn from_amplitudes<B>(nbits: B, amps: na::DVector<C64>)
        -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        let reg = Self { nbits, amps };
        reg.check_shape()?;
        let norm = reg.amps.norm_squared();
        if (norm - 1.0).abs() > NORM_TOL {
            return Err(QuError::NotNormalized(norm));
        }
        Ok(reg)
    }

    /// Return the number of qubits.
    pub fn nbits(&self) -> usize { self.nbits }

    /// Return the number of basis states, `2^N`.
    pub fn nstates(&self) -> usize { nstates(self.nbits) }

    /// Return a reference to the amplitude vector.
    pub fn amplitudes(&self) -> &na::DVector<C64> { &self.amps }

    pub(crate) fn check_shape(&self) -> QuResult<()> {
        if self.amps.len() == self.nstates() {
            Ok(())
        } else {
            Err(QuError::mismatch(
                "register amplitudes", self.nstates(), self.amps.len()))
        }
    }

    /// Return the probability associated with observing each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sample a basis state according to [`probabilities`][Self::probabilities]
    /// and return its integer index.
    ///
    /// The register is left untouched; no post-measurement collapse is
    /// performed.
    pub fn observe_with<R>(&self, rng: &mut R) -> usize
    where R: Rng + ?Sized
    {
        let probs = self.probabilities();
        let total: f64 = probs.iter().sum();
        let r: f64 = rng.gen::<f64>() * total;
        let mut acc: f64 = 0.0;
        let outcome
            = probs.iter()
            .position(|p| { acc += p; r < acc })
            // r landed past the last bin through rounding
            .or_else(|| probs.iter().rposition(|p| *p > 0.0))
            .unwrap_or(0);
        debug!(nbits = self.nbits, outcome, "observed register");
        outcome
    }

    /// Like [`observe_with`][Self::observe_with], using the thread-local
    /// generator.
    pub fn observe(&self) -> usize { self.observe_with(&mut rand::thread_rng()) }

    /// Join `self` with `other` into a single larger register, with `self` at
    /// the most significant bits.
    ///
    /// See [`tensor_product`].
    pub fn join(&self, other: &Self) -> QuResult<Self> {
        tensor_product(self, other)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines
            = self.amps.iter().enumerate()
            .map(|(k, a)| format!("{:>15} |{:<2}>", format!("{:.3}", a), k))
            .join(" +\n");
        write!(f, "{}", lines)
    }
}
