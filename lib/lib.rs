//! Tools for the classical simulation of small quantum circuits.
//!
//! An *N*-qubit [`Register`] is held as a dense vector of `2^N` complex
//! probability amplitudes and every [`Gate`] as a dense `2^N × 2^N` unitary
//! matrix. Gates are applied to registers (state evolution) or to other gates
//! (operator composition) through [`Apply`], and registers can be joined by
//! tensor product or sampled in the computational basis.
//!
//! Memory grows as `4^N` for gates, so this is only suitable for small `N`.

pub mod error;
pub mod nbits;
pub mod tensor;
pub mod register;
pub mod gate;

pub use error::{ QuError, QuResult };
pub use gate::{ Apply, Gate, Kind };
pub use register::Register;
pub use tensor::{ expand_to_nbits, tensor_product };

/// Tolerance used when checking normalization and unitarity.
pub const NORM_TOL: f64 = 1e-9;
