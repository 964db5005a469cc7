//! Quantum logic gates as dense unitary matrices over the full `2^N`-state
//! space of an `N`-qubit register.
//!
//! Parametrized single-qubit gates are expanded to `N` qubits by Kronecker
//! self-product (see [`expand_to_nbits`]), and so only describe the same
//! operation applied in parallel to every qubit. Gates are applied to
//! [`Register`]s or composed with each other through the [`Apply`] trait.

use std::fmt;
use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use tracing::{ debug, trace };
use crate::{
    NORM_TOL,
    error::{ QuError, QuResult },
    nbits::{ BitWidth, nstates },
    register::Register,
    tensor::expand_to_nbits,
};

/// A single-qubit Pauli *X* matrix.
pub static PAULI_X: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut x = na::DMatrix::zeros(2, 2);
        x[(0, 1)] = C64::from(1.0);
        x[(1, 0)] = C64::from(1.0);
        x
    });

/// A single-qubit Pauli *Y* matrix.
pub static PAULI_Y: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut y = na::DMatrix::zeros(2, 2);
        y[(0, 1)] = -C64::i();
        y[(1, 0)] =  C64::i();
        y
    });

/// The two-qubit CNOT matrix, with the first (most significant) qubit as
/// control.
pub static CNOT: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut cx = na::DMatrix::zeros(4, 4);
        cx[(0, 0)] = C64::from(1.0);
        cx[(1, 1)] = C64::from(1.0);
        cx[(2, 3)] = C64::from(1.0);
        cx[(3, 2)] = C64::from(1.0);
        cx
    });

/// Identifies how a [`Gate`] was built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Kind {
    /// Identity, an explicit matrix, or the composite of two gates.
    Generic,
    /// Hadamard
    Hadamard,
    /// Phase shift by a given angle on every qubit.
    PhaseShift(f64),
    /// π rotation about X
    PauliX,
    /// π rotation about Y
    PauliY,
    /// π rotation about Z; a phase shift by π.
    PauliZ,
    /// Z-controlled π rotation about X on two qubits.
    ///
    /// The first qubit is the control.
    ControlledNot,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Generic => write!(f, "Generic"),
            Self::Hadamard => write!(f, "Hadamard"),
            Self::PhaseShift(phi) => write!(f, "PhaseShift({})", phi),
            Self::PauliX => write!(f, "PauliX"),
            Self::PauliY => write!(f, "PauliY"),
            Self::PauliZ => write!(f, "PauliZ"),
            Self::ControlledNot => write!(f, "ControlledNot"),
        }
    }
}

/// An immutable `N`-qubit gate.
///
/// The matrix is always square with size `2^N`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gate {
    nbits: usize,
    kind: Kind,
    matrix: na::DMatrix<C64>,
}

impl Gate {
    /// Create a new `nbits`-qubit identity gate.
    pub fn new<B>(nbits: B) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        let n = nstates(nbits);
        Ok(Self::build(nbits, Kind::Generic, na::DMatrix::identity(n, n)))
    }

    /// Create a generic gate from an explicit matrix.
    ///
    /// Fails if the matrix is not `2^nbits × 2^nbits` or not unitary.
    pub fn from_matrix<B>(nbits: B, matrix: na::DMatrix<C64>) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        let n = nstates(nbits);
        if matrix.nrows() != n {
            return Err(QuError::mismatch("gate matrix rows", n, matrix.nrows()));
        }
        if matrix.ncols() != n {
            return Err(QuError::mismatch("gate matrix columns", n, matrix.ncols()));
        }
        let gate = Self::build(nbits, Kind::Generic, matrix);
        if gate.is_unitary() { Ok(gate) } else { Err(QuError::NotUnitary) }
    }

    /// Create an `nbits`-qubit Hadamard gate.
    ///
    /// The matrix is the order-`2^N` Sylvester Hadamard matrix scaled by
    /// `2^(-N/2)`.
    pub fn hadamard<B>(nbits: B) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        let n = nstates(nbits);
        let scale = 2.0_f64.powf(-0.5 * nbits as f64);
        let matrix
            = na::DMatrix::from_fn(n, n, |i, j| {
                if (i & j).count_ones() % 2 == 0 {
                    C64::from(scale)
                } else {
                    C64::from(-scale)
                }
            });
        Ok(Self::build(nbits, Kind::Hadamard, matrix))
    }

    /// Create an `nbits`-qubit phase-shift gate, applying a relative phase of
    /// `phi` to ∣1⟩ on every qubit.
    ///
    /// Fails if `phi` is NaN or infinite.
    pub fn phase_shift<B>(nbits: B, phi: f64) -> QuResult<Self>
    where B: BitWidth
    {
        Self::phase_shift_kind(nbits, phi, Kind::PhaseShift(phi))
    }

    /// Create an `nbits`-qubit Pauli-X gate.
    pub fn pauli_x<B>(nbits: B) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        Ok(Self::build(nbits, Kind::PauliX, expand_to_nbits(&PAULI_X, nbits)?))
    }

    /// Create an `nbits`-qubit Pauli-Y gate.
    pub fn pauli_y<B>(nbits: B) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        Ok(Self::build(nbits, Kind::PauliY, expand_to_nbits(&PAULI_Y, nbits)?))
    }

    /// Create an `nbits`-qubit Pauli-Z gate, i.e. a phase shift by π.
    pub fn pauli_z<B>(nbits: B) -> QuResult<Self>
    where B: BitWidth
    {
        Self::phase_shift_kind(nbits, std::f64::consts::PI, Kind::PauliZ)
    }

    /// Create the two-qubit controlled-NOT gate, with the first qubit as the
    /// control.
    pub fn cnot() -> Self {
        Self::build(2, Kind::ControlledNot, CNOT.clone())
    }

    fn phase_shift_kind<B>(nbits: B, phi: f64, kind: Kind) -> QuResult<Self>
    where B: BitWidth
    {
        let nbits = nbits.to_nbits()?;
        if !phi.is_finite() {
            return Err(QuError::InvalidArgument(
                format!("phase angle must be finite! got {}", phi)));
        }
        let mut single = na::DMatrix::zeros(2, 2);
        single[(0, 0)] = C64::from(1.0);
        single[(1, 1)] = C64::cis(phi);
        Ok(Self::build(nbits, kind, expand_to_nbits(&single, nbits)?))
    }

    fn build(nbits: usize, kind: Kind, matrix: na::DMatrix<C64>) -> Self {
        debug!(nbits, kind = %kind, "built gate");
        Self { nbits, kind, matrix }
    }

    /// Return the number of qubits.
    pub fn nbits(&self) -> usize { self.nbits }

    /// Return the number of basis states, `2^N`.
    pub fn nstates(&self) -> usize { nstates(self.nbits) }

    /// Return how `self` was built.
    pub fn kind(&self) -> Kind { self.kind }

    /// Return a reference to the gate matrix.
    pub fn matrix(&self) -> &na::DMatrix<C64> { &self.matrix }

    /// Return `true` if `U†U` is the identity to within a small tolerance.
    pub fn is_unitary(&self) -> bool {
        let n = self.matrix.nrows();
        let prod = self.matrix.adjoint() * &self.matrix;
        (0..n).cartesian_product(0..n)
            .all(|(i, j)| {
                let target = if i == j { 1.0 } else { 0.0 };
                (prod[(i, j)] - target).norm() < NORM_TOL
            })
    }

    /// Compose `self` with `other` as the operator product `self · other`,
    /// i.e. `other` acts first.
    ///
    /// Both gates must have the same bit width, which is shared by the
    /// resulting (generic) gate.
    pub fn compose(&self, other: &Self) -> QuResult<Self> {
        if self.matrix.ncols() != other.matrix.nrows() {
            return Err(QuError::mismatch(
                "gate composition", self.matrix.ncols(), other.matrix.nrows()));
        }
        trace!(lhs = %self.kind, rhs = %other.kind, "composing gates");
        Ok(Self::build(self.nbits, Kind::Generic, &self.matrix * &other.matrix))
    }

    /// Evolve a register by this gate, returning the new state.
    pub fn evolve(&self, reg: &Register) -> QuResult<Register> {
        reg.check_shape()?;
        if self.matrix.ncols() != reg.amps.len() {
            return Err(QuError::mismatch(
                "gate application", self.matrix.ncols(), reg.amps.len()));
        }
        trace!(kind = %self.kind, nbits = reg.nbits, "evolving register");
        Ok(Register { nbits: reg.nbits, amps: &self.matrix * &reg.amps })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-bit {} Gate, Matrix:", self.nbits, self.kind)?;
        let entries: Vec<String>
            = self.matrix.iter().map(|a| format!("{:.3}", a)).collect();
        let width = entries.iter().map(|s| s.len()).max().unwrap_or(0);
        let n = self.matrix.nrows();
        let rows
            = (0..n)
            .map(|i| {
                (0..self.matrix.ncols())
                    // column-major storage
                    .map(|j| format!("{:>w$}", entries[i + j * n], w = width))
                    .join(" ")
            })
            .map(|row| format!("[{}]", row))
            .join("\n ");
        write!(f, "[{}]", rows)
    }
}

/// Application of a gate to an operand: either evolution of a [`Register`] or
/// composition with another [`Gate`].
pub trait Apply<T> {
    type Output;

    fn apply(&self, arg: &T) -> QuResult<Self::Output>;
}

impl Apply<Gate> for Gate {
    type Output = Gate;

    fn apply(&self, arg: &Gate) -> QuResult<Gate> { self.compose(arg) }
}

impl Apply<Register> for Gate {
    type Output = Register;

    fn apply(&self, arg: &Register) -> QuResult<Register> { self.evolve(arg) }
}
