// src/quantum/state.rs
//! State vector representation and gate kernels
//!
//! Basis index `i` encodes one bit per qubit with qubit 0 as the most
//! significant bit, so the bitstring of `i` reads left to right as qubit 0,
//! qubit 1, and so on.

use std::fmt::{self, Display};

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{QuantumError, Result};
use crate::quantum::gate::Gate;

/// Dense state of an n-qubit register.
///
/// Gates are applied through a double buffer: each kernel reads the current
/// amplitudes and writes a complete new vector into the scratch buffer, then
/// the two are swapped. No kernel reads a slot it has already written.
#[derive(Clone, Debug)]
pub struct StateVector {
    /// Number of qubits
    qubit_count: usize,

    /// The state vector as an array of complex amplitudes
    amplitudes: Array1<Complex64>,

    /// Write target for the next gate application
    scratch: Array1<Complex64>,
}

impl StateVector {
    /// Create the zero state |00...0⟩
    pub fn zero_state(qubit_count: usize) -> Self {
        let dim = 1 << qubit_count;
        let mut amplitudes = Array1::zeros(dim);
        amplitudes[0] = Complex64::new(1.0, 0.0);

        StateVector {
            qubit_count,
            amplitudes,
            scratch: Array1::zeros(dim),
        }
    }

    /// Number of qubits in the register
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimension of the state space (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Consume the state, returning its amplitudes
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes.into_raw_vec()
    }

    /// Probability of observing basis state `index`
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, |amp| amp.norm_sqr())
    }

    /// Squared magnitude of every amplitude, in basis order
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    /// Sum of squared magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Bitstring label of basis index `index`, qubit 0 first
    pub fn basis_label(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.qubit_count)
    }

    /// Bit mask of qubit `qubit` within a basis index
    fn mask(&self, qubit: usize) -> usize {
        1 << (self.qubit_count - 1 - qubit)
    }

    /// Apply a gate, failing if it touches a qubit outside the register
    pub fn apply(&mut self, gate: &Gate) -> Result<()> {
        if let Some(&index) = gate.qubits().iter().find(|&&q| q >= self.qubit_count) {
            return Err(QuantumError::QubitOutOfRange {
                index,
                num_qubits: self.qubit_count,
            });
        }

        if let Some((target, matrix)) = gate.single_qubit_matrix() {
            if !matches!(gate, Gate::I(_)) {
                self.apply_single(target, &matrix);
            }
            return Ok(());
        }

        match *gate {
            Gate::Cnot { control, target } => {
                let control = self.mask(control);
                let target = self.mask(target);
                self.permute(|i| if i & control != 0 { i ^ target } else { i });
            }
            Gate::Cz { control, target } => {
                let both = self.mask(control) | self.mask(target);
                self.apply_phase(both, Complex64::new(-1.0, 0.0));
            }
            Gate::Swap(a, b) => {
                let (a, b) = (self.mask(a), self.mask(b));
                self.permute(|i| swap_bits(i, a, b));
            }
            Gate::Ccx { controls, target } => {
                let controls = self.mask(controls[0]) | self.mask(controls[1]);
                let target = self.mask(target);
                self.permute(|i| if i & controls == controls { i ^ target } else { i });
            }
            Gate::Cswap { control, targets } => {
                let control = self.mask(control);
                let (a, b) = (self.mask(targets[0]), self.mask(targets[1]));
                self.permute(|i| if i & control != 0 { swap_bits(i, a, b) } else { i });
            }
            // Single-qubit variants are handled above
            _ => {}
        }

        Ok(())
    }

    /// Apply a 2x2 unitary to `target`.
    ///
    /// Each index with the target bit clear is paired with its partner
    /// `j = i | mask`; both new amplitudes come from the old pair.
    fn apply_single(&mut self, target: usize, matrix: &[[Complex64; 2]; 2]) {
        let mask = self.mask(target);
        let [[m00, m01], [m10, m11]] = *matrix;

        for i in (0..self.dimension()).filter(|i| i & mask == 0) {
            let j = i | mask;
            let a0 = self.amplitudes[i];
            let a1 = self.amplitudes[j];
            self.scratch[i] = m00 * a0 + m01 * a1;
            self.scratch[j] = m10 * a0 + m11 * a1;
        }

        std::mem::swap(&mut self.amplitudes, &mut self.scratch);
    }

    /// Multiply by `phase` every amplitude whose index has all bits of `bits` set
    fn apply_phase(&mut self, bits: usize, phase: Complex64) {
        for i in 0..self.dimension() {
            let amp = self.amplitudes[i];
            self.scratch[i] = if i & bits == bits { amp * phase } else { amp };
        }

        std::mem::swap(&mut self.amplitudes, &mut self.scratch);
    }

    /// Relabel basis states: the new amplitude at `i` is the old one at `source(i)`.
    /// `source` must be a permutation.
    fn permute<F>(&mut self, source: F)
    where
        F: Fn(usize) -> usize,
    {
        for i in 0..self.dimension() {
            self.scratch[i] = self.amplitudes[source(i)];
        }

        std::mem::swap(&mut self.amplitudes, &mut self.scratch);
    }
}

/// Exchange the bits selected by single-bit masks `a` and `b`
fn swap_bits(index: usize, a: usize, b: usize) -> usize {
    if (index & a != 0) != (index & b != 0) {
        index ^ (a | b)
    } else {
        index
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.qubit_count)?;

        let threshold = 1e-10;
        let mut has_entries = false;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sqr();
            if prob > threshold {
                has_entries = true;
                writeln!(
                    f,
                    "  ({:.6}{:+.6}i) |{}⟩ [{:.1}%]",
                    amp.re,
                    amp.im,
                    self.basis_label(i),
                    prob * 100.0
                )?;
            }
        }

        if !has_entries {
            writeln!(f, "  (zero state)")?;
        }

        Ok(())
    }
}
