/*

This file is part of pcg_dxsm.

pcg_dxsm is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation; either version 3 of the License, or (at your option) any later version.

pcg_dxsm is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with pcg_dxsm. If not, see https://www.gnu.org/licenses/.

Copyright © 2024 dogeystamp <dogeystamp@disroot.org>
*/

//! Scalar reference implementation of the PCG64-DXSM random number generator.
//!
//! A 128-bit LCG with a 64-bit "cheap" multiplier, whose pre-advance state is fed through the
//! DXSM (double xor-shift-multiply) output permutation. Independent streams are selected by the
//! additive increment.
//!
//! See <https://dotat.at/@/2023-06-21-pcg64-dxsm.html>.

#![deny(rust_2018_idioms)]

pub mod lanes;
pub mod prelude;
pub mod random;
pub mod serialization;
pub mod wide;

/// Cheap (half-width) LCG multiplier, also used inside the DXSM permutation.
pub const MULTIPLIER: u64 = 0xda942042e4dd58b5;

/// Increment used when no stream is selected. Odd by construction.
pub const DEFAULT_INCREMENT: u128 =
    (6364136223846793005u128 << 64) | 1442695040888963407u128;

/// Seed used by `Default` implementations.
pub const DEFAULT_SEED: u128 = 0xcafef00dd15ea5e5;

/// Errors when restoring a generator from saved raw state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The increment has its low bit cleared, so it can't come from a seeded generator.
    EvenIncrement,
    /// Saved state has the wrong number of bytes.
    BadLength { expected: usize, got: usize },
}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateError::EvenIncrement => write!(f, "increment must be odd"),
            StateError::BadLength { expected, got } => {
                write!(f, "expected {expected} bytes of state, got {got}")
            }
        }
    }
}

impl std::error::Error for StateError {}
