/*

This file is part of pcg_dxsm.

pcg_dxsm is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation; either version 3 of the License, or (at your option) any later version.

pcg_dxsm is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with pcg_dxsm. If not, see https://www.gnu.org/licenses/.

Copyright © 2024 dogeystamp <dogeystamp@disroot.org>
*/

//! Two-limb 128-bit arithmetic, and the generator written on top of it.
//!
//! This is the form the algorithm takes on targets (or SIMD lanes) without native 128-bit
//! integers. Nothing here touches `u128` except the conversions.

use crate::random::Pcg64Random;
use crate::{StateError, DEFAULT_INCREMENT, MULTIPLIER};

const LOW_32: u64 = 0xffff_ffff;

/// 128-bit unsigned integer as two 64-bit limbs.
///
/// All arithmetic wraps modulo 2^128.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Wide128 {
    pub hi: u64,
    pub lo: u64,
}

impl Wide128 {
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    pub const fn from_halves(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    pub const fn from_u128(value: u128) -> Self {
        Self {
            hi: (value >> 64) as u64,
            lo: value as u64,
        }
    }

    pub const fn to_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    pub const fn is_zero(self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// Addition with the carry from the low limb propagated into the high limb.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let lo = self.lo.wrapping_add(rhs.lo);
        let carry = (lo < self.lo) as u64;
        Self {
            hi: self.hi.wrapping_add(rhs.hi).wrapping_add(carry),
            lo,
        }
    }

    /// Full 64x64 -> 128 product, from 32-bit partial products.
    pub const fn widening_mul(a: u64, b: u64) -> Self {
        let (a1, a0) = (a >> 32, a & LOW_32);
        let (b1, b0) = (b >> 32, b & LOW_32);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // at most 3 * (2^32 - 1), can't overflow
        let mid = (p00 >> 32) + (p01 & LOW_32) + (p10 & LOW_32);

        Self {
            hi: p11 + (p01 >> 32) + (p10 >> 32) + (mid >> 32),
            lo: (p00 & LOW_32) | (mid << 32),
        }
    }

    /// Product with a 64-bit factor, modulo 2^128.
    pub const fn wrapping_mul_u64(self, rhs: u64) -> Self {
        let low = Self::widening_mul(self.lo, rhs);
        // high limb times rhs only contributes its low 64 bits, shifted up
        Self {
            hi: low.hi.wrapping_add(self.hi.wrapping_mul(rhs)),
            lo: low.lo,
        }
    }

    /// `(self << 1) | 1`.
    pub const fn shl1_or1(self) -> Self {
        Self {
            hi: (self.hi << 1) | (self.lo >> 63),
            lo: (self.lo << 1) | 1,
        }
    }
}

impl From<u128> for Wide128 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Wide128> for u128 {
    fn from(value: Wide128) -> Self {
        value.to_u128()
    }
}

/// PCG64-DXSM on two-limb arithmetic.
///
/// Emits the same sequence as [`Pcg64Random`] for the same seed and stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcg64Limbs {
    state: Wide128,
    inc: Wide128,
}

/// DXSM output permutation on a two-limb state.
pub const fn output_dxsm_limbs(state: Wide128) -> u64 {
    let mut hi = state.hi;
    let lo = state.lo | 1;
    hi ^= hi >> 32;
    hi = hi.wrapping_mul(MULTIPLIER);
    hi ^= hi >> 48;
    hi.wrapping_mul(lo)
}

impl Pcg64Limbs {
    pub const fn new(seed: Wide128) -> Self {
        Self::with_stream(seed, Wide128::ZERO)
    }

    pub const fn with_stream(seed: Wide128, stream: Wide128) -> Self {
        let inc = if stream.is_zero() {
            Wide128::from_u128(DEFAULT_INCREMENT)
        } else {
            stream.shl1_or1()
        };
        let mut rng = Self {
            state: seed.wrapping_add(inc),
            inc,
        };
        rng.step();
        rng
    }

    pub const fn state(&self) -> Wide128 {
        self.state
    }

    pub const fn inc(&self) -> Wide128 {
        self.inc
    }

    /// Advance the LCG by one step.
    pub const fn step(&mut self) {
        self.state = self.state.wrapping_mul_u64(MULTIPLIER).wrapping_add(self.inc);
    }

    /// Returns a single random number.
    pub const fn rand(&mut self) -> u64 {
        let state = self.state;
        self.step();
        output_dxsm_limbs(state)
    }
}

impl From<Pcg64Random> for Pcg64Limbs {
    fn from(value: Pcg64Random) -> Self {
        Self {
            state: value.state().into(),
            inc: value.inc().into(),
        }
    }
}

impl TryFrom<Pcg64Limbs> for Pcg64Random {
    type Error = StateError;

    fn try_from(value: Pcg64Limbs) -> Result<Self, Self::Error> {
        Pcg64Random::from_raw(value.state.to_u128(), value.inc.to_u128())
    }
}
