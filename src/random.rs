/*

This file is part of pcg_dxsm.

pcg_dxsm is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation; either version 3 of the License, or (at your option) any later version.

pcg_dxsm is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with pcg_dxsm. If not, see https://www.gnu.org/licenses/.

Copyright © 2024 dogeystamp <dogeystamp@disroot.org>
*/

//! The pcg64 dxsm random number generator (https://dotat.at/@/2023-06-21-pcg64-dxsm.html)

use crate::{StateError, DEFAULT_INCREMENT, DEFAULT_SEED, MULTIPLIER};

/// PCG64-DXSM generator state.
///
/// # Invariants
///
/// 1. `inc` is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::serialization::RawState")
)]
pub struct Pcg64Random {
    state: u128,
    inc: u128,
}

/// DXSM output permutation.
///
/// Maps a pre-advance LCG state to an output word. Pure.
pub const fn output_dxsm(state: u128) -> u64 {
    let mut hi: u64 = (state >> 64) as u64;
    let lo: u64 = (state as u64) | 1;
    hi ^= hi >> 32;
    hi = hi.wrapping_mul(MULTIPLIER);
    hi ^= hi >> 48;
    hi = hi.wrapping_mul(lo);

    hi
}

/// Derive an odd increment from a stream selector.
///
/// Stream 0 maps to [`DEFAULT_INCREMENT`]. The top bit of any other selector is shifted out.
pub const fn stream_increment(stream: u128) -> u128 {
    if stream == 0 {
        DEFAULT_INCREMENT
    } else {
        (stream << 1) | 1
    }
}

/// Make an RNG state "sane".
const fn pcg64_seed(seed: u128, inc: u128) -> Pcg64Random {
    let mut rng = Pcg64Random {
        state: seed.wrapping_add(inc),
        inc,
    };
    // one iteration of random, output discarded
    rng.step();
    rng
}

impl Pcg64Random {
    /// Seed a generator on the default stream.
    pub const fn new(seed: u128) -> Self {
        Self::with_stream(seed, 0)
    }

    /// Seed a generator on a given stream.
    ///
    /// Generators with the same seed and different streams produce unrelated sequences.
    /// Consecutive small integers are the usual choice of stream for parallel workers.
    pub const fn with_stream(seed: u128, stream: u128) -> Self {
        pcg64_seed(seed, stream_increment(stream))
    }

    /// Seed a generator, with the seed given as two 64-bit halves.
    pub const fn from_halves(seed_hi: u64, seed_lo: u64, stream: u128) -> Self {
        Self::with_stream(((seed_hi as u128) << 64) | seed_lo as u128, stream)
    }

    /// Restore a generator from a previously saved `(state, inc)` pair.
    ///
    /// No warm-up step is done; the generator continues exactly where the saved one stopped.
    pub const fn from_raw(state: u128, inc: u128) -> Result<Self, StateError> {
        if inc & 1 == 0 {
            return Err(StateError::EvenIncrement);
        }
        Ok(Self { state, inc })
    }

    /// Current LCG state.
    pub const fn state(&self) -> u128 {
        self.state
    }

    /// Stream increment.
    pub const fn inc(&self) -> u128 {
        self.inc
    }

    /// Raw `(state, inc)` pair, for checkpointing.
    pub const fn into_raw(self) -> (u128, u128) {
        (self.state, self.inc)
    }

    /// Advance the LCG by one step.
    pub const fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER as u128)
            .wrapping_add(self.inc);
    }

    /// Returns a single random number.
    pub const fn rand(&mut self) -> u64 {
        // output comes from the state before advancing
        let state: u128 = self.state;
        self.step();
        output_dxsm(state)
    }

    /// Jump ahead by `delta` steps in O(log delta).
    ///
    /// Same result as calling [`Self::step`] `delta` times. Since the period is 2^128, passing
    /// `u128::MAX` goes back one step.
    ///
    /// Uses Brown, "Random Number Generation with Arbitrary Stride" (1994): the composition of
    /// `k` steps is itself an affine map `x -> acc_mult * x + acc_plus`, built up by squaring.
    pub const fn advance(&mut self, delta: u128) {
        let mut acc_mult: u128 = 1;
        let mut acc_plus: u128 = 0;
        let mut cur_mult: u128 = MULTIPLIER as u128;
        let mut cur_plus: u128 = self.inc;
        let mut delta = delta;

        while delta > 0 {
            if delta & 1 != 0 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }

        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    /// Generate array of random numbers.
    ///
    /// # Example
    ///
    ///```rust
    /// use pcg_dxsm::random::Pcg64Random;
    ///
    /// // generate 3 random numbers
    /// const ARR: [u64; 3] = Pcg64Random::new(42).random_arr_64();
    /// assert_eq!(ARR, [0x161fdf2a9b15ce6f, 0x50b321bd80027795, 0x448c6563c3721f45])
    ///```
    pub const fn random_arr_64<const N: usize>(&mut self) -> [u64; N] {
        let mut ret = [0; N];
        let mut i = 0;
        while i < N {
            ret[i] = self.rand();
            i += 1;
        }

        ret
    }

    /// Fill a slice with random numbers.
    pub fn fill(&mut self, out: &mut [u64]) {
        for x in out {
            *x = self.rand();
        }
    }
}

impl Default for Pcg64Random {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
