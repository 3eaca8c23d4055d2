/*

This file is part of pcg_dxsm.

pcg_dxsm is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation; either version 3 of the License, or (at your option) any later version.

pcg_dxsm is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with pcg_dxsm. If not, see https://www.gnu.org/licenses/.

Copyright © 2024 dogeystamp <dogeystamp@disroot.org>
*/

//! Several independent streams stepped together.
//!
//! This is the scalar reference for a vectorized generator: lane `k` emits exactly what
//! `Pcg64Random::with_stream(seed, first + k)` emits.

use crate::random::Pcg64Random;

/// `N` generators sharing a seed, on consecutive streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcg64Lanes<const N: usize> {
    lanes: [Pcg64Random; N],
}

impl<const N: usize> Pcg64Lanes<N> {
    /// Lanes on streams `0..N`.
    pub const fn new(seed: u128) -> Self {
        Self::with_first_stream(seed, 0)
    }

    /// Lanes on streams `first..first + N`.
    ///
    /// Stream numbers wrap around at `u128::MAX`.
    pub const fn with_first_stream(seed: u128, first: u128) -> Self {
        let mut lanes = [Pcg64Random::new(seed); N];
        let mut i = 0;
        while i < N {
            lanes[i] = Pcg64Random::with_stream(seed, first.wrapping_add(i as u128));
            i += 1;
        }
        Self { lanes }
    }

    /// Returns one random number per lane, in lane order.
    pub const fn rand(&mut self) -> [u64; N] {
        let mut ret = [0; N];
        let mut i = 0;
        while i < N {
            ret[i] = self.lanes[i].rand();
            i += 1;
        }
        ret
    }

    /// Jump every lane ahead by `delta` steps.
    pub fn advance(&mut self, delta: u128) {
        for lane in &mut self.lanes {
            lane.advance(delta);
        }
    }

    /// Get a single lane.
    pub fn lane(&self, idx: usize) -> Option<&Pcg64Random> {
        self.lanes.get(idx)
    }

    pub fn into_lanes(self) -> [Pcg64Random; N] {
        self.lanes
    }
}

impl<const N: usize> From<[Pcg64Random; N]> for Pcg64Lanes<N> {
    fn from(lanes: [Pcg64Random; N]) -> Self {
        Self { lanes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_match_scalar() {
        let seed = 42;
        let mut lanes = Pcg64Lanes::<4>::new(seed);
        let mut scalar: Vec<Pcg64Random> =
            (0..4).map(|k| Pcg64Random::with_stream(seed, k)).collect();

        assert_eq!(
            lanes.rand(),
            [
                0x161fdf2a9b15ce6f,
                0x84c75ffdbc13e14a,
                0x21f619f5f72debad,
                0xf3431e20bc9366f4
            ]
        );
        for rng in scalar.iter_mut() {
            rng.rand();
        }

        for _ in 0..1000 {
            let words = lanes.rand();
            for (k, rng) in scalar.iter_mut().enumerate() {
                assert_eq!(words[k], rng.rand(), "lane {k}");
            }
        }
    }

    #[test]
    fn test_first_stream() {
        let mut lanes = Pcg64Lanes::<3>::with_first_stream(7, u128::MAX);
        let streams = [u128::MAX, 0, 1];
        let mut scalar = streams.map(|s| Pcg64Random::with_stream(7, s));
        for _ in 0..100 {
            assert_eq!(lanes.rand(), scalar.each_mut().map(|rng| rng.rand()));
        }
    }

    #[test]
    fn test_lane_access() {
        let lanes = Pcg64Lanes::<2>::new(1);
        assert_eq!(lanes.lane(1), Some(&Pcg64Random::with_stream(1, 1)));
        assert_eq!(lanes.lane(2), None);
        assert_eq!(Pcg64Lanes::from(lanes.into_lanes()), lanes);
    }

    #[test]
    fn test_lanes_distinct_increments() {
        let lanes = Pcg64Lanes::<16>::new(0).into_lanes();
        for (i, a) in lanes.iter().enumerate() {
            for b in &lanes[i + 1..] {
                assert_ne!(a.inc(), b.inc());
            }
        }
    }

    #[test]
    fn test_advance_lanes() {
        let mut jumped = Pcg64Lanes::<4>::new(3);
        let mut stepped = jumped;
        jumped.advance(50);
        for _ in 0..50 {
            stepped.rand();
        }
        assert_eq!(jumped, stepped);
    }
}
