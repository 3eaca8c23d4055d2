/*

This file is part of pcg_dxsm.

pcg_dxsm is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation; either version 3 of the License, or (at your option) any later version.

pcg_dxsm is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with pcg_dxsm. If not, see https://www.gnu.org/licenses/.

Copyright © 2025 dogeystamp <dogeystamp@disroot.org>
*/

//! Saving and restoring generator state.
//!
//! The only format is the raw pair: `state` then `inc`, each as 16 little-endian bytes.

use crate::random::Pcg64Random;
use crate::StateError;
use std::mem::size_of;

/// Size of a serialized generator.
pub const STATE_BYTES: usize = 2 * size_of::<u128>();

/// Helper to read bytes at compile-time.
pub(crate) struct ConstCursor<'a, const BUF_SIZE: usize> {
    /// Buffer to read from.
    buf: &'a [u8; BUF_SIZE],
    /// Cursor in the buffer where the next byte will be read.
    loc: usize,
}

impl<'a, const BUF_SIZE: usize> ConstCursor<'a, BUF_SIZE> {
    pub const fn from_bytes(buf: &'a [u8; BUF_SIZE]) -> Self {
        Self { buf, loc: 0 }
    }

    /// Fill an array of bytes by reading from the buffer.
    ///
    /// Returns `None` if there aren't enough bytes left.
    pub const fn read_u8<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.loc + N > BUF_SIZE {
            return None;
        }
        let mut out_buf: [u8; N] = [0; N];
        let mut i = 0;
        while i < N {
            out_buf[i] = self.buf[self.loc];
            i += 1;
            self.loc += 1;
        }

        Some(out_buf)
    }

    /// Deserialize a little-endian `u128`.
    pub const fn read_u128(&mut self) -> Option<u128> {
        match self.read_u8::<{ size_of::<u128>() }>() {
            Some(bytes) => Some(u128::from_le_bytes(bytes)),
            None => None,
        }
    }
}

impl Pcg64Random {
    /// Serialize the raw `(state, inc)` pair.
    pub const fn to_le_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0; STATE_BYTES];
        let state = self.state().to_le_bytes();
        let inc = self.inc().to_le_bytes();
        let mut i = 0;
        while i < size_of::<u128>() {
            out[i] = state[i];
            out[i + size_of::<u128>()] = inc[i];
            i += 1;
        }
        out
    }

    /// Restore from bytes produced by [`Self::to_le_bytes`].
    ///
    /// # Example
    ///
    ///```rust
    /// use pcg_dxsm::random::Pcg64Random;
    ///
    /// let mut rng = Pcg64Random::new(42);
    /// rng.rand();
    /// let saved = rng.to_le_bytes();
    ///
    /// let mut restored = Pcg64Random::from_le_bytes(&saved).unwrap();
    /// assert_eq!(rng.rand(), restored.rand());
    ///```
    pub const fn from_le_bytes(buf: &[u8; STATE_BYTES]) -> Result<Self, StateError> {
        let mut cursor = ConstCursor::from_bytes(buf);
        match (cursor.read_u128(), cursor.read_u128()) {
            (Some(state), Some(inc)) => Self::from_raw(state, inc),
            // buffer size is fixed, so this is unreachable
            _ => Err(StateError::BadLength {
                expected: STATE_BYTES,
                got: STATE_BYTES,
            }),
        }
    }

    /// Restore from a byte slice, which must be exactly [`STATE_BYTES`] long.
    pub fn from_slice(buf: &[u8]) -> Result<Self, StateError> {
        let buf: &[u8; STATE_BYTES] = buf.try_into().map_err(|_| StateError::BadLength {
            expected: STATE_BYTES,
            got: buf.len(),
        })?;
        Self::from_le_bytes(buf)
    }
}

/// Unvalidated `(state, inc)` pair, used to check the increment when deserializing with serde.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawState {
    state: u128,
    inc: u128,
}

#[cfg(feature = "serde")]
impl TryFrom<RawState> for Pcg64Random {
    type Error = StateError;

    fn try_from(value: RawState) -> Result<Self, Self::Error> {
        Pcg64Random::from_raw(value.state, value.inc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bytes() {
        let rng = Pcg64Random::new(42);
        let expected: [u8; STATE_BYTES] = [
            0xdc, 0xa3, 0x8c, 0x01, 0x2c, 0xb6, 0x1f, 0x6c, 0x67, 0xf5, 0xad, 0x22, 0x50, 0x17,
            0x10, 0x71, 0x4f, 0x81, 0x67, 0xf7, 0x7e, 0x7b, 0x05, 0x14, 0x2d, 0x7f, 0x95, 0x4c,
            0x2d, 0xf4, 0x51, 0x58,
        ];
        assert_eq!(rng.to_le_bytes(), expected);
        assert_eq!(Pcg64Random::from_le_bytes(&expected), Ok(rng));
    }

    #[test]
    fn test_restore_mid_stream() {
        let mut rng = Pcg64Random::with_stream(1234, 5);
        for _ in 0..50 {
            rng.rand();
        }
        let mut restored = Pcg64Random::from_slice(&rng.to_le_bytes()).unwrap();
        for i in 0..100 {
            assert_eq!(rng.rand(), restored.rand(), "diverged at index {i}");
        }
    }

    #[test]
    fn test_reject_even_increment() {
        let mut bytes = Pcg64Random::new(1).to_le_bytes();
        // low byte of inc
        bytes[16] &= !1;
        assert_eq!(
            Pcg64Random::from_le_bytes(&bytes),
            Err(StateError::EvenIncrement)
        );
    }

    #[test]
    fn test_reject_bad_length() {
        let bytes = Pcg64Random::new(1).to_le_bytes();
        for len in [0, 1, 31] {
            assert_eq!(
                Pcg64Random::from_slice(&bytes[..len]),
                Err(StateError::BadLength {
                    expected: STATE_BYTES,
                    got: len
                })
            );
        }
        let long = [0u8; 33];
        assert_eq!(
            Pcg64Random::from_slice(&long),
            Err(StateError::BadLength {
                expected: STATE_BYTES,
                got: 33
            })
        );
    }

    #[test]
    fn test_cursor_runs_out() {
        let buf = [1u8; 20];
        let mut cursor = ConstCursor::from_bytes(&buf);
        assert_eq!(cursor.read_u128(), Some(u128::from_le_bytes([1; 16])));
        assert_eq!(cursor.read_u128(), None);
        assert_eq!(cursor.read_u8::<4>(), Some([1; 4]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mut rng = Pcg64Random::with_stream(99, 2);
        for _ in 0..10 {
            rng.rand();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Pcg64Random = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.rand(), restored.rand());
        }

        let even = r#"{"state":1,"inc":2}"#;
        assert!(serde_json::from_str::<Pcg64Random>(even).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_bytes_roundtrip(seed in any::<u128>(), stream in any::<u128>(), skip in 0usize..64) {
                let mut rng = Pcg64Random::with_stream(seed, stream);
                for _ in 0..skip {
                    rng.rand();
                }
                prop_assert_eq!(Pcg64Random::from_le_bytes(&rng.to_le_bytes()), Ok(rng));
            }
        }
    }
}
