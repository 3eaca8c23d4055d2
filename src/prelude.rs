/*

This file is part of pcg_dxsm.

pcg_dxsm is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation; either version 3 of the License, or (at your option) any later version.

pcg_dxsm is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with pcg_dxsm. If not, see https://www.gnu.org/licenses/.

Copyright © 2024 dogeystamp <dogeystamp@disroot.org>
*/

//! Prelude that you can import entirely to use the library conveniently.

pub use crate::lanes::Pcg64Lanes;
pub use crate::random::{output_dxsm, stream_increment, Pcg64Random};
pub use crate::serialization::STATE_BYTES;
pub use crate::wide::{output_dxsm_limbs, Pcg64Limbs, Wide128};
pub use crate::{StateError, DEFAULT_INCREMENT, DEFAULT_SEED, MULTIPLIER};
