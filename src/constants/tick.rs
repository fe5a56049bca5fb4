//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -443636;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 443636;

/// The Q64.64 sqrt price at `MIN_TICK_INDEX`.
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// The Q64.64 sqrt price at `MAX_TICK_INDEX`.
pub const MAX_SQRT_PRICE: u128 = 79226673515401279992447579055;
