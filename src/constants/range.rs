//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

/// Denominator for values expressed in basis points.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// The widest accepted symmetric range width. A width of `BPS_DENOMINATOR`
/// or more would push the upper price bound to infinity or invert it.
pub const MAX_RANGE_WIDTH_BPS: u16 = BPS_DENOMINATOR - 1;
