//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

/// A computed position range, ready to hand to a position mint or modify
/// call. The bound sqrt prices are those of the initializable bound ticks,
/// not the raw width bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RangeQuote {
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub sqrt_price_lower: u128,
    pub sqrt_price_upper: u128,
}
