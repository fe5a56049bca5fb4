//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

use crate::{sqrt_price_to_tick_index, tick_index_to_sqrt_price};
use libm::{pow, sqrt};

const Q64_RESOLUTION: f64 = 18446744073709551616.0;

/// Convert a decimal-adjusted price to a Q64.64 sqrt price.
/// Not bit-exact; intended for UI and test ergonomics, not for settlement.
///
/// # Parameters
/// - `price` - The price of token A in terms of token B
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - A u128 Q64.64 representing the sqrt price
pub fn price_to_sqrt_price(price: f64, decimals_a: u8, decimals_b: u8) -> u128 {
    let power = pow(10.0, decimals_a as f64 - decimals_b as f64);
    (sqrt(price / power) * Q64_RESOLUTION) as u128
}

/// Convert a Q64.64 sqrt price to a decimal-adjusted price.
///
/// # Parameters
/// - `sqrt_price` - A u128 Q64.64 representing the sqrt price
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - The price of token A in terms of token B
pub fn sqrt_price_to_price(sqrt_price: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let power = pow(10.0, decimals_a as f64 - decimals_b as f64);
    let sqrt_price_f64 = sqrt_price as f64 / Q64_RESOLUTION;
    sqrt_price_f64 * sqrt_price_f64 * power
}

/// Convert a decimal-adjusted price to the tick index whose price grid cell
/// contains it.
pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> i32 {
    sqrt_price_to_tick_index(price_to_sqrt_price(price, decimals_a, decimals_b))
}

/// Convert a tick index to a decimal-adjusted price.
pub fn tick_index_to_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> f64 {
    sqrt_price_to_price(tick_index_to_sqrt_price(tick_index), decimals_a, decimals_b)
}
