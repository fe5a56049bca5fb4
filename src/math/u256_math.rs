//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{CoreError, ARITHMETIC_OVERFLOW};

/// Multiplies two u128 values and divides the 256-bit product by a third,
/// so the intermediate never loses precision to an overflow.
///
/// # Parameters
/// - `n0` - First multiplicand
/// - `n1` - Second multiplicand
/// - `d` - Divisor
/// - `round_up` - Round the quotient up if true
///
/// # Returns
/// - `Ok`: The quotient as u128
/// - `Err`: `ARITHMETIC_OVERFLOW` if the divisor is zero or the quotient
///   exceeds the u128 range
pub fn try_mul_div(n0: u128, n1: u128, d: u128, round_up: bool) -> Result<u128, CoreError> {
    if d == 0 {
        return Err(ARITHMETIC_OVERFLOW);
    }

    let product = <U256>::from(n0) * <U256>::from(n1);
    let divisor = <U256>::from(d);

    let mut quotient = product / divisor;
    if round_up && product % divisor != U256::ZERO {
        quotient += U256::ONE;
    }

    quotient.try_into().map_err(|_| ARITHMETIC_OVERFLOW)
}

/// Floor integer square root of a 256-bit value, Babylonian iteration.
pub fn sqrt_u256(v: U256) -> U256 {
    if v <= U256::ONE {
        return v;
    }

    let mut x = v;
    let mut y = (x + U256::ONE) >> 1;
    while y < x {
        x = y;
        y = (x + v / x) >> 1;
    }
    x
}
