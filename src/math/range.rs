//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{
    get_full_range_tick_indexes, get_initializable_tick_index, sqrt_price_to_tick_index,
    sqrt_u256, try_mul_div, CoreError, TickRange, BPS_DENOMINATOR, INVALID_PRICE,
    INVALID_TICK_SPACING, INVALID_WIDTH, MAX_SQRT_PRICE, MIN_SQRT_PRICE, TICK_OUT_OF_BOUNDS,
};

const Q64: u128 = 1 << 64;

/// Derive the sqrt prices sitting `width_bps` basis points below and above
/// the current price.
///
/// The bounds are `price * 10000 / (10000 + width)` and
/// `price * 10000 / (10000 - width)`, computed in sqrt space with 256-bit
/// intermediates. The lower bound is rounded down and the upper bound up,
/// and both are clamped into the representable sqrt price domain.
///
/// # Parameters
/// - `sqrt_price` - A u128 Q64.64 representing the current sqrt price
/// - `width_bps` - The half-spread in basis points, `0 < width_bps < 10000`
///
/// # Returns
/// - `Ok`: The (lower, upper) bound sqrt prices
/// - `Err`: `INVALID_PRICE` if the sqrt price is outside
///   `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`, `INVALID_WIDTH` if the width is
///   zero or not below `BPS_DENOMINATOR`
pub fn try_get_bound_sqrt_prices(
    sqrt_price: u128,
    width_bps: u16,
) -> Result<(u128, u128), CoreError> {
    if sqrt_price < MIN_SQRT_PRICE || sqrt_price > MAX_SQRT_PRICE {
        return Err(INVALID_PRICE);
    }
    if width_bps == 0 || width_bps >= BPS_DENOMINATOR {
        return Err(INVALID_WIDTH);
    }

    let bps_x128 = <U256>::from(BPS_DENOMINATOR) << 128;

    // sqrt(10000 / (10000 ± width)) as Q64.64 scale factors. The numerator
    // is widened to 256 bits before the divide so no precision is lost
    // ahead of the square root.
    let lower_factor: u128 = sqrt_u256(bps_x128 / <U256>::from(BPS_DENOMINATOR + width_bps)).as_u128();
    let upper_factor: u128 = sqrt_u256(bps_x128 / <U256>::from(BPS_DENOMINATOR - width_bps)).as_u128();

    let lower_sqrt_price = try_mul_div(sqrt_price, lower_factor, Q64, false)?;
    let upper_sqrt_price = try_mul_div(sqrt_price, upper_factor, Q64, true)?;

    Ok((
        lower_sqrt_price.clamp(MIN_SQRT_PRICE, MAX_SQRT_PRICE),
        upper_sqrt_price.clamp(MIN_SQRT_PRICE, MAX_SQRT_PRICE),
    ))
}

/// Compute a symmetric tick range around the current price.
///
/// The price bounds sit `width_bps` basis points below and above the
/// current price. Bound ticks are rounded outward to initializable ticks:
/// the lower tick toward negative infinity and the upper tick toward
/// positive infinity, so the final range always covers at least the
/// requested width. Both ticks are clamped into the initializable full
/// range for the given tick spacing.
///
/// # Parameters
/// - `sqrt_price` - A u128 Q64.64 representing the current sqrt price
/// - `width_bps` - The half-spread in basis points, `0 < width_bps < 10000`
/// - `tick_spacing` - A u16 integer representing the tick spacing
///
/// # Returns
/// - `Ok`: A TickRange with both ticks initializable, strictly ordered and
///   containing the current price's tick
/// - `Err`: `INVALID_TICK_SPACING` if the tick spacing is zero, any error
///   of [`try_get_bound_sqrt_prices`], or `TICK_OUT_OF_BOUNDS` if clamping
///   inverted the range or pushed the current price's tick out of it
pub fn try_compute_symmetric_range(
    sqrt_price: u128,
    width_bps: u16,
    tick_spacing: u16,
) -> Result<TickRange, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }

    let (lower_sqrt_price, upper_sqrt_price) = try_get_bound_sqrt_prices(sqrt_price, width_bps)?;

    let tick_lower_index =
        get_initializable_tick_index(sqrt_price_to_tick_index(lower_sqrt_price), tick_spacing, false);
    let tick_upper_index =
        get_initializable_tick_index(sqrt_price_to_tick_index(upper_sqrt_price), tick_spacing, true);

    let full_range = get_full_range_tick_indexes(tick_spacing);
    let tick_lower_index = tick_lower_index.max(full_range.tick_lower_index);
    let tick_upper_index = tick_upper_index.min(full_range.tick_upper_index);

    let tick_current_index = sqrt_price_to_tick_index(sqrt_price);
    if tick_lower_index >= tick_upper_index
        || tick_current_index < tick_lower_index
        || tick_current_index >= tick_upper_index
    {
        return Err(TICK_OUT_OF_BOUNDS);
    }

    Ok(TickRange {
        tick_lower_index,
        tick_upper_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_tick_initializable;

    #[test]
    fn test_bound_sqrt_prices_bracket_the_price() {
        let (lower, upper) = try_get_bound_sqrt_prices(Q64, 100).unwrap();
        assert!(lower < Q64);
        assert!(upper > Q64);
        // 1% half-spread lands one hundred-ish ticks away on either side.
        assert_eq!(sqrt_price_to_tick_index(lower), -100);
        assert_eq!(sqrt_price_to_tick_index(upper), 100);
    }

    #[test]
    fn test_bound_sqrt_prices_invalid_width() {
        assert_eq!(try_get_bound_sqrt_prices(Q64, 0), Err(INVALID_WIDTH));
        assert_eq!(try_get_bound_sqrt_prices(Q64, 10000), Err(INVALID_WIDTH));
        assert_eq!(try_get_bound_sqrt_prices(Q64, 20000), Err(INVALID_WIDTH));
    }

    #[test]
    fn test_bound_sqrt_prices_invalid_price() {
        assert_eq!(try_get_bound_sqrt_prices(0, 100), Err(INVALID_PRICE));
        assert_eq!(
            try_get_bound_sqrt_prices(MIN_SQRT_PRICE - 1, 100),
            Err(INVALID_PRICE)
        );
        assert_eq!(
            try_get_bound_sqrt_prices(MAX_SQRT_PRICE + 1, 100),
            Err(INVALID_PRICE)
        );
    }

    #[test]
    fn test_bound_sqrt_prices_widest_width() {
        // width 9999 must not overflow and must stay ordered.
        let (lower, upper) = try_get_bound_sqrt_prices(Q64, 9999).unwrap();
        assert!(lower < Q64);
        assert!(upper > Q64);
        assert_eq!(sqrt_price_to_tick_index(lower), -6932);
        assert_eq!(sqrt_price_to_tick_index(upper), 92108);
    }

    #[test]
    fn test_compute_symmetric_range_rounds_outward() {
        // Price 1.0, 1% half-spread: raw bound ticks are -100/+100, pushed
        // outward to the surrounding multiples of 60.
        let range = try_compute_symmetric_range(Q64, 100, 60).unwrap();
        assert_eq!(range.tick_lower_index, -120);
        assert_eq!(range.tick_upper_index, 120);

        let range = try_compute_symmetric_range(Q64, 100, 10).unwrap();
        assert_eq!(range.tick_lower_index, -100);
        assert_eq!(range.tick_upper_index, 100);

        let range = try_compute_symmetric_range(Q64, 500, 10).unwrap();
        assert_eq!(range.tick_lower_index, -490);
        assert_eq!(range.tick_upper_index, 520);
    }

    #[test]
    fn test_compute_symmetric_range_off_center_price() {
        let sqrt_price = crate::tick_index_to_sqrt_price(1000);
        let range = try_compute_symmetric_range(sqrt_price, 100, 60).unwrap();
        let current = sqrt_price_to_tick_index(sqrt_price);
        assert!(range.tick_lower_index <= current);
        assert!(current < range.tick_upper_index);
        assert!(is_tick_initializable(range.tick_lower_index, 60));
        assert!(is_tick_initializable(range.tick_upper_index, 60));
    }

    #[test]
    fn test_compute_symmetric_range_invalid_inputs() {
        assert_eq!(
            try_compute_symmetric_range(Q64, 100, 0),
            Err(INVALID_TICK_SPACING)
        );
        assert_eq!(try_compute_symmetric_range(Q64, 0, 10), Err(INVALID_WIDTH));
        assert_eq!(
            try_compute_symmetric_range(0, 100, 10),
            Err(INVALID_PRICE)
        );
    }

    #[test]
    fn test_compute_symmetric_range_widens_with_width() {
        let mut prev = try_compute_symmetric_range(Q64, 1, 10).unwrap();
        for width_bps in [10, 100, 500, 1000, 2500, 5000, 7500, 9999] {
            let range = try_compute_symmetric_range(Q64, width_bps, 10).unwrap();
            assert!(range.tick_lower_index <= prev.tick_lower_index);
            assert!(range.tick_upper_index >= prev.tick_upper_index);
            prev = range;
        }
    }

    #[test]
    fn test_compute_symmetric_range_ticks_are_initializable() {
        for tick_spacing in [1u16, 10, 60, 200] {
            for width_bps in [1u16, 37, 100, 999, 9999] {
                let range = try_compute_symmetric_range(Q64, width_bps, tick_spacing).unwrap();
                assert!(range.tick_lower_index < range.tick_upper_index);
                assert!(is_tick_initializable(range.tick_lower_index, tick_spacing));
                assert!(is_tick_initializable(range.tick_upper_index, tick_spacing));
                assert!(range.tick_lower_index <= 0);
                assert!(range.tick_upper_index > 0);
            }
        }
    }

    #[test]
    fn test_compute_symmetric_range_is_deterministic() {
        let first = try_compute_symmetric_range(Q64, 250, 60);
        let second = try_compute_symmetric_range(Q64, 250, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_symmetric_range_at_price_bounds() {
        // At the very edge of the price domain the clamped range can no
        // longer contain the current tick.
        assert_eq!(
            try_compute_symmetric_range(MAX_SQRT_PRICE, 5000, 10),
            Err(TICK_OUT_OF_BOUNDS)
        );
        assert_eq!(
            try_compute_symmetric_range(MIN_SQRT_PRICE, 5000, 10),
            Err(TICK_OUT_OF_BOUNDS)
        );
    }
}
