//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

use crate::{
    tick_index_to_sqrt_price, try_compute_symmetric_range, CoreError, PoolFacade, RangeQuote,
};

/// Computes a symmetric position range around the pool's current price.
///
/// The pool snapshot must be fetched fresh per call; the pool price moves
/// between blocks and a stale snapshot yields a stale range.
///
/// # Parameters
/// - `pool`: The pool state snapshot.
/// - `width_bps`: The half-spread below and above the current price, in basis points.
///
/// # Returns
/// The initializable tick range together with its bound sqrt prices, ready
/// to pass to the position manager's mint or modify call.
pub fn symmetric_range_quote(pool: PoolFacade, width_bps: u16) -> Result<RangeQuote, CoreError> {
    let tick_range = try_compute_symmetric_range(pool.sqrt_price, width_bps, pool.tick_spacing)?;

    Ok(RangeQuote {
        tick_lower_index: tick_range.tick_lower_index,
        tick_upper_index: tick_range.tick_upper_index,
        sqrt_price_lower: tick_index_to_sqrt_price(tick_range.tick_lower_index),
        sqrt_price_upper: tick_index_to_sqrt_price(tick_range.tick_upper_index),
    })
}
