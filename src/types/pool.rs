//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

/// Snapshot of the pool state a range computation reads. The caller fetches
/// this from the pool fresh per call; the price is never cached here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PoolFacade {
    pub tick_spacing: u16,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
}
