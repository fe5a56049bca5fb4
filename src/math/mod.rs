//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

mod position;
mod range;
mod tick;
mod u256_math;

#[cfg(feature = "floats")]
mod price;

pub use position::*;
pub use range::*;
pub use tick::*;
pub use u256_math::*;

#[cfg(feature = "floats")]
pub use price::*;
