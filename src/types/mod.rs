//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

mod pool;
mod position;
mod range;
mod tick;

pub use pool::*;
pub use position::*;
pub use range::*;
pub use tick::*;
