//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

mod error;
mod range;
mod tick;

pub use error::*;
pub use range::*;
pub use tick::*;
