//
// Copyright (c) Symrange contributors
//
// Licensed under the MIT License.
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const INVALID_PRICE: CoreError = "Sqrt price out of bounds";

pub const INVALID_WIDTH: CoreError = "Invalid range width";

pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const TICK_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";
