// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod parameter;
mod parameter_set;
mod value;

pub use parameter::Parameter;
pub use parameter_set::ParameterSet;
pub use value::{Value, ValueKind};
