// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod parsed;
mod parser;
mod spec;

pub use parsed::ParsedOptions;
pub use parser::{OptionParser, UnknownKeyPolicy};
pub use spec::{Multiplicity, OptionDefault, OptionSpec, OptionValue, VarType};
