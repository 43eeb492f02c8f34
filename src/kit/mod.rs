// SPDX-License-Identifier: MIT

pub mod context;
pub mod error;
pub mod value;

pub use context::ContextAdapter;
pub use error::{ConditionError, ParseError, ParseErrorKind, WireboxError};
pub use value::Value;
