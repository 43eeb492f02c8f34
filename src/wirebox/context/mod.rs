// SPDX-License-Identifier: MIT

//! Context adapters
//!
//! - `PropertyContext` - in-memory properties, beans and profiles
//! - `WiringContext` - overlay that adds beans wired during resolution

mod overlay;
mod store;

pub use overlay::WiringContext;
pub use store::PropertyContext;
