// SPDX-License-Identifier: MIT

pub mod builder;
pub mod condition;
pub mod conditional;
pub mod context;
pub mod expression;
pub mod loader;
pub mod registry;
pub mod types;
