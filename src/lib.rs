// SPDX-License-Identifier: MIT

//! Condition engine for a dependency-wiring container.
//!
//! Components are registered with condition chains over properties, beans
//! and profiles; resolving a registry decides which of them get wired.

pub mod kit;
pub mod wirebox;
