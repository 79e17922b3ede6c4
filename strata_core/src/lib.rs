// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types for the strata chart engine.
//!
//! This crate holds the pieces the rest of the workspace agrees on:
//! - **Marks**: inert shape/label descriptors ([`Mark`], [`MarkPayload`]).
//!   Generators produce them, a painting layer consumes them; nothing
//!   mutates a mark after creation.
//! - **Scene**: a retained mark set keyed by stable identity, with
//!   deterministic paint ordering.
//! - **Palette**: an immutable named-color configuration value passed
//!   explicitly to renderers (no ambient global style state).
//!
//! Painting itself is out of scope; see the demo crate for an SVG dump.

#![no_std]

extern crate alloc;

mod mark;
mod palette;
mod scene;
pub mod z_order;

pub use mark::{Dash, Mark, MarkId, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
pub use palette::Palette;
pub use scene::Scene;
