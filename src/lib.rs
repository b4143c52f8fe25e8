// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circular progress indicator, as geometry and a declarative draw tree.
//!
//! The progress_ring library computes the arcs of a progress ring from a fill
//! percentage and assembles a small tree of vector drawing primitives: a
//! background track, a foreground arc painted with a gradient, and a bubble
//! showing the percentage at the arc's leading edge. The host application
//! hands that tree to whatever rendering surface it uses, or writes it out as
//! SVG.
//!
//! Every render recomputes everything from the configuration; there is no
//! retained state.
//!
//! # Examples
//!
//! ```
//! use progress_ring::{Point, ProgressRing};
//!
//! let ring = ProgressRing::new(100.0, 10.0, 50.0);
//!
//! // Half a ring, drawn from its leading edge back to the top.
//! let geometry = ring.geometry();
//! assert_eq!(geometry.foreground_sweep, 180.0);
//! assert!(geometry.foreground.end.is_near(Point::new(50.0, 5.0), 1e-9));
//!
//! // Children are laid out inside the ring and see the raw fill value.
//! let frame = ring.render_with_children(|fill| format!("{fill} done"));
//! assert_eq!(frame.overlay.unwrap().content, "50 done");
//!
//! let svg = frame.canvas.to_svg();
//! assert!(svg.contains("url(#greenGradient)"));
//! assert!(svg.contains(">50%</text>"));
//! ```
//!
//! Angles are in degrees, with 0° at the top of the circle, increasing
//! clockwise on a Y-down screen.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! - `serde`: `Serialize` and `Deserialize` for the configuration and the
//!   draw tree.
//! - `schemars`: `JsonSchema` for the configuration.
//! - `mint`: conversions between [`Point`] and `mint::Point2<f64>`.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    reason = "numeric constants and coefficient names read like the math"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("progress_ring requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod arc;
pub mod common;
mod point;
mod ring;
mod scene;
mod size;
mod stroke;
mod svg;

pub use crate::affine::*;
pub use crate::arc::*;
pub use crate::point::*;
pub use crate::ring::*;
pub use crate::scene::*;
pub use crate::size::*;
pub use crate::stroke::*;
