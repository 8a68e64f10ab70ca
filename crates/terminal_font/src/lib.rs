#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]
//! Bitmap terminal fonts for small display drivers.
//!
//! The crate selects among compiled-in fixed size font tables, measures
//! characters and strings in pixels and hands out raw glyph bytes. Drawing
//! is left to the renderer, which owns a [`FontService`].

mod bitmap;
pub use bitmap::*;

pub mod charset;

mod config;
pub use config::*;

mod descriptor;
pub use descriptor::*;

mod error;
pub use error::*;

mod metrics;
pub use metrics::*;

mod registry;
pub use registry::*;

mod service;
pub use service::*;

mod spacing;
pub use spacing::*;

mod tiers;
pub use tiers::*;
