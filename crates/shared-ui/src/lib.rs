//! Presentational building blocks shared by the client pages.
//!
//! Every component co-locates its stylesheet and accepts extra global
//! attributes where it wraps a single element.

pub mod components;

pub use components::*;
