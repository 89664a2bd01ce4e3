//! # portfolio
//!
//! Client for a personal portfolio page: a randomized greeting, a small
//! function-composition demo, a comment panel backed by the portfolio
//! server, a travel map and a happiness choropleth.
//!
//! The same library drives two front ends. The `web` feature binds the
//! rendering sinks to the DOM and a JavaScript widget bridge; the `cli`
//! feature ships a terminal binary that renders the page to stdout.

pub mod config;
pub mod display;
pub mod net;
pub mod page;
pub mod render;
pub mod state;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
