//! folio
//!
//! A terminal portfolio built on a small set of interactive UI primitives:
//! a typewriter, marquee strips, pointer-reactive glow borders, hover-reveal
//! cards, tabs, a modal with a shared scroll lock, and a carousel.
//!
//! The crate follows a Pure Core / Impure Shell split. Everything under
//! [`primitives`], [`timing`] and [`state`] is driven by explicit time and
//! can be tested without a terminal; [`view`] owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod primitives;
pub mod state;
pub mod timing;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
