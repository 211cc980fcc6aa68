//! Singly-linked queue of owned strings.
//!
//! See [`queue`] for the container and [`core::logging`] for installing a
//! logger in applications that embed it.

pub mod core;
pub mod queue;
