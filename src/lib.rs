//! Mitosis Arena Simulation Library
//!
//! A real-time 2D particle simulation: a pointer-steered player and a
//! population of autonomous bots that wander, chase the player, split on
//! contact and shove each other apart. The crate owns only the simulation
//! core and a frame-loop driver; rendering, input capture and UI belong to
//! the host, which feeds pointer/viewport updates in through the control
//! surface and reads [`sim::snapshot::Scene`] / [`sim::snapshot::Status`]
//! views back out.

pub mod config;
pub mod runner;
pub mod sim;
pub mod util;
