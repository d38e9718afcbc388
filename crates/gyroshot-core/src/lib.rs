//! Core types and definitions for the GYROSHOT scene simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, geometry, controls, commands, state snapshots, events and
//! constants. It has no dependency on an ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod controls;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
