//! Core types and definitions for the SCRAPYARD arena game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! match configuration, commands, snapshot state, events, and constants.
//! It has no dependency on the ECS or any runtime host.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
