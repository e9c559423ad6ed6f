//! # connect_n
//!
//! A connect-N game engine: Connect Four generalized to any board height,
//! width and winning run length, with a multi-agent environment layer for
//! driving games from agents or simulations.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: grids, board, win detection, session state machine
//! - [`env`] - Multi-agent environment: observations, rewards, text rendering
//! - [`simulation`] - Batched random self-play across independent sessions
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod config;
pub mod env;
pub mod error;
pub mod game;
pub mod simulation;
