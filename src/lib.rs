//! Tick-driven grid Snake.
//!
//! The core simulation (direction buffering, movement, collision
//! classification, apple placement, difficulty progression, and the
//! game-over → reset cycle) lives in [`game`], [`input`], [`snake`],
//! [`collision`], [`apple`], and [`clock`]. The terminal presentation and
//! the persisted high score are collaborators behind narrow interfaces:
//! [`renderer`], [`ui`], [`terminal_runtime`], and [`score`].

pub mod apple;
pub mod clock;
pub mod collision;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
