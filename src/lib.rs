//! Countdown display firmware for an 8x8 RGB LED matrix
//!
//! A button starts a 64-step countdown (one step per 3.75 s timer tick) that
//! fills the matrix red row by row; after the last step it blinks red until
//! the button resets it to the blue idle screen.
//!
//! Everything except [`hal`] is hardware independent and runs on the host.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod countdown;
pub mod drivers;
pub mod error;
pub mod render;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::Application;
pub use countdown::{ButtonAction, Countdown, Phase, SharedCountdown};
pub use error::Error;
