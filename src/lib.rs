#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ChordDecoder`**: samples a group of lines once per tick, filters bounce
//!   and reports each completed press as a single event
//! - **`LineGroup`**: which consecutively numbered lines are monitored, clamped
//!   to the platform bounds
//! - **`PressEvent`**: the chord bit pattern plus the press duration in milliseconds
//! - **`EventChannel`**: single-slot hand-off of events between a sampling
//!   context and a reporting context
//! - **`ButtonPins`**: trait to implement for your input line hardware
//! - **`TimeSource`**: trait to implement for your timing system
//! - **`Polarity`**: whether the buttons are wired pull-up or pull-down
//!
//! Patterns are relative to the group: bit 0 of a `PressEvent` pattern is the
//! group's base line, regardless of where the group sits in the platform's
//! line numbering.

pub mod channel;
pub mod decoder;
pub mod pins;
pub mod time;
pub mod types;

pub use channel::{EventChannel, EventReceiver, EventSender};
pub use decoder::ChordDecoder;
pub use pins::{ButtonPins, Polarity};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{LineGroup, PressEvent};

/// Highest line identifier the platform exposes for button input.
pub const MAX_LINE: u8 = 22;

/// Largest number of consecutively numbered lines one group may monitor.
pub const MAX_LINE_COUNT: u8 = 16;
