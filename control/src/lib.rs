//! Signal conditioning turning two analog expression pedals into MIDI
//! control changes.
//!
//! All of the logic of the device lives here; the firmware only samples the
//! ADC, transmits messages and drives the status led. Every loop tick, the
//! firmware passes raw readings in and evaluates what came out:
//!
//! ```text
//!   [ADC]                                      [USB MIDI]  [LED]
//!     |                                             A        A
//!     | (Snapshot)                                  +----+---+
//!     V                                                  | (DesiredOutput)
//! [ Store {Pedal {Bounds}, Led} ] -----------------------+
//!     |
//!     | (Report, 1 Hz)
//!     V
//! [USB serial]
//! ```
//!
//! Each pedal auto-calibrates the limits of its sensor around the observed
//! travel, clamps to the extremes within a dead zone, and smoothens readings
//! in between with an exponential moving average. A message leaves the store
//! only when the conditioned value differs from the last one sent.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod calibration;
pub mod config;
pub mod led;
mod log;
pub mod output;
pub mod pedal;
pub mod store;
pub mod telemetry;
