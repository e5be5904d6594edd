#![doc = include_str!("../../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
pub use racepad_types as types;

pub mod channel;
pub mod clock;
pub mod config;
pub mod display;
pub mod encoder;
pub mod event;
pub mod hid;
pub mod input_device;
pub mod jiggler;
pub mod keyboard;
pub mod keymap;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod state;

pub use clock::{Clock, SystemClock, Timestamp};
pub use config::PadConfig;
pub use display::{NoopDisplay, StatusDisplay};
pub use hid::{HostTransport, ReportTransport};
pub use keyboard::Keyboard;
pub use keymap::KeyMap;
pub use layer::Mode;

pub type RawMutex = CriticalSectionRawMutex;

/// Capacity of the input event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Capacity of the report channel
pub const REPORT_CHANNEL_SIZE: usize = 16;
