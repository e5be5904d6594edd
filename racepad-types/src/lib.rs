//! # racepad types
//!
//! Plain data shared by the racepad core and anything that builds a layout
//! for it.
//!
//! - [`action`] - what a binding does when it fires
//! - [`keycode`] - HID keyboard usages plus the consumer page subset the pad emits
//! - [`modifier`] - modifier key combinations attached to key actions

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod modifier;
