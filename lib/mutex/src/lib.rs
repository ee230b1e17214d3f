//! Busy-wait mutual exclusion for code that cannot sleep.

#![cfg_attr(not(test), no_std)]

pub mod mutex;

pub use mutex::*;
