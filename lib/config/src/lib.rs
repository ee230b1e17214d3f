#![no_std]

pub mod device;
pub mod fmt;
