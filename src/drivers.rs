//! Peripheral Drivers
//!
//! CC1101 modem drivers built on the HAL framing layer.

pub mod cc1101;
pub mod cc1101_async;
