//! Bus transaction plans
//!
//! Each driver operation is a short, fixed list of frames. A frame is
//! one chip-select-framed write: the enable line goes low, the frame's
//! bytes are clocked out, the line goes high again. Building the list
//! is pure; the drivers only execute it.

use heapless::Vec;

use crate::registers::{reg, Strobe, INIT_BLOB};
use crate::types::{ModemConfig, RfMode};

/// Longest plan (start: stop, blob, power, channel, mode)
pub const MAX_FRAMES: usize = 5;

/// Ordered frames for one operation
pub type Plan = Vec<Frame, MAX_FRAMES>;

/// One chip-select-framed write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Single command byte
    Strobe([u8; 1]),
    /// Register address followed by one value
    Register([u8; 2]),
    /// Raw burst
    Burst(&'static [u8]),
}

impl Frame {
    /// Command strobe frame
    #[must_use]
    pub const fn strobe(strobe: Strobe) -> Self {
        Self::Strobe([strobe.code()])
    }

    /// Single-register write frame
    #[must_use]
    pub const fn register(addr: u8, value: u8) -> Self {
        Self::Register([addr, value])
    }

    /// Bytes clocked out while the line is low
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Strobe(b) => b.as_slice(),
            Self::Register(b) => b.as_slice(),
            Self::Burst(b) => *b,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Strobe([b]) => defmt::write!(f, "strobe {=u8:#x}", *b),
            Self::Register([a, v]) => defmt::write!(f, "reg {=u8:#x}={=u8:#x}", *a, *v),
            Self::Burst(b) => defmt::write!(f, "burst {} bytes", b.len()),
        }
    }
}

fn plan<const N: usize>(frames: [Frame; N]) -> Plan {
    const { assert!(N <= MAX_FRAMES) };
    frames.into_iter().collect()
}

fn power_frame(mode: RfMode) -> Frame {
    Frame::register(reg::PATABLE, mode.pa_code())
}

fn channel_frame(config: &ModemConfig) -> Frame {
    Frame::register(reg::CHANNR, config.channel.code())
}

/// Full start-up: stop, configuration blob, power, channel, mode
#[must_use]
pub fn start_frames(config: &ModemConfig) -> Plan {
    plan([
        Frame::strobe(Strobe::Stop),
        Frame::Burst(&INIT_BLOB),
        power_frame(config.mode),
        channel_frame(config),
        Frame::strobe(config.mode.strobe()),
    ])
}

/// Channel change: like start-up without the blob
#[must_use]
pub fn retune_frames(config: &ModemConfig) -> Plan {
    plan([
        Frame::strobe(Strobe::Stop),
        power_frame(config.mode),
        channel_frame(config),
        Frame::strobe(config.mode.strobe()),
    ])
}

/// Re-issue the mode strobe
#[must_use]
pub fn keep_alive_frames(mode: RfMode) -> Plan {
    plan([Frame::strobe(mode.strobe())])
}

/// Drop to idle
#[must_use]
pub fn idle_frames() -> Plan {
    plan([Frame::strobe(Strobe::Stop)])
}

/// Capacity of the buffer returned by [`wire_bytes`]
pub const WIRE_CAPACITY: usize = 64;

/// Frames did not fit in [`WIRE_CAPACITY`] bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireOverflow {
    /// Total bytes the frames would have needed
    pub needed: usize,
}

/// Concatenate the bytes of a plan, in order
///
/// Used by diagnostics and tests; the drivers write frame by frame.
/// Every plan built here fits (the start plan is 54 bytes).
///
/// # Errors
///
/// [`WireOverflow`] if the frames exceed [`WIRE_CAPACITY`] bytes.
pub fn wire_bytes(frames: &[Frame]) -> Result<Vec<u8, WIRE_CAPACITY>, WireOverflow> {
    let mut out = Vec::new();
    for frame in frames {
        out.extend_from_slice(frame.as_bytes()).map_err(|()| WireOverflow {
            needed: frames.iter().map(|f| f.as_bytes().len()).sum(),
        })?;
    }
    Ok(out)
}
