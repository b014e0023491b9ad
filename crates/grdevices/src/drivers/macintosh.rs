//
// macintosh.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use rcall::CallFrame;

use crate::device::DeviceParameters;
use crate::drivers::DeviceDriver;
use crate::error::Error;

/*  Macintosh device driver parameters:
 *  display    = display
 *  width      = width in inches
 *  height     = height in inches
 *  pointsize  = pointsize
 */
#[derive(Clone, Debug)]
pub struct MacintoshParameters {
    pub display: String,
    pub width: f64,
    pub height: f64,
    pub pointsize: f64,
}

impl MacintoshParameters {
    pub fn from_frame(frame: &mut CallFrame) -> crate::Result<Self> {
        let display = frame.string()?;
        let width = frame.real();
        let height = frame.real();
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidWidthOrHeight {
                call: frame.call().to_string(),
            });
        }
        let pointsize = frame.real();

        Ok(Self {
            display,
            width,
            height,
            pointsize,
        })
    }
}

/// Legacy on-screen driver. Only functional on macOS; the dispatcher reports
/// the device as unavailable on every other platform.
pub struct MacintoshDriver {
    params: MacintoshParameters,
}

impl MacintoshDriver {
    pub fn new(params: MacintoshParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MacintoshParameters {
        &self.params
    }
}

impl DeviceDriver for MacintoshDriver {
    fn name(&self) -> &'static str {
        "Macintosh"
    }

    fn open(&mut self, par: &mut DeviceParameters) -> anyhow::Result<()> {
        if !cfg!(target_os = "macos") {
            anyhow::bail!("Macintosh device driver is only available on macOS");
        }

        par.width = self.params.width;
        par.height = self.params.height;
        par.pointsize = self.params.pointsize;

        Ok(())
    }
}
