//
// pictex.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use rcall::CallFrame;
use stdext::ResultOrLog;

use crate::device::DeviceParameters;
use crate::drivers::DeviceDriver;

/*  PicTeX device driver parameters:
 *  file    = output filename
 *  bg      = background color
 *  fg      = foreground color
 *  width   = width in inches
 *  height  = height in inches
 *  debug   = if true, write TeX comments into the output
 */
#[derive(Clone, Debug)]
pub struct PicTexParameters {
    pub file: PathBuf,
    pub bg: String,
    pub fg: String,
    pub width: f64,
    pub height: f64,
    pub debug: bool,
}

impl PicTexParameters {
    pub fn from_frame(frame: &mut CallFrame) -> crate::Result<Self> {
        let file = PathBuf::from(frame.string()?);
        let bg = frame.string()?;
        let fg = frame.string()?;
        let width = frame.real();
        let height = frame.real();
        let debug = frame.logical_or(false);

        Ok(Self {
            file,
            bg,
            fg,
            width,
            height,
            debug,
        })
    }
}

pub struct PicTexDriver {
    params: PicTexParameters,
    output: Option<BufWriter<File>>,
}

impl PicTexDriver {
    pub fn new(params: PicTexParameters) -> Self {
        Self {
            params,
            output: None,
        }
    }

    pub fn params(&self) -> &PicTexParameters {
        &self.params
    }
}

impl DeviceDriver for PicTexDriver {
    fn name(&self) -> &'static str {
        "pictex"
    }

    fn open(&mut self, par: &mut DeviceParameters) -> anyhow::Result<()> {
        let file = File::create(&self.params.file)
            .with_context(|| format!("can't open file '{}'", self.params.file.display()))?;
        self.output = Some(BufWriter::new(file));

        par.bg = self.params.bg.clone();
        par.fg = self.params.fg.clone();
        par.width = self.params.width;
        par.height = self.params.height;

        Ok(())
    }
}

impl Drop for PicTexDriver {
    fn drop(&mut self) {
        if let Some(mut output) = self.output.take() {
            output.flush().or_log_warning("couldn't flush PicTeX output");
        }
    }
}

#[cfg(test)]
mod tests {
    use rcall::RValue;

    use super::*;

    #[test]
    fn test_debug_flag_defaults_to_false() {
        // Debug flag left NA
        let mut frame = CallFrame::new("pictex", vec![
            RValue::from("out.tex"),
            RValue::from("white"),
            RValue::from("black"),
            RValue::from(5.0),
            RValue::from(4.0),
            RValue::na_logical(),
        ]);

        let params = PicTexParameters::from_frame(&mut frame).unwrap();
        assert!(!params.debug);
        assert_eq!(params.width, 5.0);
    }
}
