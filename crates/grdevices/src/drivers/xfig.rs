//
// xfig.rs
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

/*  XFig device driver parameters:
 *  file        = output filename
 *  paper       = paper type
 *  family      = typeface
 *  bg          = background color
 *  fg          = foreground color
 *  width       = width in inches
 *  height      = height in inches
 *  horizontal  = {true: landscape; false: portrait}
 *  pointsize   = pointsize
 *  onefile     = {true: normal; false: single EPSF page}
 *  pagecentre  = centre plot region on paper?
 */
#[derive(Clone, Debug)]
pub struct XFigParameters {
    pub file: PathBuf,
    pub paper: String,
    pub family: String,
    pub bg: String,
    pub fg: String,
    pub width: f64,
    pub height: f64,
    pub horizontal: bool,
    pub pointsize: f64,
    pub onefile: bool,
    pub pagecentre: bool,
}

impl XFigParameters {
    pub fn from_frame(frame: &mut CallFrame) -> crate::Result<Self> {
        let file = PathBuf::from(frame.string()?);
        let paper = frame.string()?;
        let family = frame.string()?;
        let bg = frame.string()?;
        let fg = frame.string()?;
        let width = frame.real();
        let height = frame.real();
        let horizontal = frame.logical_or(true);
        let pointsize = frame.real();
        let onefile = frame.logical_or(false);
        let pagecentre = frame.logical_or(false);

        Ok(Self {
            file,
            paper,
            family,
            bg,
            fg,
            width,
            height,
            horizontal,
            pointsize,
            onefile,
            pagecentre,
        })
    }
}

pub struct XFigDriver {
    params: XFigParameters,
    output: Option<BufWriter<File>>,
}

impl XFigDriver {
    pub fn new(params: XFigParameters) -> Self {
        Self {
            params,
            output: None,
        }
    }

    pub fn params(&self) -> &XFigParameters {
        &self.params
    }
}

impl DeviceDriver for XFigDriver {
    fn name(&self) -> &'static str {
        "xfig"
    }

    fn open(&mut self, par: &mut DeviceParameters) -> anyhow::Result<()> {
        let file = File::create(&self.params.file)
            .with_context(|| format!("can't open file '{}'", self.params.file.display()))?;
        self.output = Some(BufWriter::new(file));

        par.bg = self.params.bg.clone();
        par.fg = self.params.fg.clone();
        par.width = self.params.width;
        par.height = self.params.height;
        par.pointsize = self.params.pointsize;
        par.landscape = self.params.horizontal;

        Ok(())
    }
}

impl Drop for XFigDriver {
    fn drop(&mut self) {
        if let Some(mut output) = self.output.take() {
            output.flush().or_log_warning("couldn't flush XFig output");
        }
    }
}
