//
// postscript.rs
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
use crate::error::Error;

/// The PostScript typeface, either a named family or a user typeface given
/// as four AFM (Adobe Font Metrics) paths.
#[derive(Clone, Debug, PartialEq)]
pub enum FontFamily {
    Named(String),
    UserPaths([String; 4]),
}

impl FontFamily {
    /// Parses the 'family' argument, which is either one family name or a
    /// 4-element vector of AFM paths. Any other length is invalid.
    pub fn from_frame(frame: &mut CallFrame) -> crate::Result<Self> {
        let value = frame.next();

        match value.len() {
            1 => match value.string_elt(0) {
                Some(name) => Ok(FontFamily::Named(name.to_string())),
                None => Err(rcall::Error::InvalidStringArgument {
                    call: frame.call().to_string(),
                }
                .into()),
            },
            4 => {
                let mut paths: [String; 4] = Default::default();
                for (i, path) in paths.iter_mut().enumerate() {
                    match value.string_elt(i) {
                        Some(s) => *path = s.to_string(),
                        None => {
                            return Err(Error::InvalidFamilyParameter {
                                call: frame.call().to_string(),
                            })
                        },
                    }
                }
                Ok(FontFamily::UserPaths(paths))
            },
            _ => Err(Error::InvalidFamilyParameter {
                call: frame.call().to_string(),
            }),
        }
    }
}

/*  PostScript device driver parameters:
 *  file        = output filename
 *  paper       = paper type
 *  family      = typeface, one name or four AFM paths
 *  bg          = background color
 *  fg          = foreground color
 *  width       = width in inches
 *  height      = height in inches
 *  horizontal  = {true: landscape; false: portrait}
 *  pointsize   = pointsize
 *  onefile     = {true: normal; false: single EPSF page}
 *  pagecentre  = centre plot region on paper?
 *  printit     = 'print' after closing device?
 *  command     = 'print' command
 */
#[derive(Clone, Debug)]
pub struct PostScriptParameters {
    pub file: PathBuf,
    pub paper: String,
    pub family: FontFamily,
    pub bg: String,
    pub fg: String,
    pub width: f64,
    pub height: f64,
    pub horizontal: bool,
    pub pointsize: f64,
    pub onefile: bool,
    pub pagecentre: bool,
    pub printit: bool,
    pub command: String,
}

impl PostScriptParameters {
    pub fn from_frame(frame: &mut CallFrame) -> crate::Result<Self> {
        let file = PathBuf::from(frame.string()?);
        let paper = frame.string()?;
        let family = FontFamily::from_frame(frame)?;
        let bg = frame.string()?;
        let fg = frame.string()?;
        let width = frame.real();
        let height = frame.real();
        let horizontal = frame.logical_or(true);
        let pointsize = frame.real();
        let onefile = frame.logical_or(false);
        let pagecentre = frame.logical_or(false);
        let printit = frame.logical_or(false);
        let command = frame.string()?;

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
            printit,
            command,
        })
    }
}

pub struct PostScriptDriver {
    params: PostScriptParameters,
    output: Option<BufWriter<File>>,
}

impl PostScriptDriver {
    pub fn new(params: PostScriptParameters) -> Self {
        Self {
            params,
            output: None,
        }
    }

    pub fn params(&self) -> &PostScriptParameters {
        &self.params
    }
}

impl DeviceDriver for PostScriptDriver {
    fn name(&self) -> &'static str {
        "postscript"
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

impl Drop for PostScriptDriver {
    fn drop(&mut self) {
        if let Some(mut output) = self.output.take() {
            output.flush().or_log_warning("couldn't flush PostScript output");
        }
    }
}
