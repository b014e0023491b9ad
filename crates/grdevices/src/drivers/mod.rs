//
// mod.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

pub mod macintosh;
pub mod pictex;
pub mod postscript;
pub mod xfig;

pub use macintosh::MacintoshDriver;
pub use pictex::PicTexDriver;
pub use postscript::FontFamily;
pub use postscript::PostScriptDriver;
pub use xfig::XFigDriver;

use crate::device::DeviceParameters;

/// One graphics backend, constructed from validated call arguments.
///
/// `open()` brings the device up: it may touch the file system (creating the
/// output target) and initializes the descriptor's parameter block. The
/// descriptor is only usable, and only becomes visible to the session, when
/// `open()` reports success.
pub trait DeviceDriver {
    /// Canonical device name, recorded in the active-device marker.
    fn name(&self) -> &'static str;

    fn open(&mut self, par: &mut DeviceParameters) -> anyhow::Result<()>;
}
