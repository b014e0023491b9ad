//
// display_list.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

/// The recorded drawing operations of one device, used to replay plots.
///
/// A freshly allocated descriptor carries a valid-but-empty list so early
/// redraw attempts see something sane; recording only starts once the device
/// is registered and `initialize()` has run. Entries are opaque engine
/// records; this layer never replays them.
pub struct DisplayList {
    ops: Vec<String>,
    recording: bool,
}

impl DisplayList {
    pub(crate) fn empty() -> Self {
        Self {
            ops: Vec::new(),
            recording: false,
        }
    }

    /// Marks the list ready to record, discarding anything recorded before.
    pub(crate) fn initialize(&mut self) {
        log::trace!("Graphics: initializing display list");
        self.ops.clear();
        self.recording = true;
    }

    /// Appends one drawing operation; ignored until the list is initialized.
    pub fn record(&mut self, op: impl Into<String>) {
        if self.recording {
            self.ops.push(op.into());
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }
}
