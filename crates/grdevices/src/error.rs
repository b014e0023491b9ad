//
// error.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

pub enum Error {
    /// The 'family' parameter was neither one family name nor four AFM
    /// paths. `call` names the originating call expression.
    InvalidFamilyParameter {
        call: String,
    },
    InvalidWidthOrHeight {
        call: String,
    },
    /// The device table is full; no new device can be opened.
    TooManyDevices {
        max: usize,
    },
    /// The driver constructor failed; the half-built descriptor was dropped.
    UnableToStartDevice {
        name: &'static str,
        source: anyhow::Error,
    },
    /// The driver only exists on another platform.
    DeviceUnavailable {
        name: &'static str,
    },
    Rcall(rcall::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UnableToStartDevice { source, .. } => Some(source.as_ref()),
            Error::Rcall(source) => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFamilyParameter { call } => {
                write!(f, "invalid 'family' parameter in '{call}' call")
            },

            Error::InvalidWidthOrHeight { call } => {
                write!(f, "invalid width or height in '{call}' call")
            },

            Error::TooManyDevices { max } => {
                write!(f, "too many open devices (maximum is {max})")
            },

            Error::UnableToStartDevice { name, source } => {
                write!(f, "unable to start device {name}: {source}")
            },

            Error::DeviceUnavailable { name } => {
                write!(f, "device '{name}' is not available on this platform")
            },

            Error::Rcall(source) => fmt::Display::fmt(source, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<rcall::Error> for Error {
    fn from(error: rcall::Error) -> Self {
        Self::Rcall(error)
    }
}
