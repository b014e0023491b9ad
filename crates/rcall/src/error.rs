//
// error.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

pub enum Error {
    /// A positional argument that must be textual was missing, empty, or of
    /// the wrong type. `call` names the originating call expression.
    InvalidStringArgument {
        call: String,
    },
    /// An interrupt was delivered and observed outside a suspension scope.
    Interrupted,
    Anyhow(anyhow::Error),
}

// empty implementation required for 'anyhow'
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStringArgument { call } => {
                write!(f, "invalid string argument in '{call}' call")
            },

            Error::Interrupted => {
                write!(f, "interrupted")
            },

            Error::Anyhow(err) => {
                write!(f, "{err:?}")
            },
        }
    }
}

// We delegate to `Display` because anyhow doesn't propagate the `?` flag:
// https://users.rust-lang.org/t/why-doesnt-anyhows-debug-formatter-include-the-underlying-debug-formatting/44227
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[macro_export]
macro_rules! anyhow {
    ($($rest: expr),*) => {{
        let message = anyhow::anyhow!($($rest, )*);
        $crate::error::Error::Anyhow(message)
    }}
}
