//
// frame.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::collections::VecDeque;

use crate::error::Error;
use crate::value::RValue;

/// The positional arguments of a builtin call, consumed left to right.
///
/// `call` names the originating call expression so that argument errors can
/// identify the offending call, like `errorcall()` does in R.
pub struct CallFrame {
    call: String,
    args: VecDeque<RValue>,
}

impl CallFrame {
    pub fn new(call: impl Into<String>, args: Vec<RValue>) -> Self {
        Self {
            call: call.into(),
            args: args.into(),
        }
    }

    pub fn call(&self) -> &str {
        &self.call
    }

    /// Takes the next positional argument. An exhausted frame yields `Null`,
    /// which fails whatever typed extraction comes next.
    pub fn next(&mut self) -> RValue {
        self.args.pop_front().unwrap_or(RValue::Null)
    }

    /// Takes the next argument as a scalar string. The argument must be a
    /// character vector with at least one element.
    pub fn string(&mut self) -> crate::Result<String> {
        let value = self.next();
        match value.string_elt(0) {
            Some(s) => Ok(s.to_string()),
            None => Err(Error::InvalidStringArgument {
                call: self.call.clone(),
            }),
        }
    }

    /// Takes the next argument as a scalar double; non-numeric input is NA.
    pub fn real(&mut self) -> f64 {
        self.next().as_real()
    }

    /// Takes the next argument as a scalar logical; NA is `None`.
    pub fn logical(&mut self) -> Option<bool> {
        self.next().as_logical()
    }

    /// Takes the next argument as a scalar logical, falling back to `default`
    /// when the value is missing or unrecognized.
    pub fn logical_or(&mut self, default: bool) -> bool {
        self.logical().unwrap_or(default)
    }
}
