//
// value.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

/// A value passed positionally to a builtin call.
///
/// This is a vectorised model of the handful of types the device dispatch
/// layer consumes: character, double, integer, and logical vectors. A logical
/// element of `None` is NA.
#[derive(Clone, Debug, PartialEq)]
pub enum RValue {
    Null,
    Strings(Vec<String>),
    Reals(Vec<f64>),
    Integers(Vec<i32>),
    Logicals(Vec<Option<bool>>),
}

impl RValue {
    pub fn len(&self) -> usize {
        match self {
            RValue::Null => 0,
            RValue::Strings(x) => x.len(),
            RValue::Reals(x) => x.len(),
            RValue::Integers(x) => x.len(),
            RValue::Logicals(x) => x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_string(&self) -> bool {
        matches!(self, RValue::Strings(_))
    }

    /// The string element at `offset`, or `None` when the value is not a
    /// character vector or is too short.
    pub fn string_elt(&self, offset: usize) -> Option<&str> {
        match self {
            RValue::Strings(x) => x.get(offset).map(|s| s.as_str()),
            _ => None,
        }
    }

    /// Coerce to a scalar double, following `Rf_asReal()`: the first element
    /// is taken, logicals and integers are widened, and anything else is NA
    /// (i.e. NaN).
    pub fn as_real(&self) -> f64 {
        match self {
            RValue::Reals(x) => x.first().copied().unwrap_or(f64::NAN),
            RValue::Integers(x) => x.first().map(|&i| f64::from(i)).unwrap_or(f64::NAN),
            RValue::Logicals(x) => match x.first() {
                Some(Some(true)) => 1.0,
                Some(Some(false)) => 0.0,
                _ => f64::NAN,
            },
            _ => f64::NAN,
        }
    }

    /// Coerce to a scalar logical, following `Rf_asLogical()`: `None` is NA,
    /// covering missing, non-coercible, and genuinely NA inputs alike.
    pub fn as_logical(&self) -> Option<bool> {
        match self {
            RValue::Logicals(x) => x.first().copied().flatten(),
            RValue::Integers(x) => x.first().map(|&i| i != 0),
            RValue::Reals(x) => match x.first() {
                Some(v) if !v.is_nan() => Some(*v != 0.0),
                _ => None,
            },
            RValue::Strings(x) => match x.first().map(|s| s.as_str()) {
                Some("TRUE") | Some("true") | Some("T") => Some(true),
                Some("FALSE") | Some("false") | Some("F") => Some(false),
                _ => None,
            },
            RValue::Null => None,
        }
    }

    /// A length-one logical NA.
    pub fn na_logical() -> RValue {
        RValue::Logicals(vec![None])
    }
}

impl From<&str> for RValue {
    fn from(value: &str) -> Self {
        RValue::Strings(vec![value.to_string()])
    }
}

impl From<String> for RValue {
    fn from(value: String) -> Self {
        RValue::Strings(vec![value])
    }
}

impl From<Vec<&str>> for RValue {
    fn from(value: Vec<&str>) -> Self {
        RValue::Strings(value.into_iter().map(String::from).collect())
    }
}

impl From<f64> for RValue {
    fn from(value: f64) -> Self {
        RValue::Reals(vec![value])
    }
}

impl From<bool> for RValue {
    fn from(value: bool) -> Self {
        RValue::Logicals(vec![Some(value)])
    }
}
