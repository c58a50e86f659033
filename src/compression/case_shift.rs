use crate::error::{Error, Result};

/// Default marker opening a shifted run.
pub const SHIFT_IN: char = '↑';
/// Default marker closing a shifted run.
pub const SHIFT_OUT: char = '↓';

/// A pair of reserved marker symbols.
///
/// ```text
/// AbRaCaDaBrA  ->  ↑a↓b↑r↓a↑c↓a↑d↓a↑b↓r↑a
/// HELLO world  ->  ↑hello ↓world
/// ```
///
/// Only letters whose case mapping is one-to-one are folded. Any other symbol met
/// inside a shifted run is kept when uppercasing would not change it, and
/// otherwise ends the run first, so `remove(apply(s)) == s` for marker-free input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseShift {
    shift_in: char,
    shift_out: char,
}

impl Default for CaseShift {
    fn default() -> Self {
        Self {
            shift_in: SHIFT_IN,
            shift_out: SHIFT_OUT,
        }
    }
}

impl CaseShift {
    /// Use custom markers.
    ///
    /// # Errors
    ///
    /// [`Error::ReservedSymbol`] if both markers are the same symbol, or if either
    /// marker is itself a cased letter (it would be folded like payload).
    pub fn new(shift_in: char, shift_out: char) -> Result<Self> {
        if shift_in == shift_out {
            return Err(Error::ReservedSymbol { symbol: shift_in });
        }
        for marker in [shift_in, shift_out] {
            if fold(marker).is_some() || simple_upper(marker) != marker {
                return Err(Error::ReservedSymbol { symbol: marker });
            }
        }
        Ok(Self {
            shift_in,
            shift_out,
        })
    }

    pub fn shift_in(&self) -> char {
        self.shift_in
    }

    pub fn shift_out(&self) -> char {
        self.shift_out
    }

    /// First marker symbol found in `input`, if any.
    pub fn find_marker(&self, input: &str) -> Option<char> {
        input
            .chars()
            .find(|&ch| ch == self.shift_in || ch == self.shift_out)
    }

    /// Rewrite uppercase runs as marker-delimited lowercase text.
    ///
    /// Markers already present in `input` are not escaped; use [`Self::try_apply`]
    /// to reject such input.
    pub fn apply(&self, input: &str) -> String {
        let mut shifted = String::with_capacity(input.len());
        let mut is_shifted = false;
        for ch in input.chars() {
            match (is_shifted, fold(ch)) {
                (false, Some(lower)) => {
                    is_shifted = true;
                    shifted.push(self.shift_in);
                    shifted.push(lower);
                }
                (true, Some(lower)) => shifted.push(lower),
                (true, None) if simple_upper(ch) != ch => {
                    is_shifted = false;
                    shifted.push(self.shift_out);
                    shifted.push(ch);
                }
                _ => shifted.push(ch),
            }
        }
        shifted
    }

    /// Like [`Self::apply`], but refuse input containing a marker symbol.
    pub fn try_apply(&self, input: &str) -> Result<String> {
        match self.find_marker(input) {
            Some(symbol) => Err(Error::ReservedSymbol { symbol }),
            None => Ok(self.apply(input)),
        }
    }

    /// Undo [`Self::apply`].
    pub fn remove(&self, input: &str) -> String {
        let mut unshifted = String::with_capacity(input.len());
        let mut is_shifted = false;
        for ch in input.chars() {
            if ch == self.shift_in {
                is_shifted = true;
            } else if ch == self.shift_out {
                is_shifted = false;
            } else if is_shifted {
                unshifted.push(simple_upper(ch));
            } else {
                unshifted.push(ch);
            }
        }
        unshifted
    }
}

/// Apply the case shift with the default `↑`/`↓` markers.
pub fn apply_shift(input: &str) -> String {
    CaseShift::default().apply(input)
}

/// Remove the case shift with the default `↑`/`↓` markers.
pub fn remove_shift(input: &str) -> String {
    CaseShift::default().remove(input)
}

/// Lowercase form of `ch` when `ch` is uppercase and maps back to itself.
fn fold(ch: char) -> Option<char> {
    if !ch.is_uppercase() {
        return None;
    }
    let lower = single(ch.to_lowercase())?;
    (lower != ch && simple_upper(lower) == ch).then_some(lower)
}

/// Single-character uppercase of `ch`, or `ch` itself when there is none.
fn simple_upper(ch: char) -> char {
    single(ch.to_uppercase()).unwrap_or(ch)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
