//! Ordered-priority resolution of one setting.
//!
//! Every resolver runs the same walk:
//!
//! 1. Take candidates in the order given (most trusted first).
//! 2. Stop at the first present one and coerce it to the target type.
//! 3. If coercion fails, record the error and return the zero value. Later
//!    candidates are *not* tried: a malformed higher-priority value is
//!    surfaced, not silently skipped.
//! 4. If nothing was present, record [`ChainfigError::MissingValue`] and
//!    return the zero value.
//!
//! Put a literal default last to make step 4 unreachable.

use crate::coerce::{parse_float, parse_int};
use crate::context::Chainfig;
use crate::error::ChainfigError;
use crate::types::Candidate;

impl Chainfig {
    /// Resolve with a custom coercion.
    ///
    /// Returns `None` on either failure path, after recording the error.
    /// `kind` names the target type in the "missing default" message.
    pub fn resolve_with<T>(
        &self,
        kind: &'static str,
        candidates: impl IntoIterator<Item = Candidate>,
        coerce: impl FnOnce(&str) -> Result<T, ChainfigError>,
    ) -> Option<T> {
        let Some(text) = candidates.into_iter().flatten().next() else {
            self.record(ChainfigError::MissingValue(kind));
            return None;
        };
        match coerce(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                self.record(e);
                None
            }
        }
    }

    /// The first present candidate, unchanged. `""` if none.
    pub fn resolve_string(&self, candidates: impl IntoIterator<Item = Candidate>) -> String {
        self.resolve_with("string", candidates, |s| Ok(s.to_string()))
            .unwrap_or_default()
    }

    /// The first present candidate as an integer. `0` on failure.
    ///
    /// Values with a decimal point are truncated toward zero; see
    /// [`parse_int`](crate::coerce::parse_int) for the accepted forms.
    pub fn resolve_int(&self, candidates: impl IntoIterator<Item = Candidate>) -> i64 {
        self.resolve_with("int", candidates, parse_int)
            .unwrap_or_default()
    }

    /// The first present candidate as a float. `0.0` on failure.
    pub fn resolve_float(&self, candidates: impl IntoIterator<Item = Candidate>) -> f64 {
        self.resolve_with("float", candidates, parse_float)
            .unwrap_or_default()
    }

    /// The first present candidate matched against the context's true/false
    /// strings. `false` on failure.
    pub fn resolve_bool(&self, candidates: impl IntoIterator<Item = Candidate>) -> bool {
        self.resolve_with("bool", candidates, |s| {
            self.vocabulary()
                .parse(s)
                .ok_or_else(|| ChainfigError::InvalidBool(s.to_string()))
        })
        .unwrap_or_default()
    }
}
