//! Theme preference values and the cycling/resolution rules.
//!
//! DESIGN
//! ======
//! The preference is stored as a plain lowercase string, so parsing and
//! cycling operate on raw strings at the edges and typed values everywhere
//! else. Cycling deliberately runs on the raw stored string (see
//! [`next_in_cycle`]), which keeps the wraparound arithmetic identical for
//! recognized and corrupted entries.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key under which the preference is persisted in the shared store.
pub const STORAGE_KEY: &str = "theme-preference";

/// Fixed cycling order: light, dark, auto, wrapping.
pub const CYCLE_ORDER: [Preference; 3] = [Preference::Light, Preference::Dark, Preference::Auto];

/// User-chosen theme setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Always render the light theme.
    Light,
    /// Always render the dark theme.
    Dark,
    /// Follow the environment's color-scheme signal.
    #[default]
    Auto,
}

impl Preference {
    /// Wire form: the literal stored string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Strict membership test over the three wire literals.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Resolve to a concrete theme, interpreting `Auto` against the
    /// environment signal. `Light` and `Dark` pass through unchanged.
    #[must_use]
    pub fn resolve(self, prefers_dark: bool) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::Auto => {
                if prefers_dark {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict [`FromStr`] impl.
///
/// The controller never takes this path; it falls back to a default on
/// unrecognized input. The strict form exists for embedders that want to
/// reject bad configuration up front.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized theme preference: {0:?}")]
pub struct UnknownPreference(pub String);

impl FromStr for Preference {
    type Err = UnknownPreference;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw).ok_or_else(|| UnknownPreference(raw.to_owned()))
    }
}

/// Concrete light/dark value after resolving `Auto`. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    /// True when the document should carry the dark marker.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Advance a raw stored value one step through [`CYCLE_ORDER`].
///
/// A value not present in the order has no position, and advancing from
/// "not found" lands on the first element. A corrupted stored entry
/// therefore cycles to `Light`, not to the lenient fallback's successor.
/// Known quirk, kept as-is.
#[must_use]
pub fn next_in_cycle(raw: &str) -> Preference {
    match CYCLE_ORDER.iter().position(|p| p.as_str() == raw) {
        Some(index) => CYCLE_ORDER[(index + 1) % CYCLE_ORDER.len()],
        None => CYCLE_ORDER[0],
    }
}
