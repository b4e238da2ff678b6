//! Per-node color values.
//!
//! Internally a node is either [`Color::Unassigned`] or carries an explicit
//! color index. At the observation boundary colors are written as plain
//! integers with `-1` standing for "unassigned".

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Wire value of an unassigned node.
pub const UNASSIGNED: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Unassigned,
    Assigned(usize),
}

impl Color {
    #[must_use]
    pub fn is_assigned(self) -> bool {
        matches!(self, Color::Assigned(_))
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Color::Assigned(k) => Some(k),
            Color::Unassigned => None,
        }
    }

    /// Integer form used on the wire: the color index, or `-1`.
    #[must_use]
    pub fn to_raw(self) -> i64 {
        match self {
            // Color indices are bounded by the color budget, far below i64::MAX.
            #[allow(clippy::cast_possible_wrap)]
            Color::Assigned(k) => k as i64,
            Color::Unassigned => UNASSIGNED,
        }
    }

    /// Inverse of [`Color::to_raw`]. Any negative value reads as unassigned.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        usize::try_from(raw).map_or(Color::Unassigned, Color::Assigned)
    }
}

/// Number of distinct colors among the assigned entries.
pub(crate) fn count_distinct(colors: &[Color]) -> usize {
    colors
        .iter()
        .filter_map(|c| c.index())
        .collect::<HashSet<_>>()
        .len()
}

impl From<Option<usize>> for Color {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Color::Unassigned, Color::Assigned)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_raw())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw < UNASSIGNED {
            return Err(serde::de::Error::custom(format!(
                "color must be -1 or a non-negative index, got {raw}"
            )));
        }
        Ok(Color::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values() {
        assert_eq!(Color::Unassigned.to_raw(), -1);
        assert_eq!(Color::Assigned(3).to_raw(), 3);
        assert_eq!(Color::from_raw(-1), Color::Unassigned);
        assert_eq!(Color::from_raw(0), Color::Assigned(0));
    }

    #[test]
    fn serializes_as_integers() {
        let colors = vec![Color::Assigned(2), Color::Unassigned];
        let json = serde_json::to_string(&colors).unwrap();
        assert_eq!(json, "[2,-1]");
        let back: Vec<Color> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, colors);
    }

    #[test]
    fn rejects_values_below_sentinel() {
        assert!(serde_json::from_str::<Color>("-2").is_err());
    }
}
