//! Crease payload carried by every edge of a `CreasePattern`.

use serde::{Deserialize, Serialize};

/// Fold assignment of one crease.
///
/// Transitions: `Mark → {Mountain, Valley, Border}` and `Mountain ⇄ Valley`
/// (see [`Orientation::toggled`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Mark,
    Border,
    Mountain,
    Valley,
}

impl Orientation {
    /// Mountain or valley: the creases flat-foldability looks at.
    #[inline]
    pub fn is_fold(self) -> bool {
        matches!(self, Orientation::Mountain | Orientation::Valley)
    }

    /// Mountain and valley swap; marks and borders stay put.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Mountain => Orientation::Valley,
            Orientation::Valley => Orientation::Mountain,
            other => other,
        }
    }

    /// FOLD `edges_assignment` letter.
    pub fn fold_assignment(self) -> &'static str {
        match self {
            Orientation::Mark => "F",
            Orientation::Border => "B",
            Orientation::Mountain => "M",
            Orientation::Valley => "V",
        }
    }

    /// Parse a FOLD assignment letter (case-insensitive). Unassigned (`U`)
    /// reads as a mark, so it exports as `F`: the `U`/`F` distinction is not
    /// kept across a round trip.
    pub fn from_fold_assignment(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "B" => Some(Orientation::Border),
            "M" => Some(Orientation::Mountain),
            "V" => Some(Orientation::Valley),
            "F" | "U" => Some(Orientation::Mark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Mark => "mark",
            Orientation::Border => "border",
            Orientation::Mountain => "mountain",
            Orientation::Valley => "valley",
        }
    }
}

/// Edge payload: orientation plus an optional fold angle in degrees
/// (`None` means a flat 180° fold).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Crease {
    pub orientation: Orientation,
    pub angle: Option<f64>,
}

impl Crease {
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            angle: None,
        }
    }

    pub const fn border() -> Self {
        Self::new(Orientation::Border)
    }

    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = Some(degrees.abs());
        self
    }

    /// Signed fold angle in degrees: valley positive, mountain negative,
    /// zero for marks and borders.
    pub fn signed_angle(&self) -> f64 {
        let magnitude = self.angle.map_or(180.0, f64::abs);
        match self.orientation {
            Orientation::Mountain => -magnitude,
            Orientation::Valley => magnitude,
            Orientation::Mark | Orientation::Border => 0.0,
        }
    }

    /// Same orientation and (within `eps`) the same angle.
    pub fn same_as(&self, other: &Crease, eps: f64) -> bool {
        let angles = match (self.angle, other.angle) {
            (None, None) => true,
            (Some(a), Some(b)) => (a - b).abs() < eps,
            _ => false,
        };
        self.orientation == other.orientation && angles
    }
}
