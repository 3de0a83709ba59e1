//! Shot-level types produced by the shot compiler

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Surface a shot is played from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Sand,
    Recovery,
    Green,
}

impl Lie {
    pub const ALL: [Lie; 6] = [
        Lie::Tee,
        Lie::Fairway,
        Lie::Rough,
        Lie::Sand,
        Lie::Recovery,
        Lie::Green,
    ];

    /// Parse a lie label case-insensitively. Unknown labels fall back to fairway.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "tee" => Lie::Tee,
            "fairway" => Lie::Fairway,
            "rough" => Lie::Rough,
            "sand" => Lie::Sand,
            "recovery" => Lie::Recovery,
            "green" => Lie::Green,
            _ => Lie::Fairway,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lie::Tee => "tee",
            Lie::Fairway => "fairway",
            Lie::Rough => "rough",
            Lie::Sand => "sand",
            Lie::Recovery => "recovery",
            Lie::Green => "green",
        }
    }
}

impl std::fmt::Display for Lie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Penalty attached to a shot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Penalty {
    /// `null`, absent or `false`
    #[default]
    None,
    /// `true`: a generic one-stroke penalty
    Stroke,
    OutOfBounds,
    Hazard,
    Unplayable,
    /// Any other value; carries its JSON text and costs nothing
    Unrecognized(String),
}

impl Penalty {
    /// Interpret a raw payload value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Penalty::None,
            Value::Bool(true) => Penalty::Stroke,
            Value::String(token) => match token.as_str() {
                "ob" => Penalty::OutOfBounds,
                "hazard" => Penalty::Hazard,
                "unplayable" => Penalty::Unplayable,
                _ => Penalty::Unrecognized(token.clone()),
            },
            other => Penalty::Unrecognized(other.to_string()),
        }
    }

    /// Strokes charged on top of the shot itself
    pub fn cost(&self) -> f64 {
        match self {
            Penalty::None | Penalty::Unrecognized(_) => 0.0,
            Penalty::Stroke | Penalty::Hazard | Penalty::Unplayable => 1.0,
            Penalty::OutOfBounds => 2.0,
        }
    }
}

/// A validated shot, ready for the strokes-gained engine
///
/// `hole` and `shot` are kept signed so the engine, not the compiler, is the
/// one rejecting non-positive values.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotEvent {
    pub hole: i64,
    pub shot: i64,
    pub ts: f64,
    pub before_m: f64,
    pub after_m: f64,
    pub before_lie: Lie,
    pub penalty: Penalty,
}

impl ShotEvent {
    pub fn new(hole: i64, shot: i64, before_m: f64, after_m: f64, before_lie: Lie) -> Self {
        Self {
            hole,
            shot,
            ts: 0.0,
            before_m,
            after_m,
            before_lie,
            penalty: Penalty::None,
        }
    }

    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_ts(mut self, ts: f64) -> Self {
        self.ts = ts;
        self
    }
}
