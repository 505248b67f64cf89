use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One column of a school day: a numbered teaching slot or a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodToken {
    Slot(u32),
    Break(usize),
}

impl PeriodToken {
    pub fn is_break(&self) -> bool {
        matches!(self, PeriodToken::Break(_))
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodToken::Slot(k) => write!(f, "{k}"),
            PeriodToken::Break(i) => write!(f, "break_{i}"),
        }
    }
}

impl Serialize for PeriodToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A break after resolution. `start`/`end` are already 12-hour strings and
/// `after` is the last slot that ends no later than the break starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub after: u32,
}

impl Break {
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// How many consecutive slots a class takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    #[default]
    Single,
    Lab,
    Lab3,
}

impl DurationType {
    /// `lab3` and `lab` are recognised; anything else is a single slot.
    pub fn from_input(s: &str) -> Self {
        match s {
            "lab3" => DurationType::Lab3,
            "lab" => DurationType::Lab,
            _ => DurationType::Single,
        }
    }

    pub fn num_slots(&self) -> u32 {
        match self {
            DurationType::Single => 1,
            DurationType::Lab => 2,
            DurationType::Lab3 => 3,
        }
    }
}

impl<'de> Deserialize<'de> for DurationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DurationType::from_input(&raw))
    }
}
