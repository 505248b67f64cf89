use std::fmt;

/// Something in the request that was defaulted or skipped instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TotalSlotsDefaulted { raw: String },
    TotalSlotsCapped { raw: String, max: u32 },
    DurationDefaulted { slot: u32, raw: String },
    BreakSkipped { index: usize, name: String, reason: String },
    PeriodClamped { subject: String, raw: String, slot: u32 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TotalSlotsDefaulted { raw } => {
                write!(f, "total_slots '{raw}' is not a positive integer, using default")
            }
            Notice::TotalSlotsCapped { raw, max } => {
                write!(f, "total_slots '{raw}' is above the limit, using {max}")
            }
            Notice::DurationDefaulted { slot, raw } => {
                write!(f, "duration_{slot} '{raw}' is not an integer, using default")
            }
            Notice::BreakSkipped {
                index,
                name,
                reason,
            } => write!(f, "break #{index} '{name}' skipped: {reason}"),
            Notice::PeriodClamped { subject, raw, slot } => {
                write!(f, "'{subject}': period '{raw}' placed in slot {slot}")
            }
        }
    }
}
