use crate::models::event::ScheduleEvent;
use crate::models::period::PeriodToken;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// State of one (day, period) position in the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    /// A class starts here (possibly several merged classes).
    Event(ScheduleEvent),
    /// Covered by a class that started in an earlier period.
    Occupied,
    /// Nothing scheduled.
    Gap,
}

impl GridCell {
    pub fn as_event(&self) -> Option<&ScheduleEvent> {
        match self {
            GridCell::Event(ev) => Some(ev),
            _ => None,
        }
    }

    pub fn is_event(&self) -> bool {
        matches!(self, GridCell::Event(_))
    }
}

/// Wire form: the event object, the string `"occupied"`, or
/// `{"is_gap": true, "colspan": 1}`.
impl Serialize for GridCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GridCell::Event(ev) => ev.serialize(serializer),
            GridCell::Occupied => serializer.serialize_str("occupied"),
            GridCell::Gap => {
                let mut s = serializer.serialize_struct("Gap", 2)?;
                s.serialize_field("is_gap", &true)?;
                s.serialize_field("colspan", &1u32)?;
                s.end()
            }
        }
    }
}

/// Cells of a single day, kept in the order they were first written.
///
/// Break tokens only ever hold [`GridCell::Occupied`], recording that a
/// multi-slot class runs across that break.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayGrid {
    cells: Vec<(PeriodToken, GridCell)>,
}

impl DayGrid {
    pub fn get(&self, token: PeriodToken) -> Option<&GridCell> {
        self.cells.iter().find(|(t, _)| *t == token).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, token: PeriodToken) -> Option<&mut GridCell> {
        self.cells
            .iter_mut()
            .find(|(t, _)| *t == token)
            .map(|(_, c)| c)
    }

    /// Overwrites the cell in place, or appends it when the token is new.
    pub fn set(&mut self, token: PeriodToken, cell: GridCell) {
        match self.get_mut(token) {
            Some(existing) => *existing = cell,
            None => self.cells.push((token, cell)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PeriodToken, GridCell)> {
        self.cells.iter()
    }

    /// Events in storage order.
    pub fn events(&self) -> impl Iterator<Item = &ScheduleEvent> {
        self.cells.iter().filter_map(|(_, c)| c.as_event())
    }
}

impl Serialize for DayGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (token, cell) in &self.cells {
            map.serialize_entry(token, cell)?;
        }
        map.end()
    }
}
