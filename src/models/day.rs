use crate::config::defaults::DAYS_ORDER;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One value per school day, always in Monday..Saturday order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTable<T> {
    entries: Vec<(&'static str, T)>,
}

impl<T: Default> Default for DayTable<T> {
    fn default() -> Self {
        Self {
            entries: DAYS_ORDER.iter().map(|d| (*d, T::default())).collect(),
        }
    }
}

impl<T> DayTable<T> {
    pub fn get(&self, day: &str) -> Option<&T> {
        self.entries.iter().find(|(d, _)| *d == day).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, day: &str) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(d, _)| *d == day)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        self.entries.iter().map(|(d, v)| (*d, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut T)> {
        self.entries.iter_mut().map(|(d, v)| (*d, v))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> DayTable<U> {
        DayTable {
            entries: self.entries.iter().map(|(d, v)| (*d, f(v))).collect(),
        }
    }
}

impl<T: Serialize> Serialize for DayTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, value) in &self.entries {
            map.serialize_entry(day, value)?;
        }
        map.end()
    }
}
