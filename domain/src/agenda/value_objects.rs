//! Agenda item identifiers

use serde::{Deserialize, Serialize};

/// Identity of an agenda item (Value Object)
///
/// Assigned by the store on insert, monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgendaItemId(u64);

impl AgendaItemId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AgendaItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AgendaItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_value() {
        let id = AgendaItemId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let id = AgendaItemId::from(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
