//! Aggregated vote counts for one agenda item

use crate::agenda::value_objects::AgendaItemId;
use crate::session::entities::SessionStatus;
use serde::{Deserialize, Serialize};

/// Result of tallying the votes of one agenda item
///
/// The choice set is exhaustive, so `total == yes + no` always holds;
/// the constructor computes `total` rather than accepting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub agenda_item_id: AgendaItemId,
    pub total: u64,
    pub yes: u64,
    pub no: u64,
    pub status: SessionStatus,
}

impl VoteTally {
    pub fn new(agenda_item_id: AgendaItemId, yes: u64, no: u64, status: SessionStatus) -> Self {
        Self {
            agenda_item_id,
            total: yes + no,
            yes,
            no,
            status,
        }
    }

    /// Check if the tally was unanimous (trivially true while empty)
    pub fn is_unanimous(&self) -> bool {
        self.yes == self.total || self.no == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let tally = VoteTally::new(AgendaItemId::from(1), 3, 2, SessionStatus::Open);
        assert_eq!(tally.total, 5);
        assert_eq!(tally.yes, 3);
        assert_eq!(tally.no, 2);
        assert!(!tally.is_unanimous());
    }

    #[test]
    fn test_empty_tally() {
        let tally = VoteTally::new(AgendaItemId::from(1), 0, 0, SessionStatus::Closed);
        assert_eq!(tally.total, 0);
        assert!(tally.is_unanimous());
    }

    #[test]
    fn test_unanimous() {
        let tally = VoteTally::new(AgendaItemId::from(1), 4, 0, SessionStatus::Closed);
        assert!(tally.is_unanimous());
    }

    #[test]
    fn test_json_shape() {
        let tally = VoteTally::new(AgendaItemId::from(2), 1, 1, SessionStatus::Open);
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json["agenda_item_id"], 2);
        assert_eq!(json["total"], 2);
        assert_eq!(json["status"], "OPEN");
    }
}
