//! Cached eligibility verdicts per (agenda item, voter) pair

pub mod entities;
pub mod repository;

pub use entities::{EligibilityRecord, EligibilityVerdict, NewEligibilityRecord};
pub use repository::EligibilityRecordRepository;
