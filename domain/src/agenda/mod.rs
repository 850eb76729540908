//! Agenda items: the topics submitted for a vote

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{AgendaItem, NewAgendaItem};
pub use repository::AgendaItemRepository;
pub use value_objects::AgendaItemId;
