//! Durable store adapters

pub mod memory;
