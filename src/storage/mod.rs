//! Storage implementations for different backends

mod document;
pub mod in_memory;
pub mod mongodb;

pub use in_memory::InMemoryOrderStore;
pub use mongodb::MongoOrderStore;
