// Service exports
pub mod contacts;
pub mod favorites;
pub mod notes;
pub mod persistence;
pub mod store;
pub mod tours;

pub use contacts::{ContactBook, ContactError};
pub use favorites::FavoriteService;
pub use notes::NoteStore;
pub use persistence::{JsonFileStore, KeyValueStore, MemoryStore, PersistenceError};
pub use store::{ListingStore, StoreError};
pub use tours::{TourBook, TourError};
