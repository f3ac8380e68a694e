//! Harmony Storage
//!
//! Backends for the single key-value session slot Harmony persists between
//! runs (the logged-in user).
//!
//! - [`MemorySessionStorage`]: process-local map, for tests and ephemeral sessions
//! - [`FileSessionStorage`]: one JSON file per key under a directory
//!
//! # Example
//!
//! ```rust,no_run
//! use harmony_core::storage::{load_user, save_user};
//! use harmony_storage::FileSessionStorage;
//!
//! # fn example(user: &harmony_core::User) -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSessionStorage::open(".harmony")?;
//! save_user(&storage, user)?;
//! let restored = load_user(&storage)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod file;
mod memory;

pub use error::{Result, StorageError};
pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;
