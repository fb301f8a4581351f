//! `store` crate: explicit in-memory repository.
//!
//! Typed records for users, projects, tools and calendar events, the demo
//! fixture set they are seeded from, and the session store that remembers
//! who is signed in. No global state: callers own a [`Repository`].

pub mod error;
pub mod fixtures;
pub mod models;
pub mod repository;
pub mod session;

pub use error::StoreError;
pub use fixtures::Fixtures;
pub use repository::{ProjectSearch, Repository, ToolQuery, ToolSort};
pub use session::{MemoryStorage, SessionStorage, SessionStore};
