//! 核心模块
//!
//! - [`config`]: environment configuration
//! - [`events`]: session events and the observer bus
//! - [`session`]: the application state object

pub mod config;
pub mod events;
pub mod session;

pub use config::Config;
pub use events::{EventBus, Feed, SessionEvent, SessionObserver};
pub use session::{Loadable, Session};

use crate::checkout::ClockTicketIssuer;
use crate::storage::{BlobStore, MemoryStore, RedbStore, StorageResult};
use tracing::info;

/// Open the configured store backend
///
/// The work directory is created on demand. A store file already held by
/// another client is reported as a storage error.
pub fn open_store(config: &Config) -> StorageResult<Box<dyn BlobStore>> {
    if config.in_memory_store {
        info!("Using in-memory store, nothing will be persisted");
        return Ok(Box::new(MemoryStore::new()));
    }

    std::fs::create_dir_all(&config.work_dir)?;
    let path = config.store_path();
    let store = RedbStore::open(&path)?;
    info!(path = %path.display(), "Store opened");
    Ok(Box::new(store))
}

/// Session over the configured store with wall-clock tickets
pub fn open_session(config: &Config) -> StorageResult<Session> {
    let store = open_store(config)?;
    Ok(Session::open(store, Box::new(ClockTicketIssuer)))
}
