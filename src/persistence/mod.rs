pub mod adapter;
pub mod files;
pub mod snapshot;
pub mod writer;

pub use adapter::{FileStore, KeyValueStore, MemoryStore, PersistenceError};
pub use files::{
    atomic_write, config_file, ensure_dir, get_data_dir, init_local_data_dir, log_file,
    read_if_exists, DATA_DIR_NAME,
};
pub use snapshot::{decode, encode, CorruptStateError, TASKS_KEY};
pub use writer::{PersistWriter, WriterStats};
