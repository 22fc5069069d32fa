pub mod database;
pub mod metrics;
pub mod seed;

pub use self::database::{DocumentStore, StorageError};
pub use self::metrics::{get_metrics, init_metrics};
pub use self::seed::{seed_defaults, SeedReport};
