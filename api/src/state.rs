use std::sync::Arc;

use sea_orm::DatabaseConnection;
use seeder::{FakeGenerator, SeedTargets};
use tokio::sync::Mutex;

/// Shared handler state.
///
/// Holds the connection, the startup seed targets, one content generator for
/// the whole process and the lock that keeps admin seed/wipe calls from
/// running concurrently. Handlers that need both locks take `admin_lock`
/// first.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    targets: Arc<SeedTargets>,
    generator: Arc<Mutex<FakeGenerator>>,
    admin_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, targets: SeedTargets, generator: FakeGenerator) -> Self {
        Self {
            db,
            targets: Arc::new(targets),
            generator: Arc::new(Mutex::new(generator)),
            admin_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn targets(&self) -> &SeedTargets {
        &self.targets
    }

    /// The process-wide generator. Each caller continues the same sequence.
    pub fn generator(&self) -> &Mutex<FakeGenerator> {
        &self.generator
    }

    pub fn admin_lock(&self) -> &Mutex<()> {
        &self.admin_lock
    }
}
