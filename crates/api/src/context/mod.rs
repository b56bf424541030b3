//! Application context - dependency injection container

use std::sync::Arc;

use aura_core::{
    Clock, IdGenerator, InMemoryMeetingStore, MeetingStore, SchedulerService, SequentialIdGenerator,
};
use aura_domain::{AuraError, Config, Result};
use aura_infra::{DbManager, SqliteMeetingStore, SystemClock, UuidIdGenerator};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds the scheduler and its backing resources
pub struct AppContext {
    pub config: Config,
    /// `None` when running on the in-memory store
    pub db: Option<Arc<DbManager>>,
    pub scheduler: Arc<SchedulerService>,
}

impl AppContext {
    /// Load configuration and open the configured database.
    pub fn new() -> Result<Self> {
        Self::new_with_config(aura_infra::config::load()?)
    }

    /// Open the database named in `config`, migrate it and wire the
    /// scheduler with the system clock and UUID ids.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;

        let store: Arc<dyn MeetingStore> = Arc::new(SqliteMeetingStore::new(Arc::clone(&db)));
        let scheduler =
            build_scheduler(&config, store, Arc::new(UuidIdGenerator), Arc::new(SystemClock))?;

        info!(
            db_path = %db.path().display(),
            start_hour = config.scheduler.start_hour,
            end_hour = config.scheduler.end_hour,
            "application context ready"
        );

        Ok(Self { config, db: Some(db), scheduler: Arc::new(scheduler) })
    }

    /// Context over a process-local ledger, with the given clock.
    pub fn in_memory(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let scheduler = build_scheduler(
            &config,
            Arc::new(InMemoryMeetingStore::new()),
            Arc::new(SequentialIdGenerator::new()),
            clock,
        )?;

        Ok(Self { config, db: None, scheduler: Arc::new(scheduler) })
    }

    /// Report database and scheduler health.
    ///
    /// The database check runs on the blocking pool.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new().add_component(ComponentHealth::healthy("scheduler"));

        if let Some(db) = &self.db {
            status = status.add_component(check_database_health(Arc::clone(db)).await);
        }

        status.calculate_score();
        status
    }
}

fn build_scheduler(
    config: &Config,
    store: Arc<dyn MeetingStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
) -> Result<SchedulerService> {
    SchedulerService::new(&config.scheduler, store, ids, clock)
        .map_err(|e| AuraError::Config(format!("invalid scheduler window: {e}")))
}

async fn check_database_health(db: Arc<DbManager>) -> ComponentHealth {
    match tokio::task::spawn_blocking(move || db.health_check()).await {
        Ok(Ok(())) => ComponentHealth::healthy("database"),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "database health check failed");
            ComponentHealth::unhealthy("database", format!("query failed: {e}"))
        }
        Err(e) => {
            tracing::error!(error = %e, "database health check task panicked");
            ComponentHealth::unhealthy("database", format!("task panic: {e}"))
        }
    }
}
