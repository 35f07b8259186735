//! Scheduler for periodic booking maintenance.
//!
//! A cron-based job scheduler running inside the server process. It releases the capacity held
//! by bookings that were never paid and closes out bookings whose visit date has passed.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod booking;
pub mod config;

use self::booking::{complete_past_visits, expire_unpaid_bookings};
use self::config::booking::{complete_visits, expire_unpaid};

/// Job scheduler for background booking maintenance.
pub struct Scheduler {
    db: DatabaseConnection,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Expiring bookings left unpaid for 30 minutes (every 15 minutes)
    /// - Completing bookings of past visit dates (daily, 00:30 IST)
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            expire_unpaid::CRON_EXPRESSION,
            "unpaid booking expiry",
            expire_unpaid_bookings,
        )
        .await?;

        self.schedule_job(
            complete_visits::CRON_EXPRESSION,
            "past visit completion",
            complete_past_visits,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives a clone of the database connection and returns the number of
    /// bookings it changed, which is logged along with any error.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::info!("{}: updated {} booking(s)", name, count),
                        Err(e) => tracing::error!("Error running {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
