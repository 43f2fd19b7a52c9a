//! Scheduler for the periodic dashboard refresh.
//!
//! Runs one refresh cycle as soon as the scheduler starts and then repeats it every configured
//! refresh interval. Cycles may overlap when the upstream is slow; the dashboard store only keeps
//! the results of the newest cycle.

use std::{future::Future, sync::Arc, time::Duration};

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error,
    model::app::AppState,
    service::refresh::{refresh_dashboard, RefreshReport},
};

/// Job scheduler running the dashboard refresh cycles.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Runs the initial refresh, registers the repeated refresh job and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(())` - Job registered and scheduler started
    /// - `Err(Error)` - Failed to register the job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        log_report(&refresh_dashboard(&self.state).await);

        let interval = self.state.refresh_interval;
        self.schedule_job(interval, "dashboard refresh", |state| async move {
            refresh_dashboard(&state).await
        })
        .await?;

        self.sched.start().await?;

        tracing::info!(
            "Refreshing contracts every {} second(s)",
            interval.as_secs()
        );

        Ok(())
    }

    /// Schedules `function` to run every `interval` with a clone of the application state.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        interval: Duration,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RefreshReport> + Send + 'static,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_repeated_async(interval, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    tracing::debug!("Running scheduled {}", name);

                    log_report(&function(state).await);
                })
            })?)
            .await?;

        Ok(())
    }
}

fn log_report(report: &RefreshReport) {
    if !report.published {
        tracing::debug!(
            "Refresh cycle {} superseded by a newer cycle",
            report.generation
        );
        return;
    }

    if report.failed.is_empty() {
        tracing::info!(
            "Refreshed contracts for {} system(s)",
            report.refreshed
        );
    } else {
        tracing::warn!(
            "Refreshed contracts for {} system(s), {} failed: {}",
            report.refreshed,
            report.failed.len(),
            report.failed.join(", ")
        );
    }
}
