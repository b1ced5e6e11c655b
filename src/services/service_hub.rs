//! ServiceHub - Background Data Service
//!
//! Owns the service thread that talks to the hosted backend (or serves the
//! offline sample dataset) and provides a single point of control for the
//! UI: commands go in over a channel, [`AppEvent`]s come back out.

use std::sync::Arc;

use gpui::Global;
use parking_lot::RwLock;

use crate::domain::config::AppConfig;
use crate::domain::creator::Creator;
use crate::eventing::app_event::AppEvent;
use crate::services::api::ApiClient;
use crate::services::sample;
use crate::utils::config_store;

/// Commands that can be sent to the service thread
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Load a page of creators
    LoadCreators { page: usize, per_page: usize },
    /// Load a page of campaigns
    LoadCampaigns { page: usize, per_page: usize },
    /// Load a page of payments
    LoadPayments { page: usize, per_page: usize },
    /// Load dashboard aggregates
    LoadStats,
    /// Insert a creator record
    CreateCreator(Creator),
    /// Delete a creator record
    DeleteCreator { id: String },
    /// Write a CSV export to disk
    ExportCsv { stem: String, contents: String },
}

/// ServiceHub manages the background data service
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the service thread
    command_tx: flume::Sender<ServiceCommand>,
    /// Current configuration
    config: Arc<RwLock<AppConfig>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its worker thread
    pub fn new(event_tx: flume::Sender<AppEvent>, config: AppConfig) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let config = Arc::new(RwLock::new(config));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
            config: config.clone(),
        };

        hub.start_command_handler(command_rx, config, event_tx);

        hub
    }

    /// Start the command handler thread with its own Tokio runtime
    fn start_command_handler(
        &self,
        command_rx: flume::Receiver<ServiceCommand>,
        config: Arc<RwLock<AppConfig>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to create Tokio runtime: {e}");
                    let _ = event_tx.send(AppEvent::error(format!(
                        "Service runtime failed to start: {e}"
                    )));
                    return;
                }
            };

            rt.block_on(async move {
                let api = build_api(&config.read(), &event_tx);

                while let Ok(cmd) = command_rx.recv_async().await {
                    handle_command(cmd, api.as_ref(), &event_tx).await;
                }
            });
        });
    }

    /// Send a command to the service thread
    pub fn send(&self, cmd: ServiceCommand) {
        if self.command_tx.send(cmd).is_err() {
            tracing::warn!("Service thread is gone; command dropped");
        }
    }

    /// Get the current config
    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Send a log event to the UI
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Build the REST client when a backend is configured
fn build_api(config: &AppConfig, event_tx: &flume::Sender<AppEvent>) -> Option<ApiClient> {
    let api_config = config.api.as_ref()?;
    match ApiClient::new(api_config) {
        Ok(client) => {
            let _ = event_tx.send(AppEvent::info(format!(
                "Connected to backend at {}",
                api_config.base_url
            )));
            Some(client)
        }
        Err(e) => {
            let _ = event_tx.send(AppEvent::error(format!(
                "Backend config rejected, using sample data: {e}"
            )));
            None
        }
    }
}

async fn handle_command(
    cmd: ServiceCommand,
    api: Option<&ApiClient>,
    event_tx: &flume::Sender<AppEvent>,
) {
    match cmd {
        ServiceCommand::LoadCreators { page, per_page } => {
            let result = match api {
                Some(api) => {
                    api.fetch_page::<Creator>("creators", "created_at.desc", page, per_page)
                        .await
                }
                None => Ok(sample::page_of(&sample::creators(), page, per_page)),
            };
            match result {
                Ok((rows, total)) => {
                    let _ = event_tx.send(AppEvent::CreatorsLoaded { rows, total, page });
                }
                Err(e) => fetch_failed(event_tx, "creators", e),
            }
        }
        ServiceCommand::LoadCampaigns { page, per_page } => {
            let result = match api {
                Some(api) => {
                    api.fetch_page("campaigns", "starts_on.desc", page, per_page)
                        .await
                }
                None => Ok(sample::page_of(&sample::campaigns(), page, per_page)),
            };
            match result {
                Ok((rows, total)) => {
                    let _ = event_tx.send(AppEvent::CampaignsLoaded { rows, total, page });
                }
                Err(e) => fetch_failed(event_tx, "campaigns", e),
            }
        }
        ServiceCommand::LoadPayments { page, per_page } => {
            let result = match api {
                Some(api) => {
                    api.fetch_page("payments", "paid_at.desc.nullsfirst", page, per_page)
                        .await
                }
                None => Ok(sample::page_of(&sample::payments(), page, per_page)),
            };
            match result {
                Ok((rows, total)) => {
                    let _ = event_tx.send(AppEvent::PaymentsLoaded { rows, total, page });
                }
                Err(e) => fetch_failed(event_tx, "payments", e),
            }
        }
        ServiceCommand::LoadStats => {
            // Aggregates come from the sample set offline; against a real
            // backend they are assembled from the three tables' first pages.
            let stats = match api {
                Some(api) => match load_stats_from_api(api).await {
                    Ok(stats) => stats,
                    Err(e) => {
                        fetch_failed(event_tx, "stats", e);
                        return;
                    }
                },
                None => sample::stats(),
            };
            let _ = event_tx.send(AppEvent::StatsLoaded { stats });
        }
        ServiceCommand::CreateCreator(creator) => {
            if let Some(api) = api {
                if let Err(e) = api.insert("creators", &creator).await {
                    fetch_failed(event_tx, "create creator", e);
                    return;
                }
            }
            let _ = event_tx.send(AppEvent::info(format!(
                "Creator @{} added to the roster",
                creator.handle
            )));
            let _ = event_tx.send(AppEvent::CreatorSaved { creator });
        }
        ServiceCommand::DeleteCreator { id } => {
            if let Some(api) = api {
                if let Err(e) = api.delete("creators", &id).await {
                    fetch_failed(event_tx, "delete creator", e);
                    return;
                }
            }
            let _ = event_tx.send(AppEvent::CreatorDeleted { id });
        }
        ServiceCommand::ExportCsv { stem, contents } => {
            match write_export(&stem, &contents) {
                Ok(path) => {
                    let _ = event_tx.send(AppEvent::info(format!(
                        "Exported {} rows to {}",
                        contents.lines().count().saturating_sub(1),
                        path
                    )));
                }
                Err(e) => {
                    let _ = event_tx.send(AppEvent::error(format!("CSV export failed: {e}")));
                }
            }
        }
    }
}

fn fetch_failed(event_tx: &flume::Sender<AppEvent>, context: &str, e: crate::error::Error) {
    tracing::warn!("Fetch failed ({context}): {e}");
    let _ = event_tx.send(AppEvent::FetchFailed {
        context: context.to_string(),
        message: e.to_string(),
    });
}

/// Assemble dashboard aggregates from the live tables
async fn load_stats_from_api(api: &ApiClient) -> crate::error::Result<crate::domain::stats::AgencyStats> {
    use crate::domain::campaign::{Campaign, CampaignStatus};
    use crate::domain::payment::{Payment, PaymentStatus};
    use crate::domain::stats::{self, AgencyStats};

    let (_, creator_count) = api
        .fetch_page::<Creator>("creators", "created_at.desc", 1, 1)
        .await?;
    let (campaigns, _) = api
        .fetch_page::<Campaign>("campaigns", "starts_on.desc", 1, 200)
        .await?;
    let (payments, _) = api
        .fetch_page::<Payment>("payments", "paid_at.desc.nullsfirst", 1, 200)
        .await?;

    let pending_payout_cents = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .map(|p| p.amount_cents)
        .sum();

    let monthly_spend = stats::monthly_spend(&payments, 6, chrono::Utc::now());
    let month_spend_cents = monthly_spend.last().map(|(_, cents)| *cents).unwrap_or(0);

    Ok(AgencyStats {
        creator_count,
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        pending_payout_cents,
        month_spend_cents,
        monthly_spend,
    })
}

/// Write a timestamped CSV export, returning the path for logging
fn write_export(stem: &str, contents: &str) -> crate::error::Result<String> {
    let dir = config_store::export_dir()?;
    let filename = format!("{stem}-{}.csv", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(filename);
    std::fs::write(&path, contents)?;
    Ok(path.display().to_string())
}
