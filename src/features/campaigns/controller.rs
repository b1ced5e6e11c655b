//! Campaigns Controller
//!
//! Paging, filtering, and export for the campaigns page.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::csv;
use crate::utils::format::{format_currency, format_date};

/// Campaigns page controller
#[derive(Clone)]
pub struct CampaignsController {
    entities: AppEntities,
}

impl CampaignsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load a page of campaigns
    pub fn load_page(&self, page: usize, cx: &mut App) {
        let per_page = self.entities.campaigns.read(cx).per_page;

        self.entities.campaigns.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::LoadCampaigns { page, per_page });
        }
    }

    /// Set the quick filter text
    pub fn set_filter(&self, filter: String, cx: &mut App) {
        self.entities.campaigns.update(cx, |state, cx| {
            state.set_filter(filter);
            cx.notify();
        });
    }

    /// Export the current page (unfiltered) as CSV
    pub fn export(&self, cx: &mut App) {
        let rows: Vec<Vec<String>> = self
            .entities
            .campaigns
            .read(cx)
            .rows
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.brand.clone(),
                    c.status.label().to_string(),
                    format_currency(c.budget_cents),
                    format_date(&c.starts_on),
                    format_date(&c.ends_on),
                    c.creator_count.to_string(),
                ]
            })
            .collect();

        let contents = csv::to_csv(
            &[
                "name",
                "brand",
                "status",
                "budget",
                "starts_on",
                "ends_on",
                "creators",
            ],
            &rows,
        );

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::ExportCsv {
                stem: "campaigns".to_string(),
                contents,
            });
        }
    }
}
