//! Payments Controller
//!
//! Paging, filtering, and export for the payouts page.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::csv;
use crate::utils::format::{format_currency, format_datetime};

/// Payments page controller
#[derive(Clone)]
pub struct PaymentsController {
    entities: AppEntities,
}

impl PaymentsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load a page of payments
    pub fn load_page(&self, page: usize, cx: &mut App) {
        let per_page = self.entities.payments.read(cx).per_page;

        self.entities.payments.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::LoadPayments { page, per_page });
        }
    }

    /// Set the quick filter text
    pub fn set_filter(&self, filter: String, cx: &mut App) {
        self.entities.payments.update(cx, |state, cx| {
            state.set_filter(filter);
            cx.notify();
        });
    }

    /// Export the current page (unfiltered) as CSV
    pub fn export(&self, cx: &mut App) {
        let rows: Vec<Vec<String>> = self
            .entities
            .payments
            .read(cx)
            .rows
            .iter()
            .map(|p| {
                vec![
                    p.creator_handle.clone(),
                    p.campaign_name.clone(),
                    format_currency(p.amount_cents),
                    p.status.label().to_string(),
                    p.paid_at.as_ref().map(format_datetime).unwrap_or_default(),
                ]
            })
            .collect();

        let contents = csv::to_csv(
            &["creator", "campaign", "amount", "status", "paid_at"],
            &rows,
        );

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::ExportCsv {
                stem: "payments".to_string(),
                contents,
            });
        }
    }
}
