//! Dashboard Controller
//!
//! Triggers aggregate reloads for the dashboard.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::{ServiceCommand, ServiceHub};

/// Dashboard page controller
#[derive(Clone)]
pub struct DashboardController {
    entities: AppEntities,
}

impl DashboardController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Refresh the dashboard aggregates
    pub fn refresh(&self, cx: &mut App) {
        self.entities.stats.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::debug("Refreshing dashboard aggregates"));
            hub.send(ServiceCommand::LoadStats);
        }
    }
}
