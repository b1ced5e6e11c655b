//! Creators Controller
//!
//! Paging, filtering, and roster mutations for the creators page.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::creator::Creator;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::csv;
use crate::utils::format::{format_datetime, format_rate};

/// Creators page controller
#[derive(Clone)]
pub struct CreatorsController {
    entities: AppEntities,
}

impl CreatorsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load a page of creators
    pub fn load_page(&self, page: usize, cx: &mut App) {
        let per_page = self.entities.creators.read(cx).per_page;

        self.entities.creators.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::LoadCreators { page, per_page });
        }
    }

    /// Set the quick filter text
    pub fn set_filter(&self, filter: String, cx: &mut App) {
        self.entities.creators.update(cx, |state, cx| {
            state.set_filter(filter);
            cx.notify();
        });
    }

    /// Save a new creator to the roster
    pub fn create(&self, creator: Creator, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::CreateCreator(creator));
        }
    }

    /// Delete a creator by id
    pub fn delete(&self, id: String, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::warn(format!("Deleting creator {id}")));
            hub.send(ServiceCommand::DeleteCreator { id });
        }
    }

    /// Export the current page (unfiltered) as CSV
    pub fn export(&self, cx: &mut App) {
        let rows: Vec<Vec<String>> = self
            .entities
            .creators
            .read(cx)
            .rows
            .iter()
            .map(|c| {
                vec![
                    c.handle.clone(),
                    c.display_name.clone(),
                    c.platform.label().to_string(),
                    c.followers.to_string(),
                    format_rate(c.engagement_rate),
                    c.email.clone(),
                    c.status.label().to_string(),
                    format_datetime(&c.created_at),
                ]
            })
            .collect();

        let contents = csv::to_csv(
            &[
                "handle",
                "display_name",
                "platform",
                "followers",
                "engagement_rate",
                "email",
                "status",
                "created_at",
            ],
            &rows,
        );

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::ExportCsv {
                stem: "creators".to_string(),
                contents,
            });
        }
    }
}
