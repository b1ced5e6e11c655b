//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, sidebar, content area, log panel, and
//! the global search overlay. It also runs the event pump that bridges
//! service events to UI updates, and keeps the search candidate index in
//! step with the loaded page data.

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{ActivePage, NavigationTarget};
use crate::components::composite::global_search::{GlobalSearch, global_search};
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::app_event::AppEvent;
use crate::features::campaigns::page::CampaignsPage;
use crate::features::creators::page::CreatorsPage;
use crate::features::dashboard::page::DashboardPage;
use crate::features::payments::page::PaymentsPage;
use crate::state::search_state::{SearchCategory, SearchHit};
use crate::theme::colors::BeaconColors;
use crate::utils::format::format_currency;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    search: Entity<GlobalSearch>,
    // Page views (created lazily and cached)
    dashboard_page: Option<Entity<DashboardPage>>,
    creators_page: Option<Entity<CreatorsPage>>,
    campaigns_page: Option<Entity<CampaignsPage>>,
    payments_page: Option<Entity<PaymentsPage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Search overlay: selecting a hit activates its page and, for
        // creators, marks the record for highlighting.
        let nav_entities = entities.clone();
        let search = global_search(
            move |target: NavigationTarget, cx| {
                nav_entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(target.page);
                    cx.notify();
                });
                if target.page == ActivePage::Creators {
                    nav_entities.creators.update(cx, |state, cx| {
                        state.reveal_id = target.record_id.clone();
                        cx.notify();
                    });
                }
            },
            cx,
        );

        // Layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let search_clone = search.clone();
        header.update(cx, |header, _cx| {
            header.on_search(move |window, cx| {
                search_clone.update(cx, |search, cx| {
                    search.open(window, cx);
                });
            });
        });
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // Dashboard is the landing page
        let dashboard_page = Some(cx.new(|cx| DashboardPage::new(entities.clone(), cx)));

        Self::start_event_pump(event_rx, entities.clone(), cx);
        Self::track_search_candidates(&entities, search.clone(), cx);

        cx.observe(&entities.nav, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            search,
            dashboard_page,
            creators_page: None,
            campaigns_page: None,
            payments_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Rebuild the search candidate index whenever page data changes
    fn track_search_candidates(
        entities: &AppEntities,
        search: Entity<GlobalSearch>,
        cx: &mut Context<Self>,
    ) {
        let rebuild = {
            let entities = entities.clone();
            move |search: &Entity<GlobalSearch>, cx: &mut App| {
                let candidates = build_candidates(&entities, cx);
                search.update(cx, |search, cx| {
                    search.set_candidates(candidates);
                    cx.notify();
                });
            }
        };

        let search_clone = search.clone();
        let rebuild_clone = rebuild.clone();
        cx.observe(&entities.creators, move |_this, _, cx| {
            rebuild_clone(&search_clone, cx);
        })
        .detach();

        let search_clone = search.clone();
        let rebuild_clone = rebuild.clone();
        cx.observe(&entities.campaigns, move |_this, _, cx| {
            rebuild_clone(&search_clone, cx);
        })
        .detach();

        let search_clone = search.clone();
        let rebuild_clone = rebuild.clone();
        cx.observe(&entities.payments, move |_this, _, cx| {
            rebuild_clone(&search_clone, cx);
        })
        .detach();

        // Pages are always searchable, even before any data loads.
        rebuild(&search, cx);
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        match page {
            ActivePage::Dashboard => {
                if self.dashboard_page.is_none() {
                    self.dashboard_page =
                        Some(cx.new(|cx| DashboardPage::new(self.entities.clone(), cx)));
                }
                self.dashboard_page.clone().unwrap().into_any_element()
            }
            ActivePage::Creators => {
                if self.creators_page.is_none() {
                    self.creators_page =
                        Some(cx.new(|cx| CreatorsPage::new(self.entities.clone(), cx)));
                }
                self.creators_page.clone().unwrap().into_any_element()
            }
            ActivePage::Campaigns => {
                if self.campaigns_page.is_none() {
                    self.campaigns_page =
                        Some(cx.new(|cx| CampaignsPage::new(self.entities.clone(), cx)));
                }
                self.campaigns_page.clone().unwrap().into_any_element()
            }
            ActivePage::Payments => {
                if self.payments_page.is_none() {
                    self.payments_page =
                        Some(cx.new(|cx| PaymentsPage::new(self.entities.clone(), cx)));
                }
                self.payments_page.clone().unwrap().into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(BeaconColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(BeaconColors::content_bg())
                            .child(content),
                    ),
            )
            .child(self.log_panel.clone())
            // Search overlay, renders nothing while closed
            .child(self.search.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log { level, message, timestamp } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::CreatorsLoaded { rows, total, page } => {
            entities.creators.update(cx, |state, cx| {
                state.apply_page(rows, total, page);
                cx.notify();
            });
        }
        AppEvent::CampaignsLoaded { rows, total, page } => {
            entities.campaigns.update(cx, |state, cx| {
                state.apply_page(rows, total, page);
                cx.notify();
            });
        }
        AppEvent::PaymentsLoaded { rows, total, page } => {
            entities.payments.update(cx, |state, cx| {
                state.apply_page(rows, total, page);
                cx.notify();
            });
        }
        AppEvent::StatsLoaded { stats } => {
            entities.stats.update(cx, |state, cx| {
                state.apply(stats);
                cx.notify();
            });
        }
        AppEvent::CreatorSaved { creator } => {
            entities.creators.update(cx, |state, cx| {
                state.insert_row(creator);
                cx.notify();
            });
        }
        AppEvent::CreatorDeleted { id } => {
            entities.creators.update(cx, |state, cx| {
                state.remove_row(&id);
                cx.notify();
            });
            entities.logs.update(cx, |logs, cx| {
                logs.push(
                    crate::state::log_state::LogLevel::Info,
                    format!("Creator {id} removed"),
                    chrono::Local::now(),
                );
                cx.notify();
            });
        }
        AppEvent::FetchFailed { context, message } => {
            // Loading flags must clear so the pager unlocks.
            entities.creators.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
            entities.campaigns.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
            entities.payments.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
            entities.stats.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
            entities.logs.update(cx, |logs, cx| {
                logs.push(
                    crate::state::log_state::LogLevel::Error,
                    format!("Failed to load {context}: {message}"),
                    chrono::Local::now(),
                );
                cx.notify();
            });
        }
    }
}

/// Assemble the search candidate index from pages and loaded rows
fn build_candidates(entities: &AppEntities, cx: &App) -> Vec<SearchHit> {
    let mut candidates = Vec::new();

    for page in ActivePage::all() {
        candidates.push(SearchHit {
            category: SearchCategory::Page,
            title: page.title().to_string(),
            subtitle: "Go to page".to_string(),
            target: NavigationTarget::page(*page),
            icon: page.icon(),
        });
    }

    for creator in &entities.creators.read(cx).rows {
        candidates.push(SearchHit {
            category: SearchCategory::Creator,
            title: creator.display_name.clone(),
            subtitle: format!("@{} · {}", creator.handle, creator.platform.label()),
            target: NavigationTarget::record(ActivePage::Creators, &creator.id),
            icon: ActivePage::Creators.icon(),
        });
    }

    for campaign in &entities.campaigns.read(cx).rows {
        candidates.push(SearchHit {
            category: SearchCategory::Campaign,
            title: campaign.name.clone(),
            subtitle: campaign.brand.clone(),
            target: NavigationTarget::record(ActivePage::Campaigns, &campaign.id),
            icon: ActivePage::Campaigns.icon(),
        });
    }

    for payment in &entities.payments.read(cx).rows {
        candidates.push(SearchHit {
            category: SearchCategory::Payment,
            title: payment.campaign_name.clone(),
            subtitle: format!(
                "@{} · {}",
                payment.creator_handle,
                format_currency(payment.amount_cents)
            ),
            target: NavigationTarget::record(ActivePage::Payments, &payment.id),
            icon: ActivePage::Payments.icon(),
        });
    }

    candidates
}
