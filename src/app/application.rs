//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::config_store;

actions!(beacon, [Quit]);

/// Run the Beacon Admin application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);

        // Load config; missing or broken config falls back to sample data
        let config = match config_store::load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Config not loaded, using defaults: {e}");
                AppConfig::default()
            }
        };
        let per_page = config.page_size();

        entities.creators.update(cx, |state, _| state.per_page = per_page);
        entities.campaigns.update(cx, |state, _| state.per_page = per_page);
        entities.payments.update(cx, |state, _| state.per_page = per_page);

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub and kick off the initial loads
        let service_hub = ServiceHub::new(event_tx.clone(), config);
        service_hub.log(AppEvent::info("Beacon Admin started"));
        service_hub.send(ServiceCommand::LoadStats);
        service_hub.send(ServiceCommand::LoadCreators { page: 1, per_page });
        service_hub.send(ServiceCommand::LoadCampaigns { page: 1, per_page });
        service_hub.send(ServiceCommand::LoadPayments { page: 1, per_page });
        cx.set_global(service_hub);

        entities.creators.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });
        entities.campaigns.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });
        entities.payments.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });
        entities.stats.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1400.0), px(900.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Beacon Admin")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .unwrap();

        cx.activate(true);
    });
}
