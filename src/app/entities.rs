//! Entities - Shared GPUI State Entities
//!
//! One entity per state struct, split by update frequency so a page load
//! never re-renders the log panel and vice versa. Registered as a global
//! for access from event dispatch.

use gpui::{App, AppContext, Entity, Global};

use crate::state::campaigns_state::CampaignsState;
use crate::state::creators_state::CreatorsState;
use crate::state::log_state::LogState;
use crate::state::nav_state::NavState;
use crate::state::payments_state::PaymentsState;
use crate::state::stats_state::StatsState;

/// All shared state entities
#[derive(Clone)]
pub struct AppEntities {
    pub nav: Entity<NavState>,
    pub logs: Entity<LogState>,
    pub creators: Entity<CreatorsState>,
    pub campaigns: Entity<CampaignsState>,
    pub payments: Entity<PaymentsState>,
    pub stats: Entity<StatsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Create all entities and register them as a global
    pub fn init(cx: &mut App) -> Self {
        let entities = Self {
            nav: cx.new(|_| NavState::default()),
            logs: cx.new(|_| LogState::default()),
            creators: cx.new(|_| CreatorsState::default()),
            campaigns: cx.new(|_| CampaignsState::default()),
            payments: cx.new(|_| PaymentsState::default()),
            stats: cx.new(|_| StatsState::default()),
        };
        cx.set_global(entities.clone());
        entities
    }
}
