//! Dashboard Page
//!
//! Headline stat cards and the trailing monthly-spend chart.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::domain::stats::AgencyStats;
use crate::features::dashboard::controller::DashboardController;
use crate::theme::colors::BeaconColors;
use crate::utils::format::{format_currency, format_number};

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: DashboardController,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.stats, |_this, _, cx| cx.notify())
            .detach();

        let controller = DashboardController::new(entities.clone());

        Self {
            entities,
            controller,
        }
    }

    fn stat_card(label: &'static str, value: String, accent: gpui::Rgba) -> impl IntoElement {
        div()
            .flex_1()
            .p_4()
            .bg(BeaconColors::content_bg())
            .border_1()
            .border_color(BeaconColors::border())
            .rounded_md()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .text_color(BeaconColors::text_secondary())
                    .child(label),
            )
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(accent)
                    .child(value),
            )
    }

    fn render_cards(stats: &AgencyStats) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .gap_4()
            .child(Self::stat_card(
                "Creators on roster",
                format_number(stats.creator_count as i64),
                BeaconColors::text_primary(),
            ))
            .child(Self::stat_card(
                "Active campaigns",
                format_number(stats.active_campaigns as i64),
                BeaconColors::accent(),
            ))
            .child(Self::stat_card(
                "Pending payouts",
                format_currency(stats.pending_payout_cents),
                BeaconColors::warning(),
            ))
            .child(Self::stat_card(
                "Spend this month",
                format_currency(stats.month_spend_cents),
                BeaconColors::success(),
            ))
    }

    /// Bar chart of trailing monthly spend, tallest bar normalized to full
    /// height.
    fn render_spend_chart(stats: &AgencyStats) -> impl IntoElement {
        let max = stats
            .monthly_spend
            .iter()
            .map(|(_, cents)| *cents)
            .max()
            .unwrap_or(0)
            .max(1);

        div()
            .w_full()
            .p_4()
            .bg(BeaconColors::content_bg())
            .border_1()
            .border_color(BeaconColors::border())
            .rounded_md()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(BeaconColors::text_primary())
                    .child("Monthly spend"),
            )
            .child(
                div()
                    .h(px(160.0))
                    .flex()
                    .items_end()
                    .gap_3()
                    .children(stats.monthly_spend.iter().map(|(month, cents)| {
                        let height = (*cents as f32 / max as f32) * 140.0;
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .w_full()
                                    .h(px(height.max(2.0)))
                                    .bg(BeaconColors::accent())
                                    .rounded_sm(),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(BeaconColors::text_muted())
                                    .child(month.clone()),
                            )
                    })),
            )
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.stats.read(cx);
        let loading = state.loading;
        let stats = state.stats.clone();

        let mut page = div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Dashboard"),
                    )
                    .child(
                        Button::primary("refresh-stats", if loading { "Refreshing..." } else { "Refresh" })
                            .disabled(loading)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            })),
                    ),
            );

        match stats {
            Some(stats) => {
                page = page
                    .child(Self::render_cards(&stats))
                    .child(Self::render_spend_chart(&stats));
            }
            None => {
                page = page.child(
                    div()
                        .flex_1()
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(BeaconColors::text_muted())
                        .child(if loading { "Loading..." } else { "No data yet" }),
                );
            }
        }

        page
    }
}
