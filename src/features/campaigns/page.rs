//! Campaigns Page
//!
//! Paginated campaign list with quick filter and CSV export.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::DataTable;
use crate::components::composite::data_table::pagination::{PageNavigator, page_navigator};
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{TextInput, text_input};
use crate::domain::campaign::{Campaign, CampaignStatus};
use crate::features::campaigns::controller::CampaignsController;
use crate::theme::colors::BeaconColors;
use crate::utils::format::{format_currency, format_date};

/// Campaigns page component
pub struct CampaignsPage {
    entities: AppEntities,
    controller: CampaignsController,
    table: Entity<DataTable<Campaign>>,
    paginator: Entity<PageNavigator>,
    filter_input: Entity<TextInput>,
}

impl CampaignsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = CampaignsController::new(entities.clone());

        let table = cx.new(|cx| {
            let mut table = DataTable::<Campaign>::new(cx);
            table.set_columns(Self::create_columns());
            table.set_empty_message("No campaigns yet");
            table
        });

        let page_controller = controller.clone();
        let paginator = page_navigator(
            move |page, cx| {
                page_controller.load_page(page, cx);
            },
            cx,
        );

        let filter_input = text_input("campaigns-filter", "", "Filter this page...", cx);
        let filter_controller = controller.clone();
        filter_input.update(cx, |input, _cx| {
            input.on_change(move |value, cx| {
                filter_controller.set_filter(value.to_string(), cx);
            });
        });

        let table_clone = table.clone();
        let paginator_clone = paginator.clone();
        cx.observe(&entities.campaigns, move |_this, campaigns, cx| {
            let (rows, loading, page, total_items, per_page) = {
                let state = campaigns.read(cx);
                (
                    state.filtered_rows().into_iter().cloned().collect::<Vec<_>>(),
                    state.loading,
                    state.page,
                    state.total_items,
                    state.per_page,
                )
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                cx.notify();
            });
            paginator_clone.update(cx, |nav, cx| {
                nav.set_paging(page, total_items, per_page);
                nav.set_loading(loading);
                cx.notify();
            });
        })
        .detach();

        Self {
            entities,
            controller,
            table,
            paginator,
            filter_input,
        }
    }

    fn create_columns() -> Vec<Column<Campaign>> {
        vec![
            Column::new("name", "Campaign", 200.0, |c: &Campaign| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(c.name.clone())
                    .into_any_element()
            }),
            Column::new("brand", "Brand", 160.0, |c: &Campaign| {
                div().text_sm().child(c.brand.clone()).into_any_element()
            }),
            Column::new("status", "Status", 100.0, |c: &Campaign| {
                let color = match c.status {
                    CampaignStatus::Active => BeaconColors::success(),
                    CampaignStatus::Draft => BeaconColors::text_muted(),
                    CampaignStatus::Completed => BeaconColors::info(),
                    CampaignStatus::Cancelled => BeaconColors::danger(),
                };
                div()
                    .text_sm()
                    .text_color(color)
                    .child(c.status.label())
                    .into_any_element()
            }),
            Column::new("budget", "Budget", 110.0, |c: &Campaign| {
                div()
                    .text_sm()
                    .child(format_currency(c.budget_cents))
                    .into_any_element()
            }),
            Column::new("flight", "Flight", 190.0, |c: &Campaign| {
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(format!(
                        "{} → {}",
                        format_date(&c.starts_on),
                        format_date(&c.ends_on)
                    ))
                    .into_any_element()
            }),
            Column::new("creators", "Creators", 80.0, |c: &Campaign| {
                div()
                    .text_sm()
                    .child(c.creator_count.to_string())
                    .into_any_element()
            }),
        ]
    }
}

impl Render for CampaignsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let total = self.entities.campaigns.read(cx).total_items;

        div()
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
                            .child(format!("{total} Campaigns")),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.filter_input.clone())
                            .child(Button::secondary("export-campaigns", "Export CSV").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.controller.export(cx);
                                }),
                            )),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.table.clone()),
            )
            .child(self.paginator.clone())
    }
}
