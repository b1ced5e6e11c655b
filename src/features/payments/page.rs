//! Payments Page
//!
//! Paginated payout list with quick filter and CSV export.

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
use crate::domain::payment::{Payment, PaymentStatus};
use crate::features::payments::controller::PaymentsController;
use crate::theme::colors::BeaconColors;
use crate::utils::format::{format_currency, format_datetime};

/// Payments page component
pub struct PaymentsPage {
    entities: AppEntities,
    controller: PaymentsController,
    table: Entity<DataTable<Payment>>,
    paginator: Entity<PageNavigator>,
    filter_input: Entity<TextInput>,
}

impl PaymentsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = PaymentsController::new(entities.clone());

        let table = cx.new(|cx| {
            let mut table = DataTable::<Payment>::new(cx);
            table.set_columns(Self::create_columns());
            table.set_empty_message("No payouts recorded");
            table
        });

        let page_controller = controller.clone();
        let paginator = page_navigator(
            move |page, cx| {
                page_controller.load_page(page, cx);
            },
            cx,
        );

        let filter_input = text_input("payments-filter", "", "Filter this page...", cx);
        let filter_controller = controller.clone();
        filter_input.update(cx, |input, _cx| {
            input.on_change(move |value, cx| {
                filter_controller.set_filter(value.to_string(), cx);
            });
        });

        let table_clone = table.clone();
        let paginator_clone = paginator.clone();
        cx.observe(&entities.payments, move |_this, payments, cx| {
            let (rows, loading, page, total_items, per_page) = {
                let state = payments.read(cx);
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

    fn create_columns() -> Vec<Column<Payment>> {
        vec![
            Column::new("creator", "Creator", 150.0, |p: &Payment| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(format!("@{}", p.creator_handle))
                    .into_any_element()
            }),
            Column::new("campaign", "Campaign", 200.0, |p: &Payment| {
                div().text_sm().child(p.campaign_name.clone()).into_any_element()
            }),
            Column::new("amount", "Amount", 110.0, |p: &Payment| {
                div()
                    .text_sm()
                    .child(format_currency(p.amount_cents))
                    .into_any_element()
            }),
            Column::new("status", "Status", 100.0, |p: &Payment| {
                let color = match p.status {
                    PaymentStatus::Paid => BeaconColors::success(),
                    PaymentStatus::Pending => BeaconColors::warning(),
                    PaymentStatus::Failed => BeaconColors::danger(),
                };
                div()
                    .text_sm()
                    .text_color(color)
                    .child(p.status.label())
                    .into_any_element()
            }),
            Column::new("paid_at", "Paid", 160.0, |p: &Payment| {
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(
                        p.paid_at
                            .as_ref()
                            .map(format_datetime)
                            .unwrap_or_else(|| "—".to_string()),
                    )
                    .into_any_element()
            }),
        ]
    }
}

impl Render for PaymentsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let total = self.entities.payments.read(cx).total_items;

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
                            .child(format!("{total} Payouts")),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.filter_input.clone())
                            .child(Button::secondary("export-payments", "Export CSV").on_click(
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
