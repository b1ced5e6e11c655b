//! Creators Page
//!
//! The roster list: paginated table, quick filter, CSV export, and the
//! add/delete flows.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::DataTable;
use crate::components::composite::data_table::pagination::{PageNavigator, page_navigator};
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{TextInput, text_input};
use crate::domain::creator::{Creator, CreatorStatus, Platform};
use crate::features::creators::controller::CreatorsController;
use crate::theme::colors::BeaconColors;
use crate::utils::format::{format_followers, format_rate};

/// Input entities backing the add-creator modal
struct CreatorForm {
    handle: Entity<TextInput>,
    display_name: Entity<TextInput>,
    email: Entity<TextInput>,
    platform: Platform,
}

/// Creators page component
pub struct CreatorsPage {
    entities: AppEntities,
    controller: CreatorsController,
    table: Entity<DataTable<Creator>>,
    paginator: Entity<PageNavigator>,
    filter_input: Entity<TextInput>,
    form: Option<CreatorForm>,
}

impl CreatorsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = CreatorsController::new(entities.clone());

        let table = cx.new(|cx| {
            let mut table = DataTable::<Creator>::new(cx);
            table.set_columns(Self::create_columns(controller.clone()));
            table.set_row_id(|c| c.id.clone());
            table.set_empty_message("No creators on the roster");
            table
        });

        let page_controller = controller.clone();
        let paginator = page_navigator(
            move |page, cx| {
                page_controller.load_page(page, cx);
            },
            cx,
        );

        let filter_input = text_input("creators-filter", "", "Filter this page...", cx);
        let filter_controller = controller.clone();
        filter_input.update(cx, |input, _cx| {
            input.on_change(move |value, cx| {
                filter_controller.set_filter(value.to_string(), cx);
            });
        });

        // Push state changes into the table and paginator.
        let table_clone = table.clone();
        let paginator_clone = paginator.clone();
        cx.observe(&entities.creators, move |_this, creators, cx| {
            let (rows, loading, page, total_items, per_page, reveal_id) = {
                let state = creators.read(cx);
                (
                    state.filtered_rows().into_iter().cloned().collect::<Vec<_>>(),
                    state.loading,
                    state.page,
                    state.total_items,
                    state.per_page,
                    state.reveal_id.clone(),
                )
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                table.set_highlight(reveal_id);
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
            form: None,
        }
    }

    fn create_columns(controller: CreatorsController) -> Vec<Column<Creator>> {
        vec![
            Column::new("handle", "Handle", 140.0, |c: &Creator| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(format!("@{}", c.handle))
                    .into_any_element()
            }),
            Column::new("name", "Name", 180.0, |c: &Creator| {
                div().text_sm().child(c.display_name.clone()).into_any_element()
            }),
            Column::new("platform", "Platform", 100.0, |c: &Creator| {
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(c.platform.label())
                    .into_any_element()
            }),
            Column::new("followers", "Followers", 100.0, |c: &Creator| {
                div()
                    .text_sm()
                    .child(format_followers(c.followers))
                    .into_any_element()
            }),
            Column::new("engagement", "Engagement", 110.0, |c: &Creator| {
                div()
                    .text_sm()
                    .child(format_rate(c.engagement_rate))
                    .into_any_element()
            }),
            Column::new("status", "Status", 100.0, |c: &Creator| {
                let color = match c.status {
                    CreatorStatus::Active => BeaconColors::success(),
                    CreatorStatus::Paused => BeaconColors::warning(),
                    CreatorStatus::Offboarded => BeaconColors::text_muted(),
                };
                div()
                    .text_sm()
                    .text_color(color)
                    .child(c.status.label())
                    .into_any_element()
            }),
            Column::new("actions", "", 80.0, move |c: &Creator| {
                let controller = controller.clone();
                let id = c.id.clone();
                Button::ghost(SharedString::from(format!("delete-{}", c.id)), "Delete")
                    .on_click(move |_event, _window, cx| {
                        controller.delete(id.clone(), cx);
                    })
                    .into_any_element()
            }),
        ]
    }

    fn open_form(&mut self, cx: &mut Context<Self>) {
        self.form = Some(CreatorForm {
            handle: text_input("form-handle", "", "handle (without @)", cx),
            display_name: text_input("form-name", "", "Display name", cx),
            email: text_input("form-email", "", "Email", cx),
            platform: Platform::default(),
        });
        cx.notify();
    }

    fn close_form(&mut self, cx: &mut Context<Self>) {
        self.form = None;
        cx.notify();
    }

    fn cycle_platform(&mut self, cx: &mut Context<Self>) {
        if let Some(form) = self.form.as_mut() {
            form.platform = form.platform.next();
            cx.notify();
        }
    }

    fn save_form(&mut self, cx: &mut Context<Self>) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let handle = form.handle.read(cx).value().trim().trim_start_matches('@').to_string();
        let display_name = form.display_name.read(cx).value().trim().to_string();
        let email = form.email.read(cx).value().trim().to_string();
        if handle.is_empty() || display_name.is_empty() {
            return;
        }

        let creator = Creator {
            id: uuid::Uuid::new_v4().to_string(),
            handle,
            display_name,
            platform: form.platform,
            followers: 0,
            engagement_rate: 0.0,
            email,
            status: CreatorStatus::Active,
            created_at: chrono::Utc::now(),
        };

        self.controller.create(creator, cx);
        self.close_form(cx);
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(form) = self.form.as_ref() else {
            return div().into_any_element();
        };

        let can_save = !form.handle.read(cx).value().trim().is_empty()
            && !form.display_name.read(cx).value().trim().is_empty();
        let this = cx.entity().downgrade();

        let field = |label: &'static str, input: &Entity<TextInput>| {
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_xs()
                        .text_color(BeaconColors::text_secondary())
                        .child(label),
                )
                .child(input.clone())
        };

        Modal::new("Add creator")
            .on_close(move |cx| {
                let _ = this.update(cx, |page, cx| {
                    page.close_form(cx);
                });
            })
            .child(field("Handle", &form.handle))
            .child(field("Display name", &form.display_name))
            .child(field("Email", &form.email))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_xs()
                            .text_color(BeaconColors::text_secondary())
                            .child("Platform"),
                    )
                    .child(
                        div()
                            .id("form-platform")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .border_1()
                            .border_color(BeaconColors::input_border())
                            .text_sm()
                            .cursor_pointer()
                            .hover(|s| s.bg(BeaconColors::table_row_hover()))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.cycle_platform(cx);
                            }))
                            .child(form.platform.label()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::secondary("form-cancel", "Cancel").on_click(cx.listener(
                            |this, _event: &ClickEvent, _window, cx| {
                                this.close_form(cx);
                            },
                        )),
                    )
                    .child(
                        Button::primary("form-save", "Save")
                            .disabled(!can_save)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.save_form(cx);
                            })),
                    ),
            )
            .into_any_element()
    }
}

impl Render for CreatorsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let total = self.entities.creators.read(cx).total_items;

        let mut page = div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Header
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
                            .child(format!("{total} Creators")),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.filter_input.clone())
                            .child(Button::secondary("export-creators", "Export CSV").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.controller.export(cx);
                                }),
                            ))
                            .child(Button::primary("add-creator", "Add creator").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.open_form(cx);
                                }),
                            )),
                    ),
            )
            // Table
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.table.clone()),
            )
            .child(self.paginator.clone());

        if self.form.is_some() {
            page = page.child(div().absolute().inset_0().child(self.render_form(cx)));
        }

        page
    }
}
