//! Date of birth field backed by a modal Buddhist Era picker.
use tessera_ui::{Dp, Modifier, State, remember, shard, tessera};
use tessera_ui_basic_components::{
    button::{ButtonArgs, button},
    column::{ColumnArgs, column},
    dialog::{DialogController, DialogProviderArgs, DialogStyle, dialog_provider_with_controller},
    modifier::ModifierExt as _,
    spacer::spacer,
    text::text,
};
use tracing::info;

use tessera_buddhist_calendar::{
    buddhist::{BuddhistCalendarDialogArgs, buddhist_calendar_dialog},
    calendar::{CalendarArgs, CalendarSelection, CalendarState, CaptionLayout, SelectionMode},
    date::YearMonth,
    locale::CalendarLocale,
};

use crate::app::{demo_page, secondary_text, thai_long_date};

#[shard]
pub fn date_of_birth_screen() {
    let state = remember(|| {
        CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            YearMonth::new(2000, 1),
            1925..=2025,
        )
    });
    let dialog_controller = remember(DialogController::default);

    dialog_provider_with_controller(
        DialogProviderArgs::new(move || {
            dialog_controller.with_mut(|c| c.close());
        })
        .style(DialogStyle::Material),
        dialog_controller,
        move || {
            date_of_birth_content(state, dialog_controller);
        },
        move || {
            buddhist_calendar_dialog(
                BuddhistCalendarDialogArgs::new(state)
                    .title("วันเกิด")
                    .calendar_args(
                        CalendarArgs::default()
                            .caption_layout(CaptionLayout::Dropdown)
                            .locale(CalendarLocale::thai())
                            .on_select(move |selection| {
                                if let CalendarSelection::Single(date) = selection {
                                    info!(
                                        "date of birth {}-{:02}-{:02}",
                                        date.year(),
                                        date.month(),
                                        date.day()
                                    );
                                    dialog_controller.with_mut(|c| c.close());
                                }
                            }),
                    )
                    .dismiss_button(move || {
                        button(
                            ButtonArgs::text(move || {
                                dialog_controller.with_mut(|c| c.close());
                            }),
                            || text("ยกเลิก"),
                        );
                    }),
            );
        },
    );
}

#[tessera]
fn date_of_birth_content(state: State<CalendarState>, dialog_controller: State<DialogController>) {
    demo_page("Date of birth", move || {
        column(
            ColumnArgs::default().modifier(Modifier::new().fill_max_width()),
            move |scope| {
                scope.child(|| {
                    secondary_text(
                        "Opens a Thai picker with a Buddhist Era year dropdown. \
                         Choosing a date closes the dialog immediately.",
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || {
                    let label = state.with(|s| match s.selection() {
                        CalendarSelection::Single(date) => thai_long_date(date),
                        _ => "เลือกวันที่".to_string(),
                    });
                    button(
                        ButtonArgs::filled(move || {
                            dialog_controller.with_mut(|c| c.open());
                        }),
                        move || text(label),
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
                scope.child(move || {
                    if let CalendarSelection::Single(date) = state.with(|s| s.selection()) {
                        secondary_text(format!(
                            "ค.ศ. {}-{:02}-{:02}",
                            date.year(),
                            date.month(),
                            date.day()
                        ));
                    }
                });
            },
        );
    });
}
