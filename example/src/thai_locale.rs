//! Calendar rendered entirely with the Thai label table.
use tessera_ui::{Dp, Modifier, State, remember, shard};
use tessera_ui_basic_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    spacer::spacer,
};
use tracing::info;

use tessera_buddhist_calendar::{
    buddhist::buddhist_calendar_with_state,
    calendar::{CalendarArgs, CalendarSelection, CalendarState, SelectionMode},
    date::CalendarDate,
    locale::CalendarLocale,
};

use crate::app::{demo_page, secondary_text, thai_long_date, value_text};

#[shard]
pub fn thai_locale_screen() {
    let state = remember(|| {
        CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::Single(CalendarDate::today()),
            None,
            1900..=2100,
        )
    });

    demo_page("Thai locale", move || {
        column(
            ColumnArgs::default().modifier(Modifier::new().fill_max_width()),
            move |scope| {
                scope.child(|| {
                    secondary_text(
                        "Month names and weekday labels come from the Thai override \
                         table, and the week starts on Sunday.",
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || {
                    buddhist_calendar_with_state(
                        CalendarArgs::default().locale(CalendarLocale::thai()).on_select(
                            |selection| {
                                if let CalendarSelection::Single(date) = selection {
                                    info!(
                                        "selected {}-{:02}-{:02}",
                                        date.year(),
                                        date.month(),
                                        date.day()
                                    );
                                }
                            },
                        ),
                        state,
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || thai_readout(state));
            },
        );
    });
}

fn thai_readout(state: State<CalendarState>) {
    match state.with(|s| s.selection()) {
        CalendarSelection::Single(date) => value_text(thai_long_date(date)),
        _ => secondary_text("ยังไม่ได้เลือกวันที่"),
    }
}
