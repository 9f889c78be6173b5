//! Date range selection across two month panels.
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
    date::{CalendarDate, DateRange, YearMonth},
    era::to_buddhist_year,
};

use crate::app::{demo_page, secondary_text, value_text};

#[shard]
pub fn range_selection_screen() {
    let state = remember(|| {
        let start = CalendarDate::new(2025, 6, 12).expect("valid demo date");
        let end = CalendarDate::new(2025, 7, 15).expect("valid demo date");
        CalendarState::new(
            SelectionMode::Range,
            CalendarSelection::Range(DateRange::new(start, Some(end))),
            YearMonth::new(2025, 6),
            1900..=2100,
        )
    });

    demo_page("Range selection", move || {
        column(
            ColumnArgs::default().modifier(Modifier::new().fill_max_width()),
            move |scope| {
                scope.child(|| {
                    secondary_text(
                        "Two month panels share one selection. Click once for the start \
                         date and again for the end; an earlier click restarts the range.",
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || {
                    buddhist_calendar_with_state(
                        CalendarArgs::default().number_of_months(2).on_select(
                            |selection| {
                                if let CalendarSelection::Range(range) = selection {
                                    let start = range.start();
                                    match range.end() {
                                        Some(end) => info!(
                                            "range {}-{:02}-{:02} to {}-{:02}-{:02}",
                                            start.year(),
                                            start.month(),
                                            start.day(),
                                            end.year(),
                                            end.month(),
                                            end.day()
                                        ),
                                        None => info!(
                                            "range started at {}-{:02}-{:02}",
                                            start.year(),
                                            start.month(),
                                            start.day()
                                        ),
                                    }
                                }
                            },
                        ),
                        state,
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || range_readout(state));
            },
        );
    });
}

fn range_readout(state: State<CalendarState>) {
    match state.with(|s| s.selection()) {
        CalendarSelection::Range(range) => {
            column(ColumnArgs::default(), move |scope| {
                scope.child(move || {
                    value_text(format!("Start: {}", date_line(range.start())));
                });
                scope.child(move || match range.end() {
                    Some(end) => value_text(format!("End: {}", date_line(end))),
                    None => secondary_text("End: pick a second date"),
                });
            });
        }
        _ => secondary_text("No range selected."),
    }
}

fn date_line(date: CalendarDate) -> String {
    format!(
        "{}-{:02}-{:02} (BE {})",
        date.year(),
        date.month(),
        date.day(),
        to_buddhist_year(date)
    )
}
