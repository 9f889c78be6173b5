//! Single date selection with a Buddhist Era year dropdown.
use tessera_ui::{Dp, Modifier, State, remember, shard};
use tessera_ui_basic_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    spacer::spacer,
};
use tracing::info;

use tessera_buddhist_calendar::{
    buddhist::buddhist_calendar_with_state,
    calendar::{CalendarArgs, CalendarSelection, CalendarState, CaptionLayout, SelectionMode},
    date::CalendarDate,
    era::to_buddhist_year,
};

use crate::app::{demo_page, secondary_text, value_text};

#[shard]
pub fn single_selection_screen() {
    let state = remember(|| {
        CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::Single(CalendarDate::today()),
            None,
            1900..=2100,
        )
    });

    demo_page("Single selection", move || {
        column(
            ColumnArgs::default().modifier(Modifier::new().fill_max_width()),
            move |scope| {
                scope.child(|| {
                    secondary_text(
                        "The caption doubles as a year dropdown. Its labels read in the \
                         Buddhist Era; the year it commits is Gregorian.",
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || {
                    buddhist_calendar_with_state(
                        CalendarArgs::default()
                            .caption_layout(CaptionLayout::Dropdown)
                            .on_select(|selection| {
                                if let CalendarSelection::Single(date) = selection {
                                    info!(
                                        "selected {}-{:02}-{:02}",
                                        date.year(),
                                        date.month(),
                                        date.day()
                                    );
                                }
                            }),
                        state,
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                scope.child(move || selection_readout(state));
            },
        );
    });
}

fn selection_readout(state: State<CalendarState>) {
    match state.with(|s| s.selection()) {
        CalendarSelection::Single(date) => {
            column(ColumnArgs::default(), move |scope| {
                scope.child(move || {
                    value_text(format!(
                        "พ.ศ. {}-{:02}-{:02}",
                        to_buddhist_year(date),
                        date.month(),
                        date.day()
                    ));
                });
                scope.child(move || {
                    secondary_text(format!(
                        "ค.ศ. {}-{:02}-{:02}",
                        date.year(),
                        date.month(),
                        date.day()
                    ));
                });
            });
        }
        _ => secondary_text("No date selected."),
    }
}
