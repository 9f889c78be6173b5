//! Buddhist Era presentation layer for the calendar components.
//!
//! ## Usage
//!
//! Use when dates should read in the Buddhist Era while the application keeps
//! working with Gregorian values. Captions and year options are relabeled
//! through [`CalendarFormatters`]; selection state, callbacks, and year option
//! values stay Gregorian throughout.
use std::{ops::RangeInclusive, sync::Arc};

use derive_setters::Setters;
use tessera_ui::{
    DimensionValue, Dp, Modifier, State, provide_context, tessera, use_context,
};
use tessera_ui_basic_components::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    spacer::spacer,
    text::{TextArgs, text},
    theme::{ContentColor, MaterialTheme},
};

use crate::{
    calendar::{
        CalendarArgs, CalendarFormatters, CalendarState, YearOption, calendar,
        calendar_with_state, year_options,
    },
    date::YearMonth,
    era::BUDDHIST_ERA_OFFSET,
    locale::CalendarLocale,
};

/// Renders a month caption with the year in the Buddhist Era.
///
/// The month name comes from the locale; only the year digits change era.
pub fn buddhist_caption(month: YearMonth, locale: &CalendarLocale) -> String {
    format!(
        "{} {}",
        locale.month_name(month.month()),
        month.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Renders a Gregorian year as its Buddhist Era label.
pub fn buddhist_year_label(year: i32) -> String {
    (year + BUDDHIST_ERA_OFFSET).to_string()
}

/// Formatter hooks that relabel captions and year options in the Buddhist Era.
pub fn buddhist_formatters() -> CalendarFormatters {
    CalendarFormatters {
        caption: Arc::new(buddhist_caption),
        year_label: Arc::new(buddhist_year_label),
    }
}

/// Builds year options labeled in the Buddhist Era.
///
/// `year_range` and every option value are Gregorian years; only the labels
/// carry the era offset.
pub fn buddhist_year_options(year_range: RangeInclusive<i32>) -> Vec<YearOption> {
    year_options(year_range, buddhist_year_label)
}

/// # buddhist_calendar
///
/// Render a calendar whose captions and year options read in the Buddhist
/// Era.
///
/// ## Usage
///
/// A drop-in variant of [`calendar`]: any formatters set on the arguments are
/// replaced with [`buddhist_formatters`], everything else passes through.
/// Selected dates stay Gregorian.
///
/// ## Parameters
///
/// - `args` — configuration for the grid layout and internal state defaults;
///   see [`CalendarArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::{provide_context, tessera};
/// # use tessera_ui_basic_components::theme::MaterialTheme;
/// use tessera_buddhist_calendar::buddhist::buddhist_calendar;
/// use tessera_buddhist_calendar::calendar::CalendarArgs;
///
/// # #[tessera]
/// # fn component() {
/// # provide_context(MaterialTheme::default(), || {
/// buddhist_calendar(CalendarArgs::default().year_range(2400..=2600));
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn buddhist_calendar(args: impl Into<CalendarArgs>) {
    let args = args.into().formatters(buddhist_formatters());
    calendar(args);
}

/// # buddhist_calendar_with_state
///
/// Render a Buddhist Era calendar using an external state handle.
///
/// ## Usage
///
/// Use when the caller owns the selection. The state and `on_select`
/// callback carry raw Gregorian dates; only the rendered labels change era.
///
/// ## Parameters
///
/// - `args` — configuration for the grid layout; see [`CalendarArgs`].
/// - `state` — a [`CalendarState`] storing selection and navigation.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::{provide_context, tessera};
/// # use tessera_ui_basic_components::theme::MaterialTheme;
/// use tessera_ui::remember;
/// use tessera_buddhist_calendar::buddhist::buddhist_calendar_with_state;
/// use tessera_buddhist_calendar::calendar::{CalendarArgs, CalendarState};
///
/// # #[tessera]
/// # fn component() {
/// let state = remember(CalendarState::default);
/// # provide_context(MaterialTheme::default(), || {
/// buddhist_calendar_with_state(CalendarArgs::default(), state);
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn buddhist_calendar_with_state(args: impl Into<CalendarArgs>, state: State<CalendarState>) {
    let args = args.into().formatters(buddhist_formatters());
    calendar_with_state(args, state);
}

/// Configuration for [`buddhist_calendar_dialog`].
#[derive(Setters)]
pub struct BuddhistCalendarDialogArgs {
    /// State handle used by the embedded calendar.
    #[setters(skip)]
    pub state: State<CalendarState>,
    /// Optional override for the dialog title.
    #[setters(strip_option, into)]
    pub title: Option<String>,
    /// Optional confirm button content.
    #[setters(skip)]
    pub confirm_button: Option<Arc<dyn Fn() + Send + Sync>>,
    /// Optional dismiss button content.
    #[setters(skip)]
    pub dismiss_button: Option<Arc<dyn Fn() + Send + Sync>>,
    /// Calendar configuration forwarded to [`buddhist_calendar_with_state`].
    pub calendar_args: CalendarArgs,
}

impl BuddhistCalendarDialogArgs {
    /// Creates dialog args with the required calendar state.
    pub fn new(state: State<CalendarState>) -> Self {
        Self {
            state,
            title: None,
            confirm_button: None,
            dismiss_button: None,
            calendar_args: CalendarArgs::default(),
        }
    }

    /// Sets the confirm button content.
    pub fn confirm_button<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.confirm_button = Some(Arc::new(f));
        self
    }

    /// Sets the confirm button content using a shared callback.
    pub fn confirm_button_shared(mut self, f: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.confirm_button = Some(f);
        self
    }

    /// Sets the dismiss button content.
    pub fn dismiss_button<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.dismiss_button = Some(Arc::new(f));
        self
    }

    /// Sets the dismiss button content using a shared callback.
    pub fn dismiss_button_shared(mut self, f: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.dismiss_button = Some(f);
        self
    }
}

/// # buddhist_calendar_dialog
///
/// Render a Buddhist Era calendar dialog body with optional action buttons.
///
/// ## Usage
///
/// Use inside `dialog_provider` for modal flows such as a date of birth
/// field. Pair it with an `on_select` callback on the calendar args to close
/// the dialog as soon as a date is chosen.
///
/// ## Parameters
///
/// - `args` — dialog layout and action configuration; see
///   [`BuddhistCalendarDialogArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::{provide_context, tessera};
/// # use tessera_ui_basic_components::theme::MaterialTheme;
/// use tessera_ui::remember;
/// use tessera_buddhist_calendar::buddhist::{
///     BuddhistCalendarDialogArgs, buddhist_calendar_dialog,
/// };
/// use tessera_buddhist_calendar::calendar::CalendarState;
///
/// # #[tessera]
/// # fn component() {
/// let state = remember(CalendarState::default);
/// # provide_context(MaterialTheme::default(), || {
/// buddhist_calendar_dialog(BuddhistCalendarDialogArgs::new(state));
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn buddhist_calendar_dialog(args: impl Into<BuddhistCalendarDialogArgs>) {
    let args: BuddhistCalendarDialogArgs = args.into();
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let title_size = theme.typography.title_medium.font_size;
    let title = args.title;
    let calendar_args = args.calendar_args;
    let state = args.state;
    let confirm_button = args.confirm_button;
    let dismiss_button = args.dismiss_button;
    let has_confirm = confirm_button.is_some();
    let has_dismiss = dismiss_button.is_some();

    column(
        ColumnArgs::default().modifier(Modifier::new().constrain(
            Some(DimensionValue::Wrap {
                min: Some(Dp(320.0).into()),
                max: Some(Dp(560.0).into()),
            }),
            Some(DimensionValue::WRAP),
        )),
        move |scope| {
            if let Some(title) = title {
                scope.child(move || {
                    text(
                        TextArgs::default()
                            .text(title)
                            .size(title_size)
                            .color(scheme.on_surface),
                    );
                });
                scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
            }

            scope.child(move || {
                buddhist_calendar_with_state(calendar_args, state);
            });

            if has_confirm || has_dismiss {
                scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                let action_color = scheme.primary;
                scope.child(move || {
                    provide_context(
                        ContentColor {
                            current: action_color,
                        },
                        || {
                            row(
                                RowArgs::default()
                                    .modifier(Modifier::new().fill_max_width())
                                    .main_axis_alignment(MainAxisAlignment::End)
                                    .cross_axis_alignment(CrossAxisAlignment::Center),
                                move |row_scope| {
                                    if let Some(dismiss) = dismiss_button {
                                        row_scope.child(move || dismiss());
                                    }
                                    if has_confirm && has_dismiss {
                                        row_scope.child(|| spacer(Modifier::new().width(Dp(8.0))));
                                    }
                                    if let Some(confirm) = confirm_button {
                                        row_scope.child(move || confirm());
                                    }
                                },
                            );
                        },
                    );
                });
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        calendar::{CalendarSelection, SelectionMode},
        date::CalendarDate,
        era::to_gregorian_year,
    };

    fn month(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).expect("valid test month")
    }

    #[test]
    fn captions_carry_the_buddhist_year() {
        let english = CalendarLocale::english();
        assert_eq!(buddhist_caption(month(2025, 6), &english), "June 2568");
        assert_eq!(buddhist_caption(month(1957, 1), &english), "January 2500");

        let thai = CalendarLocale::thai();
        assert_eq!(buddhist_caption(month(2025, 6), &thai), "มิถุนายน 2568");
    }

    #[test]
    fn year_labels_are_gregorian_plus_543() {
        assert_eq!(buddhist_year_label(2025), "2568");
        assert_eq!(buddhist_year_label(2000), "2543");
        assert_eq!(buddhist_year_label(1957), "2500");
    }

    #[test]
    fn year_options_label_buddhist_but_keep_gregorian_values() {
        let options = buddhist_year_options(2400..=2600);
        assert_eq!(options.len(), 201);
        assert_eq!(options[0].label, "2943");
        assert_eq!(options[0].value, 2400);
        assert_eq!(options[200].label, "3143");
        assert_eq!(options[200].value, 2600);
        for option in &options {
            assert_eq!(option.label, (option.value + BUDDHIST_ERA_OFFSET).to_string());
        }
    }

    #[test]
    fn option_labels_convert_back_to_their_values() {
        for option in buddhist_year_options(2000..=2010) {
            let labeled: i32 = option.label.parse().expect("numeric label");
            assert_eq!(to_gregorian_year(labeled), option.value);
        }
    }

    #[test]
    fn formatters_match_the_free_functions() {
        let formatters = buddhist_formatters();
        let locale = CalendarLocale::english();
        assert_eq!(
            (formatters.caption)(month(2024, 2), &locale),
            buddhist_caption(month(2024, 2), &locale)
        );
        assert_eq!((formatters.year_label)(2024), buddhist_year_label(2024));
    }

    #[test]
    fn selection_stays_gregorian_behind_buddhist_labels() {
        let mut state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            Some(month(2025, 6)),
            1900..=2100,
        );
        let picked = CalendarDate::new(2025, 6, 12).expect("valid test date");
        assert!(state.select(picked));

        // The relabeling is purely presentational.
        assert_eq!(state.selection(), CalendarSelection::Single(picked));
        assert_eq!(
            buddhist_caption(month(2025, 6), &CalendarLocale::english()),
            "June 2568"
        );
    }
}
