//! Calendar grid components for picking Gregorian dates.
//!
//! ## Usage
//!
//! Use to let users pick a single date or a date range. Captions and the
//! year selection view render through replaceable formatter hooks, so an era
//! or locale layer can change what is displayed without touching the stored
//! dates.
use std::{ops::RangeInclusive, sync::Arc};

use derive_setters::Setters;
use tessera_ui::{
    Color, DimensionValue, Dp, Modifier, State, remember, tessera, use_context,
};
use tessera_ui_basic_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    flow_row::{FlowRowArgs, flow_row},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    scrollable::{ScrollableArgs, scrollable},
    shape_def::Shape,
    spacer::spacer,
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialAlpha, MaterialTheme},
};
use tracing::warn;

use crate::{
    date::{CalendarDate, DateRange, Weekday, YearMonth, days_in_month},
    locale::CalendarLocale,
};

const DATE_COLUMNS: usize = 7;
const DATE_ROWS: usize = 6;
const DATE_CELL_SIZE: Dp = Dp(40.0);
const DATE_CELL_RADIUS: Dp = Dp(20.0);
const DATE_GRID_SPACING: Dp = Dp(4.0);
const CAPTION_PADDING: Dp = Dp(8.0);
const PANEL_SPACING: Dp = Dp(16.0);
const NAV_BUTTON_SIZE: Dp = Dp(28.0);
const YEAR_CELL_WIDTH: Dp = Dp(72.0);
const YEAR_CELL_HEIGHT: Dp = Dp(36.0);
const YEAR_VIEW_HEIGHT: Dp = Dp(280.0);
const YEAR_COLUMNS: usize = 3;

/// Selection behavior of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One date at a time.
    #[default]
    Single,
    /// An inclusive start/end pair built from two clicks.
    Range,
}

/// Caption layouts supported by [`calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionLayout {
    /// Static month/year caption.
    #[default]
    Label,
    /// The first caption doubles as a toggle for the year selection view.
    Dropdown,
}

/// Current selection held by a [`CalendarState`].
///
/// Values are always raw Gregorian dates, regardless of how captions or year
/// options are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarSelection {
    /// Nothing selected.
    #[default]
    None,
    /// A single selected date.
    Single(CalendarDate),
    /// A selected range, possibly still waiting for its end date.
    Range(DateRange),
}

impl CalendarSelection {
    /// Returns the date anchoring the selection, if any.
    pub fn anchor(&self) -> Option<CalendarDate> {
        match self {
            CalendarSelection::None => None,
            CalendarSelection::Single(date) => Some(*date),
            CalendarSelection::Range(range) => Some(range.start()),
        }
    }
}

/// Renders the caption text for a displayed month.
pub type CaptionFormatter = Arc<dyn Fn(YearMonth, &CalendarLocale) -> String + Send + Sync>;

/// Renders the visible label of a year option from its Gregorian value.
pub type YearLabelFormatter = Arc<dyn Fn(i32) -> String + Send + Sync>;

/// Notified with the raw Gregorian selection after each committed change.
pub type SelectionCallback = Arc<dyn Fn(CalendarSelection) + Send + Sync>;

/// Display hooks used to render captions and year options.
#[derive(Clone)]
pub struct CalendarFormatters {
    /// Caption renderer for each month panel.
    pub caption: CaptionFormatter,
    /// Label renderer for the year selection options.
    pub year_label: YearLabelFormatter,
}

impl Default for CalendarFormatters {
    fn default() -> Self {
        Self {
            caption: Arc::new(|month, locale| {
                format!("{} {}", locale.month_name(month.month()), month.year())
            }),
            year_label: Arc::new(|year| year.to_string()),
        }
    }
}

/// One entry of the year selection view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOption {
    /// Text shown for this year.
    pub label: String,
    /// Gregorian year committed when the option is chosen.
    pub value: i32,
}

/// Builds one option per year in the inclusive range.
///
/// Labels come from `year_label`; values are always the Gregorian year.
/// Inverted bounds are swapped, matching [`CalendarState`] normalization.
pub fn year_options(
    year_range: RangeInclusive<i32>,
    year_label: impl Fn(i32) -> String,
) -> Vec<YearOption> {
    normalize_year_range(year_range)
        .map(|year| YearOption {
            label: year_label(year),
            value: year,
        })
        .collect()
}

/// Defaults for calendar behavior.
pub struct CalendarDefaults;

impl CalendarDefaults {
    /// Default navigable year range.
    pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2100;
}

/// Holds the selection and display state for a calendar.
pub struct CalendarState {
    selection: CalendarSelection,
    mode: SelectionMode,
    displayed_month: YearMonth,
    year_range: RangeInclusive<i32>,
    year_view_open: bool,
}

impl CalendarState {
    /// Creates a calendar state.
    ///
    /// Inverted year bounds are swapped. The starting displayed month is the
    /// explicit one when given, otherwise the month anchoring the initial
    /// selection, otherwise the current month clamped into the year bounds.
    pub fn new(
        mode: SelectionMode,
        initial_selection: CalendarSelection,
        initial_displayed_month: Option<YearMonth>,
        year_range: RangeInclusive<i32>,
    ) -> Self {
        let year_range = normalize_year_range(year_range);
        let selection = coerce_selection(initial_selection, mode, &year_range);

        let displayed_month = initial_displayed_month
            .filter(|month| year_range.contains(&month.year()))
            .or_else(|| selection.anchor().map(YearMonth::from_date))
            .unwrap_or_else(|| fallback_displayed_month(&year_range));

        Self {
            selection,
            mode,
            displayed_month,
            year_range,
            year_view_open: false,
        }
    }

    /// Returns the current selection.
    pub fn selection(&self) -> CalendarSelection {
        self.selection
    }

    /// Returns the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns the month shown by the first panel.
    pub fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    /// Returns the navigable year range.
    pub fn year_range(&self) -> &RangeInclusive<i32> {
        &self.year_range
    }

    /// Returns true while the year selection view is open.
    pub fn is_year_view_open(&self) -> bool {
        self.year_view_open
    }

    /// Applies a click on a date and returns true when the selection changed.
    ///
    /// In single mode the date replaces the previous selection. In range mode
    /// the first click starts a range; a second click at or after the start
    /// completes it, while an earlier click restarts the range. Any click on
    /// a complete range starts over.
    pub fn select(&mut self, date: CalendarDate) -> bool {
        if !self.year_range.contains(&date.year()) {
            return false;
        }
        let next = match self.mode {
            SelectionMode::Single => CalendarSelection::Single(date),
            SelectionMode::Range => match self.selection {
                CalendarSelection::Range(range) if !range.is_complete() => {
                    if date < range.start() {
                        CalendarSelection::Range(DateRange::starting_at(date))
                    } else {
                        CalendarSelection::Range(DateRange::new(range.start(), Some(date)))
                    }
                }
                _ => CalendarSelection::Range(DateRange::starting_at(date)),
            },
        };
        if next == self.selection {
            return false;
        }
        self.selection = next;
        true
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = CalendarSelection::None;
    }

    /// Updates the displayed month, clamped to the year range.
    pub fn set_displayed_month(&mut self, month: YearMonth) {
        self.displayed_month = clamp_month_to_range(month, &self.year_range);
    }

    /// Moves the displayed month forward by one, staying within the bounds.
    pub fn next_month(&mut self) {
        if can_navigate_next(self.displayed_month, &self.year_range) {
            self.displayed_month = self.displayed_month.add_months(1);
        }
    }

    /// Moves the displayed month backward by one, staying within the bounds.
    pub fn previous_month(&mut self) {
        if can_navigate_prev(self.displayed_month, &self.year_range) {
            self.displayed_month = self.displayed_month.add_months(-1);
        }
    }

    /// Jumps the displayed month to another year, keeping the month number.
    ///
    /// This is the commit path of the year selection view; the year is the
    /// Gregorian option value, never a display label. Years outside the
    /// bounds are ignored.
    pub fn set_displayed_year(&mut self, year: i32) {
        if !self.year_range.contains(&year) {
            return;
        }
        self.displayed_month = YearMonth::new_unchecked(year, self.displayed_month.month());
    }

    /// Opens the year selection view.
    pub fn open_year_view(&mut self) {
        self.year_view_open = true;
    }

    /// Closes the year selection view.
    pub fn close_year_view(&mut self) {
        self.year_view_open = false;
    }

    /// Toggles the year selection view.
    pub fn toggle_year_view(&mut self) {
        self.year_view_open = !self.year_view_open;
    }

    fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            selection: self.selection,
            displayed_month: self.displayed_month,
            year_range: self.year_range.clone(),
            year_view_open: self.year_view_open,
        }
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            None,
            CalendarDefaults::YEAR_RANGE,
        )
    }
}

#[derive(Clone)]
struct CalendarSnapshot {
    selection: CalendarSelection,
    displayed_month: YearMonth,
    year_range: RangeInclusive<i32>,
    year_view_open: bool,
}

/// Configuration options for [`calendar`].
///
/// Initial-state fields are applied only when `calendar` owns the state.
#[derive(Clone, Setters)]
pub struct CalendarArgs {
    /// Optional modifier chain applied to the calendar.
    pub modifier: Modifier,
    /// Selection behavior for the internal state.
    pub mode: SelectionMode,
    /// Initial selection for the internal state.
    pub initial_selection: CalendarSelection,
    /// Initial displayed month for the internal state.
    #[setters(strip_option)]
    pub initial_displayed_month: Option<YearMonth>,
    /// Gregorian year range reachable by navigation.
    pub year_range: RangeInclusive<i32>,
    /// Number of consecutive month panels displayed together.
    pub number_of_months: usize,
    /// Caption layout for the first month panel.
    pub caption_layout: CaptionLayout,
    /// Month and weekday labels used by the grid.
    pub locale: CalendarLocale,
    /// Display hooks for captions and year options.
    pub formatters: CalendarFormatters,
    /// Whether weekday labels are rendered above each panel.
    pub show_weekday_labels: bool,
    /// Called with the raw Gregorian selection after each committed change.
    #[setters(skip)]
    pub on_select: Option<SelectionCallback>,
}

impl CalendarArgs {
    /// Sets the selection-changed callback.
    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(CalendarSelection) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(f));
        self
    }

    /// Sets the selection-changed callback from a shared handler.
    pub fn on_select_shared(mut self, f: SelectionCallback) -> Self {
        self.on_select = Some(f);
        self
    }
}

impl Default for CalendarArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            mode: SelectionMode::Single,
            initial_selection: CalendarSelection::None,
            initial_displayed_month: None,
            year_range: CalendarDefaults::YEAR_RANGE,
            number_of_months: 1,
            caption_layout: CaptionLayout::Label,
            locale: CalendarLocale::english(),
            formatters: CalendarFormatters::default(),
            show_weekday_labels: true,
            on_select: None,
        }
    }
}

/// # calendar
///
/// Render a calendar grid for picking a date or a date range.
///
/// ## Usage
///
/// Use when the calendar can own its selection state. For externally
/// observed or controlled selection, see [`calendar_with_state`].
///
/// ## Parameters
///
/// - `args` — configuration for the grid layout, display hooks, and internal
///   state defaults; see [`CalendarArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::{provide_context, tessera};
/// # use tessera_ui_basic_components::theme::MaterialTheme;
/// use tessera_buddhist_calendar::calendar::{CalendarArgs, CalendarState, calendar};
///
/// # #[tessera]
/// # fn component() {
/// # provide_context(MaterialTheme::default(), || {
/// calendar(CalendarArgs::default());
/// # });
/// let state = CalendarState::default();
/// assert!(state.selection().anchor().is_none());
/// # }
/// # component();
/// ```
#[tessera]
pub fn calendar(args: impl Into<CalendarArgs>) {
    let args: CalendarArgs = args.into();
    let mode = args.mode;
    let initial_selection = args.initial_selection;
    let initial_displayed_month = args.initial_displayed_month;
    let year_range = args.year_range.clone();

    let state = remember(|| {
        CalendarState::new(mode, initial_selection, initial_displayed_month, year_range)
    });
    calendar_with_state(args, state);
}

/// # calendar_with_state
///
/// Render a calendar grid using an external state handle.
///
/// ## Usage
///
/// Use when the caller owns the selection: the handle stays readable outside
/// the component, and `on_select` reports each committed change with raw
/// Gregorian dates.
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
/// use tessera_buddhist_calendar::calendar::{
///     CalendarArgs, CalendarState, calendar_with_state,
/// };
/// use tessera_buddhist_calendar::date::CalendarDate;
///
/// # #[tessera]
/// # fn component() {
/// let state = remember(CalendarState::default);
/// # provide_context(MaterialTheme::default(), || {
/// calendar_with_state(CalendarArgs::default(), state);
/// # });
/// if let Some(date) = CalendarDate::new(2025, 6, 12) {
///     state.with_mut(|s| {
///         assert!(s.select(date));
///     });
/// }
/// # }
/// # component();
/// ```
#[tessera]
pub fn calendar_with_state(args: impl Into<CalendarArgs>, state: State<CalendarState>) {
    let args: CalendarArgs = args.into();
    let snapshot = state.with(|s| s.snapshot());

    let modifier = args.modifier;
    let number_of_months = args.number_of_months.max(1);
    let caption_layout = args.caption_layout;
    let locale = args.locale;
    let formatters = args.formatters.clone();
    let show_weekday_labels = args.show_weekday_labels;
    let on_select = args.on_select.clone();

    column(ColumnArgs::default().modifier(modifier), move |scope| {
        if snapshot.year_view_open {
            let caption = (formatters.caption)(snapshot.displayed_month, &locale);
            scope.child(move || {
                year_selection_view(snapshot, caption, formatters, state);
            });
        } else {
            scope.child(move || {
                month_panels(
                    snapshot,
                    number_of_months,
                    caption_layout,
                    locale,
                    formatters,
                    show_weekday_labels,
                    on_select,
                    state,
                );
            });
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn month_panels(
    snapshot: CalendarSnapshot,
    number_of_months: usize,
    caption_layout: CaptionLayout,
    locale: CalendarLocale,
    formatters: CalendarFormatters,
    show_weekday_labels: bool,
    on_select: Option<SelectionCallback>,
    state: State<CalendarState>,
) {
    flow_row(
        FlowRowArgs::default()
            .item_spacing(PANEL_SPACING)
            .line_spacing(PANEL_SPACING),
        move |scope| {
            for index in 0..number_of_months {
                let month = snapshot.displayed_month.add_months(index as i32);
                let is_first = index == 0;
                let is_last = index + 1 == number_of_months;
                let snapshot = snapshot.clone();
                let formatters = formatters.clone();
                let on_select = on_select.clone();
                scope.child(move || {
                    month_panel(
                        snapshot,
                        month,
                        is_first,
                        is_last,
                        caption_layout,
                        locale,
                        formatters,
                        show_weekday_labels,
                        on_select,
                        state,
                    );
                });
            }
        },
    );
}

#[allow(clippy::too_many_arguments)]
fn month_panel(
    snapshot: CalendarSnapshot,
    month: YearMonth,
    is_first: bool,
    is_last: bool,
    caption_layout: CaptionLayout,
    locale: CalendarLocale,
    formatters: CalendarFormatters,
    show_weekday_labels: bool,
    on_select: Option<SelectionCallback>,
    state: State<CalendarState>,
) {
    let caption = (formatters.caption)(month, &locale);
    let caption_is_toggle = is_first && caption_layout == CaptionLayout::Dropdown;

    column(ColumnArgs::default(), move |scope| {
        let caption_snapshot = snapshot.clone();
        scope.child(move || {
            panel_caption(
                caption_snapshot,
                caption,
                is_first,
                is_last,
                caption_is_toggle,
                state,
            );
        });

        if show_weekday_labels {
            scope.child(move || {
                weekday_labels_row(locale);
            });
        }

        scope.child(move || {
            date_grid(snapshot, month, locale, on_select, state);
        });
    });
}

fn panel_caption(
    snapshot: CalendarSnapshot,
    caption: String,
    is_first: bool,
    is_last: bool,
    caption_is_toggle: bool,
    state: State<CalendarState>,
) {
    let can_prev = is_first && can_navigate_prev(snapshot.displayed_month, &snapshot.year_range);
    let can_next = is_last && can_navigate_next(snapshot.displayed_month, &snapshot.year_range);

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width().padding_all(CAPTION_PADDING))
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(move || {
                if is_first {
                    nav_button("<", can_prev, move || {
                        state.with_mut(|s| s.previous_month());
                    });
                } else {
                    spacer(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE));
                }
            });

            scope.child(move || {
                if caption_is_toggle {
                    caption_dropdown_toggle(caption, false, state);
                } else {
                    caption_label(caption);
                }
            });

            scope.child(move || {
                if is_last {
                    nav_button(">", can_next, move || {
                        state.with_mut(|s| s.next_month());
                    });
                } else {
                    spacer(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE));
                }
            });
        },
    );
}

fn caption_label(caption: String) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    text(
        TextArgs::default()
            .text(caption)
            .size(theme.typography.title_medium.font_size)
            .color(theme.color_scheme.on_surface),
    );
}

fn caption_dropdown_toggle(caption: String, open: bool, state: State<CalendarState>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let indicator = if open { "▴" } else { "▾" };

    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().padding_all(Dp(4.0)))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_high,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .on_click(move || {
                state.with_mut(|s| s.toggle_year_view());
            }),
        move || {
            text(
                TextArgs::default()
                    .text(format!("{caption} {indicator}"))
                    .size(theme.typography.title_medium.font_size)
                    .color(scheme.on_surface),
            );
        },
    );
}

fn weekday_labels_row(locale: CalendarLocale) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let labels = weekday_sequence(locale.first_day_of_week);

    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(DATE_COLUMNS)
            .item_spacing(DATE_GRID_SPACING),
        move |scope| {
            for weekday in labels {
                let label = locale.weekday_label(weekday);
                let typography = theme.typography.clone();
                scope.child(move || {
                    surface(
                        SurfaceArgs::default()
                            .modifier(Modifier::new().size(DATE_CELL_SIZE, DATE_CELL_SIZE))
                            .style(Color::TRANSPARENT.into())
                            .content_alignment(Alignment::Center),
                        move || {
                            text(
                                TextArgs::default()
                                    .text(label)
                                    .size(typography.label_small.font_size)
                                    .color(scheme.on_surface_variant),
                            );
                        },
                    );
                });
            }
        },
    );
}

fn date_grid(
    snapshot: CalendarSnapshot,
    month: YearMonth,
    locale: CalendarLocale,
    on_select: Option<SelectionCallback>,
    state: State<CalendarState>,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let today = CalendarDate::today();
    let grid = build_month_grid(month, locale.first_day_of_week);

    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(DATE_COLUMNS)
            .max_lines(DATE_ROWS)
            .item_spacing(DATE_GRID_SPACING)
            .line_spacing(DATE_GRID_SPACING),
        move |scope| {
            for cell in grid {
                let snapshot = snapshot.clone();
                let on_select = on_select.clone();
                let typography = theme.typography.clone();
                scope.child(move || {
                    if let Some(date) = cell {
                        let (is_endpoint, is_inside) = selection_placement(snapshot.selection, date);
                        let is_today = date == today;
                        let is_enabled = snapshot.year_range.contains(&date.year());

                        let text_color = if is_endpoint {
                            scheme.on_primary
                        } else if is_inside {
                            scheme.on_secondary_container
                        } else if is_enabled {
                            scheme.on_surface
                        } else {
                            scheme
                                .on_surface_variant
                                .with_alpha(MaterialAlpha::DISABLED_CONTENT)
                        };
                        let style = if is_endpoint {
                            SurfaceStyle::Filled {
                                color: scheme.primary,
                            }
                        } else if is_inside {
                            SurfaceStyle::Filled {
                                color: scheme.secondary_container,
                            }
                        } else if is_today {
                            SurfaceStyle::Outlined {
                                color: scheme.primary,
                                width: Dp(1.0),
                            }
                        } else {
                            SurfaceStyle::Filled {
                                color: Color::TRANSPARENT,
                            }
                        };

                        let on_click = if is_enabled {
                            Some(Arc::new(move || {
                                let changed = state.with_mut(|s| s.select(date));
                                if changed && let Some(on_select) = &on_select {
                                    on_select(state.with(|s| s.selection()));
                                }
                            }) as Arc<dyn Fn() + Send + Sync>)
                        } else {
                            None
                        };

                        let mut surface_args = SurfaceArgs::default()
                            .modifier(Modifier::new().size(DATE_CELL_SIZE, DATE_CELL_SIZE))
                            .style(style)
                            .shape(Shape::rounded_rectangle(DATE_CELL_RADIUS))
                            .content_alignment(Alignment::Center)
                            .enabled(is_enabled);
                        if let Some(on_click) = on_click {
                            surface_args = surface_args.on_click_shared(on_click);
                        }
                        surface(surface_args, move || {
                            text(
                                TextArgs::default()
                                    .text(format!("{}", date.day()))
                                    .size(typography.body_medium.font_size)
                                    .color(text_color),
                            );
                        });
                    } else {
                        spacer(Modifier::new().size(DATE_CELL_SIZE, DATE_CELL_SIZE));
                    }
                });
            }
        },
    );
}

fn year_selection_view(
    snapshot: CalendarSnapshot,
    caption: String,
    formatters: CalendarFormatters,
    state: State<CalendarState>,
) {
    let options = year_options(snapshot.year_range.clone(), |year| {
        (formatters.year_label)(year)
    });
    let displayed_year = snapshot.displayed_month.year();

    column(ColumnArgs::default(), move |scope| {
        scope.child(move || {
            row(
                RowArgs::default()
                    .modifier(Modifier::new().fill_max_width().padding_all(CAPTION_PADDING))
                    .main_axis_alignment(MainAxisAlignment::Center)
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                move |row_scope| {
                    row_scope.child(move || {
                        caption_dropdown_toggle(caption, true, state);
                    });
                },
            );
        });

        scope.child(|| spacer(Modifier::new().height(DATE_GRID_SPACING)));

        scope.child(move || {
            scrollable(
                ScrollableArgs::default()
                    .modifier(Modifier::new().fill_max_width().height(YEAR_VIEW_HEIGHT)),
                move || {
                    flow_row(
                        FlowRowArgs::default()
                            .max_items_per_line(YEAR_COLUMNS)
                            .item_spacing(DATE_GRID_SPACING)
                            .line_spacing(DATE_GRID_SPACING),
                        move |flow_scope| {
                            for option in options {
                                let is_displayed = option.value == displayed_year;
                                flow_scope.child(move || {
                                    year_option_cell(option, is_displayed, state);
                                });
                            }
                        },
                    );
                },
            );
        });
    });
}

fn year_option_cell(option: YearOption, is_displayed: bool, state: State<CalendarState>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let (style, text_color) = if is_displayed {
        (
            SurfaceStyle::Filled {
                color: scheme.primary,
            },
            scheme.on_primary,
        )
    } else {
        (
            SurfaceStyle::Filled {
                color: Color::TRANSPARENT,
            },
            scheme.on_surface,
        )
    };
    let value = option.value;

    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(YEAR_CELL_WIDTH, YEAR_CELL_HEIGHT))
            .style(style)
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .on_click(move || {
                state.with_mut(|s| {
                    s.set_displayed_year(value);
                    s.close_year_view();
                });
            }),
        move || {
            text(
                TextArgs::default()
                    .text(option.label)
                    .size(theme.typography.body_medium.font_size)
                    .color(text_color),
            );
        },
    );
}

fn nav_button(label: &'static str, enabled: bool, on_click: impl Fn() + Send + Sync + 'static) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let text_color = if enabled {
        scheme.on_surface
    } else {
        scheme
            .on_surface_variant
            .with_alpha(MaterialAlpha::DISABLED_CONTENT)
    };
    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .enabled(enabled)
            .on_click(move || {
                if enabled {
                    on_click();
                }
            }),
        move || {
            text(
                TextArgs::default()
                    .text(label)
                    .size(theme.typography.body_medium.font_size)
                    .color(text_color),
            );
        },
    );
}

fn selection_placement(selection: CalendarSelection, date: CalendarDate) -> (bool, bool) {
    match selection {
        CalendarSelection::None => (false, false),
        CalendarSelection::Single(selected) => (selected == date, false),
        CalendarSelection::Range(range) => {
            let is_endpoint = range.start() == date || range.end() == Some(date);
            let is_inside = !is_endpoint && range.contains(date);
            (is_endpoint, is_inside)
        }
    }
}

fn coerce_selection(
    selection: CalendarSelection,
    mode: SelectionMode,
    year_range: &RangeInclusive<i32>,
) -> CalendarSelection {
    let selection = match (mode, selection) {
        (SelectionMode::Single, CalendarSelection::Range(range)) => {
            warn!("range selection supplied to a single-selection calendar; keeping its start");
            CalendarSelection::Single(range.start())
        }
        (SelectionMode::Range, CalendarSelection::Single(date)) => {
            warn!("single date supplied to a range calendar; treating it as a range start");
            CalendarSelection::Range(DateRange::starting_at(date))
        }
        (_, selection) => selection,
    };

    let in_bounds = |date: CalendarDate| year_range.contains(&date.year());
    match selection {
        CalendarSelection::Single(date) if !in_bounds(date) => CalendarSelection::None,
        CalendarSelection::Range(range)
            if !in_bounds(range.start()) || range.end().is_some_and(|end| !in_bounds(end)) =>
        {
            CalendarSelection::None
        }
        other => other,
    }
}

fn weekday_sequence(first_day_of_week: Weekday) -> [Weekday; DATE_COLUMNS] {
    let mut days = [Weekday::Monday; DATE_COLUMNS];
    let start = first_day_of_week.index_from_monday();
    for (idx, slot) in days.iter_mut().enumerate() {
        *slot = Weekday::from_monday_index(start + idx as i32);
    }
    days
}

fn build_month_grid(month: YearMonth, first_day_of_week: Weekday) -> Vec<Option<CalendarDate>> {
    let mut cells = vec![None; DATE_COLUMNS * DATE_ROWS];
    let first_date = month
        .to_date(1)
        .unwrap_or_else(|| CalendarDate::new_unchecked(month.year(), month.month(), 1));
    let offset = (first_date.weekday().index_from_monday()
        - first_day_of_week.index_from_monday())
    .rem_euclid(7) as usize;
    let max_day = days_in_month(month.year(), month.month());
    for day in 1..=max_day {
        let index = offset + day as usize - 1;
        if index < cells.len() {
            cells[index] = CalendarDate::new(month.year(), month.month(), day);
        }
    }
    cells
}

fn normalize_year_range(range: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let start = *range.start();
    let end = *range.end();
    if start <= end { range } else { end..=start }
}

fn fallback_displayed_month(year_range: &RangeInclusive<i32>) -> YearMonth {
    let today = CalendarDate::today();
    if year_range.contains(&today.year()) {
        YearMonth::from_date(today)
    } else {
        YearMonth::new_unchecked(*year_range.start(), 1)
    }
}

fn clamp_month_to_range(month: YearMonth, year_range: &RangeInclusive<i32>) -> YearMonth {
    let start = *year_range.start();
    let end = *year_range.end();
    if month.year() < start {
        YearMonth::new_unchecked(start, 1)
    } else if month.year() > end {
        YearMonth::new_unchecked(end, 12)
    } else {
        month
    }
}

fn can_navigate_prev(month: YearMonth, year_range: &RangeInclusive<i32>) -> bool {
    let start = *year_range.start();
    month.year() > start || (month.year() == start && month.month() > 1)
}

fn can_navigate_next(month: YearMonth, year_range: &RangeInclusive<i32>) -> bool {
    let end = *year_range.end();
    month.year() < end || (month.year() == end && month.month() < 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    fn month(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).expect("valid test month")
    }

    #[test]
    fn year_options_cover_the_inclusive_range() {
        let options = year_options(2400..=2600, |year| year.to_string());
        assert_eq!(options.len(), 201);
        assert_eq!(options[0].label, "2400");
        assert_eq!(options[0].value, 2400);
        assert_eq!(options[200].label, "2600");
        assert_eq!(options[200].value, 2600);
    }

    #[test]
    fn year_options_normalize_inverted_bounds() {
        let options = year_options(2600..=2400, |year| year.to_string());
        assert_eq!(options.len(), 201);
        assert_eq!(options[0].value, 2400);
        assert_eq!(options[200].value, 2600);
    }

    #[test]
    fn year_option_labels_follow_the_formatter() {
        let options = year_options(2024..=2026, |year| format!("y{year}"));
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["y2024", "y2025", "y2026"]);
        assert_eq!(options[1].value, 2025);
    }

    #[test]
    fn state_defaults_to_the_current_month() {
        let state = CalendarState::default();
        let today = CalendarDate::today();
        assert_eq!(state.selection(), CalendarSelection::None);
        assert_eq!(state.displayed_month(), YearMonth::from_date(today));
    }

    #[test]
    fn state_prefers_the_selection_month_for_display() {
        let state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::Single(date(1990, 6, 15)),
            None,
            1900..=2100,
        );
        assert_eq!(state.displayed_month(), month(1990, 6));
    }

    #[test]
    fn explicit_initial_month_wins_over_the_selection() {
        let state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::Single(date(1990, 6, 15)),
            Some(month(2024, 1)),
            1900..=2100,
        );
        assert_eq!(state.displayed_month(), month(2024, 1));
    }

    #[test]
    fn out_of_range_initial_selection_is_dropped() {
        let state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::Single(date(1990, 6, 15)),
            None,
            2000..=2010,
        );
        assert_eq!(state.selection(), CalendarSelection::None);
    }

    #[test]
    fn inverted_year_bounds_are_swapped() {
        let state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            Some(month(2000, 5)),
            2100..=1900,
        );
        assert_eq!(state.year_range(), &(1900..=2100));
        assert_eq!(state.displayed_month(), month(2000, 5));
    }

    #[test]
    fn mismatched_selection_shapes_are_coerced() {
        let range = DateRange::new(date(2025, 6, 12), Some(date(2025, 7, 15)));
        let single = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::Range(range),
            None,
            1900..=2100,
        );
        assert_eq!(
            single.selection(),
            CalendarSelection::Single(date(2025, 6, 12))
        );

        let ranged = CalendarState::new(
            SelectionMode::Range,
            CalendarSelection::Single(date(2025, 6, 12)),
            None,
            1900..=2100,
        );
        assert_eq!(
            ranged.selection(),
            CalendarSelection::Range(DateRange::starting_at(date(2025, 6, 12)))
        );
    }

    #[test]
    fn single_selection_replaces_the_previous_date() {
        let mut state = CalendarState::default();
        assert!(state.select(date(2025, 6, 12)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Single(date(2025, 6, 12))
        );

        assert!(state.select(date(2025, 6, 20)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Single(date(2025, 6, 20))
        );
    }

    #[test]
    fn reselecting_the_same_date_reports_no_change() {
        let mut state = CalendarState::default();
        assert!(state.select(date(2025, 6, 12)));
        assert!(!state.select(date(2025, 6, 12)));
    }

    #[test]
    fn selection_outside_the_year_bounds_is_rejected() {
        let mut state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            Some(month(2005, 1)),
            2000..=2010,
        );
        assert!(!state.select(date(1999, 12, 31)));
        assert_eq!(state.selection(), CalendarSelection::None);
    }

    #[test]
    fn range_builds_from_two_clicks() {
        let mut state = CalendarState::new(
            SelectionMode::Range,
            CalendarSelection::None,
            None,
            1900..=2100,
        );
        assert!(state.select(date(2025, 6, 12)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Range(DateRange::starting_at(date(2025, 6, 12)))
        );

        assert!(state.select(date(2025, 7, 15)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Range(DateRange::new(
                date(2025, 6, 12),
                Some(date(2025, 7, 15))
            ))
        );
    }

    #[test]
    fn earlier_click_restarts_an_open_range() {
        let mut state = CalendarState::new(
            SelectionMode::Range,
            CalendarSelection::None,
            None,
            1900..=2100,
        );
        assert!(state.select(date(2025, 6, 12)));
        assert!(state.select(date(2025, 6, 1)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Range(DateRange::starting_at(date(2025, 6, 1)))
        );
    }

    #[test]
    fn click_after_a_complete_range_starts_over() {
        let mut state = CalendarState::new(
            SelectionMode::Range,
            CalendarSelection::None,
            None,
            1900..=2100,
        );
        assert!(state.select(date(2025, 6, 12)));
        assert!(state.select(date(2025, 7, 15)));
        assert!(state.select(date(2025, 8, 1)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Range(DateRange::starting_at(date(2025, 8, 1)))
        );
    }

    #[test]
    fn a_range_can_cover_a_single_day() {
        let mut state = CalendarState::new(
            SelectionMode::Range,
            CalendarSelection::None,
            None,
            1900..=2100,
        );
        assert!(state.select(date(2025, 6, 12)));
        assert!(state.select(date(2025, 6, 12)));
        assert_eq!(
            state.selection(),
            CalendarSelection::Range(DateRange::new(
                date(2025, 6, 12),
                Some(date(2025, 6, 12))
            ))
        );
    }

    #[test]
    fn navigation_is_clamped_at_the_bounds() {
        let mut state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            Some(month(1900, 1)),
            1900..=2100,
        );
        state.previous_month();
        assert_eq!(state.displayed_month(), month(1900, 1));

        state.set_displayed_month(month(2100, 12));
        state.next_month();
        assert_eq!(state.displayed_month(), month(2100, 12));
    }

    #[test]
    fn displayed_month_is_clamped_into_the_bounds() {
        let mut state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            Some(month(2005, 6)),
            2000..=2010,
        );
        state.set_displayed_month(month(1980, 7));
        assert_eq!(state.displayed_month(), month(2000, 1));

        state.set_displayed_month(month(2050, 7));
        assert_eq!(state.displayed_month(), month(2010, 12));
    }

    #[test]
    fn set_displayed_year_keeps_the_month_number() {
        let mut state = CalendarState::new(
            SelectionMode::Single,
            CalendarSelection::None,
            Some(month(2025, 6)),
            2400..=2600,
        );
        assert_eq!(state.displayed_month(), month(2400, 1));

        state.set_displayed_month(month(2450, 6));
        state.set_displayed_year(2500);
        assert_eq!(state.displayed_month(), month(2500, 6));

        state.set_displayed_year(1000);
        assert_eq!(state.displayed_month(), month(2500, 6));
    }

    #[test]
    fn year_view_toggles_and_closes() {
        let mut state = CalendarState::default();
        assert!(!state.is_year_view_open());
        state.toggle_year_view();
        assert!(state.is_year_view_open());
        state.close_year_view();
        assert!(!state.is_year_view_open());
    }

    #[test]
    fn month_grid_places_the_first_day_by_week_start() {
        let grid = build_month_grid(month(2025, 6), Weekday::Monday);
        // June 1, 2025 is a Sunday; Monday-first leaves six leading blanks.
        assert_eq!(grid.len(), 42);
        assert!(grid[..6].iter().all(Option::is_none));
        assert_eq!(grid[6], Some(date(2025, 6, 1)));
        assert_eq!(grid[35], Some(date(2025, 6, 30)));

        let sunday_first = build_month_grid(month(2025, 6), Weekday::Sunday);
        assert_eq!(sunday_first[0], Some(date(2025, 6, 1)));
        assert_eq!(sunday_first[29], Some(date(2025, 6, 30)));
    }

    #[test]
    fn weekday_sequence_starts_at_the_configured_day() {
        let from_sunday = weekday_sequence(Weekday::Sunday);
        assert_eq!(from_sunday[0], Weekday::Sunday);
        assert_eq!(from_sunday[1], Weekday::Monday);
        assert_eq!(from_sunday[6], Weekday::Saturday);
    }

    #[test]
    fn selection_placement_classifies_range_cells() {
        let range = DateRange::new(date(2025, 6, 12), Some(date(2025, 6, 20)));
        let selection = CalendarSelection::Range(range);
        assert_eq!(selection_placement(selection, date(2025, 6, 12)), (true, false));
        assert_eq!(selection_placement(selection, date(2025, 6, 20)), (true, false));
        assert_eq!(selection_placement(selection, date(2025, 6, 15)), (false, true));
        assert_eq!(selection_placement(selection, date(2025, 6, 21)), (false, false));
    }
}
