//! Home screen and shared scaffolding for the demo pages.
use tessera_ui::{
    Dp, Modifier, provide_context,
    router::{Router, router_root},
    shard, tessera, use_context,
};
use tessera_ui_basic_components::{
    alignment::CrossAxisAlignment,
    button::{ButtonArgs, button},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    scrollable::{ScrollableArgs, scrollable},
    shape_def::Shape,
    spacer::spacer,
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

use tessera_buddhist_calendar::{
    date::CalendarDate, era::to_buddhist_year, locale::CalendarLocale,
};

use crate::{
    date_of_birth::DateOfBirthScreenDestination,
    range_selection::RangeSelectionScreenDestination,
    single_selection::SingleSelectionScreenDestination,
    thai_locale::ThaiLocaleScreenDestination,
};

#[tessera]
pub fn root() {
    provide_context(MaterialTheme::default(), || {
        router_root(HomeScreenDestination {});
    });
}

#[shard]
pub fn home_screen() {
    surface(
        SurfaceArgs::default().modifier(Modifier::new().fill_max_size()),
        move || {
            scrollable(
                ScrollableArgs::default().modifier(Modifier::new().fill_max_size()),
                move || {
                    column(
                        ColumnArgs::default()
                            .modifier(Modifier::new().fill_max_width().padding_all(Dp(24.0)))
                            .cross_axis_alignment(CrossAxisAlignment::Start),
                        move |scope| {
                            scope.child(|| {
                                let theme = use_context::<MaterialTheme>()
                                    .expect("MaterialTheme must be provided")
                                    .get();
                                text(
                                    TextArgs::default()
                                        .text("Buddhist Era Calendar")
                                        .size(theme.typography.headline_small.font_size)
                                        .color(theme.color_scheme.on_surface),
                                );
                            });
                            scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
                            scope.child(|| {
                                secondary_text(
                                    "Every calendar below labels years in the Buddhist Era \
                                     while selected dates stay Gregorian.",
                                );
                            });
                            scope.child(|| spacer(Modifier::new().height(Dp(16.0))));

                            scope.child(|| {
                                demo_link("Single selection", || {
                                    Router::with_mut(|router| {
                                        router.push(SingleSelectionScreenDestination {});
                                    });
                                });
                            });
                            scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
                            scope.child(|| {
                                demo_link("Range selection", || {
                                    Router::with_mut(|router| {
                                        router.push(RangeSelectionScreenDestination {});
                                    });
                                });
                            });
                            scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
                            scope.child(|| {
                                demo_link("Date of birth dialog", || {
                                    Router::with_mut(|router| {
                                        router.push(DateOfBirthScreenDestination {});
                                    });
                                });
                            });
                            scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
                            scope.child(|| {
                                demo_link("Thai locale", || {
                                    Router::with_mut(|router| {
                                        router.push(ThaiLocaleScreenDestination {});
                                    });
                                });
                            });

                            scope.child(|| spacer(Modifier::new().height(Dp(24.0))));
                            scope.child(|| {
                                let theme = use_context::<MaterialTheme>()
                                    .expect("MaterialTheme must be provided")
                                    .get();
                                text(
                                    TextArgs::default()
                                        .text("Year reference")
                                        .size(theme.typography.title_small.font_size)
                                        .color(theme.color_scheme.on_surface),
                                );
                            });
                            scope.child(|| spacer(Modifier::new().height(Dp(8.0))));
                            scope.child(year_reference_card);
                        },
                    );
                },
            );
        },
    );
}

fn demo_link(label: &'static str, on_click: impl Fn() + Send + Sync + 'static) {
    button(ButtonArgs::filled(on_click), move || text(label));
}

fn year_reference_card() {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let body_size = theme.typography.body_medium.font_size;

    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().fill_max_width().padding_all(Dp(16.0)))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::rounded_rectangle(Dp(12.0))),
        move || {
            column(
                ColumnArgs::default().modifier(Modifier::new().fill_max_width()),
                move |scope| {
                    for (index, year) in [2025, 2024, 2000, 1957, 1900].into_iter().enumerate() {
                        if index > 0 {
                            scope.child(|| spacer(Modifier::new().height(Dp(4.0))));
                        }
                        scope.child(move || {
                            let date = CalendarDate::new(year, 1, 1).expect("valid demo date");
                            row(
                                RowArgs::default().modifier(Modifier::new().fill_max_width()),
                                move |row_scope| {
                                    row_scope.child(move || {
                                        text(
                                            TextArgs::default()
                                                .text(format!("CE {year}"))
                                                .size(body_size)
                                                .color(scheme.on_surface_variant),
                                        );
                                    });
                                    row_scope.child(|| spacer(Modifier::new().width(Dp(16.0))));
                                    row_scope.child(move || {
                                        text(
                                            TextArgs::default()
                                                .text(format!("BE {}", to_buddhist_year(date)))
                                                .size(body_size)
                                                .color(scheme.on_surface),
                                        );
                                    });
                                },
                            );
                        });
                    }
                },
            );
        },
    );
}

/// Shared page chrome: back control, headline, and a scrollable content area.
#[tessera]
pub(crate) fn demo_page(title: &'static str, content: impl FnOnce() + Send + Sync + 'static) {
    surface(
        SurfaceArgs::default().modifier(Modifier::new().fill_max_size()),
        move || {
            scrollable(
                ScrollableArgs::default().modifier(Modifier::new().fill_max_size()),
                move || {
                    column(
                        ColumnArgs::default()
                            .modifier(Modifier::new().fill_max_width().padding_all(Dp(24.0)))
                            .cross_axis_alignment(CrossAxisAlignment::Start),
                        move |scope| {
                            scope.child(move || page_header(title));
                            scope.child(|| spacer(Modifier::new().height(Dp(16.0))));
                            scope.child(content);
                        },
                    );
                },
            );
        },
    );
}

fn page_header(title: &'static str) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let title_size = theme.typography.headline_small.font_size;
    let title_color = theme.color_scheme.on_surface;

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(|| {
                button(
                    ButtonArgs::text(|| {
                        Router::with_mut(|router| {
                            router.pop();
                        });
                    }),
                    || text("Back"),
                );
            });
            scope.child(|| spacer(Modifier::new().width(Dp(12.0))));
            scope.child(move || {
                text(
                    TextArgs::default()
                        .text(title)
                        .size(title_size)
                        .color(title_color),
                );
            });
        },
    );
}

/// Body copy rendered in the secondary content color.
pub(crate) fn secondary_text(content: impl Into<String>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    text(
        TextArgs::default()
            .text(content.into())
            .size(theme.typography.body_medium.font_size)
            .color(theme.color_scheme.on_surface_variant),
    );
}

/// Readout line rendered in the primary content color.
pub(crate) fn value_text(content: impl Into<String>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    text(
        TextArgs::default()
            .text(content.into())
            .size(theme.typography.body_large.font_size)
            .color(theme.color_scheme.on_surface),
    );
}

/// Thai long date for readouts, e.g. "12 มิถุนายน 2568".
pub(crate) fn thai_long_date(date: CalendarDate) -> String {
    let locale = CalendarLocale::thai();
    format!(
        "{} {} {}",
        date.day(),
        locale.month_name(date.month()),
        to_buddhist_year(date)
    )
}
