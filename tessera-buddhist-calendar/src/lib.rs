//! Buddhist Era calendar components for the Tessera UI framework.
//!
//! The Buddhist Era (BE) runs a fixed 543 years ahead of the Gregorian
//! calendar, with no month or day changes. These components keep every
//! stored and reported date Gregorian and change only what is rendered:
//! month captions and year options read in BE, while selection state,
//! callbacks, and year option values stay raw Gregorian dates.
//!
//! # Usage
//!
//! Register the `tessera-ui-basic-components` pipelines as usual and provide
//! a `MaterialTheme`, then place a calendar:
//!
//! ```
//! # use tessera_ui::{provide_context, tessera};
//! # use tessera_ui_basic_components::theme::MaterialTheme;
//! use tessera_buddhist_calendar::buddhist::buddhist_calendar;
//! use tessera_buddhist_calendar::calendar::{CalendarArgs, CaptionLayout};
//!
//! # #[tessera]
//! # fn component() {
//! # provide_context(MaterialTheme::default(), || {
//! buddhist_calendar(
//!     CalendarArgs::default()
//!         .caption_layout(CaptionLayout::Dropdown)
//!         .year_range(2400..=2600),
//! );
//! # });
//! # }
//! # component();
//! ```
//!
//! The year conversion itself is a plain offset and stays available outside
//! any component tree:
//!
//! ```
//! use tessera_buddhist_calendar::buddhist::buddhist_year_options;
//! use tessera_buddhist_calendar::date::CalendarDate;
//! use tessera_buddhist_calendar::era::{to_buddhist_year, to_gregorian_year};
//!
//! let date = CalendarDate::new(2025, 6, 12).expect("valid date");
//! assert_eq!(to_buddhist_year(date), 2568);
//! assert_eq!(to_gregorian_year(2568), 2025);
//!
//! let options = buddhist_year_options(2400..=2600);
//! assert_eq!(options.len(), 201);
//! assert_eq!(options[0].label, "2943");
//! assert_eq!(options[0].value, 2400);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod buddhist;
pub mod calendar;
pub mod date;
pub mod era;
pub mod locale;
