//! Widget library for the hearth display
//!
//! All widgets are stateless renderers: they receive the slice of
//! application state they display as explicit constructor arguments.

mod cards;
mod clock;
mod pin;
mod quick_nav;
mod reminder;
mod spinner;
mod weather;

pub use cards::{MovieRow, RestaurantRow, ToolRow};
pub use clock::Clock;
pub use pin::PinPad;
pub use quick_nav::QuickNav;
pub use reminder::ReminderLine;
pub use spinner::Spinner;
pub use weather::{ForecastRow, WeatherSnap};
