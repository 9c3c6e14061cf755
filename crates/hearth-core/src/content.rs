//! Static content catalog for the home-screen widgets
//!
//! All display content is hard-coded. The catalog is built once at startup;
//! the only variation run to run is the randomized temperatures.

use crate::num::rand_range;

/// Weather condition for a forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl WeatherKind {
    /// Display label, e.g. for card subtitles.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Sunny => "Sunny",
            WeatherKind::Cloudy => "Cloudy",
            WeatherKind::Rainy => "Rainy",
            WeatherKind::Stormy => "Stormy",
        }
    }
}

/// One day in the weather forecast row.
#[derive(Debug, Clone)]
pub struct ForecastDay {
    pub id: u32,
    pub name: &'static str,
    /// Degrees Fahrenheit, randomized at startup.
    pub temperature: i32,
    pub weather: WeatherKind,
}

/// Category of a tool card, used to pick its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Weather,
    Calculator,
    Bank,
    Travel,
    Games,
    VideoChat,
}

/// An app shortcut card in the tools section.
#[derive(Debug, Clone)]
pub struct Tool {
    pub id: u32,
    pub label: &'static str,
    pub name: &'static str,
    pub kind: ToolKind,
}

/// A delivery option card in the restaurants section.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: u32,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A movie card in the movies section.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: u32,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A quick-navigation pill below the header.
#[derive(Debug, Clone)]
pub struct QuickNavItem {
    pub id: u32,
    pub label: &'static str,
}

/// The header reminder line.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub text: &'static str,
    pub time: &'static str,
}

/// The complete widget content set.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Lock-screen temperature snapshot, degrees Fahrenheit.
    pub snapshot_temperature: i32,
    pub forecast: Vec<ForecastDay>,
    pub tools: Vec<Tool>,
    pub restaurants: Vec<Restaurant>,
    pub movies: Vec<Movie>,
    pub quick_nav: Vec<QuickNavItem>,
    pub reminder: Reminder,
}

impl Catalog {
    /// Build the catalog, rolling the randomized temperatures.
    pub fn generate() -> Self {
        Self {
            snapshot_temperature: rand_range(65, 85),
            forecast: forecast_days(),
            tools: tools(),
            restaurants: restaurants(),
            movies: movies(),
            quick_nav: quick_nav(),
            reminder: Reminder {
                text: "Extra cool people meeting",
                time: "10AM",
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generate()
    }
}

fn forecast_days() -> Vec<ForecastDay> {
    let week = [
        ("Mon", WeatherKind::Sunny),
        ("Tues", WeatherKind::Sunny),
        ("Wed", WeatherKind::Cloudy),
        ("Thurs", WeatherKind::Rainy),
        ("Fri", WeatherKind::Stormy),
        ("Sat", WeatherKind::Sunny),
        ("Sun", WeatherKind::Cloudy),
    ];

    week.into_iter()
        .enumerate()
        .map(|(i, (name, weather))| ForecastDay {
            id: i as u32 + 1,
            name,
            temperature: rand_range(60, 80),
            weather,
        })
        .collect()
}

fn tools() -> Vec<Tool> {
    vec![
        Tool {
            id: 1,
            label: "Weather",
            name: "Cloudly",
            kind: ToolKind::Weather,
        },
        Tool {
            id: 2,
            label: "Calc",
            name: "Mathio",
            kind: ToolKind::Calculator,
        },
        Tool {
            id: 3,
            label: "Bank",
            name: "Cashy",
            kind: ToolKind::Bank,
        },
        Tool {
            id: 4,
            label: "Travel",
            name: "Fly-er-io-ly",
            kind: ToolKind::Travel,
        },
        Tool {
            id: 5,
            label: "Games",
            name: "Gamey",
            kind: ToolKind::Games,
        },
        Tool {
            id: 6,
            label: "Video Chat",
            name: "Chatty",
            kind: ToolKind::VideoChat,
        },
    ]
}

fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            title: "Burgers",
            desc: "The best burgers in town",
        },
        Restaurant {
            id: 2,
            title: "Ice Cream",
            desc: "The worst ice-cream around",
        },
        Restaurant {
            id: 3,
            title: "Pizza",
            desc: "This 'Za be gettin down",
        },
        Restaurant {
            id: 4,
            title: "BBQ",
            desc: "BBQ ain't need no rhyme",
        },
    ]
}

fn movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Protectors of the Milky Way",
            desc: "A tale of some people watching over a large portion of space.",
        },
        Movie {
            id: 2,
            title: "Hole People",
            desc: "Some people leave their holes to disrupt some things.",
        },
        Movie {
            id: 3,
            title: "Pot of Hair",
            desc: "A boy with a dent in his head tries to stop a bad guy. And by bad I mean bad at winning.",
        },
        Movie {
            id: 4,
            title: "Area Fights",
            desc: "A long drawn out story of some people fighting over some space. Cuz there isn't enough of it.",
        },
    ]
}

fn quick_nav() -> Vec<QuickNavItem> {
    vec![
        QuickNavItem {
            id: 1,
            label: "Weather",
        },
        QuickNavItem { id: 2, label: "Food" },
        QuickNavItem { id: 3, label: "Apps" },
        QuickNavItem {
            id: 4,
            label: "Movies",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.forecast.len(), 7);
        assert_eq!(catalog.tools.len(), 6);
        assert_eq!(catalog.restaurants.len(), 4);
        assert_eq!(catalog.movies.len(), 4);
        assert_eq!(catalog.quick_nav.len(), 4);
    }

    #[test]
    fn test_forecast_temperatures_in_range() {
        for _ in 0..20 {
            let catalog = Catalog::generate();
            for day in &catalog.forecast {
                assert!(
                    (60..=80).contains(&day.temperature),
                    "{} out of range: {}",
                    day.name,
                    day.temperature
                );
            }
            assert!((65..=85).contains(&catalog.snapshot_temperature));
        }
    }

    #[test]
    fn test_forecast_ids_sequential() {
        let catalog = Catalog::generate();
        let ids: Vec<u32> = catalog.forecast.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_forecast_week_starts_monday() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.forecast[0].name, "Mon");
        assert_eq!(catalog.forecast[6].name, "Sun");
    }

    #[test]
    fn test_weather_kind_labels() {
        assert_eq!(WeatherKind::Sunny.label(), "Sunny");
        assert_eq!(WeatherKind::Stormy.label(), "Stormy");
    }

    #[test]
    fn test_reminder_content() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.reminder.time, "10AM");
        assert!(catalog.reminder.text.contains("meeting"));
    }
}
