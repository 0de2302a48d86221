//! Screen navigation for the mobile-app demo.

use std::fmt;

pub const FALLBACK_TITLE: &str = "VPlanit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Events,
    Budget,
    WeddingEvents,
    EventDetail,
    Vendors,
    Guests,
    BudgetDetail,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Home,
        Screen::Events,
        Screen::Budget,
        Screen::WeddingEvents,
        Screen::EventDetail,
        Screen::Vendors,
        Screen::Guests,
        Screen::BudgetDetail,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Screen::Home => "home-screen",
            Screen::Events => "events-screen",
            Screen::Budget => "budget-screen",
            Screen::WeddingEvents => "wedding-events-screen",
            Screen::EventDetail => "event-detail-screen",
            Screen::Vendors => "vendors-screen",
            Screen::Guests => "guests-screen",
            Screen::BudgetDetail => "budget-detail-screen",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Events => "Add Events",
            Screen::Budget => "Budget & Guests",
            Screen::WeddingEvents => "Wedding Events",
            Screen::EventDetail => "Event Details",
            Screen::Vendors => "Add Vendors",
            Screen::Guests => "Guests",
            Screen::BudgetDetail => "Budget",
        }
    }

    pub fn from_id(id: &str) -> Option<Screen> {
        Screen::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Header title for a raw screen id.
pub fn title_for(id: &str) -> &'static str {
    Screen::from_id(id).map(Screen::title).unwrap_or(FALLBACK_TITLE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    current: Screen,
    history: Vec<Screen>,
}

impl AppState {
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }
}

/// Owns the app-demo state; starts on the home screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: AppState,
}

impl Navigator {
    pub fn new() -> Self {
        let mut navigator = Self {
            state: AppState {
                current: Screen::Home,
                history: Vec::new(),
            },
        };
        navigator.show(Screen::Home);
        navigator
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current(&self) -> Screen {
        self.state.current
    }

    pub fn header_title(&self) -> &'static str {
        self.state.current.title()
    }

    /// Shows the screen with this id. Unknown ids leave the state untouched.
    pub fn show_screen(&mut self, id: &str) -> bool {
        match Screen::from_id(id) {
            Some(screen) => {
                self.show(screen);
                true
            }
            None => {
                tracing::debug!("No screen with id '{}'", id);
                false
            }
        }
    }

    pub fn show(&mut self, screen: Screen) {
        self.state.current = screen;
        if self.state.history.last() != Some(&screen) {
            self.state.history.push(screen);
        }
    }

    pub fn go_back(&mut self) -> Screen {
        if self.state.history.len() > 1 {
            self.state.history.pop();
            if let Some(&previous) = self.state.history.last() {
                self.show(previous);
            }
        } else {
            self.show(Screen::Home);
        }
        self.state.current
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
