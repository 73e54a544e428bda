//! Root Dioxus application component
//!
//! Holds the view state machine and the shared state handed to every component.

use crate::assistant::ChatSession;
use crate::planner::{PlanError, TripPreferences};
use crate::storage::settings::{load_settings, AppSettings};
use crate::ui::Layout;
use dioxus::prelude::*;

/// Which screen is showing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Hero,
    Preferences,
    Plan,
}

/// Navigation between the three screens plus the chat overlay flag
#[derive(Clone, PartialEq, Debug)]
pub struct TripFlow {
    view: View,
    preferences: Option<TripPreferences>,
    chat_visible: bool,
}

impl Default for TripFlow {
    fn default() -> Self {
        Self {
            view: View::Hero,
            preferences: None,
            chat_visible: false,
        }
    }
}

impl TripFlow {
    pub fn view(&self) -> View {
        self.view
    }

    /// Preferences behind the plan, once submitted
    pub fn preferences(&self) -> Option<&TripPreferences> {
        self.preferences.as_ref()
    }

    pub fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    /// Hero -> Preferences. Ignored on other screens.
    pub fn get_started(&mut self) {
        if self.view == View::Hero {
            self.view = View::Preferences;
            tracing::info!("View: preferences");
        }
    }

    /// Preferences -> Plan once the form validates
    pub fn submit_preferences(&mut self, prefs: TripPreferences) -> Result<(), PlanError> {
        if self.view != View::Preferences {
            tracing::debug!(view = ?self.view, "Preferences submitted outside the form, ignoring");
            return Ok(());
        }
        prefs.validate()?;
        tracing::info!(
            interests = prefs.interests.len(),
            days = prefs.duration_days,
            budget = prefs.budget_inr,
            "View: plan"
        );
        self.preferences = Some(prefs);
        self.view = View::Plan;
        Ok(())
    }

    pub fn show_chat(&mut self) {
        self.chat_visible = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_visible = false;
    }
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub chat: ChatSession,
    pub flow: Signal<TripFlow>,
    pub settings: Signal<AppSettings>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let chat = ChatSession::new(settings.chat_config());
        tracing::info!("AppState initialized");

        Self {
            chat,
            flow: Signal::new(TripFlow::default()),
            settings: Signal::new(settings),
        }
    }

    pub fn open_chat(&self) {
        let mut flow = self.flow;
        flow.write().show_chat();
        self.chat.open();
    }

    pub fn close_chat(&self) {
        let mut flow = self.flow;
        flow.write().close_chat();
        self.chat.close();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
