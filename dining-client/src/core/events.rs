//! Session events and observers
//!
//! Every state change the session makes is announced as a [`SessionEvent`].
//! Observers run synchronously, in subscription order, before the session
//! operation returns, and read whatever they need from the session itself.

use super::session::Session;
use crate::sources::{LOCATIONS_UNAVAILABLE, MENU_UNAVAILABLE};
use std::fmt;

/// Which data feed an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Menu,
    Locations,
}

impl Feed {
    /// Inline message shown in place of the feed's content area
    pub fn unavailable_message(self) -> &'static str {
        match self {
            Self::Menu => MENU_UNAVAILABLE,
            Self::Locations => LOCATIONS_UNAVAILABLE,
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Locations => write!(f, "locations"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Cart persisted with new contents
    CartChanged,
    /// Mode, phase or ticket changed
    CheckoutChanged,
    MenuLoaded { items: usize },
    /// Menu criteria changed (also sent right after loading)
    MenuFiltered { matches: usize },
    LocationsLoaded { locations: usize },
    /// Campus filter changed (also sent right after loading)
    LocationsFiltered { visible: usize },
    LocationFocused { location_id: String },
    ReviewPosted { location_id: String },
    LoadFailed { feed: Feed },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CartChanged => "cart_changed",
            Self::CheckoutChanged => "checkout_changed",
            Self::MenuLoaded { .. } => "menu_loaded",
            Self::MenuFiltered { .. } => "menu_filtered",
            Self::LocationsLoaded { .. } => "locations_loaded",
            Self::LocationsFiltered { .. } => "locations_filtered",
            Self::LocationFocused { .. } => "location_focused",
            Self::ReviewPosted { .. } => "review_posted",
            Self::LoadFailed { .. } => "load_failed",
        }
    }
}

/// A view that re-renders when the session changes
pub trait SessionObserver {
    fn on_event(&self, event: &SessionEvent, session: &Session);
}

/// Subscribed observers, notified in subscription order
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn SessionObserver>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn publish(&self, event: &SessionEvent, session: &Session) {
        tracing::trace!(event = event.name(), observers = self.observers.len(), "Publishing");
        for observer in &self.observers {
            observer.on_event(event, session);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}
