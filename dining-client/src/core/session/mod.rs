//! Session - the explicit application state
//!
//! One `Session` owns everything a running client knows: the cart, the
//! checkout state, the menu catalog and its filter, the location directory
//! and the review book. There are no globals; views read the session and
//! re-render when an event arrives.
//!
//! # Operation Flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Validate input (price, checkout preconditions)
//!     ├─ 2. Compute the next state (pure cart engine / filter)
//!     ├─ 3. Persist (cart, reviews); a failed write stops here
//!     ├─ 4. Swap the new state in
//!     ├─ 5. Publish event(s) to observers, synchronously
//!     └─ 6. Return
//! ```

#[cfg(test)]
mod tests;

use super::events::{EventBus, Feed, SessionEvent, SessionObserver};
use crate::cart::{self, Cart, money::validate_price};
use crate::checkout::{CheckoutFlow, CheckoutPhase, ClockTicketIssuer, PaymentDetails, TicketIssuer};
use crate::locations::{LocationDirectory, ReviewBook, ReviewDraft, ReviewError};
use crate::menu::{MenuCatalog, MenuFilter, Selection};
use crate::sources::{self, DataSource, SourceError};
use crate::storage::{BlobStore, MemoryStore};
use crate::utils::{AppError, AppResult};
use rust_decimal::Decimal;
use shared::models::{MenuItem, OrderMode, Ticket};
use shared::util::now_utc;
use std::fmt;
use tracing::{debug, error, info};

/// A feed that is fetched once per session
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Pending,
    Ready(T),
    Failed,
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

pub struct Session {
    store: Box<dyn BlobStore>,
    issuer: Box<dyn TicketIssuer>,
    bus: EventBus,
    cart: Cart,
    checkout: CheckoutFlow,
    menu: Loadable<MenuCatalog>,
    menu_filter: MenuFilter,
    locations: Loadable<LocationDirectory>,
    reviews: ReviewBook,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("store", &"<BlobStore>")
            .field("bus", &self.bus)
            .field("cart", &self.cart)
            .field("checkout", &self.checkout)
            .field("menu_filter", &self.menu_filter)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Open a session over `store`, restoring the cart and the reviews
    pub fn open(store: Box<dyn BlobStore>, issuer: Box<dyn TicketIssuer>) -> Self {
        let cart = cart::load(&*store);
        let reviews = ReviewBook::load(&*store);
        info!(
            cart_lines = cart.len(),
            reviews = reviews.len(),
            "Session opened"
        );
        Self {
            store,
            issuer,
            bus: EventBus::new(),
            cart,
            checkout: CheckoutFlow::new(),
            menu: Loadable::Pending,
            menu_filter: MenuFilter::all(),
            locations: Loadable::Pending,
            reviews,
        }
    }

    /// Throwaway session: in-memory store, wall-clock tickets
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::new()), Box::new(ClockTicketIssuer))
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.bus.subscribe(observer);
    }

    fn publish(&self, event: SessionEvent) {
        self.bus.publish(&event, self);
    }

    // ========== Read access (views) ==========

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_count(&self) -> u64 {
        cart::count(&self.cart)
    }

    pub fn cart_total(&self) -> Decimal {
        cart::total(&self.cart)
    }

    pub fn checkout_flow(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn menu(&self) -> &Loadable<MenuCatalog> {
        &self.menu
    }

    pub fn menu_filter(&self) -> &MenuFilter {
        &self.menu_filter
    }

    /// Items passing the current filter; empty until the menu is loaded
    pub fn menu_results(&self) -> Vec<&MenuItem> {
        self.menu
            .ready()
            .map(|catalog| catalog.filter(&self.menu_filter))
            .unwrap_or_default()
    }

    pub fn locations(&self) -> &Loadable<LocationDirectory> {
        &self.locations
    }

    pub fn reviews(&self) -> &ReviewBook {
        &self.reviews
    }

    // ========== Cart ==========

    /// Add one unit; an existing line keeps its first price
    pub fn add_to_cart(&mut self, name: &str, price: Decimal) -> AppResult<()> {
        let price = validate_price(price)?;
        let next = cart::add(self.cart.clone(), name, price);
        self.commit_cart(next)
    }

    /// `+` / `-` buttons
    pub fn adjust_quantity(&mut self, name: &str, delta: i64) -> AppResult<()> {
        if self.cart.get(name).is_none() {
            tracing::debug!(item = %name, "Adjust for item not in cart ignored");
            return Ok(());
        }
        let next = cart::adjust_qty(self.cart.clone(), name, delta);
        self.commit_cart(next)
    }

    pub fn remove_from_cart(&mut self, name: &str) -> AppResult<()> {
        let next = cart::remove(self.cart.clone(), name);
        self.commit_cart(next)
    }

    pub fn clear_cart(&mut self) -> AppResult<()> {
        self.commit_cart(cart::clear())
    }

    /// Persist, swap, reset checkout, notify
    ///
    /// Nothing changes in memory and nobody is notified if the write fails.
    fn commit_cart(&mut self, next: Cart) -> AppResult<()> {
        if let Err(e) = cart::save(&*self.store, &next) {
            error!(error = %e, "Failed to persist cart, previous cart kept");
            return Err(e.into());
        }
        self.cart = next;
        let checkout_reset = self.checkout.reset();
        debug!(
            lines = self.cart.len(),
            count = self.cart_count(),
            checkout_reset,
            "Cart committed"
        );

        self.publish(SessionEvent::CartChanged);
        if checkout_reset {
            self.publish(SessionEvent::CheckoutChanged);
        }
        Ok(())
    }

    // ========== Checkout ==========

    pub fn select_mode(&mut self, mode: OrderMode) {
        self.checkout.select_mode(mode);
        self.publish(SessionEvent::CheckoutChanged);
    }

    /// "Proceed to checkout"; rejections publish nothing
    pub fn proceed_to_checkout(&mut self) -> AppResult<CheckoutPhase> {
        let phase = self.checkout.proceed(&self.cart, &mut *self.issuer)?;
        self.publish(SessionEvent::CheckoutChanged);
        Ok(phase)
    }

    /// Pickup payment stub; card details are dropped after this call
    pub fn submit_payment(&mut self, payment: &PaymentDetails) -> AppResult<Ticket> {
        let ticket = self
            .checkout
            .submit_payment(payment, &self.cart, &mut *self.issuer)?
            .clone();
        self.publish(SessionEvent::CheckoutChanged);
        Ok(ticket)
    }

    // ========== Menu ==========

    /// Fetch the menu feed (once per session)
    ///
    /// On failure the menu area is replaced by an inline message; there is
    /// no retry.
    pub async fn load_menu(&mut self, source: &DataSource) -> Result<usize, SourceError> {
        if let Some(catalog) = self.menu.ready() {
            debug!("Menu already loaded");
            return Ok(catalog.len());
        }

        match sources::fetch_menu(source).await {
            Ok(items) => {
                let catalog = MenuCatalog::new(items);
                let items = catalog.len();
                info!(items, source = %source, "Menu loaded");
                self.menu = Loadable::Ready(catalog);
                self.publish(SessionEvent::MenuLoaded { items });
                self.refilter_menu();
                Ok(items)
            }
            Err(e) => {
                self.menu = Loadable::Failed;
                self.publish(SessionEvent::LoadFailed { feed: Feed::Menu });
                Err(e)
            }
        }
    }

    pub fn set_location_filter(&mut self, location: Selection) -> usize {
        self.menu_filter.location = location;
        self.refilter_menu()
    }

    pub fn set_meal_filter(&mut self, meal: Selection) -> usize {
        self.menu_filter.meal = meal;
        self.refilter_menu()
    }

    pub fn set_tag_filter(&mut self, tag: Selection) -> usize {
        self.menu_filter.tag = tag;
        self.refilter_menu()
    }

    /// Search box input, applied on every change
    pub fn set_search(&mut self, text: &str) -> usize {
        self.menu_filter.search = text.to_string();
        self.refilter_menu()
    }

    fn refilter_menu(&self) -> usize {
        let matches = self.menu_results().len();
        debug!(filter = ?self.menu_filter, matches, "Menu filtered");
        if self.menu.ready().is_some() {
            self.publish(SessionEvent::MenuFiltered { matches });
        }
        matches
    }

    // ========== Locations ==========

    /// Fetch the location feed (once per session) and build the directory
    pub async fn load_locations(&mut self, source: &DataSource) -> Result<usize, SourceError> {
        if let Some(directory) = self.locations.ready() {
            debug!("Locations already loaded");
            return Ok(directory.locations().len());
        }

        match sources::fetch_locations(source).await {
            Ok(list) => {
                let directory = LocationDirectory::new(list);
                let locations = directory.locations().len();
                info!(locations, source = %source, "Dining locations loaded");
                let visible = directory.visible().len();
                self.locations = Loadable::Ready(directory);
                self.publish(SessionEvent::LocationsLoaded { locations });
                self.publish(SessionEvent::LocationsFiltered { visible });
                Ok(locations)
            }
            Err(e) => {
                self.locations = Loadable::Failed;
                self.publish(SessionEvent::LoadFailed {
                    feed: Feed::Locations,
                });
                Err(e)
            }
        }
    }

    /// Campus filter buttons; returns the number of visible locations
    pub fn set_campus_filter(&mut self, campus: Selection) -> usize {
        let Loadable::Ready(directory) = &mut self.locations else {
            debug!(%campus, "Campus filter ignored, locations not loaded");
            return 0;
        };
        directory.set_campus(campus);
        let visible = directory.visible().len();
        self.publish(SessionEvent::LocationsFiltered { visible });
        visible
    }

    /// Marker / card / "view on map" click; unknown ids are ignored
    pub fn focus_location(&mut self, location_id: &str) -> bool {
        let focused = match &mut self.locations {
            Loadable::Ready(directory) => directory.focus(location_id),
            _ => false,
        };
        if focused {
            debug!(location_id, "Location focused");
            self.publish(SessionEvent::LocationFocused {
                location_id: location_id.to_string(),
            });
        }
        focused
    }

    /// Post a review from a location card form
    ///
    /// Returns `Ok(false)` when the text is blank: the form ignores it
    /// without a message.
    pub fn submit_review(&mut self, location_id: &str, draft: ReviewDraft) -> AppResult<bool> {
        if let Some(directory) = self.locations.ready()
            && directory.get(location_id).is_none()
        {
            return Err(AppError::not_found(format!("Location {location_id}")));
        }

        let posted = match self
            .reviews
            .submit(&*self.store, location_id, draft, now_utc())
        {
            Ok(list) => list.len(),
            Err(ReviewError::EmptyText) => return Ok(false),
            Err(e) => {
                error!(location_id, error = %e, "Failed to save review");
                return Err(e.into());
            }
        };

        info!(location_id, reviews = posted, "Review posted");
        self.publish(SessionEvent::ReviewPosted {
            location_id: location_id.to_string(),
        });
        Ok(true)
    }
}
