//! Plain-text rendering of the view models

use crate::core::{Session, SessionEvent, SessionObserver};
use crate::locations::Viewport;
use crate::views::{
    CartBadge, CartPanel, CheckoutPanel, LocationCard, LocationList, MapView, MenuResults,
};
use std::cell::RefCell;
use std::io::{self, Write};
use tracing::warn;

pub fn render_badge(badge: &CartBadge, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "[cart: {}]", badge.count)
}

pub fn render_cart(panel: &CartPanel, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Your Cart ==")?;
    if panel.is_empty() {
        writeln!(out, "{}", crate::views::cart::EMPTY_CART)?;
    }
    for line in &panel.lines {
        writeln!(
            out,
            "  {:<24} {:>3} x {:<14} {:>9}",
            line.name, line.qty, line.unit_price, line.line_total
        )?;
    }
    writeln!(out, "Items: {}  Order Total: {}", panel.item_count, panel.total)?;
    render_checkout(&panel.checkout, out)
}

pub fn render_checkout(panel: &CheckoutPanel, out: &mut impl Write) -> io::Result<()> {
    match panel {
        CheckoutPanel::EmptyCart => {}
        CheckoutPanel::Instructions { mode } => {
            let mode = mode.map_or("not selected", |m| m.label());
            writeln!(out, "Order mode: {mode}")?;
        }
        CheckoutPanel::DineInTicket { code, total } => {
            writeln!(out, "DINE-IN TICKET  {code}")?;
            writeln!(out, "Order total: {total}")?;
        }
        CheckoutPanel::PickupPayment { total } => {
            writeln!(out, "PICKUP PAYMENT  (order total {total})")?;
            writeln!(out, "  pay <name on card>|<card number>|<MM/YY>|<CVV>")?;
        }
        CheckoutPanel::PickupTicket { code, total } => {
            writeln!(out, "PICKUP TICKET  {code}")?;
            writeln!(out, "Order total: {total}")?;
        }
    }
    writeln!(out, "{}", panel.message())
}

pub fn render_menu(results: &MenuResults, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", results.title())?;
    if let Some(message) = results.message() {
        return writeln!(out, "{message}");
    }
    if let MenuResults::Items(cards) = results {
        for card in cards {
            writeln!(out, "{}  [{}]  @ {}", card.name, card.station, card.location)?;
            if !card.description.is_empty() {
                writeln!(out, "    {}", card.description)?;
            }
            if !card.tags.is_empty() {
                let tags: Vec<_> = card.tags.iter().map(|t| t.label.as_str()).collect();
                writeln!(out, "    tags: {}", tags.join(", "))?;
            }
            writeln!(out, "    {} {}   {}", card.stars, card.rating, card.price)?;
            writeln!(out, "    add {} {}", card.add_price, card.name)?;
        }
    }
    Ok(())
}

fn render_card(card: &LocationCard, out: &mut impl Write) -> io::Result<()> {
    let marker = if card.highlighted { ">>" } else { "  " };
    writeln!(out, "{marker} {} ({})  {}", card.name, card.id, card.campus.to_uppercase())?;
    if !card.kind.is_empty() {
        writeln!(out, "   {}", card.kind)?;
    }
    if let Some(rating) = &card.rating {
        writeln!(
            out,
            "   {} {} ({} reviews)",
            rating.stars, rating.score, rating.reviews
        )?;
    }
    if !card.hours.is_empty() {
        writeln!(out, "   Hours:")?;
        for line in &card.hours {
            writeln!(out, "     {line}")?;
        }
    }
    if !card.description.is_empty() {
        writeln!(out, "   {}", card.description)?;
    }
    if !card.payment.is_empty() {
        writeln!(out, "   Payment: {}", card.payment.join(" · "))?;
    }
    render_reviews(card, out)
}

fn render_reviews(card: &LocationCard, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "   Reviews:")?;
    if let Some(message) = card.reviews_message() {
        return writeln!(out, "     {message}");
    }
    for review in &card.reviews {
        writeln!(out, "     {}  {}  {}", review.name, review.stars, review.date)?;
        for line in review.text.lines() {
            writeln!(out, "       {line}")?;
        }
    }
    Ok(())
}

pub fn render_locations(list: &LocationList, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Dining Locations ==")?;
    if let Some(message) = list.message() {
        return writeln!(out, "{message}");
    }
    if let LocationList::Cards(cards) = list {
        for card in cards {
            render_card(card, out)?;
        }
    }
    Ok(())
}

pub fn render_map(map: &MapView, out: &mut impl Write) -> io::Result<()> {
    match &map.viewport {
        Viewport::Centered { center, zoom } => writeln!(
            out,
            "Map: centre ({:.4}, {:.4}) zoom {zoom}",
            center.lat, center.lng
        )?,
        Viewport::Fitted(b) => writeln!(
            out,
            "Map: fitted to ({:.4}, {:.4}) - ({:.4}, {:.4})",
            b.south, b.west, b.north, b.east
        )?,
    }
    writeln!(out, "Markers: {}", map.markers.join(", "))?;
    if let Some(popup) = &map.popup {
        writeln!(out, "[{}] {}", popup.name, popup.kind)?;
        writeln!(out, "  {}", popup.address)?;
        writeln!(out, "  image: {}  menus: {}", popup.image, popup.menu_link)?;
    }
    Ok(())
}

/// Session observer printing what changed
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn render(&self, event: &SessionEvent, session: &Session) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        let out = &mut *out;
        match event {
            SessionEvent::CartChanged => {
                render_badge(&CartBadge::from_session(session), out)?;
                render_cart(&CartPanel::from_session(session), out)?;
            }
            SessionEvent::CheckoutChanged => {
                render_checkout(&CheckoutPanel::from_session(session), out)?;
            }
            SessionEvent::MenuLoaded { items } => writeln!(out, "Loaded {items} menu items")?,
            SessionEvent::MenuFiltered { .. } => {
                render_menu(&MenuResults::from_session(session), out)?;
            }
            SessionEvent::LocationsLoaded { locations } => {
                writeln!(out, "Loaded {locations} dining locations")?;
            }
            SessionEvent::LocationsFiltered { .. } => {
                render_locations(&LocationList::from_session(session), out)?;
                if let Some(map) = MapView::from_session(session) {
                    render_map(&map, out)?;
                }
            }
            SessionEvent::LocationFocused { .. } => {
                if let Some(map) = MapView::from_session(session) {
                    render_map(&map, out)?;
                }
            }
            SessionEvent::ReviewPosted { location_id } => {
                let card = session
                    .locations()
                    .ready()
                    .and_then(|dir| dir.get(location_id))
                    .map(|loc| LocationCard::build(loc, session.reviews(), false));
                if let Some(card) = card {
                    render_reviews(&card, out)?;
                }
            }
            SessionEvent::LoadFailed { feed } => writeln!(out, "{}", feed.unavailable_message())?,
        }
        out.flush()
    }
}

impl<W: Write> SessionObserver for TerminalView<W> {
    fn on_event(&self, event: &SessionEvent, session: &Session) {
        if let Err(e) = self.render(event, session) {
            warn!(event = event.name(), error = %e, "Failed to render event");
        }
    }
}
