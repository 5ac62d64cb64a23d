//! Line-oriented terminal front end
//!
//! One command per line. Each command runs one session operation; the
//! subscribed [`TerminalView`] prints whatever the operation changed, and
//! the shell itself only prints errors and the explicit `menu` / `cart` /
//! `locations` / `help` listings.

pub mod command;
pub mod terminal;

pub use command::{Command, CommandError, FilterField, HELP};
pub use terminal::TerminalView;

use crate::cart::parse_price;
use crate::core::Session;
use crate::locations::ReviewDraft;
use crate::utils::{AppError, AppResult};
use crate::views::{CartBadge, CartPanel, LocationList, MapView, MenuResults};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Print an operation failure the way the page would surface it
fn report(result: AppResult<()>, out: &mut impl Write) -> io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_silent() => Ok(()),
        Err(e) if e.is_blocking() => writeln!(out, "!! {e}"),
        Err(e) => writeln!(out, "{e}"),
    }
}

/// Run one command against the session
pub fn execute(session: &mut Session, command: Command, out: &mut impl Write) -> io::Result<Flow> {
    debug!(?command, "Executing command");
    match command {
        Command::Menu => terminal::render_menu(&MenuResults::from_session(session), out)?,
        Command::Filter(field, value) => {
            match field {
                FilterField::Location => session.set_location_filter(value),
                FilterField::Meal => session.set_meal_filter(value),
                FilterField::Tag => session.set_tag_filter(value),
            };
        }
        Command::Search(text) => {
            session.set_search(&text);
        }
        Command::Add { price, name } => {
            let result = parse_price(&price)
                .map_err(AppError::from)
                .and_then(|price| session.add_to_cart(&name, price));
            report(result, out)?;
        }
        Command::Increment(name) => report(session.adjust_quantity(&name, 1), out)?,
        Command::Decrement(name) => report(session.adjust_quantity(&name, -1), out)?,
        Command::Remove(name) => report(session.remove_from_cart(&name), out)?,
        Command::Clear => report(session.clear_cart(), out)?,
        Command::Cart => {
            terminal::render_badge(&CartBadge::from_session(session), out)?;
            terminal::render_cart(&CartPanel::from_session(session), out)?;
        }
        Command::Mode(mode) => session.select_mode(mode),
        Command::Checkout => report(session.proceed_to_checkout().map(|_| ()), out)?,
        Command::Pay(details) => report(session.submit_payment(&details).map(|_| ()), out)?,
        Command::Locations => {
            terminal::render_locations(&LocationList::from_session(session), out)?;
            if let Some(map) = MapView::from_session(session) {
                terminal::render_map(&map, out)?;
            }
        }
        Command::Campus(campus) => {
            session.set_campus_filter(campus);
        }
        Command::Focus(id) => {
            if !session.focus_location(&id) {
                writeln!(out, "No location with id {id}")?;
            }
        }
        Command::Review {
            location_id,
            rating,
            text,
            name,
        } => {
            let draft = ReviewDraft::new(text).with_rating(rating).with_name(name);
            report(session.submit_review(&location_id, draft).map(|_| ()), out)?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Read commands until `quit` or end of input
pub async fn run_shell<R, W>(session: &mut Session, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "> ")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            let flow = match line.parse::<Command>() {
                Ok(command) => execute(session, command, out)?,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    info!("Shell closed");
    Ok(())
}
