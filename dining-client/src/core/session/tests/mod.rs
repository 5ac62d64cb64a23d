use super::*;
use crate::checkout::CheckoutError;
use crate::storage::{CART_KEY, LOCATION_REVIEWS_KEY, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ========================================================================
// Test doubles
// ========================================================================

/// Records every event it sees, plus the cart count at notification time
#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<SessionEvent>>>,
    counts_seen: Rc<RefCell<Vec<u64>>>,
}

impl Recorder {
    fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    fn count_of(&self, wanted: &SessionEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == wanted).count()
    }

    fn clear(&self) {
        self.events.borrow_mut().clear();
        self.counts_seen.borrow_mut().clear();
    }
}

impl SessionObserver for Recorder {
    fn on_event(&self, event: &SessionEvent, session: &Session) {
        self.events.borrow_mut().push(event.clone());
        self.counts_seen.borrow_mut().push(session.cart_count());
    }
}

/// Deterministic issuer: `<prefix>00<n>42`
#[derive(Clone, Default)]
struct SequenceIssuer {
    issued: Rc<Cell<u32>>,
}

impl TicketIssuer for SequenceIssuer {
    fn issue(&mut self, mode: OrderMode, total: Decimal) -> Ticket {
        let n = self.issued.get() + 1;
        self.issued.set(n);
        Ticket {
            code: format!("{}00{:02}42", mode.ticket_prefix(), n),
            total,
        }
    }
}

/// In-memory store whose writes can be switched off
#[derive(Clone, Default)]
struct FlakyStore {
    inner: Rc<MemoryStore>,
    fail_writes: Rc<Cell<bool>>,
}

impl BlobStore for FlakyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }
}

// ========================================================================
// Helpers
// ========================================================================

struct Harness {
    session: Session,
    recorder: Recorder,
    issuer: SequenceIssuer,
    store: FlakyStore,
}

fn harness_with_store(store: FlakyStore) -> Harness {
    let issuer = SequenceIssuer::default();
    let recorder = Recorder::default();
    let mut session = Session::open(Box::new(store.clone()), Box::new(issuer.clone()));
    session.subscribe(Box::new(recorder.clone()));
    Harness {
        session,
        recorder,
        issuer,
        store,
    }
}

fn harness() -> Harness {
    harness_with_store(FlakyStore::default())
}

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

const MENU_JSON: &str = r#"[
  {"name":"Pasta","description":"Penne with tomato","price":7.5,"rating":4.2,"reviews":12,
   "tags":["vegetarian"],"location":"Thrive","meal":"Dinner","station":"Pasta Bar"},
  {"name":"Burger","description":"Beef patty","price":9.25,"rating":3.8,"reviews":30,
   "tags":[],"location":"District","meal":"Lunch","station":"Grill"},
  {"name":"Tofu Bowl","description":"Spicy tofu over rice","price":8,"rating":4.6,"reviews":9,
   "tags":["vegan","spicy"],"location":"Thrive","meal":"Lunch","station":"Bowls"}
]"#;

const LOCATIONS_JSON: &str = r#"[
  {"id":"thrive","name":"Thrive","campus":"Foggy Bottom","type":"Dining Hall",
   "lat":38.8997,"lng":-77.0486,"address":"2121 H St NW","hours":"Mon-Fri 7am-9pm\nSat-Sun 10am-8pm",
   "payment":["GWorld","Card"],"rating":4.3,"reviews":120},
  {"id":"district","name":"District House","campus":"Foggy Bottom","type":"Food Court",
   "lat":38.9003,"lng":-77.0470,"address":"2121 I St NW","payment":["GWorld"]},
  {"id":"pelham","name":"Pelham Commons","campus":"Mount Vernon","type":"Dining Hall",
   "lat":38.9369,"lng":-77.0896,"address":"2100 Foxhall Rd NW","payment":["GWorld"]}
]"#;

fn write_feed(dir: &tempfile::TempDir, file: &str, body: &str) -> DataSource {
    let path = dir.path().join(file);
    std::fs::write(&path, body).unwrap();
    DataSource::File(path)
}

async fn browse_harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let menu = write_feed(&dir, "menu-data.json", MENU_JSON);
    let locations = write_feed(&dir, "dining-locations.json", LOCATIONS_JSON);

    let mut h = harness();
    h.session.load_menu(&menu).await.unwrap();
    h.session.load_locations(&locations).await.unwrap();
    h.recorder.clear();
    h
}

mod test_checkout;
