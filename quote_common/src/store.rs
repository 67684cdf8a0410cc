//! Quote store: submission and age-filtered retrieval on top of `JsonDatabase`.
//!
//! The store owns its database handle, clock and malformed-timestamp policy.
//! It does no locking; callers that share it across tasks wrap it in a `Mutex`.

use std::path::Path;

use log::{debug, info, warn};

use crate::clock::Clock;
use crate::database::JsonDatabase;
use crate::error::QuoteError;
use crate::filter::{MalformedPolicy, MaxAge, filter_quotes};
use crate::quote::Quote;
use crate::result::Result;

/// Database key holding the quote collection.
pub const QUOTES_KEY: &str = "quotes";

/// Persisted quote collection plus the query layer over it.
pub struct QuoteStore {
    db: JsonDatabase<Vec<Quote>>,
    clock: Box<dyn Clock>,
    policy: MalformedPolicy,
}

impl QuoteStore {
    /// Open the store at `path`, initialising an empty collection on first run.
    pub fn open(
        path: impl AsRef<Path>,
        clock: impl Clock + 'static,
        policy: MalformedPolicy,
    ) -> Result<Self> {
        let mut db = JsonDatabase::open(path)?;
        if !db.contains_key(QUOTES_KEY) {
            info!("Adding {} entry to {}", QUOTES_KEY, db.path().display());
            db.insert(QUOTES_KEY, Vec::new());
            db.flush()?;
        }
        Ok(Self {
            db,
            clock: Box::new(clock),
            policy,
        })
    }

    /// Policy applied to unparsable timestamps.
    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.db.get(QUOTES_KEY).map_or(0, Vec::len)
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stamp, append and persist a new quote. Content is not validated.
    ///
    /// The append is undone when the write fails, so a failed submission leaves
    /// the collection unchanged.
    pub fn submit(&mut self, name: &str, message: &str) -> Result<Quote> {
        let quote = Quote::new(name, message, self.clock.now());
        self.db
            .get_mut(QUOTES_KEY)
            .ok_or_else(|| QuoteError::MissingKey(QUOTES_KEY.to_string()))?
            .push(quote.clone());
        if let Err(e) = self.db.flush() {
            if let Some(quotes) = self.db.get_mut(QUOTES_KEY) {
                quotes.pop();
            }
            self.db.mark_clean();
            warn!("Discarded quote from {:?}: {}", quote.name, e);
            return Err(e);
        }
        debug!("Stored quote from {:?} at {}", quote.name, quote.time);
        Ok(quote)
    }

    /// Quotes no older than `max_age`, sorted ascending by time.
    pub fn quotes(&self, max_age: Option<MaxAge>) -> Result<Vec<Quote>> {
        let quotes = self
            .db
            .get(QUOTES_KEY)
            .ok_or_else(|| QuoteError::MissingKey(QUOTES_KEY.to_string()))?;
        Ok(filter_quotes(quotes, max_age, self.clock.now(), self.policy))
    }

    /// Write any pending changes.
    pub fn flush(&mut self) -> Result<()> {
        self.db.flush()
    }

    /// Flush and release the backing file.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}
