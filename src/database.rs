//! In-memory storage and shared application state
//!
//! Each resource lives in its own ordered [`Table`]. Lookups are linear scans;
//! insertion order is the listing order.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::model::{Driver, Video};

/// Anything stored in a [`Table`] is keyed by a numeric id
pub trait Record {
    fn id(&self) -> i64;
}

impl Record for Driver {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Video {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Ordered collection of records of one type
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    pub fn append(&mut self, record: T) {
        self.rows.push(record);
    }

    pub fn find_by_id(&self, id: i64) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.rows.get_mut(index)
    }

    /// Removes the row at `index`, shifting later rows down.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.rows.remove(index)
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_id(&self) -> Option<i64> {
        self.rows.iter().map(Record::id).max()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

/// Both resource tables plus the bookkeeping needed to mint ids
#[derive(Debug, Default)]
pub struct Db {
    pub drivers: Table<Driver>,
    pub videos: Table<Video>,
    last_driver_id: i64,
}

impl Db {
    /// Driver ids are creation timestamps in milliseconds. Two creates in the
    /// same millisecond get consecutive ids; ids are never handed out twice,
    /// even after a delete or a reset.
    pub fn next_driver_id(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last_driver_id + 1);
        self.last_driver_id = id;
        id
    }

    /// Video ids are `len + 1`, raised past the current maximum when earlier
    /// deletes would otherwise make `len + 1` collide with a live row.
    pub fn next_video_id(&self) -> i64 {
        let by_len = self.videos.len() as i64 + 1;
        match self.videos.max_id() {
            Some(max) if max >= by_len => max + 1,
            _ => by_len,
        }
    }

    /// Empties both tables.
    pub fn clear_all(&mut self) {
        self.drivers.clear();
        self.videos.clear();
    }
}

/// Application state shared across all request handlers
///
/// A mutating handler holds the write lock from its id lookup until the
/// store has been changed, so mutations never interleave.
#[derive(Clone, Default)]
pub struct AppState {
    pub db: Arc<RwLock<Db>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
