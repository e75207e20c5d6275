// Queue Domain Model
//
// Bounded FIFO with a content-keyed duplicate index. The structure is not
// synchronized on its own; the application service wraps it in a single
// lock so that each operation runs as one critical section.

use std::collections::{HashSet, VecDeque};

use super::error::DomainError;
use super::pattern::{PatternData, PatternRecord, QueueEntry};

/// Bounded, order-preserving, deduplicating queue of pattern records.
///
/// Invariants: the sequence never exceeds `capacity`, and the duplicate
/// index holds exactly the content keys of the records currently queued.
#[derive(Debug)]
pub struct PatternQueue {
    capacity: usize,
    records: VecDeque<PatternRecord>,
    dedup: HashSet<PatternData>,
}

impl PatternQueue {
    /// Create an empty queue bounded at `capacity` records.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "queue capacity must be positive");
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
            dedup: HashSet::with_capacity(capacity),
        }
    }

    /// Admission transaction: duplicate check, then capacity check, then
    /// append + index. A rejection leaves the queue untouched.
    ///
    /// Records admitted earlier always precede records admitted later:
    /// first accepted, first out.
    pub fn admit(&mut self, record: PatternRecord) -> Result<(), DomainError> {
        if self.dedup.contains(&record.data) {
            return Err(DomainError::PatternAlreadyPresent);
        }
        if self.records.len() >= self.capacity {
            return Err(DomainError::QueueFull);
        }
        self.dedup.insert(record.data.clone());
        self.records.push_back(record);
        Ok(())
    }

    /// `(id, name)` snapshot in arrival order. Non-mutating.
    pub fn entries(&self) -> Vec<QueueEntry> {
        self.records
            .iter()
            .map(|record| QueueEntry {
                id: record.id.clone(),
                name: record.name.clone(),
            })
            .collect()
    }

    /// The oldest queued record, if any. Non-mutating.
    pub fn head(&self) -> Option<&PatternRecord> {
        self.records.front()
    }

    /// Remove and return the head record, unindexing its content key.
    /// The former second record, if any, becomes the new head.
    pub fn pop_head(&mut self) -> Option<PatternRecord> {
        let record = self.records.pop_front()?;
        self.dedup.remove(&record.data);
        Some(record)
    }

    pub fn contains(&self, data: &PatternData) -> bool {
        self.dedup.contains(data)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
