// Pattern Queue Service - the four queue operations behind one lock

pub mod validate;


pub use validate::validate;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::{DomainError, PatternCandidate, PatternQueue, PatternRecord, QueueEntry};
use crate::port::{IdProvider, TimeProvider};

/// Pattern Queue Service
///
/// Owns the process-wide queue instance. Every operation takes the single
/// lock exactly once, so the capacity and duplicate invariants are never
/// observed violated and partial admission is impossible. Operations are
/// bounded by queue size and never wait on I/O while holding the lock.
pub struct PatternQueueService {
    queue: Mutex<PatternQueue>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl PatternQueueService {
    pub fn new(
        capacity: usize,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            queue: Mutex::new(PatternQueue::new(capacity)),
            id_provider,
            time_provider,
        }
    }

    /// Admit a validated candidate.
    ///
    /// The id and timestamp are materialized before the lock is taken
    /// (the providers keep no state behind it); the duplicate check,
    /// capacity check and append then run as one transaction. A rejected
    /// admission discards the record and mutates nothing.
    pub fn admit(&self, candidate: PatternCandidate) -> Result<PatternRecord, DomainError> {
        let record = PatternRecord::new(
            self.id_provider.generate_id(),
            self.time_provider.now_millis(),
            candidate,
        );

        let depth = {
            let mut queue = self.queue.lock();
            queue.admit(record.clone())?;
            queue.len()
        };

        info!(id = %record.id, name = %record.name, depth, "pattern admitted");
        Ok(record)
    }

    /// `(id, name)` snapshot in admission order. Non-mutating.
    pub fn list(&self) -> Vec<QueueEntry> {
        let entries = self.queue.lock().entries();
        debug!(count = entries.len(), "queue listed");
        entries
    }

    /// The oldest queued record, or `None` when the queue is empty.
    /// Non-mutating.
    pub fn peek_head(&self) -> Option<PatternRecord> {
        self.queue.lock().head().cloned()
    }

    /// Remove and return the head record, or `None` when the queue is
    /// empty.
    pub fn pop_head(&self) -> Option<PatternRecord> {
        let record = self.queue.lock().pop_head()?;
        let queued_ms = self
            .time_provider
            .now_millis()
            .saturating_sub(record.submitted_at);
        info!(id = %record.id, name = %record.name, queued_ms, "pattern removed from head");
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.queue.lock().capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PatternData;
    use crate::port::{SystemTimeProvider, UuidProvider};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic ids for assertions on ordering.
    struct CountingIdProvider(AtomicU64);

    impl IdProvider for CountingIdProvider {
        fn generate_id(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    /// Frozen clock.
    struct FixedTimeProvider(i64);

    impl TimeProvider for FixedTimeProvider {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn service(capacity: usize) -> PatternQueueService {
        PatternQueueService::new(
            capacity,
            Arc::new(CountingIdProvider(AtomicU64::new(0))),
            Arc::new(FixedTimeProvider(1_000)),
        )
    }

    fn candidate(name: &str, payload: &[u8]) -> PatternCandidate {
        PatternCandidate {
            name: name.to_string(),
            data: PatternData::from_bytes(payload.to_vec()),
        }
    }

    #[test]
    fn admits_in_order_and_lists_fifo() {
        let service = service(3);
        service.admit(candidate("one", b"a")).unwrap();
        service.admit(candidate("two", b"b")).unwrap();
        service.admit(candidate("three", b"c")).unwrap();

        let names: Vec<String> = service.list().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn rejections_carry_no_mutation() {
        let service = service(1);
        service.admit(candidate("one", b"a")).unwrap();

        assert_eq!(
            service.admit(candidate("dup", b"a")).unwrap_err(),
            DomainError::PatternAlreadyPresent
        );
        assert_eq!(
            service.admit(candidate("overflow", b"b")).unwrap_err(),
            DomainError::QueueFull
        );
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn peek_is_idempotent_and_pop_advances_the_head() {
        let service = service(2);
        service.admit(candidate("one", b"a")).unwrap();
        service.admit(candidate("two", b"b")).unwrap();

        assert_eq!(service.peek_head().unwrap().name, "one");
        assert_eq!(service.peek_head().unwrap().name, "one");

        assert_eq!(service.pop_head().unwrap().name, "one");
        assert_eq!(service.peek_head().unwrap().name, "two");
        assert_eq!(service.pop_head().unwrap().name, "two");
        assert!(service.pop_head().is_none());
        assert!(service.peek_head().is_none());
    }

    #[test]
    fn concurrent_distinct_admissions_respect_capacity() {
        let service = Arc::new(PatternQueueService::new(
            4,
            Arc::new(UuidProvider),
            Arc::new(SystemTimeProvider),
        ));

        let mut handles = vec![];
        for i in 0..16u8 {
            let service = Arc::clone(&service);
            handles.push(std::thread::spawn(move || {
                service.admit(candidate(&format!("p{i}"), &[i])).is_ok()
            }));
        }

        let admitted = handles
            .into_iter()
            .map(|h| h.join().expect("admitter thread panicked"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(admitted, 4, "exactly capacity-many admissions succeed");
        assert_eq!(service.len(), 4);
    }

    #[test]
    fn racing_duplicates_admit_exactly_once() {
        let service = Arc::new(PatternQueueService::new(
            8,
            Arc::new(UuidProvider),
            Arc::new(SystemTimeProvider),
        ));

        let mut handles = vec![];
        for _ in 0..8 {
            let service = Arc::clone(&service);
            handles.push(std::thread::spawn(move || {
                service.admit(candidate("same", b"identical bytes")).is_ok()
            }));
        }

        let admitted = handles
            .into_iter()
            .map(|h| h.join().expect("admitter thread panicked"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(admitted, 1, "identical content admits exactly once");
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn assigned_ids_never_repeat() {
        let service = service(64);
        let mut seen = HashSet::new();
        for i in 0..64u8 {
            let record = service.admit(candidate("p", &[i])).unwrap();
            assert!(seen.insert(record.id));
        }
        // Drain and refill; fresh ids keep flowing
        while service.pop_head().is_some() {}
        for i in 0..64u8 {
            let record = service.admit(candidate("p", &[i])).unwrap();
            assert!(seen.insert(record.id));
        }
    }
}
