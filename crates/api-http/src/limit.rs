// Request Rate Limiting (token bucket)
//
// Guards the mutating routes against runaway clients. Tokens refill
// continuously; bucket state sits behind its own small mutex, separate
// from the queue lock, and acquisition never blocks.

use std::time::Instant;

use parking_lot::Mutex;

/// Token-bucket rate limiter.
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    max_tokens: f64,
    refill_per_sec: f64,
}

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// `max_burst` requests may pass at once; sustained throughput is
    /// `per_second` requests per second.
    pub fn new(max_burst: u32, per_second: u32) -> Self {
        Self {
            bucket: Mutex::new(Bucket {
                tokens: f64::from(max_burst),
                last_refill: Instant::now(),
            }),
            max_tokens: f64::from(max_burst),
            refill_per_sec: f64::from(per_second),
        }
    }

    /// Take one token if available. Returns false when the bucket is dry.
    pub fn try_acquire(&self) -> bool {
        let mut bucket = self.bucket.lock();
        let now = Instant::now();
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.max_tokens);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Tokens currently available (for diagnostics).
    pub fn remaining(&self) -> f64 {
        self.bucket.lock().tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn allows_up_to_the_burst() {
        let limiter = RateLimiter::new(10, 1);
        for _ in 0..10 {
            assert!(limiter.try_acquire());
        }
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn refills_over_time() {
        let limiter = RateLimiter::new(2, 20); // 20 tokens/sec
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());

        std::thread::sleep(Duration::from_millis(200));
        assert!(limiter.try_acquire(), "bucket should have refilled");
    }

    #[test]
    fn refill_never_exceeds_the_burst() {
        let limiter = RateLimiter::new(3, 1000);
        std::thread::sleep(Duration::from_millis(50));
        assert!(limiter.remaining() <= 3.0);
    }

    #[test]
    fn concurrent_acquisition_never_oversubscribes() {
        let limiter = Arc::new(RateLimiter::new(100, 1));
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || (0..20).filter(|_| limiter.try_acquire()).count())
            })
            .collect();

        let allowed: usize = handles
            .into_iter()
            .map(|h| h.join().expect("acquire thread panicked"))
            .sum();
        // 200 attempts against a burst of 100 and negligible refill
        assert!(allowed <= 101, "expected at most the burst, got {allowed}");
        assert!(allowed >= 100, "expected the whole burst, got {allowed}");
    }
}
