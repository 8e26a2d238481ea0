use std::sync::Mutex;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════
//  RNG (xorshift64)
// ═══════════════════════════════════════════════════════════════

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: i64) -> Self {
        let state = if seed == 0 {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64
                | 1 // ensure non-zero
        } else {
            seed as u64
        };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    fn next_intn(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

// ═══════════════════════════════════════════════════════════════
//  LatencyModel
// ═══════════════════════════════════════════════════════════════

/// Simulated fetch latency: a fixed base delay plus optional uniform
/// jitter in `[0, jitter]`. Jitter of zero keeps every delay equal to
/// the base, which is what the timing-sensitive callers rely on.
pub struct LatencyModel {
    base: Duration,
    jitter: Duration,
    rng: Mutex<Rng>,
}

impl LatencyModel {
    /// Default base delay, in milliseconds.
    pub const DEFAULT_DELAY_MS: u64 = 1500;

    /// Fixed delay, no jitter.
    pub fn fixed(base: Duration) -> Self {
        Self::with_jitter(base, Duration::ZERO, 1)
    }

    /// Base delay plus uniform jitter drawn from a seeded PRNG
    /// (seed 0 = current time).
    pub fn with_jitter(base: Duration, jitter: Duration, seed: i64) -> Self {
        Self {
            base,
            jitter,
            rng: Mutex::new(Rng::new(seed)),
        }
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    /// Delay for the next fetch.
    pub fn next_delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        let mut rng = match self.rng.lock() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("latency rng lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        self.base + Duration::from_millis(rng.next_intn(jitter_ms + 1))
    }
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self::fixed(Duration::from_millis(Self::DEFAULT_DELAY_MS))
    }
}
