//! Synthetic transaction batches.
//! Deterministic: same seed → same dataset across runs.

use fraudlens_core::errors::SchemaError;
use fraudlens_core::types::{Dataset, Record, RecordId};

/// A generated batch plus the ids of the records that were made anomalous.
pub struct TransactionFixture {
    pub dataset: Dataset,
    pub injected: Vec<RecordId>,
    pub entity_count: usize,
}

/// Fixture size presets.
#[derive(Debug, Clone, Copy)]
pub enum FixtureSize {
    /// 100 records, 5 entities
    Micro,
    /// 1K records, 50 entities
    Small,
    /// 10K records, 500 entities
    Medium,
    /// 100K records, 5K entities
    Large,
}

impl FixtureSize {
    pub fn record_count(&self) -> usize {
        match self {
            Self::Micro => 100,
            Self::Small => 1_000,
            Self::Medium => 10_000,
            Self::Large => 100_000,
        }
    }

    pub fn entity_count(&self) -> usize {
        (self.record_count() / 20).max(1)
    }
}

const MERCHANTS: &[&str] = &["grocery", "fuel", "travel", "electronics", "dining", "online"];

/// Injected records spend this multiple of their entity's usual amount.
const ANOMALY_MULTIPLIER: f64 = 50.0;

/// Generate a batch with one anomalous record per hundred.
///
/// Every entity has a base spend in [10, 200); ordinary transactions fall
/// within ±20% of it. Fields: `amount` (numeric), `merchant` (categorical).
pub fn generate_transactions(
    size: FixtureSize,
    seed: u64,
) -> Result<TransactionFixture, SchemaError> {
    generate_with(size.record_count(), size.entity_count(), seed)
}

/// [`generate_transactions`] with explicit counts.
pub fn generate_with(
    record_count: usize,
    entity_count: usize,
    seed: u64,
) -> Result<TransactionFixture, SchemaError> {
    let entity_count = entity_count.max(1);
    let mut rng = SimpleRng::new(seed);

    let base_spend: Vec<f64> = (0..entity_count)
        .map(|_| 10.0 + rng.next_f64() * 190.0)
        .collect();

    let anomaly_count = (record_count / 100).max(1).min(record_count);
    let mut anomalous = vec![false; record_count];
    let mut placed = 0;
    while placed < anomaly_count {
        let idx = rng.below(record_count);
        if !anomalous[idx] {
            anomalous[idx] = true;
            placed += 1;
        }
    }

    let mut records = Vec::with_capacity(record_count);
    let mut injected = Vec::with_capacity(anomaly_count);
    for (i, &is_anomaly) in anomalous.iter().enumerate() {
        let entity = i % entity_count;
        let jitter = 0.8 + rng.next_f64() * 0.4;
        let mut amount = base_spend[entity] * jitter;
        if is_anomaly {
            amount *= ANOMALY_MULTIPLIER;
        }
        let merchant = MERCHANTS[rng.below(MERCHANTS.len())];

        let id = format!("txn_{i:06}");
        if is_anomaly {
            injected.push(id.clone());
        }
        records.push(
            Record::new(id, format!("user_{entity}"))
                .with_field("amount", (amount * 100.0).round() / 100.0)
                .with_field("merchant", merchant),
        );
    }

    Ok(TransactionFixture {
        dataset: Dataset::infer(records)?,
        injected,
        entity_count,
    })
}

/// Xorshift64. Not for anything but fixtures.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [0, n). `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_floats_stay_in_range() {
        let mut rng = SimpleRng::new(0);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn injected_count_is_one_percent() {
        let fixture = generate_with(1_000, 10, 3).unwrap();
        assert_eq!(fixture.injected.len(), 10);
        assert_eq!(fixture.dataset.len(), 1_000);
    }

    #[test]
    fn tiny_batch_still_gets_one_anomaly() {
        let fixture = generate_with(5, 2, 9).unwrap();
        assert_eq!(fixture.injected.len(), 1);
    }
}
