use crate::{
    core::{Availability, Item, Problem},
    error::{ModelError, ModelResult},
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of a generated instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Track {
    pub num_items: usize,
    pub num_sacks: usize,
    pub max_weight: u64,
    pub max_capacity: u64,
    /// Largest availability drawn for a bound item.
    pub max_count: u64,
    /// Chance, in percent, that an item is unbounded.
    pub unbound_percent: u32,
    /// Chance, in percent, that an item carries a value of its own.
    pub valued_percent: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_items: 8,
            num_sacks: 2,
            max_weight: 20,
            max_capacity: 50,
            max_count: 3,
            unbound_percent: 25,
            valued_percent: 75,
        }
    }
}

impl Track {
    fn validate(&self) -> ModelResult<()> {
        if self.num_items == 0 {
            return Err(ModelError::InvalidTrack("num_items must be positive".into()));
        }
        if self.num_sacks == 0 {
            return Err(ModelError::InvalidTrack("num_sacks must be positive".into()));
        }
        if self.max_weight == 0 || self.max_capacity == 0 || self.max_count == 0 {
            return Err(ModelError::InvalidTrack(
                "max_weight, max_capacity and max_count must be positive".into(),
            ));
        }
        if self.unbound_percent > 100 || self.valued_percent > 100 {
            return Err(ModelError::InvalidTrack(
                "percentages must not exceed 100".into(),
            ));
        }
        Ok(())
    }
}

/// Draws an instance from `seed`. The same seed and track always give the
/// same instance.
pub fn generate_instance(seed: &[u8; 32], track: &Track) -> ModelResult<Problem<u64, u64, u64>> {
    track.validate()?;
    let mut rng = SmallRng::from_seed(*seed);

    let sacks: Vec<u64> = (0..track.num_sacks)
        .map(|_| rng.gen_range(1..=track.max_capacity))
        .collect();

    let items = (0..track.num_items)
        .map(|index| {
            let weight = rng.gen_range(1..=track.max_weight);
            let value = if rng.gen_ratio(track.valued_percent, 100) {
                Some(rng.gen_range(1..=track.max_weight.saturating_mul(2)))
            } else {
                None
            };
            let availability = if rng.gen_ratio(track.unbound_percent, 100) {
                Availability::Unbounded
            } else {
                Availability::Bounded(rng.gen_range(1..=track.max_count))
            };
            Item::new(index, weight, value, availability)
        })
        .collect::<ModelResult<Vec<_>>>()?;

    Problem::new(sacks, items)
}
