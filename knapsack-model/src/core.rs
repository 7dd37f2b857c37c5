use crate::error::{ModelError, ModelResult};
use knapsack_utils::{checked_value_add, checked_value_mul, Count, Value, Weight};
use num_traits::cast;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, fmt};
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Availability<C> {
    Bounded(C),
    Unbounded,
}

impl<C: Count> Availability<C> {
    /// A count of zero stands for an unlimited supply.
    pub fn from_count(count: C) -> Self {
        if count.is_zero() {
            Availability::Unbounded
        } else {
            Availability::Bounded(count)
        }
    }

    /// Inverse of [`Availability::from_count`].
    pub fn to_count(&self) -> C {
        match self {
            Availability::Bounded(count) => *count,
            Availability::Unbounded => C::zero(),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Availability::Bounded(_))
    }

    pub fn bound(&self) -> Option<C> {
        match self {
            Availability::Bounded(count) => Some(*count),
            Availability::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item<W, V, C> {
    pub weight: W,
    pub value: V,
    /// False when the value was derived from the weight.
    pub explicit_value: bool,
    pub availability: Availability<C>,
}

impl<W: Weight, V: Value, C: Count> Item<W, V, C> {
    /// Builds the item at position `index`. Without an explicit value the
    /// weight, converted into the value type, is used as value.
    pub fn new(
        index: usize,
        weight: W,
        value: Option<V>,
        availability: Availability<C>,
    ) -> ModelResult<Self> {
        if weight.is_zero() {
            return Err(ModelError::ZeroWeight { item: index });
        }
        let (value, explicit_value) = match value {
            Some(value) => (value, true),
            None => {
                let value = cast::<W, V>(weight).ok_or_else(|| ModelError::ValueOutOfRange {
                    item: index,
                    weight: weight.to_string(),
                })?;
                (value, false)
            }
        };
        // Written this way round so that NaN is rejected as well.
        if !(value > V::zero()) {
            return Err(ModelError::NonPositiveValue {
                item: index,
                value: value.to_string(),
            });
        }
        Ok(Self {
            weight,
            value,
            explicit_value,
            availability,
        })
    }

    pub fn is_bound(&self) -> bool {
        self.availability.is_bound()
    }
}

/// A validated problem instance. Items keep their index order, which is the
/// order in which bound items are decided.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<W, V, C> {
    items: Vec<Item<W, V, C>>,
    sacks: Vec<W>,
}

impl<W: Weight, V: Value, C: Count> Problem<W, V, C> {
    pub fn new(sacks: Vec<W>, items: Vec<Item<W, V, C>>) -> ModelResult<Self> {
        if sacks.is_empty() {
            return Err(ModelError::NoSacks);
        }
        if items.is_empty() {
            return Err(ModelError::NoItems);
        }
        if let Some(sack) = sacks.iter().position(|capacity| capacity.is_zero()) {
            return Err(ModelError::ZeroCapacity { sack });
        }
        let problem = Self { items, sacks };
        problem.value_limit().ok_or(ModelError::ValueOverflow)?;
        Ok(problem)
    }

    /// Upper bound on the value of any feasible placement: every item packed
    /// as often as its bound and the sacks allow. `None` when that bound does
    /// not fit into the value type, in which case sums during the search
    /// could overflow.
    fn value_limit(&self) -> Option<V> {
        self.items.iter().try_fold(V::zero(), |total, item| {
            let fitting = self.fitting(item.weight);
            let units = match item.availability {
                Availability::Bounded(count) => match cast::<C, W>(count) {
                    Some(count) if count < fitting => count,
                    _ => fitting,
                },
                Availability::Unbounded => fitting,
            };
            let units = cast::<W, V>(units)?;
            checked_value_add(total, checked_value_mul(item.value, units)?)
        })
    }

    // Units of `weight` fitting into all sacks together.
    fn fitting(&self, weight: W) -> W {
        self.sacks
            .iter()
            .fold(W::zero(), |acc, &capacity| acc.saturating_add(capacity / weight))
    }

    pub fn items(&self) -> &[Item<W, V, C>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> &Item<W, V, C> {
        &self.items[index]
    }

    pub fn sacks(&self) -> &[W] {
        &self.sacks
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn num_sacks(&self) -> usize {
        self.sacks.len()
    }

    pub fn has_unbound(&self) -> bool {
        self.items.iter().any(|item| !item.is_bound())
    }

    /// Returns the same instance with its sacks reordered: sack `k` of the
    /// result is sack `order[k]` of `self`.
    pub fn permute_sacks(&self, order: &[usize]) -> Self {
        Self {
            items: self.items.clone(),
            sacks: order.iter().map(|&k| self.sacks[k]).collect(),
        }
    }

    /// Applies the advisory transformations: items fitting no sack are dropped,
    /// and bounds that can never be exhausted become unbounded. The returned
    /// `origin` maps item indices of the new instance back to `self`.
    pub fn normalize(&self) -> Normalized<W, V, C> {
        let largest = self.sacks.iter().copied().max().unwrap_or_else(W::zero);
        let mut items = Vec::with_capacity(self.items.len());
        let mut origin = Vec::with_capacity(self.items.len());
        let mut advisories = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if item.weight > largest {
                let advisory = Advisory::Oversized {
                    item: index,
                    weight: item.weight,
                };
                warn!("{}", advisory);
                advisories.push(advisory);
                continue;
            }
            let mut item = *item;
            if let Availability::Bounded(count) = item.availability {
                if self.never_exhausted(item.weight, count) {
                    let advisory = Advisory::Unbounded { item: index, count };
                    debug!("{}", advisory);
                    advisories.push(advisory);
                    item.availability = Availability::Unbounded;
                }
            }
            items.push(item);
            origin.push(index);
        }
        Normalized {
            problem: Self {
                items,
                sacks: self.sacks.clone(),
            },
            origin,
            advisories,
        }
    }

    // True when `count` units are at least as many as could ever be packed.
    fn never_exhausted(&self, weight: W, count: C) -> bool {
        let fitting = self.fitting(weight);
        match cast::<C, W>(count) {
            Some(count) => count >= fitting,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory<W, C> {
    Oversized { item: usize, weight: W },
    Unbounded { item: usize, count: C },
}

impl<W: fmt::Display, C: fmt::Display> fmt::Display for Advisory<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Oversized { item, weight } => write!(
                f,
                "item {} with weight {} fits into no sack and is ignored",
                item, weight
            ),
            Advisory::Unbounded { item, count } => write!(
                f,
                "item {} is available {} times, at least as many as can ever be packed; treating it as unbounded",
                item, count
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<W, V, C> {
    pub problem: Problem<W, V, C>,
    pub origin: Vec<usize>,
    pub advisories: Vec<Advisory<W, C>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct ItemData<W, V, C> {
    weight: W,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<V>,
    /// Missing means 1, zero means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<C>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct ProblemData<W, V, C> {
    sacks: Vec<W>,
    items: Vec<ItemData<W, V, C>>,
}

impl<W: Weight, V: Value, C: Count> TryFrom<ProblemData<W, V, C>> for Problem<W, V, C> {
    type Error = ModelError;

    fn try_from(data: ProblemData<W, V, C>) -> ModelResult<Self> {
        let items = data
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let availability = Availability::from_count(item.count.unwrap_or_else(C::one));
                Item::new(index, item.weight, item.value, availability)
            })
            .collect::<ModelResult<Vec<_>>>()?;
        Problem::new(data.sacks, items)
    }
}

impl<W: Weight, V: Value, C: Count> From<&Problem<W, V, C>> for ProblemData<W, V, C> {
    fn from(problem: &Problem<W, V, C>) -> Self {
        Self {
            sacks: problem.sacks.clone(),
            items: problem
                .items
                .iter()
                .map(|item| ItemData {
                    weight: item.weight,
                    value: item.explicit_value.then_some(item.value),
                    count: match item.availability {
                        Availability::Bounded(count) if count.is_one() => None,
                        availability => Some(availability.to_count()),
                    },
                })
                .collect(),
        }
    }
}

impl<W, V, C> Serialize for Problem<W, V, C>
where
    W: Weight + Serialize,
    V: Value + Serialize,
    C: Count + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ProblemData::from(self).serialize(serializer)
    }
}

impl<'de, W, V, C> Deserialize<'de> for Problem<W, V, C>
where
    W: Weight + Deserialize<'de>,
    V: Value + Deserialize<'de>,
    C: Count + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = ProblemData::<W, V, C>::deserialize(deserializer)?;
        Problem::try_from(data).map_err(serde::de::Error::custom)
    }
}

/// Contents of one sack: item index to number of units placed.
pub type SackContent<C> = BTreeMap<usize, C>;

/// An optimal value together with the placement achieving it. `sacks` is
/// indexed by the original sack index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution<V, C> {
    pub value: V,
    pub sacks: Vec<SackContent<C>>,
}

impl<V: Value, C: Count> Solution<V, C> {
    pub fn new(num_sacks: usize) -> Self {
        Self {
            value: V::zero(),
            sacks: vec![SackContent::new(); num_sacks],
        }
    }

    pub fn add(&mut self, sack: usize, item: usize) {
        let count = self.sacks[sack].entry(item).or_insert_with(C::zero);
        *count = *count + C::one();
    }

    pub fn count(&self, sack: usize, item: usize) -> C {
        self.sacks
            .get(sack)
            .and_then(|content| content.get(&item))
            .copied()
            .unwrap_or_else(C::zero)
    }

    /// Units of `item` placed over all sacks.
    pub fn item_total(&self, item: usize) -> C {
        self.sacks
            .iter()
            .filter_map(|content| content.get(&item))
            .fold(C::zero(), |acc, &count| acc.saturating_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.sacks.iter().all(|content| content.is_empty())
    }

    /// Rewrites item indices through `origin`, see [`Problem::normalize`].
    pub fn remap_items(&mut self, origin: &[usize]) {
        for content in &mut self.sacks {
            *content = content
                .iter()
                .map(|(&item, &count)| (origin[item], count))
                .collect();
        }
    }
}
