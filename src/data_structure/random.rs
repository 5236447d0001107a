use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data_structure::link_list::{InsertOrder, LinkList};
use crate::error::Result;

/// Values drawn for randomly populated lists.
pub const VALUE_RANGE: RangeInclusive<i32> = 1..=100;

/// Yields `count` values drawn uniformly from [`VALUE_RANGE`].
pub fn random_values<R: Rng>(rng: &mut R, count: usize) -> impl Iterator<Item = i32> + '_ {
    (0..count).map(move |_| rng.gen_range(VALUE_RANGE))
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

impl LinkList<i32> {
    /// Builds a list of `count` random values taken from `rng`.
    pub fn random<R: Rng>(count: usize, order: InsertOrder, rng: &mut R) -> Result<Self> {
        LinkList::from_values(random_values(rng, count), order)
    }
}
