//! Feasible-set computation and sampling.
//!
//! The source prototypes drew addends and distractors with unbounded
//! rejection loops and hung whenever the acceptance set was empty. Here the
//! finite acceptance sets are computed up front: [`validate`] rejects a
//! configuration before any round starts, and [`DistractorSet::draw`] samples
//! without replacement, so generation always terminates.

use rand::Rng;

use crate::game_engine::errors::ConfigError;
use crate::game_engine::models::RoundConfig;

/// All addend splits `(a, b)` with `a <= b`, `a + b = target`, and both
/// addends in `1..=max_addend`.
pub fn feasible_splits(target: u32, max_addend: u32) -> Vec<(u32, u32)> {
    (1..=target / 2)
        .map(|a| (a, target - a))
        .filter(|&(_, b)| b <= max_addend)
        .collect()
}

/// The finite set of distractor values acceptable next to a given addend
/// split. Candidates are drawn from it without replacement.
#[derive(Debug, Clone)]
pub struct DistractorSet {
    values: Vec<u32>,
    target: u32,
    forbid_pairs: bool,
}

impl DistractorSet {
    /// Collect every value in `1..=distractor_max` that is not an addend,
    /// not the target itself, cannot complete the target with either addend
    /// (implied by not being an addend, since `target - a = b`), and — when
    /// configured — lies strictly below the target.
    pub fn collect(config: &RoundConfig, target: u32, a: u32, b: u32) -> Self {
        let values = (1..=config.distractor_max)
            .filter(|&d| d != a && d != b && d != target)
            .filter(|&d| !config.distractors_below_target || d < target)
            .collect();
        DistractorSet {
            values,
            target,
            forbid_pairs: config.forbid_distractor_pairs,
        }
    }

    /// How many distractors can be drawn from this set.
    ///
    /// When distractor pairs are forbidden, each complementary pair
    /// `{d, target - d}` inside the set yields only one card, so capacity is
    /// the set size minus the number of such pairs.
    pub fn capacity(&self) -> usize {
        if !self.forbid_pairs {
            return self.values.len();
        }
        let pairs = self
            .values
            .iter()
            .filter(|&&lo| {
                let hi = self.target.saturating_sub(lo);
                hi > lo && self.values.contains(&hi)
            })
            .count();
        self.values.len() - pairs
    }

    /// Draw `n` distractors uniformly without replacement.
    ///
    /// When pairs are forbidden, drawing `d` also removes `target - d` from
    /// the remaining candidates. Callers must have checked
    /// `capacity() >= n`; each draw lowers capacity by exactly one, so the
    /// candidate list can never run dry mid-draw.
    pub fn draw<R: Rng>(mut self, n: usize, rng: &mut R) -> Vec<u32> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = rng.gen_range(0..self.values.len());
            let d = self.values.swap_remove(idx);
            if self.forbid_pairs && self.target > d {
                let partner = self.target - d;
                if let Some(pos) = self.values.iter().position(|&v| v == partner) {
                    self.values.swap_remove(pos);
                }
            }
            drawn.push(d);
        }
        drawn
    }

    /// Candidate values still in the set.
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

/// Addend splits for `target` that leave enough distractors to fill the pool.
pub fn usable_splits(config: &RoundConfig, target: u32) -> Vec<(u32, u32)> {
    feasible_splits(target, config.max_addend)
        .into_iter()
        .filter(|&(a, b)| {
            DistractorSet::collect(config, target, a, b).capacity() >= config.distractor_count()
        })
        .collect()
}

/// Check a configuration against every target it can draw.
///
/// Fails fast with the first reason generation could not complete: an empty
/// or too-low target range, a pool without room for the addend pair, a target
/// with no in-bounds addend split, or a target whose best split still cannot
/// supply `pool_size - 2` distractors.
pub fn validate(config: &RoundConfig) -> Result<(), ConfigError> {
    if config.target_min > config.target_max {
        return Err(ConfigError::EmptyTargetRange {
            min: config.target_min,
            max: config.target_max,
        });
    }
    if config.target_min < 2 {
        return Err(ConfigError::TargetTooSmall(config.target_min));
    }
    if config.pool_size < 2 {
        return Err(ConfigError::PoolTooSmall(config.pool_size));
    }

    let needed = config.distractor_count();
    for target in config.target_min..=config.target_max {
        let splits = feasible_splits(target, config.max_addend);
        if splits.is_empty() {
            return Err(ConfigError::NoFeasibleSplit {
                target,
                max_addend: config.max_addend,
            });
        }
        let best = splits
            .iter()
            .map(|&(a, b)| DistractorSet::collect(config, target, a, b).capacity())
            .max()
            .unwrap_or(0);
        if best < needed {
            return Err(ConfigError::NotEnoughDistractors {
                target,
                needed,
                available: best,
            });
        }
    }
    Ok(())
}

/// In-place Fisher-Yates shuffle: a uniform random permutation, unlike the
/// random-comparator sort the source prototypes used.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn splits_cover_all_in_bounds_pairs() {
        assert_eq!(feasible_splits(7, 9), vec![(1, 6), (2, 5), (3, 4)]);
        assert_eq!(feasible_splits(7, 4), vec![(3, 4)]);
        assert_eq!(feasible_splits(2, 7), vec![(1, 1)]);
        assert!(feasible_splits(2, 0).is_empty());
    }

    #[test]
    fn capacity_counts_complementary_pairs_once() {
        let mut config = RoundConfig::train();
        config.distractor_max = 9;
        // target 7, split (3,4): candidates {1,2,5,6,8,9}; pairs (1,6),(2,5).
        let set = DistractorSet::collect(&config, 7, 3, 4);
        assert_eq!(set.values(), &[1, 2, 5, 6, 8, 9]);
        assert_eq!(set.capacity(), 4);

        config.forbid_distractor_pairs = false;
        let set = DistractorSet::collect(&config, 7, 3, 4);
        assert_eq!(set.capacity(), 6);
    }

    #[test]
    fn draw_never_yields_a_complementary_pair() {
        let mut config = RoundConfig::train();
        config.distractor_max = 9;
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = DistractorSet::collect(&config, 7, 3, 4);
            let n = set.capacity();
            let drawn = set.draw(n, &mut rng);
            assert_eq!(drawn.len(), n);
            for (i, &d) in drawn.iter().enumerate() {
                for &e in &drawn[i + 1..] {
                    assert_ne!(d + e, 7, "distractors {d} and {e} sum to the target");
                    assert_ne!(d, e, "distractor {d} drawn twice");
                }
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = vec![3u32, 4, 2, 9, 9, 1];
        for _ in 0..50 {
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);
            let mut a = original.clone();
            let mut b = shuffled.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "shuffle changed the multiset of values");
        }
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut values: Vec<u32> = (1..=20).collect();
            shuffle(&mut values, &mut rng);
            values
        };
        assert_eq!(make(7), make(7));
        assert_ne!(make(7), make(8));
    }

    #[test]
    fn presets_pass_validation() {
        assert_eq!(validate(&RoundConfig::classic()), Ok(()));
        assert_eq!(validate(&RoundConfig::train()), Ok(()));
    }
}
