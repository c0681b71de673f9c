use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::game_engine::{
    errors::ConfigError,
    feasible::{self, DistractorSet},
    models::{Round, RoundConfig, RoundRequest},
};

/// Generate a unique round ID from the request's RNG stream.
fn make_round_id(rng: &mut impl RngCore) -> String {
    format!("RD-{:08X}", rng.next_u32())
}

/// Generate one round from a request.
///
/// Builds a [`StdRng`] from `rng_seed` (entropy when `None`), so the same
/// seed always reproduces the same round.
pub fn generate_round(request: RoundRequest) -> Result<Round, ConfigError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_round_with(&request.config, &mut rng)
}

/// Generate one round with an injected randomness source.
///
/// The configuration is validated over its whole target range first, so the
/// sampling below never faces an empty choice: every target has at least one
/// usable addend split, and every usable split leaves enough distractors.
pub fn generate_round_with<R: Rng>(
    config: &RoundConfig,
    rng: &mut R,
) -> Result<Round, ConfigError> {
    feasible::validate(config)?;

    let round_id = make_round_id(rng);
    let target = rng.gen_range(config.target_min..=config.target_max);

    let splits = feasible::usable_splits(config, target);
    let (a, b) = splits[rng.gen_range(0..splits.len())];

    let mut pool = vec![a, b];
    pool.extend(
        DistractorSet::collect(config, target, a, b).draw(config.distractor_count(), rng),
    );
    feasible::shuffle(&mut pool, rng);

    Ok(Round {
        round_id,
        target,
        addends: (a, b),
        pool,
    })
}
