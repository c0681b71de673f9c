//! End-to-end demo of `sum_match_gen`.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows the full flow a browser client would drive:
//!
//! 1. Generate a round for each preset with a fixed seed (reproducible
//!    output) and print the client JSON payload.
//! 2. Play a scripted session: a wrong pair first, then the correct pair,
//!    then the picks a solved round rejects.
//! 3. Demonstrate that an infeasible configuration fails fast with a
//!    `ConfigError` instead of hanging — including the exact target range
//!    the original prototype looped forever on.

use sum_match_gen::{
    client_adapter, generate_round, GameSession, NoticeStyle, PickEvent, Round, RoundConfig,
    RoundRequest, Theme,
};

/// All unordered position pairs summing to the target.
fn matching_pair(round: &Round) -> (usize, usize) {
    for p in 0..round.pool.len() {
        for q in p + 1..round.pool.len() {
            if round.pool[p] + round.pool[q] == round.target {
                return (p, q);
            }
        }
    }
    unreachable!("generated rounds always contain a matching pair");
}

fn show_pick(session: &mut GameSession, position: usize) {
    let event = session.pick(position).expect("demo picks are in range");
    let label = match &event {
        PickEvent::Selected { .. } => "selected",
        PickEvent::Deselected { .. } => "deselected",
        PickEvent::Rejected { .. } => "rejected",
        PickEvent::Evaluated { .. } => "evaluated",
    };
    println!("  pick {position} -> {label}: {}", event.notice());
}

fn main() {
    // ── Round generation, both presets ───────────────────────────────────
    println!("══ Generated rounds (fixed seeds) ══");
    println!();
    for (config, seed, name) in [
        (RoundConfig::train(), 4004u64, "train"),
        (RoundConfig::classic(), 2002, "classic"),
    ] {
        let round = generate_round(RoundRequest {
            config,
            rng_seed: Some(seed),
        })
        .expect("presets always validate");
        println!(
            "  [{name}] {}  target={}  pool={:?}  addends={:?}",
            round.round_id, round.target, round.pool, round.addends
        );
    }
    println!();

    // ── A full session, story style ──────────────────────────────────────
    println!("══ Scripted session (train theme, story notices) ══");
    println!();
    let round = generate_round(RoundRequest {
        config: RoundConfig::train(),
        rng_seed: Some(4004),
    })
    .unwrap();
    let (p, q) = matching_pair(&round);
    let wrong = (0..round.pool.len()).find(|&i| i != p && i != q).unwrap();

    let mut session = GameSession::new(round, NoticeStyle::Story, Theme::train());
    println!("  {}", session.prompt());

    // Miss first: one addend plus the distractor.
    show_pick(&mut session, p);
    show_pick(&mut session, wrong);
    // Then the correct pair.
    show_pick(&mut session, p);
    show_pick(&mut session, q);
    // A solved round rejects everything until a new round starts.
    show_pick(&mut session, wrong);
    show_pick(&mut session, p);
    println!();

    // ── Client payloads ──────────────────────────────────────────────────
    println!("══ Client JSON payload for the solved round ══");
    println!();
    let payload = client_adapter::round_state(&session);
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
    println!();

    // ── Fail-fast configuration checks ───────────────────────────────────
    println!("══ Infeasible configurations fail fast ══");
    println!();
    let mut hang_case = RoundConfig::classic();
    hang_case.target_min = 5; // the range the original prototype hung on
    for (name, config) in [
        ("original 6-card target range", hang_case),
        (
            "unsplittable target",
            RoundConfig {
                target_min: 2,
                target_max: 2,
                pool_size: 3,
                max_addend: 0,
                distractor_max: 9,
                distractors_below_target: false,
                forbid_distractor_pairs: false,
            },
        ),
    ] {
        match generate_round(RoundRequest::new(config)) {
            Err(err) => println!("  {name}: {err}"),
            Ok(_) => println!("  {name}: unexpectedly generated a round"),
        }
    }
}
