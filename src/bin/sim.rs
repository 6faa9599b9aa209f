use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use unscramble::{
    builtin_words, init_logging_with, AiPlayer, GameConfig, NullListener, SessionController, SessionRunner,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <skill 0..1>", args[0]);
        std::process::exit(1);
    }
    init_logging_with(log::LevelFilter::Warn);
    let seed: u64 = args[1].parse()?;
    let skill: f64 = args[2].parse()?;
    if !(0.0..=1.0).contains(&skill) {
        anyhow::bail!("skill must be between 0 and 1, got {}", skill);
    }

    let words = builtin_words();
    let config = GameConfig::default().without_delays();
    let session_rng = SmallRng::seed_from_u64(seed);
    let mut player_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let (controller, _) =
        SessionController::start(&words, config, session_rng).map_err(|e| anyhow::anyhow!(e))?;
    let order: Vec<String> = controller
        .state()
        .words()
        .iter()
        .map(|w| w.word().to_string())
        .collect();

    let player = AiPlayer::from_entries(&words, skill);
    let mut runner = SessionRunner::new(Box::new(player), controller, Box::new(NullListener));
    let summary = runner.run(&mut player_rng).await?;

    let result = json!({
        "seed": seed,
        "skill": skill,
        "words": order,
        "actions": runner.action_count(),
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
