use std::{fs, path::PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yahtzee_odds::{
    decide, Category, ExpectedScoreEngine, FeatureConfig, MatrixPowerCache, ProbabilityEngine,
    Scorecard,
};

/// Ad hoc driver: one turn's keep decision and feature vectors for a fresh scorecard.
#[derive(Debug, Parser)]
#[command(name = "yahtzee-odds")]
struct Args {
    /// rolled dice, e.g. 1,2,3,1,5
    #[arg(long, value_delimiter = ',', num_args = 1..=5, required = true)]
    dice: Vec<u8>,

    /// dice already set aside this turn
    #[arg(long, value_delimiter = ',')]
    withheld: Vec<u8>,

    /// box to chase, e.g. full_house
    #[arg(long, default_value = "chance")]
    target: Category,

    #[arg(long, default_value_t = 2)]
    rolls: u32,

    /// JSON file overriding the feature normalisation constants
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config: FeatureConfig = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => FeatureConfig::default(),
    };

    let cache = MatrixPowerCache::new(args.rolls.max(1));
    let probs = ProbabilityEngine::new(&cache);
    let features = ExpectedScoreEngine::new(probs, config);
    let card = Scorecard::new();

    let decision = decide(&args.dice, &args.withheld, args.target)?;
    let in_play: Vec<u8> = args.dice.iter().chain(&args.withheld).copied().collect();
    let p = probs.category_probability(args.target, &in_play, args.rolls);
    info!(target = %args.target, probability = p, "target odds");

    println!("{}", serde_json::to_string_pretty(&decision)?);
    let observation = features.observe(&in_play, &card, args.rolls);
    println!("{}", serde_json::to_string_pretty(&observation)?);
    Ok(())
}
