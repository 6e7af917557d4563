//! Poker-logic core for a Hold-Em coaching client.
//!
//! - [`cards`]: cards, card sets, the deck, and hand evaluation
//! - [`ranges`]: shorthand range expansion and combo sampling
//! - [`equity`]: Monte Carlo heads-up equity
//! - [`gameplay`]: the per-street betting state machine and the coaching session
//! - [`players`]: the scripted villain
//! - [`trainer`]: the preflop range drill
pub mod cards;
pub mod equity;
pub mod error;
pub mod gameplay;
pub mod players;
pub mod ranges;
pub mod trainer;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets, and pots in big blinds. Small blind is half of one.
pub type Chips = f32;
/// Pot odds, sampling chances, and equities in [0, 1].
pub type Probability = f32;
/// Equity expressed as a percentage in [0, 100].
pub type Percent = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from a caller-supplied source.
pub trait Arbitrary {
    fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Starting stack size in big blinds.
pub const STACK: Chips = 100.0;
/// Big blind amount.
pub const B_BLIND: Chips = 1.0;
/// Small blind amount.
pub const S_BLIND: Chips = 0.5;
/// Amounts owed below this are treated as nothing owed.
pub const EPSILON: Chips = 1e-6;

// ============================================================================
// SCRIPTED VILLAIN
// One uniform draw r per decision: call if odds are good or r < CALL,
// raise if r > 1 - RAISE and the stack allows, fold otherwise.
// ============================================================================
/// Pot odds below this are always called.
pub const VILLAIN_CALL_ODDS: Probability = 0.25;
/// Baseline chance of calling regardless of price.
pub const VILLAIN_CALL_CHANCE: Probability = 0.30;
/// Chance of raising when not calling.
pub const VILLAIN_RAISE_CHANCE: Probability = 0.10;
/// Villain raises to current bet plus this many last-raise increments.
pub const VILLAIN_RAISE_MULTIPLE: Chips = 2.0;

// ============================================================================
// MONTE CARLO
// ============================================================================
/// Default number of runouts per equity estimate.
pub const EQUITY_ITERATIONS: usize = 1000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
