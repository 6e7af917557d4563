//! Coaching CLI
//!
//! Expands ranges, estimates equity, runs the preflop drill, and plays
//! hands against scripted villains.

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use pokercoach::cards::Card;
use pokercoach::equity::Matchup;
use pokercoach::equity::RangeMatchup;
use pokercoach::gameplay::Event;
use pokercoach::gameplay::Seat;
use pokercoach::gameplay::Session;
use pokercoach::players::Human;
use pokercoach::ranges::Range;
use pokercoach::ranges::RangeBook;
use pokercoach::ranges::Shorthand;
use pokercoach::trainer::Answer;
use pokercoach::trainer::Scenario;
use pokercoach::trainer::Score;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Expand shorthand range tokens into explicit combos", alias = "x")]
    Expand {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    #[command(about = "Print every seat's expanded ranges")]
    Ranges {
        #[arg(long, help = "JSON file of seat -> tokens or category -> tokens")]
        file: Option<std::path::PathBuf>,
    },
    #[command(about = "Estimate heads-up equity", alias = "eq")]
    Equity {
        #[arg(required = true)]
        hero: String,
        #[arg(required = true)]
        villain: String,
        #[arg(default_value = "")]
        board: String,
        #[arg(short, long, default_value_t = pokercoach::EQUITY_ITERATIONS)]
        iterations: usize,
        #[arg(long, help = "treat hero and villain as range tokens, comma separated")]
        ranges: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Drill preflop opening ranges")]
    Train {
        #[arg(long)]
        file: Option<std::path::PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Play hands against scripted villains")]
    Play {
        #[arg(long, help = "UTG, MP, CO, BTN, SB, or BB; random if omitted")]
        seat: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    pokercoach::log()?;
    match Command::parse() {
        Command::Expand { tokens } => expand(&tokens),
        Command::Ranges { file } => ranges(book(file)?),
        Command::Equity {
            hero,
            villain,
            board,
            iterations,
            ranges,
            seed,
        } => equity(&hero, &villain, &board, iterations, ranges, &mut rng(seed)),
        Command::Train { file, seed } => train(book(file)?, &mut rng(seed)),
        Command::Play { seat, seed } => play(seat, &mut rng(seed)),
    }
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

fn book(file: Option<std::path::PathBuf>) -> anyhow::Result<RangeBook> {
    let shorthand = match file {
        Some(path) => serde_json::from_str::<Shorthand>(&std::fs::read_to_string(path)?)?,
        None => Shorthand::six_max(),
    };
    Ok(RangeBook::expand_all(&shorthand))
}

fn expand(tokens: &[String]) -> anyhow::Result<()> {
    let range = Range::from_tokens(tokens);
    println!("{}", range);
    println!("{} classes, {} combos", range.len(), range.n_combos());
    Ok(())
}

fn ranges(book: RangeBook) -> anyhow::Result<()> {
    for name in book.names() {
        for (category, range) in book.categories(name) {
            println!("{:<4} {:<6} {:>4} combos  {}", name.bold(), category, range.n_combos(), range);
        }
    }
    Ok(())
}

fn equity(hero: &str, villain: &str, board: &str, iterations: usize, ranges: bool, rng: &mut SmallRng) -> anyhow::Result<()> {
    let report = match ranges {
        true => {
            let tokens = |s: &str| Range::from_tokens(&s.split(',').collect::<Vec<_>>());
            RangeMatchup::new(tokens(hero), tokens(villain), &Card::parse(board)?)?.simulate(iterations, rng)?
        }
        false => Matchup::try_from((hero, villain, board))?.simulate(iterations, rng)?,
    };
    println!("{}", report);
    Ok(())
}

fn train(book: RangeBook, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut score = Score::default();
    loop {
        let scenario = Scenario::random(&book, rng)?;
        let labels = Answer::ALL.iter().map(Answer::to_string).collect::<Vec<_>>();
        let choices = labels.iter().map(String::as_str).chain(std::iter::once("quit")).collect::<Vec<_>>();
        let selection = Select::new()
            .with_prompt(scenario.to_string())
            .items(choices.as_slice())
            .default(0)
            .interact()?;
        let Some(answer) = Answer::ALL.get(selection).copied() else {
            println!("score {}", score);
            return Ok(());
        };
        let correct = scenario.grade(answer);
        score.record(correct);
        match correct {
            true => println!("{} ({})", "correct".green(), score),
            false => println!("{} correct is {} ({})", "wrong".red(), scenario.correct(), score),
        }
    }
}

fn play(seat: Option<String>, rng: &mut SmallRng) -> anyhow::Result<()> {
    use rand::seq::IndexedRandom;
    loop {
        let hero = match seat.as_deref() {
            Some(seat) => Seat::try_from(seat)?,
            None => *Seat::ALL.choose(rng).unwrap_or(&Seat::BTN),
        };
        let (mut session, events) = Session::deal(hero, rng)?;
        println!("{}", format!("You're in {} with {}", hero, session.hole()).bold());
        show(&events);
        while !session.is_over() {
            let action = Human.act(session.state(), session.stacks(), hero, session.hole())?;
            match session.act(action, rng) {
                Ok((next, events)) => {
                    show(&events);
                    session = next;
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        }
        let again = Select::new()
            .with_prompt("Another hand?")
            .items(&["yes", "no"])
            .default(0)
            .interact()?;
        if again == 1 {
            return Ok(());
        }
    }
}

fn show(events: &[Event]) {
    for event in events {
        match event {
            Event::Villain { .. } => println!("{}", event.to_string().dimmed()),
            Event::Street { .. } => println!("{}", event.to_string().cyan()),
            Event::Won { .. } => println!("{}", event.to_string().green()),
            Event::Folded { .. } | Event::Showdown { .. } => println!("{}", event.to_string().bold()),
            Event::Prompt { .. } => println!("{}", event),
        }
    }
}
