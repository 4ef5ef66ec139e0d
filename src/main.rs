//! Live totals CLI - over/under estimation from the command line.
//!
//! Replaces a scoreboard entry form: each invocation takes one snapshot of
//! game state as flags and prints one projection.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use totals_core::{parse_clock, project_final_total, project_halftime_total, GameState};
use tracing::debug;

#[derive(Parser)]
#[command(name = "live-totals")]
#[command(about = "Project a live tournament game's combined point total")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit the report as JSON instead of a one-line summary
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Project the full-game combined total
    Final(StateArgs),
    /// Project the combined total at halftime
    Halftime(StateArgs),
}

#[derive(Args)]
struct StateArgs {
    /// Team A score
    #[arg(long, default_value_t = 50)]
    score_a: u32,

    /// Team B score
    #[arg(long, default_value_t = 50)]
    score_b: u32,

    /// Game clock for the current half, as minutes:seconds
    #[arg(long, default_value = "20:00")]
    clock: String,

    /// Team A fouls
    #[arg(long, default_value_t = 5)]
    fouls_a: u32,

    /// Team B fouls
    #[arg(long, default_value_t = 5)]
    fouls_b: u32,

    /// Team A is in the foul-shooting bonus
    #[arg(long)]
    bonus_a: bool,

    /// Team B is in the foul-shooting bonus
    #[arg(long)]
    bonus_b: bool,

    /// Team A timeouts remaining
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=5))]
    timeouts_a: u8,

    /// Team B timeouts remaining
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=5))]
    timeouts_b: u8,

    /// Team A tournament seed
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16))]
    seed_a: u8,

    /// Team B tournament seed
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u8).range(1..=16))]
    seed_b: u8,

    /// Tournament round
    #[arg(long, value_enum, default_value = "first-round")]
    round: Round,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Round {
    FirstRound,
    SecondRound,
    SweetSixteen,
    EliteEight,
    FinalFour,
    Championship,
}

impl Round {
    fn number(self) -> u8 {
        match self {
            Round::FirstRound => 1,
            Round::SecondRound => 2,
            Round::SweetSixteen => 3,
            Round::EliteEight => 4,
            Round::FinalFour => 5,
            Round::Championship => 6,
        }
    }
}

impl StateArgs {
    fn to_state(&self) -> GameState {
        GameState {
            score_a: self.score_a,
            score_b: self.score_b,
            time_left: parse_clock(&self.clock),
            fouls_a: self.fouls_a,
            fouls_b: self.fouls_b,
            bonus_a: self.bonus_a,
            bonus_b: self.bonus_b,
            timeouts_a: self.timeouts_a,
            timeouts_b: self.timeouts_b,
            seed_a: self.seed_a,
            seed_b: self.seed_b,
            round: self.round.number(),
        }
    }
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Model {
    Final,
    Halftime,
}

impl Model {
    fn label(self) -> &'static str {
        match self {
            Model::Final => "Full Game Projected Over/Under",
            Model::Halftime => "Projected Halftime Score",
        }
    }

    fn project(self, state: &GameState) -> f64 {
        match self {
            Model::Final => project_final_total(state),
            Model::Halftime => project_halftime_total(state),
        }
    }
}

#[derive(Serialize)]
struct Report {
    model: Model,
    state: GameState,
    projected_total: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet by default, debug with --verbose.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Command::Final(args) => run(args, Model::Final, cli.json),
        Command::Halftime(args) => run(args, Model::Halftime, cli.json),
    }
}

fn run(args: &StateArgs, model: Model, json: bool) -> Result<()> {
    let state = args.to_state();
    state.validate()?;
    debug!(?state, "projecting from snapshot");

    let projected_total = model.project(&state);

    if json {
        let report = Report { model, state, projected_total };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {:.1}", model.label(), projected_total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_round_numbers_cover_bracket() {
        assert_eq!(Round::FirstRound.number(), 1);
        assert_eq!(Round::SecondRound.number(), 2);
        assert_eq!(Round::SweetSixteen.number(), 3);
        assert_eq!(Round::EliteEight.number(), 4);
        assert_eq!(Round::FinalFour.number(), 5);
        assert_eq!(Round::Championship.number(), 6);
    }

    #[test]
    fn test_args_map_to_state() {
        let cli = Cli::parse_from([
            "live-totals",
            "final",
            "--score-a",
            "61",
            "--score-b",
            "58",
            "--clock",
            "3:30",
            "--bonus-a",
            "--timeouts-b",
            "1",
            "--seed-b",
            "12",
            "--round",
            "elite-eight",
        ]);

        let Command::Final(args) = &cli.command else {
            panic!("expected the final subcommand");
        };
        let state = args.to_state();

        assert_eq!(state.score_a, 61);
        assert_eq!(state.score_b, 58);
        assert_eq!(state.time_left, 3.5);
        assert!(state.bonus_a);
        assert!(!state.bonus_b);
        assert_eq!(state.timeouts_a, 3);
        assert_eq!(state.timeouts_b, 1);
        assert_eq!(state.seed_b, 12);
        assert_eq!(state.round, 4);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_default_args_match_form_defaults() {
        let cli = Cli::parse_from(["live-totals", "halftime"]);
        let Command::Halftime(args) = &cli.command else {
            panic!("expected the halftime subcommand");
        };
        assert_eq!(args.to_state(), GameState::default());
    }
}
