// ABOUTME: Liftlog CLI - log workouts, view statistics and edit the weekly plan
// ABOUTME: Parses commands with clap and runs them against the configured storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
//!
//! Usage:
//! ```bash
//! # Log a strength exercise
//! liftlog --user ana@example.com log strength "Bench Press" --sets 3 --reps 10 --weight 60
//!
//! # Log a run with distance
//! liftlog --user ana@example.com log cardio Running --minutes 30 --distance 5
//!
//! # Show derived statistics
//! liftlog --user ana@example.com stats
//!
//! # Plan Monday as a strength day with squats
//! liftlog --user ana@example.com plan toggle monday
//! liftlog --user ana@example.com plan add monday Squat --sets 3 --reps 10 --weight 50
//!
//! # Record today's planned session
//! liftlog --user ana@example.com log today
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use liftlog::{
    config::LiftlogConfig,
    database_plugins::Database,
    errors::{AppError, ErrorResponse},
    logging::LoggingConfig,
    models::{PlannedExercise, WorkoutType},
    planner::DayOfWeek,
};
use tracing::{debug, error};
use uuid::Uuid;

use commands::CommandContext;

#[derive(Parser)]
#[command(
    name = "liftlog",
    about = "Personal workout log with statistics and a weekly planner",
    long_about = "Record strength, cardio and stretch sessions, view personal bests and muscle split, \
                  compare on the leaderboard, and plan the week."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Acting user email (defaults to LIFTLOG_USER)
    #[arg(long, short = 'u', global = true)]
    user: Option<String>,

    /// Storage URL override (memory: or file:<path>)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show personal bests, muscle split and profile summary
    Stats {
        /// Trailing window in days for the weekly count
        #[arg(long)]
        window_days: Option<u32>,
    },

    /// Show entry counts across all users
    Leaderboard,

    /// Record a workout session
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Delete a log entry by id
    Delete {
        /// Entry id
        id: Uuid,
    },

    /// Show the coin balance
    Coins,

    /// Set the display name and picture shown on the leaderboard
    Profile {
        /// Display name
        #[arg(long)]
        display_name: Option<String>,

        /// Profile picture URL
        #[arg(long)]
        picture_url: Option<String>,
    },

    /// Weekly plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Log a strength exercise
    Strength {
        /// Exercise name
        name: String,

        /// Number of sets
        #[arg(long)]
        sets: u32,

        /// Repetitions per set
        #[arg(long)]
        reps: u32,

        /// Load in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Log a cardio exercise
    Cardio {
        /// Exercise name
        name: String,

        /// Duration in minutes
        #[arg(long)]
        minutes: u32,

        /// Distance in kilometers
        #[arg(long)]
        distance: Option<f64>,
    },

    /// Log a stretch
    Stretch {
        /// Exercise name
        name: String,

        /// Duration in minutes
        #[arg(long)]
        minutes: u32,
    },

    /// Log every exercise planned for today
    Today,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Show the whole week
    Show,

    /// Show today's slot
    Today,

    /// Switch a day between rest and workout
    Toggle {
        /// Day name (monday..sunday)
        day: DayOfWeek,
    },

    /// Set a day's workout type
    Type {
        /// Day name
        day: DayOfWeek,

        /// strength, cardio or stretch
        workout_type: WorkoutType,
    },

    /// Add a planned exercise to a workout day
    Add {
        /// Day name
        day: DayOfWeek,

        #[command(flatten)]
        exercise: PlannedExerciseArgs,
    },

    /// Replace the planned exercise at an index
    Update {
        /// Day name
        day: DayOfWeek,

        /// Zero-based position in the day's list
        index: usize,

        #[command(flatten)]
        exercise: PlannedExerciseArgs,
    },

    /// Remove the planned exercise at an index
    Remove {
        /// Day name
        day: DayOfWeek,

        /// Zero-based position in the day's list
        index: usize,
    },

    /// Replace the saved plan with the default week
    SaveDefault,
}

/// Planned exercise fields; which are required depends on the type
#[derive(Args)]
struct PlannedExerciseArgs {
    /// Exercise name
    name: String,

    /// strength, cardio or stretch (defaults to the day's type)
    #[arg(long = "type")]
    workout_type: Option<WorkoutType>,

    /// Number of sets
    #[arg(long)]
    sets: Option<u32>,

    /// Repetitions per set
    #[arg(long)]
    reps: Option<u32>,

    /// Load in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Duration in minutes
    #[arg(long)]
    minutes: Option<u32>,

    /// Distance in kilometers
    #[arg(long)]
    distance: Option<f64>,
}

impl PlannedExerciseArgs {
    fn into_planned(self, day_type: WorkoutType) -> PlannedExercise {
        PlannedExercise {
            name: self.name,
            workout_type: self.workout_type.unwrap_or(day_type),
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            minutes: self.minutes,
            distance: self.distance,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json = cli.json;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            match e.downcast::<AppError>() {
                Ok(app) => {
                    let code = app.code.exit_code();
                    report_app_error(app, json);
                    ExitCode::from(code)
                }
                Err(other) => {
                    eprintln!("Error: {other:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn report_app_error(error: AppError, json: bool) {
    if !json {
        eprintln!("Error: {error}");
        return;
    }
    match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
        Ok(body) => println!("{body}"),
        Err(e) => eprintln!("Error: failed to serialize error response: {e}"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = LiftlogConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    debug!(database_url = %config.database_url, "Opening storage");
    let database = Database::new(&config.database_url).await?;

    let user = cli.user.or_else(|| config.default_user.clone());
    let ctx = CommandContext::new(database, config, user, cli.json);

    match cli.command {
        Command::Stats { window_days } => commands::stats::stats(&ctx, window_days).await?,
        Command::Leaderboard => commands::stats::leaderboard(&ctx).await?,
        Command::Log { action } => match action {
            LogCommand::Strength {
                name,
                sets,
                reps,
                weight,
            } => commands::log::strength(&ctx, name, sets, reps, weight).await?,
            LogCommand::Cardio {
                name,
                minutes,
                distance,
            } => commands::log::cardio(&ctx, name, minutes, distance).await?,
            LogCommand::Stretch { name, minutes } => {
                commands::log::stretch(&ctx, name, minutes).await?;
            }
            LogCommand::Today => commands::log::today(&ctx).await?,
        },
        Command::Delete { id } => commands::log::delete(&ctx, id).await?,
        Command::Coins => commands::stats::coins(&ctx).await?,
        Command::Profile {
            display_name,
            picture_url,
        } => commands::stats::profile(&ctx, display_name, picture_url).await?,
        Command::Plan { action } => match action {
            PlanCommand::Show => commands::plan::show(&ctx).await?,
            PlanCommand::Today => commands::plan::today(&ctx).await?,
            PlanCommand::Toggle { day } => commands::plan::toggle(&ctx, day).await?,
            PlanCommand::Type { day, workout_type } => {
                commands::plan::set_type(&ctx, day, workout_type).await?;
            }
            PlanCommand::Add { day, exercise } => {
                commands::plan::add(&ctx, day, |day_type| exercise.into_planned(day_type))
                    .await?;
            }
            PlanCommand::Update {
                day,
                index,
                exercise,
            } => {
                commands::plan::update(&ctx, day, index, |day_type| {
                    exercise.into_planned(day_type)
                })
                .await?;
            }
            PlanCommand::Remove { day, index } => commands::plan::remove(&ctx, day, index).await?,
            PlanCommand::SaveDefault => commands::plan::save_default(&ctx).await?,
        },
    }

    Ok(())
}
