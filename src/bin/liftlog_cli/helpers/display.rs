// ABOUTME: Output formatting helpers for the liftlog CLI
// ABOUTME: Human-readable tables for stats, plans and sessions plus a JSON printer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use liftlog::{
    errors::AppResult,
    intelligence::{DerivedStats, LeaderboardEntry},
    models::{CoinBalance, PlannedExercise, WorkoutSession, WorkoutType},
    planner::{DayOfWeek, DaySlot, WeeklyPlan},
    session_recorder::RecordedSession,
};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display derived statistics for one user
pub fn display_stats(user: &str, stats: &DerivedStats, window_days: i64) {
    let profile = &stats.profile;
    println!("Statistics for {user}");
    println!("{}", "=".repeat(60));
    println!("   Total workouts:      {}", profile.total_workouts);
    println!("   Last {window_days} days:         {}", profile.this_week_count);
    match profile.favorite() {
        Some((name, count)) => println!("   Favorite exercise:   {name} ({count}x)"),
        None => println!("   Favorite exercise:   -"),
    }
    println!("   Total weight moved:  {:.1}", profile.total_weight_moved);
    println!("   Total minutes:       {}", profile.total_minutes);
    println!("   Total distance:      {:.2}", profile.total_distance);

    println!("\nPersonal bests:");
    if stats.personal_bests.is_empty() {
        println!("   (none yet)");
    }
    for (exercise, best) in stats.personal_bests.iter() {
        println!(
            "   {exercise:<24} {:>8.1}  ({})",
            best.weight,
            best.achieved_at.format("%Y-%m-%d")
        );
    }

    println!("\nMuscle split:");
    for (group, count) in stats.muscle_split.iter() {
        println!("   {:<12} {count}", group.label());
    }
}

/// Display the leaderboard, marking the acting user
pub fn display_leaderboard(ranking: &[LeaderboardEntry], current_user: Option<&str>) {
    if ranking.is_empty() {
        println!("No workouts logged yet");
        return;
    }
    for (position, entry) in ranking.iter().enumerate() {
        let marker = if current_user == Some(entry.email.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker}{:>3}. {:<24} {}",
            position + 1,
            entry.display_label,
            entry.session_count
        );
    }
}

/// Display a coin balance
pub fn display_coins(user: &str, balance: CoinBalance) {
    println!("{user}: {balance}");
}

/// Display the result of recording a session
pub fn display_recorded(session: &WorkoutSession, recorded: &RecordedSession, reward: u64) {
    println!(
        "Logged {} exercise(s) for {}",
        recorded.entry_ids.len(),
        session.user_email
    );
    for (exercise, id) in session.exercises.iter().zip(&recorded.entry_ids) {
        println!("   {id}  {}", exercise.name());
    }
    println!("+{reward} coins, balance {}", recorded.balance);
}

/// Display all seven days of a plan
pub fn display_plan(plan: &WeeklyPlan) {
    for (day, slot) in plan.days() {
        display_slot(day, slot);
    }
}

/// Display one day slot
pub fn display_slot(day: DayOfWeek, slot: &DaySlot) {
    if slot.is_rest_day() {
        println!("{day}: rest");
        return;
    }
    println!("{day}: {}", slot.workout_type);
    if slot.exercises.is_empty() {
        println!("   (no exercises planned)");
    }
    for (index, exercise) in slot.exercises.iter().enumerate() {
        println!("   [{index}] {}", describe_planned(exercise));
    }
}

fn describe_planned(exercise: &PlannedExercise) -> String {
    let fmt_u32 = |value: Option<u32>| value.map_or_else(|| "?".to_owned(), |v| v.to_string());
    let fmt_f64 = |value: Option<f64>| value.map_or_else(|| "?".to_owned(), |v| format!("{v}"));
    match exercise.workout_type {
        WorkoutType::Strength => format!(
            "{} {}x{} @ {}",
            exercise.name,
            fmt_u32(exercise.sets),
            fmt_u32(exercise.reps),
            fmt_f64(exercise.weight)
        ),
        WorkoutType::Cardio => {
            let distance = exercise
                .distance
                .map_or_else(String::new, |d| format!(", {d} km"));
            format!("{} {} min{distance}", exercise.name, fmt_u32(exercise.minutes))
        }
        WorkoutType::Stretch => {
            format!("{} {} min", exercise.name, fmt_u32(exercise.minutes))
        }
    }
}
