// ABOUTME: Integration tests for the exercise taxonomy and exercise validation
// ABOUTME: Tests required-field rules, session encoding into log entries and muscle group lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{test_now, ALICE};
use liftlog::models::{
    CoinBalance, EntryMetrics, ExerciseEntry, ExerciseTaxonomy, MuscleGroup, PlannedExercise,
    TaxonomyEntry, WorkoutLogEntry, WorkoutSession, WorkoutType,
};
use liftlog_core::errors::ValidationError;

#[test]
fn test_standard_taxonomy_covers_every_type() {
    let taxonomy = ExerciseTaxonomy::standard();

    assert!(!taxonomy.is_empty());
    for workout_type in WorkoutType::ALL {
        assert!(taxonomy.exercises_for(workout_type).count() > 0);
    }
    assert!(taxonomy
        .exercises_for(WorkoutType::Cardio)
        .all(|entry| entry.muscle_group == MuscleGroup::Cardio));
    assert!(taxonomy
        .exercises_for(WorkoutType::Stretch)
        .all(|entry| entry.muscle_group == MuscleGroup::Flexibility));
}

#[test]
fn test_muscle_group_lookup_ignores_case_and_whitespace() {
    let taxonomy = ExerciseTaxonomy::standard();

    assert_eq!(
        taxonomy.muscle_group_for(WorkoutType::Strength, "  bench press "),
        MuscleGroup::Chest
    );
    assert_eq!(
        taxonomy.muscle_group_for(WorkoutType::Strength, "Deadlift"),
        MuscleGroup::Back
    );
    assert_eq!(
        taxonomy.find("RUNNING").map(|entry| entry.workout_type),
        Some(WorkoutType::Cardio)
    );
}

#[test]
fn test_unknown_exercise_falls_back_to_other() {
    let taxonomy = ExerciseTaxonomy::standard();

    let group = taxonomy.muscle_group_for(WorkoutType::Strength, "Tire Flip");

    assert_eq!(group, MuscleGroup::default());
    assert_eq!(group.label(), "Other");
}

#[test]
fn test_unknown_timed_exercise_uses_type_bucket() {
    let taxonomy = ExerciseTaxonomy::standard();

    assert_eq!(
        taxonomy.muscle_group_for(WorkoutType::Cardio, "Hiking"),
        MuscleGroup::Cardio
    );
    assert_eq!(
        taxonomy.muscle_group_for(WorkoutType::Stretch, "Pigeon Pose"),
        MuscleGroup::Flexibility
    );
    // known name under the wrong type is not a match
    assert_eq!(
        taxonomy.muscle_group_for(WorkoutType::Cardio, "Squat"),
        MuscleGroup::Cardio
    );
}

#[test]
fn test_custom_taxonomy_ignores_duplicates() {
    let entry = TaxonomyEntry {
        name: "Kettlebell Swing".to_owned(),
        muscle_group: MuscleGroup::Legs,
        workout_type: WorkoutType::Strength,
    };
    let duplicate = TaxonomyEntry {
        name: "kettlebell swing".to_owned(),
        muscle_group: MuscleGroup::Back,
        workout_type: WorkoutType::Strength,
    };

    let taxonomy = ExerciseTaxonomy::from_entries([entry, duplicate]);

    assert_eq!(taxonomy.len(), 1);
    assert_eq!(
        taxonomy.muscle_group_for(WorkoutType::Strength, "Kettlebell Swing"),
        MuscleGroup::Legs
    );
}

#[test]
fn test_required_fields_per_type() {
    let missing_weight = PlannedExercise {
        weight: None,
        ..PlannedExercise::strength("Squat", 3, 10, 50.0)
    };
    assert_eq!(
        missing_weight.validate().unwrap_err(),
        ValidationError::MissingField {
            exercise: "Squat".to_owned(),
            workout_type: WorkoutType::Strength,
            field: "weight",
        }
    );

    let cardio_without_minutes = PlannedExercise::new("Running", WorkoutType::Cardio);
    assert!(matches!(
        cardio_without_minutes.validate(),
        Err(ValidationError::MissingField {
            field: "minutes",
            ..
        })
    ));

    assert!(PlannedExercise::cardio("Running", 30, None).validate().is_ok());
    assert!(PlannedExercise::stretch("Cat-Cow", 5).validate().is_ok());
}

#[test]
fn test_extra_fields_are_ignored_for_the_type() {
    let stretch_with_weight = PlannedExercise {
        weight: Some(20.0),
        sets: Some(2),
        ..PlannedExercise::stretch("Yoga Flow", 15)
    };

    let entry = ExerciseEntry::try_from(&stretch_with_weight).unwrap();

    assert_eq!(
        entry,
        ExerciseEntry::Stretch {
            name: "Yoga Flow".to_owned(),
            minutes: 15
        }
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    let negative = PlannedExercise::strength("Squat", 3, 10, -5.0);
    assert!(matches!(
        negative.validate(),
        Err(ValidationError::InvalidValue {
            field: "weight",
            ..
        })
    ));

    let nan_distance = PlannedExercise::cardio("Running", 30, Some(f64::NAN));
    assert!(matches!(
        nan_distance.validate(),
        Err(ValidationError::InvalidValue {
            field: "distance",
            ..
        })
    ));

    let blank = PlannedExercise::stretch("   ", 5);
    assert_eq!(blank.validate().unwrap_err(), ValidationError::EmptyName);
}

#[test]
fn test_exercise_entry_wire_format_is_tagged() {
    let entry = ExerciseEntry::Cardio {
        name: "Rowing".to_owned(),
        minutes: 20,
        distance: Some(4.0),
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "cardio");
    assert_eq!(json["minutes"], 20);

    let parsed: ExerciseEntry =
        serde_json::from_str(r#"{"type":"stretch","name":"Cat-Cow","minutes":5}"#).unwrap();
    assert_eq!(parsed.workout_type(), WorkoutType::Stretch);
    assert_eq!(PlannedExercise::from(&parsed).minutes, Some(5));
}

#[test]
fn test_session_encodes_overloaded_fields() {
    let session = WorkoutSession::new(ALICE)
        .with_exercise(ExerciseEntry::Strength {
            name: "Bench Press".to_owned(),
            sets: 3,
            reps: 8,
            weight: 70.0,
        })
        .with_exercise(ExerciseEntry::Cardio {
            name: "Running".to_owned(),
            minutes: 30,
            distance: Some(5.0),
        })
        .with_exercise(ExerciseEntry::Cardio {
            name: "Cycling".to_owned(),
            minutes: 40,
            distance: None,
        })
        .with_exercise(ExerciseEntry::Stretch {
            name: "Cat-Cow".to_owned(),
            minutes: 10,
        });

    let entries = session
        .to_log_entries(&ExerciseTaxonomy::standard(), test_now())
        .unwrap();
    let shapes: Vec<(&str, u32, u32, f64)> = entries
        .iter()
        .map(|entry| (entry.muscle_group.label(), entry.sets, entry.reps, entry.weight))
        .collect();

    assert_eq!(
        shapes,
        vec![
            ("Chest", 3, 8, 70.0),
            ("Cardio", 1, 30, 5.0),
            ("Cardio", 1, 40, 0.0),
            ("Flexibility", 1, 10, 0.0),
        ]
    );
    assert!(entries.iter().all(|entry| entry.user_email == ALICE));
    assert!(entries.iter().all(|entry| entry.created_at == test_now()));
    assert_eq!(
        entries[2].metrics(),
        EntryMetrics::Cardio {
            minutes: 40,
            distance: None
        }
    );
}

#[test]
fn test_empty_or_ownerless_session_is_rejected() {
    let taxonomy = ExerciseTaxonomy::standard();

    assert_eq!(
        WorkoutSession::new(ALICE)
            .to_log_entries(&taxonomy, test_now())
            .unwrap_err(),
        ValidationError::EmptySession {
            user_email: ALICE.to_owned()
        }
    );
    let ownerless = WorkoutSession::new(" ").with_exercise(ExerciseEntry::Stretch {
        name: "Cat-Cow".to_owned(),
        minutes: 5,
    });
    assert_eq!(
        ownerless.validate().unwrap_err(),
        ValidationError::MissingUser
    );
}

#[test]
fn test_log_entry_wire_format_is_camel_case() {
    let entry = WorkoutLogEntry::from_metrics(
        ALICE,
        "Squat",
        MuscleGroup::Legs,
        EntryMetrics::Strength {
            sets: 5,
            reps: 5,
            weight: 100.0,
        },
        test_now(),
    );

    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["userEmail"], ALICE);
    assert_eq!(json["exerciseName"], "Squat");
    assert_eq!(json["muscleGroup"], "Legs");
    assert_eq!(json["workoutType"], "strength");
    assert!(json.get("createdAt").is_some());

    let back: WorkoutLogEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn test_mistyped_log_entry_fields_are_defaulted() {
    let cases = [
        (r#"{"reps":"10","weight":"42.5"}"#, 0, 10, 42.5),
        (r#"{"sets":3.0,"reps":2.5,"weight":-4}"#, 3, 0, 0.0),
        (r#"{"sets":-1,"reps":true,"weight":[1]}"#, 0, 0, 0.0),
        (r#"{"sets":"three","reps":" 8 ","weight":"heavy"}"#, 0, 8, 0.0),
    ];

    for (raw, sets, reps, weight) in cases {
        let entry: WorkoutLogEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.sets, sets, "sets for {raw}");
        assert_eq!(entry.reps, reps, "reps for {raw}");
        assert!((entry.weight - weight).abs() < f64::EPSILON, "weight for {raw}");
    }

    let entry: WorkoutLogEntry = serde_json::from_str(
        r#"{"id":"not-a-uuid","userEmail":7,"muscleGroup":{"x":1},"createdAt":"yesterday"}"#,
    )
    .unwrap();
    assert!(entry.id.is_nil());
    assert!(entry.user_email.is_empty());
    assert_eq!(entry.muscle_group, MuscleGroup::default());
    assert_eq!(entry.created_at, WorkoutLogEntry::default().created_at);
}

#[test]
fn test_log_entry_workout_type_accepts_aliases_and_defaults_unknown() {
    let types: Vec<WorkoutType> = [
        r#"{"workoutType":"flexibility"}"#,
        r#"{"workoutType":"Cardio"}"#,
        r#"{"workoutType":"yoga"}"#,
        r#"{"workoutType":3}"#,
    ]
    .iter()
    .map(|raw| serde_json::from_str::<WorkoutLogEntry>(raw).unwrap().workout_type)
    .collect();

    assert_eq!(
        types,
        vec![
            WorkoutType::Stretch,
            WorkoutType::Cardio,
            WorkoutType::Strength,
            WorkoutType::Strength
        ]
    );
}

#[test]
fn test_unrecognized_muscle_group_label_survives() {
    let group = MuscleGroup::from("Core");

    assert!(!group.is_tracked());
    assert!(group.is_load_bearing());
    assert_eq!(String::from(group), "Core");
    assert!(!MuscleGroup::Cardio.is_load_bearing());
}

#[test]
fn test_workout_type_parsing() {
    assert_eq!("Strength".parse::<WorkoutType>().unwrap(), WorkoutType::Strength);
    assert_eq!("flexibility".parse::<WorkoutType>().unwrap(), WorkoutType::Stretch);
    assert!("yoga".parse::<WorkoutType>().is_err());
}

#[test]
fn test_coin_balance_credit_saturates() {
    let balance = CoinBalance::new(5).credit(10);
    assert_eq!(balance.coins(), 15);
    assert_eq!(CoinBalance::new(u64::MAX - 1).credit(10).coins(), u64::MAX);
    assert_eq!(balance.to_string(), "15 coins");
}
