// ABOUTME: Circuit expansion transform turning program templates into session exercises
// ABOUTME: Grouped exercises repeat once per round; ungrouped exercises pass through in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! Circuit/superset expansion
//!
//! Converts a flat, ordered list of program exercise templates into the
//! flat, ordered list of session exercise instances a live workout works
//! through. Exercises sharing a circuit `group_id` are expanded into one
//! instance per round, interleaved in their original relative order within
//! each round; ungrouped exercises map to exactly one instance in place.
//!
//! A whole group is emitted at the position where its `group_id` is first
//! encountered, gathered from the entire template list. Members of the same
//! group are contiguous in any program the editor produces; if they are
//! not, later members still fold into the first encounter position, which
//! silently reorders them relative to interleaved ungrouped exercises.
//! Callers building such configurations should expect that.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::{CircuitRound, ProgramExercise, SessionExercise, WorkoutSet};

/// Identifier generation capability injected into the expansion
///
/// Keeps the transform pure apart from id generation, so tests can supply a
/// deterministic source.
pub trait IdSource {
    /// Produce a fresh, collision-resistant identifier
    fn next_id(&mut self) -> Uuid;
}

/// Default id source backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Expand program exercise templates into session exercise instances
///
/// Walks the templates once, left to right:
///
/// - an ungrouped template is emitted immediately as a single instance;
/// - the first template of an unseen circuit group emits the entire group
///   (all members, gathered from the full list) repeated for every round,
///   before the walk continues;
/// - templates whose group has already been emitted are skipped.
///
/// Output length is the ungrouped count plus, per distinct group, member
/// count times rounds. A round count of zero is treated as one (degenerate
/// circuit), and a zero `target_sets` still yields one set. Every exercise
/// and set id is freshly drawn from `ids`.
#[must_use]
pub fn expand(templates: &[ProgramExercise], ids: &mut impl IdSource) -> Vec<SessionExercise> {
    let mut groups: HashMap<&str, Vec<&ProgramExercise>> = HashMap::new();
    for template in templates {
        if let Some(circuit) = &template.circuit {
            groups
                .entry(circuit.group_id.as_str())
                .or_default()
                .push(template);
        }
    }

    let mut processed: HashSet<&str> = HashSet::new();
    let mut instances = Vec::new();

    for template in templates {
        let Some(circuit) = &template.circuit else {
            instances.push(instantiate(template, None, ids));
            continue;
        };

        if !processed.insert(circuit.group_id.as_str()) {
            // Group already emitted at its first encounter.
            continue;
        }

        let members = &groups[circuit.group_id.as_str()];
        let total_rounds = circuit.rounds.max(1);
        for round in 1..=total_rounds {
            for member in members {
                let rest_secs = member.circuit.as_ref().and_then(|c| c.rest_secs);
                instances.push(instantiate(
                    member,
                    Some(CircuitRound {
                        group_id: circuit.group_id.clone(),
                        round_number: round,
                        total_rounds,
                        rest_secs,
                    }),
                    ids,
                ));
            }
        }
    }

    instances
}

/// Build one session instance from a template, seeding sets from its targets
fn instantiate(
    template: &ProgramExercise,
    circuit: Option<CircuitRound>,
    ids: &mut impl IdSource,
) -> SessionExercise {
    let set_count = template.target_sets.max(1);
    let sets = (0..set_count)
        .map(|_| WorkoutSet {
            id: ids.next_id(),
            weight: template.target_weight,
            reps: template.target_reps,
            completed: false,
        })
        .collect();

    SessionExercise {
        id: ids.next_id(),
        name: template.exercise_name.clone(),
        muscle_group: template.muscle_group,
        sets,
        circuit,
        target_distance: template.target_distance,
        target_time: template.target_time,
        previous_sets: None,
    }
}
