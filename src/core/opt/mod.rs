use std::collections::HashSet;

use core::{
    data,
    opt::fsm::{FlatState, FlatTransition, OptimizedFsm},
    sem::fsm::{SemanticFsm, State},
};

pub mod fsm;

/// Flattens `fsm` into an `OptimizedFsm`.
///
/// Per concrete declared state, in order: transition inlining with
/// most-derived-wins override (own transitions in source order, then
/// super-states depth-first, left to right), exit-action appending to every
/// outgoing flat transition, then a whole-machine pass appending destination
/// entry actions, and finally first-wins action deduplication.
pub fn optimize(fsm: &SemanticFsm) -> OptimizedFsm {
    Optimizer { fsm }.optimize()
}

struct Optimizer<'sem> {
    fsm: &'sem SemanticFsm,
}

impl<'sem> Optimizer<'sem> {
    fn optimize(&self) -> OptimizedFsm {
        let mut optimized = OptimizedFsm {
            name: self.fsm.name.clone(),
            actions_class: self.fsm.actions_class.clone(),
            initial_state: match self.fsm.initial_state {
                Some(id) => self.fsm.states[id].name.clone(),
                None => String::new(),
            },
            events: self.fsm.events.clone(),
            actions: self.fsm.actions.clone(),
            states: Vec::new(),
        };

        for state in &self.fsm.states {
            if state.defined && !state.abstract_state {
                optimized.states.push(self.flatten_state(state));
            }
        }

        self.propagate_entry_actions(&mut optimized);
        dedupe_actions(&mut optimized);

        optimized
    }

    fn flatten_state(&self, state: &State) -> FlatState {
        let mut flat = FlatState {
            name: state.name.clone(),
            transitions: Vec::new(),
        };

        let mut defined_events: HashSet<String> = HashSet::new();
        self.inline_transitions(&mut flat, state, &mut defined_events);

        let exit_actions = self.collect_exit_actions(state);
        if !exit_actions.is_empty() {
            for transition in &mut flat.transitions {
                transition.actions.extend_from_slice(&exit_actions);
            }
        }

        flat
    }

    /// Own transitions first, then inherited ones, suppressing any event a
    /// more derived state already handles.
    fn inline_transitions(
        &self,
        flat: &mut FlatState,
        state: &State,
        defined_events: &mut HashSet<String>,
    ) {
        for transition in &state.transitions {
            if defined_events.insert(transition.event.clone()) {
                flat.transitions.push(FlatTransition {
                    event: transition.event.clone(),
                    next_state: match transition.next_state {
                        Some(id) => self.fsm.states[id].name.clone(),
                        None => String::new(),
                    },
                    actions: transition.actions.clone(),
                });
            }
        }

        for &super_id in &state.super_states {
            self.inline_transitions(flat, &self.fsm.states[super_id], defined_events);
        }
    }

    fn collect_exit_actions(&self, state: &State) -> Vec<String> {
        let mut actions = state.exit_actions.clone();
        for &super_id in &state.super_states {
            actions.extend(self.collect_exit_actions(&self.fsm.states[super_id]));
        }
        actions
    }

    fn collect_entry_actions(&self, state: &State) -> Vec<String> {
        let mut actions = state.entry_actions.clone();
        for &super_id in &state.super_states {
            actions.extend(self.collect_entry_actions(&self.fsm.states[super_id]));
        }
        actions
    }

    /// Appends a destination's entry actions to every flat transition that
    /// names it. A transition whose `next_state` is empty never re-enters,
    /// and neither does a state's own actionless transition back to itself.
    fn propagate_entry_actions(&self, optimized: &mut OptimizedFsm) {
        for state in &self.fsm.states {
            let entry_actions = self.collect_entry_actions(state);
            if entry_actions.is_empty() {
                continue;
            }

            for flat in &mut optimized.states {
                for transition in &mut flat.transitions {
                    if transition.next_state != state.name {
                        continue;
                    }

                    if flat.name == state.name && transition.actions.is_empty() {
                        continue;
                    }

                    transition.actions.extend_from_slice(&entry_actions);
                }
            }
        }
    }
}

fn dedupe_actions(optimized: &mut OptimizedFsm) {
    for state in &mut optimized.states {
        for transition in &mut state.transitions {
            transition.actions = data::dedupe(&transition.actions);
        }
    }
}
