use crate::Advisor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Round robin state used to decide which `Advisor` gets the next
/// qualified call booking.
///
/// Advisors are assigned in roster order: the advisor after the one that
/// was assigned last, wrapping around at the end of the roster. With two
/// advisors this simply alternates between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinState {
    /// Id of the `Advisor` that received the previous booking
    pub last_assigned: Option<String>,
    /// Number of bookings each `Advisor` has received
    pub assignment_count: HashMap<String, u64>,
}

impl RoundRobinState {
    /// Picks the next advisor from `roster` and records the assignment.
    /// Returns `None` if the roster is empty.
    pub fn assign<'a>(&mut self, roster: &'a [Advisor]) -> Option<&'a Advisor> {
        if roster.is_empty() {
            return None;
        }
        let next_index = self
            .last_assigned
            .as_ref()
            .and_then(|last| roster.iter().position(|a| &a.id == last))
            .map(|last_index| (last_index + 1) % roster.len())
            // Nobody assigned yet or the last advisor left the roster
            .unwrap_or(0);

        let advisor = &roster[next_index];
        self.last_assigned = Some(advisor.id.clone());
        *self.assignment_count.entry(advisor.id.clone()).or_insert(0) += 1;
        Some(advisor)
    }

    pub fn count_for(&self, advisor_id: &str) -> u64 {
        self.assignment_count.get(advisor_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_roster;

    fn advisor(id: &str) -> Advisor {
        Advisor {
            id: id.into(),
            name: id.into(),
            email: format!("{}@example.com", id),
            title: String::new(),
            bio: String::new(),
        }
    }

    #[test]
    fn round_robin_alternates_between_two_advisors() {
        let roster = default_roster();
        let mut state = RoundRobinState::default();

        let assigned = (0..5)
            .map(|_| state.assign(&roster).unwrap().id.clone())
            .collect::<Vec<_>>();
        assert_eq!(assigned, vec!["david", "brennan", "david", "brennan", "david"]);
        assert_eq!(state.count_for("david"), 3);
        assert_eq!(state.count_for("brennan"), 2);
        assert_eq!(state.last_assigned, Some("david".to_string()));
    }

    #[test]
    fn round_robin_cycles_through_larger_rosters() {
        let roster = vec![advisor("a"), advisor("b"), advisor("c")];
        let mut state = RoundRobinState {
            last_assigned: Some("b".into()),
            ..Default::default()
        };
        assert_eq!(state.assign(&roster).unwrap().id, "c");
        assert_eq!(state.assign(&roster).unwrap().id, "a");
    }

    #[test]
    fn round_robin_restarts_when_last_advisor_is_unknown() {
        let roster = vec![advisor("a"), advisor("b")];
        let mut state = RoundRobinState {
            last_assigned: Some("retired".into()),
            ..Default::default()
        };
        assert_eq!(state.assign(&roster).unwrap().id, "a");
    }

    #[test]
    fn round_robin_with_empty_roster() {
        let mut state = RoundRobinState::default();
        assert!(state.assign(&[]).is_none());
        assert_eq!(state, RoundRobinState::default());
    }
}
