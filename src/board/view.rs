//! Pure mapping from fetched activities to what the board displays

use crate::constants::SELECT_PLACEHOLDER;
use crate::types::{Activity, ParticipantKey};

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    pub key: ParticipantKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Entry of the activity dropdown. The placeholder has an empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// State of the activity list area
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityList {
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed,
}

pub fn render_cards(activities: &[Activity]) -> Vec<ActivityCard> {
    activities
        .iter()
        .map(|activity| ActivityCard {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    email: email.clone(),
                    key: ParticipantKey::new(activity.name.clone(), email.clone()),
                })
                .collect(),
        })
        .collect()
}

pub fn render_options(activities: &[Activity]) -> Vec<SelectOption> {
    std::iter::once(placeholder_option())
        .chain(activities.iter().map(|activity| SelectOption {
            value: activity.name.clone(),
            label: activity.name.clone(),
        }))
        .collect()
}

pub fn placeholder_option() -> SelectOption {
    SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, max: i64, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{name} description"),
            schedule: "Mondays, 3:30 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_one_card_per_activity_with_spots_left() {
        let activities = vec![
            activity("Chess Club", 12, &["michael@mergington.edu", "daniel@mergington.edu"]),
            activity("Gym Class", 30, &[]),
            activity("Programming Class", 20, &["emma@mergington.edu"]),
        ];
        let cards = render_cards(&activities);
        assert_eq!(cards.len(), activities.len());
        for (card, activity) in cards.iter().zip(&activities) {
            assert_eq!(card.name, activity.name);
            assert_eq!(
                card.spots_left,
                activity.max_participants - activity.participants.len() as i64
            );
        }
        assert_eq!(cards[0].availability_label(), "10 spots left");
    }

    #[test]
    fn test_one_removal_control_per_participant() {
        let cards = render_cards(&[activity("Chess Club", 12, &["a@b.com", "c@d.com"])]);
        let keys: Vec<_> = cards[0].participants.iter().map(|p| p.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ParticipantKey::new("Chess Club", "a@b.com"),
                ParticipantKey::new("Chess Club", "c@d.com"),
            ]
        );
    }

    #[test]
    fn test_empty_roster_renders_no_rows() {
        let cards = render_cards(&[activity("Gym Class", 30, &[])]);
        assert!(cards[0].participants.is_empty());
        assert_eq!(cards[0].spots_left, 30);
    }

    #[test]
    fn test_options_start_with_placeholder() {
        let options = render_options(&[activity("B", 1, &[]), activity("A", 1, &[])]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, SELECT_PLACEHOLDER);
        assert_eq!(options[1].value, "B");
        assert_eq!(options[2].value, "A");
    }

    #[test]
    fn test_no_activities_leaves_only_placeholder() {
        assert!(render_cards(&[]).is_empty());
        assert_eq!(render_options(&[]), vec![placeholder_option()]);
    }
}
