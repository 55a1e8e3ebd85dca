//! Agent Reliability Score
//!
//! On-the-fly trust score for an agent, bounded to 0..=100. Validated
//! work raises it, rejections and failures pull it down, and a backlog
//! of old untreated submissions bleeds it slowly.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Contribution, ContributionStatus, Mission, MissionStatus};

const BASE_SCORE: i64 = 50;
const VALIDATED_BONUS: i64 = 10;
const REJECTED_MALUS: i64 = 15;
const STALE_SUBMITTED_MALUS: i64 = 5;
const MISSION_COMPLETED_BONUS: i64 = 5;
const MISSION_FAILED_MALUS: i64 = 5;

/// Days after which an untreated submission counts against the score.
const STALE_SUBMITTED_DAYS: i64 = 7;

/// Compute the reliability score of one agent from its contributions
/// and missions. Records belonging to other agents are ignored, so the
/// full snapshot slices can be passed as-is.
pub fn compute_reliability(
    agent_id: i64,
    contributions: &[Contribution],
    missions: &[Mission],
    now: DateTime<Utc>,
) -> u8 {
    let stale_before = now - Duration::days(STALE_SUBMITTED_DAYS);
    let mut score = BASE_SCORE;

    for contrib in contributions.iter().filter(|c| c.agent_id == agent_id) {
        match contrib.status {
            ContributionStatus::Validated => score += VALIDATED_BONUS,
            ContributionStatus::Rejected => score -= REJECTED_MALUS,
            ContributionStatus::Submitted if contrib.created_at < stale_before => {
                score -= STALE_SUBMITTED_MALUS
            }
            _ => {}
        }
    }

    for mission in missions.iter().filter(|m| m.agent_id == agent_id) {
        match mission.status {
            MissionStatus::Completed => score += MISSION_COMPLETED_BONUS,
            MissionStatus::Failed => score -= MISSION_FAILED_MALUS,
            _ => {}
        }
    }

    score.clamp(0, 100) as u8
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn contrib(agent_id: i64, status: ContributionStatus, created_at: DateTime<Utc>) -> Contribution {
        Contribution {
            id: 0,
            title: String::new(),
            content: String::new(),
            status,
            priority: 2,
            created_at,
            validated_at: None,
            agent_id,
            service: None,
        }
    }

    fn mission(agent_id: i64, status: MissionStatus) -> Mission {
        Mission {
            id: 0,
            title: String::new(),
            status,
            priority: 2,
            created_at: Utc::now(),
            completed_at: None,
            due_at: None,
            agent_id,
        }
    }

    #[test]
    fn no_activity_scores_the_baseline() {
        assert_eq!(compute_reliability(1, &[], &[], Utc::now()), 50);
    }

    #[test]
    fn validated_work_raises_rejections_lower() {
        let now = Utc::now();
        let contributions = vec![
            contrib(1, ContributionStatus::Validated, now - Duration::days(1)),
            contrib(1, ContributionStatus::Validated, now - Duration::days(2)),
            contrib(1, ContributionStatus::Rejected, now - Duration::days(3)),
        ];
        // 50 + 10 + 10 - 15
        assert_eq!(compute_reliability(1, &contributions, &[], now), 55);
    }

    #[test]
    fn stale_submissions_bleed_but_fresh_ones_do_not() {
        let now = Utc::now();
        let contributions = vec![
            contrib(1, ContributionStatus::Submitted, now - Duration::days(10)),
            contrib(1, ContributionStatus::Submitted, now - Duration::days(2)),
        ];
        assert_eq!(compute_reliability(1, &contributions, &[], now), 45);
    }

    #[test]
    fn missions_count_five_points_each_way() {
        let now = Utc::now();
        let missions = vec![
            mission(1, MissionStatus::Completed),
            mission(1, MissionStatus::Completed),
            mission(1, MissionStatus::Failed),
            mission(1, MissionStatus::Pending),
        ];
        // 50 + 5 + 5 - 5
        assert_eq!(compute_reliability(1, &[], &missions, now), 55);
    }

    #[test]
    fn other_agents_records_are_ignored() {
        let now = Utc::now();
        let contributions = vec![contrib(2, ContributionStatus::Rejected, now)];
        let missions = vec![mission(2, MissionStatus::Failed)];
        assert_eq!(compute_reliability(1, &contributions, &missions, now), 50);
    }

    #[test]
    fn score_clamps_at_both_ends() {
        let now = Utc::now();
        let rejected: Vec<_> = (0..10)
            .map(|_| contrib(1, ContributionStatus::Rejected, now))
            .collect();
        assert_eq!(compute_reliability(1, &rejected, &[], now), 0);

        let validated: Vec<_> = (0..10)
            .map(|_| contrib(1, ContributionStatus::Validated, now))
            .collect();
        assert_eq!(compute_reliability(1, &validated, &[], now), 100);
    }
}
