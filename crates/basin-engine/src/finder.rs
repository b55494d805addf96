//! Weighted candidate ranking for field interventions.
//!
//! Despite the product's "Dijkstra" branding, this is flat weighted scoring
//! over a fixed candidate list, not a graph search: filter by constraints,
//! score by effectiveness per cent (boosted for fast options when urgency is
//! immediate, weighted by criticality), sort, and return the winner with the
//! next two candidates as alternatives.
//!
//! Only irrigation and pest carry candidate sets; every other issue type
//! yields the fixed default advisory path.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use basin_core::enums::{Criticality, IssueType, Urgency};

/// A candidate intervention with its scoring inputs.
#[derive(Debug, Clone, Copy)]
pub struct CandidateAction {
    pub id: &'static str,
    pub issue: IssueType,
    pub tier: Criticality,
    /// Cents.
    pub cost: i64,
    /// Minutes.
    pub time: i64,
    /// Percent.
    pub effectiveness: i64,
}

const IRRIGATION_CANDIDATES: &[CandidateAction] = &[
    CandidateAction {
        id: "immediate_irrigation",
        issue: IssueType::Irrigation,
        tier: Criticality::High,
        cost: 230,
        time: 45,
        effectiveness: 95,
    },
    CandidateAction {
        id: "scheduled_irrigation",
        issue: IssueType::Irrigation,
        tier: Criticality::Medium,
        cost: 180,
        time: 120,
        effectiveness: 85,
    },
    CandidateAction {
        id: "manual_irrigation",
        issue: IssueType::Irrigation,
        tier: Criticality::Low,
        cost: 50,
        time: 30,
        effectiveness: 70,
    },
];

const PEST_CANDIDATES: &[CandidateAction] = &[
    CandidateAction {
        id: "chemical_treatment",
        issue: IssueType::Pest,
        tier: Criticality::High,
        cost: 450,
        time: 90,
        effectiveness: 90,
    },
    CandidateAction {
        id: "organic_treatment",
        issue: IssueType::Pest,
        tier: Criticality::Medium,
        cost: 280,
        time: 60,
        effectiveness: 75,
    },
    CandidateAction {
        id: "preventive_treatment",
        issue: IssueType::Pest,
        tier: Criticality::Low,
        cost: 120,
        time: 30,
        effectiveness: 60,
    },
];

/// Candidate interventions for an issue type.
#[must_use]
pub const fn candidates(issue: IssueType) -> &'static [CandidateAction] {
    match issue {
        IssueType::Irrigation => IRRIGATION_CANDIDATES,
        IssueType::Pest => PEST_CANDIDATES,
        _ => &[],
    }
}

/// Optional filters applied before scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constraints {
    /// Cents.
    pub max_cost: Option<i64>,
    /// Minutes.
    pub max_time: Option<i64>,
}

/// The ranked outcome: winning intervention expanded into steps, plus the
/// runners-up.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SolutionPath {
    pub steps: Vec<String>,
    /// Cents.
    pub total_cost: i64,
    /// Minutes.
    pub total_time: i64,
    /// Percent.
    pub effectiveness: i64,
    pub alternatives: Vec<String>,
}

/// Rank the candidates for an issue and return the best path.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rank(
    issue: IssueType,
    criticality: Criticality,
    urgency: Urgency,
    constraints: Constraints,
) -> SolutionPath {
    let valid: Vec<&CandidateAction> = candidates(issue)
        .iter()
        .filter(|c| {
            constraints.max_cost.is_none_or(|max| c.cost <= max)
                && constraints.max_time.is_none_or(|max| c.time <= max)
        })
        .collect();

    if valid.is_empty() {
        return default_path();
    }

    let criticality_weight = match criticality {
        Criticality::High => 1.5,
        Criticality::Medium => 1.0,
        Criticality::Low => 0.7,
    };

    let mut scored: Vec<(f64, &CandidateAction)> = valid
        .into_iter()
        .map(|c| {
            let mut score = c.effectiveness as f64 / c.cost as f64;
            if matches!(urgency, Urgency::Immediate) {
                // Favor faster candidates under time pressure.
                score *= 100.0 / c.time as f64;
            }
            score *= criticality_weight;
            (score, c)
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let winner = scored[0].1;
    let alternatives = scored
        .iter()
        .skip(1)
        .take(2)
        .map(|(_, c)| {
            format!(
                "{} (Cost: ${:.2} | Time: {}min)",
                c.id.replace('_', " "),
                c.cost as f64 / 100.0,
                c.time
            )
        })
        .collect();

    SolutionPath {
        steps: steps_for(winner.id),
        total_cost: winner.cost,
        total_time: winner.time,
        effectiveness: winner.effectiveness,
        alternatives,
    }
}

/// Step-by-step instructions for a winning candidate.
fn steps_for(candidate_id: &str) -> Vec<String> {
    let steps: &[&str] = match candidate_id {
        "immediate_irrigation" => &[
            "Immediate soil moisture assessment",
            "Activate irrigation system",
            "Monitor soil saturation levels",
            "Adjust nearby zones accordingly",
        ],
        "chemical_treatment" => &[
            "Immediate pest identification",
            "Apply targeted pesticide treatment",
            "Isolate affected area",
            "Monitor spread to adjacent zones",
        ],
        _ => &[
            "Assess the situation",
            "Apply recommended solution",
            "Monitor progress",
            "Adjust as needed",
        ],
    };
    steps.iter().map(ToString::to_string).collect()
}

/// The advisory path returned when no candidate survives filtering.
#[must_use]
pub fn default_path() -> SolutionPath {
    SolutionPath {
        steps: vec![
            "Assess the problem thoroughly".to_string(),
            "Consult with agricultural expert".to_string(),
            "Implement recommended solution".to_string(),
            "Monitor and adjust as needed".to_string(),
        ],
        total_cost: 100,
        total_time: 60,
        effectiveness: 70,
        alternatives: vec![
            "Manual intervention".to_string(),
            "Wait and monitor approach".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn irrigation_without_pressure_prefers_cheap_effective_option() {
        // manual_irrigation: 70/50 = 1.4 beats immediate (95/230) and
        // scheduled (85/180).
        let path = rank(
            IssueType::Irrigation,
            Criticality::Medium,
            Urgency::Today,
            Constraints::default(),
        );
        assert_eq!(path.total_cost, 50);
        assert_eq!(path.total_time, 30);
        assert_eq!(path.effectiveness, 70);
        assert_eq!(path.steps[0], "Assess the situation");
        assert_eq!(path.alternatives.len(), 2);
    }

    #[test]
    fn immediate_urgency_still_ranks_by_speed_boost() {
        // With the 100/time boost, manual (1.4 * 3.33) still beats
        // immediate (0.413 * 2.22); the winner's steps stay generic but the
        // ordering of alternatives shifts toward the faster plan.
        let path = rank(
            IssueType::Irrigation,
            Criticality::High,
            Urgency::Immediate,
            Constraints::default(),
        );
        assert_eq!(path.total_time, 30);
        assert!(
            path.alternatives[0].starts_with("immediate irrigation"),
            "fast high-effectiveness option should outrank scheduled: {:?}",
            path.alternatives
        );
    }

    #[test]
    fn max_cost_constraint_filters_candidates() {
        let path = rank(
            IssueType::Pest,
            Criticality::High,
            Urgency::Today,
            Constraints {
                max_cost: Some(300),
                max_time: None,
            },
        );
        // chemical_treatment (450) is filtered out.
        assert!(path.total_cost <= 300);
        assert_eq!(path.alternatives.len(), 1);
    }

    #[test]
    fn max_time_constraint_filters_candidates() {
        let path = rank(
            IssueType::Irrigation,
            Criticality::Medium,
            Urgency::Today,
            Constraints {
                max_cost: None,
                max_time: Some(50),
            },
        );
        // scheduled_irrigation (120 min) is filtered out.
        assert!(path.total_time <= 50);
    }

    #[test]
    fn unsatisfiable_constraints_fall_back_to_default() {
        let path = rank(
            IssueType::Irrigation,
            Criticality::High,
            Urgency::Immediate,
            Constraints {
                max_cost: Some(10),
                max_time: None,
            },
        );
        assert_eq!(path, default_path());
    }

    #[test]
    fn issue_without_candidates_falls_back_to_default() {
        let path = rank(
            IssueType::Weather,
            Criticality::High,
            Urgency::Today,
            Constraints::default(),
        );
        assert_eq!(path, default_path());
    }

    #[test]
    fn step_templates_for_known_candidates() {
        assert_eq!(
            steps_for("immediate_irrigation")[1],
            "Activate irrigation system"
        );
        assert_eq!(
            steps_for("chemical_treatment")[0],
            "Immediate pest identification"
        );
        assert_eq!(steps_for("anything_else")[0], "Assess the situation");
    }

    #[test]
    fn alternatives_are_formatted_with_cost_and_time() {
        let path = rank(
            IssueType::Pest,
            Criticality::Medium,
            Urgency::Today,
            Constraints::default(),
        );
        // preventive_treatment wins (0.5); alternatives are chemical (0.2)
        // and organic (0.268) ranked by score.
        assert_eq!(path.total_cost, 120);
        assert_eq!(
            path.alternatives,
            vec![
                "organic treatment (Cost: $2.80 | Time: 60min)".to_string(),
                "chemical treatment (Cost: $4.50 | Time: 90min)".to_string(),
            ]
        );
    }
}
