//! The fixed plan matrix: one remediation plan per issue type and
//! criticality tier, plus urgency adjustment and resource estimation.
//!
//! The matrix is fixed data: steps, costs in cents, times in minutes, and
//! alternatives per entry. The `{zone}` placeholder in a step is substituted
//! with the report's zone id at generation time.

use basin_core::entities::{FeedbackReport, ResourceEstimate};
use basin_core::enums::{Criticality, IssueType, Urgency};
use basin_store::inputs::NewSolution;

/// One entry of the plan matrix.
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub steps: [&'static str; 4],
    /// Cents.
    pub estimated_cost: i64,
    /// Minutes.
    pub estimated_time: i64,
    pub alternatives: &'static [&'static str],
}

const IRRIGATION_HIGH: Plan = Plan {
    steps: [
        "Immediate soil moisture assessment",
        "Activate {zone} irrigation system",
        "Monitor soil saturation levels",
        "Adjust nearby zones accordingly",
    ],
    estimated_cost: 230,
    estimated_time: 45,
    alternatives: &[
        "Manual irrigation + soil amendment (Cost: $15.50 | Time: 2 hours)",
        "Wait for scheduled rain (40% chance) (Cost: $0 | Risk: Medium)",
    ],
};

const IRRIGATION_MEDIUM: Plan = Plan {
    steps: [
        "Schedule irrigation within 24 hours",
        "Check irrigation system functionality",
        "Monitor soil moisture trends",
        "Prepare backup irrigation plan",
    ],
    estimated_cost: 180,
    estimated_time: 120,
    alternatives: &[
        "Delayed irrigation with soil monitoring",
        "Rain-dependent strategy with backup plan",
    ],
};

const IRRIGATION_LOW: Plan = Plan {
    steps: [
        "Monitor soil moisture levels",
        "Schedule routine irrigation check",
        "Update irrigation schedule",
        "Document moisture trends",
    ],
    estimated_cost: 50,
    estimated_time: 30,
    alternatives: &["Natural rainfall monitoring", "Gradual irrigation adjustment"],
};

const PEST_HIGH: Plan = Plan {
    steps: [
        "Immediate pest identification",
        "Apply targeted pesticide treatment",
        "Isolate affected area",
        "Monitor spread to adjacent zones",
    ],
    estimated_cost: 450,
    estimated_time: 90,
    alternatives: &["Organic pest control methods", "Biological pest management"],
};

const PEST_MEDIUM: Plan = Plan {
    steps: [
        "Assess pest population levels",
        "Apply preventive treatments",
        "Increase monitoring frequency",
        "Prepare containment measures",
    ],
    estimated_cost: 280,
    estimated_time: 60,
    alternatives: &["Natural predator introduction", "Crop rotation planning"],
};

const PEST_LOW: Plan = Plan {
    steps: [
        "Regular pest monitoring",
        "Preventive spray application",
        "Environmental assessment",
        "Schedule follow-up inspection",
    ],
    estimated_cost: 120,
    estimated_time: 30,
    alternatives: &["Companion planting strategy", "Habitat modification"],
};

const SOIL_HIGH: Plan = Plan {
    steps: [
        "Emergency soil testing",
        "Apply soil amendments",
        "Adjust pH levels",
        "Monitor plant response",
    ],
    estimated_cost: 380,
    estimated_time: 180,
    alternatives: &[
        "Gradual soil improvement program",
        "Crop-specific soil treatment",
    ],
};

const SOIL_MEDIUM: Plan = Plan {
    steps: [
        "Comprehensive soil analysis",
        "Plan fertilization schedule",
        "Apply organic matter",
        "Monitor nutrient levels",
    ],
    estimated_cost: 220,
    estimated_time: 120,
    alternatives: &[
        "Slow-release fertilizer program",
        "Compost-based soil improvement",
    ],
};

const SOIL_LOW: Plan = Plan {
    steps: [
        "Regular soil testing",
        "Maintain fertilization schedule",
        "Monitor soil health indicators",
        "Plan seasonal amendments",
    ],
    estimated_cost: 90,
    estimated_time: 45,
    alternatives: &["Natural soil building methods", "Cover crop integration"],
};

const DISEASE_HIGH: Plan = Plan {
    steps: [
        "Disease identification and diagnosis",
        "Apply targeted fungicide treatment",
        "Remove infected plant material",
        "Implement quarantine measures",
    ],
    estimated_cost: 520,
    estimated_time: 120,
    alternatives: &["Organic disease management", "Resistant variety replacement"],
};

const DISEASE_MEDIUM: Plan = Plan {
    steps: [
        "Monitor disease progression",
        "Apply preventive treatments",
        "Improve air circulation",
        "Adjust watering practices",
    ],
    estimated_cost: 310,
    estimated_time: 90,
    alternatives: &["Cultural disease management", "Biological control agents"],
};

const DISEASE_LOW: Plan = Plan {
    steps: [
        "Regular plant inspection",
        "Maintain optimal growing conditions",
        "Apply preventive sprays",
        "Document disease occurrences",
    ],
    estimated_cost: 150,
    estimated_time: 60,
    alternatives: &[
        "Environmental disease prevention",
        "Plant nutrition optimization",
    ],
};

const WEATHER_HIGH: Plan = Plan {
    steps: [
        "Assess weather damage extent",
        "Implement emergency protection",
        "Repair damaged infrastructure",
        "Plan recovery strategy",
    ],
    estimated_cost: 800,
    estimated_time: 240,
    alternatives: &[
        "Gradual infrastructure repair",
        "Temporary protection measures",
    ],
};

const WEATHER_MEDIUM: Plan = Plan {
    steps: [
        "Evaluate weather impact",
        "Apply protective measures",
        "Monitor plant stress levels",
        "Adjust growing practices",
    ],
    estimated_cost: 350,
    estimated_time: 120,
    alternatives: &["Natural recovery monitoring", "Adaptive management strategies"],
};

const WEATHER_LOW: Plan = Plan {
    steps: [
        "Monitor weather conditions",
        "Maintain protective equipment",
        "Prepare contingency plans",
        "Update weather alerts",
    ],
    estimated_cost: 100,
    estimated_time: 30,
    alternatives: &["Weather tracking only", "Seasonal preparation planning"],
};

const EQUIPMENT_HIGH: Plan = Plan {
    steps: [
        "Emergency equipment diagnosis",
        "Order replacement parts",
        "Implement temporary solutions",
        "Schedule immediate repairs",
    ],
    estimated_cost: 650,
    estimated_time: 300,
    alternatives: &["Manual operation procedures", "Equipment rental solutions"],
};

const EQUIPMENT_MEDIUM: Plan = Plan {
    steps: [
        "Equipment performance assessment",
        "Schedule maintenance",
        "Order necessary parts",
        "Plan repair timeline",
    ],
    estimated_cost: 290,
    estimated_time: 180,
    alternatives: &[
        "Preventive maintenance program",
        "Equipment upgrade planning",
    ],
};

const EQUIPMENT_LOW: Plan = Plan {
    steps: [
        "Routine equipment inspection",
        "Perform scheduled maintenance",
        "Update maintenance logs",
        "Plan future service",
    ],
    estimated_cost: 80,
    estimated_time: 60,
    alternatives: &[
        "Extended maintenance intervals",
        "Equipment monitoring systems",
    ],
};

/// Look up the plan for an issue type and criticality.
///
/// `Other` has no catalog entry and falls back to the irrigation/low plan.
#[must_use]
pub const fn plan_for(issue: IssueType, criticality: Criticality) -> &'static Plan {
    use Criticality::{High, Low, Medium};
    use IssueType::{Disease, Equipment, Irrigation, Other, Pest, Soil, Weather};
    match (issue, criticality) {
        (Irrigation, High) => &IRRIGATION_HIGH,
        (Irrigation, Medium) => &IRRIGATION_MEDIUM,
        (Irrigation, Low) | (Other, _) => &IRRIGATION_LOW,
        (Pest, High) => &PEST_HIGH,
        (Pest, Medium) => &PEST_MEDIUM,
        (Pest, Low) => &PEST_LOW,
        (Soil, High) => &SOIL_HIGH,
        (Soil, Medium) => &SOIL_MEDIUM,
        (Soil, Low) => &SOIL_LOW,
        (Disease, High) => &DISEASE_HIGH,
        (Disease, Medium) => &DISEASE_MEDIUM,
        (Disease, Low) => &DISEASE_LOW,
        (Weather, High) => &WEATHER_HIGH,
        (Weather, Medium) => &WEATHER_MEDIUM,
        (Weather, Low) => &WEATHER_LOW,
        (Equipment, High) => &EQUIPMENT_HIGH,
        (Equipment, Medium) => &EQUIPMENT_MEDIUM,
        (Equipment, Low) => &EQUIPMENT_LOW,
    }
}

/// Apply the immediate-urgency rush adjustment: time halved with a floor of
/// 15 minutes, cost up 20%.
#[must_use]
pub const fn adjust_for_urgency(cost: i64, time: i64, urgency: Urgency) -> (i64, i64) {
    match urgency {
        Urgency::Immediate => {
            let time = if time / 2 < 15 { 15 } else { time / 2 };
            (cost * 12 / 10, time)
        }
        Urgency::Today | Urgency::Week => (cost, time),
    }
}

/// Human-readable resource requirements for a plan.
///
/// Water and energy are only meaningful for irrigation work.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn resources(issue: IssueType, cost: i64, time: i64) -> ResourceEstimate {
    let irrigation = matches!(issue, IssueType::Irrigation);
    ResourceEstimate {
        water: if irrigation {
            format!("{} liters", time * 10)
        } else {
            "N/A".to_string()
        },
        time: format!("{time} minutes"),
        cost: format!("${:.2}", cost as f64 / 100.0),
        energy: if irrigation {
            format!("${:.2}", cost as f64 * 0.01)
        } else {
            "N/A".to_string()
        },
    }
}

/// Build the solution payload for a stored report.
#[must_use]
pub fn generate(report: &FeedbackReport) -> NewSolution {
    let plan = plan_for(report.issue_type, report.criticality);
    let (cost, time) = adjust_for_urgency(plan.estimated_cost, plan.estimated_time, report.urgency);

    let steps = plan
        .steps
        .iter()
        .map(|s| s.replace("{zone}", &report.zone_id))
        .collect();
    let alternatives = plan.alternatives.iter().map(ToString::to_string).collect();

    NewSolution {
        report_id: report.id,
        steps,
        resources: resources(report.issue_type, cost, time),
        alternatives,
        estimated_cost: cost,
        estimated_time: time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basin_core::enums::{DesiredAction, ReportStatus};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn report(issue: IssueType, criticality: Criticality, urgency: Urgency) -> FeedbackReport {
        FeedbackReport {
            id: 7,
            zone_id: "A3".into(),
            issue_type: issue,
            criticality,
            description: "test".into(),
            desired_action: DesiredAction::AiRecommendation,
            urgency,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(IssueType::Irrigation, Criticality::High, 230, 45)]
    #[case(IssueType::Irrigation, Criticality::Medium, 180, 120)]
    #[case(IssueType::Irrigation, Criticality::Low, 50, 30)]
    #[case(IssueType::Pest, Criticality::High, 450, 90)]
    #[case(IssueType::Pest, Criticality::Medium, 280, 60)]
    #[case(IssueType::Pest, Criticality::Low, 120, 30)]
    #[case(IssueType::Soil, Criticality::High, 380, 180)]
    #[case(IssueType::Disease, Criticality::High, 520, 120)]
    #[case(IssueType::Weather, Criticality::High, 800, 240)]
    #[case(IssueType::Equipment, Criticality::High, 650, 300)]
    fn plan_costs_and_times(
        #[case] issue: IssueType,
        #[case] criticality: Criticality,
        #[case] cost: i64,
        #[case] time: i64,
    ) {
        let plan = plan_for(issue, criticality);
        assert_eq!(plan.estimated_cost, cost);
        assert_eq!(plan.estimated_time, time);
        assert_eq!(plan.steps.len(), 4);
        assert_eq!(plan.alternatives.len(), 2);
    }

    #[rstest]
    #[case(Criticality::Low)]
    #[case(Criticality::Medium)]
    #[case(Criticality::High)]
    fn other_issue_falls_back_to_irrigation_low(#[case] criticality: Criticality) {
        let plan = plan_for(IssueType::Other, criticality);
        assert_eq!(plan.estimated_cost, 50);
        assert_eq!(plan.estimated_time, 30);
        assert_eq!(plan.steps[0], "Monitor soil moisture levels");
    }

    #[test]
    fn immediate_urgency_halves_time_and_adds_surcharge() {
        assert_eq!(adjust_for_urgency(230, 45, Urgency::Immediate), (276, 22));
        assert_eq!(adjust_for_urgency(180, 120, Urgency::Immediate), (216, 60));
    }

    #[test]
    fn immediate_urgency_time_floor_is_fifteen_minutes() {
        assert_eq!(adjust_for_urgency(50, 30, Urgency::Immediate).1, 15);
        assert_eq!(adjust_for_urgency(120, 20, Urgency::Immediate).1, 15);
    }

    #[test]
    fn non_immediate_urgency_is_untouched() {
        assert_eq!(adjust_for_urgency(230, 45, Urgency::Today), (230, 45));
        assert_eq!(adjust_for_urgency(230, 45, Urgency::Week), (230, 45));
    }

    #[test]
    fn irrigation_resources_include_water_and_energy() {
        let res = resources(IssueType::Irrigation, 230, 45);
        assert_eq!(res.water, "450 liters");
        assert_eq!(res.time, "45 minutes");
        assert_eq!(res.cost, "$2.30");
        assert_eq!(res.energy, "$2.30");
    }

    #[test]
    fn non_irrigation_resources_mark_water_and_energy_na() {
        let res = resources(IssueType::Pest, 280, 60);
        assert_eq!(res.water, "N/A");
        assert_eq!(res.energy, "N/A");
        assert_eq!(res.time, "60 minutes");
        assert_eq!(res.cost, "$2.80");
    }

    #[test]
    fn generate_substitutes_zone_into_steps() {
        let solution = generate(&report(
            IssueType::Irrigation,
            Criticality::High,
            Urgency::Today,
        ));
        assert_eq!(solution.report_id, 7);
        assert_eq!(solution.steps[1], "Activate A3 irrigation system");
        assert_eq!(solution.estimated_cost, 230);
        assert_eq!(solution.estimated_time, 45);
    }

    #[test]
    fn generate_applies_rush_adjustment_before_resources() {
        let solution = generate(&report(
            IssueType::Irrigation,
            Criticality::High,
            Urgency::Immediate,
        ));
        assert_eq!(solution.estimated_cost, 276);
        assert_eq!(solution.estimated_time, 22);
        // Water is computed from the adjusted time.
        assert_eq!(solution.resources.water, "220 liters");
        assert_eq!(solution.resources.cost, "$2.76");
    }
}
