//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use basin_core::entities::*;
use basin_core::enums::*;
use basin_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_zone() -> Zone {
    Zone {
        id: "A3".into(),
        name: "Zone A3".into(),
        status: ZoneStatus::Critical,
        soil_moisture: Some(15),
        temperature: Some(28),
        humidity: Some(40),
        last_updated: Utc::now(),
    }
}

fn sample_alert() -> Alert {
    Alert {
        id: 1,
        zone_id: "A3".into(),
        kind: IssueType::Irrigation,
        criticality: Criticality::High,
        title: "Soil Moisture Critical".into(),
        description: "Immediate irrigation required".into(),
        emoji: "🚨".into(),
        resolved: false,
        created_at: Utc::now(),
    }
}

fn sample_report() -> FeedbackReport {
    FeedbackReport {
        id: 1,
        zone_id: "B2".into(),
        issue_type: IssueType::Pest,
        criticality: Criticality::Medium,
        description: "Aphids on the north rows".into(),
        desired_action: DesiredAction::PestControl,
        urgency: Urgency::Today,
        status: ReportStatus::Pending,
        created_at: Utc::now(),
    }
}

fn sample_solution() -> Solution {
    Solution {
        id: 1,
        report_id: 1,
        steps: vec![
            "Assess pest population levels".into(),
            "Apply preventive treatments".into(),
        ],
        resources: ResourceEstimate {
            water: "N/A".into(),
            time: "60 minutes".into(),
            cost: "$2.80".into(),
            energy: "N/A".into(),
        },
        alternatives: vec!["Natural predator introduction".into()],
        estimated_cost: 280,
        estimated_time: 60,
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(zone_roundtrip, Zone, sample_zone());

roundtrip_and_validate!(
    zone_without_sensors_roundtrip,
    Zone,
    Zone {
        soil_moisture: None,
        temperature: None,
        humidity: None,
        ..sample_zone()
    }
);

roundtrip_and_validate!(alert_roundtrip, Alert, sample_alert());

roundtrip_and_validate!(report_roundtrip, FeedbackReport, sample_report());

roundtrip_and_validate!(solution_roundtrip, Solution, sample_solution());

roundtrip_and_validate!(
    report_submit_response_roundtrip,
    ReportSubmitResponse,
    ReportSubmitResponse {
        report: sample_report(),
        solution: sample_solution(),
    }
);

roundtrip_and_validate!(
    overview_response_roundtrip,
    OverviewResponse,
    OverviewResponse {
        healthy: 8,
        warning: 3,
        critical: 1,
        active_alerts: vec![sample_alert()],
    }
);

#[test]
fn field_nodes_serialize_with_color_buckets() {
    let nodes = basin_core::field::field_nodes();
    let json = serde_json::to_value(&nodes).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 16);
    assert_eq!(arr[0]["id"], "Z1");
    assert_eq!(arr[0]["weight"], 2);
    assert_eq!(arr[0]["marker"], "💧");
}
