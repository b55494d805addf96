//! Fixed seed data the store is rebuilt from on every process start.
//!
//! A fixed snapshot: 12 zones in a 3x4 field layout and 3 unresolved
//! alerts. There is no sensor ingestion; this snapshot is the only source
//! of zone data.

use basin_core::entities::{Alert, Zone};
use basin_core::enums::{Criticality, IssueType, ZoneStatus};
use chrono::{DateTime, Duration, Utc};

fn zone(
    id: &str,
    status: ZoneStatus,
    soil_moisture: i64,
    temperature: i64,
    humidity: i64,
    now: DateTime<Utc>,
) -> Zone {
    Zone {
        id: id.to_string(),
        name: format!("Zone {id}"),
        status,
        soil_moisture: Some(soil_moisture),
        temperature: Some(temperature),
        humidity: Some(humidity),
        last_updated: now,
    }
}

/// The 12 seeded zones, rows A-C by columns 1-4.
#[must_use]
pub fn seed_zones(now: DateTime<Utc>) -> Vec<Zone> {
    use ZoneStatus::{Critical, Healthy, Warning};
    vec![
        zone("A1", Healthy, 75, 22, 65, now),
        zone("A2", Warning, 45, 25, 55, now),
        zone("A3", Critical, 15, 28, 40, now),
        zone("A4", Healthy, 80, 21, 70, now),
        zone("B1", Healthy, 70, 23, 68, now),
        zone("B2", Warning, 35, 26, 50, now),
        zone("B3", Healthy, 85, 20, 75, now),
        zone("B4", Warning, 55, 24, 60, now),
        zone("C1", Healthy, 78, 22, 72, now),
        zone("C2", Healthy, 82, 21, 74, now),
        zone("C3", Healthy, 77, 23, 71, now),
        zone("C4", Healthy, 79, 22, 73, now),
    ]
}

/// The 3 seeded unresolved alerts. Alert ids continue from 4 afterwards.
#[must_use]
pub fn seed_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            zone_id: "A3".to_string(),
            kind: IssueType::Irrigation,
            criticality: Criticality::High,
            title: "Soil Moisture Critical".to_string(),
            description: "Immediate irrigation required".to_string(),
            emoji: "🚨".to_string(),
            resolved: false,
            created_at: now - Duration::minutes(2),
        },
        Alert {
            id: 2,
            zone_id: "B2".to_string(),
            kind: IssueType::Irrigation,
            criticality: Criticality::Medium,
            title: "Low Water Levels".to_string(),
            description: "Schedule irrigation within 24h".to_string(),
            emoji: "💧".to_string(),
            resolved: false,
            created_at: now - Duration::hours(1),
        },
        Alert {
            id: 3,
            zone_id: "B4".to_string(),
            kind: IssueType::Pest,
            criticality: Criticality::Medium,
            title: "Pest Activity Detected".to_string(),
            description: "Consider pest control measures".to_string(),
            emoji: "🐛".to_string(),
            resolved: false,
            created_at: now - Duration::hours(3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_zones_with_expected_statuses() {
        let zones = seed_zones(Utc::now());
        assert_eq!(zones.len(), 12);

        let critical: Vec<&str> = zones
            .iter()
            .filter(|z| z.status == ZoneStatus::Critical)
            .map(|z| z.id.as_str())
            .collect();
        let warning: Vec<&str> = zones
            .iter()
            .filter(|z| z.status == ZoneStatus::Warning)
            .map(|z| z.id.as_str())
            .collect();

        assert_eq!(critical, ["A3"]);
        assert_eq!(warning, ["A2", "B2", "B4"]);
    }

    #[test]
    fn zone_names_derive_from_ids() {
        let zones = seed_zones(Utc::now());
        assert!(zones.iter().all(|z| z.name == format!("Zone {}", z.id)));
    }

    #[test]
    fn three_unresolved_alerts_ordered_oldest_last() {
        let now = Utc::now();
        let alerts = seed_alerts(now);
        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().all(|a| !a.resolved));
        // Seed order is newest first: 2 minutes, 1 hour, 3 hours ago.
        assert!(alerts[0].created_at > alerts[1].created_at);
        assert!(alerts[1].created_at > alerts[2].created_at);
    }
}
