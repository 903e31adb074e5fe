//! Record filtering service
//!
//! Pure predicate combining free-text search, a vehicle selector and
//! date criteria. Criteria AND-combine; the result keeps source order.

use crate::types::{DeliveryRecord, VehicleType};
use chrono::NaiveDate;

/// Transient filter criteria for the table views; never persisted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring over courier, address, recipient and
    /// delivery-type label; empty matches everything
    pub query: String,

    /// Exact vehicle match; None shows all vehicles
    pub vehicle: Option<VehicleType>,

    /// Inclusive lower date bound
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper date bound
    pub date_to: Option<NaiveDate>,

    /// Exact-date match, independent of the range bounds
    pub date_exact: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.vehicle.is_none()
            && !self.has_date_criterion()
    }

    fn has_date_criterion(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some() || self.date_exact.is_some()
    }
}

/// Compute the visible subset of `records` under `criteria`
pub fn filter_records(
    records: &[DeliveryRecord],
    criteria: &FilterCriteria,
) -> Vec<DeliveryRecord> {
    records
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect()
}

/// Single-record predicate
pub fn matches(record: &DeliveryRecord, criteria: &FilterCriteria) -> bool {
    let query = criteria.query.trim().to_lowercase();
    if !query.is_empty() {
        let haystack = format!(
            "{} {} {} {}",
            record.courier_name,
            record.address,
            record.recipient_name,
            record.delivery_type.label()
        )
        .to_lowercase();
        if !haystack.contains(&query) {
            return false;
        }
    }

    if let Some(vehicle) = criteria.vehicle {
        if record.vehicle != vehicle {
            return false;
        }
    }

    if criteria.has_date_criterion() {
        // A date that fails to parse never matches a date criterion
        let Some(date) = record.parsed_date() else {
            return false;
        };
        if let Some(from) = criteria.date_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = criteria.date_to {
            if date > to {
                return false;
            }
        }
        if let Some(exact) = criteria.date_exact {
            if date != exact {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryDraft, DeliveryRecord};

    fn record(date: &str, vehicle: VehicleType, address: &str, courier: &str) -> DeliveryRecord {
        DeliveryRecord::from_draft(DeliveryDraft {
            courier_name: courier.to_string(),
            amount: "10".to_string(),
            date: date.to_string(),
            vehicle,
            address: address.to_string(),
            ..Default::default()
        })
    }

    fn sample() -> Vec<DeliveryRecord> {
        vec![
            record("2024-01-01", VehicleType::Car, "A St", "Bob"),
            record("2024-02-01", VehicleType::Bicycle, "B Ave", "Alice"),
        ]
    }

    #[test]
    fn test_empty_criteria_passes_everything() {
        let records = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_records(&records, &criteria), records);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = sample();
        let criteria = FilterCriteria {
            query: "alice".to_string(),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].courier_name, "Alice");
    }

    #[test]
    fn test_query_matches_address_and_type() {
        let records = sample();
        let by_address = FilterCriteria {
            query: "b ave".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &by_address).len(), 1);

        let by_type = FilterCriteria {
            query: "local".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &by_type).len(), 2);
    }

    #[test]
    fn test_vehicle_filter() {
        let records = sample();
        let criteria = FilterCriteria {
            vehicle: Some(VehicleType::Car),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].address, "A St");
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let records = sample();
        let criteria = FilterCriteria {
            date_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            date_to: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, "2024-01-01");
    }

    #[test]
    fn test_exact_date_filter() {
        let records = sample();
        let criteria = FilterCriteria {
            date_exact: Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, "2024-02-01");
    }

    #[test]
    fn test_malformed_date_never_matches_date_criteria() {
        let mut records = sample();
        records.push(record("not-a-date", VehicleType::Car, "C Rd", "Carol"));

        let criteria = FilterCriteria {
            date_from: Some(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.address != "C Rd"));

        // Without a date criterion the malformed record still shows
        let result = filter_records(&records, &FilterCriteria::default());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let records = sample();
        let criteria = FilterCriteria {
            query: "alice".to_string(),
            vehicle: Some(VehicleType::Car),
            ..Default::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            query: "a".to_string(),
            ..Default::default()
        };
        let once = filter_records(&records, &criteria);
        let twice = filter_records(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_record_set() {
        let criteria = FilterCriteria {
            query: "anything".to_string(),
            ..Default::default()
        };
        assert!(filter_records(&[], &criteria).is_empty());
    }
}
