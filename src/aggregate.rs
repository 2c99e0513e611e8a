//! Per-country rollup of project records.
//!
//! A single streaming pass over the source records builds one
//! `CountryAggregate` per distinct country value, preserving first-seen
//! order throughout: aggregates iterate in order of each country's first
//! record, and the sector/partner lists keep the order their entries were
//! first encountered in.

use crate::{
    core::geo::LatLng,
    data::{geojson::Feature, project::ProjectRecord},
    prelude::HashMap,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// Per-country rollup: sums plus distinct sets over the member records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryAggregate {
    pub country: String,
    /// Member records in source order
    pub projects: Vec<ProjectRecord>,
    pub total_budget: f64,
    pub total_beneficiaries: f64,
    /// Distinct sector names in first-seen order
    pub sectors: Vec<String>,
    /// Distinct partner names in first-seen order
    pub partners: Vec<String>,
    /// Coordinate of the first record encountered for this country
    pub representative_coordinate: LatLng,
}

impl CountryAggregate {
    /// Seeds an aggregate from the first record of a country
    pub fn seed(name: impl Into<String>, record: &ProjectRecord) -> Self {
        Self {
            country: name.into(),
            projects: vec![record.clone()],
            total_budget: record.budget,
            total_beneficiaries: record.beneficiaries,
            sectors: vec![record.sector.clone()],
            partners: vec![record.implementing_partner.clone()],
            representative_coordinate: record.coordinates,
        }
    }

    /// Folds another record into the aggregate. Duplicate sectors and
    /// partners are dropped silently.
    pub fn push(&mut self, record: &ProjectRecord) {
        self.projects.push(record.clone());
        self.total_budget += record.budget;
        self.total_beneficiaries += record.beneficiaries;
        if !self.sectors.contains(&record.sector) {
            self.sectors.push(record.sector.clone());
        }
        if !self.partners.contains(&record.implementing_partner) {
            self.partners.push(record.implementing_partner.clone());
        }
    }

    /// Builds an aggregate over an arbitrary record subset, e.g. the
    /// matches of a boundary click. Returns None for an empty subset.
    pub fn over<'a>(
        name: impl Into<String>,
        records: impl IntoIterator<Item = &'a ProjectRecord>,
    ) -> Option<Self> {
        let mut iter = records.into_iter();
        let first = iter.next()?;
        let mut aggregate = Self::seed(name, first);
        for record in iter {
            aggregate.push(record);
        }
        Some(aggregate)
    }

    /// Names of the member projects, in source order
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.project_name.as_str()).collect()
    }

    /// Serializes the aggregate as a GeoJSON point feature for the derived
    /// map source
    pub fn to_point_feature(&self) -> Feature {
        let mut properties = BTreeMap::new();
        properties.insert("country".to_string(), json!(self.country));
        properties.insert("projectCount".to_string(), json!(self.projects.len()));
        properties.insert("totalBudget".to_string(), json!(self.total_budget));
        properties.insert(
            "totalBeneficiaries".to_string(),
            json!(self.total_beneficiaries),
        );
        properties.insert("sectors".to_string(), json!(self.sectors));
        properties.insert("partners".to_string(), json!(self.partners));
        Feature::point(self.representative_coordinate, properties)
    }
}

/// Mapping country → aggregate that iterates in insertion order of each
/// country's first occurrence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateIndex {
    order: Vec<String>,
    by_country: HashMap<String, CountryAggregate>,
}

impl AggregateIndex {
    /// Looks up the aggregate for a country by its exact name
    pub fn get(&self, country: &str) -> Option<&CountryAggregate> {
        self.by_country.get(country)
    }

    /// Looks up an aggregate by its position in insertion order; this is
    /// the id the aggregated-point layer echoes back on click
    pub fn get_by_position(&self, position: u32) -> Option<&CountryAggregate> {
        self.order
            .get(position as usize)
            .and_then(|country| self.by_country.get(country))
    }

    /// Iterates aggregates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CountryAggregate> {
        self.order
            .iter()
            .filter_map(move |country| self.by_country.get(country))
    }

    /// Country names in insertion order
    pub fn countries(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Groups raw project records into per-country aggregates
pub struct Aggregator;

impl Aggregator {
    /// Single pass over `records` in source order: the first record of a
    /// country seeds its aggregate, later records fold in. O(n) in total
    /// records, no sorting. An empty input yields an empty index, which
    /// downstream renders as "no countries available" rather than failing.
    pub fn aggregate(records: &[ProjectRecord]) -> AggregateIndex {
        let mut index = AggregateIndex::default();
        for record in records {
            match index.by_country.get_mut(&record.country) {
                Some(aggregate) => aggregate.push(record),
                None => {
                    index.order.push(record.country.clone());
                    index
                        .by_country
                        .insert(record.country.clone(), CountryAggregate::seed(record.country.as_str(), record));
                }
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, budget: f64, beneficiaries: f64, sector: &str, partner: &str) -> ProjectRecord {
        ProjectRecord {
            country: country.to_string(),
            region: "East Africa".to_string(),
            project_name: format!("{} {}", sector, country),
            sector: sector.to_string(),
            budget,
            beneficiaries,
            implementing_partner: partner.to_string(),
            status: None,
            start_date: None,
            end_date: None,
            description: None,
            coordinates: LatLng::new(-1.0, 36.0),
        }
    }

    #[test]
    fn test_kenya_rollup_scenario() {
        let records = vec![
            record("Kenya", 1000.0, 50.0, "Health", "WHO"),
            record("Kenya", 2000.0, 30.0, "Health", "UNICEF"),
        ];

        let index = Aggregator::aggregate(&records);
        let kenya = index.get("Kenya").unwrap();

        assert_eq!(kenya.total_budget, 3000.0);
        assert_eq!(kenya.total_beneficiaries, 80.0);
        assert_eq!(kenya.sectors, vec!["Health"]);
        assert_eq!(kenya.partners, vec!["WHO", "UNICEF"]);
        assert_eq!(kenya.projects.len(), 2);
    }

    #[test]
    fn test_totals_are_conserved() {
        let records = vec![
            record("Kenya", 1000.0, 50.0, "Health", "WHO"),
            record("Ethiopia", 500.0, 20.0, "Education", "WFP"),
            record("Kenya", 2000.0, 30.0, "Water", "UNICEF"),
            record("Uganda", 750.0, 10.0, "Health", "WHO"),
        ];

        let index = Aggregator::aggregate(&records);

        let budget_sum: f64 = index.iter().map(|a| a.total_budget).sum();
        let beneficiaries_sum: f64 = index.iter().map(|a| a.total_beneficiaries).sum();
        assert_eq!(budget_sum, records.iter().map(|r| r.budget).sum::<f64>());
        assert_eq!(
            beneficiaries_sum,
            records.iter().map(|r| r.beneficiaries).sum::<f64>()
        );
    }

    #[test]
    fn test_one_aggregate_per_distinct_country() {
        let records = vec![
            record("Kenya", 1.0, 1.0, "Health", "WHO"),
            record("Ethiopia", 1.0, 1.0, "Health", "WHO"),
            record("Kenya", 1.0, 1.0, "Health", "WHO"),
        ];

        let index = Aggregator::aggregate(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.countries(), &["Kenya", "Ethiopia"]);
    }

    #[test]
    fn test_empty_input_yields_empty_index() {
        let index = Aggregator::aggregate(&[]);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_first_seen_order_and_no_duplicates() {
        let records = vec![
            record("Kenya", 1.0, 1.0, "Water", "UNICEF"),
            record("Kenya", 1.0, 1.0, "Health", "WHO"),
            record("Kenya", 1.0, 1.0, "Water", "WHO"),
            record("Kenya", 1.0, 1.0, "Education", "UNICEF"),
        ];

        let kenya = Aggregator::aggregate(&records).get("Kenya").unwrap().clone();
        assert_eq!(kenya.sectors, vec!["Water", "Health", "Education"]);
        assert_eq!(kenya.partners, vec!["UNICEF", "WHO"]);
    }

    #[test]
    fn test_representative_coordinate_is_first_record() {
        let mut first = record("Kenya", 1.0, 1.0, "Health", "WHO");
        first.coordinates = LatLng::new(-1.29, 36.82);
        let mut second = record("Kenya", 1.0, 1.0, "Health", "WHO");
        second.coordinates = LatLng::new(0.05, 37.65);

        let index = Aggregator::aggregate(&[first.clone(), second]);
        assert_eq!(
            index.get("Kenya").unwrap().representative_coordinate,
            first.coordinates
        );
    }

    #[test]
    fn test_over_subset() {
        let records = vec![
            record("South Sudan", 100.0, 5.0, "Food", "WFP"),
            record("Sudan", 200.0, 7.0, "Health", "WHO"),
        ];
        let refs: Vec<&ProjectRecord> = records.iter().collect();

        let aggregate = CountryAggregate::over("Sudan", refs).unwrap();
        assert_eq!(aggregate.total_budget, 300.0);
        assert_eq!(aggregate.projects.len(), 2);

        assert!(CountryAggregate::over("Nowhere", Vec::new()).is_none());
    }

    #[test]
    fn test_point_feature_roundtrip() {
        let index = Aggregator::aggregate(&[record("Kenya", 1000.0, 50.0, "Health", "WHO")]);
        let feature = index.get("Kenya").unwrap().to_point_feature();

        assert_eq!(feature.string_property("country"), Some("Kenya"));
        assert_eq!(feature.number_property("totalBudget"), Some(1000.0));
        let point = feature.geometry.unwrap().as_point().unwrap();
        assert_eq!(point, LatLng::new(-1.0, 36.0));
    }
}
