use crate::{aggregate::AggregateIndex, core::view::ViewController};

/// One entry in the country filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEntry {
    /// The "all countries" reset control
    AllCountries,
    Country(String),
}

impl FilterEntry {
    /// Label shown to the user
    pub fn label(&self) -> &str {
        match self {
            FilterEntry::AllCountries => "All countries",
            FilterEntry::Country(name) => name,
        }
    }
}

/// The country filter panel: every distinct country present in the loaded
/// collection, preceded by an "all countries" reset control. Selecting an
/// entry drives the view controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFilterPanel {
    entries: Vec<FilterEntry>,
}

impl CountryFilterPanel {
    /// Builds the panel from the aggregates, keeping their insertion order
    pub fn from_aggregates(aggregates: &AggregateIndex) -> Self {
        let mut entries = vec![FilterEntry::AllCountries];
        entries.extend(
            aggregates
                .countries()
                .iter()
                .map(|name| FilterEntry::Country(name.clone())),
        );
        Self { entries }
    }

    /// Panel entries in display order
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Applies the entry at `index` to the view: a country entry focuses
    /// that country, the reset entry restores the world view. An
    /// out-of-range index does nothing.
    pub fn select(&self, index: usize, view: &mut ViewController) {
        match self.entries.get(index) {
            Some(FilterEntry::AllCountries) => view.reset_view(),
            Some(FilterEntry::Country(name)) => {
                view.focus_on_country(name);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aggregate::Aggregator,
        core::{geo::LatLng, view::Selection},
        data::project::ProjectRecord,
    };

    fn record(country: &str) -> ProjectRecord {
        ProjectRecord {
            country: country.to_string(),
            region: "East Africa".to_string(),
            project_name: format!("Project {}", country),
            sector: "Health".to_string(),
            budget: 100.0,
            beneficiaries: 10.0,
            implementing_partner: "WHO".to_string(),
            status: None,
            start_date: None,
            end_date: None,
            description: None,
            coordinates: LatLng::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_panel_lists_reset_then_countries() {
        let index = Aggregator::aggregate(&[
            record("Kenya"),
            record("Ethiopia"),
            record("Kenya"),
        ]);
        let panel = CountryFilterPanel::from_aggregates(&index);

        let labels: Vec<_> = panel.entries().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["All countries", "Kenya", "Ethiopia"]);
    }

    #[test]
    fn test_select_reset_clears_selection() {
        let index = Aggregator::aggregate(&[record("Kenya")]);
        let panel = CountryFilterPanel::from_aggregates(&index);
        let mut view = ViewController::new();

        panel.select(1, &mut view); // Kenya
        assert_eq!(*view.selection(), Selection::Country("Kenya".to_string()));

        panel.select(0, &mut view); // All countries
        assert_eq!(*view.selection(), Selection::None);
    }

    #[test]
    fn test_empty_collection_still_offers_reset() {
        let panel = CountryFilterPanel::from_aggregates(&Aggregator::aggregate(&[]));
        assert_eq!(panel.entries().len(), 1);
        assert_eq!(panel.entries()[0], FilterEntry::AllCountries);
    }
}
