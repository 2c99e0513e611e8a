use crate::{
    data::{geojson::FeatureCollection, project::ProjectRecord},
    DashboardError, Result,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Seam between the engine and wherever its static resources live.
///
/// The composition root decides whether resources come from disk or HTTP;
/// tests supply an in-memory implementation.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetches the raw text of a resource by its configured location
    async fn fetch(&self, resource: &str) -> Result<String>;
}

/// Fetches resources over HTTP. Non-success status codes are treated the
/// same as transport failures: the resource is unavailable.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, resource: &str) -> Result<String> {
        let response = self.client.get(resource).send().await.map_err(|e| {
            DashboardError::DataUnavailable(format!("fetching {}: {}", resource, e))
        })?;

        if !response.status().is_success() {
            return Err(DashboardError::DataUnavailable(format!(
                "fetching {}: status {}",
                resource,
                response.status()
            ))
            .into());
        }

        Ok(response.text().await.map_err(|e| {
            DashboardError::DataUnavailable(format!("reading {}: {}", resource, e))
        })?)
    }
}

/// Fetches resources from the local filesystem, relative to a base directory
pub struct FileFetcher {
    base: PathBuf,
}

impl FileFetcher {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch(&self, resource: &str) -> Result<String> {
        let path = self.base.join(resource);
        std::fs::read_to_string(&path).map_err(|e| {
            DashboardError::DataUnavailable(format!("reading {}: {}", path.display(), e)).into()
        })
    }
}

/// Holds the raw project records, loaded once at startup and read-only
/// afterward. There is no incremental refresh.
pub struct GeoFeatureStore {
    records: Vec<ProjectRecord>,
}

impl GeoFeatureStore {
    /// Loads and validates the project collection from the given resource.
    ///
    /// Fails with `DataUnavailable` when the resource cannot be fetched or
    /// does not parse as a GeoJSON feature collection. Individual features
    /// that fail the validation pass are dropped with a warning; they never
    /// reach aggregation.
    pub async fn load(fetcher: &dyn ResourceFetcher, resource: &str) -> Result<Self> {
        let raw = fetcher.fetch(resource).await?;
        let collection = FeatureCollection::from_str(&raw).map_err(|e| {
            DashboardError::DataUnavailable(format!("parsing {}: {}", resource, e))
        })?;

        let mut records = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.iter().enumerate() {
            match ProjectRecord::from_feature(feature) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    log::warn!("dropping feature {} from {}: {}", index, resource, rejection);
                }
            }
        }

        log::info!("loaded {} project records from {}", records.len(), resource);
        Ok(Self { records })
    }

    /// Wraps already-validated records, used by tests and the generator
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// All records in source order
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Distinct country names in first-seen order
    pub fn countries(&self) -> Vec<String> {
        let mut seen = crate::prelude::HashSet::default();
        let mut countries = Vec::new();
        for record in &self.records {
            if seen.insert(record.country.clone()) {
                countries.push(record.country.clone());
            }
        }
        countries
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl ResourceFetcher for StaticFetcher {
        async fn fetch(&self, _resource: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl ResourceFetcher for FailingFetcher {
        async fn fetch(&self, resource: &str) -> Result<String> {
            Err(DashboardError::DataUnavailable(format!("no route to {}", resource)).into())
        }
    }

    const TWO_VALID_ONE_BROKEN: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "Country": "Kenya", "Region": "East Africa",
                    "Project Name": "Water Access", "Sector": "Health",
                    "Budget": 1000, "Beneficiaries": 50,
                    "Implementing Partner": "WHO"
                },
                "geometry": {"type": "Point", "coordinates": [36.82, -1.29]}
            },
            {
                "type": "Feature",
                "properties": {"Country": "Kenya"},
                "geometry": {"type": "Point", "coordinates": [36.82, -1.29]}
            },
            {
                "type": "Feature",
                "properties": {
                    "Country": "Ethiopia", "Region": "East Africa",
                    "Project Name": "School Meals", "Sector": "Education",
                    "Budget": 2000, "Beneficiaries": 120,
                    "Implementing Partner": "WFP"
                },
                "geometry": {"type": "Point", "coordinates": [38.74, 9.03]}
            }
        ]
    }
    "#;

    #[tokio::test]
    async fn test_load_drops_invalid_records() {
        let store = GeoFeatureStore::load(&StaticFetcher(TWO_VALID_ONE_BROKEN), "projects")
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.countries(), vec!["Kenya", "Ethiopia"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_data_unavailable() {
        let result = GeoFeatureStore::load(&FailingFetcher, "projects").await;
        let err = result.err().unwrap().to_string();
        assert!(err.contains("Data unavailable"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_unparseable_resource_is_data_unavailable() {
        let result = GeoFeatureStore::load(&StaticFetcher("<html>503</html>"), "projects").await;
        assert!(result.is_err());
    }
}
