use super::{CatalogError, VehicleCatalog};
use crate::search::types::VehicleRecord;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Immutable catalog held in memory and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    vehicles: Arc<[VehicleRecord]>,
    latency: Duration,
    source: String,
}

impl InMemoryCatalog {
    pub fn new(vehicles: Vec<VehicleRecord>) -> Self {
        Self {
            vehicles: vehicles.into(),
            latency: Duration::ZERO,
            source: "inline".to_string(),
        }
    }

    /// The built-in 15 vehicle demo fixture.
    pub fn demo() -> Self {
        let mut catalog = Self::new(demo_vehicles());
        catalog.source = "demo fixture".to_string();
        catalog
    }

    /// Loads a JSON array of `{id, title, price, description}` records.
    ///
    /// Every price must be finite and non-negative.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vehicles: Vec<VehicleRecord> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(bad) = vehicles
            .iter()
            .find(|v| !v.price.is_finite() || v.price < 0.0)
        {
            return Err(CatalogError::InvalidPrice {
                path: path.to_path_buf(),
                id: bad.id.clone(),
                price: bad.price,
            });
        }

        tracing::debug!("Loaded {} vehicles from {}", vehicles.len(), path.display());

        let mut catalog = Self::new(vehicles);
        catalog.source = path.display().to_string();
        Ok(catalog)
    }

    /// Delays every fetch by `latency`, to imitate a remote store.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[async_trait]
impl VehicleCatalog for InMemoryCatalog {
    async fn vehicles(&self) -> Result<Arc<[VehicleRecord]>, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Arc::clone(&self.vehicles))
    }

    fn describe(&self) -> String {
        format!("{} vehicles ({})", self.vehicles.len(), self.source)
    }
}

fn vehicle(id: &str, title: &str, price: f64, description: &str) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        title: title.to_string(),
        price,
        description: description.to_string(),
    }
}

pub fn demo_vehicles() -> Vec<VehicleRecord> {
    vec![
        vehicle("1", "2023 Honda Civic", 25000.0, "Reliable sedan with great fuel economy"),
        vehicle("2", "2024 Toyota Camry", 28000.0, "Mid-size sedan with premium features"),
        vehicle("3", "2023 Ford F-150", 35000.0, "America's best-selling truck"),
        vehicle("4", "2024 Tesla Model 3", 42000.0, "Electric performance sedan"),
        vehicle("5", "2023 BMW 3 Series", 45000.0, "Luxury sports sedan"),
        vehicle("6", "2024 Chevrolet Silverado", 38000.0, "Heavy-duty pickup truck"),
        vehicle("7", "2023 Mazda CX-5", 27000.0, "Sporty compact SUV"),
        vehicle("8", "2024 Hyundai Sonata", 26000.0, "Stylish mid-size sedan"),
        vehicle("9", "2023 Subaru Outback", 31000.0, "All-wheel drive wagon"),
        vehicle("10", "2024 Jeep Wrangler", 36000.0, "Iconic off-road SUV"),
        vehicle("11", "2023 Nissan Altima", 25500.0, "Comfortable family sedan"),
        vehicle("12", "2024 Kia Telluride", 37000.0, "Spacious three-row SUV"),
        vehicle("13", "2023 Volkswagen Jetta", 24000.0, "German-engineered compact"),
        vehicle("14", "2024 Mercedes-Benz C-Class", 48000.0, "Luxury performance"),
        vehicle("15", "2023 Audi A4", 44000.0, "Premium sports sedan"),
    ]
}
