use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::Vehicle;
use crate::repositories::LogbookRepository;
use crate::services::vehicle_slug;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::validate_not_empty;

/// Meses que se borran junto con un vehículo
const MONTHS: std::ops::RangeInclusive<u32> = 1..=12;

pub struct VehicleController {
    repository: LogbookRepository,
}

impl VehicleController {
    pub fn new(repository: LogbookRepository) -> Self {
        Self { repository }
    }

    /// Lista guardada para modificarla. Sin lista o con JSON ilegible se
    /// guarda el vehículo por defecto; un fallo del backend se propaga.
    async fn stored_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        match self.repository.load_vehicles().await {
            Ok(Some(vehicles)) if !vehicles.is_empty() => return Ok(vehicles),
            Ok(_) => {}
            Err(e) if e.is_serialization() => {
                warn!("⚠️ Lista de vehículos ilegible, se usa la de defecto: {}", e);
            }
            Err(e) => return Err(e),
        }

        let vehicles = vec![Vehicle::default_vehicle()];
        self.repository.save_vehicles(&vehicles).await?;
        Ok(vehicles)
    }

    /// Lista de vehículos. Si el backend falla se devuelve el vehículo por
    /// defecto sin guardar nada.
    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        match self.stored_vehicles().await {
            Err(e) if e.is_storage() => {
                warn!("⚠️ No se pudo leer la lista de vehículos: {}", e);
                Ok(vec![Vehicle::default_vehicle()])
            }
            result => result,
        }
    }

    pub async fn find(&self, id: &str) -> AppResult<Vehicle> {
        self.stored_vehicles()
            .await?
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        let label = validate_not_empty(&request.label, "label")?;

        let mut vehicles = self.stored_vehicles().await?;
        let slug = vehicle_slug(&label);
        let mut millis = Utc::now().timestamp_millis();
        let mut id = format!("{}-{}", slug, millis);
        while vehicles.iter().any(|v| v.id == id) {
            millis += 1;
            id = format!("{}-{}", slug, millis);
        }

        let vehicle = Vehicle::new(id, label);
        vehicles.push(vehicle.clone());
        self.repository.save_vehicles(&vehicles).await?;

        info!("🚗 Vehículo creado: {} ({})", vehicle.label, vehicle.id);
        Ok(vehicle)
    }

    pub async fn rename(&self, id: &str, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        let label = validate_not_empty(&request.label, "label")?;

        let mut vehicles = self.stored_vehicles().await?;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;
        vehicle.label = label;
        let renamed = vehicle.clone();

        self.repository.save_vehicles(&vehicles).await?;
        info!("✏️ Vehículo renombrado: {} → {}", renamed.id, renamed.label);
        Ok(renamed)
    }

    /// Borra el vehículo y sus doce meses. Si la lista queda vacía vuelve el
    /// vehículo por defecto.
    pub async fn delete(&self, id: &str) -> AppResult<Vec<Vehicle>> {
        let mut vehicles = self.stored_vehicles().await?;
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        if vehicles.len() == before {
            return Err(not_found_error("Vehicle", id));
        }

        for month in MONTHS {
            self.repository.remove_rows(id, month).await?;
        }

        if vehicles.is_empty() {
            vehicles.push(Vehicle::default_vehicle());
        }
        self.repository.save_vehicles(&vehicles).await?;

        info!("🗑️ Vehículo eliminado: {}", id);
        Ok(vehicles)
    }
}
