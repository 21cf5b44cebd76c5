use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;

// Request para crear un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub label: String,
}

// Request para renombrar un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub label: String,
}

// Response con la lista completa tras cada cambio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<Vehicle>,
}
