use serde::{Deserialize, Serialize};

/// Aviso de que un cliente consumio una capsula. El client_id no particiona el stock.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRequest {
    pub client_id: String,
    pub capsule_type: String,
}

/// Respuesta a un consumo. remaining_count vale cuando no hay reposicion,
/// next_provision_note cuando si la hay.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionReply {
    pub resupply_triggered: bool,
    pub remaining_count: usize,
    pub next_provision_note: String,
}

/// Lectura de sensores de una cafetera
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MachineReading {
    pub water_temperature: f32,
    pub connected_seconds: i64,
    pub last_capsule_pressure: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsReply {
    pub healthy: bool,
    pub issue_description: String,
    pub technician_eta: String,
}

/// Las operaciones que expone el servicio
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ServiceRequest {
    ConsumedCapsule(ConsumptionRequest),
    CheckMachineStatus(MachineReading),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ServiceResponse {
    ConsumedCapsule(ConsumptionReply),
    CheckMachineStatus(DiagnosticsReply),
}
