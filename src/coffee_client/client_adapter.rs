use std::fmt;
use std::sync::Arc;

use async_std::sync::Mutex;
use lib::{
    common_errors::ConnectionError,
    service_messages::{ConsumptionReply, ConsumptionRequest, DiagnosticsReply, MachineReading},
};
use log::{info, warn};

use crate::coffee_service_client::CoffeeServiceClient;

/// Lo que el cliente concluye de la respuesta a un consumo
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SupplyDecision {
    ResupplyExpected { provision_date: String },
    StillStocked { remaining: usize },
}

/// Lo que el cliente concluye de la respuesta a un chequeo de estado
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HealthDecision {
    TechnicianScheduled { eta: String },
    IssueDetected { description: String },
}

impl From<ConsumptionReply> for SupplyDecision {
    fn from(reply: ConsumptionReply) -> Self {
        if reply.resupply_triggered {
            SupplyDecision::ResupplyExpected {
                provision_date: reply.next_provision_note,
            }
        } else {
            SupplyDecision::StillStocked {
                remaining: reply.remaining_count,
            }
        }
    }
}

impl From<DiagnosticsReply> for HealthDecision {
    fn from(reply: DiagnosticsReply) -> Self {
        if reply.healthy {
            HealthDecision::TechnicianScheduled {
                eta: reply.technician_eta,
            }
        } else {
            HealthDecision::IssueDetected {
                description: reply.issue_description,
            }
        }
    }
}

impl fmt::Display for SupplyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyDecision::ResupplyExpected { provision_date } => {
                write!(f, "Expect a new delivery by {}", provision_date)
            }
            SupplyDecision::StillStocked { remaining } => {
                write!(f, "There is still coffee. Expected remaining {}", remaining)
            }
        }
    }
}

impl fmt::Display for HealthDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthDecision::TechnicianScheduled { eta } => {
                write!(f, "Everything is fine, will send a technician by {}", eta)
            }
            HealthDecision::IssueDetected { description } => {
                write!(f, "There is an issue {}", description)
            }
        }
    }
}

/// Informa el consumo de una capsula. Un error significa que no se obtuvo respuesta.
pub async fn consume_capsule(
    service: Arc<Mutex<Box<dyn CoffeeServiceClient>>>,
    client_id: String,
    capsule_type: String,
) -> Result<SupplyDecision, ConnectionError> {
    info!(
        "[COFFEE CLIENT] Sending out the consumption of capsule by {} of type {}",
        client_id, capsule_type
    );
    let request = ConsumptionRequest {
        client_id,
        capsule_type,
    };
    let reply = service.lock().await.consumed_capsule(request).await;
    match reply {
        Ok(reply) => Ok(SupplyDecision::from(reply)),
        Err(e) => {
            warn!("[COFFEE CLIENT] RPC failed: {:?}", e);
            Err(e)
        }
    }
}

pub async fn check_machine_status(
    service: Arc<Mutex<Box<dyn CoffeeServiceClient>>>,
    reading: MachineReading,
) -> Result<HealthDecision, ConnectionError> {
    info!("[COFFEE CLIENT] Checking machine status");
    let reply = service.lock().await.check_machine_status(reading).await;
    match reply {
        Ok(reply) => Ok(HealthDecision::from(reply)),
        Err(e) => {
            warn!("[COFFEE CLIENT] RPC failed: {:?}", e);
            Err(e)
        }
    }
}
