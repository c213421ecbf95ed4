use lib::service_messages::{
    ConsumptionReply, ConsumptionRequest, DiagnosticsReply, MachineReading, ServiceRequest,
    ServiceResponse,
};
use log::{debug, info};

use crate::diagnostics_evaluator::DiagnosticsEvaluator;
use crate::supply_counter::SupplyCounter;

/// Atiende los pedidos de todos los clientes de una cafetera. Es el unico dueño del stock,
/// que comparten todos los clientes sin importar su id.
pub struct RequestHandler {
    supply: SupplyCounter,
    diagnostics: Box<dyn DiagnosticsEvaluator + Send + Sync>,
}

impl RequestHandler {
    pub fn new(diagnostics: Box<dyn DiagnosticsEvaluator + Send + Sync>) -> RequestHandler {
        RequestHandler {
            supply: SupplyCounter::new(),
            diagnostics,
        }
    }

    pub fn handle(&self, request: ServiceRequest) -> ServiceResponse {
        match request {
            ServiceRequest::ConsumedCapsule(req) => {
                ServiceResponse::ConsumedCapsule(self.handle_consumption(req))
            }
            ServiceRequest::CheckMachineStatus(reading) => {
                ServiceResponse::CheckMachineStatus(self.handle_diagnostics(reading))
            }
        }
    }

    pub fn handle_consumption(&self, req: ConsumptionRequest) -> ConsumptionReply {
        info!(
            "[REQUEST HANDLER] Capsule of type {} consumed by {}",
            req.capsule_type, req.client_id
        );
        let reply = self.supply.consume();
        debug!("[REQUEST HANDLER] Consumption reply {:?}", reply);
        reply
    }

    pub fn handle_diagnostics(&self, reading: MachineReading) -> DiagnosticsReply {
        info!("[REQUEST HANDLER] Checking machine status {:?}", reading);
        self.diagnostics.evaluate(&reading)
    }

    pub fn remaining_supply(&self) -> usize {
        self.supply.remaining()
    }
}
