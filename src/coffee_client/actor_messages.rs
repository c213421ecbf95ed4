use actix::Message;
use lib::{common_errors::ConnectionError, service_messages::MachineReading};

use crate::client_adapter::{HealthDecision, SupplyDecision};

#[derive(Message, Clone)]
#[rtype(result = "Result<SupplyDecision, ConnectionError>")]
pub struct ConsumeCapsule {
    pub client_id: String,
    pub capsule_type: String,
}

#[derive(Message, Clone)]
#[rtype(result = "Result<HealthDecision, ConnectionError>")]
pub struct CheckMachineStatus(pub MachineReading);

#[derive(Message, Clone)]
#[rtype(result = "Result<(), ConnectionError>")]
pub struct Disconnect;
