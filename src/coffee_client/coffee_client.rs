use std::sync::Arc;

use actix::{Actor, ActorFutureExt, Context, Handler, ResponseActFuture, WrapFuture};
use async_std::sync::Mutex;
use lib::common_errors::ConnectionError;
use log::{debug, info};

use crate::actor_messages::{CheckMachineStatus, ConsumeCapsule, Disconnect};
use crate::client_adapter::{check_machine_status, consume_capsule, HealthDecision, SupplyDecision};
use crate::coffee_service_client::CoffeeServiceClient;

/// Actor que habla con el servicio de cafe. El cliente queda detras de un mutex,
/// por lo que nunca hay mas de una llamada en curso.
pub struct CoffeeClient {
    service: Arc<Mutex<Box<dyn CoffeeServiceClient>>>,
}

impl CoffeeClient {
    pub fn new(service: Box<dyn CoffeeServiceClient>) -> CoffeeClient {
        CoffeeClient {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

impl Actor for CoffeeClient {
    type Context = Context<Self>;
}

impl Handler<ConsumeCapsule> for CoffeeClient {
    type Result = ResponseActFuture<Self, Result<SupplyDecision, ConnectionError>>;

    fn handle(&mut self, msg: ConsumeCapsule, _ctx: &mut Context<Self>) -> Self::Result {
        debug!("[COFFEE CLIENT] Received message to consume a capsule");
        let service = self.service.clone();
        Box::pin(
            consume_capsule(service, msg.client_id, msg.capsule_type)
                .into_actor(self)
                .map(|result, _me, _ctx| {
                    if let Ok(decision) = &result {
                        info!("[COFFEE CLIENT] {}", decision);
                    }
                    result
                }),
        )
    }
}

impl Handler<CheckMachineStatus> for CoffeeClient {
    type Result = ResponseActFuture<Self, Result<HealthDecision, ConnectionError>>;

    fn handle(&mut self, msg: CheckMachineStatus, _ctx: &mut Context<Self>) -> Self::Result {
        debug!("[COFFEE CLIENT] Received message to check machine status");
        let service = self.service.clone();
        Box::pin(
            check_machine_status(service, msg.0)
                .into_actor(self)
                .map(|result, _me, _ctx| {
                    if let Ok(decision) = &result {
                        info!("[COFFEE CLIENT] {}", decision);
                    }
                    result
                }),
        )
    }
}

impl Handler<Disconnect> for CoffeeClient {
    type Result = ResponseActFuture<Self, Result<(), ConnectionError>>;

    fn handle(&mut self, _msg: Disconnect, _ctx: &mut Context<Self>) -> Self::Result {
        let service = self.service.clone();
        Box::pin(
            async move {
                let result = service.lock().await.disconnect().await;
                result
            }
            .into_actor(self),
        )
    }
}
