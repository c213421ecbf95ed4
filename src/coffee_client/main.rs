pub mod actor_messages;
pub mod client_adapter;
pub mod client_args;
pub mod coffee_client;
pub mod coffee_service_client;
pub mod constants;
pub mod errors;

use std::{env, process};

use actix::{Actor, Addr};
use actix_rt::System;

use actor_messages::{CheckMachineStatus, ConsumeCapsule, Disconnect};
use client_args::ClientArgs;
use coffee_client::CoffeeClient;
use coffee_service_client::TcpCoffeeServiceClient;
use constants::{
    REFERENCE_CAPSULE_PRESSURE, REFERENCE_CONNECTED_SECONDS, REFERENCE_WATER_TEMPERATURE,
};
use lib::logger::set_logger_config;
use lib::service_messages::MachineReading;
use log::{error, warn};

async fn run(client: Addr<CoffeeClient>, args: ClientArgs) {
    let consumed = client
        .send(ConsumeCapsule {
            client_id: args.client_id,
            capsule_type: args.capsule_type,
        })
        .await;
    if let Err(e) = consumed {
        error!("[COFFEE CLIENT] Unable to deliver consumption to client actor, {}", e);
    }

    let reading = MachineReading {
        water_temperature: REFERENCE_WATER_TEMPERATURE,
        connected_seconds: REFERENCE_CONNECTED_SECONDS,
        last_capsule_pressure: REFERENCE_CAPSULE_PRESSURE,
    };
    if let Err(e) = client.send(CheckMachineStatus(reading)).await {
        error!("[COFFEE CLIENT] Unable to deliver status check to client actor, {}", e);
    }

    match client.send(Disconnect).await {
        Ok(Err(e)) => warn!("[COFFEE CLIENT] Error closing connection {:?}", e),
        Err(e) => error!("[COFFEE CLIENT] Unable to deliver disconnect to client actor, {}", e),
        Ok(Ok(())) => {}
    }
}

pub fn main() {
    set_logger_config();
    let args: Vec<String> = env::args().skip(1).collect();
    let args = match ClientArgs::parse(&args) {
        Ok(args) => args,
        Err(_) => {
            error!("Error setting args. Use [CLIENT_ID] [CAPSULE_TYPE] [HOST] [PORT], all optional");
            process::exit(1);
        }
    };

    let system = System::new();
    system.block_on(async {
        let service = TcpCoffeeServiceClient::new(args.server_addr());
        let client = CoffeeClient::new(Box::new(service)).start();
        run(client, args).await;
    });
}
