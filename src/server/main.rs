use std::{env, process};

use async_std::task;
use coffee_service_server::CoffeeServiceServer;
use lib::logger::set_logger_config;
use log::error;
use server_args::ServerArgs;

pub mod client_session;
pub mod coffee_service_server;
pub mod connection_server;
pub mod constants;
pub mod diagnostics_evaluator;
pub mod errors;
pub mod request_handler;
pub mod server_args;
pub mod supply_counter;

fn main() {
    set_logger_config();
    let args: Vec<String> = env::args().skip(1).collect();
    let server_args = match ServerArgs::parse(&args) {
        Ok(server_args) => server_args,
        Err(_) => {
            error!("Error setting args. Use [PORT - OPTIONAL]");
            process::exit(1);
        }
    };

    let result = task::block_on(async {
        let server = CoffeeServiceServer::new(server_args.port).await?;
        server.listen().await
    });
    if let Err(e) = result {
        error!("[SERVER] Coffee service stopped: {:?}", e);
        process::exit(1);
    }
}
