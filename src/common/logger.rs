use std::env;

/// Configura simple_logger. Si RUST_LOG no esta definida se usa el nivel Debug.
pub fn set_logger_config() {
    let result = match env::var("RUST_LOG") {
        Ok(_) => simple_logger::init_with_env(),
        Err(_) => simple_logger::init_with_level(log::Level::Debug),
    };
    if let Err(err) = result {
        println!("Error setting logger: {:?}", err);
    }
}
