use log::{info, warn};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(chronicle_frontend::config::log_level())
        .expect("error initializing log");

    info!("Starting page enhancements");
    if let Err(e) = chronicle_frontend::run() {
        warn!("Page enhancements disabled: {}", e);
    }
}
