use dioxus::logger::tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    info!("starting shirt store");
    dioxus::launch(shirt_store::app);
}
