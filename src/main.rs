use tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    tracing::info!(site = lumen_site::config::SITE_NAME, "Launching site");
    dioxus::launch(lumen_site::app::App);
}
