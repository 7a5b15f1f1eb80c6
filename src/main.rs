mod api;
mod components;
mod constants;
mod duration;
mod export;
mod models;
mod state;

use dioxus::prelude::*;

use components::common::Notification;
use components::dashboard::Dashboard;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "callmetrics=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let api_url = api_base_url();
    tracing::info!(%api_url, "starting CallMetrics dashboard");
    api::init_api_client(&api_url);

    dioxus::launch(App);
}

fn api_base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("API_URL") {
        return url;
    }
    constants::API_BASE_URL.to_string()
}

#[component]
fn App() -> Element {
    rsx! {
        style { {include_str!("../assets/styles.css")} }
        Notification {}
        Dashboard {}
    }
}
