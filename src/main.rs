//! AI Chat - entry point
//!
//! Browser and desktop builds launch the Dioxus app; a plain native build
//! runs the route inspection CLI.

#[cfg(any(target_arch = "wasm32", feature = "desktop"))]
use ai_chat::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] AI Chat - WASM initialized!".into());
    dioxus::launch(App);
}

// Native desktop window
#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn main() {
    init_tracing(tracing::Level::INFO);
    tracing::info!("Starting AI Chat (desktop)...");
    dioxus::launch(App);
}

// Native without a renderer: inspect the route table
#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing(tracing::Level::WARN);
    ai_chat::cli::run_cli().await
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(level: tracing::Level) {
    // Logs go to stderr so CLI output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}
