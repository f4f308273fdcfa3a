//! Route table inspection CLI (native only)

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dioxus::prelude::Routable;
use serde_json::json;

use crate::app::routes::Route;
use crate::app::views::PageViews;
use crate::config::RouterConfig;

#[derive(Parser)]
#[command(name = "ai-chat")]
#[command(about = "Inspect the AI Chat client route table")]
pub struct Cli {
    /// Base URL the app is served under (overrides AI_CHAT_BASE_URL)
    #[arg(long, global = true)]
    pub base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the named routes
    Routes,
    /// Resolve a URL and load its view
    Resolve {
        /// URL as typed in the address bar, e.g. "/chat?message=hi"
        url: String,
    },
    /// Build a URL from a route name
    Href {
        /// Route name (e.g. Input, Chat)
        name: String,
        /// Initial message for the Chat route
        #[arg(long)]
        message: Option<String>,
    },
}

pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = RouterConfig::from_env();
    if let Some(base) = cli.base {
        config = config.with_base(base);
    }

    let output = match cli.command {
        Commands::Routes => list_routes(&config),
        Commands::Resolve { url } => resolve_url(&config, &PageViews::default(), &url).await?,
        Commands::Href { name, message } => json!({ "href": href_for(&config, &name, message)? }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn list_routes(config: &RouterConfig) -> serde_json::Value {
    let routes: Vec<_> = Route::static_routes()
        .iter()
        .map(|route| {
            json!({
                "name": route.name(),
                "path": config.with_base_prefix(&route.href()),
                "view": route.page().map(|page| page.as_str()),
                "has_props": route.has_props(),
            })
        })
        .collect();
    json!({ "base": &config.base, "routes": routes })
}

async fn resolve_url(
    config: &RouterConfig,
    views: &PageViews,
    url: &str,
) -> anyhow::Result<serde_json::Value> {
    if !url.starts_with('/') {
        bail!("URL must start with '/': {}", url);
    }
    let path = match config.strip_base(url) {
        rest if rest.starts_with('/') => rest.to_string(),
        rest => format!("/{}", rest),
    };
    let route = Route::resolve(&path)?;
    let activation = views
        .activate(&route)
        .await
        .with_context(|| format!("Failed to activate {}", route.name()))?;
    Ok(serde_json::to_value(activation)?)
}

fn href_for(config: &RouterConfig, name: &str, message: Option<String>) -> anyhow::Result<String> {
    let route = match (Route::named(name)?, message) {
        (Route::Chat { .. }, Some(message)) => Route::chat(message),
        (_, Some(_)) => bail!("Route '{}' takes no message", name),
        (route, None) => route,
    };
    Ok(config.with_base_prefix(&route.href()))
}
