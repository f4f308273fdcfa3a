// Public API exports (shared between browser and native)
pub mod config;
pub mod lazy;
pub mod shared;

// Dioxus UI
pub mod app;

// Native-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
