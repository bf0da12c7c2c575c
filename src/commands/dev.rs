use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use firecat::application::{BuildOptions, DevOptions, DevUseCase};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

use super::build::event_sink;
use super::project::{load_config, resolve_root};

pub fn cmd_dev(
    root: Option<&Path>,
    port: Option<u16>,
    host: Option<String>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(root)?;
    let mut config = load_config(&root, json)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }

    let ui = UiContext::new(json, verbose, color, &config);
    let options = DevOptions::new(BuildOptions::from_config(&root, &config), config.server.url());

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    DevUseCase::new(options).start(running, event_sink(&ui, "dev"))?;
    Ok(())
}
