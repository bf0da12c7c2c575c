use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use firecat::application::{BuildOptions, BuildUseCase};
use firecat::domain::ports::BuildEventSink;
use firecat::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};
use firecat::Profile;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

use super::project::{load_config, resolve_root};

/// Event sink for the current output mode
pub(crate) fn event_sink(ui: &UiContext, command: &'static str) -> Arc<dyn BuildEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.verbosity, ui.color, ui.unicode))
    }
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_build(
    root: Option<&Path>,
    out_dir: Option<PathBuf>,
    base: Option<String>,
    profile: Option<Profile>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(root)?;
    let mut config = load_config(&root, json)?;
    if let Some(profile) = profile {
        config.profile = profile;
    }
    if let Some(out_dir) = out_dir {
        config.build.out_dir = out_dir;
    }
    if let Some(base) = base {
        config.build.base = Some(base);
    }

    let ui = UiContext::new(json, verbose, color, &config);
    let options = BuildOptions::from_config(&root, &config);

    BuildUseCase::new(LocalFs::new()).execute_with_events(&options, event_sink(&ui, "build"))?;
    Ok(())
}
