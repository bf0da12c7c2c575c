use std::path::{Path, PathBuf};

use anyhow::Result;
use firecat::application::{PreviewOptions, PreviewReport, PreviewUseCase};
use firecat::infrastructure::events::format_kb;
use firecat::infrastructure::LocalFs;
use firecat::ArtifactRole;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

use super::project::{load_config, resolve_root};

pub fn cmd_preview(
    root: Option<&Path>,
    out_dir: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(root)?;
    let mut config = load_config(&root, json)?;
    if let Some(out_dir) = out_dir {
        config.build.out_dir = out_dir;
    }
    if let Some(port) = port {
        config.preview.port = port;
    }
    if let Some(host) = host {
        config.preview.host = host;
    }

    let ui = UiContext::new(json, verbose, color, &config);
    let options = PreviewOptions {
        out_dir: root.join(&config.build.out_dir),
        url: config.preview.url(),
    };
    let report = PreviewUseCase::new(LocalFs::new()).load(&options)?;

    if json {
        println!("{}", render_json(&report));
    } else {
        print!("{}", render_text(&report, &ui));
    }
    Ok(())
}

fn render_json(report: &PreviewReport) -> serde_json::Value {
    serde_json::json!({
        "event": "preview",
        "command": "preview",
        "url": report.url,
        "out_dir": report.out_dir.display().to_string(),
        "entry": report.entry_url(),
        "files": report.manifest.files.len(),
        "total_size": report.manifest.total_size(),
        "missing": report.missing,
    })
}

fn render_text(report: &PreviewReport, ui: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} Preview {} at {}\n",
        paint(ui.color, icon(ui.unicode, icons::PREVIEW, icons_ascii::PREVIEW), colors::INFO),
        report.out_dir.display(),
        report.url
    ));
    out.push_str(&format!("  entry  {}\n", report.entry_url()));
    out.push_str(&format!(
        "  files  {} entry, {} chunks, {} assets ({})\n",
        report.count(ArtifactRole::Entry),
        report.count(ArtifactRole::Chunk),
        report.count(ArtifactRole::Asset),
        format_kb(report.manifest.total_size())
    ));
    if ui.verbosity >= firecat::config::Verbosity::Verbose {
        for file in &report.manifest.files {
            out.push_str(&format!(
                "  {} {}\n",
                paint(ui.color, icon(ui.unicode, icons::ARROW, icons_ascii::ARROW), colors::DIM),
                report.manifest.url(&file.file)
            ));
        }
    }
    for missing in &report.missing {
        out.push_str(&format!(
            "{} missing {}\n",
            paint(ui.color, icon(ui.unicode, icons::WARNING, icons_ascii::WARNING), colors::WARNING),
            missing
        ));
    }
    out
}
