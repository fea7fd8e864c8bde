use clap::Parser;
use detannounce::overlay::{OverlayItem, OverlayLayout};
use detannounce::{
    layout_overlay, Detection, FrameProcessor, FrameReport, LabelTable, ProcessConfig,
    RawDetectionSet, ResetPolicy, DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay recorded detector output (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ResetPolicyConfig {
    #[default]
    Never,
    OnEmptyFrame,
}

impl From<ResetPolicyConfig> for ResetPolicy {
    fn from(value: ResetPolicyConfig) -> Self {
        match value {
            ResetPolicyConfig::Never => ResetPolicy::Never,
            ResetPolicyConfig::OnEmptyFrame => ResetPolicy::OnEmptyFrame,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SurfaceConfig {
    width: f32,
    height: f32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    labels_path: String,
    frames_path: String,
    output_path: Option<String>,
    threshold: f32,
    reset_policy: ResetPolicyConfig,
    parallel: bool,
    surface: Option<SurfaceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels_path: String::new(),
            frames_path: String::new(),
            output_path: None,
            threshold: DEFAULT_THRESHOLD,
            reset_policy: ResetPolicyConfig::Never,
            parallel: false,
            surface: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    locations: Vec<f32>,
    classes: Vec<f32>,
    scores: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    slot: usize,
    label: String,
    score: f32,
    area: f32,
    /// `[top, left, bottom, right]` in normalized coordinates.
    bbox: [f32; 4],
}

impl From<Detection> for DetectionRecord {
    fn from(value: Detection) -> Self {
        Self {
            slot: value.slot,
            label: value.label,
            score: value.score,
            area: value.area,
            bbox: [
                value.bbox.top,
                value.bbox.left,
                value.bbox.bottom,
                value.bbox.right,
            ],
        }
    }
}

#[derive(Debug, Serialize)]
struct OverlayItemRecord {
    slot: usize,
    label: String,
    /// `[left, top, right, bottom]` in surface pixels.
    rect: [f32; 4],
    color: String,
}

impl From<OverlayItem> for OverlayItemRecord {
    fn from(value: OverlayItem) -> Self {
        Self {
            slot: value.slot,
            label: value.label,
            rect: [
                value.rect.left,
                value.rect.top,
                value.rect.right,
                value.rect.bottom,
            ],
            color: format!("#{:08X}", value.color.0),
        }
    }
}

#[derive(Debug, Serialize)]
struct OverlayRecord {
    text_size: f32,
    stroke_width: f32,
    items: Vec<OverlayItemRecord>,
}

impl From<OverlayLayout> for OverlayRecord {
    fn from(value: OverlayLayout) -> Self {
        Self {
            text_size: value.style.text_size,
            stroke_width: value.style.stroke_width,
            items: value.items.into_iter().map(OverlayItemRecord::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FrameOutput {
    index: usize,
    dominant_label: String,
    announcement: Option<String>,
    detections: Vec<DetectionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<OverlayRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    announcements: Vec<String>,
    frames: Vec<FrameOutput>,
}

fn frame_output(
    index: usize,
    report: FrameReport,
    surface: Option<&SurfaceConfig>,
) -> Result<FrameOutput, Box<dyn std::error::Error>> {
    let overlay: Option<OverlayRecord> = match surface {
        Some(s) => Some(layout_overlay(&report.detections, s.width, s.height)?.into()),
        None => None,
    };
    Ok(FrameOutput {
        index,
        dominant_label: report.dominant_label,
        announcement: report.announcement,
        detections: report
            .detections
            .into_iter()
            .map(DetectionRecord::from)
            .collect(),
        overlay,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("detannounce=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.labels_path.is_empty() || config.frames_path.is_empty() {
        return Err("labels_path and frames_path must be set in the config".into());
    }

    let labels = LabelTable::load(&config.labels_path)?;
    if labels.is_empty() {
        return Err(format!("label file {} has no labels", config.labels_path).into());
    }
    tracing::info!(labels = labels.len(), path = %config.labels_path, "loaded label table");

    let frames_text = fs::read_to_string(&config.frames_path)?;
    let records: Vec<FrameRecord> = serde_json::from_str(&frames_text)?;
    let frames = records
        .iter()
        .map(|r| RawDetectionSet::from_flat(&r.locations, &r.classes, &r.scores))
        .collect::<Result<Vec<_>, _>>()?;

    let mut processor = FrameProcessor::new(labels).with_config(ProcessConfig {
        threshold: config.threshold,
        reset_policy: config.reset_policy.into(),
        parallel: config.parallel,
    })?;
    let reports = processor.process_batch(&frames)?;

    let announcements = reports
        .iter()
        .filter_map(|r| r.announcement.clone())
        .collect();
    let frames = reports
        .into_iter()
        .enumerate()
        .map(|(index, report)| frame_output(index, report, config.surface.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let output = Output {
        announcements,
        frames,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
