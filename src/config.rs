use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub jump: JumpConfig,
    #[serde(default)]
    pub pose: PoseConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JumpConfig {
    /// 基準線を確立するフレーム数
    #[serde(default = "default_baseline_window")]
    pub baseline_window: usize,
    /// 離陸判定のしきい値（ピクセル）
    #[serde(default = "default_takeoff_threshold")]
    pub takeoff_threshold_px: f32,
    /// 着地判定のしきい値（ピクセル、離陸より狭い）
    #[serde(default = "default_landing_threshold")]
    pub landing_threshold_px: f32,
    /// 被写体の実身長（センチ）
    #[serde(default = "default_reference_height")]
    pub reference_height_cm: f32,
}

fn default_baseline_window() -> usize { 30 }
fn default_takeoff_threshold() -> f32 { 15.0 }
fn default_landing_threshold() -> f32 { 5.0 }
fn default_reference_height() -> f32 { 170.0 }

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            baseline_window: default_baseline_window(),
            takeoff_threshold_px: default_takeoff_threshold(),
            landing_threshold_px: default_landing_threshold(),
            reference_height_cm: default_reference_height(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PoseConfig {
    /// ONNXモデルファイルのパス
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// ランドマーク信頼度のしきい値
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
}

fn default_model_path() -> String { "models/pose_landmark_full.onnx".to_string() }
fn default_confidence_threshold() -> f32 { 0.3 }

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VideoConfig {
    /// 左右反転（セルフィーカメラ向け）
    #[serde(default)]
    pub mirror: bool,
    /// 引数なしで起動した場合に使うカメラindex
    #[serde(default)]
    pub camera_index: i32,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 設定ファイルが無い・壊れている場合はデフォルトで起動する
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
