use std::fmt;

use super::baseline::{BaselineTracker, Calibration};
use super::observe::BodyObservation;
use crate::config::JumpConfig;

/// 計測フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Calibrating,
    Ready,
    Jumping,
}

impl Phase {
    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Calibrating => "Calibrating",
            Phase::Ready => "Ready",
            Phase::Jumping => "Jumping",
        }
    }
}

/// 単位付きの高さ
///
/// キャリブレーション済みならセンチ、換算係数が取れなかった
/// セッションではピクセルのまま。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    Centimeters(f32),
    Pixels(f32),
}

impl Height {
    pub fn value(&self) -> f32 {
        match self {
            Height::Centimeters(v) | Height::Pixels(v) => *v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Height::Centimeters(_) => "cm",
            Height::Pixels(_) => "px",
        }
    }

    fn from_pixels(pixels: f32, cm_per_px: Option<f32>) -> Self {
        match cm_per_px {
            Some(factor) => Height::Centimeters(pixels * factor),
            None => Height::Pixels(pixels),
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value(), self.unit())
    }
}

/// 1フレーム分の出力（描画コラボレーター向け）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStatus {
    pub phase: Phase,
    /// 基準線の腰高さ（確立後のみ）
    pub baseline_y: Option<f32>,
    /// このフレームで検出できた腰位置（ピクセル）
    pub hip: Option<(f32, f32)>,
    /// 滞空中の瞬間高さ。表示専用で、計測値には影響しない
    pub live_height: Option<Height>,
    /// このフレームで着地したジャンプの計測値
    pub completed: Option<Height>,
    /// 直近に完了したジャンプの計測値
    pub last_jump: Option<Height>,
}

/// ジャンプ計測セッション
///
/// 動画1本につき1個、フレームごとに update を呼ぶ。状態遷移:
/// Calibrating → Ready ⇄ Jumping。離陸は基準線より
/// takeoff_threshold_px 高く（画像Yで小さく）なった時、着地は
/// landing_threshold_px 以内に戻った時。しきい値を非対称にして
/// 基準線付近の揺れを連続ジャンプと誤認しないようにしている。
pub struct JumpSession {
    takeoff_threshold_px: f32,
    landing_threshold_px: f32,
    baseline: BaselineTracker,
    calibration: Option<Calibration>,
    /// 滞空中の腰の最小Y（＝頂点）。Some なら滞空中
    min_hip_y: Option<f32>,
    last_jump: Option<Height>,
}

impl JumpSession {
    pub fn new(config: &JumpConfig) -> Self {
        Self {
            takeoff_threshold_px: config.takeoff_threshold_px,
            landing_threshold_px: config.landing_threshold_px,
            baseline: BaselineTracker::new(config.baseline_window, config.reference_height_cm),
            calibration: None,
            min_hip_y: None,
            last_jump: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.calibration.is_none() {
            Phase::Calibrating
        } else if self.min_hip_y.is_some() {
            Phase::Jumping
        } else {
            Phase::Ready
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }

    /// フレームごとの更新
    ///
    /// obs が None（検出失敗フレーム）なら何も更新せず現状を返す。
    /// キャリブレーション中もジャンプ中も、失敗フレームで状態は
    /// リセットされない。
    pub fn update(&mut self, obs: Option<&BodyObservation>) -> JumpStatus {
        let obs = match obs {
            Some(obs) => obs,
            None => return self.status(None, None, None),
        };

        let mut completed = None;

        match self.calibration {
            None => {
                // 基準線の確立。ウィンドウが埋まったフレームでは
                // ジャンプ判定は走らない（次フレームから）
                self.calibration = self.baseline.observe(obs);
            }
            Some(cal) => match self.min_hip_y {
                None => {
                    if obs.hip_y < cal.hip_y - self.takeoff_threshold_px {
                        // 離陸。以後は最小Y（頂点）を追跡する
                        self.min_hip_y = Some(obs.hip_y);
                    }
                }
                Some(prev_min) => {
                    // ストリームはノイジーで真の頂点が着地時の値と
                    // 一致するとは限らないため、毎フレーム最小値を取る
                    let min = prev_min.min(obs.hip_y);
                    if obs.hip_y > cal.hip_y - self.landing_threshold_px {
                        // 着地。基準線から頂点までが計測値
                        let height = Height::from_pixels(cal.hip_y - min, cal.cm_per_px);
                        self.last_jump = Some(height);
                        completed = Some(height);
                        self.min_hip_y = None;
                    } else {
                        self.min_hip_y = Some(min);
                    }
                }
            },
        }

        // 滞空中のみ瞬間高さを出す（頂点ではなく現在値）
        let live_height = match (self.calibration, self.min_hip_y) {
            (Some(cal), Some(_)) => {
                Some(Height::from_pixels(cal.hip_y - obs.hip_y, cal.cm_per_px))
            }
            _ => None,
        };

        self.status(Some((obs.hip_x, obs.hip_y)), live_height, completed)
    }

    fn status(
        &self,
        hip: Option<(f32, f32)>,
        live_height: Option<Height>,
        completed: Option<Height>,
    ) -> JumpStatus {
        JumpStatus {
            phase: self.phase(),
            baseline_y: self.calibration.map(|c| c.hip_y),
            hip,
            live_height,
            completed,
            last_jump: self.last_jump,
        }
    }
}
