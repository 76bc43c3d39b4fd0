use anyhow::{Context, Result};
use ndarray::Array4;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;

use super::keypoint::{Landmark, LandmarkIndex, Pose};
use super::preprocess::POSE_INPUT_SIZE;

/// MediaPipe Pose (BlazePose) 系ランドマークモデルを使用した姿勢検出器
pub struct PoseDetector {
    session: Session,
}

impl PoseDetector {
    /// ONNXモデルを読み込んで初期化
    pub fn new<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path.as_ref())
            .context("Failed to load ONNX model")?;

        Ok(Self { session })
    }

    /// 前処理済みテンソルから姿勢を検出
    ///
    /// 入力: [1, 256, 256, 3] の f32 テンソル (0.0-1.0)
    /// 出力: Pose (33ランドマーク)
    pub fn detect(&mut self, input: Array4<f32>) -> Result<Pose> {
        let input_tensor = Tensor::from_array(input)?;
        let outputs = self
            .session
            .run(ort::inputs!["input_1" => input_tensor])
            .context("Inference failed")?;

        // 出力は [1, 195]: 33ランドマーク × (x, y, z, visibility, presence)
        // x, y は入力ピクセルスケール、visibility はロジット
        let output: ndarray::ArrayViewD<f32> = outputs["Identity"]
            .try_extract_array()
            .context("Failed to extract output tensor")?;

        let scale = POSE_INPUT_SIZE as f32;
        let mut landmarks = [Landmark::default(); LandmarkIndex::COUNT];

        for i in 0..LandmarkIndex::COUNT {
            let x = output[[0, i * 5]] / scale;
            let y = output[[0, i * 5 + 1]] / scale;
            let visibility = output[[0, i * 5 + 3]];

            landmarks[i] = Landmark::new(x, y, sigmoid(visibility));
        }

        Ok(Pose::new(landmarks))
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_range() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
    }
}
