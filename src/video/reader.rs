use anyhow::{Context, Result};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture, VideoCaptureAPIs},
};

/// OpenCVを使用した動画入力（ファイルまたはカメラ）
pub struct VideoSource {
    capture: VideoCapture,
    width: u32,
    height: u32,
    fps: f64,
    mirror: bool,
}

impl VideoSource {
    /// 動画ファイルを開く
    pub fn open_file(path: &str) -> Result<Self> {
        let capture = VideoCapture::from_file(path, VideoCaptureAPIs::CAP_ANY as i32)
            .with_context(|| format!("Failed to open video: {}", path))?;

        if !capture.is_opened()? {
            anyhow::bail!("Video {} could not be opened", path);
        }

        Self::from_capture(capture)
    }

    /// カメラを開く（解像度は指定があれば設定）
    pub fn open_camera(index: i32, width: Option<u32>, height: Option<u32>) -> Result<Self> {
        let mut capture = VideoCapture::new(index, VideoCaptureAPIs::CAP_ANY as i32)
            .context("Failed to open camera")?;

        if !capture.is_opened()? {
            anyhow::bail!("Camera {} is not available", index);
        }

        if let Some(w) = width {
            capture.set(videoio::CAP_PROP_FRAME_WIDTH, w as f64)?;
        }
        if let Some(h) = height {
            capture.set(videoio::CAP_PROP_FRAME_HEIGHT, h as f64)?;
        }
        capture.set(videoio::CAP_PROP_BUFFERSIZE, 1.0)?;

        Self::from_capture(capture)
    }

    fn from_capture(capture: VideoCapture) -> Result<Self> {
        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as u32;
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as u32;
        let fps = capture.get(videoio::CAP_PROP_FPS)?;

        Ok(Self {
            capture,
            width,
            height,
            fps,
            mirror: false,
        })
    }

    /// 左右反転を有効化（セルフィーカメラ向け）
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// 解像度を取得
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// 次のフレームを読む（BGR形式）。ストリーム終端では None
    pub fn read_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        let grabbed = self
            .capture
            .read(&mut frame)
            .context("Failed to read frame")?;

        if !grabbed || frame.empty() {
            return Ok(None);
        }

        if self.mirror {
            let mut flipped = Mat::default();
            opencv::core::flip(&frame, &mut flipped, 1)?;
            return Ok(Some(flipped));
        }

        Ok(Some(frame))
    }
}
