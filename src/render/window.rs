use anyhow::Result;
use minifb::{Key, Window, WindowOptions};
use opencv::core::Mat;
use opencv::prelude::*;

/// minifbを使用した表示ウィンドウ
pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        let buffer = vec![0u32; width * height];

        Ok(Self {
            window,
            buffer,
            width,
            height,
        })
    }

    /// ウィンドウが開いているか（ESCで閉じる）
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// 注釈済みのBGR Matをウィンドウに表示
    pub fn show(&mut self, frame: &Mat) -> Result<()> {
        let rows = frame.rows() as usize;
        let cols = frame.cols() as usize;
        let step = frame.step1(0)?;
        let data = frame.data_bytes()?;

        // BGR -> 0RGB。フレームとウィンドウのサイズ差は重なる分だけコピー
        for y in 0..self.height.min(rows) {
            let row = &data[y * step..];
            for x in 0..self.width.min(cols) {
                let b = row[x * 3] as u32;
                let g = row[x * 3 + 1] as u32;
                let r = row[x * 3 + 2] as u32;
                self.buffer[y * self.width + x] = (r << 16) | (g << 8) | b;
            }
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }
}
