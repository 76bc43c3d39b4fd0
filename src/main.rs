use anyhow::Result;
use std::time::Instant;

use jump_tracker::config::Config;
use jump_tracker::jump::{BodyObservation, JumpSession};
use jump_tracker::pose::{preprocess_frame, PoseDetector};
use jump_tracker::render::{draw_pose, draw_status, MinifbRenderer};
use jump_tracker::video::VideoSource;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== Jump Tracker ===");
    println!("Press ESC to exit");

    // 動画ソース: 引数があればファイル、なければカメラ
    let mut source = match std::env::args().nth(1) {
        Some(path) => {
            println!("動画ファイル: {}", path);
            VideoSource::open_file(&path)?
        }
        None => {
            println!("カメラ {} を使用", config.video.camera_index);
            VideoSource::open_camera(config.video.camera_index, Some(640), Some(480))?
        }
    }
    .with_mirror(config.video.mirror);

    let (width, height) = source.resolution();
    println!("解像度: {}x{} ({:.1} fps)", width, height, source.fps());

    println!("Loading model from {}...", config.pose.model_path);
    let mut detector = PoseDetector::new(&config.pose.model_path)?;
    println!("Model loaded");

    let mut session = JumpSession::new(&config.jump);
    let mut renderer = MinifbRenderer::new("Jump Tracker", width as usize, height as usize)?;

    // FPS計測用
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    // メインループ: フレーム読み込み → 推論 → 計測 → 描画
    while renderer.is_open() {
        let mut frame = match source.read_frame()? {
            Some(f) => f,
            None => {
                println!("ストリーム終端");
                break;
            }
        };

        let input = preprocess_frame(&frame)?;
        let pose = detector.detect(input)?;

        let obs =
            BodyObservation::from_pose(&pose, width, height, config.pose.confidence_threshold);
        let status = session.update(obs.as_ref());

        if let Some(measured) = status.completed {
            println!("ジャンプ計測: {}", measured);
        }

        draw_pose(&mut frame, &pose, config.pose.confidence_threshold)?;
        draw_status(&mut frame, &status)?;
        renderer.show(&frame)?;

        // FPS計算
        frame_count += 1;
        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            println!(
                "FPS: {:.1}, Avg confidence: {:.2} [{}]",
                frame_count as f32 / elapsed,
                pose.average_confidence(),
                status.phase.label()
            );
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }

    println!("Shutting down...");
    Ok(())
}
