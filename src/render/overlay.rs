use anyhow::Result;
use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::jump::{JumpStatus, Phase};
use crate::pose::Pose;
use crate::render::skeleton::{
    BASELINE_COLOR, GUIDE_COLOR, HIP_COLOR, JUMP_LINE_COLOR, JUMP_TEXT_COLOR, LANDMARK_COLOR,
    LIVE_TEXT_COLOR, LOW_CONFIDENCE_COLOR, SKELETON_COLOR, SKELETON_CONNECTIONS,
    STATUS_TEXT_COLOR,
};

fn scalar(color: (f64, f64, f64)) -> Scalar {
    Scalar::new(color.0, color.1, color.2, 0.0)
}

/// 骨格とランドマークをフレームに描画
pub fn draw_pose(frame: &mut Mat, pose: &Pose, confidence_threshold: f32) -> Result<()> {
    let width = frame.cols() as u32;
    let height = frame.rows() as u32;

    // 骨格線
    for (start_idx, end_idx) in SKELETON_CONNECTIONS.iter() {
        let start = pose.get(*start_idx);
        let end = pose.get(*end_idx);

        if start.is_valid(confidence_threshold) && end.is_valid(confidence_threshold) {
            let (x1, y1) = start.to_pixel(width, height);
            let (x2, y2) = end.to_pixel(width, height);
            imgproc::line(
                frame,
                Point::new(x1, y1),
                Point::new(x2, y2),
                scalar(SKELETON_COLOR),
                2,
                imgproc::LINE_AA,
                0,
            )?;
        }
    }

    // ランドマーク点
    for lm in pose.landmarks.iter() {
        let (px, py) = lm.to_pixel(width, height);
        let color = if lm.is_valid(confidence_threshold) {
            LANDMARK_COLOR
        } else {
            LOW_CONFIDENCE_COLOR
        };
        imgproc::circle(
            frame,
            Point::new(px, py),
            3,
            scalar(color),
            -1,
            imgproc::LINE_AA,
            0,
        )?;
    }

    Ok(())
}

/// 計測状態のオーバーレイをフレームに描画
pub fn draw_status(frame: &mut Mat, status: &JumpStatus) -> Result<()> {
    let width = frame.cols();
    let height = frame.rows();

    // 腰マーカー
    if let Some((hip_x, hip_y)) = status.hip {
        imgproc::circle(
            frame,
            Point::new(hip_x as i32, hip_y as i32),
            8,
            scalar(HIP_COLOR),
            -1,
            imgproc::LINE_AA,
            0,
        )?;
    }

    // 直立基準線
    if let Some(baseline_y) = status.baseline_y {
        imgproc::line(
            frame,
            Point::new(0, baseline_y as i32),
            Point::new(width, baseline_y as i32),
            scalar(BASELINE_COLOR),
            2,
            imgproc::LINE_AA,
            0,
        )?;
    }

    // 滞空中: 基準線から腰までの縦線と瞬間高さ
    if let (Some((hip_x, hip_y)), Some(baseline_y), Some(live)) =
        (status.hip, status.baseline_y, status.live_height)
    {
        imgproc::line(
            frame,
            Point::new(hip_x as i32, baseline_y as i32),
            Point::new(hip_x as i32, hip_y as i32),
            scalar(JUMP_LINE_COLOR),
            3,
            imgproc::LINE_AA,
            0,
        )?;
        put_text(
            frame,
            &format!("Current: {}", live),
            Point::new(10, 40),
            0.8,
            LIVE_TEXT_COLOR,
        )?;
    }

    // 直近のジャンプ計測値
    if let Some(last) = status.last_jump {
        put_text(
            frame,
            &format!("Jump Height: {}", last),
            Point::new(10, 80),
            1.0,
            JUMP_TEXT_COLOR,
        )?;
    }

    // フェーズ表示
    put_text(
        frame,
        status.phase.label(),
        Point::new(10, height - 20),
        1.0,
        STATUS_TEXT_COLOR,
    )?;

    // キャリブレーション中は立ち位置ガイドを表示
    if status.phase == Phase::Calibrating && width > 100 && height > 100 {
        imgproc::rectangle(
            frame,
            Rect::new(50, 50, width - 100, height - 100),
            scalar(GUIDE_COLOR),
            3,
            imgproc::LINE_8,
            0,
        )?;
        put_text(
            frame,
            "Stand in this area",
            Point::new(width / 2 - 150, 30),
            0.8,
            GUIDE_COLOR,
        )?;
    }

    Ok(())
}

fn put_text(
    frame: &mut Mat,
    text: &str,
    origin: Point,
    scale_factor: f64,
    color: (f64, f64, f64),
) -> Result<()> {
    imgproc::put_text(
        frame,
        text,
        origin,
        imgproc::FONT_HERSHEY_SIMPLEX,
        scale_factor,
        scalar(color),
        2,
        imgproc::LINE_AA,
        false,
    )?;
    Ok(())
}
