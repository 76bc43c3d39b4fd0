use crate::pose::LandmarkIndex;

/// 骨格の接続定義 (開始ランドマーク, 終了ランドマーク)
pub const SKELETON_CONNECTIONS: [(LandmarkIndex, LandmarkIndex); 16] = [
    // 上半身
    (LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder),
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftElbow),
    (LandmarkIndex::LeftElbow, LandmarkIndex::LeftWrist),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightElbow),
    (LandmarkIndex::RightElbow, LandmarkIndex::RightWrist),
    // 胴体
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftHip),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightHip),
    (LandmarkIndex::LeftHip, LandmarkIndex::RightHip),
    // 下半身
    (LandmarkIndex::LeftHip, LandmarkIndex::LeftKnee),
    (LandmarkIndex::LeftKnee, LandmarkIndex::LeftAnkle),
    (LandmarkIndex::RightHip, LandmarkIndex::RightKnee),
    (LandmarkIndex::RightKnee, LandmarkIndex::RightAnkle),
    (LandmarkIndex::LeftAnkle, LandmarkIndex::LeftHeel),
    (LandmarkIndex::LeftHeel, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::RightAnkle, LandmarkIndex::RightHeel),
    (LandmarkIndex::RightHeel, LandmarkIndex::RightFootIndex),
];

// オーバーレイの配色 (B, G, R)

/// 骨格線
pub const SKELETON_COLOR: (f64, f64, f64) = (0.0, 255.0, 255.0);
/// ランドマーク点
pub const LANDMARK_COLOR: (f64, f64, f64) = (0.0, 255.0, 0.0);
/// 信頼度が低いランドマーク点
pub const LOW_CONFIDENCE_COLOR: (f64, f64, f64) = (0.0, 0.0, 255.0);
/// 腰マーカー
pub const HIP_COLOR: (f64, f64, f64) = (0.0, 150.0, 255.0);
/// 直立基準線
pub const BASELINE_COLOR: (f64, f64, f64) = (100.0, 255.0, 100.0);
/// 滞空中の高さ表示線
pub const JUMP_LINE_COLOR: (f64, f64, f64) = (255.0, 100.0, 0.0);
/// 瞬間高さテキスト
pub const LIVE_TEXT_COLOR: (f64, f64, f64) = (0.0, 255.0, 150.0);
/// ジャンプ計測値テキスト
pub const JUMP_TEXT_COLOR: (f64, f64, f64) = (50.0, 220.0, 255.0);
/// フェーズ表示テキスト
pub const STATUS_TEXT_COLOR: (f64, f64, f64) = (100.0, 255.0, 200.0);
/// キャリブレーション中の立ち位置ガイド
pub const GUIDE_COLOR: (f64, f64, f64) = (30.0, 150.0, 255.0);
