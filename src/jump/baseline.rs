use super::observe::BodyObservation;

/// キャリブレーション結果。一度確定したらセッション中は不変。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// 直立時の腰の基準高さ（ピクセル、ウィンドウ平均）
    pub hip_y: f32,
    /// ピクセル→センチ換算係数。身長スパンが取れなかった場合は None
    /// （以後の計測はピクセル単位にフォールバックする）
    pub cm_per_px: Option<f32>,
}

/// 直立基準のキャリブレーショントラッカー
///
/// 有効フレームの腰高さを固定長ウィンドウに溜め、満杯になった
/// フレームで基準線と換算係数に畳み込む。検出失敗フレームは
/// 呼び出し側で弾かれるため、ウィンドウは有効フレームでのみ進む。
pub struct BaselineTracker {
    window: usize,
    reference_height_cm: f32,
    samples: Vec<f32>,
}

impl BaselineTracker {
    pub fn new(window: usize, reference_height_cm: f32) -> Self {
        Self {
            window,
            reference_height_cm,
            samples: Vec::with_capacity(window),
        }
    }

    /// 溜まったサンプル数
    pub fn observed(&self) -> usize {
        self.samples.len()
    }

    /// ウィンドウ長
    pub fn window(&self) -> usize {
        self.window
    }

    /// 有効フレーム1枚分のサンプルを追加する
    ///
    /// ウィンドウが埋まるまで None。埋まった呼び出しで基準線（平均）と
    /// 換算係数を確定して返す。換算係数はそのフレームの鼻〜かかとの
    /// ピクセルスパンから求める。スパンが0なら係数は None のまま
    /// （クラッシュもリトライもしない）。
    pub fn observe(&mut self, obs: &BodyObservation) -> Option<Calibration> {
        self.samples.push(obs.hip_y);
        if self.samples.len() < self.window {
            return None;
        }

        let hip_y = self.samples.iter().sum::<f32>() / self.samples.len() as f32;

        let body_span_px = (obs.nose_y - obs.heel_y).abs();
        let cm_per_px = if body_span_px > 0.0 {
            Some(self.reference_height_cm / body_span_px)
        } else {
            None
        };

        Some(Calibration { hip_y, cm_per_px })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_obs(hip_y: f32, nose_y: f32, heel_y: f32) -> BodyObservation {
        BodyObservation {
            hip_x: 320.0,
            hip_y,
            nose_y,
            heel_y,
        }
    }

    #[test]
    fn test_none_until_window_filled() {
        let mut tracker = BaselineTracker::new(30, 170.0);
        for _ in 0..29 {
            assert!(tracker.observe(&make_obs(500.0, 100.0, 600.0)).is_none());
        }
        assert_eq!(tracker.observed(), 29);
        assert!(tracker.observe(&make_obs(500.0, 100.0, 600.0)).is_some());
    }

    #[test]
    fn test_constant_input_gives_exact_baseline() {
        let mut tracker = BaselineTracker::new(30, 170.0);
        let mut result = None;
        for _ in 0..30 {
            result = tracker.observe(&make_obs(500.0, 100.0, 600.0));
        }
        let cal = result.unwrap();
        assert_eq!(cal.hip_y, 500.0);
    }

    #[test]
    fn test_baseline_is_window_mean() {
        let mut tracker = BaselineTracker::new(4, 170.0);
        tracker.observe(&make_obs(498.0, 100.0, 600.0));
        tracker.observe(&make_obs(502.0, 100.0, 600.0));
        tracker.observe(&make_obs(499.0, 100.0, 600.0));
        let cal = tracker.observe(&make_obs(501.0, 100.0, 600.0)).unwrap();
        assert!((cal.hip_y - 500.0).abs() < 1e-4);
    }

    #[test]
    fn test_conversion_factor_from_body_span() {
        let mut tracker = BaselineTracker::new(1, 170.0);
        // 鼻y=100, かかとy=600 → スパン500px → 0.34 cm/px
        let cal = tracker.observe(&make_obs(500.0, 100.0, 600.0)).unwrap();
        let factor = cal.cm_per_px.unwrap();
        assert!((factor - 0.34).abs() < 1e-6);
    }

    #[test]
    fn test_span_sign_independent() {
        let mut tracker = BaselineTracker::new(1, 170.0);
        // 上下が逆でも絶対値でスパンを取る
        let cal = tracker.observe(&make_obs(500.0, 600.0, 100.0)).unwrap();
        let factor = cal.cm_per_px.unwrap();
        assert!((factor - 0.34).abs() < 1e-6);
    }

    #[test]
    fn test_zero_body_span_leaves_factor_unset() {
        let mut tracker = BaselineTracker::new(2, 170.0);
        tracker.observe(&make_obs(500.0, 300.0, 300.0));
        let cal = tracker.observe(&make_obs(500.0, 300.0, 300.0)).unwrap();
        assert!(cal.cm_per_px.is_none());
        assert_eq!(cal.hip_y, 500.0);
    }

    #[test]
    fn test_factor_uses_filling_frame_only() {
        let mut tracker = BaselineTracker::new(3, 170.0);
        // 途中のフレームのスパンは使われない
        tracker.observe(&make_obs(500.0, 0.0, 0.0));
        tracker.observe(&make_obs(500.0, 250.0, 251.0));
        let cal = tracker.observe(&make_obs(500.0, 100.0, 600.0)).unwrap();
        assert!((cal.cm_per_px.unwrap() - 0.34).abs() < 1e-6);
    }
}
