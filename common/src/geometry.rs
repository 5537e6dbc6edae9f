//! バウンディングボックスのクランプ

/// 描画面内にクランプ済みのバウンディングボックス
///
/// 不変条件: 0 <= x <= x+width <= 描画面幅、0 <= y <= y+height <= 描画面高さ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 生のボックス座標を描画面サイズにクランプする
///
/// (x1,y1,x2,y2) を (max(0,x1), max(0,y1), min(W,x2), min(H,y2)) に丸める。
/// クランプ後に幅または高さが0以下になるボックス（反転座標や面外の
/// ボックスを含む）はNoneを返し、呼び出し側は描画をスキップする
///
/// # Arguments
/// * `bbox` - 元画像ピクセル座標の (x1, y1, x2, y2)
/// * `surface_width` - 描画面の幅
/// * `surface_height` - 描画面の高さ
///
/// # Returns
/// * `Some(ClampedBox)` - 描画可能なクランプ済みボックス
/// * `None` - 退化ボックス（描画しない）
pub fn clamp_box(bbox: [f64; 4], surface_width: f64, surface_height: f64) -> Option<ClampedBox> {
    let [x1, y1, x2, y2] = bbox;

    let x1 = x1.max(0.0);
    let y1 = y1.max(0.0);
    let x2 = x2.min(surface_width);
    let y2 = y2.min(surface_height);

    if x2 <= x1 || y2 <= y1 {
        return None;
    }

    Some(ClampedBox {
        x: x1,
        y: y1,
        width: x2 - x1,
        height: y2 - y1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_box_inside_unchanged() {
        let clamped = clamp_box([10.0, 20.0, 50.0, 60.0], 100.0, 100.0).expect("描画可能のはず");
        assert_eq!(clamped.x, 10.0);
        assert_eq!(clamped.y, 20.0);
        assert_eq!(clamped.width, 40.0);
        assert_eq!(clamped.height, 40.0);
    }

    #[test]
    fn test_clamp_box_negative_origin() {
        // (-10,-5,50,60) を 100x100 にクランプすると (0,0,50,60)
        let clamped = clamp_box([-10.0, -5.0, 50.0, 60.0], 100.0, 100.0).expect("描画可能のはず");
        assert_eq!(clamped.x, 0.0);
        assert_eq!(clamped.y, 0.0);
        assert_eq!(clamped.width, 50.0);
        assert_eq!(clamped.height, 60.0);
    }

    #[test]
    fn test_clamp_box_overflow_right_bottom() {
        let clamped = clamp_box([80.0, 90.0, 150.0, 160.0], 100.0, 100.0).expect("描画可能のはず");
        assert_eq!(clamped.x, 80.0);
        assert_eq!(clamped.y, 90.0);
        assert_eq!(clamped.width, 20.0);
        assert_eq!(clamped.height, 10.0);
    }

    #[test]
    fn test_clamp_box_inverted_is_skipped() {
        // x2 < x1 の反転ボックスは黙ってスキップ
        assert!(clamp_box([50.0, 10.0, 30.0, 60.0], 100.0, 100.0).is_none());
        assert!(clamp_box([10.0, 60.0, 30.0, 50.0], 100.0, 100.0).is_none());
    }

    #[test]
    fn test_clamp_box_zero_area_is_skipped() {
        assert!(clamp_box([10.0, 10.0, 10.0, 60.0], 100.0, 100.0).is_none());
    }

    #[test]
    fn test_clamp_box_fully_outside_is_skipped() {
        assert!(clamp_box([150.0, 150.0, 200.0, 200.0], 100.0, 100.0).is_none());
        assert!(clamp_box([-50.0, -50.0, -10.0, -10.0], 100.0, 100.0).is_none());
    }

    #[test]
    fn test_clamp_box_invariant_holds() {
        // 描画可能と判定された全ボックスで 0<=x<=x+w<=W, 0<=y<=y+h<=H
        let (w, h) = (100.0, 80.0);
        let coords = [-120.0, -10.0, 0.0, 15.0, 79.0, 80.0, 100.0, 250.0];

        for &x1 in &coords {
            for &y1 in &coords {
                for &x2 in &coords {
                    for &y2 in &coords {
                        if let Some(c) = clamp_box([x1, y1, x2, y2], w, h) {
                            assert!(c.x >= 0.0);
                            assert!(c.y >= 0.0);
                            assert!(c.width > 0.0);
                            assert!(c.height > 0.0);
                            assert!(c.x + c.width <= w);
                            assert!(c.y + c.height <= h);
                        }
                    }
                }
            }
        }
    }
}
