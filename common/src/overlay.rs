//! オーバーレイ描画のスタイルとラベルレイアウト
//!
//! キャンバスAPIに依存しない純粋な計算のみを置く。
//! 実際の描画はweb-wasm側のコンポーネントが行う

use crate::geometry::ClampedBox;

/// オーバーレイの固定スタイル
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    pub stroke_color: &'static str,
    pub line_width: f64,
    pub label_fill: &'static str,
    pub text_color: &'static str,
    pub font: &'static str,
    /// ラベル背景帯の高さ
    pub label_height: f64,
    /// 計測したテキスト幅に足す余白
    pub label_pad: f64,
    /// 帯左端からテキスト開始位置までのオフセット
    pub text_inset: f64,
    /// ボックス上辺からベースラインまでの持ち上げ量
    pub baseline_lift: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#00FF00",
            line_width: 2.0,
            label_fill: "rgba(0, 255, 0, 0.3)",
            text_color: "#000",
            font: "14px Arial",
            label_height: 18.0,
            label_pad: 8.0,
            text_inset: 4.0,
            baseline_lift: 5.0,
        }
    }
}

/// ラベル背景帯とテキスト原点の配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub band_x: f64,
    pub band_y: f64,
    pub band_width: f64,
    pub band_height: f64,
    pub text_x: f64,
    pub text_y: f64,
}

/// ボックス左上の直上にラベル帯を配置する
///
/// 帯幅は計測済みテキスト幅に合わせる。ボックスが描画面上端に
/// 近い場合は帯が面外にはみ出すが、許容される表示上の端ケース
pub fn label_layout(bbox: &ClampedBox, text_width: f64, style: &OverlayStyle) -> LabelLayout {
    LabelLayout {
        band_x: bbox.x,
        band_y: bbox.y - style.label_height,
        band_width: text_width + style.label_pad,
        band_height: style.label_height,
        text_x: bbox.x + style.text_inset,
        text_y: bbox.y - style.baseline_lift,
    }
}
