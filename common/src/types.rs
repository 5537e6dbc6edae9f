//! 検出結果のワイヤ型定義
//!
//! バックエンドとの間で送受信される型:
//! - Detection: 1件の検出（ラベル・信頼度・バウンディングボックス）
//! - PageResult: 1ページ分の検出列
//! - DetectionResult: POST /detect のレスポンス
//! - DetectionRecord: GET /detect が返す永続化レコード

use serde::{Deserialize, Serialize};

/// 1件の検出結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub name: String,

    /// 信頼度 [0,1]
    pub confidence: f64,

    /// 元画像ピクセル座標の (x1, y1, x2, y2)
    ///
    /// x1<=x2, y1<=y2 は保証されない。描画側でクランプする
    #[serde(rename = "box")]
    pub bbox: [f64; 4],
}

impl Detection {
    /// オーバーレイに描くラベル文字列
    ///
    /// 信頼度は百分率・小数第1位で固定（例: "helmet 93.4%"）
    pub fn confidence_label(&self) -> String {
        format!("{} {:.1}%", self.name, self.confidence * 100.0)
    }
}

/// 1ページ分の検出結果
///
/// imageWidth/imageHeightはバックエンドが申告する元解像度だが、
/// 欠落しうるため描画側は実際の表示要素のサイズのみを使う
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageResult {
    pub page: Option<u32>,
    pub detections: Vec<Detection>,
    #[serde(rename = "imageWidth")]
    pub image_width: Option<u32>,
    #[serde(rename = "imageHeight")]
    pub image_height: Option<u32>,
}

/// POST /detect のレスポンス
///
/// ライブ表示では先頭ページのみを使う
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    pub results: Vec<PageResult>,
}

impl DetectionResult {
    /// 先頭ページの検出列（なければ空）
    pub fn first_page_detections(&self) -> &[Detection] {
        self.results
            .first()
            .map(|page| page.detections.as_slice())
            .unwrap_or(&[])
    }
}

/// 永続化された検出レコード
///
/// ライフサイクルはリモートストアが所有する。クライアントは全件を
/// 一度だけ読み、acknowledgeフィールドのみをその場で更新する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionRecord {
    pub id: i64,
    pub filename: String,
    pub image_path: String,
    pub alert: bool,
    pub acknowledge: bool,

    /// JSONシリアライズされたラベル文字列リスト
    pub description: Option<String>,

    /// レスポンスに欠落している場合は空列
    pub results: Vec<PageResult>,

    pub created_at: Option<String>,
}
