//! PPE Vision Common Library
//!
//! Web(WASM)クライアントと共有される型とロジック:
//! - types: 検出結果・履歴レコードのワイヤ型
//! - geometry: バウンディングボックスのクランプ
//! - overlay: オーバーレイ描画のレイアウト計算
//! - summary: ラベル集計
//! - upload: アップロードライフサイクルの状態機械
//! - history: 履歴とacknowledge状態機械

pub mod error;
pub mod geometry;
pub mod history;
pub mod overlay;
pub mod summary;
pub mod types;
pub mod upload;

pub use error::{Error, Result};
pub use geometry::{clamp_box, ClampedBox};
pub use history::{AlertStatus, HistoryState};
pub use overlay::{label_layout, LabelLayout, OverlayStyle};
pub use summary::{count_description, count_labels, parse_description};
pub use types::{Detection, DetectionRecord, DetectionResult, PageResult};
pub use upload::{RequestToken, UploadState};
