//! アップロード→検出→表示のライフサイクル状態
//!
//! 複数のアップロードが同時進行しても、最後に発行したリクエストの
//! 応答だけが表示状態を更新できるよう、単調増加のシーケンス番号で
//! 古い応答を破棄する

use crate::types::{Detection, DetectionResult};

/// 発行済みリクエストの識別トークン
///
/// begin()が発行し、完了ハンドラが持ち帰る。トークンが最新の
/// シーケンス番号と一致しない応答は古いものとして捨てられる
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// アップロードコントローラの状態
///
/// フィールドは遷移関数経由でのみ変化する
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    preview_url: Option<String>,
    result: Option<DetectionResult>,
    error: Option<String>,
    loading: bool,
    seq: u64,
}

impl UploadState {
    /// ファイル選択時の遷移
    ///
    /// プレビューを先行表示し、前回の結果とエラーを破棄して
    /// 新しいリクエストのトークンを発行する
    pub fn begin(&mut self, preview_url: String) -> RequestToken {
        self.preview_url = Some(preview_url);
        self.result = None;
        self.error = None;
        self.loading = true;
        self.seq += 1;
        RequestToken(self.seq)
    }

    /// 検出成功時の遷移
    ///
    /// トークンが最新でなければ何も変更せずfalseを返す（stale破棄）
    pub fn complete(&mut self, token: RequestToken, result: DetectionResult) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.result = Some(result);
        self.loading = false;
        true
    }

    /// 検出失敗時の遷移
    ///
    /// resultには触れず、エラーを表示してloadingを下ろす。
    /// staleな失敗は成功と同様に捨てる
    pub fn fail(&mut self, token: RequestToken, message: String) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.error = Some(message);
        self.loading = false;
        true
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// ライブ表示が消費する先頭ページの検出列
    pub fn first_page_detections(&self) -> &[Detection] {
        self.result
            .as_ref()
            .map(|r| r.first_page_detections())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageResult;

    fn result_with_label(name: &str) -> DetectionResult {
        DetectionResult {
            results: vec![PageResult {
                page: Some(1),
                detections: vec![Detection {
                    name: name.to_string(),
                    confidence: 0.9,
                    bbox: [0.0, 0.0, 10.0, 10.0],
                }],
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_begin_sets_preview_and_loading() {
        let mut state = UploadState::default();
        state.begin("blob:a".to_string());
        assert_eq!(state.preview_url(), Some("blob:a"));
        assert!(state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_begin_discards_previous_result_and_error() {
        let mut state = UploadState::default();
        let t1 = state.begin("blob:a".to_string());
        assert!(state.complete(t1, result_with_label("helmet")));
        assert!(state.result().is_some());

        state.begin("blob:b".to_string());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_complete_applies_latest() {
        let mut state = UploadState::default();
        let token = state.begin("blob:a".to_string());
        assert!(state.complete(token, result_with_label("helmet")));
        assert!(!state.is_loading());
        assert_eq!(state.first_page_detections()[0].name, "helmet");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        // AのあとにBを発行し、Aの応答が後から届くケース。
        // 表示はBの結果のままでなければならない
        let mut state = UploadState::default();
        let token_a = state.begin("blob:a".to_string());
        let token_b = state.begin("blob:b".to_string());

        assert!(state.complete(token_b, result_with_label("vest")));
        assert!(!state.complete(token_a, result_with_label("helmet")));

        assert_eq!(state.first_page_detections()[0].name, "vest");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = UploadState::default();
        let token_a = state.begin("blob:a".to_string());
        let token_b = state.begin("blob:b".to_string());

        assert!(state.complete(token_b, result_with_label("vest")));
        assert!(!state.fail(token_a, "server error".to_string()));

        assert!(state.error().is_none());
        assert!(state.result().is_some());
    }

    #[test]
    fn test_fail_keeps_result_untouched() {
        let mut state = UploadState::default();
        let token = state.begin("blob:a".to_string());
        assert!(state.fail(token, "Server returned status 500".to_string()));
        assert_eq!(state.error(), Some("Server returned status 500"));
        assert!(state.result().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_first_page_detections_empty_without_result() {
        let state = UploadState::default();
        assert!(state.first_page_detections().is_empty());
    }
}
