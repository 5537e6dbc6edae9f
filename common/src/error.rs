//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// detections配列やresults配列の欠落はエラーではなく空列として扱う
#[derive(Error, Debug)]
pub enum Error {
    /// リクエスト自体が失敗した（fetch拒否など）
    #[error("Network error: {0}")]
    Network(String),

    /// サーバが非成功ステータスを返した
    #[error("Server returned status {0}")]
    Status(u16),

    /// 保存済みラベルリスト(description)がパースできない
    #[error("Malformed description: {0}")]
    MalformedDescription(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("fetch rejected".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("fetch rejected"));
    }

    #[test]
    fn test_error_display_status() {
        let error = Error::Status(500);
        assert_eq!(format!("{}", error), "Server returned status 500");
    }

    #[test]
    fn test_error_display_malformed_description() {
        let error = Error::MalformedDescription("expected array".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Malformed description"));
        assert!(display.contains("expected array"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Status(404);
        let debug = format!("{:?}", error);
        assert!(debug.contains("Status"));
        assert!(debug.contains("404"));
    }
}
