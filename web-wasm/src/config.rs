//! APIエンドポイント設定

/// 検出サービスのベースURL
///
/// ビルド時に環境変数 PPE_API_BASE_URL で与える。
/// 未設定なら空文字列になり、全リクエストが不正なURLを指す
pub const API_BASE_URL: &str = match option_env!("PPE_API_BASE_URL") {
    Some(url) => url,
    None => "",
};

/// POST(検出) / GET(履歴一覧) 共通のエンドポイント
pub fn detect_endpoint() -> String {
    format!("{}/detect", API_BASE_URL)
}

/// レコードacknowledge用のエンドポイント
pub fn ack_endpoint(id: i64) -> String {
    format!("{}/detect/{}/ack", API_BASE_URL, id)
}

/// 履歴サムネイルの画像URL（ベースURLと保存パスの連結）
pub fn image_url(image_path: &str) -> String {
    format!("{}{}", API_BASE_URL, image_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_endpoint_path() {
        assert!(detect_endpoint().ends_with("/detect"));
    }

    #[test]
    fn test_ack_endpoint_contains_id() {
        let url = ack_endpoint(42);
        assert!(url.ends_with("/detect/42/ack"));
    }

    #[test]
    fn test_image_url_concatenates_path() {
        let url = image_url("/uploads/site.jpg");
        assert!(url.ends_with("/uploads/site.jpg"));
        assert!(url.starts_with(API_BASE_URL));
    }
}
