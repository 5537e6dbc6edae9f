//! 検出サービスとのfetch連携
//!
//! - POST {base}/detect: multipartで画像を送信して検出結果を得る
//! - GET {base}/detect: 履歴レコード全件を取得する
//! - PUT {base}/detect/{id}/ack: レコードをacknowledge済みにする
//!
//! リトライ・タイムアウト・キャンセルはどれも行わない。
//! 失敗は発生させた操作の中で終端し、再試行はユーザ操作に任せる

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use ppe_vision_common::{DetectionRecord, DetectionResult, Error, Result};

use crate::config;

fn js_error(context: &str, value: JsValue) -> Error {
    Error::Network(format!("{}: {:?}", context, value))
}

/// リクエストを発行し、成功ステータスのレスポンスのみ返す
async fn fetch_with_request(request: &Request) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window取得失敗".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| js_error("fetch失敗", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("Responseへの変換失敗", e))?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }
    Ok(resp)
}

/// レスポンスボディのJSONをデシリアライズする
async fn response_json<T>(resp: &Response) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let promise = resp.json().map_err(|e| js_error("json()失敗", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("ボディ読み取り失敗", e))?;
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| Error::Network(format!("レスポンス解析失敗: {}", e)))
}

/// 画像ファイルを検出エンドポイントへ送信する
///
/// multipartボディのフィールド名は"file"。Content-Typeは
/// ブラウザがboundary付きで設定するため指定しない
pub async fn detect_file(file: &web_sys::File) -> Result<DetectionResult> {
    let form = FormData::new().map_err(|e| js_error("FormData作成失敗", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| js_error("ファイル追加失敗", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&config::detect_endpoint(), &opts)
        .map_err(|e| js_error("リクエスト作成失敗", e))?;

    let resp = fetch_with_request(&request).await?;
    response_json(&resp).await
}

/// 履歴レコードを全件取得する（ページングなし・一度きり）
pub async fn fetch_records() -> Result<Vec<DetectionRecord>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&config::detect_endpoint(), &opts)
        .map_err(|e| js_error("リクエスト作成失敗", e))?;

    let resp = fetch_with_request(&request).await?;
    response_json(&resp).await
}

/// レコードをacknowledge済みにする
///
/// ボディなしのPUT。成功ステータスならacknowledge成立とみなし、
/// レスポンスボディは読まない
pub async fn acknowledge_record(id: i64) -> Result<()> {
    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&config::ack_endpoint(id), &opts)
        .map_err(|e| js_error("リクエスト作成失敗", e))?;

    fetch_with_request(&request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use ppe_vision_common::{DetectionRecord, DetectionResult};

    // =============================================
    // ワイヤ形式テスト（バックエンドの実レスポンス形）
    // =============================================

    #[test]
    fn test_detect_response_deserialize() {
        let body = r#"{
            "id": 12,
            "filename": "site.jpg",
            "image_url": "http://localhost:8000/uploads/site.jpg",
            "alert": true,
            "acknowledge": false,
            "description": ["helmet", "vest"],
            "results": [{
                "page": 1,
                "detections": [
                    {"name": "helmet", "confidence": 0.93, "box": [12.5, 8.0, 120.0, 96.5]}
                ]
            }]
        }"#;

        // 検出ビューはresults以外のフィールドを無視してよい
        let result: DetectionResult = serde_json::from_str(body).expect("デシリアライズ失敗");
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.first_page_detections()[0].name, "helmet");
    }

    #[test]
    fn test_records_response_deserialize() {
        let body = r#"[
            {"id": 2, "filename": "b.jpg", "image_path": "/uploads/b.jpg",
             "result_json": "[]", "description": "[\"vest\"]",
             "alert": true, "acknowledge": false,
             "created_at": "2025-11-01T10:00:00"},
            {"id": 1, "filename": "a.jpg", "image_path": "/uploads/a.jpg",
             "alert": false, "acknowledge": true}
        ]"#;

        let records: Vec<DetectionRecord> = serde_json::from_str(body).expect("デシリアライズ失敗");
        assert_eq!(records.len(), 2);
        // 生レコードにresultsはないので空列に落ちる
        assert!(records[0].results.is_empty());
        assert_eq!(records[0].description.as_deref(), Some("[\"vest\"]"));
        assert!(records[1].acknowledge);
    }
}
