//! ラベル集計
//!
//! ライブ検出の先頭ページ、または履歴レコードのdescription
//! （JSONシリアライズ済みラベルリスト）からラベル別件数を導出する

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// ラベル列を出現回数のマップに集計する
///
/// 完全一致の文字列でグルーピングし、出現ごとに1加算する。
/// 入力順序に依存せず、空の入力は空のマップになる
pub fn count_labels<'a, I>(labels: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// descriptionのJSON文字列をラベルリストにパースする
///
/// # Returns
/// * `Ok(Vec<String>)` - パース成功
/// * `Err(Error::MalformedDescription)` - JSON文字列配列として読めない場合。
///   呼び出し側は「検出なし」として表示する
pub fn parse_description(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| Error::MalformedDescription(e.to_string()))
}

/// descriptionをパースしてラベル別件数に集計する
pub fn count_description(raw: &str) -> Result<BTreeMap<String, usize>> {
    let labels = parse_description(raw)?;
    Ok(count_labels(labels.iter().map(String::as_str)))
}
