//! 検出履歴とacknowledge状態機械
//!
//! レコード一覧はマウント時に一度だけ取得し、以後この状態が
//! acknowledge操作の唯一の判断材料になる。acknowledgeは単調で、
//! 一度trueになったら本システム経由で戻ることはない

use std::collections::BTreeSet;

use crate::types::DetectionRecord;

/// レコードごとのアラート状態
///
/// (alert, acknowledge) の純関数。別フィールドとして保存しない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    NoAlert,
    AlertUnacknowledged,
    AlertAcknowledged,
}

impl AlertStatus {
    pub fn of(alert: bool, acknowledge: bool) -> Self {
        match (alert, acknowledge) {
            (false, _) => AlertStatus::NoAlert,
            (true, false) => AlertStatus::AlertUnacknowledged,
            (true, true) => AlertStatus::AlertAcknowledged,
        }
    }

    /// 点滅表示の対象（ユーザ対応が必要な唯一の状態）
    pub fn needs_attention(self) -> bool {
        self == AlertStatus::AlertUnacknowledged
    }
}

/// 履歴ビューの状態
///
/// pendingは発行済みでまだ応答のないacknowledge操作の集合。
/// ゲート判定と同時にpendingへ入れることで、応答前の連打が
/// 二重リクエストになるのを防ぐ
#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    records: Vec<DetectionRecord>,
    pending: BTreeSet<i64>,
    loading: bool,
}

impl HistoryState {
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// 取得成功。一覧を置き換える
    pub fn finish_loading(&mut self, records: Vec<DetectionRecord>) {
        self.records = records;
        self.loading = false;
    }

    /// 取得失敗。空一覧のまま表示に進む（自動リトライなし）
    pub fn load_failed(&mut self) {
        self.records.clear();
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn alert_status(&self, id: i64) -> AlertStatus {
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(|r| AlertStatus::of(r.alert, r.acknowledge))
            .unwrap_or(AlertStatus::NoAlert)
    }

    pub fn is_acknowledged(&self, id: i64) -> bool {
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.acknowledge)
            .unwrap_or(false)
    }

    pub fn is_ack_pending(&self, id: i64) -> bool {
        self.pending.contains(&id)
    }

    /// acknowledge操作の開始遷移
    ///
    /// ゲート: alert==true かつ acknowledge==false、かつ同じレコードの
    /// 操作が進行中でないこと。ゲートを通ればpendingに積んでtrueを返し、
    /// 呼び出し側がリモート変異を発行する。それ以外はクリック無効
    pub fn begin_acknowledge(&mut self, id: i64) -> bool {
        let eligible = self
            .records
            .iter()
            .any(|r| r.id == id && r.alert && !r.acknowledge);
        if !eligible || self.pending.contains(&id) {
            return false;
        }
        self.pending.insert(id);
        true
    }

    /// リモート変異成功。ローカルレコードをその場で更新する
    pub fn acknowledge_succeeded(&mut self, id: i64) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.acknowledge = true;
        }
        self.pending.remove(&id);
    }

    /// リモート変異失敗。ローカル状態は変えず、再操作を許す
    pub fn acknowledge_failed(&mut self, id: i64) {
        self.pending.remove(&id);
    }
}
