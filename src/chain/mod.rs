// ==========================================
// 智慧农场记录与监测系统 - 模拟账本服务
// ==========================================
// 职责: 模拟"上链保存"的异步提交,返回伪造交易哈希
// 说明: 固定延迟的定时器替代真实网络,无顺序/取消保证;
//       核心派生与导入模块不依赖本服务
// ==========================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use crate::domain::event::{IrrigationEvent, Note, StatusEntry};

// ==========================================
// LedgerReceipt - 提交回执
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerReceipt {
    pub success: bool,              // 提交是否成功
    pub tx_hash: String,            // 交易哈希 (0x + 64 位十六进制)
    pub action: String,             // 提交动作标识
    pub timestamp: DateTime<Utc>,   // 提交时间
}

// ==========================================
// Trait: LedgerClient - 账本客户端接口
// ==========================================
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// 提交一笔记录
    async fn submit(&self, action: &str, payload: Value) -> LedgerReceipt;
}

// ==========================================
// SimulatedLedger - 模拟账本
// ==========================================
pub struct SimulatedLedger {
    latency: Duration,
}

impl SimulatedLedger {
    /// 构造函数
    ///
    /// # 参数
    /// - latency_ms: 模拟提交延迟 (毫秒)
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    /// 伪造交易哈希: 0x 前缀 + 64 位十六进制
    fn fake_tx_hash() -> String {
        format!(
            "0x{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        )
    }

    /// 保存灌溉事件
    pub async fn save_irrigation_event(
        &self,
        event: &IrrigationEvent,
    ) -> anyhow::Result<LedgerReceipt> {
        let payload = serde_json::to_value(event)?;
        Ok(self.submit("addIrrigationEvent", payload).await)
    }

    /// 保存状态记录
    pub async fn save_status_change(&self, entry: &StatusEntry) -> anyhow::Result<LedgerReceipt> {
        let payload = serde_json::to_value(entry)?;
        Ok(self.submit("addStatusChange", payload).await)
    }

    /// 保存随记
    pub async fn save_note(&self, note: &Note) -> anyhow::Result<LedgerReceipt> {
        let payload = serde_json::to_value(note)?;
        Ok(self.submit("addNote", payload).await)
    }
}

#[async_trait]
impl LedgerClient for SimulatedLedger {
    async fn submit(&self, action: &str, _payload: Value) -> LedgerReceipt {
        // 固定延迟模拟网络往返
        tokio::time::sleep(self.latency).await;

        let receipt = LedgerReceipt {
            success: true,
            tx_hash: Self::fake_tx_hash(),
            action: action.to_string(),
            timestamp: Utc::now(),
        };

        tracing::debug!(action, tx_hash = %receipt.tx_hash, "模拟账本提交完成");

        receipt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample::sample_dataset;

    #[tokio::test]
    async fn test_submit_returns_well_formed_receipt() {
        let ledger = SimulatedLedger::new(0);

        let receipt = ledger.submit("addNote", Value::Null).await;

        assert!(receipt.success);
        assert_eq!(receipt.action, "addNote");
        assert_eq!(receipt.tx_hash.len(), 66); // "0x" + 64
        assert!(receipt.tx_hash.starts_with("0x"));
        assert!(receipt.tx_hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_tx_hashes_are_unique() {
        let ledger = SimulatedLedger::new(0);

        let first = ledger.submit("addNote", Value::Null).await;
        let second = ledger.submit("addNote", Value::Null).await;

        assert_ne!(first.tx_hash, second.tx_hash);
    }

    #[tokio::test]
    async fn test_save_wrappers_set_actions() {
        let ledger = SimulatedLedger::new(0);
        let dataset = sample_dataset();

        let receipt = ledger
            .save_irrigation_event(&dataset.irrigation_events[0])
            .await
            .expect("提交失败");
        assert_eq!(receipt.action, "addIrrigationEvent");

        let receipt = ledger
            .save_status_change(&dataset.status_history[0])
            .await
            .expect("提交失败");
        assert_eq!(receipt.action, "addStatusChange");

        let receipt = ledger
            .save_note(&dataset.notes[0])
            .await
            .expect("提交失败");
        assert_eq!(receipt.action, "addNote");
    }
}
