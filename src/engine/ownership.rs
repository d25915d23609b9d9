// ==========================================
// 智慧农场记录与监测系统 - 归属过滤
// ==========================================
// 职责: 按钱包地址对各集合做归属范围过滤
// 说明: 地址比较不区分大小写; 未提供地址时一律返回空集
// ==========================================

use crate::domain::event::{IrrigationEvent, Note, StatusEntry};
use crate::domain::field::{CropBatch, Field};

// ==========================================
// Trait: Owned - 归属判定
// ==========================================
pub trait Owned {
    /// 归属钱包地址
    fn owner_wallet(&self) -> &str;
}

impl Owned for Field {
    fn owner_wallet(&self) -> &str {
        &self.owner_wallet
    }
}

impl Owned for CropBatch {
    fn owner_wallet(&self) -> &str {
        &self.owner_wallet
    }
}

impl Owned for StatusEntry {
    fn owner_wallet(&self) -> &str {
        &self.owner_wallet
    }
}

impl Owned for IrrigationEvent {
    fn owner_wallet(&self) -> &str {
        &self.owner_wallet
    }
}

impl Owned for Note {
    fn owner_wallet(&self) -> &str {
        &self.owner_wallet
    }
}

/// 单实体归属判定
pub fn is_owner<T: Owned>(item: &T, wallet: &str) -> bool {
    !wallet.is_empty() && item.owner_wallet().eq_ignore_ascii_case(wallet)
}

/// 按钱包地址过滤集合
pub fn filter_by_wallet<'a, T: Owned>(items: &'a [T], wallet: &str) -> Vec<&'a T> {
    if wallet.is_empty() {
        return Vec::new();
    }
    items.iter().filter(|item| is_owner(*item, wallet)).collect()
}

/// 归属田块
pub fn owned_fields<'a>(fields: &'a [Field], wallet: &str) -> Vec<&'a Field> {
    filter_by_wallet(fields, wallet)
}

/// 归属批次: 钱包匹配,且 (提供了田块集时) 落在归属田块内
pub fn owned_crop_batches<'a>(
    crop_batches: &'a [CropBatch],
    fields: &[Field],
    wallet: &str,
) -> Vec<&'a CropBatch> {
    if wallet.is_empty() {
        return Vec::new();
    }

    let owned_field_ids: Vec<&str> = owned_fields(fields, wallet)
        .into_iter()
        .map(|f| f.id.as_str())
        .collect();

    crop_batches
        .iter()
        .filter(|batch| {
            (owned_field_ids.is_empty() || owned_field_ids.contains(&batch.field_id.as_str()))
                && is_owner(*batch, wallet)
        })
        .collect()
}

/// 归属批次下的事件过滤 (状态历史/灌溉事件/随记共用)
fn owned_by_batch<'a, T, F>(
    items: &'a [T],
    crop_batches: &[CropBatch],
    wallet: &str,
    batch_id_of: F,
) -> Vec<&'a T>
where
    T: Owned,
    F: Fn(&T) -> &str,
{
    if wallet.is_empty() {
        return Vec::new();
    }

    let owned_batch_ids: Vec<&str> = owned_crop_batches(crop_batches, &[], wallet)
        .into_iter()
        .map(|b| b.id.as_str())
        .collect();

    items
        .iter()
        .filter(|item| owned_batch_ids.contains(&batch_id_of(item)) && is_owner(*item, wallet))
        .collect()
}

/// 归属状态历史
pub fn owned_status_history<'a>(
    history: &'a [StatusEntry],
    crop_batches: &[CropBatch],
    wallet: &str,
) -> Vec<&'a StatusEntry> {
    owned_by_batch(history, crop_batches, wallet, |s| &s.crop_batch_id)
}

/// 归属灌溉事件
pub fn owned_irrigation_events<'a>(
    events: &'a [IrrigationEvent],
    crop_batches: &[CropBatch],
    wallet: &str,
) -> Vec<&'a IrrigationEvent> {
    owned_by_batch(events, crop_batches, wallet, |e| &e.crop_batch_id)
}

/// 归属随记
pub fn owned_notes<'a>(
    notes: &'a [Note],
    crop_batches: &[CropBatch],
    wallet: &str,
) -> Vec<&'a Note> {
    owned_by_batch(notes, crop_batches, wallet, |n| &n.crop_batch_id)
}
