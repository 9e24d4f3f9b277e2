//! 變更期限規則版本表

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::RuleVersion;
use crate::{OcwError, Result};

/// 規則版本生效區間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVersionEntry {
    /// 版本號
    pub version: u32,

    /// 生效日（含當日）
    pub effective_from: NaiveDate,
}

impl RuleVersionEntry {
    pub fn new(version: u32, effective_from: NaiveDate) -> Self {
        Self {
            version,
            effective_from,
        }
    }
}

/// 規則版本表
///
/// 參照日不早於某生效日時採用該版本，多筆符合時取最新的一筆。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleVersionTable {
    entries: Vec<RuleVersionEntry>,
}

impl RuleVersionTable {
    pub fn new(mut entries: Vec<RuleVersionEntry>) -> Self {
        entries.sort_by_key(|e| e.effective_from);
        Self { entries }
    }

    pub fn entries(&self) -> &[RuleVersionEntry] {
        &self.entries
    }

    /// 查詢指定時點適用的規則版本
    ///
    /// 締切時刻（含）以後當日已無法輸入，參照日前移一天再查表。
    /// 查無適用區間時退回版本 1。
    pub fn active_at(&self, now: NaiveDateTime, cutover_hour: u32) -> Result<RuleVersion> {
        if self.entries.is_empty() {
            return Err(OcwError::EmptyRuleVersions);
        }

        let mut reference = now.date();
        if now.hour() >= cutover_hour {
            reference += Duration::days(1);
        }

        let version = self
            .entries
            .iter()
            .filter(|e| e.effective_from <= reference)
            .last()
            .map(|e| e.version)
            .unwrap_or(1);

        Ok(if version <= 1 {
            RuleVersion::V1
        } else {
            RuleVersion::V2
        })
    }
}
