//! 變更期間計算設定

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// 特定日期的下限補正
///
/// 計算出的下限恰為 `date` 時前移 `shift_days` 天。
/// 純資料性的個別補正，不是邏輯分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromDatePatch {
    /// 命中的計算結果日期
    pub date: NaiveDate,

    /// 前移天數（正值為往未來）
    pub shift_days: i64,
}

/// 變更期間計算設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// 提前期（營業日數）
    pub lead_time_days: u32,

    /// 當日締切時刻：此時刻（含）以後提前期實質多一天
    pub cutover_hour: u32,

    /// 週六傍晚締切時刻：週日訂單可輸入到週六此時刻之前
    pub saturday_evening_hour: u32,

    /// 版本 2 下限的日期別補正表
    pub from_date_patches: Vec<FromDatePatch>,
}

impl WindowSettings {
    pub fn new() -> Self {
        Self {
            lead_time_days: 6,
            cutover_hour: 10,
            saturday_evening_hour: 17,
            // 2024 年黃金週的假日主檔缺漏造成下限早算一天，以補正吸收
            from_date_patches: vec![FromDatePatch {
                date: NaiveDate::from_ymd_opt(2024, 5, 7).expect("補正表日期字面值"),
                shift_days: 1,
            }],
        }
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    /// 建構器模式：設置當日締切時刻
    pub fn with_cutover_hour(mut self, hour: u32) -> Self {
        self.cutover_hour = hour;
        self
    }

    /// 建構器模式：替換下限補正表
    pub fn with_from_date_patches(mut self, patches: Vec<FromDatePatch>) -> Self {
        self.from_date_patches = patches;
        self
    }

    /// 對計算出的下限套用補正表
    pub fn patched_from_date(&self, from_date: NaiveDate) -> NaiveDate {
        match self.from_date_patches.iter().find(|p| p.date == from_date) {
            Some(patch) => from_date + Duration::days(patch.shift_days),
            None => from_date,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = WindowSettings::default();

        assert_eq!(settings.lead_time_days, 6);
        assert_eq!(settings.cutover_hour, 10);
        assert_eq!(settings.saturday_evening_hour, 17);
        assert_eq!(settings.from_date_patches.len(), 1);
    }

    #[test]
    fn test_patch_applies_only_on_exact_hit() {
        let settings = WindowSettings::default();

        assert_eq!(settings.patched_from_date(ymd(2024, 5, 7)), ymd(2024, 5, 8));
        assert_eq!(settings.patched_from_date(ymd(2024, 5, 6)), ymd(2024, 5, 6));
        assert_eq!(settings.patched_from_date(ymd(2024, 5, 8)), ymd(2024, 5, 8));
    }

    #[test]
    fn test_builder() {
        let settings = WindowSettings::new()
            .with_lead_time_days(4)
            .with_cutover_hour(12)
            .with_from_date_patches(Vec::new());

        assert_eq!(settings.lead_time_days, 4);
        assert_eq!(settings.cutover_hour, 12);
        assert!(settings.from_date_patches.is_empty());
    }
}
