//! 銷售日換算表
//!
//! 用餐日回推固定天數得到銷售計上日，回推天數依生效日切換。

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{OcwError, Result};

/// 銷售日換算的生效區間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesDayEntry {
    /// 回推天數
    pub adjust_days: i64,

    /// 生效日（含當日）
    pub effective_from: NaiveDate,
}

impl SalesDayEntry {
    pub fn new(adjust_days: i64, effective_from: NaiveDate) -> Self {
        Self {
            adjust_days,
            effective_from,
        }
    }
}

/// 銷售日換算表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDayTable {
    entries: Vec<SalesDayEntry>,
}

impl SalesDayTable {
    pub fn new(mut entries: Vec<SalesDayEntry>) -> Self {
        entries.sort_by_key(|e| e.effective_from);
        Self { entries }
    }

    /// 查詢用餐日適用的回推天數
    pub fn adjust_days_for(&self, eating_day: NaiveDate) -> Result<i64> {
        self.entries
            .iter()
            .filter(|e| e.effective_from <= eating_day)
            .last()
            .map(|e| e.adjust_days)
            .ok_or(OcwError::SalesDayNotConfigured(eating_day))
    }

    /// 由用餐日計算銷售計上日
    pub fn sales_day_for(&self, eating_day: NaiveDate) -> Result<NaiveDate> {
        Ok(eating_day - Duration::days(self.adjust_days_for(eating_day)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table() -> SalesDayTable {
        SalesDayTable::new(vec![
            SalesDayEntry::new(2, ymd(2000, 1, 1)),
            SalesDayEntry::new(3, ymd(2024, 2, 25)),
        ])
    }

    #[test]
    fn test_before_switch() {
        assert_eq!(
            table().sales_day_for(ymd(2023, 1, 1)).unwrap(),
            ymd(2022, 12, 30)
        );
    }

    #[test]
    fn test_day_before_switch_keeps_old_offset() {
        assert_eq!(
            table().sales_day_for(ymd(2024, 2, 24)).unwrap(),
            ymd(2024, 2, 22)
        );
    }

    #[test]
    fn test_switch_day_uses_new_offset() {
        assert_eq!(
            table().sales_day_for(ymd(2024, 2, 25)).unwrap(),
            ymd(2024, 2, 22)
        );
    }

    #[test]
    fn test_after_switch() {
        assert_eq!(
            table().sales_day_for(ymd(2024, 2, 26)).unwrap(),
            ymd(2024, 2, 23)
        );
    }

    #[test]
    fn test_no_applicable_entry() {
        let table = SalesDayTable::new(vec![SalesDayEntry::new(3, ymd(2024, 2, 25))]);

        assert!(matches!(
            table.sales_day_for(ymd(2020, 1, 1)),
            Err(OcwError::SalesDayNotConfigured(_))
        ));
    }
}
