//! 變更可能期間模型

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// 食數變更可能期間（含首尾兩日的用餐日範圍）
///
/// 每次查詢時重新計算，不落地保存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeWindow {
    /// 可變更的最早用餐日
    pub from_date: NaiveDate,

    /// 可變更的最晚用餐日，此後的用餐日仍為仮受注
    pub to_date: NaiveDate,
}

impl ChangeWindow {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self { from_date, to_date }
    }

    /// 用餐日是否落在可變更範圍內
    pub fn contains(&self, eating_day: NaiveDate) -> bool {
        self.from_date <= eating_day && eating_day <= self.to_date
    }

    /// 範圍天數
    pub fn span_days(&self) -> i64 {
        (self.to_date - self.from_date).num_days() + 1
    }

    /// 上下限同時回退指定天數
    pub fn shifted_back(&self, days: i64) -> Self {
        Self {
            from_date: self.from_date - Duration::days(days),
            to_date: self.to_date - Duration::days(days),
        }
    }

    /// 下限是否不晚於上限
    pub fn is_well_formed(&self) -> bool {
        self.from_date <= self.to_date
    }
}
