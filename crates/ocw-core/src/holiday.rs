//! 長期休假模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 長期休假區間（閉區間，含首尾兩日）
///
/// 區間內的用餐日完全不受理變更；`limit_day` 是影響到
/// 區間內用餐日的最後可輸入日，由畫面側提示用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongHolidayPeriod {
    /// 休假種別名稱
    pub name: String,

    /// 開始日
    pub start_date: NaiveDate,

    /// 結束日
    pub end_date: NaiveDate,

    /// 輸入締切日
    pub limit_day: Option<NaiveDate>,
}

impl LongHolidayPeriod {
    pub fn new(name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name,
            start_date,
            end_date,
            limit_day: None,
        }
    }

    /// 建構器模式：設置輸入締切日
    pub fn with_limit_day(mut self, limit_day: NaiveDate) -> Self {
        self.limit_day = Some(limit_day);
        self
    }

    /// 日期是否落在休假內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// 長期休假清單
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LongHolidayList {
    periods: Vec<LongHolidayPeriod>,
}

impl LongHolidayList {
    pub fn new(periods: Vec<LongHolidayPeriod>) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> &[LongHolidayPeriod] {
        &self.periods
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// 日期是否落在任一休假內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.periods.iter().any(|p| p.contains(date))
    }

    /// 自 date 起往未來找第一個不在任何休假內的日期
    ///
    /// 相鄰或重疊的休假會被連續跨越。
    pub fn next_free_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while self.contains(current) {
            current = current.succ_opt().expect("日期溢出");
        }
        current
    }

    /// 自 date 起往過去找第一個不在任何休假內的日期
    pub fn previous_free_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while self.contains(current) {
            current = current.pred_opt().expect("日期溢出");
        }
        current
    }

    /// date（含）以後最近的輸入締切日
    pub fn next_limit_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.periods
            .iter()
            .filter_map(|p| p.limit_day)
            .filter(|&d| d >= date)
            .min()
    }
}
