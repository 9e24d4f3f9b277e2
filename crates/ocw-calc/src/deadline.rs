//! 變更期限計算

use chrono::{Datelike, NaiveDate, Weekday};
use ocw_core::BusinessCalendar;

/// 變更期限計算器
pub struct DeadlineCalculator;

impl DeadlineCalculator {
    /// 計算指定用餐日的最終可變更日
    ///
    /// 用餐日落在週日時先退出週日再回推提前期。
    /// 週日是每週回推的固定錨點，與規則版本的休息日定義無關。
    pub fn change_limit(
        eating_day: NaiveDate,
        calendar: &BusinessCalendar<'_>,
        lead_time_days: u32,
    ) -> NaiveDate {
        let mut anchor = eating_day;
        while anchor.weekday() == Weekday::Sun {
            anchor = anchor.pred_opt().expect("日期溢出");
        }

        calendar.subtract_working_days(anchor, lead_time_days)
    }
}
