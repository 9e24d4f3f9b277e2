//! 確定受注與仮受注的分界日計算
//!
//! 分界固定落在週二。以星期別固定天數表查表求得，不做搜尋。

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// 次次週二的星期別天數表（索引 0 = 週一）
const NEXT_NEXT_TUESDAY_OFFSETS: [i64; 7] = [15, 14, 13, 12, 11, 10, 16];

/// 週六 17 時以後的次次週二天數
const NEXT_NEXT_TUESDAY_SATURDAY_EVENING: i64 = 17;

/// 次週二的星期別天數表（索引 0 = 週一）
const NEXT_TUESDAY_OFFSETS: [i64; 7] = [8, 7, 6, 5, 4, 3, 9];

/// 週六 17 時以後的次週二天數
const NEXT_TUESDAY_SATURDAY_EVENING: i64 = 10;

/// 仮受注分界日計算器
pub struct TuesdayAnchor;

impl TuesdayAnchor {
    /// 次次週二
    ///
    /// 變更期間下限的上蓋。超過此日的用餐日屬於仮受注，
    /// 由別的畫面編輯。
    pub fn next_next_tuesday(now: NaiveDateTime) -> NaiveDate {
        let days = if now.weekday() == Weekday::Sat && now.hour() >= 17 {
            NEXT_NEXT_TUESDAY_SATURDAY_EVENING
        } else {
            NEXT_NEXT_TUESDAY_OFFSETS[now.weekday().num_days_from_monday() as usize]
        };
        now.date() + Duration::days(days)
    }

    /// 次週二
    pub fn next_tuesday(now: NaiveDateTime) -> NaiveDate {
        let days = if now.weekday() == Weekday::Sat && now.hour() >= 17 {
            NEXT_TUESDAY_SATURDAY_EVENING
        } else {
            NEXT_TUESDAY_OFFSETS[now.weekday().num_days_from_monday() as usize]
        };
        now.date() + Duration::days(days)
    }
}
