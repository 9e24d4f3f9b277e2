//! 規則版本 2 的期間計算
//!
//! 版本 2 起週六也休息。假日的落點會讓單純的順推與期限計算
//! 相差一天，下限改由變更期限的反解求得。

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use ocw_core::{BusinessCalendar, ChangeWindow, OcwError, Result, WindowSettings};

use crate::anchor::TuesdayAnchor;
use crate::deadline::DeadlineCalculator;

/// 上限的星期別天數表（索引 0 = 週一；(締切前, 締切後)）
///
/// 週五的締切一過，當週分的受付結束，分界順延一週。
/// 其餘星期兩欄相同，保留成對形式以便逐格核對。
const TO_DATE_OFFSETS: [(i64, i64); 7] = [
    (14, 14), // 週一
    (13, 13), // 週二
    (12, 12), // 週三
    (11, 11), // 週四
    (10, 17), // 週五
    (16, 16), // 週六
    (15, 15), // 週日
];

/// 反向搜尋的試行起點：錨點 +8 天保證跨過一整個週末
const SEARCH_START_OFFSET: i64 = 8;

/// 反向搜尋迭代上限，超過視為假日資料異常
const SEARCH_LIMIT: u32 = 60;

/// 版本 2 期間計算器
pub struct WindowV2;

impl WindowV2 {
    /// 計算原始變更期間（長期休假與設施別調整前）
    pub fn compute(
        now: NaiveDateTime,
        calendar: &BusinessCalendar<'_>,
        settings: &WindowSettings,
    ) -> Result<ChangeWindow> {
        let today = now.date();
        let hour = now.hour();

        // 締切時刻以後錨點無條件前移一天，休息日也不例外
        let mut anchor = today;
        if hour >= settings.cutover_hour {
            anchor += Duration::days(1);
        }

        let from_date = Self::invert_change_limit(anchor, calendar, settings.lead_time_days)?;

        let (before, after) = TO_DATE_OFFSETS[today.weekday().num_days_from_monday() as usize];
        let offset = if hour >= settings.cutover_hour {
            after
        } else {
            before
        };
        let mut to_date = today + Duration::days(offset);

        // 連續假日可能把下限推過上限，此時上限順延一週
        if from_date > to_date {
            to_date += Duration::days(7);
        }

        let mut window = ChangeWindow::new(from_date, to_date);

        // 下限不可越過仮受注分界
        let reserved_from = TuesdayAnchor::next_next_tuesday(now);
        if window.from_date > reserved_from {
            window.from_date = reserved_from;
        }

        window.from_date = settings.patched_from_date(window.from_date);

        Ok(window)
    }

    /// 反解變更期限：求期限恰好到達錨點日的最早用餐日
    ///
    /// change_limit 對用餐日單調不減，自試行起點線性掃描即可收斂。
    /// 假日資料異常破壞單調性時以迭代上限止損。
    fn invert_change_limit(
        anchor: NaiveDate,
        calendar: &BusinessCalendar<'_>,
        lead_time_days: u32,
    ) -> Result<NaiveDate> {
        let mut trial = anchor + Duration::days(SEARCH_START_OFFSET);
        let mut limit = DeadlineCalculator::change_limit(trial, calendar, lead_time_days);

        if limit == anchor {
            return Ok(trial);
        }

        if limit > anchor {
            // 期限超過錨點：往回退到期限不晚於錨點為止
            for _ in 0..SEARCH_LIMIT {
                trial = trial.pred_opt().expect("日期溢出");
                limit = DeadlineCalculator::change_limit(trial, calendar, lead_time_days);
                if limit == anchor {
                    return Ok(trial);
                }
                if limit < anchor {
                    // 跳過了錨點，前一個試行日即為首個到達錨點的用餐日
                    return Ok(trial + Duration::days(1));
                }
            }
        } else {
            // 期限未達錨點：往後推進到期限到達錨點為止
            for _ in 0..SEARCH_LIMIT {
                trial = trial.succ_opt().expect("日期溢出");
                limit = DeadlineCalculator::change_limit(trial, calendar, lead_time_days);
                if limit >= anchor {
                    return Ok(trial);
                }
            }
        }

        Err(OcwError::SearchNotConverged {
            anchor,
            limit: SEARCH_LIMIT,
        })
    }
}
