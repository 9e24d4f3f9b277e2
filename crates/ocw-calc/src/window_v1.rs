//! 規則版本 1 的期間計算

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use ocw_core::{BusinessCalendar, ChangeWindow, WindowSettings};

use crate::anchor::TuesdayAnchor;

/// 上限的星期別天數表（索引 0 = 週一）
const TO_DATE_OFFSETS: [i64; 7] = [14, 13, 12, 11, 10, 9, 15];

/// 週六 17 時以後的上限天數：週日訂單到週六傍晚為止仍可輸入
const SATURDAY_EVENING_OFFSET: i64 = 16;

/// 版本 1 期間計算器
pub struct WindowV1;

impl WindowV1 {
    /// 計算原始變更期間（長期休假與設施別調整前）
    pub fn compute(
        now: NaiveDateTime,
        calendar: &BusinessCalendar<'_>,
        settings: &WindowSettings,
    ) -> ChangeWindow {
        let today = now.date();
        let hour = now.hour();

        // 營業日的締切時刻以後，當日分的受付已結束，提前期多一天
        let mut lead = settings.lead_time_days;
        if calendar.is_working_day(today) && hour >= settings.cutover_hour {
            lead += 1;
        }
        let from_date = calendar.add_working_days(today, lead);

        let offset = if today.weekday() == Weekday::Sat && hour >= settings.saturday_evening_hour {
            SATURDAY_EVENING_OFFSET
        } else {
            TO_DATE_OFFSETS[today.weekday().num_days_from_monday() as usize]
        };
        let mut to_date = today + Duration::days(offset);

        // 連續假日可能把下限推過上限，此時上限順延一週
        if from_date > to_date {
            to_date += Duration::days(7);
        }

        let mut window = ChangeWindow::new(from_date, to_date);

        // 下限不可越過仮受注分界，否則該用餐日兩邊的畫面都無法編輯
        let reserved_from = TuesdayAnchor::next_next_tuesday(now);
        if window.from_date > reserved_from {
            window.from_date = reserved_from;
        }

        window
    }
}
