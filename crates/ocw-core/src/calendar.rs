//! 營業日曆模型

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 變更期限規則版本
///
/// 版本間的差異在於非營業日的定義：
/// - V1：週日與國定假日休息
/// - V2：週六、週日與國定假日休息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleVersion {
    V1,
    V2,
}

impl RuleVersion {
    /// 該版本下此星期幾是否為休息日（不含國定假日）
    pub fn is_rest_weekday(&self, weekday: Weekday) -> bool {
        match self {
            RuleVersion::V1 => weekday == Weekday::Sun,
            RuleVersion::V2 => matches!(weekday, Weekday::Sat | Weekday::Sun),
        }
    }
}

/// 營業日曆
///
/// 由規則版本與國定假日快照組成。假日快照由呼叫端供給，
/// 同一次計算內的所有步驟共用同一份。
#[derive(Debug, Clone, Copy)]
pub struct BusinessCalendar<'a> {
    rule: RuleVersion,
    holidays: &'a HashSet<NaiveDate>,
}

impl<'a> BusinessCalendar<'a> {
    pub fn new(rule: RuleVersion, holidays: &'a HashSet<NaiveDate>) -> Self {
        Self { rule, holidays }
    }

    /// 規則版本
    pub fn rule(&self) -> RuleVersion {
        self.rule
    }

    /// 檢查是否為營業日
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.holidays.contains(&date) {
            return false;
        }
        !self.rule.is_rest_weekday(date.weekday())
    }

    /// 計算營業日（向前推算）
    ///
    /// 起算日本身為休息日時，先推進到下一個營業日，再開始計數。
    pub fn add_working_days(&self, start_date: NaiveDate, days: u32) -> NaiveDate {
        let mut current = start_date;
        while !self.is_working_day(current) {
            current = current.succ_opt().expect("日期溢出");
        }

        let mut remaining = days;
        while remaining > 0 {
            current = current.succ_opt().expect("日期溢出");
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }

        current
    }

    /// 計算營業日（向後推算）
    pub fn subtract_working_days(&self, start_date: NaiveDate, days: u32) -> NaiveDate {
        let mut current = start_date;
        let mut remaining = days;

        while remaining > 0 {
            current = current.pred_opt().expect("日期溢出");
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn holidays(dates: &[(i32, u32, u32)]) -> HashSet<NaiveDate> {
        dates
            .iter()
            .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
            .collect()
    }

    #[rstest]
    // 2022-07-04 是週一
    #[case((2022, 7, 4), true, true)]
    #[case((2022, 7, 8), true, true)] // 週五
    #[case((2022, 7, 9), true, false)] // 週六：V1 營業、V2 休息
    #[case((2022, 7, 10), false, false)] // 週日：兩版本都休息
    fn test_rest_weekdays(
        #[case] ymd: (i32, u32, u32),
        #[case] v1_working: bool,
        #[case] v2_working: bool,
    ) {
        let empty = HashSet::new();
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();

        let v1 = BusinessCalendar::new(RuleVersion::V1, &empty);
        let v2 = BusinessCalendar::new(RuleVersion::V2, &empty);

        assert_eq!(v1.is_working_day(date), v1_working);
        assert_eq!(v2.is_working_day(date), v2_working);
    }

    #[test]
    fn test_holiday_overrides_weekday() {
        // 2022-07-18 海之日（週一）
        let set = holidays(&[(2022, 7, 18)]);
        let calendar = BusinessCalendar::new(RuleVersion::V1, &set);

        assert!(!calendar.is_working_day(NaiveDate::from_ymd_opt(2022, 7, 18).unwrap()));
        assert!(calendar.is_working_day(NaiveDate::from_ymd_opt(2022, 7, 19).unwrap()));
    }

    #[test]
    fn test_add_working_days_v1() {
        let set = holidays(&[(2022, 7, 18)]);
        let calendar = BusinessCalendar::new(RuleVersion::V1, &set);

        // 週一起算 6 個營業日，只跳過週日
        let start = NaiveDate::from_ymd_opt(2022, 7, 4).unwrap();
        let result = calendar.add_working_days(start, 6);
        assert_eq!(result, NaiveDate::from_ymd_opt(2022, 7, 11).unwrap());
    }

    #[test]
    fn test_add_working_days_from_rest_day() {
        // 起算日為假日時，先推進到次一營業日再計數
        let set = holidays(&[(2022, 7, 18)]);
        let calendar = BusinessCalendar::new(RuleVersion::V1, &set);

        let holiday_monday = NaiveDate::from_ymd_opt(2022, 7, 18).unwrap();
        let result = calendar.add_working_days(holiday_monday, 6);
        // 7/19 起算：20, 21, 22, 23, (24 週日), 25, 26
        assert_eq!(result, NaiveDate::from_ymd_opt(2022, 7, 26).unwrap());
    }

    #[test]
    fn test_add_working_days_v2_skips_weekend() {
        let empty = HashSet::new();
        let calendar = BusinessCalendar::new(RuleVersion::V2, &empty);

        // 週五 +1 營業日 = 下週一
        let friday = NaiveDate::from_ymd_opt(2022, 7, 8).unwrap();
        assert_eq!(
            calendar.add_working_days(friday, 1),
            NaiveDate::from_ymd_opt(2022, 7, 11).unwrap()
        );
    }

    #[test]
    fn test_subtract_working_days() {
        let set = holidays(&[(2022, 7, 18)]);
        let calendar = BusinessCalendar::new(RuleVersion::V1, &set);

        // 7/26 回推 6 個營業日：25, 23, 22, 21, 20, 19（跳過週日與 7/18）
        let start = NaiveDate::from_ymd_opt(2022, 7, 26).unwrap();
        let result = calendar.subtract_working_days(start, 6);
        assert_eq!(result, NaiveDate::from_ymd_opt(2022, 7, 19).unwrap());
    }

    #[test]
    fn test_subtract_working_days_v2() {
        let empty = HashSet::new();
        let calendar = BusinessCalendar::new(RuleVersion::V2, &empty);

        // 週一回推 1 營業日 = 上週五
        let monday = NaiveDate::from_ymd_opt(2022, 7, 11).unwrap();
        assert_eq!(
            calendar.subtract_working_days(monday, 1),
            NaiveDate::from_ymd_opt(2022, 7, 8).unwrap()
        );
    }
}
