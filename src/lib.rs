//! # OCW
//!
//! 食數變更可能期間引擎。
//!
//! 受注變更畫面在顯示與保存時，需要知道哪些用餐日還來得及變更食數。
//! 本引擎依規則版本、國定假日、長期休假與設施別設定，
//! 計算出目前可變更的用餐日範圍。

pub use ocw_calc::{
    BlackoutAdjuster, DeadlineCalculator, TuesdayAnchor, UnlockAdjuster, WindowCalculator,
    WindowV1, WindowV2,
};
pub use ocw_core::{
    BusinessCalendar, ChangeWindow, FacilityOverride, FromDatePatch, LongHolidayList,
    LongHolidayPeriod, OcwError, Result, RuleVersion, RuleVersionEntry, RuleVersionTable,
    SalesDayEntry, SalesDayTable, WindowSettings,
};

/// 便利函數：以一組快照直接計算變更期間
///
/// 與建構 [`WindowCalculator`] 後呼叫 `calculate` 等價，設定採預設值。
pub fn compute_order_change_window(
    now: chrono::NaiveDateTime,
    rule_versions: RuleVersionTable,
    holidays: Vec<chrono::NaiveDate>,
    long_holidays: LongHolidayList,
    facility: Option<&FacilityOverride>,
) -> Result<ChangeWindow> {
    WindowCalculator::new(
        rule_versions,
        holidays,
        long_holidays,
        WindowSettings::default(),
    )
    .calculate(now, facility)
}
