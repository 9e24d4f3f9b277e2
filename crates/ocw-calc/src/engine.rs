//! 變更期間主計算器

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use ocw_core::{
    BusinessCalendar, ChangeWindow, FacilityOverride, LongHolidayList, Result, RuleVersion,
    RuleVersionTable, WindowSettings,
};

use crate::blackout::BlackoutAdjuster;
use crate::unlock::UnlockAdjuster;
use crate::window_v1::WindowV1;
use crate::window_v2::WindowV2;

/// 食數變更期間計算器
///
/// 持有一次計算所需的唯讀快照。快照於建構時固定，
/// 計算過程中的每個步驟都參照同一份資料。
pub struct WindowCalculator {
    /// 規則版本表
    rule_versions: RuleVersionTable,

    /// 國定假日快照
    holidays: HashSet<NaiveDate>,

    /// 長期休假清單
    long_holidays: LongHolidayList,

    /// 計算設定
    settings: WindowSettings,
}

impl WindowCalculator {
    /// 創建新的計算器
    pub fn new(
        rule_versions: RuleVersionTable,
        holidays: Vec<NaiveDate>,
        long_holidays: LongHolidayList,
        settings: WindowSettings,
    ) -> Self {
        Self {
            rule_versions,
            holidays: holidays.into_iter().collect(),
            long_holidays,
            settings,
        }
    }

    /// 主計算入口
    ///
    /// 回傳指定時點可變更食數的用餐日範圍。
    /// 下限落在長期休假內時回報 `NotEditable`。
    pub fn calculate(
        &self,
        now: NaiveDateTime,
        facility: Option<&FacilityOverride>,
    ) -> Result<ChangeWindow> {
        tracing::info!(
            "開始計算變更期間：now={}，假日 {} 筆，長期休假 {} 筆",
            now,
            self.holidays.len(),
            self.long_holidays.periods().len()
        );

        // Step 1: 規則版本判定
        let rule = self
            .rule_versions
            .active_at(now, self.settings.cutover_hour)?;
        tracing::debug!("Step 1: 規則版本 {:?}", rule);

        // Step 2: 原始期間計算
        let calendar = BusinessCalendar::new(rule, &self.holidays);
        let raw = match rule {
            RuleVersion::V1 => WindowV1::compute(now, &calendar, &self.settings),
            RuleVersion::V2 => WindowV2::compute(now, &calendar, &self.settings)?,
        };
        tracing::debug!("Step 2: 原始期間 {} ~ {}", raw.from_date, raw.to_date);

        // Step 3: 長期休假調整
        let adjusted = BlackoutAdjuster::adjust(raw, &self.long_holidays)?;
        tracing::debug!(
            "Step 3: 休假調整後 {} ~ {}",
            adjusted.from_date,
            adjusted.to_date
        );

        // Step 4: 設施別特別對應
        let window = match facility {
            Some(facility) => UnlockAdjuster::apply(adjusted, facility),
            None => adjusted,
        };
        tracing::debug!("Step 4: 最終期間 {} ~ {}", window.from_date, window.to_date);

        tracing::info!("變更期間計算完成：{} ~ {}", window.from_date, window.to_date);

        Ok(window)
    }

    /// 計算設定
    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    /// 國定假日快照
    pub fn holidays(&self) -> &HashSet<NaiveDate> {
        &self.holidays
    }
}
