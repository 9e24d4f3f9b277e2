//! 長期休假調整

use ocw_core::{ChangeWindow, LongHolidayList, OcwError, Result};

/// 長期休假調整器
pub struct BlackoutAdjuster;

impl BlackoutAdjuster {
    /// 將原始期間對照長期休假清單調整
    ///
    /// 下限落在休假內表示目前完全無法變更，回報休假明け的再開日。
    /// 僅上限落在休假內時，上限截到休假開始前一日。
    pub fn adjust(window: ChangeWindow, long_holidays: &LongHolidayList) -> Result<ChangeWindow> {
        if long_holidays.contains(window.from_date) {
            return Err(OcwError::NotEditable {
                next_from: long_holidays.next_free_day(window.from_date),
            });
        }

        if long_holidays.contains(window.to_date) {
            let clipped = long_holidays.previous_free_day(window.to_date);
            return Ok(ChangeWindow::new(window.from_date, clipped));
        }

        Ok(window)
    }
}
