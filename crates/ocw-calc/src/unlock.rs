//! 設施別仮受注期限解除

use ocw_core::{ChangeWindow, FacilityOverride};

/// 仮受注期限解除調整器
pub struct UnlockAdjuster;

impl UnlockAdjuster {
    /// 套用設施別特別對應
    ///
    /// 解除有效時整個期間提前一週。另設解除日時，
    /// 下限超過解除日的期間再整週回退，直到不超過為止。
    pub fn apply(window: ChangeWindow, facility: &FacilityOverride) -> ChangeWindow {
        if !facility.unlock_enabled {
            return window;
        }

        let mut window = window.shifted_back(7);
        if let Some(unlock_day) = facility.unlock_day {
            while window.from_date > unlock_day {
                window = window.shifted_back(7);
            }
        }

        window
    }
}
