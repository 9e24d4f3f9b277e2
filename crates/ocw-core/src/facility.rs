//! 顧客別特別對應模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 設施別的仮受注期限解除設定
///
/// 解除有效時，該設施的變更期間整體提前一週；
/// 另有解除日時，期間下限不得超過解除日。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FacilityOverride {
    /// 是否解除仮受注期限
    pub unlock_enabled: bool,

    /// 解除日
    pub unlock_day: Option<NaiveDate>,
}

impl FacilityOverride {
    pub fn new(unlock_enabled: bool) -> Self {
        Self {
            unlock_enabled,
            unlock_day: None,
        }
    }

    /// 建構器模式：設置解除日
    pub fn with_unlock_day(mut self, unlock_day: NaiveDate) -> Self {
        self.unlock_day = Some(unlock_day);
        self
    }
}
