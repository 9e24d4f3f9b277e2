//! # OCW Core
//!
//! 食數變更可能期間引擎的核心資料模型與類型定義

pub mod calendar;
pub mod facility;
pub mod holiday;
pub mod sales;
pub mod settings;
pub mod versions;
pub mod window;

// Re-export 主要類型
pub use calendar::{BusinessCalendar, RuleVersion};
pub use facility::FacilityOverride;
pub use holiday::{LongHolidayList, LongHolidayPeriod};
pub use sales::{SalesDayEntry, SalesDayTable};
pub use settings::{FromDatePatch, WindowSettings};
pub use versions::{RuleVersionEntry, RuleVersionTable};
pub use window::ChangeWindow;

/// OCW 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum OcwError {
    /// 期間下限落在長期休假內，目前完全無法變更食數
    #[error("長期休假期間無法變更食數，{next_from} 起可再變更")]
    NotEditable {
        /// 休假結束後第一個可變更日
        next_from: chrono::NaiveDate,
    },

    #[error("規則版本表為空")]
    EmptyRuleVersions,

    #[error("查無 {0} 適用的銷售日換算區間")]
    SalesDayNotConfigured(chrono::NaiveDate),

    #[error("變更期限反向搜尋自錨點日 {anchor} 起 {limit} 次迭代內未收斂")]
    SearchNotConverged {
        anchor: chrono::NaiveDate,
        limit: u32,
    },
}

pub type Result<T> = std::result::Result<T, OcwError>;
