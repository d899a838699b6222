//! Book Context - 书籍限界上下文
//!
//! 职责:
//! - 分页模型（封面 / 章节跨页 / 封底）
//! - 跨页正文切分
//! - 章节重排引擎
//! - 定制选项（开本、字体、配色）

mod customization;
mod pagination;
mod reorder;
mod spread;

pub use customization::{BookCustomization, BookSize, ColorScheme, FontStyle};
pub use pagination::{
    back_cover, can_go_next, can_go_previous, clamp, next, page_content, page_label, previous,
    progress_ratio, spread_page_numbers, total_pages, Navigation, PageContent, PageIndex,
    FRONT_COVER,
};
pub use reorder::{reindex_after_reorder, reorder, reorder_by_id, resolve_drop};
pub use spread::{layout_spread, split_content, Illustration, SpreadLayout, ELLIPSIS, LEFT_PAGE_CHARS};
