//! Book Commands - 翻页、重排与定制

use crate::application::queries::BookPageView;
use crate::domain::book::{BookCustomization, BookSize, ColorScheme, FontStyle, Navigation, PageIndex};
use crate::domain::story::StoryId;

/// 翻页命令
#[derive(Debug, Clone, Copy)]
pub struct ChangePageCommand {
    pub navigation: Navigation,
}

/// 翻页响应
#[derive(Debug, Clone)]
pub struct ChangePageResponse {
    pub previous_index: PageIndex,
    pub page: BookPageView,
}

/// 章节拖放命令 - active 被拖到 over 的位置
#[derive(Debug, Clone)]
pub struct ReorderChaptersCommand {
    pub active_id: StoryId,
    pub over_id: StoryId,
}

/// 重排响应
#[derive(Debug, Clone)]
pub struct ReorderChaptersResponse {
    /// 序列是否发生变化
    pub moved: bool,
    pub order: Vec<StoryId>,
    pub current_page: PageIndex,
}

/// 更新定制选项，None 表示保持不变
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomizationCommand {
    pub size: Option<BookSize>,
    pub font: Option<FontStyle>,
    pub color: Option<ColorScheme>,
}

#[derive(Debug, Clone)]
pub struct UpdateCustomizationResponse {
    pub customization: BookCustomization,
}
