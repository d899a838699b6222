//! Book Queries - 书籍视图
//!
//! `BookPageView` 是渲染边界：展示层只读取它，写回只通过翻页和重排命令

use chrono::{DateTime, Utc};

use crate::application::session::BookSession;
use crate::domain::book::{
    can_go_next, can_go_previous, layout_spread, page_content, page_label, progress_ratio,
    spread_page_numbers, total_pages, BookCustomization, Illustration, PageContent, PageIndex,
};
use crate::domain::story::StoryId;

/// 获取当前页视图
#[derive(Debug, Clone, Default)]
pub struct GetBookPage;

/// 获取定制选项
#[derive(Debug, Clone, Default)]
pub struct GetCustomization;

/// 当前页内容
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Cover,
    StorySpread(SpreadView),
    BackCover,
}

/// 章节跨页
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadView {
    pub story_id: StoryId,
    pub chapter: usize,
    pub title: String,
    pub date_created: DateTime<Utc>,
    pub left_text: String,
    pub right_text: Option<String>,
    /// None 表示未配图
    pub image_url: Option<String>,
    pub page_numbers: (usize, usize),
}

/// 章节条中的一项
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterEntry {
    pub story_id: StoryId,
    pub chapter: usize,
    pub title: String,
    pub has_image: bool,
    pub is_current: bool,
}

/// 当前页完整视图
#[derive(Debug, Clone, PartialEq)]
pub struct BookPageView {
    pub index: PageIndex,
    pub total_pages: PageIndex,
    pub label: String,
    pub progress: f64,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub content: PageView,
    pub chapters: Vec<ChapterEntry>,
    pub customization: BookCustomization,
}

impl BookPageView {
    /// 从会话构建视图；索引先收回到合法范围
    pub fn build(session: &BookSession) -> Self {
        let count = session.stories_count();
        let index = session.current_page.min(total_pages(count));

        let content = match page_content(index, &session.stories) {
            Some(PageContent::StorySpread { story, chapter }) => {
                let layout = layout_spread(story);
                PageView::StorySpread(SpreadView {
                    story_id: story.id.clone(),
                    chapter,
                    title: story.title.clone(),
                    date_created: story.date_created,
                    left_text: layout.left_text,
                    right_text: layout.right_text,
                    image_url: match layout.illustration {
                        Illustration::Image(url) => Some(url.to_string()),
                        Illustration::Unillustrated => None,
                    },
                    page_numbers: spread_page_numbers(chapter),
                })
            }
            Some(PageContent::BackCover) => PageView::BackCover,
            Some(PageContent::Cover) | None => PageView::Cover,
        };

        let chapters = session
            .stories
            .iter()
            .enumerate()
            .map(|(i, story)| ChapterEntry {
                story_id: story.id.clone(),
                chapter: i + 1,
                title: story.title.clone(),
                has_image: story.has_image(),
                is_current: index == i + 1,
            })
            .collect();

        Self {
            index,
            total_pages: total_pages(count),
            label: page_label(index, count),
            progress: progress_ratio(index, count),
            can_go_previous: can_go_previous(index),
            can_go_next: can_go_next(index, count),
            content,
            chapters,
            customization: session.customization,
        }
    }
}
