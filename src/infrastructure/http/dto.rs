//! Data Transfer Objects

use serde::Serialize;

use crate::application::{BookPageView, ChapterEntry, PageView, User};
use crate::domain::book::BookCustomization;
use crate::domain::story::{Prompt, Story};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Session DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

// ============================================================================
// Story DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub id: String,
    pub prompt_id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub date_created: String,
    pub status: &'static str,
    pub char_count: usize,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self {
            char_count: story.char_count(),
            id: story.id.as_str().to_string(),
            prompt_id: story.prompt_id.as_str().to_string(),
            title: story.title,
            content: story.content,
            image_url: story.image_url,
            date_created: story.date_created.to_rfc3339(),
            status: story.status.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub id: String,
    pub question: String,
    pub category: &'static str,
    pub is_answered: bool,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id.as_str().to_string(),
            question: prompt.question,
            category: prompt.category.as_str(),
            is_answered: prompt.is_answered,
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CustomizationResponse {
    pub size: &'static str,
    pub font: &'static str,
    pub color: &'static str,
}

impl From<BookCustomization> for CustomizationResponse {
    fn from(custom: BookCustomization) -> Self {
        Self {
            size: custom.size.as_str(),
            font: custom.font.as_str(),
            color: custom.color.as_str(),
        }
    }
}

/// 页面内容；右页正文已带续接标记
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContentResponse {
    Cover,
    StorySpread {
        story_id: String,
        chapter: usize,
        title: String,
        date_created: String,
        left_text: String,
        right_text: Option<String>,
        image_url: Option<String>,
        left_page_number: usize,
        right_page_number: usize,
    },
    BackCover,
}

impl From<PageView> for PageContentResponse {
    fn from(view: PageView) -> Self {
        match view {
            PageView::Cover => Self::Cover,
            PageView::BackCover => Self::BackCover,
            PageView::StorySpread(spread) => Self::StorySpread {
                story_id: spread.story_id.as_str().to_string(),
                chapter: spread.chapter,
                title: spread.title,
                date_created: spread.date_created.to_rfc3339(),
                left_text: spread.left_text,
                right_text: spread.right_text,
                image_url: spread.image_url,
                left_page_number: spread.page_numbers.0,
                right_page_number: spread.page_numbers.1,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub story_id: String,
    pub chapter: usize,
    pub title: String,
    pub has_image: bool,
    pub is_current: bool,
}

impl From<ChapterEntry> for ChapterResponse {
    fn from(entry: ChapterEntry) -> Self {
        Self {
            story_id: entry.story_id.as_str().to_string(),
            chapter: entry.chapter,
            title: entry.title,
            has_image: entry.has_image,
            is_current: entry.is_current,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookPageResponse {
    pub index: usize,
    pub total_pages: usize,
    pub label: String,
    pub progress: f64,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub content: PageContentResponse,
    pub chapters: Vec<ChapterResponse>,
    pub customization: CustomizationResponse,
}

impl From<BookPageView> for BookPageResponse {
    fn from(view: BookPageView) -> Self {
        Self {
            index: view.index,
            total_pages: view.total_pages,
            label: view.label,
            progress: view.progress,
            can_go_previous: view.can_go_previous,
            can_go_next: view.can_go_next,
            content: view.content.into(),
            chapters: view.chapters.into_iter().map(Into::into).collect(),
            customization: view.customization.into(),
        }
    }
}
