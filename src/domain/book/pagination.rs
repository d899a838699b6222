//! 分页模型
//!
//! 把有序的故事集合映射到线性的页索引空间：
//!
//! ```text
//! 0            封面
//! 1..=N        每个故事一个跨页（第 k 章 = stories[k-1]）
//! N+1          封底
//! ```
//!
//! 所有导航函数都是饱和的纯函数，输出即新的权威状态。

use crate::domain::story::Story;

/// 页索引（封面、章节跨页、封底）
pub type PageIndex = usize;

/// 封面索引
pub const FRONT_COVER: PageIndex = 0;

/// 最后一个合法索引（即封底索引）
///
/// 合法区间为 `[0, stories_count + 1]`，共 `stories_count + 2` 页
#[inline]
pub fn total_pages(stories_count: usize) -> PageIndex {
    stories_count + 1
}

/// 封底索引
#[inline]
pub fn back_cover(stories_count: usize) -> PageIndex {
    total_pages(stories_count)
}

/// 把任意整数索引限制到 `[0, stories_count + 1]`
///
/// 持有索引期间 stories_count 发生变化时必须调用
pub fn clamp(index: i64, stories_count: usize) -> PageIndex {
    if index <= 0 {
        return FRONT_COVER;
    }
    let last = total_pages(stories_count);
    usize::try_from(index).map_or(last, |i| i.min(last))
}

/// 下一页（在封底处饱和）
#[inline]
pub fn next(index: PageIndex, stories_count: usize) -> PageIndex {
    index.saturating_add(1).min(total_pages(stories_count))
}

/// 上一页（在封面处饱和）
#[inline]
pub fn previous(index: PageIndex) -> PageIndex {
    index.saturating_sub(1)
}

/// 阅读进度，封面为 0，封底为 1
///
/// 每次按需计算，不单独缓存
pub fn progress_ratio(index: PageIndex, stories_count: usize) -> f64 {
    let last = total_pages(stories_count);
    index.min(last) as f64 / last as f64
}

#[inline]
pub fn can_go_previous(index: PageIndex) -> bool {
    index > FRONT_COVER
}

#[inline]
pub fn can_go_next(index: PageIndex, stories_count: usize) -> bool {
    index < total_pages(stories_count)
}

/// 导航事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    /// 从章节条直接跳转，目标会被 clamp
    JumpTo(i64),
}

impl Navigation {
    /// 状态迁移：当前索引 + 事件 -> 新索引
    pub fn apply(self, index: PageIndex, stories_count: usize) -> PageIndex {
        let index = index.min(total_pages(stories_count));
        match self {
            Navigation::Next => next(index, stories_count),
            Navigation::Previous => previous(index),
            Navigation::JumpTo(target) => clamp(target, stories_count),
        }
    }
}

/// 某一索引处要渲染的内容
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent<'a> {
    Cover,
    StorySpread { story: &'a Story, chapter: usize },
    BackCover,
}

/// 确定索引处的页面内容
///
/// 超出 `[0, N+1]` 的索引属于调用方违约，返回 None；调用方应先 clamp
pub fn page_content(index: PageIndex, stories: &[Story]) -> Option<PageContent<'_>> {
    let count = stories.len();
    match index {
        FRONT_COVER => Some(PageContent::Cover),
        i if i <= count => Some(PageContent::StorySpread {
            story: &stories[i - 1],
            chapter: i,
        }),
        i if i == back_cover(count) => Some(PageContent::BackCover),
        _ => None,
    }
}

/// 底部页签文字
pub fn page_label(index: PageIndex, stories_count: usize) -> String {
    match index {
        FRONT_COVER => "Cover".to_string(),
        i if i >= back_cover(stories_count) => "Back Cover".to_string(),
        i => format!("Chapter {} of {}", i, stories_count),
    }
}

/// 第 chapter 章跨页左右两页的印刷页码
pub fn spread_page_numbers(chapter: usize) -> (usize, usize) {
    let base = chapter.saturating_sub(1) * 2;
    (base + 1, base + 2)
}
