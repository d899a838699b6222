//! 跨页排版
//!
//! 一个故事跨页分为左右两页：
//! - 左页：正文前 900 个字符，超出时追加省略号
//! - 右页：插图（或未配图占位），其下是剩余正文（如果有），以省略号开头续接左页

use crate::domain::story::Story;

/// 左页容纳的字符数（固定设计常量）
pub const LEFT_PAGE_CHARS: usize = 900;

/// 左页截断标记，同时作为右页续接标记
pub const ELLIPSIS: &str = "...";

/// 右页插图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Illustration<'a> {
    Image(&'a str),
    /// 未配图
    Unillustrated,
}

/// 跨页排版结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadLayout<'a> {
    pub left_text: String,
    /// 带续接标记的剩余正文，未超出左页时为 None
    pub right_text: Option<String>,
    pub illustration: Illustration<'a>,
}

/// 按字符切分正文，返回 (左页文字, 右页续接文字)
///
/// 只依赖正文字符数，结果确定
pub fn split_content(content: &str) -> (String, Option<&str>) {
    match content.char_indices().nth(LEFT_PAGE_CHARS) {
        Some((byte_offset, _)) => {
            let mut left = String::with_capacity(byte_offset + ELLIPSIS.len());
            left.push_str(&content[..byte_offset]);
            left.push_str(ELLIPSIS);
            (left, Some(&content[byte_offset..]))
        }
        None => (content.to_string(), None),
    }
}

/// 计算故事跨页
pub fn layout_spread(story: &Story) -> SpreadLayout<'_> {
    let (left_text, right_text) = split_content(&story.content);
    let illustration = match story.image_url.as_deref() {
        Some(url) if !url.is_empty() => Illustration::Image(url),
        _ => Illustration::Unillustrated,
    };

    SpreadLayout {
        left_text,
        right_text: right_text.map(|rest| format!("{}{}", ELLIPSIS, rest)),
        illustration,
    }
}
