//! 种子数据
//!
//! 没有任何持久化数据时使用的初始 Prompt 与 Story 集合

use chrono::Utc;

use super::{Prompt, PromptCategory, PromptId, Story, StoryId, StoryStatus};

const SEED_PROMPTS: &[(&str, &str, PromptCategory, bool)] = &[
    ("1", "What is one of your earliest memories from childhood?", PromptCategory::Childhood, true),
    ("2", "How did you meet your spouse or partner?", PromptCategory::Family, true),
    ("3", "What was your first job, and what did it teach you?", PromptCategory::Career, true),
    (
        "4",
        "Tell the story of how you first came to know Jesus Christ as your Savior. How has your walk with the Lord changed as you've grown older?",
        PromptCategory::Wisdom,
        false,
    ),
    ("5", "Tell a story about a time you were truly brave.", PromptCategory::Adventures, false),
    (
        "6",
        "What are the most important Christian values you've sought to instill in your children and grandchildren? How did you strive to build a Christ-centered home?",
        PromptCategory::Family,
        false,
    ),
    ("7", "What is the best piece of advice you ever received?", PromptCategory::Wisdom, false),
    (
        "8",
        "What is your favorite memory from Sunday School, a church potluck, or a youth group event? Who in your early church life most influenced your faith?",
        PromptCategory::Childhood,
        false,
    ),
    (
        "9",
        "Tell a story about a time you clearly felt the Holy Spirit's guidance or witnessed God's hand at work in a difficult or miraculous situation.",
        PromptCategory::Adventures,
        false,
    ),
    (
        "10",
        "Which Bible verse or promise from Scripture has been your \"anchor\" during life's storms? How did God use His Word to comfort you during a specific trial?",
        PromptCategory::Wisdom,
        false,
    ),
];

const SEED_STORIES: &[(&str, &str, &str, &str)] = &[
    (
        "s1",
        "1",
        "The Blue Bicycle",
        "I remember the bright blue frame and the squeak of the training wheels on the driveway. My father was holding the back of the seat, promising not to let go. The sun was warm on my neck, and the smell of freshly cut grass filled the air. That moment of pure terror turning into triumph when I realized he HAD let go remains one of my most vivid childhood milestones.",
    ),
    (
        "s2",
        "2",
        "Coffee and Rain",
        "We both reached for the last blueberry muffin at the corner bakery on a rainy Tuesday in Seattle. Instead of an awkward apology, we shared a laugh and then a table. Two hours of conversation later, I knew I wanted to know everything about her. It started with a muffin and turned into a lifetime.",
    ),
    (
        "s3",
        "3",
        "Paper Routes",
        "My first job was delivering papers at 5:00 AM. It taught me the value of consistency and the quiet beauty of the world before it wakes up. I learned that showing up when you don't want to is often the most important part of any job.",
    ),
];

/// 初始写作提示（前三个已回答，对应三个种子故事）
pub fn default_prompts() -> Vec<Prompt> {
    SEED_PROMPTS
        .iter()
        .map(|(id, question, category, answered)| Prompt {
            id: PromptId::from(*id),
            question: (*question).to_string(),
            category: *category,
            is_answered: *answered,
        })
        .collect()
}

/// 初始故事集合
pub fn default_stories() -> Vec<Story> {
    let now = Utc::now();
    SEED_STORIES
        .iter()
        .map(|(id, prompt_id, title, content)| Story {
            id: StoryId::from(*id),
            prompt_id: PromptId::from(*prompt_id),
            title: (*title).to_string(),
            content: (*content).to_string(),
            image_url: None,
            date_created: now,
            status: StoryStatus::Completed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answered_flags_match_seed_stories() {
        let prompts = default_prompts();
        let stories = default_stories();

        assert_eq!(prompts.len(), 10);
        assert_eq!(stories.len(), 3);

        for prompt in &prompts {
            let has_story = stories.iter().any(|s| s.prompt_id == prompt.id);
            assert_eq!(prompt.is_answered, has_story, "prompt {}", prompt.id);
        }
    }
}
