//! 章节重排引擎
//!
//! 拖放完成事件 -> 新的故事序列。封面与封底不属于可重排序列。
//!
//! 重排后的页索引采用"数字槽位稳定"策略：显示的索引号不变，
//! 该槽位上显示的故事可能变化。

use crate::domain::story::{Story, StoryId};

use super::pagination::{clamp, PageIndex};

/// 把 source 位置的元素移动到 target 位置
///
/// 中间的元素整体平移一位，其余元素相对顺序不变。
/// source == target 或任一索引越界时原样返回（拷贝）。
pub fn reorder<T: Clone>(items: &[T], source: usize, target: usize) -> Vec<T> {
    let mut result = items.to_vec();
    if source == target || source >= items.len() || target >= items.len() {
        return result;
    }

    let moved = result.remove(source);
    result.insert(target, moved);
    result
}

/// 在放下的那一刻按 id 解析拖放源与目标的位置
///
/// 任一 id 不在序列中，或两者相同，返回 None
pub fn resolve_drop(stories: &[Story], active: &StoryId, over: &StoryId) -> Option<(usize, usize)> {
    if active == over {
        return None;
    }
    let source = stories.iter().position(|s| &s.id == active)?;
    let target = stories.iter().position(|s| &s.id == over)?;
    Some((source, target))
}

/// 按 id 完成一次拖放重排
///
/// 无法解析时返回 None，表示不产生任何变更
pub fn reorder_by_id(stories: &[Story], active: &StoryId, over: &StoryId) -> Option<Vec<Story>> {
    let (source, target) = resolve_drop(stories, active, over)?;
    Some(reorder(stories, source, target))
}

/// 重排后重新解释当前页索引（数字槽位稳定）
///
/// 重排不改变故事数量，clamp 只用于收回调用方持有的越界值
pub fn reindex_after_reorder(current: PageIndex, stories_count: usize) -> PageIndex {
    clamp(i64::try_from(current).unwrap_or(i64::MAX), stories_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::pagination::page_content;
    use crate::domain::book::PageContent;
    use crate::domain::story::PromptId;
    use std::collections::HashSet;

    fn book(ids: &[&str]) -> Vec<Story> {
        ids.iter()
            .map(|id| {
                let mut story = Story::new(PromptId::from(*id), *id, "");
                story.id = StoryId::from(*id);
                story
            })
            .collect()
    }

    fn ids(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_move_forward_and_backward() {
        let s = vec!['a', 'b', 'c', 'd'];
        assert_eq!(reorder(&s, 0, 2), vec!['b', 'c', 'a', 'd']);
        assert_eq!(reorder(&s, 3, 1), vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_round_trip_restores_order() {
        let s: Vec<u32> = (0..6).collect();
        for a in 0..6 {
            for b in 0..6 {
                if a == b {
                    continue;
                }
                let moved = reorder(&s, a, b);
                assert_eq!(reorder(&moved, b, a), s, "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_same_index_is_noop() {
        let s = vec![1, 2, 3];
        for a in 0..3 {
            assert_eq!(reorder(&s, a, a), s);
        }
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let s = vec![1, 2, 3];
        assert_eq!(reorder(&s, 3, 0), s);
        assert_eq!(reorder(&s, 0, 7), s);
        assert!(reorder::<u8>(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_preserves_ids_and_length() {
        let stories = book(&["A", "B", "C", "D"]);
        let original: HashSet<_> = stories.iter().map(|s| s.id.clone()).collect();

        let moved = reorder(&stories, 1, 3);
        let after: HashSet<_> = moved.iter().map(|s| s.id.clone()).collect();

        assert_eq!(moved.len(), stories.len());
        assert_eq!(after, original);
    }

    #[test]
    fn test_reorder_by_id_missing_id_is_noop() {
        let stories = book(&["A", "B", "C"]);
        assert!(reorder_by_id(&stories, &StoryId::from("Z"), &StoryId::from("A")).is_none());
        assert!(reorder_by_id(&stories, &StoryId::from("A"), &StoryId::from("Z")).is_none());
        assert!(reorder_by_id(&stories, &StoryId::from("B"), &StoryId::from("B")).is_none());
    }

    #[test]
    fn test_numeric_slot_stable_after_reorder() {
        let stories = book(&["A", "B", "C"]);
        let index = 2; // 正在看 B

        let reordered = reorder_by_id(&stories, &StoryId::from("A"), &StoryId::from("C")).unwrap();
        assert_eq!(ids(&reordered), vec!["B", "C", "A"]);

        let index = reindex_after_reorder(index, reordered.len());
        assert_eq!(index, 2);
        match page_content(index, &reordered) {
            Some(PageContent::StorySpread { story, chapter }) => {
                assert_eq!(story.id.as_str(), "C");
                assert_eq!(chapter, 2);
            }
            other => panic!("unexpected page: {:?}", other),
        }
    }

    #[test]
    fn test_reindex_recovers_stale_index() {
        assert_eq!(reindex_after_reorder(9, 3), 4);
        assert_eq!(reindex_after_reorder(usize::MAX, 3), 4);
    }
}
