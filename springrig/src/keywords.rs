use crate::PartTag;

/// Name fragments for each part as they appear in common skeletons:
/// romanized, Japanese script, and Chinese script. Matching is a
/// case-insensitive substring test, so romanized entries are stored
/// lowercase.
pub(crate) fn keywords(tag: PartTag) -> &'static [&'static str] {
    match tag {
        PartTag::Head => &["head", "頭", "头"],
        PartTag::Neck => &["neck", "首", "颈"],
        PartTag::Shoulder => &["shoulder", "肩"],
        PartTag::Torso => &["spine", "torso", "上半身", "胴"],
        PartTag::Hip => &["leg", "hip", "足", "腿"],
        PartTag::Knee => &["knee", "ひざ", "膝"],
        PartTag::Arm => &["arm", "腕", "臂"],
        PartTag::Elbow => &["elbow", "ひじ", "肘"],
        PartTag::Hair => &["hair", "髪", "髮", "发"],
        PartTag::Skirt => &["skirt", "スカート", "裙"],
        PartTag::Chest => &["bust", "breast", "乳", "胸"],
        PartTag::Tail => &["tail", "尻尾", "しっぽ", "尾"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_keywords_and_romanized_entries_are_lowercase() {
        for tag in PartTag::ALL {
            let list = keywords(tag);
            assert!(!list.is_empty(), "no keywords for {tag:?}");
            for keyword in list {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword '{keyword}' for {tag:?} must be stored lowercase"
                );
            }
        }
    }
}
