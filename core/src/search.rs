use crate::editor::sort_uniq;

/// Parsed search text: whitespace-delimited tags, with a leading `-` marking
/// an excluded tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let mut include = Vec::new();
        let mut exclude = Vec::new();
        for chunk in raw.split_whitespace() {
            if let Some(rest) = chunk.strip_prefix('-') {
                if !rest.is_empty() {
                    exclude.push(rest.to_string());
                }
            } else {
                include.push(chunk.to_string());
            }
        }
        Self {
            include: sort_uniq(include),
            exclude: sort_uniq(exclude),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Sorted, deduplicated union of several tag lists.
pub fn collect_tags<'a, I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut tags = Vec::new();
    for list in lists {
        tags.extend(list.iter().cloned());
    }
    sort_uniq(tags)
}
