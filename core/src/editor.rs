pub const TAG_SEPARATOR: char = ' ';

const STYLE_CLASSES: &[&str] = &["badge", "tag"];

// Sort then collapse adjacent equals; the visible order is the sort order.
pub fn sort_uniq(mut tags: Vec<String>) -> Vec<String> {
    tags.sort();
    tags.dedup();
    tags
}

/// Ordered, deduplicated tag collection driven by free-text input.
///
/// Tags are non-empty trimmed strings kept in lexicographic order. The
/// pending buffer mirrors the text input; a trailing separator commits the
/// trimmed candidate and always clears the buffer, whether or not the
/// candidate was accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSetEditor {
    tags: Vec<String>,
    pending: String,
}

impl TagSetEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed<I>(seed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut editor = Self::new();
        editor.initialize(seed);
        editor
    }

    /// Replaces the tag set with the normalized contents of `seed`.
    pub fn initialize<I>(&mut self, seed: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags = sort_uniq(
            seed.into_iter()
                .map(Into::into)
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        );
    }

    pub fn input_changed(&mut self, buffer: &str) {
        if !buffer.ends_with(TAG_SEPARATOR) {
            self.pending = buffer.to_string();
            return;
        }
        let candidate = buffer.trim();
        if !candidate.is_empty() {
            let mut tags = std::mem::take(&mut self.tags);
            tags.push(candidate.to_string());
            self.tags = sort_uniq(tags);
        }
        self.pending.clear();
    }

    /// Removes `tag` if present; silently does nothing otherwise.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn style_for(&self, _tag: &str) -> &'static [&'static str] {
        STYLE_CLASSES
    }
}
