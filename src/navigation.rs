/// Where the id of the open recipe lives (the URL fragment in a browser)
pub trait Navigation {
    /// Id of the recipe to show, if any
    fn current_id(&self) -> Option<String>;

    /// Record `id` as the open recipe
    fn push_id(&mut self, id: &str);
}

/// In-memory URL fragment, e.g. `#5ed6604591c37cdc054bc886`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashLocation {
    hash: String,
}

impl HashLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing fragment, with or without the leading `#`
    pub fn from_hash(hash: &str) -> Self {
        let mut location = Self::new();
        location.push_id(hash.trim_start_matches('#'));
        location
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl Navigation for HashLocation {
    fn current_id(&self) -> Option<String> {
        let id = self.hash.strip_prefix('#').unwrap_or(&self.hash);
        (!id.is_empty()).then(|| id.to_string())
    }

    fn push_id(&mut self, id: &str) {
        self.hash = if id.is_empty() {
            String::new()
        } else {
            format!("#{}", id)
        };
    }
}
