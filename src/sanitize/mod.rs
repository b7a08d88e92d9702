use std::collections::{HashMap, HashSet};

use ammonia::{Builder, UrlRelative};

use crate::config::SanitizerSettings;

/// Elements dropped together with everything inside them
const CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Allow-list HTML cleaner for user supplied text.
///
/// Input is parsed with html5ever, so entities and comments are resolved the
/// way a browser resolves them before any tag, attribute or URL is checked.
/// Disallowed tags are stripped and their text kept, `script` and `style`
/// lose their content too. Output is stable: cleaning already clean text
/// returns it unchanged.
pub struct Sanitizer {
    cleaner: Builder<'static>,
}

impl Sanitizer {
    pub fn new(settings: &SanitizerSettings) -> Self {
        let tags: HashSet<&'static str> = settings.allowed_tags.iter().copied().collect();

        let mut tag_attributes: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();
        for &(tag, attribute) in &settings.allowed_attributes {
            tag_attributes.entry(tag).or_default().insert(attribute);
        }

        let content_tags: HashSet<&'static str> = CONTENT_TAGS
            .into_iter()
            .filter(|tag| !tags.contains(tag))
            .collect();

        let mut cleaner = Builder::empty();
        cleaner
            .tags(tags)
            .clean_content_tags(content_tags)
            .tag_attributes(tag_attributes)
            .url_schemes(settings.allowed_protocols.iter().copied().collect())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(None)
            .strip_comments(true);

        Self { cleaner }
    }

    pub fn clean(&self, input: &str) -> String {
        self.cleaner.clean(input).to_string()
    }
}
