use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One feed entry as an opaque field lookup.
///
/// Field values are the text content of the item's child elements. When an
/// item carries several children with the same name, the first one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItem {
    fields: HashMap<String, String>,
}

impl RawItem {
    /// Look up the text content of a field by element name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Build an item from explicit field pairs.
    ///
    /// Used by callers synthesizing items, e.g. in tests. Later duplicates of
    /// a field name are ignored, matching parser behavior.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut item = Self::default();
        for (field, value) in pairs {
            item.insert_first(field.into(), value.into());
        }
        item
    }

    pub(crate) fn insert_first(&mut self, field: String, value: String) {
        self.fields.entry(field).or_insert(value);
    }
}

/// One feed entry after extraction.
///
/// `link` is the article's identity: two articles with the same link are the
/// same article no matter what the other fields say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Publication timestamp as the feed printed it, not parsed further.
    pub published: String,
    pub display_name: String,
}

/// Field-name overrides for services whose feeds deviate from the RSS
/// defaults (`item`, `title`, `link`, `pubDate`).
///
/// `display_name` has no default: when absent the account id is used as the
/// display name and no item lookup happens.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldOverrides {
    pub item: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub pubdate: Option<String>,
    pub display_name: Option<String>,
}

impl FieldOverrides {
    pub fn item_tag(&self) -> &str {
        self.item.as_deref().unwrap_or("item")
    }

    pub fn title_tag(&self) -> &str {
        self.title.as_deref().unwrap_or("title")
    }

    pub fn link_tag(&self) -> &str {
        self.link.as_deref().unwrap_or("link")
    }

    pub fn pubdate_tag(&self) -> &str {
        self.pubdate.as_deref().unwrap_or("pubDate")
    }
}
