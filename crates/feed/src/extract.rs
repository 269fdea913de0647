use crate::error::ExtractError;
use crate::models::{Article, FieldOverrides, RawItem};

/// Turn a raw feed item into an [`Article`] using the service's field
/// mapping.
///
/// `title`, `link` and the publication date are required; a missing one is an
/// error naming the field the mapping resolved it to. The display name is
/// read from the item only when the service overrides it; otherwise
/// `account` is used as-is. Values are taken verbatim, with no trimming or
/// other normalization.
pub fn extract(
    raw: &RawItem,
    overrides: &FieldOverrides,
    account: &str,
) -> Result<Article, ExtractError> {
    let title = required(raw, overrides.title_tag())?;
    let link = required(raw, overrides.link_tag())?;
    let published = required(raw, overrides.pubdate_tag())?;

    // A link is the article's identity; an empty one is as bad as a missing one
    if link.is_empty() {
        return Err(ExtractError::MissingField(overrides.link_tag().to_string()));
    }

    let display_name = match overrides.display_name.as_deref() {
        Some(field) => required(raw, field)?.to_string(),
        None => account.to_string(),
    };

    Ok(Article {
        title: title.to_string(),
        link: link.to_string(),
        published: published.to_string(),
        display_name,
    })
}

fn required<'a>(raw: &'a RawItem, field: &str) -> Result<&'a str, ExtractError> {
    raw.get(field)
        .ok_or_else(|| ExtractError::MissingField(field.to_string()))
}
