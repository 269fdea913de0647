use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::models::RawItem;
use crate::FeedError;

/// Parse a feed document and collect every element matching `item_tag`.
///
/// Each matched element becomes a [`RawItem`] mapping the names of its child
/// elements to their text content. Items appear in document order.
pub fn parse_items(xml: &[u8], item_tag: &str) -> Result<Vec<RawItem>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    let mut in_item = false;
    let mut current = RawItem::default();
    // Child element currently open inside the item, with its accumulated text
    let mut pending: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == item_tag {
                    in_item = true;
                    current = RawItem::default();
                    pending = None;
                } else if in_item {
                    pending = Some((name, String::new()));
                }
            }
            Ok(Event::Empty(e)) => {
                if in_item {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    current.insert_first(name, String::new());
                }
            }
            Ok(Event::Text(e)) => {
                if let Some((_, text)) = pending.as_mut() {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(e)) => {
                if let Some((_, text)) = pending.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                let qname = e.name();
                let name = String::from_utf8_lossy(qname.as_ref());
                if name == item_tag {
                    if in_item {
                        items.push(std::mem::take(&mut current));
                    }
                    in_item = false;
                    pending = None;
                } else if let Some((field, text)) = pending.take() {
                    if field == name {
                        current.insert_first(field, text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}
