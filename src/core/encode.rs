//! Serialization of a `MetadataRecord` into the single `-m` argument the
//! tagging tool parses.
use crate::core::clean::clean;
use crate::core::metadata::{MetadataRecord, Value};
use crate::types::Field;

/// Separator between items of a list value. The tool reads `^,` as a
/// literal comma inside a value, which it then splits into list items.
pub const LIST_SEPARATOR: &str = "^,";

/// Encode `record` as `key=value` pairs joined by `,`, in insertion order.
///
/// Values are cleaned here, exactly once. Keys come from [`Field`] and are
/// written as-is. Credits expand into one `credit=name:role` pair each.
///
/// ```
/// use cbztag::{encode, Field, MetadataRecord};
///
/// let mut record = MetadataRecord::new();
/// record.insert(Field::Year, "2021");
/// record.insert(Field::Title, "Hero, Vol. 5");
/// record.insert(Field::Volume, "5");
/// assert_eq!(encode(&record), "year=2021,title=Hero^, Vol. 5,volume=5");
/// ```
pub fn encode(record: &MetadataRecord) -> String {
    let mut pairs: Vec<String> = Vec::with_capacity(record.len());
    for (field, value) in record.iter() {
        match value {
            Value::Text(text) => pairs.push(pair(field, &clean(text))),
            Value::Credits(credits) => {
                for credit in credits {
                    let entry = format!("{}:{}", clean(&credit.name), clean(&credit.role));
                    pairs.push(pair(field, &entry));
                }
            }
            Value::List(items) => {
                let joined = items
                    .iter()
                    .map(|item| clean(item))
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR);
                pairs.push(pair(field, &joined));
            }
        }
    }
    pairs.join(",")
}

fn pair(field: Field, value: &str) -> String {
    format!("{}={}", field.key(), value)
}
