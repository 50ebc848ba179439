//! Book catalog used by directory tagging.
//!
//! The catalog is a JSON document of the form
//! `{"books": {"<directory name>": {"series": "...", "credit": {...}, ...}}}`.
//! A directory is tagged with the entry whose key equals its basename.
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::core::metadata::{Credit, MetadataRecord};
use crate::types::Field;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub books: HashMap<String, BookEntry>,
}

impl Catalog {
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn lookup(&self, book: &str) -> Option<&BookEntry> {
        self.books.get(book)
    }
}

/// JSON scalar rendered as text. Catalogs mix `"Yes"` and `true` freely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Flag(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Credit mapping in document order (`{"name": "role", ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credits(pub Vec<Credit>);

impl<'de> Deserialize<'de> for Credits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CreditsVisitor;

        impl<'de> Visitor<'de> for CreditsVisitor {
            type Value = Credits;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of credit name to role")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Credits, A::Error> {
                let mut credits = Vec::new();
                while let Some((name, role)) = map.next_entry::<String, Scalar>()? {
                    credits.push(Credit::new(name, role.to_string()));
                }
                Ok(Credits(credits))
            }
        }

        deserializer.deserialize_map(CreditsVisitor)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookEntry {
    pub manga: Option<Scalar>,
    pub black_and_white: Option<Scalar>,
    pub language: Option<Scalar>,
    pub genre: Option<Scalar>,
    pub maturity_rating: Option<Scalar>,
    pub publisher: Option<Scalar>,
    pub imprint: Option<Scalar>,
    pub series: Option<Scalar>,
    pub series_group: Option<Scalar>,
    pub web_link: Option<Scalar>,
    #[serde(deserialize_with = "null_as_empty")]
    pub credit: Credits,
    #[serde(deserialize_with = "null_as_empty")]
    pub characters: Vec<String>,
}

/// `null` reads as the empty value, like an absent key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookEntry {
    /// Build the record written to every archive of the book. Absent and
    /// blank values are left out.
    pub fn to_record(&self) -> MetadataRecord {
        let mut record = MetadataRecord::new();
        let scalars = [
            (Field::Manga, &self.manga),
            (Field::BlackAndWhite, &self.black_and_white),
            (Field::Language, &self.language),
            (Field::Genre, &self.genre),
            (Field::MaturityRating, &self.maturity_rating),
            (Field::Publisher, &self.publisher),
            (Field::Imprint, &self.imprint),
            (Field::Series, &self.series),
            (Field::SeriesGroup, &self.series_group),
            (Field::WebLink, &self.web_link),
        ];
        for (field, value) in scalars {
            if let Some(value) = value {
                record.insert(field, value.to_string());
            }
        }
        record.insert(Field::Credit, self.credit.0.clone());
        record.insert(Field::Characters, self.characters.clone());
        record
    }
}
