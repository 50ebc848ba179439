//! Shared types used across cbztag.
//! Includes the `Field` vocabulary understood by the tagging tool, the
//! `DatePart` ranges, and the `Tone` hints used by console implementations.
use serde::{Deserialize, Serialize};

/// Metadata keys the tagging tool accepts in its `key=value` payload.
///
/// Keys are never escaped by the encoder, so this set is closed: user input
/// only ever reaches the value side of a pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Year,
    Month,
    Day,
    Title,
    Volume,
    Comments,
    // Manga superset, filled from the book catalog
    Manga,
    BlackAndWhite,
    Language,
    Genre,
    MaturityRating,
    Publisher,
    Imprint,
    Series,
    SeriesGroup,
    WebLink,
    Credit,
    Characters,
}

impl Field {
    /// Wire name of the key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Title => "title",
            Field::Volume => "volume",
            Field::Comments => "comments",
            Field::Manga => "manga",
            Field::BlackAndWhite => "black_and_white",
            Field::Language => "language",
            Field::Genre => "genre",
            Field::MaturityRating => "maturity_rating",
            Field::Publisher => "publisher",
            Field::Imprint => "imprint",
            Field::Series => "series",
            Field::SeriesGroup => "series_group",
            Field::WebLink => "web_link",
            Field::Credit => "credit",
            Field::Characters => "characters",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Numeric date components prompted for each archive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    pub const ALL: [DatePart; 3] = [DatePart::Year, DatePart::Month, DatePart::Day];

    /// Inclusive range of accepted values.
    pub fn range(self) -> (u32, u32) {
        match self {
            DatePart::Year => (1900, 2100),
            DatePart::Month => (1, 12),
            DatePart::Day => (1, 31),
        }
    }

    pub fn field(self) -> Field {
        match self {
            DatePart::Year => Field::Year,
            DatePart::Month => Field::Month,
            DatePart::Day => Field::Day,
        }
    }
}

impl std::fmt::Display for DatePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field().key())
    }
}

/// Presentation hint for console output. Plain consoles may ignore it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tone {
    Heading,
    Directory,
    File,
    Notice,
    Plain,
}
