//! Play model, genres, and the play catalog.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};

/// The genre of a play, which selects its pricing and credit rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    /// Tragedy.
    Tragedy,
    /// Comedy.
    Comedy,
    /// History.
    History,
    /// Pastoral.
    Pastoral,
}

impl Genre {
    /// All known genres, in declaration order.
    pub const ALL: [Genre; 4] = [
        Genre::Tragedy,
        Genre::Comedy,
        Genre::History,
        Genre::Pastoral,
    ];

    /// Returns the type string used for this genre in play data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::History => "history",
            Genre::Pastoral => "pastoral",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = BillingError;

    /// Parses a play type string. Only the exact lowercase type names match.
    ///
    /// # Examples
    ///
    /// ```
    /// use theater_billing::models::Genre;
    ///
    /// assert_eq!("comedy".parse::<Genre>().unwrap(), Genre::Comedy);
    /// assert!("Comedy".parse::<Genre>().is_err());
    /// assert!("opera".parse::<Genre>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            "history" => Ok(Genre::History),
            "pastoral" => Ok(Genre::Pastoral),
            _ => Err(BillingError::UnknownPlayType {
                play_type: s.to_string(),
            }),
        }
    }
}

/// A play as described by the catalog.
///
/// The type is kept as the raw string from the data source; it is resolved
/// into a [`Genre`] only when a performance of the play is priced, so an
/// unknown type surfaces as [`BillingError::UnknownPlayType`] at that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name of the play.
    pub name: String,
    /// The play type as loaded (e.g., "tragedy").
    #[serde(rename = "type")]
    pub play_type: String,
}

impl Play {
    /// Creates a play from a name and a raw type string.
    pub fn new(name: impl Into<String>, play_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            play_type: play_type.into(),
        }
    }

    /// Resolves the play type into a known genre.
    ///
    /// # Examples
    ///
    /// ```
    /// use theater_billing::models::{Genre, Play};
    ///
    /// let play = Play::new("Hamlet", "tragedy");
    /// assert_eq!(play.genre().unwrap(), Genre::Tragedy);
    /// ```
    pub fn genre(&self) -> BillingResult<Genre> {
        self.play_type.parse()
    }
}

/// Read-only lookup from play id to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play under the given id, replacing any previous entry.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) {
        self.plays.insert(play_id.into(), play);
    }

    /// Builder-style variant of [`PlayCatalog::insert`].
    pub fn with_play(mut self, play_id: impl Into<String>, play: Play) -> Self {
        self.insert(play_id, play);
        self
    }

    /// Looks up a play by id.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnknownPlay`] when the id has no entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use theater_billing::models::{Play, PlayCatalog};
    ///
    /// let catalog = PlayCatalog::new().with_play("hamlet", Play::new("Hamlet", "tragedy"));
    /// assert_eq!(catalog.lookup("hamlet").unwrap().name, "Hamlet");
    /// assert!(catalog.lookup("macbeth").is_err());
    /// ```
    pub fn lookup(&self, play_id: &str) -> BillingResult<&Play> {
        self.plays
            .get(play_id)
            .ok_or_else(|| BillingError::UnknownPlay {
                play_id: play_id.to_string(),
            })
    }

    /// Returns true if the catalog has an entry for the id.
    pub fn contains(&self, play_id: &str) -> bool {
        self.plays.contains_key(play_id)
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns true if the catalog holds no plays.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}
