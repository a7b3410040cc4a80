pub mod serde;

use std::{fs::File, io, path::Path};

use ::serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// One row of the merged dataset.
///
/// `soup` is the concatenated free-text metadata used for similarity,
/// absent when the source cell is empty.
/// The display fields are never interpreted, only handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub soup: Option<String>,
    #[serde(default)]
    pub poster_link: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub runtime: String,
    pub vote_average: f64,
    #[serde(deserialize_with = "serde::de_vote_count")]
    pub vote_count: u64,
    #[serde(default)]
    pub overview: String,
}

impl Item {
    #[inline]
    pub fn has_soup(&self) -> bool {
        self.soup.is_some()
    }
}

/// Output row shared by the neighbor query and the ranker.
/// Serializes as the 6-tuple
/// `(title, poster_link, release_date, runtime, vote_average, overview)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub title: String,
    pub poster_link: String,
    pub release_date: String,
    pub runtime: String,
    pub vote_average: f64,
    pub overview: String,
}

impl From<&Item> for DisplayRecord {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            poster_link: item.poster_link.clone(),
            release_date: item.release_date.clone(),
            runtime: item.runtime.clone(),
            vote_average: item.vote_average,
            overview: item.overview.clone(),
        }
    }
}

/// The unfiltered, ordered item collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    items: Vec<Item>,
}

impl Dataset {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Read a delimited-text file with a header row
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(path = %path.display(), items = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let items = rdr
            .deserialize::<Item>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
        Ok(Self { items })
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items carrying a soup, in original order.
    /// Position in the returned vec is the corpus row index.
    pub fn corpus(&self) -> Vec<Item> {
        let corpus: Vec<Item> = self.items.iter().filter(|i| i.has_soup()).cloned().collect();
        debug!(
            kept = corpus.len(),
            dropped = self.items.len() - corpus.len(),
            "filtered items without soup"
        );
        corpus
    }
}

impl From<Vec<Item>> for Dataset {
    fn from(items: Vec<Item>) -> Self {
        Self::from_items(items)
    }
}
