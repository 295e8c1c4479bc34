//! Results of pulling structured fields out of free-form model text.

use serde::{Deserialize, Serialize};

/// Outcome of an extraction pass.
///
/// `Found` always holds at least one item; construct through
/// [`Extraction::from_vec`] so an empty match set becomes `NoneFound`.
///
/// # Examples
///
/// ```
/// use vidnote_core::Extraction;
///
/// let none: Extraction<String> = Extraction::from_vec(vec![]);
/// assert!(!none.is_found());
///
/// let some = Extraction::from_vec(vec!["rust".to_string()]);
/// assert_eq!(some.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extraction<T> {
    /// One or more items, in source order
    Found(Vec<T>),
    /// Nothing matched
    NoneFound,
}

impl<T> Extraction<T> {
    /// Wrap a match list.
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::NoneFound
        } else {
            Self::Found(items)
        }
    }

    /// Whether anything was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Number of items found.
    pub fn len(&self) -> usize {
        match self {
            Self::Found(items) => items.len(),
            Self::NoneFound => 0,
        }
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items as a slice (empty for `NoneFound`).
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Found(items) => items,
            Self::NoneFound => &[],
        }
    }

    /// Unwrap into a (possibly empty) vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Found(items) => items,
            Self::NoneFound => Vec::new(),
        }
    }
}

/// Ordered headline candidates; never empty.
///
/// Order is generation order and presentation priority. The first entry is
/// the primary headline used to condition body generation.
///
/// # Examples
///
/// ```
/// use vidnote_core::{Extraction, Headlines};
///
/// let headlines = Headlines::from_extraction(Extraction::NoneFound, "小红书笔记");
/// assert_eq!(headlines.primary(), "小红书笔记");
/// assert_eq!(headlines.len(), 1);
/// assert!(headlines.is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHeadlines")]
pub struct Headlines {
    candidates: Vec<String>,
    placeholder: bool,
}

// Wire shape; validated into `Headlines` so an empty list never deserializes.
#[derive(Deserialize)]
struct RawHeadlines {
    candidates: Vec<String>,
    #[serde(default)]
    placeholder: bool,
}

impl TryFrom<RawHeadlines> for Headlines {
    type Error = String;

    fn try_from(raw: RawHeadlines) -> Result<Self, Self::Error> {
        if raw.candidates.is_empty() {
            return Err("headline list must not be empty".to_string());
        }
        Ok(Self {
            candidates: raw.candidates,
            placeholder: raw.placeholder,
        })
    }
}

impl Headlines {
    /// Wrap a candidate list; `None` when it is empty.
    pub fn new(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(Self {
                candidates,
                placeholder: false,
            })
        }
    }

    /// A single synthetic headline.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            candidates: vec![title.into()],
            placeholder: true,
        }
    }

    /// Found candidates, or a one-element placeholder list.
    pub fn from_extraction(extraction: Extraction<String>, placeholder: &str) -> Self {
        match extraction {
            Extraction::Found(candidates) => {
                Self::new(candidates).unwrap_or_else(|| Self::placeholder(placeholder))
            }
            Extraction::NoneFound => Self::placeholder(placeholder),
        }
    }

    /// The headline downstream phases condition on.
    pub fn primary(&self) -> &str {
        // Non-empty by construction.
        &self.candidates[0]
    }

    /// All candidates in priority order.
    pub fn as_slice(&self) -> &[String] {
        &self.candidates
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether this list was synthesised because nothing parsed.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Iterate over candidates.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.candidates.iter()
    }

    /// Take the candidates.
    pub fn into_vec(self) -> Vec<String> {
        self.candidates
    }
}

impl<'a> IntoIterator for &'a Headlines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
