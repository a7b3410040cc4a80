use indexmap::IndexSet;

/// Term -> column id.
/// Column ids follow lexical order of the terms, so identical corpora
/// always produce identical ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Collect the distinct terms and assign ids in lexical order
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: IndexSet<Box<str>> = terms.into_iter().map(|t| t.as_ref().into()).collect();
        set.sort();
        Self { terms: set }
    }

    /// column id of `term`
    #[inline]
    pub fn get(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// term at column id
    #[inline]
    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get_index(id).map(|t| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// terms in column order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}
