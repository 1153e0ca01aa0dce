//! Header-driven column resolution.
//!
//! G-NAF tables declare their columns in the header line, and column order
//! differs between releases. A [`ColumnSchema`] names the columns a consumer
//! needs; resolving it against a header produces a [`ColumnMap`] of
//! [`ColumnIndex`] values that are reused for every data line of that file.

use pt_types::RecordFormat;

/// Position of a column within a record.
///
/// `Missing` is the result of resolving a name the header does not contain.
/// Reading through it yields `None` rather than failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnIndex {
    /// Zero-based field position
    At(usize),
    /// Column absent from the header
    #[default]
    Missing,
}

impl ColumnIndex {
    /// Fixed position, for schemas known by ordinal.
    pub const fn at(position: usize) -> Self {
        Self::At(position)
    }

    /// The position, if resolved.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::At(position) => Some(*position),
            Self::Missing => None,
        }
    }

    /// Returns true if the column was not found.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Extracts this column from a split record.
    ///
    /// `None` for a missing column or a row too short to contain it.
    pub fn get<'a>(&self, fields: &[&'a str]) -> Option<&'a str> {
        self.position().and_then(|idx| fields.get(idx).copied())
    }
}

/// Ordered list of column names a consumer expects in a header.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    names: Vec<&'static str>,
}

impl ColumnSchema {
    /// Creates a schema from column names.
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }

    /// Expected column names, in declaration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Resolves each expected name to its position in `header`.
    ///
    /// Header names are compared after trimming surrounding whitespace.
    /// The first occurrence wins if a name repeats.
    pub fn resolve(&self, header: &str, format: RecordFormat) -> ColumnMap {
        let header_fields = format.split(header);

        let indices = self
            .names
            .iter()
            .map(|name| {
                header_fields
                    .iter()
                    .position(|field| field.trim() == *name)
                    .map_or(ColumnIndex::Missing, ColumnIndex::At)
            })
            .collect();

        ColumnMap {
            names: self.names.clone(),
            indices,
        }
    }
}

/// A [`ColumnSchema`] resolved against one file's header.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    names: Vec<&'static str>,
    indices: Vec<ColumnIndex>,
}

impl ColumnMap {
    /// Index of a named column. Names outside the schema are `Missing`.
    pub fn index(&self, name: &str) -> ColumnIndex {
        self.names
            .iter()
            .position(|n| *n == name)
            .map_or(ColumnIndex::Missing, |i| self.indices[i])
    }

    /// Schema names that the header did not contain.
    pub fn missing(&self) -> Vec<&'static str> {
        self.names
            .iter()
            .zip(&self.indices)
            .filter(|(_, idx)| idx.is_missing())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Returns true if every schema column was found.
    pub fn is_complete(&self) -> bool {
        self.indices.iter().all(|idx| !idx.is_missing())
    }
}
