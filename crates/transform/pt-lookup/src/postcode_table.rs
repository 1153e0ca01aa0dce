//! PostcodeTable - O(1) mesh-block to postcode lookup using HashMap.

use ahash::RandomState;
use hashbrown::HashMap;

/// Mesh-block code to postal-area code lookup, using hashbrown with ahash.
///
/// Later inserts for the same mesh block replace earlier ones.
#[derive(Debug, Default)]
pub struct PostcodeTable {
    data: HashMap<String, String, RandomState>,
}

impl PostcodeTable {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Inserts a postcode, returning the one it replaced.
    pub fn insert(&mut self, mesh_block: String, postcode: String) -> Option<String> {
        self.data.insert(mesh_block, postcode)
    }

    /// Looks up the postcode for a mesh block.
    pub fn get(&self, mesh_block: &str) -> Option<&str> {
        self.data.get(mesh_block).map(String::as_str)
    }

    /// Returns the number of mesh blocks in the table.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
