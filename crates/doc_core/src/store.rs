//! In-memory document store
//!
//! Documents are seeded once at construction. Content changes through
//! [`DocumentStore::edit`]; the set of identifiers never does.

use doc_common::{DocError, Result};
use std::collections::HashMap;

/// Seed documents, in listing order
pub const SEED_DOCUMENTS: [(&str, &str); 6] = [
    (
        "deposition.md",
        "This deposition covers the testimony of Angela Smith, P.E.",
    ),
    (
        "report.pdf",
        "The report details the state of a 20m condenser tower.",
    ),
    (
        "financials.docx",
        "These financials outline the project's budget and expenditures.",
    ),
    (
        "outlook.pdf",
        "This document presents the projected future performance of the system.",
    ),
    (
        "plan.md",
        "The plan outlines the steps for the project's implementation.",
    ),
    (
        "spec.txt",
        "These specifications define the technical requirements for the equipment.",
    ),
];

/// A single named document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub content: String,
}

/// Identifier -> content registry that preserves seed order
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

impl DocumentStore {
    /// Build a store holding the six seed documents
    pub fn seeded() -> Self {
        Self::from_entries(SEED_DOCUMENTS)
    }

    /// Build a store from arbitrary entries. A repeated id keeps its first
    /// position and takes the last content.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut documents: Vec<Document> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (id, content) in entries {
            let id = id.into();
            let content = content.into();
            match index.get(&id) {
                Some(&pos) => documents[pos].content = content,
                None => {
                    index.insert(id.clone(), documents.len());
                    documents.push(Document { id, content });
                }
            }
        }

        Self { documents, index }
    }

    fn get(&self, doc_id: &str) -> Result<&Document> {
        self.index
            .get(doc_id)
            .map(|&pos| &self.documents[pos])
            .ok_or_else(|| DocError::not_found(doc_id))
    }

    /// Current content of `doc_id`
    pub fn read(&self, doc_id: &str) -> Result<&str> {
        self.get(doc_id).map(|doc| doc.content.as_str())
    }

    /// Resource-style lookup; same contract as [`read`](Self::read)
    pub fn fetch(&self, doc_id: &str) -> Result<&str> {
        self.read(doc_id)
    }

    /// Replace every non-overlapping occurrence of `old_str` with `new_str`.
    ///
    /// Matching is literal and case sensitive. A pattern that does not occur
    /// leaves the content as it was. An empty pattern is rejected because it
    /// would match between every character.
    pub fn edit(&mut self, doc_id: &str, old_str: &str, new_str: &str) -> Result<()> {
        let pos = *self
            .index
            .get(doc_id)
            .ok_or_else(|| DocError::not_found(doc_id))?;

        if old_str.is_empty() {
            return Err(DocError::ValidationError(
                "old_str must not be empty".to_string(),
            ));
        }

        let doc = &mut self.documents[pos];
        doc.content = doc.content.replace(old_str, new_str);
        Ok(())
    }

    /// How many occurrences an [`edit`](Self::edit) with `old_str` would replace
    pub fn matches(&self, doc_id: &str, old_str: &str) -> Result<usize> {
        let doc = self.get(doc_id)?;
        if old_str.is_empty() {
            return Ok(0);
        }
        Ok(doc.content.matches(old_str).count())
    }

    /// All identifiers in seed order
    pub fn list(&self) -> Vec<String> {
        self.documents.iter().map(|doc| doc.id.clone()).collect()
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.index.contains_key(doc_id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::seeded()
    }
}
