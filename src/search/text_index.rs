//! Full-text index used as the first search strategy
//!
//! [`TextIndex`] abstracts "give me the ids matching this query, best
//! first". [`Bm25Index`] implements it with an in-RAM Tantivy index built
//! over the request's corpus.

use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{
    Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions, Value,
};
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument};
use tracing::{debug, warn};

use crate::content::{ContentBody, ContentItem};
use crate::error::{RankError, Result};

/// Full-text lookup returning item ids in relevance order
pub trait TextIndex {
    /// Ids of matching items, best first, at most `limit`.
    ///
    /// # Errors
    ///
    /// Index failures propagate to the caller unchanged.
    fn search_ids(&self, query: &str, limit: usize) -> Result<Vec<String>>;
}

/// BM25 search index using Tantivy, built once over a fixed corpus
pub struct Bm25Index {
    index: Index,
    reader: IndexReader,
    fields: Bm25Fields,
}

#[derive(Clone, Copy)]
struct Bm25Fields {
    id: Field,
    title: Field,
    description: Field,
    body: Field,
    ingredients: Field,
    instructions: Field,
    tags: Field,
}

impl Bm25Fields {
    fn searchable(self) -> Vec<Field> {
        vec![
            self.title,
            self.description,
            self.body,
            self.ingredients,
            self.instructions,
            self.tags,
        ]
    }

    fn document(self, item: &ContentItem) -> TantivyDocument {
        let mut doc = TantivyDocument::new();
        doc.add_text(self.id, &item.id);
        doc.add_text(self.title, &item.title);
        doc.add_text(self.description, &item.description);
        match &item.body {
            ContentBody::Recipe(recipe) => {
                doc.add_text(self.ingredients, item.ingredient_names().join(" "));
                let steps: Vec<&str> = recipe
                    .instructions
                    .iter()
                    .map(|step| step.description.as_str())
                    .collect();
                doc.add_text(self.instructions, steps.join(" "));
            }
            ContentBody::Blog(blog) => {
                doc.add_text(self.body, &blog.content);
                doc.add_text(self.tags, blog.tags.join(" "));
            }
        }
        doc
    }
}

impl Bm25Index {
    /// Build and commit an in-memory index over `items`.
    ///
    /// The writer is dropped once the batch is committed; the index is
    /// read-only afterwards.
    pub fn build(items: &[ContentItem]) -> Result<Self> {
        let schema = build_schema();
        let fields = extract_fields(&schema)?;
        let index = Index::create_in_ram(schema);

        // one thread: per-request corpora are small
        let mut writer: IndexWriter = index.writer_with_num_threads(1, 15_000_000)?;
        for item in items {
            writer.add_document(fields.document(item))?;
        }
        writer.commit()?;
        drop(writer);

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        debug!(docs = items.len(), "built bm25 index");

        Ok(Self {
            index,
            reader,
            fields,
        })
    }

    #[cfg(test)]
    fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }
}

impl TextIndex for Bm25Index {
    fn search_ids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if limit == 0 || query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let parser = QueryParser::for_index(&self.index, self.fields.searchable());

        // User text is not query syntax; keep whatever parses.
        let (parsed, errors) = parser.parse_query_lenient(query);
        if !errors.is_empty() {
            warn!(query, errors = errors.len(), "ignored unparseable query fragments");
        }

        let top_docs = searcher.search(&parsed, &TopDocs::with_limit(limit))?;

        let mut ids = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            if let Some(id) = doc.get_first(self.fields.id).and_then(|v| v.as_str()) {
                ids.push(id.to_string());
            }
        }

        debug!(query, hits = ids.len(), "bm25 lookup");
        Ok(ids)
    }
}

fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    let text_options = TextOptions::default().set_indexing_options(
        TextFieldIndexing::default()
            .set_tokenizer("default")
            .set_index_option(IndexRecordOption::WithFreqsAndPositions),
    );

    builder.add_text_field("id", STRING | STORED);
    builder.add_text_field("title", text_options.clone());
    builder.add_text_field("description", text_options.clone());
    builder.add_text_field("body", text_options.clone());
    builder.add_text_field("ingredients", text_options.clone());
    builder.add_text_field("instructions", text_options.clone());
    builder.add_text_field("tags", text_options);

    builder.build()
}

fn extract_fields(schema: &Schema) -> Result<Bm25Fields> {
    let field = |name: &str| {
        schema.get_field(name).map_err(|_| {
            RankError::SearchIndex(tantivy::TantivyError::SchemaError(format!(
                "missing {name} field"
            )))
        })
    };

    Ok(Bm25Fields {
        id: field("id")?,
        title: field("title")?,
        description: field("description")?,
        body: field("body")?,
        ingredients: field("ingredients")?,
        instructions: field("instructions")?,
        tags: field("tags")?,
    })
}
