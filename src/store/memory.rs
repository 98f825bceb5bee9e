//! In-process `WikiStore` used by the HTTP tests. Mirrors the Postgres
//! constraints that the handlers depend on: unique slug, cascade of blocks.

use super::WikiStore;
use crate::error::AppError;
use crate::model::{Block, Wiki, WikiFields, WikiRecord};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    next_wiki_id: i32,
    next_block_id: i32,
    wikis: BTreeMap<i32, Wiki>,
}

#[derive(Default)]
pub struct MemoryWikiStore {
    inner: Mutex<Inner>,
    /// When set, every call fails like an unreachable database.
    pub offline: bool,
}

impl MemoryWikiStore {
    pub fn offline() -> Self {
        MemoryWikiStore { offline: true, ..Default::default() }
    }

    /// Attach a block to wiki `wiki_id`; the block endpoints live elsewhere.
    pub fn add_block(&self, wiki_id: i32, title: &str, content: &str) -> i32 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_block_id += 1;
        let id = inner.next_block_id;
        let wiki = inner.wikis.get_mut(&wiki_id).expect("block owner exists");
        wiki.block.push(Block { id, title: title.into(), content: content.into() });
        wiki.block.sort_by_key(|b| b.id);
        id
    }

    fn check(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::Db("connection refused".into()));
        }
        Ok(())
    }
}

fn slug_taken(inner: &Inner, slug: &str, except: Option<i32>) -> bool {
    inner.wikis.values().any(|w| w.slug == slug && Some(w.id) != except)
}

fn duplicate_slug(slug: &str) -> AppError {
    AppError::Conflict(format!("Key (slug)=({}) already exists.", slug))
}

#[async_trait]
impl WikiStore for MemoryWikiStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn list(&self) -> Result<Vec<Wiki>, AppError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().wikis.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Wiki>, AppError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().wikis.get(&id).cloned())
    }

    async fn insert(&self, fields: &WikiFields) -> Result<i32, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if slug_taken(&inner, &fields.slug, None) {
            return Err(duplicate_slug(&fields.slug));
        }
        inner.next_wiki_id += 1;
        let id = inner.next_wiki_id;
        inner.wikis.insert(
            id,
            Wiki {
                id,
                slug: fields.slug.clone(),
                title: fields.title.clone(),
                full_title: fields.full_title.clone(),
                kind: fields.kind,
                block: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &WikiFields) -> Result<Option<WikiRecord>, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if !inner.wikis.contains_key(&id) {
            return Ok(None);
        }
        if slug_taken(&inner, &fields.slug, Some(id)) {
            return Err(duplicate_slug(&fields.slug));
        }
        let wiki = inner.wikis.get_mut(&id).expect("checked above");
        wiki.slug = fields.slug.clone();
        wiki.title = fields.title.clone();
        wiki.full_title = fields.full_title.clone();
        wiki.kind = fields.kind;
        Ok(Some(wiki.record()))
    }

    async fn delete(&self, id: i32) -> Result<Option<WikiRecord>, AppError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().wikis.remove(&id).map(|w| w.record()))
    }
}
