//! Core TemplateStore implementation

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::Bound;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::error::TemplateError;
use crate::template::Template;

/// Immutable mapping from trigger key to template
///
/// Keys are kept in a `BTreeMap`, so every query walks them in ascending
/// lexicographic order without a separate sort.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    pub fn builder() -> TemplateStoreBuilder {
        TemplateStoreBuilder::default()
    }

    /// Build a store from key/body pairs, rejecting repeated keys
    pub fn from_pairs<K, B>(pairs: impl IntoIterator<Item = (K, B)>) -> Result<Self, TemplateError>
    where
        K: Into<String>,
        B: Into<String>,
    {
        let mut builder = Self::builder();
        for (key, body) in pairs {
            builder.insert(key, body)?;
        }
        Ok(builder.build())
    }

    /// Template whose key equals `key` exactly
    pub fn lookup_exact(&self, key: &str) -> Result<&Template, TemplateError> {
        debug!(%key, "TemplateStore::lookup_exact: called");
        self.templates.get(key).ok_or_else(|| TemplateError::NotFound { key: key.to_string() })
    }

    /// Every template whose key starts with `prefix`, ascending by key
    ///
    /// Keys sharing a prefix are contiguous in sort order, so the walk starts at
    /// `prefix` and stops at the first key that no longer matches.
    pub fn suggest<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Template> + 'a {
        debug!(%prefix, "TemplateStore::suggest: called");
        self.templates
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(_, template)| template)
    }

    /// All keys, ascending
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Accumulates templates before freezing them into a [`TemplateStore`]
#[derive(Debug, Default)]
pub struct TemplateStoreBuilder {
    templates: BTreeMap<String, Template>,
}

impl TemplateStoreBuilder {
    /// Add a template; a key already present is an error
    pub fn insert(&mut self, key: impl Into<String>, body: impl Into<String>) -> Result<&mut Self, TemplateError> {
        let key = key.into();
        match self.templates.entry(key) {
            Entry::Occupied(entry) => Err(TemplateError::DuplicateKey { key: entry.key().clone() }),
            Entry::Vacant(entry) => {
                let template = Template::new(entry.key().clone(), body);
                entry.insert(template);
                Ok(self)
            }
        }
    }

    /// Add templates, replacing any existing body under the same key
    pub fn extend_overriding<K, B>(&mut self, pairs: impl IntoIterator<Item = (K, B)>) -> &mut Self
    where
        K: Into<String>,
        B: Into<String>,
    {
        for (key, body) in pairs {
            let key = key.into();
            if self.templates.contains_key(&key) {
                debug!(%key, "TemplateStoreBuilder::extend_overriding: replacing existing template");
            }
            self.templates.insert(key.clone(), Template::new(key, body));
        }
        self
    }

    pub fn build(self) -> TemplateStore {
        info!(template_count = self.templates.len(), "Built template store");
        TemplateStore {
            templates: self.templates,
        }
    }
}

/// Shareable handle to the current store snapshot
///
/// Reloads swap in a whole new store; readers holding an earlier snapshot keep
/// seeing it unchanged.
#[derive(Debug, Clone, Default)]
pub struct SharedTemplateStore {
    current: Arc<RwLock<Arc<TemplateStore>>>,
}

impl SharedTemplateStore {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<TemplateStore> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Atomically replace the snapshot, returning the previous one
    pub fn replace(&self, store: TemplateStore) -> Arc<TemplateStore> {
        let next = Arc::new(store);
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        info!(template_count = next.len(), "Swapped template store snapshot");
        std::mem::replace(&mut *guard, next)
    }
}
