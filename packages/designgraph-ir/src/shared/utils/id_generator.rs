//! Hierarchy identifier generation
//!
//! ID format: `{sanitized_path}_{salt}`
//!
//! - `sanitized_path`: ancestor names plus the node name, joined with `_`,
//!   lower-cased, every run of non-alphanumeric characters collapsed to `_`
//! - `salt`: first 8 hex chars of SHA-256 over `unit:index-path:node-id`
//!
//! The salt already separates repeated names. A collision that survives it
//! (same unit, same index path, same id) gets a `_{n}` suffix from the
//! session's seen set.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use sha2::{Digest, Sha256};

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

const SALT_LEN: usize = 8;

/// Lower-case and collapse every non-alphanumeric run to a single `_`
///
/// Leading and trailing separators are stripped; an empty result becomes `node`.
pub fn sanitize_segment(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = NON_ALNUM.replace_all(&lowered, "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        "node".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sanitize a full ancestor path plus node name
pub fn sanitize_path<S: AsRef<str>>(ancestors: &[S], name: &str) -> String {
    let joined = ancestors
        .iter()
        .map(AsRef::as_ref)
        .chain(std::iter::once(name))
        .collect::<Vec<_>>()
        .join("_");
    sanitize_segment(&joined)
}

/// First 8 hex characters of SHA-256 over `unit:index-path:node-id`
pub fn salt(unit: &str, index_path: &[usize], node_id: &str) -> String {
    let index_path = index_path
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(".");
    let digest = Sha256::digest(format!("{unit}:{index_path}:{node_id}").as_bytes());
    digest
        .iter()
        .take(SALT_LEN / 2)
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Input for one identifier
#[derive(Debug, Clone)]
pub struct IdentifierContext<'a> {
    pub unit: &'a str,
    pub ancestors: &'a [String],
    pub name: &'a str,
    /// Child indices from the unit root down to the node
    pub index_path: &'a [usize],
    pub node_id: &'a str,
}

/// Session-scoped identifier generator with collision resolution
#[derive(Debug, Default)]
pub struct IdentifierGenerator {
    seen: FxHashSet<String>,
}

impl IdentifierGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, ctx: &IdentifierContext<'_>) -> String {
        let base = format!(
            "{}_{}",
            sanitize_path(ctx.ancestors, ctx.name),
            salt(ctx.unit, ctx.index_path, ctx.node_id)
        );

        if self.seen.insert(base.clone()) {
            return base;
        }

        let mut n = 2usize;
        loop {
            let candidate = format!("{base}_{n}");
            if self.seen.insert(candidate.clone()) {
                tracing::trace!(identifier = %candidate, "resolved identifier collision");
                return candidate;
            }
            n += 1;
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.seen.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
