//! Sorting and filtering for folder listings.

use std::cmp::{Ordering, Reverse};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::tree::{compare_entities, Entity, EntityId, FileTree};

/// The field by which entries are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Case-insensitive name; files tie-break on extension then timestamps.
    Name,
    /// Creation time.
    Created,
    /// Last update time.
    Updated,
    /// Entity type, then extension (case-insensitive).
    Type,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest / earliest / A–Z first.
    Ascending,
    /// Largest / latest / Z–A first.
    Descending,
}

/// Sorts entity ids by the given field and direction.
///
/// When `folders_first` is `true`, folders always appear before files
/// regardless of the sort field. Ids that are not live in `tree` are
/// dropped. Returns a **new** `Vec`; the input slice is never mutated.
pub fn sort_entries(
    tree: &FileTree,
    ids: &[EntityId],
    field: SortField,
    direction: SortDirection,
    folders_first: bool,
) -> Vec<EntityId> {
    let mut live: Vec<(EntityId, &Entity)> = ids
        .iter()
        .filter_map(|id| tree.get(*id).map(|e| (*id, e)))
        .collect();

    live.sort_by(|(_, a), (_, b)| {
        if folders_first {
            let type_cmp = a.entity_type().cmp(&b.entity_type());
            if type_cmp != Ordering::Equal {
                return type_cmp;
            }
        }

        let ord = compare_by_field(a, b, field);

        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    live.into_iter().map(|(id, _)| id).collect()
}

fn compare_by_field(a: &Entity, b: &Entity, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| compare_entities(a, b)),
        SortField::Created => a.created_at().cmp(&b.created_at()),
        SortField::Updated => a.updated_at().cmp(&b.updated_at()),
        SortField::Type => a
            .entity_type()
            .cmp(&b.entity_type())
            .then_with(|| extension_lower(a).cmp(&extension_lower(b))),
    }
}

fn extension_lower(entity: &Entity) -> String {
    entity.extension().map(str::to_lowercase).unwrap_or_default()
}

/// An entity id paired with its fuzzy match score and the byte indices
/// in the display name that matched the query.
#[derive(Debug, Clone)]
pub struct FuzzyMatch {
    id: EntityId,
    score: i64,
    matched_indices: Vec<usize>,
}

impl FuzzyMatch {
    /// The matching entity.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Match score; higher values indicate a better match.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Byte indices in the display name that matched the query.
    #[must_use]
    pub fn matched_indices(&self) -> &[usize] {
        &self.matched_indices
    }
}

/// Fuzzy-matches `query` against each entity's display name.
///
/// Returns matches sorted by score (highest first). When `query` is empty
/// every live entity is returned, in input order, with a score of `0`.
pub fn fuzzy_filter(tree: &FileTree, ids: &[EntityId], query: &str) -> Vec<FuzzyMatch> {
    let live = ids
        .iter()
        .filter_map(|id| tree.get(*id).map(|e| (*id, e)));

    if query.is_empty() {
        return live
            .map(|(id, _)| FuzzyMatch {
                id,
                score: 0,
                matched_indices: Vec::new(),
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();

    let mut matches: Vec<FuzzyMatch> = live
        .filter_map(|(id, e)| {
            matcher
                .fuzzy_indices(&e.display_name(), query)
                .map(|(score, indices)| FuzzyMatch {
                    id,
                    score,
                    matched_indices: indices,
                })
        })
        .collect();

    matches.sort_by_key(|m| Reverse(m.score));
    matches
}
