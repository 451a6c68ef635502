//! Catalog of capabilities, roles and functions
//!
//! Provides [`Catalog`], the read-only bundle every other crate borrows.

use crate::capability::Capability;
use crate::level::ProficiencyLevel;
use crate::role::{FilterType, RoleMapping};
use indexmap::IndexMap;

/// Read-only capability framework
///
/// Lookups are by id; iteration follows declaration order. When an id is
/// declared twice the first declaration is the one returned by lookups
/// (and [`Catalog::validate`] reports the duplicate).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    capabilities: Vec<Capability>,
    roles: Vec<RoleMapping>,
    functions: Vec<RoleMapping>,
    capability_index: IndexMap<String, usize>,
    role_index: IndexMap<String, usize>,
    function_index: IndexMap<String, usize>,
}

impl Catalog {
    /// Build catalog from its tables
    #[must_use]
    pub fn new(
        capabilities: Vec<Capability>,
        roles: Vec<RoleMapping>,
        functions: Vec<RoleMapping>,
    ) -> Self {
        let capability_index = index_by(&capabilities, |c| &c.id);
        let role_index = index_by(&roles, |r| &r.id);
        let function_index = index_by(&functions, |f| &f.id);
        Self {
            capabilities,
            roles,
            functions,
            capability_index,
            role_index,
            function_index,
        }
    }

    /// All capabilities in declaration order
    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Capability by id
    #[must_use]
    pub fn capability(&self, id: &str) -> Option<&Capability> {
        self.capability_index
            .get(id)
            .map(|&i| &self.capabilities[i])
    }

    /// First capability (default when a lookup misses)
    #[inline]
    #[must_use]
    pub fn first_capability(&self) -> Option<&Capability> {
        self.capabilities.first()
    }

    /// Whether a capability id exists
    #[inline]
    #[must_use]
    pub fn contains_capability(&self, id: &str) -> bool {
        self.capability_index.contains_key(id)
    }

    /// All roles in declaration order
    #[inline]
    #[must_use]
    pub fn roles(&self) -> &[RoleMapping] {
        &self.roles
    }

    /// All functions in declaration order
    #[inline]
    #[must_use]
    pub fn functions(&self) -> &[RoleMapping] {
        &self.functions
    }

    /// Table for a filter type
    #[must_use]
    pub fn mappings(&self, filter_type: FilterType) -> &[RoleMapping] {
        match filter_type {
            FilterType::Role => &self.roles,
            FilterType::Function => &self.functions,
        }
    }

    /// Role or function by id
    #[must_use]
    pub fn mapping(&self, filter_type: FilterType, id: &str) -> Option<&RoleMapping> {
        let (index, table) = match filter_type {
            FilterType::Role => (&self.role_index, &self.roles),
            FilterType::Function => (&self.function_index, &self.functions),
        };
        index.get(id).map(|&i| &table[i])
    }

    /// Number of capabilities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the catalog has no capabilities
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Check structural invariants
    ///
    /// # Errors
    /// Returns the first violation found:
    /// - duplicate capability, role or function ids
    /// - a capability without exactly the four levels in ascending order
    /// - a level with no descriptors
    /// - an alignment pointing outside its level's bullet points
    /// - a role/function mapping naming an unknown capability
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(id) = first_duplicate(self.capabilities.iter().map(|c| c.id.as_str())) {
            return Err(CatalogError::DuplicateCapability(id.to_string()));
        }

        for capability in &self.capabilities {
            let found: Vec<ProficiencyLevel> = capability.levels.iter().map(|l| l.level).collect();
            if found != ProficiencyLevel::ALL {
                return Err(CatalogError::LevelLayout {
                    capability_id: capability.id.clone(),
                    found,
                });
            }

            for level in &capability.levels {
                if level.bullet_points.is_empty() {
                    return Err(CatalogError::EmptyLevel {
                        capability_id: capability.id.clone(),
                        level: level.level,
                    });
                }
                if let Some(bad) = level
                    .descriptor_alignments
                    .iter()
                    .find(|a| a.descriptor_index >= level.bullet_points.len())
                {
                    return Err(CatalogError::AlignmentOutOfRange {
                        capability_id: capability.id.clone(),
                        level: level.level,
                        descriptor_index: bad.descriptor_index,
                        descriptor_count: level.bullet_points.len(),
                    });
                }
            }
        }

        for filter_type in [FilterType::Role, FilterType::Function] {
            let table = self.mappings(filter_type);
            if let Some(id) = first_duplicate(table.iter().map(|m| m.id.as_str())) {
                return Err(CatalogError::DuplicateMapping {
                    filter_type,
                    id: id.to_string(),
                });
            }
            for mapping in table {
                if let Some(missing) = mapping
                    .capabilities
                    .iter()
                    .find(|m| !self.contains_capability(&m.capability_id))
                {
                    return Err(CatalogError::UnknownCapabilityReference {
                        filter_type,
                        mapping_id: mapping.id.clone(),
                        capability_id: missing.capability_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &String) -> IndexMap<String, usize> {
    let mut index = IndexMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(key(item).clone()).or_insert(i);
    }
    index
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Capability id declared more than once
    #[error("duplicate capability id: {0}")]
    DuplicateCapability(String),

    /// Role or function id declared more than once
    #[error("duplicate {filter_type} id: {id}")]
    DuplicateMapping {
        /// Table containing the duplicate
        filter_type: FilterType,
        /// Duplicated id
        id: String,
    },

    /// Levels missing, duplicated or out of order
    #[error("capability {capability_id} has levels {found:?}, expected FOUNDATION..EXEMPLAR")]
    LevelLayout {
        /// Offending capability
        capability_id: String,
        /// Levels as declared
        found: Vec<ProficiencyLevel>,
    },

    /// Level without descriptors
    #[error("capability {capability_id} level {level} has no descriptors")]
    EmptyLevel {
        /// Offending capability
        capability_id: String,
        /// Empty level
        level: ProficiencyLevel,
    },

    /// Alignment annotation pointing outside its level
    #[error(
        "capability {capability_id} level {level}: alignment index {descriptor_index} \
         out of range ({descriptor_count} descriptors)"
    )]
    AlignmentOutOfRange {
        /// Offending capability
        capability_id: String,
        /// Level holding the alignment
        level: ProficiencyLevel,
        /// Index referenced
        descriptor_index: usize,
        /// Descriptors in the level
        descriptor_count: usize,
    },

    /// Mapping names a capability that does not exist
    #[error("{filter_type} {mapping_id} references unknown capability {capability_id}")]
    UnknownCapabilityReference {
        /// Table containing the mapping
        filter_type: FilterType,
        /// Role or function id
        mapping_id: String,
        /// Missing capability id
        capability_id: String,
    },
}
