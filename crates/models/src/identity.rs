use crate::id::{ModuleId, RepoId};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Composite key addressing one module inside one repository.
///
/// Module IDs are only unique within the repository that publishes them, so
/// anything that needs to find a module instance (the module registry, most
/// obviously) keys on the pair. Equality and hashing are field-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RepoModuleId {
    pub repo_id: RepoId,
    pub module_id: ModuleId,
}
impl RepoModuleId {
    /// IDs are trusted as-is from their owning subsystems; nothing is validated.
    pub fn create(repo_id: impl Into<RepoId>, module_id: impl Into<ModuleId>) -> Self {
        Self {
            repo_id: repo_id.into(),
            module_id: module_id.into(),
        }
    }
}
impl RepoId {
    /// Key for a module published by this repository.
    pub fn module(&self, module_id: impl Into<ModuleId>) -> RepoModuleId {
        RepoModuleId::create(self.clone(), module_id)
    }
}
impl ModuleId {
    /// Key for this module as published by the given repository.
    pub fn in_repo(&self, repo_id: impl Into<RepoId>) -> RepoModuleId {
        RepoModuleId::create(repo_id, self.clone())
    }
}
impl From<(RepoId, ModuleId)> for RepoModuleId {
    fn from((repo_id, module_id): (RepoId, ModuleId)) -> Self {
        Self { repo_id, module_id }
    }
}
impl Display for RepoModuleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.repo_id, self.module_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use std::hash::{BuildHasher, RandomState};

    #[rstest]
    #[case("repo", "module-a", "repo", "module-a", true)]
    #[case("repo", "module-a", "repo", "module-b", false)]
    #[case("repo-1", "module", "repo-2", "module", false)]
    #[case("", "", "", "", true)]
    fn test_composite_equality(
        #[case] repo_a: &str,
        #[case] module_a: &str,
        #[case] repo_b: &str,
        #[case] module_b: &str,
        #[case] equal: bool,
    ) {
        let a = RepoModuleId::create(repo_a, module_a);
        let b = RepoModuleId::create(repo_b, module_b);
        assert_eq!(a == b, equal);
        if equal {
            let state = RandomState::new();
            assert_eq!(state.hash_one(&a), state.hash_one(&b));
        }
    }

    #[test]
    fn every_constructor_agrees() {
        let repo = RepoId::new("https://modules.example/repo");
        let module = ModuleId::new("anime-provider");
        let expected = RepoModuleId::create(repo.clone(), module.clone());
        assert_eq!(repo.module(module.clone()), expected);
        assert_eq!(module.in_repo(repo.clone()), expected);
        assert_eq!(RepoModuleId::from((repo, module)), expected);
    }

    #[test]
    fn usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(RepoModuleId::create("repo", "a"), 1);
        map.insert(RepoModuleId::create("repo", "b"), 2);
        map.insert(RepoModuleId::create("repo", "a"), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&RepoModuleId::create("repo", "a")), Some(&3));
    }

    #[test]
    fn display_joins_both_parts() {
        assert_eq!(RepoModuleId::create("local", "gogo").to_string(), "local/gogo");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_named_fields() {
        let id = RepoModuleId::create("local", "gogo");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"repoId":"local","moduleId":"gogo"}"#);
        assert_eq!(serde_json::from_str::<RepoModuleId>(&json).unwrap(), id);
    }
}
