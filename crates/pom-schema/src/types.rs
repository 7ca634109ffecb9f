//! Record types for the Maven project object model.
//!
//! Every scalar is an `Option<String>`: `None` when the element is absent,
//! `Some("")` when it is present but empty. Repeated elements are plain
//! vectors in document order and are empty when the element never occurs.

use crate::xml::Element;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Group id Maven assumes for a `<plugin>` that omits `<groupId>`.
pub const DEFAULT_PLUGIN_GROUP_ID: &str = "org.apache.maven.plugins";

/// Packaging type assumed for a `<dependency>` that omits `<type>`.
pub const DEFAULT_DEPENDENCY_TYPE: &str = "jar";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub model_version: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub parent: Option<Parent>,
    pub modules: Vec<String>,
    pub repositories: Vec<Repository>,
    pub plugin_repositories: Vec<PluginRepository>,
    pub properties: HashMap<String, String>,
    pub dependency_management: Option<DependencyManagement>,
    pub dependencies: Vec<Dependency>,
    pub profiles: Vec<Profile>,
    pub build: Option<Build>,
}

/// Coordinates of the parent POM. Never resolved to a live project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub relative_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub classifier: Option<String>,
    pub optional: Option<String>,
    pub exclusions: Vec<Exclusion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Repository {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub layout: Option<String>,
}

/// Same shape as [`Repository`], read from `<pluginRepositories>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PluginRepository {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub layout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DependencyManagement {
    pub dependencies: Vec<Dependency>,
}

/// A conditional build fragment. Activation rules are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<String>,
    pub modules: Vec<String>,
    pub properties: HashMap<String, String>,
    pub dependency_management: Option<DependencyManagement>,
    pub dependencies: Vec<Dependency>,
    pub build: Option<Build>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub final_name: Option<String>,
    pub default_goal: Option<String>,
    pub directory: Option<String>,
    pub plugins: Vec<Plugin>,
    pub plugin_management: Option<PluginManagement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PluginManagement {
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub inherited: Option<String>,
    pub extensions: Option<String>,
    pub executions: Vec<Execution>,
    pub dependencies: Vec<Dependency>,
    /// Plugin-specific settings, kept as an untyped element tree.
    pub configuration: Option<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Execution {
    pub id: Option<String>,
    pub phase: Option<String>,
    pub inherited: Option<String>,
    pub goals: Vec<String>,
    pub configuration: Option<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Test,
    Provided,
    Runtime,
    System,
    Import,
}

impl Scope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Test => "test",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::System => "system",
            Self::Import => "import",
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "test" => Self::Test,
            "provided" => Self::Provided,
            "runtime" => Self::Runtime,
            "system" => Self::System,
            "import" => Self::Import,
            _ => Self::Compile,
        })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `groupId:artifactId[:version]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
}

impl Coordinate {
    fn from_parts(
        group_id: Option<&str>,
        artifact_id: Option<&str>,
        version: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            group_id: group_id?.to_string(),
            artifact_id: artifact_id?.to_string(),
            version: version.map(str::to_string),
        })
    }

    /// True for SNAPSHOT, alpha, beta, RC and milestone versions.
    pub fn is_prerelease(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(crate::version::is_prerelease)
    }

    /// True when the version is a `${...}` expression left for interpolation.
    pub fn has_property_version(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(crate::version::is_property_reference)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

impl Project {
    /// Own group id, falling back to the parent's.
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref()?.group_id.as_deref())
    }

    /// Own version, falling back to the parent's.
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref()?.version.as_deref())
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(
            self.effective_group_id(),
            self.artifact_id.as_deref(),
            self.effective_version(),
        )
    }

    pub fn find_dependency(&self, group_id: &str, artifact_id: &str) -> Option<&Dependency> {
        find_in(&self.dependencies, group_id, artifact_id)
    }

    pub fn managed_dependency(&self, group_id: &str, artifact_id: &str) -> Option<&Dependency> {
        let management = self.dependency_management.as_ref()?;
        find_in(&management.dependencies, group_id, artifact_id)
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id.as_deref() == Some(id))
    }
}

fn find_in<'a>(
    deps: &'a [Dependency],
    group_id: &str,
    artifact_id: &str,
) -> Option<&'a Dependency> {
    deps.iter().find(|d| {
        d.group_id.as_deref() == Some(group_id) && d.artifact_id.as_deref() == Some(artifact_id)
    })
}

impl Parent {
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(
            self.group_id.as_deref(),
            self.artifact_id.as_deref(),
            self.version.as_deref(),
        )
    }
}

impl Dependency {
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(
            self.group_id.as_deref(),
            self.artifact_id.as_deref(),
            self.version.as_deref(),
        )
    }

    /// Parsed `<scope>`; an absent or unknown scope is `compile`.
    pub fn scope_kind(&self) -> Scope {
        self.scope
            .as_deref()
            .unwrap_or("compile")
            .parse::<Scope>()
            .unwrap_or_default()
    }

    pub fn type_or_default(&self) -> &str {
        self.type_.as_deref().unwrap_or(DEFAULT_DEPENDENCY_TYPE)
    }

    pub fn is_optional(&self) -> bool {
        self.optional
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    pub fn excludes(&self, group_id: &str, artifact_id: &str) -> bool {
        self.exclusions.iter().any(|e| {
            e.group_id.as_deref() == Some(group_id) && e.artifact_id.as_deref() == Some(artifact_id)
        })
    }
}

impl Plugin {
    pub fn group_id_or_default(&self) -> &str {
        self.group_id.as_deref().unwrap_or(DEFAULT_PLUGIN_GROUP_ID)
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(
            Some(self.group_id_or_default()),
            self.artifact_id.as_deref(),
            self.version.as_deref(),
        )
    }

    pub fn execution(&self, id: &str) -> Option<&Execution> {
        self.executions.iter().find(|e| e.id.as_deref() == Some(id))
    }
}

impl Build {
    pub fn plugin(&self, group_id: &str, artifact_id: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|p| {
            p.group_id_or_default() == group_id && p.artifact_id.as_deref() == Some(artifact_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dep() -> Dependency {
        Dependency {
            group_id: Some("org.apache.commons".into()),
            artifact_id: Some("commons-lang3".into()),
            version: Some("3.14.0".into()),
            ..Dependency::default()
        }
    }

    #[test]
    fn test_scope_variants() {
        assert_eq!("test".parse::<Scope>().unwrap(), Scope::Test);
        assert_eq!("runtime".parse::<Scope>().unwrap(), Scope::Runtime);
        assert_eq!("provided".parse::<Scope>().unwrap(), Scope::Provided);
        assert_eq!("system".parse::<Scope>().unwrap(), Scope::System);
        assert_eq!("import".parse::<Scope>().unwrap(), Scope::Import);
        assert_eq!("compile".parse::<Scope>().unwrap(), Scope::Compile);
        assert_eq!("TEST".parse::<Scope>().unwrap(), Scope::Test);
        assert_eq!("unknown".parse::<Scope>().unwrap(), Scope::Compile);
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::Provided.to_string(), "provided");
        assert_eq!(Scope::default().as_str(), "compile");
    }

    #[test]
    fn test_dependency_defaults() {
        let dep = test_dep();
        assert_eq!(dep.scope_kind(), Scope::Compile);
        assert_eq!(dep.type_or_default(), "jar");
        assert!(!dep.is_optional());

        let dep = Dependency {
            scope: Some("test".into()),
            type_: Some("test-jar".into()),
            optional: Some("true".into()),
            ..test_dep()
        };
        assert_eq!(dep.scope_kind(), Scope::Test);
        assert_eq!(dep.type_or_default(), "test-jar");
        assert!(dep.is_optional());
    }

    #[test]
    fn test_dependency_excludes() {
        let dep = Dependency {
            exclusions: vec![Exclusion {
                group_id: Some("commons-logging".into()),
                artifact_id: Some("commons-logging".into()),
            }],
            ..test_dep()
        };
        assert!(dep.excludes("commons-logging", "commons-logging"));
        assert!(!dep.excludes("commons-logging", "other"));
    }

    #[test]
    fn test_coordinate_display() {
        let coord = test_dep().coordinate().unwrap();
        assert_eq!(coord.to_string(), "org.apache.commons:commons-lang3:3.14.0");

        let coord = Dependency {
            version: None,
            ..test_dep()
        }
        .coordinate()
        .unwrap();
        assert_eq!(coord.to_string(), "org.apache.commons:commons-lang3");
    }

    #[test]
    fn test_coordinate_requires_group_and_artifact() {
        let dep = Dependency {
            group_id: None,
            ..test_dep()
        };
        assert!(dep.coordinate().is_none());
    }

    #[test]
    fn test_coordinate_version_classification() {
        let coord = Coordinate {
            group_id: "g".into(),
            artifact_id: "a".into(),
            version: Some("1.0.0-SNAPSHOT".into()),
        };
        assert!(coord.is_prerelease());
        assert!(!coord.has_property_version());

        let coord = Coordinate {
            version: Some("${slf4j.version}".into()),
            ..coord
        };
        assert!(coord.has_property_version());
    }

    #[test]
    fn test_project_inherits_from_parent() {
        let project = Project {
            artifact_id: Some("child".into()),
            parent: Some(Parent {
                group_id: Some("com.example".into()),
                artifact_id: Some("parent".into()),
                version: Some("2.0".into()),
                relative_path: None,
            }),
            ..Project::default()
        };
        assert_eq!(project.effective_group_id(), Some("com.example"));
        assert_eq!(project.effective_version(), Some("2.0"));
        assert_eq!(
            project.coordinate().unwrap().to_string(),
            "com.example:child:2.0"
        );

        let own = Project {
            group_id: Some("org.own".into()),
            ..project
        };
        assert_eq!(own.effective_group_id(), Some("org.own"));
    }

    #[test]
    fn test_project_without_parent_or_group() {
        let project = Project {
            artifact_id: Some("lonely".into()),
            ..Project::default()
        };
        assert!(project.effective_group_id().is_none());
        assert!(project.coordinate().is_none());
    }

    #[test]
    fn test_project_lookups() {
        let project = Project {
            dependencies: vec![test_dep()],
            dependency_management: Some(DependencyManagement {
                dependencies: vec![Dependency {
                    artifact_id: Some("bom".into()),
                    ..test_dep()
                }],
            }),
            profiles: vec![Profile {
                id: Some("dev".into()),
                ..Profile::default()
            }],
            ..Project::default()
        };
        assert!(
            project
                .find_dependency("org.apache.commons", "commons-lang3")
                .is_some()
        );
        assert!(project.find_dependency("org.apache.commons", "bom").is_none());
        assert!(
            project
                .managed_dependency("org.apache.commons", "bom")
                .is_some()
        );
        assert!(project.profile("dev").is_some());
        assert!(project.profile("prod").is_none());
    }

    #[test]
    fn test_plugin_default_group() {
        let plugin = Plugin {
            artifact_id: Some("maven-war-plugin".into()),
            version: Some("3.2.2".into()),
            ..Plugin::default()
        };
        assert_eq!(plugin.group_id_or_default(), DEFAULT_PLUGIN_GROUP_ID);
        assert_eq!(
            plugin.coordinate().unwrap().to_string(),
            "org.apache.maven.plugins:maven-war-plugin:3.2.2"
        );

        let build = Build {
            plugins: vec![plugin],
            ..Build::default()
        };
        assert!(
            build
                .plugin(DEFAULT_PLUGIN_GROUP_ID, "maven-war-plugin")
                .is_some()
        );
    }

    #[test]
    fn test_plugin_execution_lookup() {
        let plugin = Plugin {
            executions: vec![Execution {
                id: Some("deploy".into()),
                goals: vec!["deploy-artifact".into()],
                ..Execution::default()
            }],
            ..Plugin::default()
        };
        assert_eq!(
            plugin.execution("deploy").unwrap().goals,
            vec!["deploy-artifact"]
        );
        assert!(plugin.execution("other").is_none());
    }
}
