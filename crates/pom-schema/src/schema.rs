//! Element-to-field mapping for every POM record.
//!
//! Each record implements [`FromElement`]; its `assign` is the mapping
//! table for that record, keyed by the local name of a direct child
//! element. Children that match no entry are ignored, so newer POM
//! elements pass through without error.
//!
//! Wrapper elements such as `<dependencies>` are expanded by name
//! (`<dependencies><dependency>`) and append when repeated. A repeated
//! scalar or single nested element keeps the last occurrence.

use crate::types::{
    Build, Dependency, DependencyManagement, Exclusion, Execution, Parent, Plugin,
    PluginManagement, PluginRepository, Profile, Project, Repository,
};
use crate::xml::{Element, trim_xml_whitespace};
use std::collections::HashMap;

/// Text handling shared by all mapping tables.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mapper {
    pub(crate) trim_text: bool,
}

impl Mapper {
    fn text(self, element: &Element) -> String {
        if self.trim_text {
            trim_xml_whitespace(&element.text).to_string()
        } else {
            element.text.clone()
        }
    }

    fn scalar(self, element: &Element) -> Option<String> {
        Some(self.text(element))
    }

    /// `<modules><module>a</module></modules>` style string lists.
    fn strings<'a>(self, wrapper: &'a Element, item: &'a str) -> impl Iterator<Item = String> {
        wrapper.children_named(item).map(move |e| self.text(e))
    }

    /// Appends every `item` child of `wrapper` to `into`, in document order.
    fn collect<T: FromElement>(self, wrapper: &Element, item: &str, into: &mut Vec<T>) {
        into.extend(wrapper.children_named(item).map(|e| T::from_element(e, self)));
    }

    fn record<T: FromElement>(self, element: &Element) -> Option<T> {
        Some(T::from_element(element, self))
    }

    /// Every child of `<properties>` becomes one name/value pair.
    fn properties(self, element: &Element, into: &mut HashMap<String, String>) {
        for child in &element.children {
            into.insert(child.name.clone(), self.text(child));
        }
    }

    pub(crate) fn project(self, root: &Element) -> Project {
        Project::from_element(root, self)
    }
}

pub(crate) trait FromElement: Default {
    fn assign(&mut self, child: &Element, mapper: Mapper);

    fn from_element(element: &Element, mapper: Mapper) -> Self {
        let mut record = Self::default();
        for child in &element.children {
            record.assign(child, mapper);
        }
        record
    }
}

impl FromElement for Project {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "modelVersion" => self.model_version = m.scalar(child),
            "groupId" => self.group_id = m.scalar(child),
            "artifactId" => self.artifact_id = m.scalar(child),
            "version" => self.version = m.scalar(child),
            "packaging" => self.packaging = m.scalar(child),
            "name" => self.name = m.scalar(child),
            "description" => self.description = m.scalar(child),
            "url" => self.url = m.scalar(child),
            "parent" => self.parent = m.record(child),
            "modules" => self.modules.extend(m.strings(child, "module")),
            "repositories" => m.collect(child, "repository", &mut self.repositories),
            "pluginRepositories" => {
                m.collect(child, "pluginRepository", &mut self.plugin_repositories);
            }
            "properties" => m.properties(child, &mut self.properties),
            "dependencyManagement" => self.dependency_management = m.record(child),
            "dependencies" => m.collect(child, "dependency", &mut self.dependencies),
            "profiles" => m.collect(child, "profile", &mut self.profiles),
            "build" => self.build = m.record(child),
            _ => {}
        }
    }
}

impl FromElement for Parent {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "groupId" => self.group_id = m.scalar(child),
            "artifactId" => self.artifact_id = m.scalar(child),
            "version" => self.version = m.scalar(child),
            "relativePath" => self.relative_path = m.scalar(child),
            _ => {}
        }
    }
}

impl FromElement for Dependency {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "groupId" => self.group_id = m.scalar(child),
            "artifactId" => self.artifact_id = m.scalar(child),
            "version" => self.version = m.scalar(child),
            "scope" => self.scope = m.scalar(child),
            "type" => self.type_ = m.scalar(child),
            "classifier" => self.classifier = m.scalar(child),
            "optional" => self.optional = m.scalar(child),
            "exclusions" => m.collect(child, "exclusion", &mut self.exclusions),
            _ => {}
        }
    }
}

impl FromElement for Exclusion {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "groupId" => self.group_id = m.scalar(child),
            "artifactId" => self.artifact_id = m.scalar(child),
            _ => {}
        }
    }
}

impl FromElement for Repository {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "id" => self.id = m.scalar(child),
            "name" => self.name = m.scalar(child),
            "url" => self.url = m.scalar(child),
            "layout" => self.layout = m.scalar(child),
            _ => {}
        }
    }
}

impl FromElement for PluginRepository {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "id" => self.id = m.scalar(child),
            "name" => self.name = m.scalar(child),
            "url" => self.url = m.scalar(child),
            "layout" => self.layout = m.scalar(child),
            _ => {}
        }
    }
}

impl FromElement for DependencyManagement {
    fn assign(&mut self, child: &Element, m: Mapper) {
        if child.name == "dependencies" {
            m.collect(child, "dependency", &mut self.dependencies);
        }
    }
}

impl FromElement for Profile {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "id" => self.id = m.scalar(child),
            "modules" => self.modules.extend(m.strings(child, "module")),
            "properties" => m.properties(child, &mut self.properties),
            "dependencyManagement" => self.dependency_management = m.record(child),
            "dependencies" => m.collect(child, "dependency", &mut self.dependencies),
            "build" => self.build = m.record(child),
            _ => {}
        }
    }
}

impl FromElement for Build {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "finalName" => self.final_name = m.scalar(child),
            "defaultGoal" => self.default_goal = m.scalar(child),
            "directory" => self.directory = m.scalar(child),
            "plugins" => m.collect(child, "plugin", &mut self.plugins),
            "pluginManagement" => self.plugin_management = m.record(child),
            _ => {}
        }
    }
}

impl FromElement for PluginManagement {
    fn assign(&mut self, child: &Element, m: Mapper) {
        if child.name == "plugins" {
            m.collect(child, "plugin", &mut self.plugins);
        }
    }
}

impl FromElement for Plugin {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "groupId" => self.group_id = m.scalar(child),
            "artifactId" => self.artifact_id = m.scalar(child),
            "version" => self.version = m.scalar(child),
            "inherited" => self.inherited = m.scalar(child),
            "extensions" => self.extensions = m.scalar(child),
            "executions" => m.collect(child, "execution", &mut self.executions),
            "dependencies" => m.collect(child, "dependency", &mut self.dependencies),
            "configuration" => self.configuration = Some(child.clone()),
            _ => {}
        }
    }
}

impl FromElement for Execution {
    fn assign(&mut self, child: &Element, m: Mapper) {
        match child.name.as_str() {
            "id" => self.id = m.scalar(child),
            "phase" => self.phase = m.scalar(child),
            "inherited" => self.inherited = m.scalar(child),
            "goals" => self.goals.extend(m.strings(child, "goal")),
            "configuration" => self.configuration = Some(child.clone()),
            _ => {}
        }
    }
}
