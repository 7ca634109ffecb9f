//! Typed mapping of Maven pom.xml documents.
//!
//! A POM is read into a plain record tree ([`Project`] and its children).
//! Nothing is resolved: parents stay coordinates, `${...}` expressions stay
//! literal and profiles are never activated.
//!
//! ```
//! let project = pom_schema::decode_str(
//!     "<project><groupId>com.example</groupId><artifactId>app</artifactId></project>",
//! )
//! .unwrap();
//! assert_eq!(project.artifact_id.as_deref(), Some("app"));
//! assert!(project.dependencies.is_empty());
//! ```

pub mod decoder;
pub mod error;
mod schema;
pub mod types;
pub mod version;
pub mod xml;

pub use decoder::{DecodeOptions, PomDecoder, decode, decode_reader, decode_str};
pub use error::{PomError, Result};
pub use types::{
    Build, Coordinate, Dependency, DependencyManagement, Exclusion, Execution, Parent, Plugin,
    PluginManagement, PluginRepository, Profile, Project, Repository, Scope,
};
pub use xml::Element;
