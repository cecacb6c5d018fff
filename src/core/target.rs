//! Target definitions - the compilable units of a package.
//!
//! Targets are decoded from `swift package describe` and never mutated
//! afterwards. Building one asks `swift build` to do the work.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::SpmError;
use crate::toolchain::{StderrMode, SwiftToolchain, SwiftVersion, ENABLE_TEST_DISCOVERY_FLAG};

/// How SwiftPM compiles a target (the `module_type` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleType {
    /// Swift sources compiled by `swiftc`.
    SwiftTarget,
    /// C-family sources compiled by `clang`.
    ClangTarget,
    /// Prebuilt artifact such as an XCFramework.
    BinaryTarget,
    /// Module map wrapping a system library.
    SystemLibraryTarget,
    /// Build tool or command plugin.
    PluginTarget,
    /// Anything this version of spmkit does not know about.
    Other(String),
}

impl ModuleType {
    pub fn as_str(&self) -> &str {
        match self {
            ModuleType::SwiftTarget => "SwiftTarget",
            ModuleType::ClangTarget => "ClangTarget",
            ModuleType::BinaryTarget => "BinaryTarget",
            ModuleType::SystemLibraryTarget => "SystemLibraryTarget",
            ModuleType::PluginTarget => "PluginTarget",
            ModuleType::Other(s) => s,
        }
    }

    /// Check if the target is compiled from Swift sources.
    pub fn is_swift(&self) -> bool {
        matches!(self, ModuleType::SwiftTarget)
    }
}

impl From<String> for ModuleType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "SwiftTarget" => ModuleType::SwiftTarget,
            "ClangTarget" => ModuleType::ClangTarget,
            "BinaryTarget" => ModuleType::BinaryTarget,
            "SystemLibraryTarget" => ModuleType::SystemLibraryTarget,
            "PluginTarget" => ModuleType::PluginTarget,
            _ => ModuleType::Other(s),
        }
    }
}

impl From<ModuleType> for String {
    fn from(t: ModuleType) -> Self {
        match t {
            ModuleType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a target produces (the `type` field). Older toolchains omit it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetType {
    Library,
    Executable,
    Test,
    Macro,
    Plugin,
    Snippet,
    System,
    Binary,
    Other(String),
}

impl TargetType {
    pub fn as_str(&self) -> &str {
        match self {
            TargetType::Library => "library",
            TargetType::Executable => "executable",
            TargetType::Test => "test",
            TargetType::Macro => "macro",
            TargetType::Plugin => "plugin",
            TargetType::Snippet => "snippet",
            TargetType::System => "system-target",
            TargetType::Binary => "binary",
            TargetType::Other(s) => s,
        }
    }
}

impl From<String> for TargetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "library" => TargetType::Library,
            "executable" => TargetType::Executable,
            "test" => TargetType::Test,
            "macro" => TargetType::Macro,
            "plugin" => TargetType::Plugin,
            "snippet" => TargetType::Snippet,
            "system-target" | "system" => TargetType::System,
            "binary" => TargetType::Binary,
            _ => TargetType::Other(s),
        }
    }
}

impl From<TargetType> for String {
    fn from(t: TargetType) -> Self {
        match t {
            TargetType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target as reported by `swift package describe`.
///
/// Identity is the target name alone: two targets with the same name are
/// equal and hash alike even if their sources differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Target {
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    c99name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<TargetType>,

    module_type: ModuleType,

    /// Directory the sources are relative to
    path: PathBuf,

    sources: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    product_memberships: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    target_dependencies: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    product_dependencies: Vec<String>,
}

impl Target {
    /// Create a target with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        sources: Vec<String>,
        module_type: ModuleType,
    ) -> Self {
        Target {
            name: name.into(),
            c99name: None,
            kind: None,
            module_type,
            path: path.into(),
            sources,
            product_memberships: Vec::new(),
            target_dependencies: Vec::new(),
            product_dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The C99-safe module name, when the toolchain reports one.
    pub fn c99name(&self) -> Option<&str> {
        self.c99name.as_deref()
    }

    pub fn kind(&self) -> Option<&TargetType> {
        self.kind.as_ref()
    }

    pub fn module_type(&self) -> &ModuleType {
        &self.module_type
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source files, relative to [`Target::path`].
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Products this target is part of.
    pub fn product_memberships(&self) -> &[String] {
        &self.product_memberships
    }

    /// Other targets of the same package this target depends on.
    pub fn target_dependencies(&self) -> &[String] {
        &self.target_dependencies
    }

    /// Products from package dependencies this target depends on.
    pub fn product_dependencies(&self) -> &[String] {
        &self.product_dependencies
    }

    pub fn is_test(&self) -> bool {
        matches!(self.kind, Some(TargetType::Test))
    }

    /// Each source resolved against the target directory, in source order.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.sources.iter().map(|s| self.path.join(s)).collect()
    }

    /// Arguments for `swift build` of this target.
    ///
    /// `additional` goes after the target selection. Toolchains older than
    /// 5.4 also get `--enable-test-discovery` at the very end.
    pub fn build_arguments(&self, version: &SwiftVersion, additional: &[String]) -> Vec<String> {
        let mut args = vec![
            "build".to_string(),
            "--target".to_string(),
            self.name.clone(),
        ];
        args.extend(additional.iter().cloned());

        if version.needs_test_discovery_flag() {
            args.push(ENABLE_TEST_DISCOVERY_FLAG.to_string());
        }

        args
    }

    /// Build this target with `swift build`.
    ///
    /// Compiler diagnostics on stderr go straight to the terminal.
    pub fn build(&self, toolchain: &SwiftToolchain, additional: &[String]) -> Result<(), SpmError> {
        let args = self.build_arguments(toolchain.version(), additional);
        tracing::debug!("Building target `{}`", self.name);

        let stdout = toolchain
            .run(&args, StderrMode::Inherit)
            .map_err(|source| SpmError::Build {
                target: self.name.clone(),
                source,
            })?;

        for line in String::from_utf8_lossy(&stdout).lines() {
            tracing::debug!("{}", line);
        }

        Ok(())
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Target {}

impl Hash for Target {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
