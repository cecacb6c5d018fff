//! Canned `swift package describe --type json` outputs.

/// A package with a library, an executable, a test target and a binary target.
pub const DESCRIBE_MIXED: &str = r#"{
  "dependencies" : [],
  "name" : "Periscope",
  "path" : "/work/Periscope",
  "platforms" : [],
  "products" : [
    {
      "name" : "periscope",
      "targets" : ["Frontend"],
      "type" : { "executable" : null }
    },
    {
      "name" : "PeriscopeKit",
      "targets" : ["PeriscopeKit"],
      "type" : { "library" : ["automatic"] }
    }
  ],
  "targets" : [
    {
      "c99name" : "PeriscopeKit",
      "module_type" : "SwiftTarget",
      "name" : "PeriscopeKit",
      "path" : "Sources/PeriscopeKit",
      "product_memberships" : ["periscope", "PeriscopeKit"],
      "sources" : ["Indexer.swift", "Graph/Node.swift"],
      "target_dependencies" : ["Shared"],
      "type" : "library"
    },
    {
      "c99name" : "Frontend",
      "module_type" : "SwiftTarget",
      "name" : "Frontend",
      "path" : "Sources/Frontend",
      "product_dependencies" : ["ArgumentParser"],
      "sources" : ["main.swift"],
      "type" : "executable"
    },
    {
      "c99name" : "LibIndexStore",
      "module_type" : "BinaryTarget",
      "name" : "LibIndexStore",
      "path" : "Frameworks/LibIndexStore.xcframework",
      "sources" : [],
      "type" : "binary"
    },
    {
      "c99name" : "PeriscopeKitTests",
      "module_type" : "SwiftTarget",
      "name" : "PeriscopeKitTests",
      "path" : "Tests/PeriscopeKitTests",
      "sources" : ["IndexerTests.swift"],
      "target_dependencies" : ["PeriscopeKit"],
      "type" : "test"
    }
  ],
  "tools_version" : "5.5"
}"#;

/// The fields older toolchains emit, and nothing more.
pub const DESCRIBE_MINIMAL: &str = r#"{
  "name" : "Tiny",
  "path" : "/work/Tiny",
  "targets" : [
    {
      "module_type" : "SwiftTarget",
      "name" : "Tiny",
      "path" : "Sources/Tiny",
      "sources" : ["Tiny.swift"]
    }
  ]
}"#;
