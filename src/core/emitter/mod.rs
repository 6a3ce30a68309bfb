//! Rust source emission for sharded resource accessors.
//!
//! Each shard becomes one module file holding the descriptors in private
//! statics and an `accessors` submodule forwarding to them. A namespace file
//! (`mod.rs`) declares the shards and re-exports all accessors of a type under
//! one module per type, plus lookup helpers.
//!
//! Output is a pure function of its input: same shards, same bytes.

mod namespace;
mod shard;

pub use namespace::emit_namespace;
pub use shard::emit_shard;

use crate::runtime::ResourceType;

/// First line of every generated file. The writer only ever deletes files
/// starting with this line.
pub const GENERATED_MARKER: &str = "// @generated by resgen. Do not edit.";

/// File name of the namespace module.
pub const NAMESPACE_FILE_NAME: &str = "mod.rs";

/// Visibility of the namespace items in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Crate,
    Public,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Crate => "pub(crate)",
            Visibility::Public => "pub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub visibility: Visibility,
    /// Path of the runtime module in generated code, e.g. `::resgen::runtime`.
    pub runtime_path: String,
    /// Prepended to every emitted resource path.
    pub path_prefix: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            visibility: Visibility::default(),
            runtime_path: "::resgen::runtime".to_string(),
            path_prefix: String::new(),
        }
    }
}

/// Shard modules of one resource type, in shard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLayout {
    pub resource_type: ResourceType,
    pub shard_modules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}
