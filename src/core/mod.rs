//! Core generation pipeline.
//!
//! Collect → Allocate → Partition → Emit:
//!
//! 1. **Collect**: group enumerated files and value-table declarations into
//!    logical resources per type
//! 2. **Allocate**: derive a unique identifier for every resource
//! 3. **Partition**: chunk each type's sorted entries into shards
//! 4. **Emit**: render shard modules and the namespace module
//!
//! Scanning the resource root and writing the output live next to the pipeline
//! (`scanner`, `writer`) so the pipeline itself stays free of I/O.

use std::num::NonZeroUsize;

use rayon::prelude::*;

pub mod allocator;
pub mod collector;
pub mod emitter;
pub mod partitioner;
pub mod qualifier;
pub mod scanner;
pub mod values;
pub mod writer;

use crate::{
    core::{
        allocator::allocate_identifiers,
        collector::{ResourceGroups, SkippedFile, ValueTables, collect_resources},
        emitter::{EmitOptions, GeneratedFile, TypeLayout, emit_namespace, emit_shard},
        partitioner::partition,
    },
    error::GenerateError,
    runtime::ResourceType,
};

/// Default shard size ceiling.
pub const DEFAULT_MAX_PER_CONTAINER: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub max_per_container: NonZeroUsize,
    pub emit: EmitOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_per_container: DEFAULT_MAX_PER_CONTAINER,
            emit: EmitOptions::default(),
        }
    }
}

/// Per-type figures of one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSummary {
    pub resource_type: ResourceType,
    pub resource_count: usize,
    pub shard_count: usize,
}

/// Output of one generation pass.
#[derive(Debug)]
pub struct Generation {
    /// Shard files in type order, then the namespace file.
    pub files: Vec<GeneratedFile>,
    /// One summary per type that has resources, in type order.
    pub types: Vec<TypeSummary>,
    /// Files that took no part in accessor generation.
    pub skipped: Vec<SkippedFile>,
}

impl Generation {
    pub fn resource_count(&self) -> usize {
        self.types.iter().map(|t| t.resource_count).sum()
    }

    pub fn shard_count(&self) -> usize {
        self.types.iter().map(|t| t.shard_count).sum()
    }
}

struct TypeOutput {
    summary: TypeSummary,
    layout: TypeLayout,
    files: Vec<GeneratedFile>,
}

/// Run the whole pipeline over root-relative resource paths.
///
/// `values` holds the content of every value table among `files` (see
/// [`collector::is_value_table`]). Nothing is returned on error: one bad
/// resource aborts the pass so that no partial output can replace a previous
/// good one.
pub fn generate<S: AsRef<str>>(
    files: &[S],
    values: &ValueTables,
    options: &GenerateOptions,
) -> Result<Generation, GenerateError> {
    let collected = collect_resources(files, values)?;

    // Types are independent; results come back in `ResourceType` order.
    let outputs: Vec<Result<TypeOutput, GenerateError>> = collected
        .by_type
        .into_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(resource_type, groups)| generate_type(resource_type, groups, options))
        .collect();

    let mut generation = Generation {
        files: Vec::new(),
        types: Vec::new(),
        skipped: collected.skipped,
    };
    let mut layouts = Vec::new();

    for output in outputs {
        let output = output?;
        generation.files.extend(output.files);
        generation.types.push(output.summary);
        layouts.push(output.layout);
    }

    generation
        .files
        .push(emit_namespace(&layouts, &options.emit));

    Ok(generation)
}

fn generate_type(
    resource_type: ResourceType,
    groups: ResourceGroups,
    options: &GenerateOptions,
) -> Result<TypeOutput, GenerateError> {
    let entries = allocate_identifiers(resource_type, groups)?;
    let resource_count = entries.len();
    let shards = partition(resource_type, entries, options.max_per_container);

    let files = shards
        .iter()
        .map(|shard| emit_shard(shard, &options.emit))
        .collect();
    let layout = TypeLayout {
        resource_type,
        shard_modules: shards.iter().map(|shard| shard.module_name()).collect(),
    };

    Ok(TypeOutput {
        summary: TypeSummary {
            resource_type,
            resource_count,
            shard_count: shards.len(),
        },
        layout,
        files,
    })
}
