use std::{
    collections::BTreeSet,
    fmt::{self, Write},
};

use super::{EmitOptions, GENERATED_MARKER, GeneratedFile};
use crate::core::{
    allocator::ResourceEntry, collector::QualifiedResourceItem, partitioner::Shard,
    qualifier::Qualifier,
};

/// Render the module file of one shard.
pub fn emit_shard(shard: &Shard, options: &EmitOptions) -> GeneratedFile {
    let mut content = String::new();
    let _ = write_shard(&mut content, shard, options);
    GeneratedFile {
        name: shard.file_name(),
        content,
    }
}

fn write_shard(out: &mut String, shard: &Shard, options: &EmitOptions) -> fmt::Result {
    writeln!(out, "{}", GENERATED_MARKER)?;
    writeln!(
        out,
        "#![allow(dead_code, non_snake_case, non_upper_case_globals)]"
    )?;
    writeln!(out)?;
    writeln!(out, "use std::collections::BTreeMap;")?;
    writeln!(out)?;
    writeln!(
        out,
        "use {}::{{{}}};",
        options.runtime_path,
        runtime_imports(&shard.entries).join(", ")
    )?;
    writeln!(out)?;

    // Container: one static descriptor per entry.
    writeln!(out, "mod container {{")?;
    writeln!(out, "    use super::*;")?;
    for entry in &shard.entries {
        writeln!(out)?;
        write_descriptor(out, shard, entry, options)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    // Accessors: forwarding reads, re-exported by the namespace module.
    writeln!(out, "pub mod accessors {{")?;
    writeln!(out, "    use super::{{ResourceDescriptor, container}};")?;
    for entry in &shard.entries {
        writeln!(out)?;
        writeln!(
            out,
            "    pub fn {}() -> &'static ResourceDescriptor {{",
            entry.identifier
        )?;
        writeln!(out, "        &container::{}", entry.identifier)?;
        writeln!(out, "    }}")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub(super) fn find(id: &str) -> Option<&'static ResourceDescriptor> {{"
    )?;
    writeln!(out, "    match id {{")?;
    for entry in &shard.entries {
        writeln!(
            out,
            "        {:?} => Some(&container::{}),",
            entry.identifier.as_str(),
            entry.identifier
        )?;
    }
    writeln!(out, "        _ => None,")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub(super) fn collect(map: &mut BTreeMap<&'static str, &'static ResourceDescriptor>) {{"
    )?;
    for entry in &shard.entries {
        writeln!(
            out,
            "    map.insert({:?}, &container::{});",
            entry.identifier.as_str(),
            entry.identifier
        )?;
    }
    writeln!(out, "}}")
}

fn write_descriptor(
    out: &mut String,
    shard: &Shard,
    entry: &ResourceEntry,
    options: &EmitOptions,
) -> fmt::Result {
    writeln!(
        out,
        "    pub(super) static {}: ResourceDescriptor = ResourceDescriptor::new(",
        entry.identifier
    )?;
    writeln!(
        out,
        "        ResourceType::{},",
        shard.resource_type.variant_name()
    )?;
    writeln!(out, "        {:?},", entry.uri)?;
    writeln!(out, "        &[")?;
    for item in &entry.items {
        let path = format!("{}{}", options.path_prefix, item.path);
        writeln!(
            out,
            "            ResourceItem::new(&[{}], {:?}),",
            render_qualifiers(item),
            path
        )?;
    }
    writeln!(out, "        ],")?;
    writeln!(out, "    );")
}

fn render_qualifiers(item: &QualifiedResourceItem) -> String {
    item.qualifiers
        .iter()
        .map(|qualifier| match qualifier {
            Qualifier::Language(code) => format!("Qualifier::Language({:?})", code),
            Qualifier::Region(code) => format!("Qualifier::Region({:?})", code),
            Qualifier::Theme(theme) => format!("Qualifier::Theme(Theme::{})", theme.variant_name()),
            Qualifier::Density(density) => {
                format!("Qualifier::Density(Density::{})", density.variant_name())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runtime names the shard refers to, sorted.
fn runtime_imports(entries: &[ResourceEntry]) -> Vec<&'static str> {
    let mut imports = BTreeSet::from(["ResourceDescriptor", "ResourceItem", "ResourceType"]);
    for qualifier in entries
        .iter()
        .flat_map(|entry| &entry.items)
        .flat_map(|item| item.qualifiers.iter())
    {
        imports.insert("Qualifier");
        if let Qualifier::Theme(_) = qualifier {
            imports.insert("Theme");
        }
        if let Qualifier::Density(_) = qualifier {
            imports.insert("Density");
        }
    }
    imports.into_iter().collect()
}
