use std::fmt::{self, Write};

use super::{EmitOptions, GENERATED_MARKER, GeneratedFile, NAMESPACE_FILE_NAME, TypeLayout};

/// Render the namespace module declaring every shard of every type.
///
/// `layouts` must be in output order; types without shards are left out.
pub fn emit_namespace(layouts: &[TypeLayout], options: &EmitOptions) -> GeneratedFile {
    let mut content = String::new();
    let _ = write_namespace(&mut content, layouts, options);
    GeneratedFile {
        name: NAMESPACE_FILE_NAME.to_string(),
        content,
    }
}

fn write_namespace(out: &mut String, layouts: &[TypeLayout], options: &EmitOptions) -> fmt::Result {
    let layouts: Vec<&TypeLayout> = layouts
        .iter()
        .filter(|layout| !layout.shard_modules.is_empty())
        .collect();

    writeln!(out, "{}", GENERATED_MARKER)?;
    writeln!(out, "#![allow(dead_code, unused_imports)]")?;
    if layouts.is_empty() {
        return Ok(());
    }

    let vis = options.visibility.keyword();

    writeln!(out)?;
    writeln!(out, "use std::collections::BTreeMap;")?;
    writeln!(out)?;
    writeln!(out, "use {}::ResourceDescriptor;", options.runtime_path)?;
    writeln!(out)?;
    for layout in &layouts {
        for module in &layout.shard_modules {
            writeln!(out, "mod {};", module)?;
        }
    }

    for layout in &layouts {
        let ty = layout.resource_type.as_str();
        let module = layout.resource_type.module_name();

        writeln!(out)?;
        writeln!(out, "/// Accessors for every `{}` resource.", ty)?;
        writeln!(out, "{} mod {} {{", vis, module)?;
        for module in &layout.shard_modules {
            writeln!(out, "    pub use super::{}::accessors::*;", module)?;
        }
        writeln!(out, "}}")?;

        writeln!(out)?;
        writeln!(out, "/// Look up a `{}` resource by identifier.", ty)?;
        writeln!(
            out,
            "{} fn find_{}(id: &str) -> Option<&'static ResourceDescriptor> {{",
            vis, module
        )?;
        for (i, module) in layout.shard_modules.iter().enumerate() {
            if i == 0 {
                writeln!(out, "    {}::find(id)", module)?;
            } else {
                writeln!(out, "        .or_else(|| {}::find(id))", module)?;
            }
        }
        writeln!(out, "}}")?;

        writeln!(out)?;
        writeln!(out, "/// Every `{}` resource keyed by identifier.", ty)?;
        writeln!(
            out,
            "{} fn all_{}_resources() -> BTreeMap<&'static str, &'static ResourceDescriptor> {{",
            vis, module
        )?;
        writeln!(out, "    let mut map = BTreeMap::new();")?;
        for module in &layout.shard_modules {
            writeln!(out, "    {}::collect(&mut map);", module)?;
        }
        writeln!(out, "    map")?;
        writeln!(out, "}}")?;
    }

    Ok(())
}
