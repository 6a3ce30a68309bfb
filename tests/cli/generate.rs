use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const OUTPUT_DIR: &str = "src/generated/res";

fn icons() -> Result<CliTest> {
    CliTest::with_resources(&[
        "drawable/icon_2125.xml",
        "drawable/icon_21250.xml",
        "drawable/icon_21247.xml",
    ])
}

#[test]
fn test_generate_writes_shards_and_namespace() -> Result<()> {
    let test = icons()?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command().args(["--max-per-container", "2"]), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 3 resources in 2 shards into [PROJECT]/src/generated/res
          3 written, 0 unchanged, 0 removed

        ----- stderr -----
        ");
    });

    assert_eq!(
        test.list_dir(OUTPUT_DIR)?,
        vec!["drawable0.rs", "drawable1.rs", "mod.rs"]
    );

    let shard0 = test.read_file(&format!("{}/drawable0.rs", OUTPUT_DIR))?;
    let shard1 = test.read_file(&format!("{}/drawable1.rs", OUTPUT_DIR))?;
    assert!(shard0.starts_with("// @generated by resgen. Do not edit.\n"));
    assert!(shard0.contains("static icon_21247: ResourceDescriptor"));
    assert!(shard0.contains("static icon_2125: ResourceDescriptor"));
    assert!(shard1.contains("static icon_21250: ResourceDescriptor"));

    let namespace = test.read_file(&format!("{}/mod.rs", OUTPUT_DIR))?;
    assert!(namespace.contains("mod drawable0;\nmod drawable1;\n"));
    assert!(namespace.contains("pub(crate) mod drawable {"));

    Ok(())
}

#[test]
fn test_generate_twice_leaves_files_unchanged() -> Result<()> {
    let test = icons()?;

    test.generate_command().output()?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 3 resources in 1 shard into [PROJECT]/src/generated/res
          0 written, 2 unchanged, 0 removed

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_generate_removes_stale_shards_only() -> Result<()> {
    let test = icons()?;

    test.generate_command()
        .args(["--max-per-container", "1"])
        .output()?;
    assert_eq!(
        test.list_dir(OUTPUT_DIR)?,
        vec!["drawable0.rs", "drawable1.rs", "drawable2.rs", "mod.rs"]
    );
    test.write_file(&format!("{}/manual.rs", OUTPUT_DIR), "pub fn manual() {}\n")?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command().args(["--max-per-container", "2"]), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 3 resources in 2 shards into [PROJECT]/src/generated/res
          3 written, 0 unchanged, 1 removed

        ----- stderr -----
        ");
    });

    assert_eq!(
        test.list_dir(OUTPUT_DIR)?,
        vec!["drawable0.rs", "drawable1.rs", "manual.rs", "mod.rs"]
    );

    Ok(())
}

#[test]
fn test_generate_refuses_to_overwrite_hand_written_module() -> Result<()> {
    let test = icons()?;
    let hand_written = "// my hand-written module\npub mod extra;\n";
    test.write_file(&format!("{}/mod.rs", OUTPUT_DIR), hand_written)?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Refusing to overwrite '[PROJECT]/src/generated/res/mod.rs': the file was not generated by resgen.
        Hint: Move it out of the output directory or change 'outputDir'.
        ");
    });

    assert_eq!(
        test.read_file(&format!("{}/mod.rs", OUTPUT_DIR))?,
        hand_written
    );
    assert_eq!(test.list_dir(OUTPUT_DIR)?, vec!["mod.rs"]);

    Ok(())
}

#[test]
fn test_generate_rejects_unknown_qualifier() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/a.xml", "drawable-rent/a.xml"])?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: The 'drawable-rent' directory contains unknown qualifier: 'rent'.

    ✘ Generation aborted, no files were written
    ");
    assert!(!test.root().join(OUTPUT_DIR).exists());

    Ok(())
}

#[test]
fn test_failed_generation_keeps_previous_output() -> Result<()> {
    let test = icons()?;
    test.generate_command().output()?;
    let before = test.read_file(&format!("{}/drawable0.rs", OUTPUT_DIR))?;

    test.write_file("resources/drawable/icon-2125.png", "")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Ambiguous drawable resource names 'icon-2125' and 'icon_2125': both map to the identifier 'icon_2125'.

    ✘ Generation aborted, no files were written
    ");
    assert_eq!(
        test.read_file(&format!("{}/drawable0.rs", OUTPUT_DIR))?,
        before
    );

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".resgenrc.json",
        r#"{
  "resourcesRoot": "assets",
  "outputDir": "gen",
  "publicAccessors": true,
  "pathPrefix": "assets/"
}"#,
    )?;
    test.write_file("assets/font/Inter.ttf", "")?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 1 resource in 1 shard into [PROJECT]/gen
          2 written, 0 unchanged, 0 removed

        ----- stderr -----
        ");
    });

    let namespace = test.read_file("gen/mod.rs")?;
    assert!(namespace.contains("\npub mod font {"));
    assert!(namespace.contains("\npub fn find_font(id: &str)"));
    let shard = test.read_file("gen/font0.rs")?;
    assert!(shard.contains(r#"ResourceItem::new(&[], "assets/font/Inter.ttf"),"#));

    Ok(())
}

#[test]
fn test_generate_string_resources() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/a.xml", "files/data.bin"])?;
    test.write_file(
        "resources/values/strings.xml",
        r#"<resources>
    <string name="app_name">Demo</string>
    <string name="greeting">Hello</string>
</resources>"#,
    )?;
    test.write_file(
        "resources/values-de/strings.xml",
        r#"<resources><string name="app_name">Demo</string></resources>"#,
    )?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 3 resources in 2 shards into [PROJECT]/src/generated/res
          3 written, 0 unchanged, 0 removed

        ----- stderr -----
        ");
    });

    let shard = test.read_file(&format!("{}/string0.rs", OUTPUT_DIR))?;
    assert!(shard.contains(r#""string:app_name","#));
    assert!(shard.contains(
        r#"ResourceItem::new(&[Qualifier::Language("de")], "values-de/strings.xml"),"#
    ));

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command().arg("-v"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
          drawable   1 resource in 1 shard
          string     2 resources in 1 shard
        ✓ Generated 3 resources in 2 shards into [PROJECT]/src/generated/res
          0 written, 3 unchanged, 0 removed

        ----- stderr -----
        note: No .resgenrc.json found, using default configuration
        note: Skipping files/data.bin (raw file, no accessor)
        ");
    });

    Ok(())
}

#[test]
fn test_generate_rejects_invalid_value_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "resources/values/test.xml",
        r#"<resources>
    <string name="v1">aaa</string>
    <string name="v2">aaa</string>
    <string name="v3">aaa</string>
    <string name="v1">aaa</string>
</resources>"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: values/test.xml is not valid. Duplicated key 'v1'.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_generate_missing_resources_root() -> Result<()> {
    let test = CliTest::new()?;

    test.filters().bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Resources directory '[PROJECT]/resources' does not exist.
        Hint: Check your .resgenrc.json 'resourcesRoot' setting.
        ");
    });

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/a.xml"])?;
    test.write_file(".resgenrc.json", r#"{ "maxPerContainer": 0 }"#)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'maxPerContainer' must be at least 1
    ");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Generate typed Rust accessors for a resource directory, sharded into bounded modules

    Usage: resgen [COMMAND]

    Commands:
      generate  Generate accessor modules for every resource
      check     Validate resources and report what would be generated, without writing
      init      Initialize a new .resgenrc.json configuration file
      help      Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: resgen [COMMAND]"));

    Ok(())
}
