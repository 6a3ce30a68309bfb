use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_check_reports_types_without_writing() -> Result<()> {
    let test = CliTest::with_resources(&[
        "drawable/icon.xml",
        "drawable-dark/icon.xml",
        "drawable/logo.png",
        "font/Inter.ttf",
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      drawable   2 resources in 1 shard
      font       1 resource in 1 shard
    ✓ Checked 3 resources - no issues found

    ----- stderr -----
    ");
    assert!(!test.root().join("src").exists());

    Ok(())
}

#[test]
fn test_check_respects_max_per_container() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/a.xml", "drawable/b.xml", "drawable/c.xml"])?;

    assert_cmd_snapshot!(test.check_command().args(["--max-per-container", "1"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      drawable   3 resources in 3 shards
    ✓ Checked 3 resources - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_reports_duplicate_resources() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml", "drawable/icon.png"])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Duplicate drawable resource 'icon': 'drawable/icon.png' and 'drawable/icon.xml' resolve to the same qualifiers.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_check_rejects_unknown_type() -> Result<()> {
    let test = CliTest::with_resources(&["image/a.png"])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Unknown resource type: 'image'.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_check_rejects_string_directory() -> Result<()> {
    let test = CliTest::with_resources(&["string-us/a.xml"])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Forbidden directory name 'string-us'! String resources should be declared in 'values/strings.xml'.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_check_rejects_qualified_files_directory() -> Result<()> {
    let test = CliTest::with_resources(&["files-de/a.bin"])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: The 'files' directory doesn't support qualifiers: 'files-de'.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_check_rejects_region_before_language() -> Result<()> {
    let test = CliTest::with_resources(&["drawable-rUS-en/a.xml"])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: The 'drawable-rUS-en' directory is invalid. Region qualifier must be declared after language: 'en-rUS'.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_check_reports_excluded_files() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/a.xml", "drawable/a.psd"])?;
    test.write_file(".resgenrc.json", r#"{ "ignores": ["**/*.psd"] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      drawable   1 resource in 1 shard
    ✓ Checked 1 resource - no issues found

    ----- stderr -----
    note: 1 file(s) excluded by 'ignores' patterns (use -v for details)
    ");

    assert_cmd_snapshot!(test.check_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      drawable   1 resource in 1 shard
    ✓ Checked 1 resource - no issues found

    ----- stderr -----
    note: Ignoring drawable/a.psd
    note: 1 file(s) excluded by 'ignores' patterns
    ");

    Ok(())
}

#[test]
fn test_check_value_tables() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "resources/values/strings.xml",
        r#"<resources>
    <string name="title">Title</string>
    <string-array name="planets"><item>Mercury</item></string-array>
    <plurals name="apples"><item quantity="other">apples</item></plurals>
</resources>"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      string     1 resource in 1 shard
      string-array 1 resource in 1 shard
      plurals    1 resource in 1 shard
    ✓ Checked 3 resources - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_rejects_file_type_in_value_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "resources/values/test.xml",
        r#"<resources>
    <drawable name="v">aaa</drawable>
</resources>"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: values/test.xml is not valid. Unknown string resource type: 'drawable'.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}

#[test]
fn test_check_rejects_unnamed_value() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "resources/values/test.xml",
        r#"<resources>
    <string name="v1">aaa</string>
    <string foo="v2">aaa</string>
</resources>"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: values/test.xml is not valid. Attribute 'name' not found.

    ✘ Generation aborted, no files were written
    ");

    Ok(())
}
