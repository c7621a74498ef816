use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["output"], "ukrainian_texts.csv");
    assert_eq!(parsed["extensions"], serde_json::json!([".html", ".ts"]));
    assert_eq!(parsed["fixHomoglyphs"], true);
    assert!(
        parsed.get("ignoreDirs").is_some(),
        "Config should have 'ignoreDirs' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \""), "Config should be pretty-printed");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ✓ Created .ukrscanrc.json

            ----- stderr -----
        "#);
    });

    assert!(test.root().join(".ukrscanrc.json").exists());

    let content = test.read_file(".ukrscanrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".ukrscanrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: false
            exit_code: 1
            ----- stdout -----

            ----- stderr -----
            Error: .ukrscanrc.json already exists
        "#);
    });

    assert_eq!(test.read_file(".ukrscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    test.write_file("src/app/app.component.html", "<h1>Ласкаво просимо</h1>\n")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.scan_command(), @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Ласкаво просимо"  html_text
              --> ./src/app/app.component.html:1:5
              |
            1 | <h1>Ласкаво просимо</h1>
              |     ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 1 source file)
            ✓ Saved 1 record to ukrainian_texts.csv

            ----- stderr -----
        "#);
    });
    assert!(test.root().join("ukrainian_texts.csv").exists());

    Ok(())
}
