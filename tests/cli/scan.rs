use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_title_and_interpolation() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/app.component.html",
        r#"<span title="Вітаємо">Привіт, {{name}}</span>
"#,
    )?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.scan_command(), @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Привіт,"  interpolation_adjacent
              --> ./src/app/app.component.html:1:23
              |
            1 | <span title="Вітаємо">Привіт, {{name}}</span>
              |                       ^
              = source: title

            ukr: "Вітаємо"  double_quotes
              --> ./src/app/app.component.html:1:14
              |
            1 | <span title="Вітаємо">Привіт, {{name}}</span>
              |              ^
              = source: title

            ✘ Found 2 texts in 1 file (scanned 1 source file)
            ✓ Saved 2 records to ukrainian_texts.csv

            ----- stderr -----
        "#);
    });

    let csv = test.read_file("ukrainian_texts.csv")?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "File,Line,Text,Pattern,Source,Mixed,Full Line");
    assert!(lines[1].contains(",1,\"Привіт,\",interpolation_adjacent,title,false,"));
    assert!(lines[2].contains(",1,Вітаємо,double_quotes,title,false,"));

    Ok(())
}

#[test]
fn test_no_text_found() -> Result<()> {
    let test = CliTest::with_file("src/app/app.component.html", "<h1>Welcome</h1>\n")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.scan_command(), @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ✓ Scanned 1 source file - no Ukrainian text found
            ✓ Saved 0 records to ukrainian_texts.csv

            ----- stderr -----
        "#);
    });

    assert_eq!(
        test.read_file("ukrainian_texts.csv")?,
        "File,Line,Text,Pattern,Source,Mixed,Full Line\n"
    );

    Ok(())
}

#[test]
fn test_fail_on_found() -> Result<()> {
    let test = CliTest::with_file("src/app/app.component.html", "<p>Текст</p>\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--fail-on-found", "--no-export"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: false
            exit_code: 1
            ----- stdout -----
            ukr: "Текст"  html_text
              --> ./src/app/app.component.html:1:4
              |
            1 | <p>Текст</p>
              |    ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    let clean = CliTest::with_file("src/app/app.component.html", "<p>Text</p>\n")?;
    let result = run(clean.scan_command().arg("--fail-on-found"))?;
    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_quiet_prints_summary_only() -> Result<()> {
    let test = CliTest::with_file("src/app/app.component.html", "<p>Текст</p>\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--quiet", "--no-export"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    assert!(!test.root().join("ukrainian_texts.csv").exists());

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/search.component.html",
        r#"<input placeholder="Пошук товарів">
"#,
    )?;

    let result = run(test.scan_command().args(["--output", "out/texts.json"]))?;
    assert_eq!(result.code, Some(0));

    let json: Value = serde_json::from_str(&test.read_file("out/texts.json")?)?;
    assert_eq!(json[0]["text"], "Пошук товарів");
    assert_eq!(json[0]["pattern"], "double_quotes");
    assert_eq!(json[0]["source"], "placeholder");
    assert_eq!(json[0]["line"], 1);
    assert_eq!(json[0]["fullLine"], r#"<input placeholder="Пошук товарів">"#);

    Ok(())
}

#[test]
fn test_default_ignores() -> Result<()> {
    let test = CliTest::with_file("src/app/app.component.html", "<p>Залишити</p>\n")?;
    test.write_file("src/app/app.component.spec.ts", "const t = 'Тест';\n")?;
    test.write_file("node_modules/lib/index.ts", "const t = 'Бібліотека';\n")?;
    test.write_file("src/styles.css", "/* Стилі */\n")?;

    let mut cmd = test.scan_command();
    cmd.arg("--no-export");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Залишити"  html_text
              --> ./src/app/app.component.html:1:4
              |
            1 | <p>Залишити</p>
              |    ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_config_overrides() -> Result<()> {
    let test = CliTest::with_file(
        ".ukrscanrc.json",
        r#"{
  "ignoreDirs": ["legacy"],
  "ignoreTexts": ["Гаразд"],
  "output": "reports/texts.tsv"
}"#,
    )?;
    test.write_file("src/app/old/legacy/page.html", "<p>Старе</p>\n")?;
    test.write_file(
        "src/app/dialog.component.html",
        "<button>Гаразд</button>\n<button>Скасувати</button>\n",
    )?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.scan_command(), @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Скасувати"  html_text
              --> ./src/app/dialog.component.html:2:9
              |
            2 | <button>Скасувати</button>
              |         ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 1 source file)
            ✓ Saved 1 record to reports/texts.tsv

            ----- stderr -----
        "#);
    });

    let tsv = test.read_file("reports/texts.tsv")?;
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\t2\tСкасувати\thtml_text\tinnerText\tfalse\t"));

    Ok(())
}

#[test]
fn test_technical_and_comment_lines_are_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/app.component.ts",
        r#"import { Component } from '@angular/core'; // Компонент
// Службовий коментар
@Component({ selector: 'app-root' })
export class AppComponent {
  enabled = true; // увімкнено
  title = 'Головна сторінка'; // заголовок
}
"#,
    )?;

    let mut cmd = test.scan_command();
    cmd.arg("--no-export");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Головна сторінка"  single_quotes
              --> ./src/app/app.component.ts:6:12
              |
            6 | title = 'Головна сторінка'; // заголовок
              |          ^
              = source: title

            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_block_comments_are_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/user.service.ts",
        r#"/**
 * Сервіс для роботи з користувачами
 */
/* Тимчасово вимкнено */ this.load();
"#,
    )?;
    test.write_file(
        "src/app/menu.component.html",
        "<!--\n  Старий блок меню\n-->\n<nav></nav>\n",
    )?;

    let result = run(test.scan_command().arg("--no-export"))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "✓ Scanned 2 source files - no Ukrainian text found\n"
    );

    Ok(())
}

#[test]
fn test_html_entities_are_decoded() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/app.component.html",
        "<p>Текст&nbsp;тут</p>\n",
    )?;

    let result = run(test.scan_command().args(["--output", "texts.json"]))?;
    assert_eq!(result.code, Some(0));

    let json: Value = serde_json::from_str(&test.read_file("texts.json")?)?;
    assert_eq!(json[0]["text"], "Текст тут");
    assert_eq!(json[0]["pattern"], "html_text");

    Ok(())
}

#[test]
fn test_homoglyph_fix_flag() -> Result<()> {
    let test = CliTest::with_file("src/app/app.component.html", "<p>Привiт World</p>\n")?;

    let mut fixed = test.scan_command();
    fixed.arg("--no-export");
    test.settings().bind(|| {
        assert_cmd_snapshot!(fixed, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Привіт World"  html_text
              --> ./src/app/app.component.html:1:4
              |
            1 | <p>Привiт World</p>
              |    ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    let mut raw = test.scan_command();
    raw.args(["--no-export", "--no-homoglyph-fix"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(raw, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Привiт World"  html_text
              --> ./src/app/app.component.html:1:4
              |
            1 | <p>Привiт World</p>
              |    ^
              = source: innerText
              = note: word mixes Latin and Cyrillic letters

            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_unreadable_file_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("src/app/good.html", "<p>Добре</p>\n")?;
    test.write_file("src/app/bad.html", [0xffu8, 0xfe, 0x41])?;

    let mut cmd = test.scan_command();
    cmd.arg("--no-export");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Добре"  html_text
              --> ./src/app/good.html:1:4
              |
            1 | <p>Добре</p>
              |    ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 2 source files)

            ----- stderr -----
            warning: 1 file(s) could not be read (use -v for details)
        "#);
    });

    Ok(())
}

#[test]
fn test_unreadable_file_verbose() -> Result<()> {
    let test = CliTest::with_file("src/app/good.html", "<p>Добре</p>\n")?;
    test.write_file("src/app/bad.html", [0xffu8, 0xfe, 0x41])?;

    let mut cmd = test.scan_command();
    cmd.args(["--no-export", "-v"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Добре"  html_text
              --> ./src/app/good.html:1:4
              |
            1 | <p>Добре</p>
              |    ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 2 source files)

            ----- stderr -----
            Note: No .ukrscanrc.json found, using default configuration
            warning: Failed to read ./src/app/bad.html: stream did not contain valid UTF-8
        "#);
    });

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".ukrscanrc.json", "{ not json")?;

    let result = run(&mut test.scan_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/src/index.html", "<title>Магазин</title>\n")?;
    test.write_file("other/index.html", "<p>Інше</p>\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--source-root", "web", "--no-export"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
            success: true
            exit_code: 0
            ----- stdout -----
            ukr: "Магазин"  html_text
              --> web/src/index.html:1:8
              |
            1 | <title>Магазин</title>
              |        ^
              = source: innerText

            ✘ Found 1 text in 1 file (scanned 1 source file)

            ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("scan"));
    assert!(result.stdout.contains("init"));

    Ok(())
}
