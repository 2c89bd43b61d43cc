use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout, support::StubService};

#[test]
fn test_reports_untranslated_comment() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет мир", "ru", 95.0)
        .translate("// Привет мир", "// Привіт світ")
        .start();
    let test = CliTest::with_file(
        "src/app.js",
        "// Привет мир\nconst greeting = \"hello\";\n",
    )?;

    let output = test.check_command(&service.url()).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: \"// Привет мир\"  untranslated (ru\u{2192}uk)"));
    assert!(out.contains("--> src/app.js:1"));
    assert!(out.contains("1 | // Привет мир"));
    assert!(out.contains("= suggestion: // Привіт світ"));
    assert!(out.contains("1 problem (1 untranslated in 1 file, 0 unsupported)"));
    assert_eq!(service.detect_calls(), 1);
    assert_eq!(service.translate_calls(), 1);

    Ok(())
}

#[test]
fn test_configured_language_pair_is_sent() -> Result<()> {
    let service = StubService::builder()
        .languages("ru", "en")
        .detect("// Привет мир", "ru", 95.0)
        .translate("// Привет мир", "// Hello world")
        .start();
    let test = CliTest::with_file("src/app.js", "// Привет мир\n")?;

    let output = test
        .check_command(&service.url())
        .args(["--target-lang", "en"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("untranslated (ru\u{2192}en)"));
    assert!(out.contains("= suggestion: // Hello world"));
    assert_eq!(service.translate_calls(), 1);

    Ok(())
}

#[test]
fn test_rejected_language_pair_gives_no_translation() -> Result<()> {
    let service = StubService::builder()
        .languages("ru", "en")
        .detect("// Привет мир", "ru", 95.0)
        .translate("// Привет мир", "// Hello world")
        .start();
    let test = CliTest::with_file("src/app.js", "// Привет мир\n")?;

    let output = test.check_command(&service.url()).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("= note: no translation available"));
    assert!(!out.contains("// Hello world"));
    assert_eq!(service.translate_calls(), 1);

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let service = StubService::builder().start();
    let test = CliTest::new()?;
    test.write_file("src/app.js", "// Hello world\nconst x = 'plain';\n")?;
    test.write_file("db/init.sql", "SELECT 'ok'; -- english only\n")?;

    let output = test.check_command(&service.url()).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 2 files - nothing untranslated found"));
    // Nothing Cyrillic, so the service is never asked.
    assert_eq!(service.detect_calls(), 0);

    Ok(())
}

#[test]
fn test_confidence_at_threshold_is_not_reported() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет", "ru", 90.0)
        .translate("// Привет", "// Привіт")
        .start();
    let test = CliTest::with_file("app.js", "// Привет\n")?;

    let output = test.check_command(&service.url()).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(service.detect_calls(), 1);
    assert_eq!(service.translate_calls(), 0);

    Ok(())
}

#[test]
fn test_other_cyrillic_language_is_not_reported() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привіт світ", "uk", 99.0)
        .start();
    let test = CliTest::with_file("app.js", "// Привіт світ\n")?;

    let output = test.check_command(&service.url()).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(service.translate_calls(), 0);

    Ok(())
}

#[test]
fn test_threshold_from_environment() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет", "ru", 95.0)
        .translate("// Привет", "// Привіт")
        .start();
    let test = CliTest::with_file("app.js", "// Привет\n")?;

    let output = test
        .check_command(&service.url())
        .env("matchThreshold", "96")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(service.translate_calls(), 0);

    Ok(())
}

#[test]
fn test_service_url_from_environment() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет", "ru", 95.0)
        .translate("// Привет", "// Привіт")
        .start();
    let test = CliTest::with_file("app.js", "// Привет\n")?;

    let output = test
        .command()
        .arg("check")
        .env("translatorService", service.url())
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("= suggestion: // Привіт"));

    Ok(())
}

#[test]
fn test_exclusion_file_skips_fragments() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет мир", "ru", 95.0)
        .detect("\"Сохранить\"", "ru", 95.0)
        .translate("\"Сохранить\"", "\"Зберегти\"")
        .start();
    let test = CliTest::new()?;
    test.write_file("exclude_lines.txt", "\nПривет\n\n")?;
    test.write_file(
        "Form.cs",
        "// Привет мир\nvar label = \"Сохранить\";\n",
    )?;

    let output = test.check_command(&service.url()).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.contains("Привет мир"));
    assert!(out.contains("--> Form.cs:2"));
    assert!(out.contains("= suggestion: \"Зберегти\""));
    assert_eq!(service.detect_calls(), 1);

    Ok(())
}

#[test]
fn test_translation_failure_keeps_fragment() -> Result<()> {
    let service = StubService::builder()
        .detect("-- Комментарий", "ru", 97.0)
        .start();
    let test = CliTest::with_file("init.sql", "SELECT 1; -- Комментарий\n")?;

    let output = test.check_command(&service.url()).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("= note: no translation available"));
    assert!(stderr(&output).contains("translation failed"));

    Ok(())
}

#[test]
fn test_block_comment_reported_at_start_line() -> Result<()> {
    let block = "/* Первая строка\n   вторая строка */";
    let service = StubService::builder()
        .detect(block, "ru", 95.0)
        .translate(block, "/* Перший рядок\n   другий рядок */")
        .start();
    let test = CliTest::with_file("schema.sql", &format!("SELECT 1;\n{}\nSELECT 2;\n", block))?;

    let output = test.check_command(&service.url()).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("--> schema.sql:2"));
    assert!(out.contains("2 | /* Первая строка"));
    assert!(out.contains("3 |    вторая строка */"));

    Ok(())
}

#[test]
fn test_unsupported_file_given_explicitly() -> Result<()> {
    let service = StubService::builder().start();
    let test = CliTest::with_file("notes.txt", "Привет")?;

    let output = test.check_command(&service.url()).arg("notes.txt").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: unsupported file extension"));
    assert!(out.contains("--> notes.txt"));
    assert_eq!(service.detect_calls(), 0);

    Ok(())
}

#[test]
fn test_unsupported_files_skipped_in_directories() -> Result<()> {
    let service = StubService::builder().start();
    let test = CliTest::new()?;
    test.write_file("docs/readme.md", "Привет")?;
    test.write_file("src/app.js", "const x = 1;\n")?;

    let output = test.check_command(&service.url()).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 file - nothing untranslated found"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет", "ru", 95.0)
        .translate("// Привет", "// Привіт")
        .start();
    let test = CliTest::new()?;
    test.write_file(".codetrrc.json", r#"{ "ignores": ["src/generated", "**/*.min.js"] }"#)?;
    test.write_file("src/generated/api.js", "// Привет\n")?;
    test.write_file("src/vendor.min.js", "// Привет\n")?;
    test.write_file("src/app.js", "const x = 1;\n")?;

    let output = test.check_command(&service.url()).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 file"));
    assert_eq!(service.detect_calls(), 0);

    Ok(())
}

#[test]
fn test_windows_1251_source() -> Result<()> {
    let service = StubService::builder()
        .detect("// Привет мир", "ru", 95.0)
        .translate("// Привет мир", "// Привіт світ")
        .start();
    let test = CliTest::new()?;
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode("// Привет мир\n");
    test.write_bytes("legacy.cs", &bytes)?;

    let output = test
        .check_command(&service.url())
        .args(["--format", "json"])
        .output()?;
    let value: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        value,
        json!([{
            "file": "legacy.cs",
            "language": "csharp",
            "extracted": {"results": [
                {"line": 1, "original": "// Привет мир", "suggest_Translation": "// Привіт світ"}
            ]},
            "encoding": "windows-1251"
        }])
    );

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let service = StubService::builder()
        .detect("'Ошибка'", "ru", 92.5)
        .translate("'Ошибка'", "'Помилка'")
        .start();
    let test = CliTest::new()?;
    test.write_file("app.js", "alert('Ошибка');\n")?;
    test.write_file("notes.txt", "")?;

    let output = test
        .check_command(&service.url())
        .args(["--format", "json", "app.js", "notes.txt"])
        .output()?;
    let value: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        value,
        json!([
            {
                "file": "app.js",
                "language": "js",
                "extracted": {"results": [
                    {"line": 1, "original": "'Ошибка'", "suggest_Translation": "'Помилка'"}
                ]}
            },
            {"file": "notes.txt", "error": "Unsupported file extension"}
        ])
    );

    Ok(())
}

#[test]
fn test_unreachable_service_reports_nothing() -> Result<()> {
    let test = CliTest::with_file("app.js", "// Привет\n")?;

    let output = test.check_command("http://127.0.0.1:9").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("language detection failed"));

    Ok(())
}

#[test]
fn test_missing_path_is_an_error() -> Result<()> {
    let service = StubService::builder().start();
    let test = CliTest::new()?;

    let output = test.check_command(&service.url()).arg("nope").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Path does not exist"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    for command in ["check", "extract", "init", "serve"] {
        assert!(out.contains(command), "help should list {}", command);
    }

    Ok(())
}
