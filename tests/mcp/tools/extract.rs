use codetr::mcp::types::{ExtractCodeParams, ExtractFileParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, server_for, support::StubService};

fn code_params(code: &str, language: &str) -> Parameters<ExtractCodeParams> {
    Parameters(ExtractCodeParams {
        code: code.to_string(),
        language: language.to_string(),
    })
}

fn file_params(file_path: String) -> Parameters<ExtractFileParams> {
    Parameters(ExtractFileParams { file_path })
}

// ============================================================================
// extract_code tests
// ============================================================================

#[tokio::test]
async fn test_extract_code_single_comment() {
    let service = StubService::builder()
        .detect("// Привет мир", "ru", 95.0)
        .translate("// Привет мир", "// Привіт світ")
        .start();
    let server = server_for(&service.url());

    let result = server
        .extract_code(code_params("// Привет мир\nconst x = \"hello\";", "js"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({"extracted": {"results": [
            {"line": 1, "original": "// Привет мир", "suggest_Translation": "// Привіт світ"}
        ]}})
    );
}

#[tokio::test]
async fn test_extract_code_lines_before_blocks() {
    let service = StubService::builder()
        .detect("/* Блок */", "ru", 95.0)
        .translate("/* Блок */", "/* Блок */")
        .detect("\"Строка\"", "ru", 95.0)
        .translate("\"Строка\"", "\"Рядок\"")
        .start();
    let server = server_for(&service.url());

    let result = server
        .extract_code(code_params("/* Блок */\nvar s = \"Строка\";", "csharp"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    // The line pass runs first even though the block comment is on line 1.
    assert_eq!(json_result["extracted"]["results"][0]["line"], 2);
    assert_eq!(json_result["extracted"]["results"][1]["line"], 1);
    assert_eq!(json_result["extracted"]["results"][1]["original"], "/* Блок */");
}

#[tokio::test]
async fn test_extract_code_unsupported_language() {
    let service = StubService::builder().start();
    let server = server_for(&service.url());

    let result = server
        .extract_code(code_params("# Привет", "python"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result, json!({"error": "Unsupported language"}));
    assert_eq!(service.detect_calls(), 0);
}

#[tokio::test]
async fn test_extract_code_service_down() {
    let server = server_for("http://127.0.0.1:9");

    let result = server
        .extract_code(code_params("-- Привет", "sql"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result, json!({"extracted": {"results": []}}));
}

// ============================================================================
// extract_file tests
// ============================================================================

#[tokio::test]
async fn test_extract_file_reports_language() {
    let service = StubService::builder()
        .detect("-- Комментарий", "ru", 95.0)
        .translate("-- Комментарий", "-- Коментар")
        .start();
    let server = server_for(&service.url());
    let fixture = McpTestFixture::new().unwrap();
    let path = fixture
        .write_source("db/init.sql", "SELECT 1; -- Комментарий\n".as_bytes())
        .unwrap();

    let result = server.extract_file(file_params(path)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["language"], "sql");
    assert_eq!(
        json_result["extracted"],
        json!({"results": [
            {"line": 1, "original": "-- Комментарий", "suggest_Translation": "-- Коментар"}
        ]})
    );
}

#[tokio::test]
async fn test_extract_file_windows_1251() {
    let service = StubService::builder()
        .detect("\"Сохранить\"", "ru", 95.0)
        .translate("\"Сохранить\"", "\"Зберегти\"")
        .start();
    let server = server_for(&service.url());
    let fixture = McpTestFixture::new().unwrap();
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode("var s = \"Сохранить\";\n");
    let path = fixture.write_source("Legacy.CS", &bytes).unwrap();

    let result = server.extract_file(file_params(path)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["language"], "csharp");
    assert_eq!(
        json_result["extracted"]["results"][0]["suggest_Translation"],
        "\"Зберегти\""
    );
}

#[tokio::test]
async fn test_extract_file_unsupported_extension() {
    let service = StubService::builder().start();
    let server = server_for(&service.url());
    let fixture = McpTestFixture::new().unwrap();
    let path = fixture
        .write_source("main.py", "# Привет\n".as_bytes())
        .unwrap();

    let result = server.extract_file(file_params(path)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result, json!({"error": "Unsupported file extension"}));
    assert_eq!(service.detect_calls(), 0);
}

#[tokio::test]
async fn test_extract_file_missing_is_an_error() {
    let server = server_for("http://127.0.0.1:9");
    let fixture = McpTestFixture::new().unwrap();
    let path = fixture.root_path().join("missing.js");

    let result = server
        .extract_file(file_params(path.to_string_lossy().to_string()))
        .await;

    assert!(result.is_err());
}
