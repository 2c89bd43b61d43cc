use std::{fs, path::Path, sync::Arc};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json::{Value, json};

use super::types::{ConfigDto, ExtractCodeParams, ExtractFileParams, GetConfigParams};
use crate::{
    cli::report::{UNSUPPORTED_EXTENSION, UNSUPPORTED_LANGUAGE},
    config::Settings,
    core::{ExtractionResult, Extractor, Grammar, decode_source},
};

#[derive(Clone)]
pub struct CodetrMcpServer {
    tool_router: ToolRouter<Self>,
    settings: Arc<Settings>,
}

#[tool_router]
impl CodetrMcpServer {
    pub fn new(settings: Settings) -> Self {
        Self {
            tool_router: Self::tool_router(),
            settings: Arc::new(settings),
        }
    }

    /// Extract untranslated fragments from a code snippet
    #[tool(
        description = "Find comments and string literals in a C#, JavaScript or SQL snippet that are written in the source language and suggest translations. Returns {\"extracted\": {\"results\": [{line, original, suggest_Translation}]}}."
    )]
    pub async fn extract_code(
        &self,
        params: Parameters<ExtractCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        let ExtractCodeParams { code, language } = params.0;
        let grammar = Grammar::from_name(&language);
        if !grammar.is_supported() {
            return json_result(&json!({ "error": UNSUPPORTED_LANGUAGE }));
        }

        let extracted = self.extract_blocking(code, grammar, None).await?;
        json_result(&json!({ "extracted": extracted }))
    }

    /// Extract untranslated fragments from a file
    #[tool(
        description = "Read a .cs, .js or .sql file (UTF-8, falling back to windows-1251), find comments and string literals written in the source language and suggest translations. Returns {\"extracted\": {...}, \"language\": \"csharp\"|\"js\"|\"sql\"}."
    )]
    pub async fn extract_file(
        &self,
        params: Parameters<ExtractFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.file_path);
        tracing::info!("Extracting code from file: {}", path.display());

        let bytes = fs::read(path).map_err(|e| {
            McpError::internal_error(format!("Failed to read {}: {}", path.display(), e), None)
        })?;
        let code = decode_source(&bytes).text;

        let grammar = Grammar::from_path(path);
        let file_name = path.display().to_string();
        tracing::info!("{} detected as {}", file_name, grammar);
        if !grammar.is_supported() {
            return json_result(&json!({ "error": UNSUPPORTED_EXTENSION }));
        }

        tracing::info!("{} start processing", file_name);
        let extracted = self.extract_blocking(code, grammar, Some(file_name.clone())).await?;
        tracing::info!("{} finished processing", file_name);

        json_result(&json!({ "extracted": extracted, "language": grammar.name() }))
    }

    /// Get the effective codetr settings
    #[tool(description = "Get the effective codetr settings used by this server.")]
    pub async fn get_config(
        &self,
        _params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let config_dto = ConfigDto::from(self.settings.as_ref());

        let json_str = serde_json::to_string_pretty(&config_dto).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Run one extraction on the blocking pool.
    ///
    /// The HTTP client blocks, so it is created, used and dropped off the
    /// async runtime.
    async fn extract_blocking(
        &self,
        code: String,
        grammar: Grammar,
        origin: Option<String>,
    ) -> Result<ExtractionResult, McpError> {
        let settings = Arc::clone(&self.settings);

        tokio::task::spawn_blocking(move || {
            let client = settings.service_client().map_err(|e| {
                McpError::internal_error(format!("Failed to create service client: {}", e), None)
            })?;
            Extractor::new(&settings.rules, &client, &client)
                .extract(&code, grammar, origin.as_deref())
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
        })
        .await
        .map_err(|e| McpError::internal_error(format!("Extraction task failed: {}", e), None))?
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for CodetrMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "codetr MCP finds comments and string literals left in the source language \
                 (C#, JavaScript, SQL) and suggests translations into the target language.\n\n\
                 Available tools:\n\
                 1. get_config - Get the effective service URL, threshold and language pair\n\
                 2. extract_code - Scan a code snippet; pass the language as csharp, js or sql\n\
                 3. extract_file - Scan a .cs, .js or .sql file by path\n\n\
                 Each result has the 1-based line, the original fragment and suggest_Translation.\n\
                 An empty suggest_Translation means the translation service failed for that fragment."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server(settings: Settings) -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = CodetrMcpServer::new(settings);
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
