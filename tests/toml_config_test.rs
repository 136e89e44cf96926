use anyhow::Result;
use httpmock::prelude::*;
use partners_section::core::ConfigProvider;
use partners_section::utils::validation::Validate;
use partners_section::{HttpPartnerSource, LocalStorage, SectionEngine, TomlConfig};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_configured_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("site");
    let normalized_path = output_dir.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/partners")
                .header("X-Api-Key", "k-123");
            then.status(200).json_body(serde_json::json!({
                "data": [
                    {"id": 1, "name": "Emirates Hospital", "category": "Healthcare", "discount": "25%"},
                    {"id": 2, "name": "Dubai Taxi", "category": "Transport", "discount": "10%"}
                ]
            }));
        })
        .await;

    let config_content = format!(
        r#"
[source]
endpoint = "{}"
timeout_seconds = 5
headers = {{ "X-Api-Key" = "k-123" }}

[section]
max_partners = 6

[output]
path = "{}"
filename = "home.html"
"#,
        server.url("/v1/partners"),
        normalized_path
    );

    let config_path = temp_dir.path().join("partners-section.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let source = HttpPartnerSource::from_config(&config)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = SectionEngine::new(Arc::new(source), storage, config);

    let report = engine.run().await?;

    api_mock.assert_async().await;
    assert_eq!(report.partners_rendered, 2);

    let html = tokio::fs::read_to_string(output_dir.join("home.html")).await?;
    assert!(html.contains("Emirates Hospital"));
    assert!(html.contains(">Healthcare (1)</button>"));
    assert!(html.contains(">Transport (1)</button>"));
    assert!(html.contains(">E</div>"));

    Ok(())
}
