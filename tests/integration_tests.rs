use fleet_tracker::{
    HttpTextSource, LocalStorage, TrackerConfig, TrackerEngine, TrackerPipeline,
};
use anyhow::Result;
use httpmock::prelude::*;
use tempfile::TempDir;

const CVN68_PAGE: &str = r#"<html><body>
<h3>2024</h3>
<p>Jan. 4 departed San Diego for a scheduled deployment.</p>
<h3>2025</h3>
<p>March 8 moored at Pier 12 in Bahrain.</p>
<p>From March 10 - April 2 operations in the Arabian Sea.</p>
</body></html>"#;

const CVN70_PAGE: &str = r#"<html><body>
<h3>2024</h3>
<p>Nov. 21 arrived Yokosuka.</p>
</body></html>"#;

fn tracker_config(server: &MockServer, output_path: &str, compressed: bool) -> Result<TrackerConfig> {
    let compression = if compressed {
        "[load.compression]\nenabled = true\nfilename = \"tracker.zip\"\n"
    } else {
        ""
    };

    let toml_content = format!(
        r#"
[tracker]
name = "integration"
category = "fleet"

[source]
retry_attempts = 1
retry_delay_seconds = 0
concurrent_requests = 2

[status]
reference_year = 2025

[load]
output_path = "{output}"
output_formats = ["json", "csv"]
{compression}
[[entities]]
id = "CVN68"
name = "USS Nimitz"
class = "Nimitz"
subtype = "CVN"
homeport = "PACIFIC"
url = "{cvn68}"

[[entities]]
id = "CVN70"
name = "USS Carl Vinson"
class = "Nimitz"
subtype = "CVN"
homeport = "WESTPAC"
url = "{cvn70}"

[[entities]]
id = "CVN71"
name = "USS Theodore Roosevelt"
class = "Nimitz"
subtype = "CVN"
homeport = "PACIFIC"
url = "{cvn71}"
"#,
        output = output_path,
        compression = compression,
        cvn68 = server.url("/cvn68history.htm"),
        cvn70 = server.url("/cvn70history.htm"),
        cvn71 = server.url("/cvn71history.htm"),
    );

    Ok(TrackerConfig::from_toml_str(&toml_content)?)
}

#[tokio::test]
async fn test_end_to_end_tracker_run_with_real_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let cvn68_mock = server.mock(|when, then| {
        when.method(GET).path("/cvn68history.htm");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(CVN68_PAGE);
    });
    let cvn70_mock = server.mock(|when, then| {
        when.method(GET).path("/cvn70history.htm");
        then.status(200).body(CVN70_PAGE);
    });
    let cvn71_mock = server.mock(|when, then| {
        when.method(GET).path("/cvn71history.htm");
        then.status(500);
    });

    let config = tracker_config(&server, &output_path, false)?;
    let storage = LocalStorage::new(output_path.clone());
    let source = HttpTextSource::new(&config)?;
    let pipeline = TrackerPipeline::new(storage, source, config)?;

    let engine = TrackerEngine::new(pipeline);
    let result = engine.run().await?;

    cvn68_mock.assert();
    cvn70_mock.assert();
    cvn71_mock.assert();
    assert!(result.ends_with("status.json"));

    let json_path = temp_dir.path().join("status.json");
    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(json_path)?)?;

    // CVN71 failed to fetch and is left out
    assert_eq!(report["tracker"], "integration");
    assert_eq!(report["tracked"], 2);

    let nimitz = &report["records"][0];
    assert_eq!(nimitz["id"], "CVN68");
    assert_eq!(nimitz["location"], "Bahrain");
    assert_eq!(nimitz["date"], "March 8");
    assert_eq!(nimitz["status"], "March 8 moored at Pier 12 in Bahrain.");
    assert_eq!(nimitz["coordinate"]["region"], "CENTCOM");
    assert_eq!(nimitz["display_coordinate"], nimitz["coordinate"]);

    // no 2025 event, falls back to the prior year
    let vinson = &report["records"][1];
    assert_eq!(vinson["id"], "CVN70");
    assert_eq!(vinson["location"], "Yokosuka");
    assert_eq!(vinson["date"], "Nov. 21");

    let csv_content = std::fs::read_to_string(temp_dir.path().join("status.csv"))?;
    let mut lines = csv_content.lines();
    assert!(lines.next().unwrap().starts_with("id,name,class,subtype,location"));
    assert_eq!(lines.count(), 2);
    assert!(csv_content.contains("CVN68,USS Nimitz,Nimitz,CVN,Bahrain,CENTCOM"));
    Ok(())
}

#[tokio::test]
async fn test_compressed_output_contains_both_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("history.htm");
        then.status(200).body(CVN70_PAGE);
    });

    let config = tracker_config(&server, &output_path, true)?;
    let storage = LocalStorage::new(output_path.clone());
    let source = HttpTextSource::new(&config)?;
    let pipeline = TrackerPipeline::new(storage, source, config)?
        .retain_ids(&["CVN70".to_string()]);

    let result = TrackerEngine::new(pipeline).run().await?;
    assert!(result.ends_with("tracker.zip"));

    let zip_data = std::fs::read(temp_dir.path().join("tracker.zip"))?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data))?;
    assert_eq!(archive.len(), 2);

    let mut json_file = archive.by_name("status.json")?;
    let mut json_content = String::new();
    std::io::Read::read_to_string(&mut json_file, &mut json_content)?;
    assert!(json_content.contains("\"Yokosuka\""));
    assert!(!temp_dir.path().join("status.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_retries_before_giving_up() -> Result<()> {
    let server = MockServer::start();
    let failing = server.mock(|when, then| {
        when.method(GET).path("/down.htm");
        then.status(503);
    });

    let mut config = TrackerConfig::for_category(fleet_tracker::Category::Fleet, "./unused");
    config.source.retry_attempts = Some(3);
    config.source.retry_delay_seconds = Some(0);

    let source = HttpTextSource::new(&config)?;
    let result =
        fleet_tracker::domain::ports::TextSource::fetch_text(&source, &server.url("/down.htm"))
            .await;

    assert!(matches!(
        result,
        Err(fleet_tracker::TrackerError::FetchError { .. })
    ));
    failing.assert_hits(3);
    Ok(())
}
