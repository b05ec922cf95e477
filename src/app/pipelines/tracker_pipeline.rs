use crate::catalog::StaticDirectory;
use crate::config::toml_config::TrackerConfig;
use crate::core::assembler::RecordAssembler;
use crate::core::placement::{place_offsets, OffsetProfile};
use crate::domain::model::{
    Entity, EntityStatus, EntityStatusRecord, LocationGroup, SourceText, TrackerReport,
};
use crate::domain::ports::{LocationDirectory, Pipeline, Storage, TextSource};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::Validate;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use zip::write::{FileOptions, ZipWriter};

pub const JSON_FILENAME: &str = "status.json";
pub const CSV_FILENAME: &str = "status.csv";

pub struct TrackerPipeline<S: Storage, T: TextSource> {
    pub(crate) storage: S,
    pub(crate) source: Arc<T>,
    pub(crate) directory: Arc<dyn LocationDirectory>,
    pub(crate) assembler: RecordAssembler,
    pub(crate) offsets: OffsetProfile,
    pub(crate) entities: Vec<Entity>,
    pub(crate) config: TrackerConfig,
}

impl<S: Storage, T: TextSource + 'static> TrackerPipeline<S, T> {
    pub fn new(storage: S, source: T, config: TrackerConfig) -> Result<Self> {
        // 併發數為 0 時 extract 會永遠等不到許可，先驗證配置
        config.validate()?;
        let profile = config.profile()?;
        let window = config.year_window();
        tracing::debug!(
            "Year window: scan {:?}, primary {:?}, secondary {}",
            window.scan_range(),
            window.primary(),
            window.secondary()
        );

        Ok(Self {
            storage,
            source: Arc::new(source),
            directory: Arc::new(StaticDirectory),
            assembler: RecordAssembler::from_profile(&profile, window)?,
            offsets: profile.offsets,
            entities: config.entities(),
            config,
        })
    }

    pub fn with_directory(mut self, directory: impl LocationDirectory + 'static) -> Self {
        self.directory = Arc::new(directory);
        self
    }

    /// 只追蹤指定的艦艇
    pub fn retain_ids(mut self, ids: &[String]) -> Self {
        if !ids.is_empty() {
            self.entities
                .retain(|e| ids.iter().any(|id| id.eq_ignore_ascii_case(&e.id)));
        }
        self
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn write_json(&self, report: &TrackerReport) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }

    fn write_csv(&self, records: &[EntityStatusRecord]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in records {
            writer.serialize(CsvRow::from(record))?;
        }
        writer
            .into_inner()
            .map_err(|e| TrackerError::IoError(e.into_error()))
    }
}

#[async_trait::async_trait]
impl<S: Storage, T: TextSource + 'static> Pipeline for TrackerPipeline<S, T> {
    async fn extract(&self) -> Result<Vec<SourceText>> {
        let total = self.entities.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrent_requests()));
        let request_delay = Duration::from_millis(self.config.request_delay_ms());
        let mut tasks = JoinSet::new();

        for (index, entity) in self.entities.iter().cloned().enumerate() {
            let permit = Arc::clone(&semaphore).acquire_owned().await.map_err(|e| {
                TrackerError::FetchError {
                    url: entity.url.clone(),
                    message: e.to_string(),
                }
            })?;
            if index > 0 && !request_delay.is_zero() {
                tokio::time::sleep(request_delay).await;
            }

            tracing::debug!("[{:>2}/{}] Scanning {} - {}", index + 1, total, entity.id, entity.name);
            let source = Arc::clone(&self.source);
            tasks.spawn(async move {
                let _permit = permit;
                let result = source.fetch_text(&entity.url).await;
                (index, entity, result)
            });
        }

        let mut fetched = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, entity, Ok(text))) => fetched.push((index, SourceText { entity, text })),
                Ok((_, entity, Err(e))) => {
                    // 抓取失敗：略過此艦艇，不產生紀錄
                    tracing::warn!("❌ {} - {} skipped: {}", entity.id, entity.name, e);
                }
                Err(e) => tracing::error!("Fetch task aborted: {}", e),
            }
        }

        fetched.sort_by_key(|(index, _)| *index);
        tracing::info!("📥 Fetched {}/{} history pages", fetched.len(), total);

        Ok(fetched.into_iter().map(|(_, source)| source).collect())
    }

    async fn transform(&self, data: Vec<SourceText>) -> Result<TrackerReport> {
        let statuses: Vec<EntityStatus> = data
            .iter()
            .map(|source| {
                let status =
                    self.assembler
                        .assemble(&source.entity, &source.text, self.directory.as_ref());
                tracing::info!("✅ {} - {} -> {}", status.id, status.name, status.location);
                status
            })
            .collect();

        let records = place_offsets(statuses, &self.offsets);
        let locations = group_by_location(&records);

        Ok(TrackerReport {
            tracker: self.config.tracker.name.clone(),
            generated_at: chrono::Utc::now(),
            tracked: records.len(),
            records,
            locations,
        })
    }

    async fn load(&self, report: TrackerReport) -> Result<String> {
        let mut files: Vec<(&str, Vec<u8>)> = Vec::new();

        if self.config.wants_format("json") {
            files.push((JSON_FILENAME, self.write_json(&report)?));
        }
        if self.config.wants_format("csv") {
            files.push((CSV_FILENAME, self.write_csv(&report.records)?));
        }

        if let Some(compression) = self.config.compression() {
            tracing::debug!("Creating ZIP file with {} files", files.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, data) in &files {
                    zip.start_file::<_, ()>(*name, FileOptions::default())?;
                    zip.write_all(data)?;
                }
                zip.finish()?.into_inner()
            };

            self.storage
                .write_file(&compression.filename, &zip_data)
                .await?;
            return Ok(format!("{}/{}", self.config.output_path(), compression.filename));
        }

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(name, data).await?;
        }

        let primary = files.first().map(|(name, _)| *name).unwrap_or(JSON_FILENAME);
        Ok(format!("{}/{}", self.config.output_path(), primary))
    }
}

/// Entity ids per location, locations in order of first appearance.
pub fn group_by_location(records: &[EntityStatusRecord]) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    for record in records {
        let id = record.status.id.clone();
        match groups
            .iter_mut()
            .find(|g| g.location == record.status.location)
        {
            Some(group) => group.ids.push(id),
            None => groups.push(LocationGroup {
                location: record.status.location,
                ids: vec![id],
            }),
        }
    }
    groups
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    class: &'a str,
    subtype: &'a str,
    location: &'static str,
    region: crate::domain::location::Region,
    lat: f64,
    lon: f64,
    display_lat: f64,
    display_lon: f64,
    date: &'a str,
    status: &'a str,
    source_url: &'a str,
}

impl<'a> From<&'a EntityStatusRecord> for CsvRow<'a> {
    fn from(record: &'a EntityStatusRecord) -> Self {
        let status = &record.status;
        Self {
            id: &status.id,
            name: &status.name,
            class: &status.class,
            subtype: status.subtype.as_deref().unwrap_or(""),
            location: status.location.as_str(),
            region: status.coordinate.region,
            lat: status.coordinate.lat,
            lon: status.coordinate.lon,
            display_lat: record.display_coordinate.lat,
            display_lon: record.display_coordinate.lon,
            date: &status.date,
            status: &status.status,
            source_url: &status.source_url,
        }
    }
}
