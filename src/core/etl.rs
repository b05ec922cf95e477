use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs one extract -> transform -> load pass of a tracker pipeline.
pub struct TrackerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrackerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🚀 Starting tracker run");

        // Extract
        tracing::info!("📡 Fetching history pages...");
        let sources = self.pipeline.extract().await?;
        tracing::info!("Extracted {} pages", sources.len());

        // Transform
        tracing::info!("🧭 Classifying status and location...");
        let report = self.pipeline.transform(sources).await?;
        tracing::info!(
            "Classified {} entities across {} locations",
            report.tracked,
            report.locations.len()
        );

        // Load
        tracing::info!("💾 Writing output...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!(
            "✅ Output saved to: {} ({:.1}s)",
            output_path,
            started.elapsed().as_secs_f64()
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SourceText, TrackerReport};
    use crate::utils::error::TrackerError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPipeline {
        calls: AtomicUsize,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Vec<SourceText>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_extract {
                return Err(TrackerError::FetchError {
                    url: "http://history.test".to_string(),
                    message: "down".to_string(),
                });
            }
            Ok(Vec::new())
        }

        async fn transform(&self, data: Vec<SourceText>) -> Result<TrackerReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TrackerReport {
                tracker: "test".to_string(),
                generated_at: chrono::Utc::now(),
                tracked: data.len(),
                records: Vec::new(),
                locations: Vec::new(),
            })
        }

        async fn load(&self, _report: TrackerReport) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("out/status.json".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_calls_every_phase() {
        let engine = TrackerEngine::new(CountingPipeline::default());
        assert_eq!(engine.run().await.unwrap(), "out/status.json");
        assert_eq!(engine.pipeline().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_run_stops_on_extract_error() {
        let engine = TrackerEngine::new(CountingPipeline {
            fail_extract: true,
            ..Default::default()
        });
        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline().calls.load(Ordering::SeqCst), 1);
    }
}
