use crate::model::PackageManifest;
use crate::traits::{ExtractError, PermissionExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, instrument};

/// Runs extractions with a bounded number in flight and a per-package timeout.
#[derive(Debug, Clone)]
pub struct ExtractionExecutor {
    semaphore: Arc<Semaphore>,
    package_timeout: Duration,
}

impl ExtractionExecutor {
    pub fn new(concurrency_limit: usize, package_timeout: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency_limit.max(1))),
            package_timeout,
        }
    }

    #[instrument(skip(self, extractor), fields(format = extractor.format_id()))]
    pub async fn execute<E>(
        &self,
        extractor: Arc<E>,
        path: PathBuf,
    ) -> Result<PackageManifest, ExtractError>
    where
        E: PermissionExtractor + ?Sized + 'static,
    {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| ExtractError::Unknown(format!("Semaphore error: {}", e)))?;

        debug!("Starting extraction");

        let result = timeout(self.package_timeout, extractor.extract(&path))
            .await
            .map_err(|_| ExtractError::Timeout(self.package_timeout.as_secs()))?;

        debug!(ok = result.is_ok(), "Finished extraction");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SlowExtractor {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        delay: Duration,
    }

    #[async_trait]
    impl PermissionExtractor for SlowExtractor {
        fn format_id(&self) -> &str {
            "mock"
        }

        async fn extract(&self, path: &Path) -> Result<PackageManifest, ExtractError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            Ok(PackageManifest {
                package_name: path.display().to_string(),
                version_name: "1.0".to_string(),
                version_code: 1,
                permissions: vec![],
            })
        }
    }

    fn slow(delay: Duration) -> Arc<SlowExtractor> {
        Arc::new(SlowExtractor {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            delay,
        })
    }

    #[tokio::test]
    async fn test_concurrency_limit_is_respected() {
        let executor = ExtractionExecutor::new(2, Duration::from_secs(5));
        let extractor = slow(Duration::from_millis(20));

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..6 {
            let executor = executor.clone();
            let extractor = extractor.clone();
            tasks.spawn(async move { executor.execute(extractor, PathBuf::from(format!("{i}.apk"))).await });
        }
        while let Some(joined) = tasks.join_next().await {
            assert!(joined.unwrap().is_ok());
        }

        assert!(extractor.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_timeout_becomes_error() {
        let executor = ExtractionExecutor::new(1, Duration::from_millis(10));
        let result = executor
            .execute(slow(Duration::from_secs(5)), PathBuf::from("slow.apk"))
            .await;

        assert!(matches!(result, Err(ExtractError::Timeout(_))));
    }
}
