//! Debounced, dirty-checked persistence of design configurations.
//!
//! Every edit calls [`AutosaveCoordinator::schedule`]. A save runs only after
//! `delay` passes with no newer edit, only if the configuration differs from
//! the last successfully persisted one, and never while another autosave is
//! still in flight. [`AutosaveCoordinator::save_now`] is the explicit save
//! path: it skips the delay and the dirty check, but waits for an in-flight
//! save so the explicit snapshot is always written last.

use crate::models::DesignConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Payload handed to a [`ConfigStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    /// Configuration to persist
    pub config: DesignConfig,
    /// When the save was requested
    pub modified_at: DateTime<Utc>,
}

/// Persistence backend.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Persists one configuration snapshot.
    async fn save(&self, request: &SaveRequest) -> Result<()>;
}

#[async_trait]
impl<T: ConfigStore + ?Sized> ConfigStore for Arc<T> {
    async fn save(&self, request: &SaveRequest) -> Result<()> {
        (**self).save(request).await
    }
}

/// Outcome notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutosaveEvent {
    /// The store accepted the snapshot.
    Saved {
        /// Timestamp carried by the request
        modified_at: DateTime<Utc>,
    },
    /// The snapshot equals the last saved one; the store was not called.
    Skipped,
    /// The store rejected the snapshot.
    Failed {
        /// Error chain rendered as one line
        error: String,
    },
}

struct Shared<S> {
    store: S,
    delay: Duration,
    generation: AtomicU64,
    // Generation of the newest snapshot the store accepted
    saved_generation: AtomicU64,
    // Held for the whole duration of a store call
    save_lock: tokio::sync::Mutex<()>,
    in_flight: AtomicUsize,
    last_saved: Mutex<Option<DesignConfig>>,
    events: mpsc::UnboundedSender<AutosaveEvent>,
}

impl<S: ConfigStore> Shared<S> {
    fn notify(&self, event: AutosaveEvent) {
        // A dropped receiver only means nobody is listening.
        let _ = self.events.send(event);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn is_unchanged(&self, config: &DesignConfig) -> bool {
        let last = self
            .last_saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        last.as_ref() == Some(config)
    }

    /// Calls the store. Must be called with `save_lock` held.
    async fn persist(&self, generation: u64, config: DesignConfig) -> Result<()> {
        let request = SaveRequest {
            config,
            modified_at: Utc::now(),
        };

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let result = self.store.save(&request).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(()) => {
                info!("Saved design configuration ({})", request.modified_at);
                let modified_at = request.modified_at;
                let newest = self.saved_generation.fetch_max(generation, Ordering::SeqCst);
                if generation >= newest {
                    *self
                        .last_saved
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner) = Some(request.config);
                } else {
                    debug!("Save {} finished after newer save {}", generation, newest);
                }
                self.notify(AutosaveEvent::Saved { modified_at });
                Ok(())
            }
            Err(e) => {
                warn!("Failed to save design configuration: {:#}", e);
                self.notify(AutosaveEvent::Failed {
                    error: format!("{e:#}"),
                });
                Err(e)
            }
        }
    }

    async fn run_debounced(self: Arc<Self>, generation: u64, config: DesignConfig) {
        let _guard = loop {
            tokio::time::sleep(self.delay).await;

            if !self.is_current(generation) {
                debug!("Autosave {} superseded", generation);
                return;
            }
            if let Ok(guard) = self.save_lock.try_lock() {
                break guard;
            }
            debug!("Autosave {} waiting for in-flight save", generation);
        };

        // save_now bumps the generation before it queues for the lock
        if !self.is_current(generation) {
            debug!("Autosave {} superseded by an explicit save", generation);
            return;
        }

        if self.is_unchanged(&config) {
            debug!("Autosave {} skipped, configuration unchanged", generation);
            self.notify(AutosaveEvent::Skipped);
        } else {
            // Failure is already reported through the event channel
            let _ = self.persist(generation, config).await;
        }
    }
}

/// Debounces configuration edits into store writes.
pub struct AutosaveCoordinator<S> {
    shared: Arc<Shared<S>>,
}

impl<S> Clone for AutosaveCoordinator<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: ConfigStore + 'static> AutosaveCoordinator<S> {
    /// Creates a coordinator and the receiver for its outcome events.
    pub fn new(store: S, delay: Duration) -> (Self, mpsc::UnboundedReceiver<AutosaveEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            store,
            delay,
            generation: AtomicU64::new(0),
            saved_generation: AtomicU64::new(0),
            save_lock: tokio::sync::Mutex::new(()),
            in_flight: AtomicUsize::new(0),
            last_saved: Mutex::new(None),
            events,
        });
        (Self { shared }, receiver)
    }

    /// Debounce delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.shared.delay
    }

    /// Records an edit. Any earlier pending save is superseded.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, config: DesignConfig) {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let shared = Arc::clone(&self.shared);
        tokio::spawn(shared.run_debounced(generation, config));
    }

    /// Saves immediately and cancels any pending debounced save.
    ///
    /// The store is always called, even if the configuration is unchanged.
    /// An autosave already in flight finishes first, so it can never
    /// overwrite this snapshot.
    ///
    /// # Errors
    /// Returns the store's error.
    pub async fn save_now(&self, config: DesignConfig) -> Result<()> {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = self.shared.save_lock.lock().await;
        self.shared.persist(generation, config).await
    }

    /// Whether any save is currently running.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.shared.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Last successfully saved configuration.
    #[must_use]
    pub fn last_saved(&self) -> Option<DesignConfig> {
        self.shared
            .last_saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the last saved request, if the file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<SaveRequest>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .context(format!("Failed to read saved config: {}", self.path.display()))?;
        let request = serde_json::from_str(&content)
            .context(format!("Failed to parse saved config: {}", self.path.display()))?;
        Ok(Some(request))
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    async fn save(&self, request: &SaveRequest) -> Result<()> {
        let json =
            serde_json::to_string_pretty(request).context("Failed to serialize configuration")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to a temp file first so readers never see a partial file
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json)
            .await
            .context(format!("Failed to write temp file: {}", temp_path.display()))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .context(format!("Failed to save config to: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Radius;
    use std::sync::atomic::AtomicBool;

    const DELAY: Duration = Duration::from_millis(1500);

    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<DesignConfig>>,
        fail: AtomicBool,
        latency: Option<Duration>,
        // When set, only this radius is slow
        slow_radius: Option<Radius>,
        active: AtomicUsize,
        max_active: AtomicUsize,
    }

    impl RecordingStore {
        fn with_latency(latency: Duration) -> Self {
            Self {
                latency: Some(latency),
                ..Default::default()
            }
        }

        fn slow_for(radius: Radius, latency: Duration) -> Self {
            Self {
                latency: Some(latency),
                slow_radius: Some(radius),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<DesignConfig> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConfigStore for RecordingStore {
        async fn save(&self, request: &SaveRequest) -> Result<()> {
            let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(active, Ordering::SeqCst);

            let slow = self
                .slow_radius
                .is_none_or(|radius| radius == request.config.borders.radius);
            if let (Some(latency), true) = (self.latency, slow) {
                tokio::time::sleep(latency).await;
            }
            self.calls.lock().unwrap().push(request.config.clone());
            self.active.fetch_sub(1, Ordering::SeqCst);

            if self.fail.load(Ordering::SeqCst) {
                anyhow::bail!("disk full");
            }
            Ok(())
        }
    }

    fn config(radius: Radius) -> DesignConfig {
        let mut config = DesignConfig::default();
        config.borders.radius = radius;
        config
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_save_once_with_latest() {
        let store = Arc::new(RecordingStore::default());
        let (autosave, mut events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Sm));
        tokio::time::sleep(Duration::from_millis(500)).await;
        autosave.schedule(config(Radius::Lg));
        tokio::time::sleep(Duration::from_millis(500)).await;
        autosave.schedule(config(Radius::Xl));

        assert!(matches!(
            events.recv().await,
            Some(AutosaveEvent::Saved { .. })
        ));
        tokio::time::sleep(DELAY * 3).await;

        assert_eq!(store.calls(), vec![config(Radius::Xl)]);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_save_before_delay_elapses() {
        let store = Arc::new(RecordingStore::default());
        let (autosave, _events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Lg));
        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(store.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_config_is_skipped() {
        let store = Arc::new(RecordingStore::default());
        let (autosave, mut events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Lg));
        assert!(matches!(
            events.recv().await,
            Some(AutosaveEvent::Saved { .. })
        ));

        autosave.schedule(config(Radius::Lg));
        assert_eq!(events.recv().await, Some(AutosaveEvent::Skipped));

        assert_eq!(store.calls().len(), 1);
        assert_eq!(autosave.last_saved(), Some(config(Radius::Lg)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_notifies_and_keeps_snapshot() {
        let store = Arc::new(RecordingStore::default());
        let (autosave, mut events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Sm));
        events.recv().await;

        store.fail.store(true, Ordering::SeqCst);
        autosave.schedule(config(Radius::Lg));
        match events.recv().await {
            Some(AutosaveEvent::Failed { error }) => assert!(error.contains("disk full")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(autosave.last_saved(), Some(config(Radius::Sm)));

        // The failed snapshot is still dirty, so the retry reaches the store
        store.fail.store(false, Ordering::SeqCst);
        autosave.schedule(config(Radius::Lg));
        assert!(matches!(
            events.recv().await,
            Some(AutosaveEvent::Saved { .. })
        ));
        assert_eq!(store.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_two_autosaves_in_flight() {
        let store = Arc::new(RecordingStore::with_latency(Duration::from_secs(5)));
        let (autosave, mut events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Sm));
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
        assert!(autosave.is_saving());

        autosave.schedule(config(Radius::Lg));

        for _ in 0..2 {
            assert!(matches!(
                events.recv().await,
                Some(AutosaveEvent::Saved { .. })
            ));
        }

        assert_eq!(store.max_active.load(Ordering::SeqCst), 1);
        assert_eq!(store.calls(), vec![config(Radius::Sm), config(Radius::Lg)]);
        assert!(!autosave.is_saving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_now_bypasses_debounce_and_cancels_pending() {
        let store = Arc::new(RecordingStore::default());
        let (autosave, _events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Sm));
        autosave.save_now(config(Radius::Lg)).await.unwrap();
        assert_eq!(store.calls(), vec![config(Radius::Lg)]);

        tokio::time::sleep(DELAY * 3).await;
        assert_eq!(store.calls().len(), 1);

        // Unchanged, but explicit saves always reach the store
        autosave.save_now(config(Radius::Lg)).await.unwrap();
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_now_waits_for_slow_autosave() {
        let store = Arc::new(RecordingStore::slow_for(Radius::Sm, Duration::from_secs(5)));
        let (autosave, _events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        autosave.schedule(config(Radius::Sm));
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
        assert!(autosave.is_saving());

        autosave.save_now(config(Radius::Lg)).await.unwrap();
        assert_eq!(store.calls(), vec![config(Radius::Sm), config(Radius::Lg)]);
        assert_eq!(autosave.last_saved(), Some(config(Radius::Lg)));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(store.calls().len(), 2);
        assert_eq!(store.max_active.load(Ordering::SeqCst), 1);
        assert_eq!(autosave.last_saved(), Some(config(Radius::Lg)));
        assert!(!autosave.is_saving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_now_returns_store_error() {
        let store = Arc::new(RecordingStore::default());
        store.fail.store(true, Ordering::SeqCst);
        let (autosave, mut events) = AutosaveCoordinator::new(Arc::clone(&store), DELAY);

        let err = autosave.save_now(config(Radius::Lg)).await.unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert!(matches!(
            events.recv().await,
            Some(AutosaveEvent::Failed { .. })
        ));
        assert!(autosave.last_saved().is_none());
    }

    #[tokio::test]
    async fn test_file_store_writes_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("design.json");
        let store = FileStore::new(&path);

        assert!(store.load().unwrap().is_none());

        let request = SaveRequest {
            config: config(Radius::Full),
            modified_at: Utc::now(),
        };
        store.save(&request).await.unwrap();

        assert_eq!(store.load().unwrap(), Some(request));
        assert!(!path.with_extension("json.tmp").exists());
    }
}
