use std::collections::VecDeque;

use alertsync_api::models::{DeviceState, EventKind, EventLogEntry};
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// Bounded, insertion-ordered history of state transitions.
///
/// Once `capacity` entries are held, every append evicts exactly the oldest
/// one. Entries are never mutated after insertion.
pub struct EventLogService {
    entries: RwLock<VecDeque<EventLogEntry>>,
    capacity: usize,
}

impl EventLogService {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Records `kind` stamped with the current time and the given device snapshot.
    pub async fn append(&self, kind: EventKind, snapshot: &DeviceState) -> EventLogEntry {
        self.push(EventLogEntry::new(
            kind,
            OffsetDateTime::now_utc(),
            snapshot.danger_level,
            snapshot.emergency,
        ))
        .await
    }

    /// Stores a prebuilt entry. Only the sync service calls this, with a
    /// snapshot it read from the device store.
    pub(crate) async fn push(&self, entry: EventLogEntry) -> EventLogEntry {
        let mut entries = self.entries.write().await;

        entries.push_back(entry.clone());
        while entries.len() > self.capacity {
            if let Some(evicted) = entries.pop_front() {
                tracing::trace!(event = %evicted.event, "evicted oldest log entry");
            }
        }

        entry
    }

    /// Returns the last `count` entries, oldest first.
    pub async fn recent(&self, count: usize) -> Vec<EventLogEntry> {
        let entries = self.entries.read().await;
        let skip = entries.len().saturating_sub(count);

        entries.iter().skip(skip).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(danger_level: i32) -> DeviceState {
        DeviceState {
            danger_level,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_append_uses_snapshot() {
        let log = EventLogService::new(50);
        let state = DeviceState {
            danger_level: 88,
            emergency: true,
            ..Default::default()
        };

        let entry = log.append(EventKind::ServoOpened, &state).await;

        assert_eq!(entry.event, "Servo opened");
        assert_eq!(entry.danger_level, 88);
        assert!(entry.emergency);
        assert_eq!(log.len().await, 1);
    }

    #[tokio::test]
    async fn test_push_keeps_prebuilt_entry() {
        let log = EventLogService::new(2);
        let at = OffsetDateTime::UNIX_EPOCH;

        for level in 0..3 {
            log.push(EventLogEntry::new(EventKind::EmergencyCleared, at, level, false))
                .await;
        }

        let entries = log.recent(5).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time, at);
        assert_eq!(entries[0].danger_level, 1);
    }

    #[tokio::test]
    async fn test_bound_evicts_oldest_first() {
        let log = EventLogService::new(50);

        for level in 0..120 {
            log.append(EventKind::ServoClosed, &snapshot(level)).await;
            assert!(log.len().await <= 50);
        }

        let entries = log.recent(usize::MAX).await;
        assert_eq!(entries.len(), 50);
        assert_eq!(entries.first().unwrap().danger_level, 70);
        assert_eq!(entries.last().unwrap().danger_level, 119);
    }

    #[tokio::test]
    async fn test_each_append_at_capacity_evicts_one() {
        let log = EventLogService::new(3);

        for level in 0..3 {
            log.append(EventKind::ServoOpened, &snapshot(level)).await;
        }
        log.append(EventKind::ServoOpened, &snapshot(3)).await;

        let levels: Vec<i32> = log.recent(10).await.iter().map(|e| e.danger_level).collect();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_recent_is_chronological() {
        let log = EventLogService::new(50);

        for level in 0..10 {
            log.append(EventKind::ServoOpened, &snapshot(level)).await;
        }

        let levels: Vec<i32> = log.recent(4).await.iter().map(|e| e.danger_level).collect();
        assert_eq!(levels, vec![6, 7, 8, 9]);

        assert!(log.recent(0).await.is_empty());
        assert_eq!(log.recent(100).await.len(), 10);
    }

    #[tokio::test]
    async fn test_zero_capacity_is_clamped() {
        let log = EventLogService::new(0);
        assert_eq!(log.capacity(), 1);
        assert!(log.is_empty().await);

        log.append(EventKind::ServoOpened, &snapshot(1)).await;
        log.append(EventKind::ServoClosed, &snapshot(2)).await;

        let entries = log.recent(5).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, "Servo closed");
    }
}
