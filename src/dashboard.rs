//! Fetch orchestration
//!
//! [`Dashboard`] owns the current board view, drives the data source and
//! swaps in a freshly derived [`BoardSnapshot`] after each successful fetch.
//! Failed fetches are logged and leave the previous snapshot in place.
//!
//! Every refresh takes a sequence number when it starts. A response is only
//! applied if no later request has already been applied, so overlapping
//! refreshes resolve to the most recently issued one rather than the most
//! recently completed one.

use crate::domain::{BoardSnapshot, BoardView, GroupingMode, OrderBy};
use crate::error::BoardError;
use crate::source::DataSource;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Result of a single refresh
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The new snapshot replaced the previous one
    Applied(Arc<BoardSnapshot>),
    /// A newer request was applied first; this response was discarded
    Superseded,
    /// Fetching or decoding failed; the previous snapshot is kept
    Failed(BoardError),
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

struct AppliedSnapshot {
    request: u64,
    snapshot: Arc<BoardSnapshot>,
}

/// Board state kept in sync with a [`DataSource`]
pub struct Dashboard<S> {
    source: S,
    view: RwLock<BoardView>,
    current: RwLock<Option<AppliedSnapshot>>,
    in_flight: AtomicUsize,
    next_request: AtomicU64,
}

impl<S: DataSource> Dashboard<S> {
    pub fn new(source: S, view: BoardView) -> Self {
        Self {
            source,
            view: RwLock::new(view),
            current: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
            next_request: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn view(&self) -> BoardView {
        *self.view.read().await
    }

    /// Latest applied snapshot; `None` until the first successful fetch
    pub async fn snapshot(&self) -> Option<Arc<BoardSnapshot>> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|applied| Arc::clone(&applied.snapshot))
    }

    /// Whether any refresh is currently waiting on the data source
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Fetches, regroups and publishes a new snapshot
    pub async fn refresh(&self) -> RefreshOutcome {
        let request = self.next_request.fetch_add(1, Ordering::SeqCst) + 1;
        let view = self.view().await;
        let _loading = LoadingGuard::enter(&self.in_flight);

        let payload = match self.source.fetch().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(
                    source = %self.source.describe(),
                    request,
                    error = %err,
                    "failed to load board data"
                );
                return RefreshOutcome::Failed(err);
            }
        };

        let snapshot = Arc::new(BoardSnapshot::build(payload, view));

        let mut current = self.current.write().await;
        if let Some(applied) = current.as_ref() {
            if applied.request > request {
                tracing::warn!(
                    request,
                    applied = applied.request,
                    "discarding response superseded by a newer request"
                );
                return RefreshOutcome::Superseded;
            }
        }

        tracing::info!(
            request,
            grouping = %view.grouping,
            ordering = %view.ordering,
            tickets = snapshot.grouped.total_tickets(),
            users = snapshot.users.len(),
            "board snapshot applied"
        );

        *current = Some(AppliedSnapshot {
            request,
            snapshot: Arc::clone(&snapshot),
        });
        RefreshOutcome::Applied(snapshot)
    }

    /// Switches the grouping mode and reloads the board
    pub async fn set_grouping(&self, grouping: GroupingMode) -> RefreshOutcome {
        self.view.write().await.grouping = grouping;
        self.refresh().await
    }

    /// Switches the ordering and reloads the board
    pub async fn set_ordering(&self, ordering: OrderBy) -> RefreshOutcome {
        self.view.write().await.ordering = ordering;
        self.refresh().await
    }
}

/// Keeps the loading counter raised for as long as it lives
struct LoadingGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoardPayload, Ticket, User};
    use crate::error::Result;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Plays back one scripted response per fetch, each after its own delay
    struct ScriptedSource {
        script: Vec<(Duration, Option<BoardPayload>)>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: Vec<(Duration, Option<BoardPayload>)>) -> Self {
            Self {
                script,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DataSource for ScriptedSource {
        async fn fetch(&self) -> Result<BoardPayload> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let (delay, response) = self.script[call % self.script.len()].clone();
            tokio::time::sleep(delay).await;
            response.ok_or_else(|| BoardError::HttpStatus {
                status: 500,
                url: "scripted".to_string(),
            })
        }

        fn describe(&self) -> String {
            "scripted".to_string()
        }
    }

    /// Blocks every fetch until released
    struct GatedSource {
        gate: Notify,
    }

    #[async_trait]
    impl DataSource for GatedSource {
        async fn fetch(&self) -> Result<BoardPayload> {
            self.gate.notified().await;
            Ok(BoardPayload::default())
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    fn payload(ticket_ids: &[&str]) -> BoardPayload {
        BoardPayload {
            users: vec![User::new("usr-1", "Anoop", true)],
            tickets: ticket_ids
                .iter()
                .map(|id| Ticket::new(*id, *id).with_status("Todo").with_user("usr-1"))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_refresh_applies_snapshot() {
        let source = ScriptedSource::new(vec![(Duration::ZERO, Some(payload(&["t1", "t2"])))]);
        let dashboard = Dashboard::new(source, BoardView::default());

        assert!(dashboard.snapshot().await.is_none());

        let outcome = dashboard.refresh().await;

        assert!(outcome.is_applied());
        let snapshot = dashboard.snapshot().await.unwrap();
        assert_eq!(snapshot.grouped.group("Todo").len(), 2);
        assert!(!dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let source = ScriptedSource::new(vec![
            (Duration::ZERO, Some(payload(&["t1"]))),
            (Duration::ZERO, None),
        ]);
        let dashboard = Dashboard::new(source, BoardView::default());

        assert!(dashboard.refresh().await.is_applied());
        let outcome = dashboard.refresh().await;

        assert!(matches!(outcome, RefreshOutcome::Failed(BoardError::HttpStatus { .. })));
        let snapshot = dashboard.snapshot().await.unwrap();
        assert_eq!(snapshot.grouped.total_tickets(), 1);
        assert!(!dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_failed_first_refresh_leaves_board_empty() {
        let source = ScriptedSource::new(vec![(Duration::ZERO, None)]);
        let dashboard = Dashboard::new(source, BoardView::default());

        assert!(!dashboard.refresh().await.is_applied());
        assert!(dashboard.snapshot().await.is_none());
        assert!(!dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_is_loading_while_fetch_pending() {
        let dashboard = Arc::new(Dashboard::new(
            GatedSource { gate: Notify::new() },
            BoardView::default(),
        ));

        let task = {
            let dashboard = Arc::clone(&dashboard);
            tokio::spawn(async move { dashboard.refresh().await })
        };

        while !dashboard.is_loading() {
            tokio::task::yield_now().await;
        }
        dashboard.source().gate.notify_one();

        assert!(task.await.unwrap().is_applied());
        assert!(!dashboard.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_superseded() {
        let source = ScriptedSource::new(vec![
            (Duration::from_millis(100), Some(payload(&["old"]))),
            (Duration::from_millis(10), Some(payload(&["new-1", "new-2"]))),
        ]);
        let dashboard = Dashboard::new(source, BoardView::default());

        let (first, second) = tokio::join!(dashboard.refresh(), dashboard.refresh());

        assert!(matches!(first, RefreshOutcome::Superseded));
        assert!(second.is_applied());
        let snapshot = dashboard.snapshot().await.unwrap();
        assert_eq!(snapshot.grouped.total_tickets(), 2);
        assert!(!dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_view_changes_trigger_regrouping() {
        let source = ScriptedSource::new(vec![(Duration::ZERO, Some(payload(&["t1"])))]);
        let dashboard = Dashboard::new(source, BoardView::default());

        let outcome = dashboard.set_grouping(GroupingMode::Users).await;
        let RefreshOutcome::Applied(snapshot) = outcome else {
            panic!("expected an applied snapshot");
        };
        assert_eq!(snapshot.view.grouping, GroupingMode::Users);
        assert_eq!(snapshot.grouped.keys, vec!["usr-1"]);

        dashboard.set_ordering(OrderBy::Title).await;
        let view = dashboard.view().await;
        assert_eq!(view, BoardView::new(GroupingMode::Users, OrderBy::Title));
        assert_eq!(dashboard.snapshot().await.unwrap().view.ordering, OrderBy::Title);
        assert_eq!(dashboard.source().calls.load(Ordering::SeqCst), 2);
    }
}
