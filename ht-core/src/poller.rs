//! Periodic refresh of the status cards and alert banner.

use crate::alert::{evaluate_status_alert, Banner};
use crate::api::{ApiClient, Fetch};
use crate::error::Result;
use crate::status::DiseaseStatus;
use crate::view::StatusView;
use std::future::Future;
use std::time::Duration;

pub struct StatusPoller<F, V> {
    client: ApiClient<F>,
    view: V,
    interval: Duration,
}

impl<F: Fetch, V: StatusView> StatusPoller<F, V> {
    pub fn new(client: ApiClient<F>, view: V, interval: Duration) -> Self {
        Self {
            client,
            view,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the status list once and update the view.
    ///
    /// On failure only the banner changes; cards from the previous
    /// successful poll stay on screen.
    pub async fn load(&self) -> Result<Vec<DiseaseStatus>> {
        match self.client.current_status().await {
            Ok(statuses) => {
                log::info!("Loaded status for {} diseases", statuses.len());
                self.view.show_status_cards(&statuses);
                self.view
                    .show_banner(&Banner::Alert(evaluate_status_alert(&statuses)));
                Ok(statuses)
            }
            Err(e) => {
                log::error!("Error loading current status: {}", e);
                self.view.show_banner(&Banner::ConnectivityError);
                Err(e)
            }
        }
    }

    /// Load now, then again after every `interval`, forever.
    ///
    /// `sleep` is the platform timer. Each tick is independent: a failed
    /// load is not retried early and the cadence never backs off.
    pub async fn run<S, Fut>(&self, mut sleep: S)
    where
        S: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        loop {
            // errors are already logged and shown on the banner
            let _ = self.load().await;
            sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertLevel;
    use crate::testing::{FakeFetch, RecordingView};

    const STATUS_BODY: &str = r#"[
        {"disease": "Dengue", "current_cases": 64, "date": "2024-03-01", "trend": "increasing"},
        {"disease": "Cholera", "current_cases": 12, "date": "2024-03-01", "trend": "decreasing"}
    ]"#;

    #[tokio::test]
    async fn load_replaces_cards_and_banner() {
        let fetch = FakeFetch::new().respond("/api/current_status", STATUS_BODY);
        let view = RecordingView::new();
        let poller = StatusPoller::new(ApiClient::new(&fetch), &view, Duration::from_secs(300));

        let statuses = poller.load().await.unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(view.status_cards().len(), 2);
        match view.banner() {
            Some(Banner::Alert(alert)) => {
                assert_eq!(alert.level, AlertLevel::Medium);
                assert_eq!(alert.disease.as_deref(), Some("Dengue"));
            }
            other => panic!("unexpected banner {:?}", other),
        }
    }

    #[tokio::test]
    async fn failure_keeps_existing_cards_and_shows_connectivity_banner() {
        let fetch = FakeFetch::new().respond("/api/current_status", STATUS_BODY);
        let view = RecordingView::new();
        let poller = StatusPoller::new(ApiClient::new(&fetch), &view, Duration::from_secs(300));
        poller.load().await.unwrap();

        fetch.fail("/api/current_status", "connection refused");
        assert!(poller.load().await.is_err());
        assert_eq!(view.status_cards().len(), 2);
        assert_eq!(view.banner(), Some(Banner::ConnectivityError));
    }

    #[tokio::test]
    async fn run_reloads_after_each_interval() {
        let fetch = FakeFetch::new().respond("/api/current_status", STATUS_BODY);
        let view = RecordingView::new();
        let poller = StatusPoller::new(ApiClient::new(&fetch), &view, Duration::from_secs(300));

        let sleeps = std::cell::RefCell::new(Vec::new());
        {
            let run = poller.run(|d| {
                sleeps.borrow_mut().push(d);
                tokio::task::yield_now()
            });
            // the loop never ends; stop it after three ticks
            let stop = async {
                while sleeps.borrow().len() < 3 {
                    tokio::task::yield_now().await;
                }
            };
            futures::pin_mut!(run);
            futures::pin_mut!(stop);
            futures::future::select(run, stop).await;
        }

        assert!(fetch.requests().len() >= 3);
        assert!(sleeps
            .borrow()
            .iter()
            .all(|d| *d == Duration::from_secs(300)));
    }
}
