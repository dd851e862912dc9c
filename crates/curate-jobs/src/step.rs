//! The "fetch jobs" step: reacts to a trigger, walks the latest "Who is
//! hiring" thread, emits one event per parsed posting and records how the run
//! went.
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use curate_core::config::HackerNewsSettings;
use curate_core::traits::{EventSink, StateStore};
use curate_core::types::{FetchStatus, FetchTrigger, JobEvent, PostingRecord, SourceStatus};
use curate_core::Result;

use crate::error::FetchError;
use crate::hn::{HnItem, ItemSource};
use crate::parser::PostingParser;

pub const SOURCE_NAME: &str = "hackernews";
pub const ALL_SOURCES: &str = "all";
pub const EMIT_TOPIC: &str = "normalize-job";
pub const STATE_NAMESPACE: &str = "sources";
pub const NO_JOBS_ERROR: &str = "No jobs found";

pub struct FetchJobsStep {
    source: Arc<dyn ItemSource>,
    store: Arc<dyn StateStore>,
    sink: Arc<dyn EventSink>,
    parser: PostingParser,
    settings: HackerNewsSettings,
}

impl FetchJobsStep {
    pub fn new(
        source: Arc<dyn ItemSource>,
        store: Arc<dyn StateStore>,
        sink: Arc<dyn EventSink>,
        settings: HackerNewsSettings,
    ) -> Self {
        let parser = PostingParser::new(settings.item_url.clone());
        Self {
            source,
            store,
            sink,
            parser,
            settings,
        }
    }

    /// Whether a trigger addressed to `source` concerns this step.
    pub fn accepts(source: &str) -> bool {
        source == SOURCE_NAME || source == ALL_SOURCES
    }

    /// Run once. Returns `None` when the trigger is for another source, in
    /// which case nothing is fetched or persisted.
    pub async fn run(&self, trigger: &FetchTrigger) -> Result<Option<SourceStatus>> {
        if !Self::accepts(&trigger.source) {
            debug!(
                source = %trigger.source,
                "trigger is for another source, skipping"
            );
            return Ok(None);
        }
        info!(
            manual = trigger.manual.unwrap_or(false),
            "Fetching from HackerNews Who's Hiring"
        );

        let mut jobs_found = 0usize;
        let per_run = self.settings.threads_per_run;
        for &thread_id in self.settings.thread_ids.iter().take(per_run) {
            jobs_found += self.process_thread(thread_id).await;
        }

        let status = SourceStatus {
            last_fetch: Utc::now().to_rfc3339(),
            job_count: jobs_found,
            status: if jobs_found > 0 {
                FetchStatus::Success
            } else {
                FetchStatus::Error
            },
            error: (jobs_found == 0).then(|| NO_JOBS_ERROR.to_string()),
        };
        self.store
            .set(STATE_NAMESPACE, SOURCE_NAME, serde_json::to_value(&status)?)
            .await?;

        info!(total_jobs = jobs_found, "HackerNews fetch completed");
        Ok(Some(status))
    }

    /// Fetch, parse and emit one thread's comments. Returns the number of
    /// postings emitted; failures are logged, never propagated.
    async fn process_thread(&self, thread_id: u64) -> usize {
        let thread = match self.source.item(thread_id).await {
            Ok(Some(thread)) if !thread.kids.is_empty() => thread,
            Ok(_) => {
                warn!(thread_id, "Thread has no comments");
                return 0;
            }
            Err(e) => {
                error!(thread_id, error = %e, "Failed to fetch HN thread");
                return 0;
            }
        };
        info!(
            thread_id,
            comment_count = thread.kids.len(),
            "Processing HackerNews thread"
        );

        let mut jobs_found = 0;
        for posting in self.fetch_postings(&thread.kids).await {
            let event = JobEvent {
                source: SOURCE_NAME.to_string(),
                raw_job: posting,
            };
            match self.sink.emit(EMIT_TOPIC, &event).await {
                Ok(()) => jobs_found += 1,
                Err(e) => warn!(
                    comment_id = %event.raw_job.id,
                    error = %e,
                    "Failed to emit posting"
                ),
            }
        }

        info!(thread_id, jobs_found, "Processed HackerNews thread");
        jobs_found
    }

    /// Fetch up to `max_comments` comments and parse the usable ones, in
    /// thread order. One failed fetch never affects its siblings.
    pub async fn fetch_postings(&self, comment_ids: &[u64]) -> Vec<PostingRecord> {
        let source = &self.source;
        let results: Vec<(u64, std::result::Result<Option<HnItem>, FetchError>)> =
            stream::iter(comment_ids.iter().copied().take(self.settings.max_comments))
                .map(|id| async move { (id, source.item(id).await) })
                .buffered(self.settings.concurrency.max(1))
                .collect()
                .await;

        results
            .into_iter()
            .filter_map(|(comment_id, result)| match result {
                Ok(item) => item,
                Err(e) => {
                    warn!(comment_id, error = %e, "Failed to fetch comment");
                    None
                }
            })
            .filter(HnItem::is_candidate)
            .filter_map(|comment| self.parser.parse(&comment))
            .collect()
    }
}
