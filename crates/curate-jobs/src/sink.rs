//! `EventSink` implementations.
use async_trait::async_trait;
use serde::Serialize;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use curate_core::traits::EventSink;
use curate_core::types::JobEvent;
use curate_core::{Error, Result};

#[derive(Serialize)]
struct Envelope<'a> {
    topic: &'a str,
    data: &'a JobEvent,
}

/// Writes one `{"topic": ..., "data": ...}` JSON object per line.
pub struct NdjsonSink<W: Write + Send + 'static> {
    out: Mutex<W>,
}

impl NdjsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send + 'static> NdjsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|e| Error::Emit(e.to_string()))
    }
}

#[async_trait]
impl<W: Write + Send + 'static> EventSink for NdjsonSink<W> {
    async fn emit(&self, topic: &str, event: &JobEvent) -> Result<()> {
        let line = serde_json::to_string(&Envelope { topic, data: event })?;
        let mut out = self.out.lock().map_err(|e| Error::Emit(e.to_string()))?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps every emitted event in memory, in emit order.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<(String, JobEvent)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, JobEvent)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn emit(&self, topic: &str, event: &JobEvent) -> Result<()> {
        let mut events = self.events.lock().map_err(|e| Error::Emit(e.to_string()))?;
        events.push((topic.to_string(), event.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curate_core::types::PostingRecord;
    use std::sync::Arc;

    fn event(id: &str) -> JobEvent {
        JobEvent {
            source: "hackernews".into(),
            raw_job: PostingRecord {
                id: id.into(),
                company: "Acme".into(),
                title: "Engineer".into(),
                location: "Remote".into(),
                description: String::new(),
                url: format!("https://news.ycombinator.com/item?id={id}"),
                posted_at: 0,
            },
        }
    }

    #[tokio::test]
    async fn poisoned_memory_sink_still_reports_events() {
        let sink = Arc::new(MemorySink::new());
        sink.emit("normalize-job", &event("1")).await.unwrap();

        let poisoner = Arc::clone(&sink);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.events.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(sink.events.is_poisoned());
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1.raw_job.id, "1");
    }
}
