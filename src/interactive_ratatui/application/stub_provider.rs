use crate::provider::{MovieProvider, ProviderError, ProviderResult};
use crate::schemas::{MovieDetail, MovieSummary};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum StubReply<T> {
    Ok(T),
    NoMatch,
    Status(u16),
}

impl<T: Clone> StubReply<T> {
    fn to_result(&self) -> ProviderResult<T> {
        match self {
            StubReply::Ok(value) => Ok(value.clone()),
            StubReply::NoMatch => Err(ProviderError::NotFound("Movie not found!".to_string())),
            StubReply::Status(code) => Err(ProviderError::Status(*code)),
        }
    }
}

/// In-memory provider with per-key latency, recording every call.
#[derive(Clone, Default)]
pub struct StubProvider {
    searches: HashMap<String, (Duration, StubReply<Vec<MovieSummary>>)>,
    details: HashMap<String, (Duration, StubReply<MovieDetail>)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(
        mut self,
        query: &str,
        delay: Duration,
        reply: StubReply<Vec<MovieSummary>>,
    ) -> Self {
        self.searches.insert(query.to_string(), (delay, reply));
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail, delay: Duration) -> Self {
        self.details
            .insert(detail.id.clone(), (delay, StubReply::Ok(detail)));
        self
    }

    pub fn with_detail_failure(mut self, id: &str, code: u16) -> Self {
        self.details
            .insert(id.to_string(), (Duration::ZERO, StubReply::Status(code)));
        self
    }

    /// Calls in arrival order, as `s:<query>` or `i:<id>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl MovieProvider for StubProvider {
    async fn search(&self, query: &str) -> ProviderResult<Vec<MovieSummary>> {
        self.record(format!("s:{query}"));
        let (delay, reply) = self
            .searches
            .get(query)
            .cloned()
            .unwrap_or((Duration::ZERO, StubReply::NoMatch));
        tokio::time::sleep(delay).await;
        reply.to_result()
    }

    async fn details(&self, id: &str) -> ProviderResult<MovieDetail> {
        self.record(format!("i:{id}"));
        let (delay, reply) = self
            .details
            .get(id)
            .cloned()
            .unwrap_or((Duration::ZERO, StubReply::NoMatch));
        tokio::time::sleep(delay).await;
        reply.to_result()
    }
}

pub fn summary(id: &str, title: &str, year: &str) -> MovieSummary {
    MovieSummary {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster_url: "N/A".to_string(),
    }
}

pub fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        year: "2022".to_string(),
        poster_url: "N/A".to_string(),
        runtime: "176 min".to_string(),
        genre: "Action, Crime".to_string(),
        imdb_rating: "7.8".to_string(),
        plot: format!("The plot of {title}."),
        actors: "Robert Pattinson".to_string(),
        director: "Matt Reeves".to_string(),
    }
}
