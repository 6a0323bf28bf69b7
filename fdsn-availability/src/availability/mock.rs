//! Mock availability source for testing without network access.
//!
//! Serves one canned reply for every query and records how often it was
//! asked, so tests can assert that no request happened at all.

use std::sync::Mutex;

use super::client::{AvailabilitySource, accept_status};
use super::error::AvailabilityError;
use super::query::ExtentQuery;

/// What the mock answers with.
#[derive(Debug, Clone)]
enum MockReply {
    Response { status: u16, body: String },
    Timeout { secs: u64 },
}

/// Mock source that answers every query with the same reply.
#[derive(Debug)]
pub struct MockAvailabilitySource {
    reply: MockReply,
    queries: Mutex<Vec<ExtentQuery>>,
}

impl MockAvailabilitySource {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Answer with status 200 and the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    /// Answer with an arbitrary status and body.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Response {
            status,
            body: body.into(),
        })
    }

    /// Fail every query as if the service never answered.
    pub fn timing_out(secs: u64) -> Self {
        Self::with_reply(MockReply::Timeout { secs })
    }

    /// Number of queries received so far.
    pub fn call_count(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or_default()
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<ExtentQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl AvailabilitySource for MockAvailabilitySource {
    async fn fetch_availability(&self, query: &ExtentQuery) -> Result<String, AvailabilityError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }

        match &self.reply {
            MockReply::Response { status, body } => accept_status(*status, body.clone()),
            MockReply::Timeout { secs } => Err(AvailabilityError::Timeout { secs: *secs }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NetworkCode, StationPattern};

    fn query() -> ExtentQuery {
        ExtentQuery::new(
            NetworkCode::parse("IM").unwrap(),
            StationPattern::parse("TX01").unwrap(),
        )
    }

    #[tokio::test]
    async fn counts_and_records_queries() {
        let mock = MockAvailabilitySource::ok("");
        assert_eq!(mock.call_count(), 0);

        mock.fetch_availability(&query()).await.unwrap();
        mock.fetch_availability(&query()).await.unwrap();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.queries()[0], query());
    }

    #[tokio::test]
    async fn non_200_is_a_service_error() {
        let mock = MockAvailabilitySource::with_status(404, "Not Found");
        let err = mock.fetch_availability(&query()).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn timeout_reply() {
        let mock = MockAvailabilitySource::timing_out(30);
        let err = mock.fetch_availability(&query()).await.unwrap_err();
        assert!(matches!(err, AvailabilityError::Timeout { secs: 30 }));
    }
}
