// ABOUTME: Logs command implementation.
// ABOUTME: One-shot fetch or 5-second polling with a since-cursor, like the widget refresh loop.

use chrono::{DateTime, Utc};
use std::io::Write;
use std::time::Duration;

use portside::api::LogQuery;
use portside::error::{Error, Result};
use portside::types::ContainerId;

use super::{client_for, load_instance, resolve_endpoint};

const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Fetch and print container logs, optionally polling for new output.
pub async fn logs(
    instance: Option<&str>,
    endpoint: Option<i64>,
    container: &str,
    tail: Option<u64>,
    since: Option<&str>,
    timestamps: bool,
    follow: bool,
) -> Result<()> {
    let instance = load_instance(instance)?;
    let client = client_for(&instance)?;
    let endpoint = resolve_endpoint(&instance, endpoint)?;
    let id = ContainerId::new(container);

    let mut since = parse_since(since)?;
    let mut tail = tail;

    loop {
        let fetched_at = Utc::now();
        let query = LogQuery {
            timestamps,
            tail,
            since,
        };
        let text = client.container_logs(&endpoint, &id, &query).await?;
        if !text.is_empty() {
            print!("{text}");
            std::io::stdout().flush()?;
        }

        if !follow {
            return Ok(());
        }

        // Next poll only asks for lines newer than this fetch.
        since = Some(fetched_at);
        tail = None;
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Accepts unix seconds or an RFC 3339 timestamp.
fn parse_since(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let Some(value) = value else {
        return Ok(None);
    };

    if let Ok(secs) = value.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| Error::InvalidConfig(format!("--since out of range: {value}")));
    }

    DateTime::parse_from_rfc3339(value)
        .map(|t| Some(t.with_timezone(&Utc)))
        .map_err(|_| Error::InvalidConfig(format!("invalid --since value: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_since_accepts_unix_seconds() {
        let parsed = parse_since(Some("1700000000")).unwrap().unwrap();
        assert_eq!(parsed.timestamp(), 1_700_000_000);
    }

    #[test]
    fn parse_since_accepts_rfc3339() {
        let parsed = parse_since(Some("2024-05-01T12:00:00Z")).unwrap().unwrap();
        assert_eq!(parsed.timestamp(), 1_714_564_800);
    }

    #[test]
    fn parse_since_rejects_garbage() {
        assert!(parse_since(Some("yesterday")).is_err());
    }

    #[test]
    fn parse_since_passes_none_through() {
        assert!(parse_since(None).unwrap().is_none());
    }
}
