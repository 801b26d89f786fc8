use std::time::Duration;

use crate::error::{Error, Result};

/// Some sites answer bots with an error page; a browser-like user-agent
/// gets the same markup a visitor sees.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetch a page and return the decoded body. One blocking request, no
/// retries; any transport failure or non-success status is fatal.
pub fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()?;

    log::debug!("Fetching {url}");
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(Error::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    Ok(response.text()?)
}

/// The public event page for a numbered UFC event.
pub fn event_url(event_number: u32) -> String {
    format!("https://www.ufc.com/event/ufc-{event_number}")
}
