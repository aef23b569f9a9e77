use std::time::Duration;

/// Fetches the body of a URL as text
///
/// Performs a blocking GET bounded by `timeout`. Connection failures,
/// timeouts and non-success status codes all surface as errors; callers
/// needing non-blocking behavior run this on their own thread.
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String, reqwest::Error> {
	let client = reqwest::blocking::Client::builder()
		.timeout(timeout)
		.build()?;
	let response = client.get(url).send()?;
	response.error_for_status()?.text()
}
