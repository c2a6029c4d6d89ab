//! Request URL construction for Food Data Central.

use crate::fdc::FdcError;

/// Food Data Central endpoints the client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdcMethod {
    /// `POST {base}search`
    Search,
    /// `GET {base}{fdc_id}`
    Details(u64),
}

/// Builds the request URL for `method` without any query string.
///
/// The API key is attached by the client as an encoded query parameter.
pub fn build_request_url(api_url: &str, method: FdcMethod) -> Result<String, FdcError> {
    let api_url = api_url.trim();
    if api_url.is_empty() {
        return Err(FdcError::InvalidConfig("API URL is required".to_string()));
    }

    let separator = if api_url.ends_with('/') { "" } else { "/" };
    let path = match method {
        FdcMethod::Search => "search".to_string(),
        FdcMethod::Details(fdc_id) => fdc_id.to_string(),
    };

    Ok(format!("{api_url}{separator}{path}"))
}
