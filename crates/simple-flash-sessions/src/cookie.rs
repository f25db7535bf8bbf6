//! Session id extraction from the `Cookie` request header

/// Cookie name carrying the session id unless configured otherwise
pub const DEFAULT_SESSION_COOKIE: &str = "sessionid";

/// Extract the session id from a raw `Cookie` header value.
///
/// Returns `None` when the cookie is absent or empty.
///
/// # Examples
///
/// ```
/// use simple_flash_sessions::session_id_from_cookie_header;
///
/// let header = "theme=dark; sessionid=abc123; lang=en";
/// assert_eq!(session_id_from_cookie_header(header, "sessionid"), Some("abc123".to_string()));
/// assert_eq!(session_id_from_cookie_header(header, "missing"), None);
/// ```
pub fn session_id_from_cookie_header(header: &str, cookie_name: &str) -> Option<String> {
	for cookie in header.split(';') {
		let cookie = cookie.trim();
		if let Some((name, value)) = cookie.split_once('=')
			&& name.trim() == cookie_name
		{
			let value = value.trim().trim_matches('"');
			if value.is_empty() {
				return None;
			}
			return Some(value.to_string());
		}
	}
	None
}
