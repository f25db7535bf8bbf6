//! Positional `%s` slot formatting for template wrappers

/// Substitute `args` into the `%s` slots of `format`, in order.
///
/// `%%` yields a literal `%`. A slot without a matching argument renders as
/// nothing and surplus arguments are ignored. Substituted text is never
/// scanned for further slots.
///
/// # Examples
///
/// ```
/// use simple_flash_messages::template::fill_slots;
///
/// let html = fill_slots(r#"<div class="alert-%s">%s</div>"#, &["info", "Hello"]);
/// assert_eq!(html, r#"<div class="alert-info">Hello</div>"#);
///
/// assert_eq!(fill_slots("100%% %s", &["done"]), "100% done");
/// ```
pub fn fill_slots(format: &str, args: &[&str]) -> String {
	let capacity = format.len() + args.iter().map(|arg| arg.len()).sum::<usize>();
	let mut out = String::with_capacity(capacity);
	let mut args = args.iter();
	let mut chars = format.chars().peekable();

	while let Some(c) = chars.next() {
		if c != '%' {
			out.push(c);
			continue;
		}
		match chars.peek() {
			Some('s') => {
				chars.next();
				if let Some(arg) = args.next() {
					out.push_str(arg);
				}
			}
			Some('%') => {
				chars.next();
				out.push('%');
			}
			_ => out.push('%'),
		}
	}

	out
}
