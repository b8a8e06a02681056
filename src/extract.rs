/// Return the text strictly between the first two `'` characters of `msg`.
///
/// Fewer than two quotes yields an empty string rather than an error; callers
/// decide whether an empty operand is acceptable.
pub fn extract_payload(msg: &str) -> &str {
    let mut parts = msg.splitn(3, '\'');
    let _before = parts.next();
    match (parts.next(), parts.next()) {
        (Some(inner), Some(_)) => inner,
        _ => "",
    }
}
