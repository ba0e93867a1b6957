//! Message labels for request and response arrows.

use crate::archive::NameValue;

/// `get` + `widget` → `getWidget`.
pub fn method_label(method: &str, resource: &str) -> String {
    let mut label = method.trim().to_lowercase();
    let mut chars = resource.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
        label.push_str(chars.as_str());
    }
    label
}

/// Query parameter names, then path parameter names, comma separated.
/// Unnamed parameters are skipped.
pub fn argument_list(query: &[NameValue], path: &[NameValue]) -> String {
    query
        .iter()
        .chain(path)
        .map(|p| p.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `getWidgets(id, page)`; an empty argument list renders as `()`.
pub fn request_label(method: &str, resource: &str, arguments: &str) -> String {
    format!("{}({})", method_label(method, resource), arguments)
}

/// `200(widgets)`, or `404(widgets Not Found)` for non-200 statuses that
/// carry a status text.
pub fn response_label(status: u16, resource: &str, status_text: Option<&str>) -> String {
    let suffix = match status {
        200 => None,
        _ => status_text.map(str::trim).filter(|t| !t.is_empty()),
    };
    match suffix {
        Some(text) => format!("{status}({resource} {text})"),
        None => format!("{status}({resource})"),
    }
}
