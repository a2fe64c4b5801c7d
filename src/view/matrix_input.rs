//! Matrix entry grid - text fields with a parse-or-null policy
//!
//! Unparsable or non-finite text never panics and never reaches the
//! controller; the caller shows a message and leaves the pending matrix
//! alone for that action.

use dioxus::prelude::*;

use crate::math::Mat2;

/// Parse one numeric field. None for anything that is not a finite number.
pub fn parse_entry(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse one numeric field, substituting `default` when the field is empty
pub fn parse_entry_or(text: &str, default: f64) -> Option<f64> {
    if text.trim().is_empty() {
        Some(default)
    } else {
        parse_entry(text)
    }
}

/// Assemble the pending matrix from the four entry fields
pub fn read_matrix(a11: &str, a12: &str, a21: &str, a22: &str) -> Option<Mat2> {
    Some(Mat2::new(
        parse_entry(a11)?,
        parse_entry(a12)?,
        parse_entry(a21)?,
        parse_entry(a22)?,
    ))
}

/// Write a matrix back into the four entry fields (preset buttons do this)
pub fn fill_entries(
    m: &Mat2,
    a11: &mut Signal<String>,
    a12: &mut Signal<String>,
    a21: &mut Signal<String>,
    a22: &mut Signal<String>,
) {
    a11.set(m.a11.to_string());
    a12.set(m.a12.to_string());
    a21.set(m.a21.to_string());
    a22.set(m.a22.to_string());
}

const ENTRY_STYLE: &str = "width: 64px; padding: 6px 8px; background: #111827; \
    color: #e5e7eb; border: 1px solid #2a2a4a; border-radius: 6px; \
    font-family: monospace; font-size: 14px; text-align: center;";

/// One matrix entry field
#[component]
pub fn Entry(mut value: Signal<String>, label: String, disabled: bool) -> Element {
    rsx! {
        input {
            r#type: "text",
            style: ENTRY_STYLE,
            value: "{value}",
            disabled,
            "aria-label": "{label}",
            oninput: move |e: Event<FormData>| value.set(e.value()),
        }
    }
}

/// The 2x2 entry grid
#[component]
pub fn MatrixGrid(
    a11: Signal<String>,
    a12: Signal<String>,
    a21: Signal<String>,
    a22: Signal<String>,
    disabled: bool,
) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: auto auto; gap: 6px;",
            Entry { value: a11, label: "a11", disabled }
            Entry { value: a12, label: "a12", disabled }
            Entry { value: a21, label: "a21", disabled }
            Entry { value: a22, label: "a22", disabled }
        }
    }
}
