//! Individual document checks.
//!
//! Paths use dotted keys with `[i]` for sequence indices, e.g.
//! `spec.layouts[0].spec.items[1].content.$ref`.

use std::sync::OnceLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use super::Finding;
use crate::models::DASHBOARD_KIND;

/// Panel plugin kinds Logfire is known to render.
///
/// Unknown kinds are warnings only: this list can lag behind the dashboard schema.
pub const PANEL_PLUGIN_KINDS: &[&str] = &[
    "BarChart",
    "GaugeChart",
    "HeatmapChart",
    "HistogramChart",
    "LogsTable",
    "Markdown",
    "PieChart",
    "ScatterChart",
    "StatChart",
    "StatusHistoryChart",
    "Table",
    "TimeSeriesChart",
    "TimeSeriesTable",
    "TraceTable",
    "TracingGanttChart",
];

const TIME_SERIES_QUERY_KIND: &str = "TimeSeriesQuery";
const RESOLUTION_PLACEHOLDER: &str = "$resolution";
const PANEL_REF_PREFIX: &str = "#/spec/panels/";

static ORDER_BY_RE: OnceLock<Regex> = OnceLock::new();

fn order_by_re() -> &'static Regex {
    ORDER_BY_RE.get_or_init(|| {
        Regex::new(r"(?i)\border\s+by\b")
            .expect("ORDER BY pattern is a compile-time constant with valid syntax")
    })
}

pub(super) fn run_all(document: &Value, findings: &mut Vec<Finding>) {
    let Some(root) = document.as_mapping() else {
        findings.push(Finding::error(
            "document must be a mapping with kind, metadata and spec",
            "$",
        ));
        return;
    };

    check_kind(root, findings);
    check_metadata_name(root, findings);

    let Some(spec) = root.get("spec").and_then(Value::as_mapping) else {
        findings.push(Finding::error("spec is required and must be a mapping", "spec"));
        return;
    };

    let panels = match spec.get("panels") {
        None | Some(Value::Null) => None,
        Some(Value::Mapping(panels)) => Some(panels),
        Some(_) => {
            findings.push(Finding::error("panels must be a mapping", "spec.panels"));
            None
        }
    };

    if let Some(panels) = panels {
        for (key, panel) in panels {
            let key = key_label(key);
            let base = format!("spec.panels.{key}");
            check_panel_plugin(&key, &base, panel, findings);
            check_panel_queries(&key, &base, panel, findings);
        }
    }

    check_layout_refs(spec, panels, findings);
}

fn check_kind(root: &Mapping, findings: &mut Vec<Finding>) {
    match root.get("kind").and_then(Value::as_str) {
        Some(DASHBOARD_KIND) => {}
        Some(other) => findings.push(Finding::error(
            format!("kind must be '{DASHBOARD_KIND}', found '{other}'"),
            "kind",
        )),
        None => findings.push(Finding::error(
            format!("kind is required and must be '{DASHBOARD_KIND}'"),
            "kind",
        )),
    }
}

fn check_metadata_name(root: &Mapping, findings: &mut Vec<Finding>) {
    let name = root
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .map(str::trim);

    if name.is_none_or(str::is_empty) {
        findings.push(Finding::error(
            "metadata.name is required and must be a non-empty string",
            "metadata.name",
        ));
    }
}

fn check_panel_plugin(key: &str, base: &str, panel: &Value, findings: &mut Vec<Finding>) {
    let path = format!("{base}.spec.plugin.kind");
    let kind = panel
        .get("spec")
        .and_then(|s| s.get("plugin"))
        .and_then(|p| p.get("kind"))
        .and_then(Value::as_str);

    match kind {
        Some(kind) if PANEL_PLUGIN_KINDS.contains(&kind) => {}
        Some(kind) => findings.push(Finding::warning(
            format!("panel '{key}' uses unrecognized plugin kind '{kind}'"),
            path,
        )),
        None => findings.push(Finding::warning(
            format!("panel '{key}' has no plugin kind"),
            path,
        )),
    }
}

fn check_panel_queries(key: &str, base: &str, panel: &Value, findings: &mut Vec<Finding>) {
    let Some(queries) = panel
        .get("spec")
        .and_then(|s| s.get("queries"))
        .and_then(Value::as_sequence)
    else {
        return;
    };

    for (i, query) in queries.iter().enumerate() {
        if query.get("kind").and_then(Value::as_str) != Some(TIME_SERIES_QUERY_KIND) {
            continue;
        }
        let path = format!("{base}.spec.queries[{i}].spec.plugin.spec.query");
        let text = query
            .get("spec")
            .and_then(|s| s.get("plugin"))
            .and_then(|p| p.get("spec"))
            .and_then(|s| s.get("query"))
            .and_then(Value::as_str);

        let Some(text) = text else {
            findings.push(Finding::warning(
                format!("panel '{key}' query {i} has no query text"),
                path,
            ));
            continue;
        };

        if !text.contains(RESOLUTION_PLACEHOLDER) {
            findings.push(Finding::warning(
                format!(
                    "panel '{key}' query {i} does not use {RESOLUTION_PLACEHOLDER}; buckets will not follow the time range"
                ),
                path.clone(),
            ));
        }
        if !order_by_re().is_match(text) {
            findings.push(Finding::warning(
                format!("panel '{key}' query {i} has no ORDER BY clause"),
                path,
            ));
        }
    }
}

fn check_layout_refs(spec: &Mapping, panels: Option<&Mapping>, findings: &mut Vec<Finding>) {
    let Some(layouts) = spec.get("layouts").and_then(Value::as_sequence) else {
        return;
    };

    for (i, layout) in layouts.iter().enumerate() {
        let Some(items) = layout
            .get("spec")
            .and_then(|s| s.get("items"))
            .and_then(Value::as_sequence)
        else {
            continue;
        };

        for (j, item) in items.iter().enumerate() {
            let Some(reference) = item.get("content").and_then(|c| c.get("$ref")) else {
                continue;
            };
            let path = format!("spec.layouts[{i}].spec.items[{j}].content.$ref");

            let Some(pointer) = reference.as_str() else {
                findings.push(Finding::error("panel reference must be a string", path));
                continue;
            };

            match panel_key(pointer) {
                None => findings.push(Finding::error(
                    format!("malformed panel reference '{pointer}', expected {PANEL_REF_PREFIX}<key>"),
                    path,
                )),
                Some(key) if !panels.is_some_and(|p| p.contains_key(key.as_str())) => {
                    findings.push(Finding::error(
                        format!("layout references missing panel '{pointer}'"),
                        path,
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

/// Extract the panel key from `#/spec/panels/<key>`, undoing JSON pointer escapes.
fn panel_key(pointer: &str) -> Option<String> {
    let raw = pointer.strip_prefix(PANEL_REF_PREFIX)?;
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    Some(raw.replace("~1", "/").replace("~0", "~"))
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "?".to_string()),
    }
}
