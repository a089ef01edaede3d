//! Window-bootstrap (`main.js`) configuration view and in-place editor.
//!
//! The script text is authoritative. [`derive_config`] recovers a
//! [`BootstrapConfig`] from it and [`apply_edit`] splices a single field
//! change back in, leaving unrelated code, comments and formatting intact.
//! Recognition is pattern based: an unmatched pattern degrades to the field
//! default on read and to a no-op or an anchored insertion on write.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Match, Regex};
use serde::Serialize;

use crate::domain::AppError;

static WIDTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"width:\s*(\d+)").expect("valid regex"));
static HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"height:\s*(\d+)").expect("valid regex"));
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"title:\s*'((?:[^'\\]|\\.)*)'").expect("valid regex"));
static NODE_INTEGRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"nodeIntegration:\s*(true|false)").expect("valid regex"));
static CONTEXT_ISOLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"contextIsolation:\s*(true|false)").expect("valid regex"));

static MENU_HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:win|mainWindow)\.setMenuBarVisibility\(false\)").expect("valid regex")
});
static MENU_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?://[ \t]*)?(?:win|mainWindow)\.setMenuBarVisibility\((?:true|false)\);?[^\r\n]*(?:\r?\n)?",
    )
    .expect("valid regex")
});

static DEVTOOLS_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:win|mainWindow)\.webContents\.openDevTools\(\)").expect("valid regex")
});
static DEVTOOLS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^([ \t]*)(?://[ \t]*)?(win|mainWindow)\.webContents\.openDevTools\(\);?[^\r\n]*",
    )
    .expect("valid regex")
});

/// Window construction statement, e.g. `win = new BrowserWindow({ ... });`.
static CONSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:const|let|var)\s+)?(win|mainWindow)\s*=\s*new BrowserWindow\(\{[\s\S]+?\}\);",
    )
    .expect("valid regex")
});
static CONSTRUCTION_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new BrowserWindow\(\{").expect("valid regex"));
static LOAD_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(win|mainWindow)\.(?:loadFile|loadURL)\(.*\);").expect("valid regex")
});
static LOAD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(win|mainWindow)\.(?:loadFile|loadURL)\(").expect("valid regex")
});
/// A blank line directly followed by the content-load call.
static BLANK_THEN_LOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[ \t]*\r?\n[ \t]*(?:win|mainWindow)\.(?:loadFile|loadURL)\(").expect("valid regex")
});
static CREATE_FN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"createWindow\(\)\s*\{").expect("valid regex"));
static WINDOW_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:let|const|var)\s+(win|mainWindow)\b").expect("valid regex")
});
static WINDOW_USE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(win|mainWindow)\.").expect("valid regex"));

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n){2,}").expect("valid regex"));

const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 800;
const BODY_INDENT: &str = "  ";

/// Common window resolutions offered as presets.
pub const RESOLUTION_PRESETS: [(&str, u32, u32); 5] = [
    ("1280 x 720 (HD)", 1280, 720),
    ("1366 x 768 (Laptop)", 1366, 768),
    ("1600 x 900", 1600, 900),
    ("1920 x 1080 (Full HD)", 1920, 1080),
    ("2560 x 1440 (QHD)", 2560, 1440),
];

/// Window settings recovered from a bootstrap script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub menu_bar_visible: bool,
    pub node_integration: bool,
    pub context_isolation: bool,
    pub open_dev_tools: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: String::new(),
            menu_bar_visible: true,
            node_integration: false,
            context_isolation: true,
            open_dev_tools: false,
        }
    }
}

impl BootstrapConfig {
    /// Settings of a freshly generated `main.js`.
    pub fn for_app(title: impl Into<String>) -> Self {
        Self {
            width: 800,
            height: 600,
            title: title.into(),
            menu_bar_visible: false,
            ..Self::default()
        }
    }
}

/// A single field change applied by [`apply_edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEdit {
    Width(u32),
    Height(u32),
    Title(String),
    MenuBarVisible(bool),
    NodeIntegration(bool),
    ContextIsolation(bool),
    OpenDevTools(bool),
}

impl BootstrapEdit {
    pub fn field_name(&self) -> &'static str {
        match self {
            BootstrapEdit::Width(_) => "width",
            BootstrapEdit::Height(_) => "height",
            BootstrapEdit::Title(_) => "title",
            BootstrapEdit::MenuBarVisible(_) => "menuBarVisible",
            BootstrapEdit::NodeIntegration(_) => "nodeIntegration",
            BootstrapEdit::ContextIsolation(_) => "contextIsolation",
            BootstrapEdit::OpenDevTools(_) => "openDevTools",
        }
    }
}

impl fmt::Display for BootstrapEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapEdit::Width(v) | BootstrapEdit::Height(v) => {
                write!(f, "{}={}", self.field_name(), v)
            }
            BootstrapEdit::Title(v) => write!(f, "{}={}", self.field_name(), v),
            BootstrapEdit::MenuBarVisible(v)
            | BootstrapEdit::NodeIntegration(v)
            | BootstrapEdit::ContextIsolation(v)
            | BootstrapEdit::OpenDevTools(v) => write!(f, "{}={}", self.field_name(), v),
        }
    }
}

impl FromStr for BootstrapEdit {
    type Err = AppError;

    /// Parse `field=value`. Field names are accepted in camelCase, snake_case or kebab-case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s.split_once('=').ok_or_else(|| {
            AppError::Validation(format!("Invalid edit '{}': expected field=value", s))
        })?;
        let key: String =
            field.trim().chars().filter(|c| *c != '_' && *c != '-').collect::<String>().to_lowercase();

        match key.as_str() {
            "width" => Ok(BootstrapEdit::Width(parse_dimension(field, value)?)),
            "height" => Ok(BootstrapEdit::Height(parse_dimension(field, value)?)),
            "title" => Ok(BootstrapEdit::Title(value.to_string())),
            "menubarvisible" | "menubar" => Ok(BootstrapEdit::MenuBarVisible(parse_bool(field, value)?)),
            "nodeintegration" => Ok(BootstrapEdit::NodeIntegration(parse_bool(field, value)?)),
            "contextisolation" => Ok(BootstrapEdit::ContextIsolation(parse_bool(field, value)?)),
            "opendevtools" | "devtools" => Ok(BootstrapEdit::OpenDevTools(parse_bool(field, value)?)),
            _ => Err(AppError::Validation(format!(
                "Unknown main.js field '{}'. Expected one of: width, height, title, menuBarVisible, \
                 nodeIntegration, contextIsolation, openDevTools",
                field.trim()
            ))),
        }
    }
}

fn parse_dimension(field: &str, value: &str) -> Result<u32, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::Validation(format!("Invalid value '{}' for {}: expected a whole number", value, field))
    })
}

fn parse_bool(field: &str, value: &str) -> Result<bool, AppError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(AppError::Validation(format!(
            "Invalid value '{}' for {}: expected true or false",
            other, field
        ))),
    }
}

/// Recover the window settings from a bootstrap script.
pub fn derive_config(script: &str) -> BootstrapConfig {
    let defaults = BootstrapConfig::default();

    BootstrapConfig {
        width: capture(&WIDTH, script).and_then(|v| v.parse().ok()).unwrap_or(defaults.width),
        height: capture(&HEIGHT, script).and_then(|v| v.parse().ok()).unwrap_or(defaults.height),
        title: capture(&TITLE, script).map(unescape_single_quoted).unwrap_or(defaults.title),
        menu_bar_visible: !MENU_HIDDEN.is_match(script),
        node_integration: capture(&NODE_INTEGRATION, script)
            .map(|v| v == "true")
            .unwrap_or(defaults.node_integration),
        context_isolation: capture(&CONTEXT_ISOLATION, script)
            .map(|v| v == "true")
            .unwrap_or(defaults.context_isolation),
        open_dev_tools: DEVTOOLS_OPEN.is_match(script),
    }
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Apply one field change to the script text and return the whole updated text.
///
/// Never fails: a missing pattern makes the edit a no-op or an insertion next
/// to the first available anchor.
pub fn apply_edit(script: &str, edit: &BootstrapEdit) -> String {
    match edit {
        BootstrapEdit::Width(value) => substitute(script, &WIDTH, &format!("width: {}", value)),
        BootstrapEdit::Height(value) => substitute(script, &HEIGHT, &format!("height: {}", value)),
        BootstrapEdit::Title(value) => set_title(script, value),
        BootstrapEdit::MenuBarVisible(visible) => set_menu_bar_visible(script, *visible),
        BootstrapEdit::NodeIntegration(value) => {
            substitute(script, &NODE_INTEGRATION, &format!("nodeIntegration: {}", value))
        }
        BootstrapEdit::ContextIsolation(value) => {
            substitute(script, &CONTEXT_ISOLATION, &format!("contextIsolation: {}", value))
        }
        BootstrapEdit::OpenDevTools(open) => set_open_dev_tools(script, *open),
    }
}

/// Apply a resolution preset (two in-place edits).
pub fn apply_resolution(script: &str, width: u32, height: u32) -> String {
    let script = apply_edit(script, &BootstrapEdit::Width(width));
    apply_edit(&script, &BootstrapEdit::Height(height))
}

/// Parse `WIDTHxHEIGHT` (`x` or `X`), or the 1-based index of a preset.
pub fn parse_resolution(text: &str) -> Result<(u32, u32), AppError> {
    let text = text.trim();
    if let Ok(index) = text.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| RESOLUTION_PRESETS.get(i))
            .map(|(_, w, h)| (*w, *h))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown preset {}: expected 1-{}",
                    index,
                    RESOLUTION_PRESETS.len()
                ))
            });
    }

    let invalid = || {
        AppError::Validation(format!("Invalid resolution '{}': expected WIDTHxHEIGHT", text))
    };
    let (width, height) = text.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = width.trim().parse().map_err(|_| invalid())?;
    let height = height.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}

fn substitute(script: &str, pattern: &Regex, replacement: &str) -> String {
    if !pattern.is_match(script) {
        log::debug!("pattern {} not found; edit skipped", pattern.as_str());
        return script.to_string();
    }
    pattern.replace(script, regex::NoExpand(replacement)).into_owned()
}

fn set_title(script: &str, title: &str) -> String {
    let literal = format!("title: '{}'", escape_single_quoted(title));

    if TITLE.is_match(script) {
        return TITLE.replace(script, regex::NoExpand(&literal)).into_owned();
    }

    match CONSTRUCTION_OPEN.find(script) {
        Some(anchor) => {
            collapse_blank_runs(&insert_after(script, anchor, &format!("    {},", literal)))
        }
        None => {
            log::debug!("no BrowserWindow construction found; title not inserted");
            script.to_string()
        }
    }
}

fn set_menu_bar_visible(script: &str, visible: bool) -> String {
    let text = remove_menu_lines(script);

    if visible {
        collapse_blank_runs(&text)
    } else {
        collapse_blank_runs(&insert_menu_bar_call(&text))
    }
}

/// Drop every menu-bar line with its line break. Without a construction
/// statement the call sits above the load line and also owns the blank line
/// separating them.
fn remove_menu_lines(script: &str) -> String {
    let owns_blank_line = !CONSTRUCTION.is_match(script);
    let mut out = String::with_capacity(script.len());
    let mut last = 0;

    for found in MENU_LINE.find_iter(script) {
        out.push_str(&script[last..found.start()]);
        last = found.end();
        if owns_blank_line && BLANK_THEN_LOAD.is_match(&script[last..]) {
            last += script[last..].find('\n').map_or(0, |i| i + 1);
        }
    }
    out.push_str(&script[last..]);
    out
}

/// Insert the hiding call after the construction statement, else above the
/// content-load line, else at the top of `createWindow()`.
fn insert_menu_bar_call(text: &str) -> String {
    if let Some(caps) = CONSTRUCTION.captures(text) {
        let (anchor, var) = anchor_and_var(&caps);
        let line = format!("{}{}.setMenuBarVisibility(false);", line_indent(text, anchor.start()), var);
        return insert_after(text, anchor, &line);
    }

    if let Some(caps) = LOAD_LINE.captures(text) {
        let (anchor, var) = anchor_and_var(&caps);
        let eol = line_ending(text, anchor.start());
        let mut out = String::with_capacity(text.len() + 48);
        out.push_str(&text[..anchor.start()]);
        out.push_str(line_indent(text, anchor.end()));
        out.push_str(var);
        out.push_str(".setMenuBarVisibility(false);");
        out.push_str(eol);
        out.push_str(eol);
        out.push_str(&text[anchor.start()..]);
        return out;
    }

    if let Some(anchor) = CREATE_FN.find(text) {
        let line = format!("{}{}.setMenuBarVisibility(false);", body_indent(text, anchor.end()), window_var(text));
        return insert_after(text, anchor, &line);
    }

    log::debug!("no window anchor found; menu bar call not inserted");
    text.to_string()
}

fn set_open_dev_tools(script: &str, open: bool) -> String {
    let call_line = |indent: &str, var: &str| {
        if open {
            format!("{}{}.webContents.openDevTools();", indent, var)
        } else {
            format!("{}// {}.webContents.openDevTools();", indent, var)
        }
    };

    let text = if let Some(caps) = DEVTOOLS_LINE.captures(script) {
        let whole = caps.get(0).expect("group 0 always matches");
        let mut text = String::with_capacity(script.len());
        text.push_str(&script[..whole.start()]);
        text.push_str(&call_line(&caps[1], &caps[2]));
        text.push_str(&script[whole.end()..]);
        text
    } else if let Some(caps) = LOAD_CALL.captures(script) {
        let (anchor, var) = anchor_and_var(&caps);
        insert_after(script, anchor, &call_line(line_indent(script, anchor.start()), var))
    } else if let Some(caps) = CONSTRUCTION.captures(script) {
        let (anchor, var) = anchor_and_var(&caps);
        insert_after(script, anchor, &call_line(line_indent(script, anchor.start()), var))
    } else if let Some(anchor) = CREATE_FN.find(script) {
        insert_after(script, anchor, &call_line(body_indent(script, anchor.end()), window_var(script)))
    } else {
        log::debug!("no window anchor found; devtools call not inserted");
        script.to_string()
    };

    collapse_blank_runs(&text)
}

fn anchor_and_var<'t>(caps: &Captures<'t>) -> (Match<'t>, &'t str) {
    let anchor = caps.get(0).expect("group 0 always matches");
    let var = caps.get(1).map_or("win", |m| m.as_str());
    (anchor, var)
}

fn insert_after(text: &str, anchor: Match<'_>, line: &str) -> String {
    let mut out = String::with_capacity(text.len() + line.len() + 2);
    out.push_str(&text[..anchor.end()]);
    out.push_str(line_ending(text, anchor.end()));
    out.push_str(line);
    out.push_str(&text[anchor.end()..]);
    out
}

/// Line break of the line containing `pos`, else the one the text uses.
fn line_ending(text: &str, pos: usize) -> &'static str {
    let crlf = match text[pos..].find('\n') {
        Some(i) => text[..pos + i].ends_with('\r'),
        None => text.contains("\r\n"),
    };
    if crlf { "\r\n" } else { "\n" }
}

/// Window variable declared (or else used) by the script.
fn window_var(text: &str) -> &str {
    capture(&WINDOW_DECL, text).or_else(|| capture(&WINDOW_USE, text)).unwrap_or("win")
}

/// Indentation of the first statement after `pos`, for a body opened there.
fn body_indent(text: &str, pos: usize) -> &str {
    let rest = &text[pos..];
    let next_line = rest
        .split_once('\n')
        .map(|(_, after)| after.split(['\r', '\n']).next().unwrap_or(""))
        .unwrap_or("");
    let body = next_line.trim_start_matches([' ', '\t']);
    let indent = &next_line[..next_line.len() - body.len()];
    if body.is_empty() || body.starts_with('}') || indent.is_empty() { BODY_INDENT } else { indent }
}

/// Leading whitespace of the line containing `pos`.
fn line_indent(text: &str, pos: usize) -> &str {
    let start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &text[start..pos];
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}

/// Collapse three or more consecutive line breaks (blank lines may hold
/// whitespace) into a single blank line. Indentation of the following line is kept.
fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUN
        .replace_all(text, |caps: &Captures| {
            if caps[0].starts_with("\r\n") { "\r\n\r\n" } else { "\n\n" }
        })
        .into_owned()
}

pub(crate) fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn unescape_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
