//! # Caller Locator
//!
//! Resolves the `path:line` of the code that called an assertion, optionally
//! skipping extra frames above it.
//!
//! - Depth 0 comes from `#[track_caller]`: the immediate caller of the
//!   assertion primitive. No stack walk.
//! - Depth N walks the stack, anchors on the depth-0 frame, then steps N
//!   frames outward.
//!
//! Resolution never fails. A walk that cannot reach the requested frame falls
//! back to the depth-0 location; the assertion's verdict does not depend on it.

use crate::settings::Settings;
use backtrace::{Backtrace, BacktraceSymbol};
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// SOURCE LOCATION
// =============================================================================

/// A resolved stack frame: source file and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file as reported by the compiler or the debug info.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: u32,
}

impl SourceLocation {
    /// Create a new location.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Render as `path:line` using the given settings.
    #[must_use]
    pub fn render(&self, settings: &Settings) -> String {
        format!("{}:{}", settings.path_style.render(&self.file), self.line)
    }

    /// Whether `self` and `other` name the same line of the same file.
    ///
    /// Compiler locations are usually relative to the workspace while debug
    /// info paths are absolute, so files match on a path suffix.
    #[must_use]
    pub fn same_site(&self, other: &SourceLocation) -> bool {
        self.line == other.line
            && (self.file.ends_with(&other.file) || other.file.ends_with(&self.file))
    }

    fn from_symbol(symbol: &BacktraceSymbol) -> Option<Self> {
        Some(Self::new(symbol.filename()?, symbol.lineno()?))
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(Path::new(location.file()), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

// =============================================================================
// LOCATE
// =============================================================================

/// Describe the frame `1 + extra_frames` levels above the caller.
///
/// `extra_frames = 0` is the immediate caller of the assertion primitive,
/// provided every layer in between is `#[track_caller]`.
#[track_caller]
#[must_use]
pub fn locate(extra_frames: usize) -> String {
    locate_with(Settings::global(), extra_frames)
}

/// [`locate`] with explicit settings.
#[track_caller]
#[must_use]
pub fn locate_with(settings: &Settings, extra_frames: usize) -> String {
    resolve(settings, extra_frames).render(settings)
}

/// Resolve the frame `extra_frames` levels above the tracked caller.
///
/// Falls back to the tracked caller itself when the walk fails.
#[track_caller]
#[must_use]
pub fn resolve(settings: &Settings, extra_frames: usize) -> SourceLocation {
    let anchor = SourceLocation::from(Location::caller());
    if extra_frames == 0 {
        return anchor;
    }

    let walked = if settings.walk_frames {
        walk(&anchor, extra_frames)
    } else {
        Err(LocateError::WalkDisabled)
    };

    match walked {
        Ok(location) => location,
        Err(e) => {
            tracing::debug!(
                requested = extra_frames,
                error = %e,
                "falling back to assertion call site"
            );
            anchor
        }
    }
}

/// Demangled path of [`resolve`], which marks where the locator's own
/// frames end on a captured stack.
const RESOLVE_SYMBOL: &str = concat!(module_path!(), "::resolve");

/// One symbol of a captured stack, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Site {
    symbol: Option<String>,
    location: Option<SourceLocation>,
}

/// Capture the stack and step `extra_frames` outward from `anchor`.
fn walk(anchor: &SourceLocation, extra_frames: usize) -> Result<SourceLocation, LocateError> {
    let sites = capture();
    let start = find_anchor(&sites, anchor)
        .ok_or_else(|| LocateError::AnchorNotFound(anchor.to_string()))?;
    step(&sites, start, extra_frames)
}

/// Every symbol counts as one frame, so inlined calls are not collapsed.
/// Frames without symbols are kept as unresolved entries.
fn capture() -> Vec<Site> {
    let trace = Backtrace::new();

    let mut sites = Vec::new();
    for frame in trace.frames() {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            sites.push(Site {
                symbol: None,
                location: None,
            });
        } else {
            sites.extend(symbols.iter().map(|symbol| Site {
                symbol: symbol.name().map(|name| format!("{name:#}")),
                location: SourceLocation::from_symbol(symbol),
            }));
        }
    }
    sites
}

/// Index of the first site matching `anchor` outside the locator.
///
/// Frames up to and including [`resolve`] belong to the capture itself
/// (the unwinder, std, this module) and are never candidates, since a
/// relative anchor such as `src/lib.rs` also suffix-matches their paths.
/// Without symbol names the whole stack is searched.
fn find_anchor(sites: &[Site], anchor: &SourceLocation) -> Option<usize> {
    let from = sites
        .iter()
        .position(|site| {
            site.symbol
                .as_deref()
                .is_some_and(|name| name.starts_with(RESOLVE_SYMBOL))
        })
        .map_or(0, |index| index + 1);

    sites
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, site)| site.location.as_ref().is_some_and(|s| s.same_site(anchor)))
        .map(|(index, _)| index)
}

fn step(sites: &[Site], start: usize, extra_frames: usize) -> Result<SourceLocation, LocateError> {
    match sites.get(start.saturating_add(extra_frames)) {
        Some(Site {
            location: Some(location),
            ..
        }) => Ok(location.clone()),
        Some(_) => Err(LocateError::Unresolved(extra_frames)),
        None => Err(LocateError::OutOfRange {
            requested: extra_frames,
            available: sites.len().saturating_sub(start + 1),
        }),
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Why a stack walk could not produce a location.
///
/// Never surfaced to assertion callers; only logged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    /// Stack walking is turned off in the settings.
    #[error("Stack walking is disabled")]
    WalkDisabled,

    /// The assertion call site did not appear in the captured stack.
    #[error("Call site {0} not found on the stack")]
    AnchorNotFound(String),

    /// Fewer frames exist above the call site than requested.
    #[error("Requested {requested} frames above the call site, {available} available")]
    OutOfRange { requested: usize, available: usize },

    /// The frame exists but carries no file or line information.
    #[error("Frame {0} above the call site has no source information")]
    Unresolved(usize),
}

// =============================================================================
// TESTS
// =============================================================================
