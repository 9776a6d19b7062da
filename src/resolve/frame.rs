//! Call-frame inspection: recover an argument name from the caller's
//! declared parameter list.
//!
//! Used when a guard is invoked with a bare value and no explicit name.
//! The inspector locates the caller's call site, re-reads its source, and
//! parses the enclosing function signature. Resolution never raises: every
//! condition it cannot handle degrades into a descriptive fallback name.
//!
//! The default depth of 1 inspects the direct caller of the guard entry
//! point. Callers that wrap the guard functions in their own helper layer
//! must pass an adjusted depth, or resolution silently points at the wrong
//! frame. Deeper frames are recovered by walking the current thread's stack,
//! which requires debug info and is defeated by inlining; the `capture!`
//! form is unaffected by either and is the recommended path for anything
//! that is not a single, uniquely-typed function parameter.

use crate::resolve::signature::{self, Param};
use crate::resolve::ResolvedName;
use backtrace::Backtrace;
use std::panic::Location;

const ADVICE: &str = "pass an explicit name or use the capture! form";

/// Resolves argument names by inspecting the caller's call frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInspector {
    depth: usize,
    call_site: Option<&'static Location<'static>>,
}

impl FrameInspector {
    /// Inspector for the frame `depth` levels above the resolution point
    /// (1 = the direct caller). A depth of 0 is treated as 1.
    pub fn new(depth: usize) -> Self {
        Self {
            depth: depth.max(1),
            call_site: None,
        }
    }

    /// Inspector primed with a call-site location captured via
    /// `#[track_caller]` at the guard entry point. The location is exact
    /// and survives optimization, so it is preferred over a stack walk
    /// whenever the requested depth is 1.
    pub fn with_call_site(depth: usize, call_site: &'static Location<'static>) -> Self {
        Self {
            depth: depth.max(1),
            call_site: Some(call_site),
        }
    }

    /// Resolve the name of the argument being validated.
    ///
    /// `type_hint` is the `std::any::type_name` of the validated value and
    /// is used to narrow multi-parameter signatures down to the parameters
    /// whose declared type plausibly matches.
    pub fn resolve(&self, type_hint: Option<&str>) -> ResolvedName {
        let (file, line) = match self.locate() {
            Some(at) => at,
            None => {
                log::debug!("name resolution: caller frame unavailable at depth {}", self.depth);
                return ResolvedName::Fallback(format!(
                    "<unresolved parameter: caller frame unavailable; {ADVICE}>"
                ));
            }
        };
        let source = match signature::read_source(&file) {
            Some(text) => text,
            None => {
                log::debug!("name resolution: source not readable: {file}");
                return ResolvedName::Fallback(format!(
                    "<unresolved parameter: caller source not available; {ADVICE}>"
                ));
            }
        };
        let params = match signature::parameters_of_enclosing_fn(&source, line) {
            Some(params) => params,
            None => {
                return ResolvedName::Fallback(format!(
                    "<unresolved parameter: caller signature not recognized; {ADVICE}>"
                ));
            }
        };
        let name = select_name(&params, type_hint);
        log::debug!("name resolution via caller frame {file}:{line}: {name}");
        name
    }

    /// File and line of the frame to inspect.
    fn locate(&self) -> Option<(String, u32)> {
        if self.depth == 1 {
            if let Some(call_site) = self.call_site {
                return Some((call_site.file().to_string(), call_site.line()));
            }
        }
        caller_frame(self.depth)
    }
}

/// Pick a name out of the caller's declared parameters, per the resolution
/// contract: one parameter is the reliable case; zero means the caller is
/// not validating a bare parameter; several are narrowed by type and
/// otherwise reported as ambiguous.
fn select_name(params: &[Param], type_hint: Option<&str>) -> ResolvedName {
    match params {
        [] => ResolvedName::Fallback(format!(
            "<unresolved parameter: the caller takes no parameters, so the value is likely a local or field; {ADVICE}>"
        )),
        [only] => ResolvedName::Identifier(only.name.clone()),
        _ => {
            if let Some(hint) = type_hint {
                let matching: Vec<&Param> = params
                    .iter()
                    .filter(|p| signature::type_matches(&p.ty, hint))
                    .collect();
                if let [only] = matching.as_slice() {
                    return ResolvedName::Identifier(only.name.clone());
                }
                if matching.len() > 1 {
                    return ambiguous(&matching);
                }
            }
            let all: Vec<&Param> = params.iter().collect();
            ambiguous(&all)
        }
    }
}

fn ambiguous(candidates: &[&Param]) -> ResolvedName {
    let list = candidates
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    ResolvedName::Fallback(format!(
        "<ambiguous parameter: candidates are {list}; {ADVICE}>"
    ))
}

/// Walk the current thread's stack and return the file and line of the
/// frame `depth` levels above the validation layer. Frames without symbol
/// data are skipped; missing debug info yields `None`.
fn caller_frame(depth: usize) -> Option<(String, u32)> {
    let trace = Backtrace::new();
    let mut seen = 0usize;
    for frame in trace.frames() {
        for symbol in frame.symbols() {
            let name = match symbol.name() {
                Some(name) => name.to_string(),
                None => continue,
            };
            if is_internal(&name) {
                continue;
            }
            seen += 1;
            if seen == depth {
                let file = symbol.filename()?.to_str()?.to_string();
                let line = symbol.lineno()?;
                return Some((file, line));
            }
        }
    }
    None
}

/// Frames belonging to the validation layer itself or to the capture
/// machinery, which do not count toward the caller-relative depth.
fn is_internal(symbol: &str) -> bool {
    if symbol.contains("::tests") {
        return false;
    }
    symbol.contains("parapet::resolve")
        || symbol.contains("parapet::guards")
        || symbol.contains("parapet::core")
        || symbol.contains("backtrace::")
        || symbol.starts_with("std::")
        || symbol.starts_with("core::")
}
