//! Parameter decoder synthesis.
//!
//! A page's declared parameter names compile into positional bindings over
//! the capture groups of its match pattern: the N-th declared name reads
//! capture group N (1-indexed; group 0, the full match, is never bound).
//! The decoder is plain data: the manifest renderer serializes it to a JS
//! closure, and [`ParamDecoder::decode`] evaluates the same semantics
//! host-side.

use percent_encoding::percent_decode_str;

use crate::manifest::REST_MARKER;

/// How a captured value becomes a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Percent-decoded scalar string.
    Scalar,
    /// Percent-decoded, then split into path segments on `/`.
    Rest,
}

/// One named binding onto a capture group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamBinding {
    pub name: String,
    /// 1-indexed capture group.
    pub group: usize,
    pub kind: ParamKind,
}

/// A decoded parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    Segments(Vec<String>),
}

/// Positional decoder over a regex match array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDecoder {
    bindings: Vec<ParamBinding>,
}

impl ParamDecoder {
    /// Compile declared parameter names, in declaration order.
    pub fn synthesize(params: &[String]) -> Self {
        let bindings = params
            .iter()
            .enumerate()
            .map(|(i, param)| match param.strip_prefix(REST_MARKER) {
                Some(name) => ParamBinding {
                    name: name.to_string(),
                    group: i + 1,
                    kind: ParamKind::Rest,
                },
                None => ParamBinding {
                    name: param.clone(),
                    group: i + 1,
                    kind: ParamKind::Scalar,
                },
            })
            .collect();

        Self { bindings }
    }

    /// `true` for pages without parameters. The emitted manifest shares a
    /// single constant empty-object producer between all such pages.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[ParamBinding] {
        &self.bindings
    }

    /// Apply the decoder to a match array, where `matches[0]` is the full
    /// match and groups follow.
    ///
    /// Pure function of the match array. A group beyond the array decodes
    /// as an empty capture (an optional group that did not participate).
    /// Variadic values drop empty segments, so surrounding or doubled
    /// separators never produce `""` entries.
    pub fn decode(&self, matches: &[&str]) -> Vec<(String, ParamValue)> {
        self.bindings
            .iter()
            .map(|binding| {
                let raw = matches.get(binding.group).copied().unwrap_or("");
                let decoded = decode_component(raw);
                let value = match binding.kind {
                    ParamKind::Scalar => ParamValue::Scalar(decoded),
                    ParamKind::Rest => ParamValue::Segments(split_segments(&decoded)),
                };
                (binding.name.clone(), value)
            })
            .collect()
    }
}

/// Percent-decode a captured value, passing it through on invalid UTF-8.
fn decode_component(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn split_segments(decoded: &str) -> Vec<String> {
    decoded
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
