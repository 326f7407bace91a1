use crate::error::GateError;

/// Minor version marking a header compiled with preview features enabled.
pub const PREVIEW_MINOR_VERSION: u16 = 0xFFFF;

const INTERNAL_PREFIX: &str = "org/objectweb/asm/";
const UTIL_PREFIX: &str = "org/objectweb/asm/util/";
const MEMBERS: [&str; 7] = [
    "Annotation",
    "Class",
    "Field",
    "Method",
    "Module",
    "RecordComponent",
    "Signature",
];

// Gate for experimental interfaces.
// Only callers built with the preview capability may use them, except for a
//  fixed set of internal tracing/checking components and tests.
// The capability is an explicit flag handed to the gate; it can come from the
//  build configuration or from a compiled header the caller already has.

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PreviewGate {
    preview_enabled: bool,
}

impl PreviewGate {
    pub fn new(preview_enabled: bool) -> Self {
        Self { preview_enabled }
    }

    pub fn from_build() -> Self {
        Self::new(cfg!(feature = "preview"))
    }

    pub fn from_class_header(header: Option<&[u8]>) -> Result<Self, GateError> {
        let minor_version = read_minor_version(header)?;
        Ok(Self::new(minor_version == PREVIEW_MINOR_VERSION))
    }

    pub fn preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    pub fn check(&self, internal_name: &str) -> Result<(), GateError> {
        if is_whitelisted(internal_name) {
            tracing::debug!(internal_name, "experimental API allowed for internal caller");
            return Ok(());
        }
        if self.preview_enabled {
            return Ok(());
        }
        tracing::debug!(internal_name, "experimental API refused, preview not enabled");
        Err(GateError::PreviewRequired)
    }
}

// Whitelisted callers never need a header, so it is only read for the others.
pub fn check_caller(internal_name: &str, header: Option<&[u8]>) -> Result<(), GateError> {
    if is_whitelisted(internal_name) {
        tracing::debug!(internal_name, "experimental API allowed for internal caller");
        return Ok(());
    }
    PreviewGate::from_class_header(header)?.check(internal_name)
}

/// Requires the header's minor version to be the preview sentinel.
pub fn check_class_header(header: Option<&[u8]>) -> Result<(), GateError> {
    if read_minor_version(header)? != PREVIEW_MINOR_VERSION {
        return Err(GateError::PreviewRequired);
    }
    Ok(())
}

// Header layout: u32 magic/version, then u16 minor version, both big-endian.
fn read_minor_version(header: Option<&[u8]>) -> Result<u16, GateError> {
    let header = header.ok_or(GateError::ResourceUnavailable(
        "compiled header not found",
    ))?;
    match header.get(4..6) {
        Some(&[hi, lo]) => Ok(u16::from_be_bytes([hi, lo])),
        _ => Err(GateError::ResourceUnavailable(
            "compiled header too short",
        )),
    }
}

pub fn is_whitelisted(internal_name: &str) -> bool {
    if !internal_name.starts_with(INTERNAL_PREFIX) {
        return false;
    }
    internal_name.contains("Test$")
        || matches_member_pattern(internal_name, "Trace", "Visitor")
        || matches_member_pattern(internal_name, "Check", "Adapter")
}

// Matches `org/objectweb/asm/util/<kind><member><suffix>` optionally followed
//  by `$` and anything (nested classes).
fn matches_member_pattern(internal_name: &str, kind: &str, suffix: &str) -> bool {
    let Some(rest) = internal_name
        .strip_prefix(UTIL_PREFIX)
        .and_then(|r| r.strip_prefix(kind))
    else {
        return false;
    };
    MEMBERS.iter().any(|member| {
        match rest
            .strip_prefix(member)
            .and_then(|r| r.strip_prefix(suffix))
        {
            Some(tail) => tail.is_empty() || tail.starts_with('$'),
            None => false,
        }
    })
}
