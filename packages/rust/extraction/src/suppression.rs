//! Opt-out scanning over handler doc comments.
//!
//! API authors exclude an endpoint (or a whole controller) from the
//! generated documentation by tagging its doc comment with [`HIDE_TAG`].
//! The tag name matches case-insensitively, and a class-level tag
//! short-circuits the method-level scan.

use tracing::debug;

use routedoc_matching::{HandlerIdentity, RouteHandle, SourceIndex};

/// Annotation tag that excludes a handler from documentation.
pub const HIDE_TAG: &str = "hidefromapidocumentation";

/// Whether the route's handler (or its declaring type) opted out of
/// documentation.
///
/// Anonymous closures and bare functions carry no doc comments and are
/// never suppressed. A type or method absent from the index has no tags.
pub fn is_suppressed(handle: &RouteHandle, index: &dyn SourceIndex) -> bool {
    let Some(identity) = &handle.handler else {
        return false;
    };

    let Some(class) = identity.class() else {
        return false;
    };

    if has_hide_tag(&index.type_tags(class)) {
        debug!(class, "type-level hide tag found");
        return true;
    }

    match identity {
        HandlerIdentity::Method { class, method } => {
            has_hide_tag(&index.method_tags(class, method))
        }
        // An invokable's doc comment is its type's doc comment; there is no
        // second, method-level block to consult.
        _ => false,
    }
}

fn has_hide_tag(tags: &[String]) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(HIDE_TAG))
}
