//! Eligibility checks for extraction targets.
//!
//! Two checks run per route, in order. [`is_eligible`] is the raw handler
//! check: it needs nothing but the handle itself. [`handler_exists`] is the
//! later existence check against the source index, separate because it can
//! only run once the backing type is known to be loadable.

use routedoc_matching::{HandlerIdentity, RouteHandle, SourceIndex};

/// Whether a route's handler is resolvable enough to attempt extraction.
///
/// Plain callables (anonymous closures and bare named functions) have no
/// identifiable backing class and are never extraction targets, nor is a
/// handle whose identity could not be resolved at all. An invokable object
/// is always eligible.
pub fn is_eligible(handle: &RouteHandle) -> bool {
    match &handle.handler {
        None => false,
        Some(HandlerIdentity::Closure) => false,
        Some(HandlerIdentity::Function { .. }) => false,
        Some(HandlerIdentity::Invokable { .. }) => true,
        Some(HandlerIdentity::Method { .. }) => true,
    }
}

/// Whether the handler's backing type can be resolved and, for class+method
/// handlers, actually declares the handler method.
///
/// Call only after [`is_eligible`] has passed; closures and bare functions
/// have nothing to look up and report `false` here.
pub fn handler_exists(handle: &RouteHandle, index: &dyn SourceIndex) -> bool {
    match &handle.handler {
        Some(HandlerIdentity::Method { class, method }) => {
            index.has_type(class) && index.has_method(class, method)
        }
        Some(HandlerIdentity::Invokable { class }) => index.has_type(class),
        _ => false,
    }
}
