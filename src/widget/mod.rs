// ABOUTME: Shared widget support: refresh cache and app-to-widget data handoff.
// ABOUTME: One platform-neutral implementation instead of per-platform duplicates.

mod cache;
mod handoff;

pub use cache::{PortainerFetch, WidgetCache, WidgetFetch};
pub use handoff::{ConnectionInfo, ContainerStub, WidgetSnapshot, deep_link, WIDGET_STORAGE_KEY};
