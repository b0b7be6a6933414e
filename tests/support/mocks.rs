// tests/support/mocks.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use site_slug::application::ports::util::SlugGenerator;

/// Returns its input untouched.
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Delegates to the real transform and counts calls.
#[derive(Default)]
pub struct CountingSlug {
    calls: AtomicUsize,
}

impl CountingSlug {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SlugGenerator for CountingSlug {
    fn slugify(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        site_slug::slugify(input)
    }
}
