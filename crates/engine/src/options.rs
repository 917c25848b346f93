// ABOUTME: Configuration options for the extraction engine and the EngineBuilder fluent API.
// ABOUTME: Caps the post list length and the post title length.

use crate::engine::Engine;

/// Default cap on extracted top-post entries.
pub const DEFAULT_MAX_POSTS: usize = 10;

/// Default cap on post title length, in characters.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;

/// Configuration options for the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of top-post entries kept, in document order.
    pub max_posts: usize,
    /// Maximum post title length in characters; longer titles are truncated.
    pub title_max_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_posts: DEFAULT_MAX_POSTS,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Builder for constructing [`Engine`] instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    opts: Options,
}

impl EngineBuilder {
    /// Create a new EngineBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of top-post entries.
    pub fn max_posts(mut self, max_posts: usize) -> Self {
        self.opts.max_posts = max_posts;
        self
    }

    /// Set the maximum post title length in characters.
    pub fn title_max_chars(mut self, title_max_chars: usize) -> Self {
        self.opts.title_max_chars = title_max_chars;
        self
    }

    /// Build the Engine with the configured options.
    pub fn build(self) -> Engine {
        Engine::new(self.opts)
    }
}
