use std::sync::Arc;

/// Handler invoked with the source URL of every newly created image.
pub type LoadHandler = Arc<dyn Fn(String) + Send + Sync>;

/// Observation point for image construction.
///
/// Hosts report every image they create through
/// [`ImageLoadHub::notify_created`]; the registered handler runs on the next
/// scheduler turn. Hosts rarely deliver a synchronous load-start signal, and
/// call sites may finish assigning the source only after construction
/// returns, so delivery must not happen inline.
pub struct ImageLoadHub {
    handler: LoadHandler,
}

impl ImageLoadHub {
    /// Registers the load handler. Called once at setup.
    pub fn new(handler: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Reports a newly constructed image whose source URL is `src`.
    /// Empty sources produce no notification. Requires an ambient tokio
    /// runtime; the constructed host object itself is untouched.
    pub fn notify_created(&self, src: &str) {
        if src.is_empty() {
            return;
        }
        let handler = Arc::clone(&self.handler);
        let src = src.to_owned();
        tokio::spawn(async move {
            handler(src);
        });
    }
}
