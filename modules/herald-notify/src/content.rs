//! Renderable notification content and its presentation decorators.
//!
//! Wrappers own their inner content exclusively; stacking order is the
//! render order, so the outermost wrapper decorates the full rendering of
//! everything beneath it.

use chrono::Local;

/// A renderable piece of notification content.
///
/// Rendering is pure: the output depends only on construction inputs, so
/// repeated calls yield identical text.
pub trait Render: Send + Sync {
    fn render(&self) -> String;
}

/// Unadorned text content.
pub struct PlainText {
    text: String,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Render for PlainText {
    fn render(&self) -> String {
        self.text.clone()
    }
}

/// Prepends a bracketed timestamp to the wrapped content.
///
/// The stamp is captured at construction, never at render time.
pub struct Timestamped {
    inner: Box<dyn Render>,
    stamp: String,
}

impl Timestamped {
    pub fn new(inner: impl Render + 'static, stamp: impl Into<String>) -> Self {
        Self {
            inner: Box::new(inner),
            stamp: stamp.into(),
        }
    }

    /// Stamp with the current local time.
    pub fn now(inner: impl Render + 'static) -> Self {
        Self::new(inner, Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl Render for Timestamped {
    fn render(&self) -> String {
        format!("[{}] {}", self.stamp, self.inner.render())
    }
}

/// Appends a signature line to the wrapped content.
pub struct Signed {
    inner: Box<dyn Render>,
    signature: String,
}

impl Signed {
    pub fn new(inner: impl Render + 'static, signature: impl Into<String>) -> Self {
        Self {
            inner: Box::new(inner),
            signature: signature.into(),
        }
    }
}

impl Render for Signed {
    fn render(&self) -> String {
        format!("{}\n-- {}", self.inner.render(), self.signature)
    }
}

/// Builder-style wrapping. The last wrapper applied is the outermost.
pub trait RenderExt: Render + Sized + 'static {
    fn timestamped(self, stamp: impl Into<String>) -> Timestamped {
        Timestamped::new(self, stamp)
    }

    fn timestamped_now(self) -> Timestamped {
        Timestamped::now(self)
    }

    fn signed(self, signature: impl Into<String>) -> Signed {
        Signed::new(self, signature)
    }
}

impl<T: Render + Sized + 'static> RenderExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_renders_verbatim() {
        assert_eq!(PlainText::new("hi").render(), "hi");
    }

    #[test]
    fn timestamp_prepends_and_signature_appends() {
        let content = PlainText::new("hi").timestamped("T").signed("S");
        assert_eq!(content.render(), "[T] hi\n-- S");
    }

    #[test]
    fn render_is_deterministic() {
        let content = PlainText::new("hi").timestamped_now().signed("S");
        assert_eq!(content.render(), content.render());
    }

    #[test]
    fn mixed_wrap_orders_agree_on_the_canonical_layout() {
        // Prepend and append act on opposite ends, so a single timestamp
        // plus a single signature renders the same either way around.
        let sign_last = PlainText::new("hi").timestamped("T").signed("S");
        let stamp_last = PlainText::new("hi").signed("S").timestamped("T");
        assert_eq!(sign_last.render(), "[T] hi\n-- S");
        assert_eq!(stamp_last.render(), "[T] hi\n-- S");
    }

    #[test]
    fn same_kind_stacking_order_is_observable() {
        let outer_t2 = PlainText::new("hi").timestamped("T1").timestamped("T2");
        let outer_t1 = PlainText::new("hi").timestamped("T2").timestamped("T1");
        assert_eq!(outer_t2.render(), "[T2] [T1] hi");
        assert_eq!(outer_t1.render(), "[T1] [T2] hi");
        assert_ne!(outer_t2.render(), outer_t1.render());

        let sigs = PlainText::new("hi").signed("A").signed("B");
        assert_eq!(sigs.render(), "hi\n-- A\n-- B");
    }
}
