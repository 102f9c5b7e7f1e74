//! Status line showing how many particles remain

/// Status text for `count` remaining particles
pub fn remaining_text(count: u32) -> String {
    format!("还剩 {} 个球", count)
}

/// A single line of text the host displays
pub trait StatusSink {
    /// Replace the displayed text
    fn show(&mut self, text: &str);
}

/// Collects every shown text in order
impl StatusSink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Writes status changes to the log and keeps the latest one
#[derive(Debug, Default)]
pub struct LogStatus {
    last: Option<String>,
}

impl LogStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl StatusSink for LogStatus {
    fn show(&mut self, text: &str) {
        log::info!("{}", text);
        self.last = Some(text.to_string());
    }
}

/// Sets the text content of a DOM element
#[cfg(target_arch = "wasm32")]
pub struct ElementStatus {
    element: web_sys::Element,
}

#[cfg(target_arch = "wasm32")]
impl ElementStatus {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

#[cfg(target_arch = "wasm32")]
impl StatusSink for ElementStatus {
    fn show(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}
