use web_sys as web;

/// Append-only message area under the preview. Every line is mirrored to the
/// console through `log`.
#[derive(Clone)]
pub struct StatusLog {
    el: Option<web::Element>,
}

impl StatusLog {
    pub fn new(el: Option<web::Element>) -> Self {
        Self { el }
    }

    pub fn info(&self, message: &str) {
        log::info!("{}", message);
        self.append(message);
    }

    pub fn warn(&self, message: &str) {
        log::warn!("{}", message);
        self.append(message);
    }

    fn append(&self, message: &str) {
        let Some(el) = self.el.as_ref() else {
            return;
        };
        let Some(document) = el.owner_document() else {
            return;
        };
        if let Ok(line) = document.create_element("div") {
            line.set_text_content(Some(message));
            _ = el.append_child(&line);
        }
        el.set_scroll_top(el.scroll_height());
    }
}
