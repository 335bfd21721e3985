// Fullscreen host service. Requests may be refused; the mode only changes
// when the document reports `fullscreenchange`.
use web_sys::Document;

use crate::util::{clog, cwarn};

fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn is_fullscreen() -> bool {
    document().and_then(|doc| doc.fullscreen_element()).is_some()
}

pub fn request_fullscreen() {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        cwarn("fullscreen: no document element");
        return;
    };
    match root.request_fullscreen() {
        Ok(()) => clog("fullscreen: requested"),
        Err(err) => cwarn(&format!("fullscreen: request refused {:?}", err)),
    }
}

pub fn request_exit_fullscreen() {
    if let Some(doc) = document() {
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        }
    }
}
