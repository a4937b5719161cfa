//! Browser "save as" for in-memory data.
//!
//! The file is offered through a hidden `<a download>` pointing at an object
//! URL. Object URLs top out around 800 MB of blob data; nothing here guards
//! against larger payloads.

use common::model::csv::{CSV_CONTENT_TYPE, DEFAULT_FILE_NAME};
use gloo_file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::error::DownloadError;

/// Something able to hand finished bytes to the user as a file.
pub trait SaveFile {
    fn save(&self, bytes: Vec<u8>, file_name: &str) -> Result<(), DownloadError>;
}

/// `SaveFile` backed by the real DOM.
pub struct BrowserSaver;

impl SaveFile for BrowserSaver {
    fn save(&self, bytes: Vec<u8>, file_name: &str) -> Result<(), DownloadError> {
        let blob = Blob::new_with_options(bytes.as_slice(), Some(CSV_CONTENT_TYPE));
        download_file(blob, Some(file_name))
    }
}

/// Trigger a native download of `file`.
///
/// The anchor is clicked synchronously; revoking the URL and removing the
/// anchor wait for the next tick, otherwise Firefox cancels the save.
pub fn download_file(file: Blob, file_name: Option<&str>) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Dom("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::Dom("no document body".to_string()))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(dom_error)?
        .dyn_into()
        .map_err(|_| DownloadError::Dom("created element is not an anchor".to_string()))?;

    let url = ObjectUrl::from(file);
    link.set_href(&url);
    link.set_download(file_name.unwrap_or(DEFAULT_FILE_NAME));
    link.style().set_property("display", "none").map_err(dom_error)?;

    body.append_child(&link).map_err(dom_error)?;
    link.click();

    Timeout::new(0, move || {
        drop(url);
        link.remove();
    })
    .forget();

    Ok(())
}

fn dom_error(err: JsValue) -> DownloadError {
    DownloadError::Dom(format!("{:?}", err))
}
