//! Report delivery.
//!
//! Native builds ask for a location with a save dialog (pre-filled with the
//! report's file name) and write the file there. WASM builds hand the text to
//! the browser as a Blob download.

use calc_core::report::Report;

/// Show a save dialog and write the report to the chosen path.
///
/// Returns `Ok(None)` when the user cancels.
#[cfg(not(target_arch = "wasm32"))]
pub async fn save_with_dialog(report: Report) -> Result<Option<std::path::PathBuf>, String> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Guardar reporte")
        .set_file_name(report.file_name.as_str())
        .add_filter("Text", &["txt"])
        .save_file()
        .await;

    let Some(handle) = handle else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    calc_core::report::save_report_as(&report, &path).map_err(|e| e.to_string())?;
    Ok(Some(path))
}

/// Trigger a browser download of the report text.
#[cfg(target_arch = "wasm32")]
pub fn download_report(report: &Report) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let js_err = |e: JsValue| format!("{:?}", e);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&report.contents));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "failed to create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&report.file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}
