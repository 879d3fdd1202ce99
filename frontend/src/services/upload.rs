//! Multipart upload over `XMLHttpRequest`.
//!
//! `fetch` exposes no upload progress, so the request goes through XHR and
//! its `upload.onprogress`, `onload` and `onerror` callbacks are forwarded
//! to an [`UploadEvents`] handler.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FormData, ProgressEvent, XmlHttpRequest};

use crate::{AppResult, UploadRequest};

/// Receiver of one request's lifecycle events.
pub trait UploadEvents {
    /// Bytes sent so far; `total` is `None` when the size is not computable.
    fn on_progress(&self, loaded: f64, total: Option<f64>);
    /// The response arrived with `status`.
    fn on_load(&self, status: u16);
    /// Transport-level failure.
    fn on_error(&self);
}

/// Dispatches an upload and reports back through [`UploadEvents`].
pub trait Transport {
    type File;

    /// Start the request. Returning `Ok` means events will follow
    /// asynchronously; `Err` means nothing was sent.
    fn send(
        &self,
        request: UploadRequest<'_, Self::File>,
        events: Rc<dyn UploadEvents>,
    ) -> AppResult<()>;
}

/// Browser transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct XhrTransport;

impl Transport for XhrTransport {
    type File = File;

    fn send(&self, request: UploadRequest<'_, File>, events: Rc<dyn UploadEvents>) -> AppResult<()> {
        let form_data = FormData::new()?;
        form_data.append_with_blob(request.field_name, request.file)?;

        let xhr = XmlHttpRequest::new()?;

        let progress_events = events.clone();
        let onprogress = Closure::wrap(Box::new(move |event: ProgressEvent| {
            let total = event.length_computable().then(|| event.total());
            progress_events.on_progress(event.loaded(), total);
        }) as Box<dyn FnMut(ProgressEvent)>);
        xhr.upload()?
            .set_onprogress(Some(onprogress.as_ref().unchecked_ref()));
        onprogress.forget();

        let load_events = events.clone();
        let load_xhr = xhr.clone();
        let onload = Closure::wrap(Box::new(move |_: Event| {
            // status() only throws for synchronous requests
            let status = load_xhr.status().unwrap_or(0);
            load_events.on_load(status);
        }) as Box<dyn FnMut(Event)>);
        xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::wrap(Box::new(move |_: Event| {
            events.on_error();
        }) as Box<dyn FnMut(Event)>);
        xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        xhr.open_with_async("POST", request.url, true)?;
        xhr.send_with_opt_form_data(Some(&form_data))?;

        log::info!(
            "📤 POST {} ({} bytes as '{}')",
            request.url,
            request.file.size(),
            request.field_name
        );
        Ok(())
    }
}
