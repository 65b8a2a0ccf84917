pub mod export;
pub mod presentation;

pub use export::{
    export_notice, DocumentExporter, ExportHandle, ExportOptions, HtmlDocumentExporter,
    PageFormat, NOTICE_DURATION,
};
pub use presentation::ReportPresentation;
