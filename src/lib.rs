pub mod data;
pub mod error;
pub mod filename;
pub mod upload;

pub use data::{
    parse_records, read_records, records_to_csv, Frame, Record, StructuredTable, TabularData,
};

pub use error::{Result, UploadError};

pub use filename::{
    generated_filename, normalize_filename, resolve_filename, Clock, FixedClock, SystemClock,
};

pub use upload::{
    HttpResponse, ReqwestTransport, Transport, UploadOutcome, UploadPayload, UploadReport,
    Uploader, UploaderConfig, DEFAULT_TIMEOUT_SECS,
};
