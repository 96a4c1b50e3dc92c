/// Why an upload did not produce a usable `OcrResult`.
///
/// Carried inside `AppEvent::UploadResolved`, so variants hold plain strings
/// rather than transport-layer error types. Localization of the opaque
/// variants happens where the active locale is known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// No response was obtained; message is the transport's own description.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response carrying a parseable `error` field, quoted verbatim.
    #[error("{0}")]
    Server(String),

    /// Non-2xx response whose body could not be interpreted.
    #[error("server returned an unreadable error response")]
    OpaqueServer,

    /// 2xx response whose body did not decode into a result.
    #[error("server returned an unreadable success response")]
    MalformedBody,
}
