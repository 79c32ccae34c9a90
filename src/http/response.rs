/// HTTP status codes the server can produce.
///
/// - `Ok` (200): file found and served
/// - `BadRequest` (400): request line could not be parsed
/// - `Forbidden` (403): file not statable, oversized, or outside the root
/// - `NotFound` (404): file missing
/// - `MethodNotAllowed` (405): any method other than GET/HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    /// Status text as it appears in the status line and the log,
    /// e.g. `200 OK`.
    pub fn status_text(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A response ready for serialization.
///
/// The header set is fixed: Content-Type, Content-Length and
/// `Connection: close`. `content_length` is the declared entity length; for
/// file responses it is the file size while `body` stays empty and the
/// payload is streamed separately by the writer.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub content_length: u64,
}

impl Response {
    /// A plain-text response whose declared length is the inline body.
    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
            content_length: body.len() as u64,
        }
    }

    /// The 200 header block for a file of `len` bytes.
    ///
    /// Content type is fixed to text/html regardless of the file's actual
    /// type. The file payload itself is streamed by the writer for GET and
    /// omitted for HEAD.
    pub fn ok_file(len: u64) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: "text/html",
            body: Vec::new(),
            content_length: len,
        }
    }

    pub fn bad_request() -> Self {
        Self::text(StatusCode::BadRequest, "Bad Request")
    }

    pub fn method_not_allowed() -> Self {
        Self::text(StatusCode::MethodNotAllowed, "Method Not Allowed")
    }

    pub fn not_found() -> Self {
        Self::text(StatusCode::NotFound, "File Not Found")
    }

    pub fn forbidden() -> Self {
        Self::text(StatusCode::Forbidden, "Forbidden")
    }

    pub fn too_large() -> Self {
        Self::text(StatusCode::Forbidden, "File Too Large")
    }
}
