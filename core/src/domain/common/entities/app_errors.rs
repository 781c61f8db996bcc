use thiserror::Error;

/// Domain-level failures surfaced by repositories, services and the
/// WeChat client. The HTTP layer maps these onto status codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("record not found")]
    NotFound,

    #[error("family not found")]
    FamilyNotFound,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("wechat code exchange timed out")]
    WechatTimeout,

    #[error("wechat code exchange failed: {0}")]
    WechatRequest(String),

    #[error("wechat rejected login code: {errmsg} (errcode {errcode})")]
    WechatRejected { errcode: i64, errmsg: String },
}
