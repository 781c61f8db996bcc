use std::future::Future;

use crate::domain::{auth::entities::WechatSession, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait WechatClient: Send + Sync {
    /// Exchanges a `wx.login` code for the caller's openid and session key.
    fn code_to_session(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<WechatSession, CoreError>> + Send;
}
