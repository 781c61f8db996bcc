use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{
    auth::{entities::WechatSession, ports::WechatClient},
    common::{WechatConfig, entities::app_errors::CoreError},
};

/// Talks to the WeChat `jscode2session` endpoint. The base URL is
/// configurable so tests can point it at a local stub.
#[derive(Debug, Clone)]
pub struct HttpWechatClient {
    app_id: String,
    app_secret: String,
    base_url: Url,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct JsCode2SessionResponse {
    openid: Option<String>,
    session_key: Option<String>,
    unionid: Option<String>,
    errcode: Option<i64>,
    errmsg: Option<String>,
}

impl HttpWechatClient {
    pub fn new(config: &WechatConfig) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&config.api_base).context("invalid WECHAT_API_BASE url")?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build wechat http client")?;

        Ok(Self {
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            base_url,
            client,
        })
    }

    fn session_from_body(body: JsCode2SessionResponse) -> Result<WechatSession, CoreError> {
        // WeChat reports failures in the body with errcode != 0.
        if let Some(errcode) = body.errcode.filter(|code| *code != 0) {
            return Err(CoreError::WechatRejected {
                errcode,
                errmsg: body.errmsg.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        match (body.openid, body.session_key) {
            (Some(openid), Some(session_key)) => Ok(WechatSession {
                openid,
                session_key,
                unionid: body.unionid,
            }),
            _ => Err(CoreError::WechatRequest(
                "jscode2session response missing openid".to_string(),
            )),
        }
    }
}

impl WechatClient for HttpWechatClient {
    async fn code_to_session(&self, code: &str) -> Result<WechatSession, CoreError> {
        let url = self
            .base_url
            .join("/sns/jscode2session")
            .map_err(|e| CoreError::WechatRequest(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("appid", self.app_id.as_str()),
                ("secret", self.app_secret.as_str()),
                ("js_code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("WeChat jscode2session timed out: {}", e);
                    CoreError::WechatTimeout
                } else {
                    tracing::error!("WeChat jscode2session request failed: {}", e);
                    CoreError::WechatRequest(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("WeChat jscode2session returned {}", status);
            return Err(CoreError::WechatRequest(format!(
                "jscode2session returned status {status}"
            )));
        }

        let body = response.json::<JsCode2SessionResponse>().await.map_err(|e| {
            tracing::error!("WeChat jscode2session body unreadable: {}", e);
            CoreError::WechatRequest(e.to_string())
        })?;

        Self::session_from_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_from_successful_body() {
        let session = HttpWechatClient::session_from_body(JsCode2SessionResponse {
            openid: Some("oABC".to_string()),
            session_key: Some("sk".to_string()),
            unionid: None,
            errcode: None,
            errmsg: None,
        })
        .unwrap();

        assert_eq!(session.openid, "oABC");
        assert_eq!(session.session_key, "sk");
    }

    #[test]
    fn errcode_zero_is_success() {
        let session = HttpWechatClient::session_from_body(JsCode2SessionResponse {
            openid: Some("oABC".to_string()),
            session_key: Some("sk".to_string()),
            unionid: Some("uXYZ".to_string()),
            errcode: Some(0),
            errmsg: None,
        })
        .unwrap();

        assert_eq!(session.unionid.as_deref(), Some("uXYZ"));
    }

    #[test]
    fn nonzero_errcode_is_rejected() {
        let err = HttpWechatClient::session_from_body(JsCode2SessionResponse {
            openid: None,
            session_key: None,
            unionid: None,
            errcode: Some(40029),
            errmsg: Some("invalid code".to_string()),
        })
        .unwrap_err();

        assert_eq!(
            err,
            CoreError::WechatRejected {
                errcode: 40029,
                errmsg: "invalid code".to_string(),
            }
        );
    }

    #[test]
    fn missing_openid_is_a_request_error() {
        let err = HttpWechatClient::session_from_body(JsCode2SessionResponse {
            openid: None,
            session_key: None,
            unionid: None,
            errcode: None,
            errmsg: None,
        })
        .unwrap_err();

        assert!(matches!(err, CoreError::WechatRequest(_)));
    }
}
