use crate::domain::{
    auth::{ports::WechatClient, value_objects::LoginOutcome},
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};

/// Logs a mini-program caller in: exchanges the code at WeChat, then
/// provisions a default account on first sight of the openid.
#[derive(Debug, Clone)]
pub struct LoginService<W, U> {
    wechat_client: W,
    user_repository: U,
}

impl<W, U> LoginService<W, U>
where
    W: WechatClient,
    U: UserRepository,
{
    pub fn new(wechat_client: W, user_repository: U) -> Self {
        Self {
            wechat_client,
            user_repository,
        }
    }

    pub async fn login(&self, code: &str) -> Result<LoginOutcome, CoreError> {
        let session = self.wechat_client.code_to_session(code).await?;

        if let Some(user) = self.user_repository.get_by_id(&session.openid).await? {
            return Ok(LoginOutcome {
                user,
                session,
                is_new_user: false,
            });
        }

        let user = self
            .user_repository
            .create(User::from_openid(&session.openid))
            .await?;

        Ok(LoginOutcome {
            user,
            session,
            is_new_user: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        auth::{entities::WechatSession, ports::MockWechatClient},
        user::ports::MockUserRepository,
    };

    fn session(openid: &str) -> WechatSession {
        WechatSession {
            openid: openid.to_string(),
            session_key: "sk".to_string(),
            unionid: None,
        }
    }

    #[tokio::test]
    async fn login_provisions_account_on_first_sight() {
        let mut wechat = MockWechatClient::new();
        wechat
            .expect_code_to_session()
            .with(eq("code-1"))
            .returning(|_| Box::pin(async { Ok(session("oABCDEF123456")) }));

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .with(eq("oABCDEF123456"))
            .returning(|_| Box::pin(async { Ok(None) }));
        users
            .expect_create()
            .withf(|user| user.id == "oABCDEF123456" && user.nickname == "用户123456")
            .returning(|user| Box::pin(async move { Ok(user) }));

        let service = LoginService::new(wechat, users);
        let outcome = service.login("code-1").await.unwrap();

        assert!(outcome.is_new_user);
        assert_eq!(outcome.user.id, "oABCDEF123456");
        assert_eq!(outcome.session.session_key, "sk");
    }

    #[tokio::test]
    async fn login_reuses_existing_account() {
        let mut wechat = MockWechatClient::new();
        wechat
            .expect_code_to_session()
            .returning(|_| Box::pin(async { Ok(session("oEXISTING00001")) }));

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(|_| {
            Box::pin(async {
                let mut user = User::from_openid("oEXISTING00001");
                user.update(Some("豆豆妈".to_string()), None);
                Ok(Some(user))
            })
        });
        users.expect_create().never();

        let service = LoginService::new(wechat, users);
        let outcome = service.login("code-2").await.unwrap();

        assert!(!outcome.is_new_user);
        assert_eq!(outcome.user.nickname, "豆豆妈");
    }

    #[tokio::test]
    async fn login_propagates_wechat_rejection() {
        let mut wechat = MockWechatClient::new();
        wechat.expect_code_to_session().returning(|_| {
            Box::pin(async {
                Err(CoreError::WechatRejected {
                    errcode: 40029,
                    errmsg: "invalid code".to_string(),
                })
            })
        });

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().never();

        let service = LoginService::new(wechat, users);
        let err = service.login("bad-code").await.unwrap_err();

        assert!(matches!(err, CoreError::WechatRejected { errcode, .. } if errcode == 40029));
    }
}
