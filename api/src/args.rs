use clap::Parser;
use firstbites_core::domain::common::{DatabaseConfig, FirstbitesConfig, WechatConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "firstbites-api", about = "FirstBites backend API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub wechat: WechatArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value = "80")]
    pub port: u16,

    /// Path prefix when the service sits behind a gateway, e.g. `/firstbites`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DB_PORT", default_value = "5432")]
    pub db_port: u16,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "postgres")]
    pub db_password: String,

    #[arg(long, env = "DB_NAME", default_value = "firstbites")]
    pub db_name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct WechatArgs {
    /// Mini-program app id used for the jscode2session exchange.
    #[arg(long, env = "WECHAT_APP_ID", default_value = "")]
    pub wechat_app_id: String,

    #[arg(long, env = "WECHAT_APP_SECRET", default_value = "")]
    pub wechat_app_secret: String,

    /// Overridable so tests can point the exchange at a local stub.
    #[arg(long, env = "WECHAT_API_BASE", default_value = "https://api.weixin.qq.com")]
    pub wechat_api_base: String,

    #[arg(long, env = "WECHAT_TIMEOUT_SECS", default_value = "5")]
    pub wechat_timeout_secs: u64,
}

#[derive(Debug, Clone, Parser)]
pub struct LogArgs {
    /// tracing env-filter directive, e.g. `info,firstbites_core=debug`.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub json: bool,
}

impl From<Args> for FirstbitesConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.db_host,
                port: args.db.db_port,
                username: args.db.db_user,
                password: args.db.db_password,
                name: args.db.db_name,
            },
            wechat: WechatConfig {
                app_id: args.wechat.wechat_app_id,
                app_secret: args.wechat.wechat_app_secret,
                api_base: args.wechat.wechat_api_base,
                timeout_secs: args.wechat.wechat_timeout_secs,
            },
        }
    }
}
