use notice_core::config::core_config::AppConfig;
use notice_server::ServerConfig;
use sql_data_provider::DbConn;

pub const ADMIN_ROLE: &str = "ROLE_ADMIN";
pub const USER_ROLE: &str = "ROLE_USER";

pub fn create_config() -> AppConfig<ServerConfig> {
    let config = indoc::indoc! {"
        notice:
            adminRole: \"ROLE_ADMIN\"
            defaultAuthorName: \"관리자\"
        app:
            databaseUrl: \"sqlite::memory:\"
            traceLevel: \"debug\"
            enableMetrics: true
            enableServerInfo: true
    "};

    AppConfig::from_yaml([config]).unwrap()
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(&config.app.database_url, true)
        .await
        .unwrap()
}
