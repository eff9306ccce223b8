use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::modules::students::repo::PgStudentRepo;
use crate::state::AppState;

pub async fn init_app_state() -> AppState<PgStudentRepo> {
    AppState {
        repo: PgStudentRepo::new(init_db_pool().await),
        cors_config: CorsConfig::from_env(),
    }
}
