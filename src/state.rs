use crate::config::cors::CorsConfig;
use crate::modules::students::repo::StudentRepo;

/// Shared application state, generic over the persistence implementation
/// so tests can run the full router against an in-memory repository.
#[derive(Clone, Debug)]
pub struct AppState<R: StudentRepo> {
    pub repo: R,
    pub cors_config: CorsConfig,
}
