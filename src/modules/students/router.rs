use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::students::controller::{
    create_student, delete_student, get_student, list_students, update_student,
};
use crate::modules::students::repo::StudentRepo;
use crate::state::AppState;

pub fn init_students_router<R: StudentRepo>() -> Router<AppState<R>> {
    Router::new()
        .route("/", post(create_student::<R>).get(list_students::<R>))
        .route(
            "/{id}",
            get(get_student::<R>)
                .put(update_student::<R>)
                .delete(delete_student::<R>),
        )
}
