use axum::{
    routing::{any, get},
    Router,
};
use clap::ValueEnum;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::{livez, readyz},
        load::load_todos,
        save::save_todos,
    },
    state::AppState,
};

/// Which request handlers this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Functions {
    /// Only the read handler (`/loadTodos`)
    Load,
    /// Only the write handler (`/saveTodos`)
    Save,
    /// Both handlers
    All,
}

impl Functions {
    fn load(self) -> bool {
        matches!(self, Self::Load | Self::All)
    }

    fn save(self) -> bool {
        matches!(self, Self::Save | Self::All)
    }
}

/// Create the application router with the selected handlers and middleware.
///
/// The todo handlers accept every method and answer 405 themselves, so no
/// layer here may short-circuit a method (CORS preflight answers OPTIONS).
pub fn create_app(state: AppState, functions: Functions) -> Router {
    let mut router = Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz));

    if functions.load() {
        router = router.route("/loadTodos", any(load_todos));
    }
    if functions.save() {
        router = router.route("/saveTodos", any(save_todos));
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
