use dioxus::prelude::*;
use crate::config::BoardConfig;
use crate::services::{HttpTaskSource, TaskSource, load_initial};
use crate::ui_dioxus::state::{BoardAction, BoardState};
use crate::ui_dioxus::views::BoardView;
use std::sync::Arc;

#[component]
pub fn App() -> Element {
    // Launcher injects the config; fall back to defaults when rendered bare
    let config = try_use_context::<BoardConfig>().unwrap_or_default();

    use_context_provider(|| Arc::new(HttpTaskSource::from_config(&config)) as Arc<dyn TaskSource>);

    rsx! {
        TodoBoard { title: config.window_title.clone() }
    }
}

/// Owns the board state and runs the initial load exactly once.
#[component]
pub fn TodoBoard(title: String) -> Element {
    let source = use_context::<Arc<dyn TaskSource>>();
    let mut board = use_signal(BoardState::new);

    use_future(move || {
        let source = source.clone();
        async move {
            let outcome = load_initial(source.as_ref()).await;
            board.write().apply(BoardAction::TasksLoaded(outcome.into_tasks()));
        }
    });

    let state = board.read().clone();

    rsx! {
        BoardView {
            title: title,
            state: state,
            on_action: move |action| board.write().apply(action),
        }
    }
}
