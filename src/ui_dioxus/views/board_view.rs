use dioxus::prelude::*;
use crate::domain::task::CompletionFilter;
use crate::ui_dioxus::state::{BoardAction, BoardState};
use crate::ui_dioxus::views::TaskRow;

/// Header controls plus the derived task list. Stateless: every gesture is
/// reported through `on_action`.
#[component]
pub fn BoardView(title: String, state: BoardState, on_action: EventHandler<BoardAction>) -> Element {
    let visible = state.visible_tasks();
    let visible_count = visible.len();
    let total_count = state.tasks().len();
    let sort_label = state.sort_label();
    let editing_id = state.edit.editing_id();
    let edit_buffer = state.edit.buffer().to_string();
    let filter = state.filter;

    rsx! {
        div {
            class: "todo-list",
            style: "padding: 20px; max-width: 800px; margin: 0 auto;",

            h1 {
                style: "font-size: 1.8rem; font-weight: bold; margin-bottom: 16px;",
                "{title}"
            }

            div {
                class: "todo-header",
                style: "display: flex; flex-direction: column; gap: 12px; margin-bottom: 20px; padding: 15px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

                // New task
                div {
                    class: "todo-input",
                    style: "display: flex; gap: 8px;",
                    input {
                        r#type: "text",
                        style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                        placeholder: "New task",
                        value: "{state.new_title}",
                        oninput: move |evt| on_action.call(BoardAction::SetNewTitle(evt.value())),
                    }
                    button {
                        class: "btn-add",
                        onclick: move |_| on_action.call(BoardAction::AddTask),
                        "Add task"
                    }
                }

                // Search, filter, sort
                div {
                    class: "filter-sort-search",
                    style: "display: flex; gap: 8px; align-items: center;",
                    input {
                        r#type: "text",
                        style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                        placeholder: "Search Todo",
                        value: "{state.search}",
                        oninput: move |evt| on_action.call(BoardAction::SetSearch(evt.value())),
                    }
                    select {
                        style: "padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                        value: "{filter}",
                        onchange: move |evt| {
                            on_action.call(BoardAction::SetFilter(CompletionFilter::from_value(&evt.value())))
                        },
                        option { value: "", selected: filter == CompletionFilter::All, "All" }
                        option { value: "true", selected: filter == CompletionFilter::Completed, "Completed" }
                        option { value: "false", selected: filter == CompletionFilter::Incomplete, "Not completed" }
                    }
                    button {
                        class: "btn-sort",
                        onclick: move |_| on_action.call(BoardAction::ToggleSort),
                        "{sort_label}"
                    }
                    div {
                        class: "task-count",
                        style: "padding: 6px 12px; background: #f3f4f6; border-radius: 6px;",
                        "{visible_count} of {total_count} tasks"
                    }
                }
            }

            if !state.loaded {
                div {
                    class: "loading",
                    style: "text-align: center; padding: 40px; color: #6b7280;",
                    "Loading tasks..."
                }
            } else if visible.is_empty() {
                div {
                    class: "empty-state",
                    style: "text-align: center; padding: 60px; background: white; border-radius: 8px; color: #6b7280;",
                    "No tasks found"
                }
            } else {
                div {
                    class: "todo-items",
                    // Ids can repeat (count + 2 assignment), so the row position is part of the key
                    for (position, task) in visible.into_iter().enumerate() {
                        TaskRow {
                            key: "{position}-{task.id}",
                            editing: editing_id == Some(task.id),
                            edit_buffer: edit_buffer.clone(),
                            task: task.clone(),
                            on_action: on_action,
                        }
                    }
                }
            }
        }
    }
}
