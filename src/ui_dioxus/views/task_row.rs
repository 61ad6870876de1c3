use dioxus::prelude::*;
use crate::domain::task::Task;
use crate::ui_dioxus::state::BoardAction;

#[component]
pub fn TaskRow(
    task: Task,
    editing: bool,
    edit_buffer: String,
    on_action: EventHandler<BoardAction>,
) -> Element {
    let id = task.id;
    let title = task.title.clone();

    rsx! {
        div {
            class: "todo-item",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: white; border: 1px solid #e5e7eb; border-radius: 8px; margin-bottom: 8px;",

            if editing {
                div {
                    class: "todo-body",
                    style: "flex: 1; margin-right: 12px;",
                    input {
                        class: "edit-todo-input",
                        r#type: "text",
                        style: "width: 100%; padding: 6px 10px; border: 1px solid #3b82f6; border-radius: 6px;",
                        value: "{edit_buffer}",
                        oninput: move |evt| on_action.call(BoardAction::SetEditBuffer(evt.value())),
                    }
                }
                div {
                    class: "controls",
                    style: "display: flex; gap: 8px;",
                    button {
                        class: "btn-save",
                        onclick: move |_| on_action.call(BoardAction::SaveEdit(id)),
                        "Save"
                    }
                    button {
                        class: "btn-cancel",
                        onclick: move |_| on_action.call(BoardAction::CancelEdit),
                        "Cancel"
                    }
                }
            } else {
                div {
                    class: "todo-body",
                    style: "display: flex; align-items: center; gap: 10px; flex: 1;",
                    input {
                        r#type: "checkbox",
                        checked: task.completed,
                        onchange: move |_| on_action.call(BoardAction::ToggleCompleted(id)),
                    }
                    div {
                        class: if task.completed { "todo-text done" } else { "todo-text" },
                        style: if task.completed { "color: #9ca3af; text-decoration: line-through;" } else { "" },
                        "{task.title}"
                    }
                }
                div {
                    class: "controls",
                    style: "display: flex; gap: 8px;",
                    button {
                        class: "btn-edit",
                        onclick: move |_| on_action.call(BoardAction::BeginEdit { id, title: title.clone() }),
                        "Edit"
                    }
                    button {
                        class: "btn-delete",
                        style: "color: #991b1b;",
                        onclick: move |_| on_action.call(BoardAction::DeleteTask(id)),
                        "Delete"
                    }
                }
            }
        }
    }
}
