//! Course management page (HOD and ADMIN).

use leptos::prelude::*;

use crate::pages::{PageContext, spawn};
use crate::state::courses::{CourseForm, CoursesState};
use crate::state::forms::FormDialog;
use crate::util::scope::ViewScope;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let state = RwSignal::new(CoursesState::default());
    let scope = ViewScope::new();
    scope.retire_on_cleanup();

    load_courses(&ctx, state, &scope);

    let rows = move || {
        state
            .get()
            .courses
            .into_iter()
            .map(|course| {
                let edit_id = course.id.clone();
                let delete_id = course.id.clone();
                let status = if course.is_active { "Active" } else { "Inactive" };
                view! {
                    <tr>
                        <td>{course.code}</td>
                        <td>{course.name}</td>
                        <td>{course.credits}</td>
                        <td>{course.category}</td>
                        <td>{course.version}</td>
                        <td>{format!("{}%", course.threshold)}</td>
                        <td>
                            <span class=format!("chip chip--{}", status.to_lowercase())>{status}</span>
                        </td>
                        <td class="data-table__actions">
                            <button
                                class="btn btn--small"
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.open_edit(&edit_id);
                                    });
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| state.update(|s| s.confirm_deactivate = Some(delete_id.clone()))
                            >
                                "Deactivate"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let save_ctx = ctx.clone();
    let save_scope = scope.clone();
    let on_save = Callback::new(move |()| save_course(&save_ctx, state, &save_scope));
    let deactivate_ctx = ctx.clone();
    let deactivate_scope = scope.clone();
    let on_confirm_deactivate = Callback::new(move |()| deactivate_course(&deactivate_ctx, state, &deactivate_scope));

    view! {
        <div class="management-page">
            <header class="management-page__header">
                <h1>"Course Management"</h1>
                <button class="btn btn--primary" on:click=move |_| state.update(CoursesState::open_create)>
                    "+ Add Course"
                </button>
            </header>
            <Show
                when=move || !state.with(|s| s.loading && s.courses.is_empty())
                fallback=move || view! { <p>"Loading courses..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Credits"</th>
                            <th>"Category"</th>
                            <th>"Version"</th>
                            <th>"Threshold"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
            <Show when=move || state.with(|s| s.dialog.is_some())>
                <CourseDialog state=state on_save=on_save/>
            </Show>
            <Show when=move || state.with(|s| s.confirm_deactivate.is_some())>
                <div class="dialog-backdrop" on:click=move |_| state.update(|s| s.confirm_deactivate = None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Deactivate Course"</h2>
                        <p>
                            {move || {
                                state.with(|s| {
                                    s.pending_deactivation()
                                        .map(|c| format!("Deactivate {} ({})?", c.name, c.code))
                                        .unwrap_or_default()
                                })
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| state.update(|s| s.confirm_deactivate = None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_confirm_deactivate.run(())>
                                "Deactivate"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Create/edit dialog bound to the open draft in `state`.
#[component]
fn CourseDialog(state: RwSignal<CoursesState>, on_save: Callback<()>) -> impl IntoView {
    let title = move || {
        if state.with(|s| s.dialog.as_ref().is_some_and(FormDialog::is_edit)) {
            "Edit Course"
        } else {
            "Add Course"
        }
    };
    let saving = move || state.with(|s| s.dialog.as_ref().is_some_and(|d| d.saving));
    let error = move || state.with(|s| s.dialog.as_ref().and_then(|d| d.error.clone()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| state.update(CoursesState::close_dialog)>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {course_input(state, "Course Code", "text", |f| &f.code, |f| &mut f.code)}
                {course_input(state, "Course Name", "text", |f| &f.name, |f| &mut f.name)}
                {course_input(state, "Description", "text", |f| &f.description, |f| &mut f.description)}
                {course_input(state, "Credits", "number", |f| &f.credits, |f| &mut f.credits)}
                {course_input(state, "Category", "text", |f| &f.category, |f| &mut f.category)}
                {course_input(state, "Version", "text", |f| &f.version, |f| &mut f.version)}
                {course_input(state, "Attainment Threshold (%)", "number", |f| &f.threshold, |f| &mut f.threshold)}
                <Show when=move || error().is_some()>
                    <p class="dialog__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| state.update(CoursesState::close_dialog)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" prop:disabled=saving on:click=move |_| on_save.run(())>
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn course_input(
    state: RwSignal<CoursesState>,
    label: &'static str,
    kind: &'static str,
    get: fn(&CourseForm) -> &String,
    set: fn(&mut CourseForm) -> &mut String,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=kind
                prop:value=move || state.with(|s| s.dialog.as_ref().map(|d| get(&d.form).clone()).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| {
                        if let Some(dialog) = s.dialog.as_mut() {
                            *set(&mut dialog.form) = value;
                        }
                    });
                }
            />
        </label>
    }
}

fn load_courses(ctx: &PageContext, state: RwSignal<CoursesState>, scope: &ViewScope) {
    let ticket = scope.begin();
    state.update(|s| s.loading = true);
    let ctx = ctx.clone();
    spawn(async move {
        match ctx.api().courses().await {
            Ok(courses) if ticket.is_current() => state.update(|s| s.set_courses(courses)),
            Ok(_) => {}
            Err(err) if ticket.is_current() => {
                state.update(|s| s.loading = false);
                ctx.fail(&ticket, "Loading courses", &err);
            }
            Err(err) => ctx.expire_on(&err),
        }
    });
}

fn save_course(ctx: &PageContext, state: RwSignal<CoursesState>, scope: &ViewScope) {
    let Some(dialog) = state.with_untracked(|s| s.dialog.clone()) else {
        return;
    };
    let input = match dialog.form.validate() {
        Ok(input) => input,
        Err(err) => {
            state.update(|s| {
                if let Some(open) = s.dialog.as_mut() {
                    open.fail(err.to_string());
                }
            });
            return;
        }
    };
    let started = state
        .try_update(|s| s.dialog.as_mut().is_some_and(FormDialog::begin_save))
        .unwrap_or(false);
    if !started {
        return;
    }

    let ticket = scope.begin_mutation();
    let ctx = ctx.clone();
    let scope = scope.clone();
    spawn(async move {
        let api = ctx.api();
        let result = match dialog.editing.as_deref() {
            Some(id) => api.update_course(id, &input).await,
            None => api.create_course(&input).await,
        };
        match result {
            Ok(()) if ticket.is_alive() => {
                state.update(CoursesState::close_dialog);
                ctx.success(if dialog.is_edit() { "Course updated." } else { "Course created." });
                load_courses(&ctx, state, &scope);
            }
            Ok(()) => {}
            Err(err) => {
                if ticket.is_alive() {
                    state.update(|s| {
                        if let Some(open) = s.dialog.as_mut() {
                            open.fail(err.user_message());
                        }
                    });
                }
                ctx.fail(&ticket, "Saving course", &err);
            }
        }
    });
}

fn deactivate_course(ctx: &PageContext, state: RwSignal<CoursesState>, scope: &ViewScope) {
    let Some(id) = state.try_update(|s| s.confirm_deactivate.take()).flatten() else {
        return;
    };
    let ticket = scope.begin_mutation();
    let ctx = ctx.clone();
    let scope = scope.clone();
    spawn(async move {
        match ctx.api().delete_course(&id).await {
            Ok(()) if ticket.is_alive() => {
                ctx.success("Course deactivated.");
                load_courses(&ctx, state, &scope);
            }
            Ok(()) => {}
            Err(err) => ctx.fail(&ticket, "Deactivating course", &err),
        }
    });
}
