//! Faculty management page (HOD only): faculty CRUD and course assignment.

use leptos::prelude::*;

use crate::net::http::HttpError;
use crate::pages::{PageContext, spawn};
use crate::state::faculty::{FacultyForm, FacultyState};
use crate::state::forms::FormDialog;
use crate::util::scope::{Ticket, ViewScope};

#[derive(Clone)]
struct Scopes {
    faculty: ViewScope,
    assigned: ViewScope,
}

#[component]
pub fn FacultyPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let state = RwSignal::new(FacultyState::default());
    let scopes = Scopes {
        faculty: ViewScope::new(),
        assigned: ViewScope::new(),
    };
    scopes.faculty.retire_on_cleanup();
    scopes.assigned.retire_on_cleanup();

    load_faculty(&ctx, state, &scopes.faculty);
    load_catalogue(&ctx, state, &scopes.faculty);

    let assign_ctx = ctx.clone();
    let assign_scope = scopes.assigned.clone();
    let open_assign = Callback::new(move |id: String| {
        if state.try_update(|s| s.open_assign(&id)).unwrap_or(false) {
            load_assigned(&assign_ctx, state, &assign_scope, id);
        }
    });

    let rows = move || {
        state
            .get()
            .faculty
            .into_iter()
            .map(|member| {
                let edit_id = member.id.clone();
                let assign_id = member.id.clone();
                let delete_id = member.id.clone();
                let department = member.department.map(|d| d.name).unwrap_or_default();
                let status = if member.is_active { "Active" } else { "Inactive" };
                view! {
                    <tr>
                        <td>{member.name}</td>
                        <td>{member.email}</td>
                        <td>{member.designation.unwrap_or_default()}</td>
                        <td>{department}</td>
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
                            <button class="btn btn--small" on:click=move |_| open_assign.run(assign_id.clone())>
                                "Courses"
                            </button>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| state.update(|s| s.confirm_delete = Some(delete_id.clone()))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let save_ctx = ctx.clone();
    let save_scope = scopes.faculty.clone();
    let on_save = Callback::new(move |()| save_faculty(&save_ctx, state, &save_scope));
    let delete_ctx = ctx.clone();
    let delete_scope = scopes.faculty.clone();
    let on_confirm_delete = Callback::new(move |()| delete_faculty(&delete_ctx, state, &delete_scope));
    let assign_save_ctx = ctx.clone();
    let assign_save_scope = scopes.assigned.clone();
    let on_assign = Callback::new(move |()| assign_course(&assign_save_ctx, state, &assign_save_scope));
    let remove_ctx = ctx.clone();
    let remove_scope = scopes.assigned.clone();
    let on_remove = Callback::new(move |course_id: String| remove_course(&remove_ctx, state, &remove_scope, course_id));

    view! {
        <div class="management-page">
            <header class="management-page__header">
                <h1>"Faculty Management"</h1>
                <button class="btn btn--primary" on:click=move |_| state.update(FacultyState::open_create)>
                    "+ Add Faculty"
                </button>
            </header>
            <Show
                when=move || !state.with(|s| s.loading && s.faculty.is_empty())
                fallback=move || view! { <p>"Loading faculty..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Designation"</th>
                            <th>"Department"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
            <Show when=move || state.with(|s| s.dialog.is_some())>
                <FacultyDialog state=state on_save=on_save/>
            </Show>
            <Show when=move || state.with(|s| s.assign.is_some())>
                <AssignDialog state=state on_assign=on_assign on_remove=on_remove/>
            </Show>
            <Show when=move || state.with(|s| s.confirm_delete.is_some())>
                <div class="dialog-backdrop" on:click=move |_| state.update(|s| s.confirm_delete = None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Faculty"</h2>
                        <p>
                            {move || {
                                state.with(|s| {
                                    s.confirm_delete
                                        .as_deref()
                                        .and_then(|id| s.find(id))
                                        .map(|m| format!("Delete {} ({})?", m.name, m.email))
                                        .unwrap_or_default()
                                })
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| state.update(|s| s.confirm_delete = None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_confirm_delete.run(())>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FacultyDialog(state: RwSignal<FacultyState>, on_save: Callback<()>) -> impl IntoView {
    let creating = move || state.with(|s| s.dialog.as_ref().is_some_and(|d| !d.is_edit()));
    let saving = move || state.with(|s| s.dialog.as_ref().is_some_and(|d| d.saving));
    let error = move || state.with(|s| s.dialog.as_ref().and_then(|d| d.error.clone()));
    let close = move |_: leptos::ev::MouseEvent| state.update(|s| s.dialog = None);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if creating() { "Add Faculty" } else { "Edit Faculty" }}</h2>
                {faculty_input(state, "Name", "text", |f| &f.name, |f| &mut f.name)}
                {faculty_input(state, "Email", "email", |f| &f.email, |f| &mut f.email)}
                <Show when=creating>
                    {faculty_input(state, "Password", "password", |f| &f.password, |f| &mut f.password)}
                </Show>
                {faculty_input(state, "Designation", "text", |f| &f.designation, |f| &mut f.designation)}
                <Show when=move || error().is_some()>
                    <p class="dialog__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=close>
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

#[component]
fn AssignDialog(state: RwSignal<FacultyState>, on_assign: Callback<()>, on_remove: Callback<String>) -> impl IntoView {
    let saving = move || state.with(|s| s.assign.as_ref().is_some_and(|d| d.saving));
    let error = move || state.with(|s| s.assign.as_ref().and_then(|d| d.error.clone()));
    let close = move |_: leptos::ev::MouseEvent| state.update(|s| s.assign = None);

    let assigned = move || {
        state
            .with(|s| s.assign.as_ref().map(|d| d.form.assigned.clone()).unwrap_or_default())
            .into_iter()
            .map(|course| {
                let course_id = course.id.clone();
                view! {
                    <li class="assign-list__item">
                        <span>{format!("{} - {}", course.code, course.name)}</span>
                        <button
                            class="btn btn--small btn--danger"
                            prop:disabled=saving
                            on:click=move |_| on_remove.run(course_id.clone())
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let options = move || {
        state.with(|s| {
            let picked = s.assign.as_ref().map(|d| d.form.course_id.clone()).unwrap_or_default();
            s.assignable_courses()
                .into_iter()
                .map(|course| {
                    view! {
                        <option value=course.id.clone() selected={picked == course.id}>
                            {format!("{} - {}", course.code, course.name)}
                        </option>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| {
            if let Some(dialog) = s.assign.as_mut() {
                dialog.form.course_id = value;
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Assigned Courses"</h2>
                <ul class="assign-list">{assigned}</ul>
                <label class="dialog__label">
                    "Assign course"
                    <select class="dialog__input" on:change=on_pick>
                        <option value="">"Select a course"</option>
                        {options}
                    </select>
                </label>
                <Show when=move || error().is_some()>
                    <p class="dialog__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=close>
                        "Close"
                    </button>
                    <button class="btn btn--primary" prop:disabled=saving on:click=move |_| on_assign.run(())>
                        "Assign"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn faculty_input(
    state: RwSignal<FacultyState>,
    label: &'static str,
    kind: &'static str,
    get: fn(&FacultyForm) -> &String,
    set: fn(&mut FacultyForm) -> &mut String,
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

fn load_faculty(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope) {
    let ticket = scope.begin();
    state.update(|s| s.loading = true);
    let ctx = ctx.clone();
    spawn(async move {
        match ctx.api().faculty().await {
            Ok(faculty) if ticket.is_current() => state.update(|s| s.set_faculty(faculty)),
            Ok(_) => {}
            Err(err) if ticket.is_current() => {
                state.update(|s| s.loading = false);
                ctx.fail(&ticket, "Loading faculty", &err);
            }
            Err(err) => ctx.expire_on(&err),
        }
    });
}

/// Department course list offered for assignment.
fn load_catalogue(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope) {
    let ticket = scope.begin_mutation();
    let ctx = ctx.clone();
    spawn(async move {
        match ctx.api().hod_all_courses().await {
            Ok(courses) if ticket.is_alive() => state.update(|s| s.courses = courses),
            Ok(_) => {}
            Err(err) => ctx.fail(&ticket, "Loading courses", &err),
        }
    });
}

fn load_assigned(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope, faculty_id: String) {
    let ticket = scope.begin();
    let ctx = ctx.clone();
    spawn(async move {
        match ctx.api().courses_for_faculty(&faculty_id).await {
            Ok(courses) if ticket.is_current() => {
                state.update(|s| {
                    s.set_assigned(&faculty_id, courses);
                });
            }
            Ok(_) => {}
            Err(err) if ticket.is_current() => ctx.fail(&ticket, "Loading assigned courses", &err),
            Err(err) => ctx.expire_on(&err),
        }
    });
}

fn save_faculty(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope) {
    let Some(dialog) = state.with_untracked(|s| s.dialog.clone()) else {
        return;
    };
    let input = match dialog.form.validate(!dialog.is_edit()) {
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
            Some(id) => api.update_faculty(id, &input).await,
            None => api.create_faculty(&input).await,
        };
        match result {
            Ok(()) if ticket.is_alive() => {
                state.update(|s| s.dialog = None);
                ctx.success(if dialog.is_edit() { "Faculty updated." } else { "Faculty created." });
                load_faculty(&ctx, state, &scope);
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
                ctx.fail(&ticket, "Saving faculty", &err);
            }
        }
    });
}

fn delete_faculty(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope) {
    let Some(id) = state.try_update(|s| s.confirm_delete.take()).flatten() else {
        return;
    };
    let ticket = scope.begin_mutation();
    let ctx = ctx.clone();
    let scope = scope.clone();
    spawn(async move {
        match ctx.api().delete_faculty(&id).await {
            Ok(()) if ticket.is_alive() => {
                ctx.success("Faculty deleted.");
                load_faculty(&ctx, state, &scope);
            }
            Ok(()) => {}
            Err(err) => ctx.fail(&ticket, "Deleting faculty", &err),
        }
    });
}

fn assign_course(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope) {
    let Some(dialog) = state.with_untracked(|s| s.assign.clone()) else {
        return;
    };
    let assignment = match dialog.form.validate() {
        Ok(assignment) => assignment,
        Err(err) => {
            state.update(|s| {
                if let Some(open) = s.assign.as_mut() {
                    open.fail(err.to_string());
                }
            });
            return;
        }
    };
    let started = state
        .try_update(|s| s.assign.as_mut().is_some_and(FormDialog::begin_save))
        .unwrap_or(false);
    if !started {
        return;
    }

    let ticket = scope.begin_mutation();
    let ctx = ctx.clone();
    let scope = scope.clone();
    spawn(async move {
        let result = ctx.api().assign_course(&assignment).await;
        finish_assignment(&ctx, state, &scope, &ticket, result, "Assigning course", "Course assigned.");
    });
}

fn remove_course(ctx: &PageContext, state: RwSignal<FacultyState>, scope: &ViewScope, course_id: String) {
    let Some(removal) = state.with_untracked(|s| s.assign.as_ref().map(|d| d.form.removal(&course_id))) else {
        return;
    };
    let started = state
        .try_update(|s| s.assign.as_mut().is_some_and(FormDialog::begin_save))
        .unwrap_or(false);
    if !started {
        return;
    }

    let ticket = scope.begin_mutation();
    let ctx = ctx.clone();
    let scope = scope.clone();
    spawn(async move {
        let result = ctx.api().remove_course(&removal).await;
        finish_assignment(&ctx, state, &scope, &ticket, result, "Removing course", "Course removed.");
    });
}

/// Unlock the assignment dialog and refresh its list after a change.
fn finish_assignment(
    ctx: &PageContext,
    state: RwSignal<FacultyState>,
    scope: &ViewScope,
    ticket: &Ticket,
    result: Result<(), HttpError>,
    what: &str,
    done: &str,
) {
    if !ticket.is_alive() {
        if let Err(err) = result {
            ctx.expire_on(&err);
        }
        return;
    }
    let faculty_id = state.try_update(|s| {
        let dialog = s.assign.as_mut()?;
        dialog.saving = false;
        dialog.form.course_id.clear();
        Some(dialog.form.faculty_id.clone())
    });
    match result {
        Ok(()) => {
            ctx.success(done);
            if let Some(faculty_id) = faculty_id.flatten() {
                load_assigned(ctx, state, scope, faculty_id);
            }
        }
        Err(err) => {
            state.update(|s| {
                if let Some(open) = s.assign.as_mut() {
                    open.fail(err.user_message());
                }
            });
            ctx.fail(ticket, what, &err);
        }
    }
}
