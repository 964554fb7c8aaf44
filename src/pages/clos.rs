//! CLO management page (HOD and FACULTY): per-course CLO list, CLO editing,
//! and PO/PSO mapping.

use leptos::prelude::*;

use crate::net::types::{BloomLevel, OutcomeKind};
use crate::pages::{PageContext, spawn};
use crate::state::clos::{CloForm, ClosState, MappingForm};
use crate::state::forms::FormDialog;
use crate::util::scope::ViewScope;

/// Scopes for the two independent loads on this page.
#[derive(Clone)]
struct Scopes {
    courses: ViewScope,
    clos: ViewScope,
}

#[component]
pub fn ClosPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let state = RwSignal::new(ClosState::default());
    let scopes = Scopes {
        courses: ViewScope::new(),
        clos: ViewScope::new(),
    };
    scopes.courses.retire_on_cleanup();
    scopes.clos.retire_on_cleanup();

    load_courses(&ctx, state, &scopes);

    let course_options = move || {
        state.with(|s| {
            s.courses
                .iter()
                .map(|course| {
                    let selected = s.selected_course.as_deref() == Some(course.id.as_str());
                    view! {
                        <option value=course.id.clone() selected=selected>
                            {format!("{} - {}", course.code, course.name)}
                        </option>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let select_ctx = ctx.clone();
    let select_scopes = scopes.clone();
    let on_select = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if state.try_update(|s| s.select_course(&id)).unwrap_or(false) {
            load_clos(&select_ctx, state, &select_scopes.clos, id);
        }
    };

    let rows = move || {
        state
            .get()
            .clos
            .into_iter()
            .map(|clo| {
                let edit_id = clo.id.clone();
                let map_id = clo.id.clone();
                let status = if clo.is_active { "Active" } else { "Inactive" };
                view! {
                    <tr>
                        <td>{clo.clo_code}</td>
                        <td>{clo.description}</td>
                        <td>
                            <span class="chip chip--bloom">{clo.bloom_level.as_str()}</span>
                        </td>
                        <td>{clo.version}</td>
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
                                class="btn btn--small"
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.open_mapping(&map_id);
                                    });
                                }
                            >
                                "Map"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let save_ctx = ctx.clone();
    let save_scopes = scopes.clone();
    let on_save = Callback::new(move |()| save_clo(&save_ctx, state, &save_scopes));
    let map_ctx = ctx.clone();
    let map_scopes = scopes.clone();
    let on_map = Callback::new(move |()| save_mapping(&map_ctx, state, &map_scopes));

    view! {
        <div class="management-page">
            <header class="management-page__header">
                <h1>"CLO Management"</h1>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || state.with(|s| s.selected_course.is_none())
                    on:click=move |_| {
                        state.update(|s| {
                            s.open_create();
                        });
                    }
                >
                    "+ Add CLO"
                </button>
            </header>
            <label class="management-page__filter">
                "Course"
                <select class="dialog__input" on:change=on_select>
                    {course_options}
                </select>
            </label>
            <Show
                when=move || !state.with(|s| s.loading && s.clos.is_empty())
                fallback=move || view! { <p>"Loading CLOs..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Description"</th>
                            <th>"Bloom Level"</th>
                            <th>"Version"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
            <Show when=move || state.with(|s| s.dialog.is_some())>
                <CloDialog state=state on_save=on_save/>
            </Show>
            <Show when=move || state.with(|s| s.mapping.is_some())>
                <MappingDialog state=state on_save=on_map/>
            </Show>
        </div>
    }
}

#[component]
fn CloDialog(state: RwSignal<ClosState>, on_save: Callback<()>) -> impl IntoView {
    let title = move || {
        if state.with(|s| s.dialog.as_ref().is_some_and(FormDialog::is_edit)) {
            "Edit CLO"
        } else {
            "Add CLO"
        }
    };
    let saving = move || state.with(|s| s.dialog.as_ref().is_some_and(|d| d.saving));
    let error = move || state.with(|s| s.dialog.as_ref().and_then(|d| d.error.clone()));
    let bloom = move || state.with(|s| s.dialog.as_ref().map(|d| d.form.bloom_level.clone()).unwrap_or_default());
    let close = move |_: leptos::ev::MouseEvent| state.update(|s| s.dialog = None);

    let bloom_options = move || {
        let current = bloom();
        BloomLevel::ALL
            .into_iter()
            .map(|level| {
                view! {
                    <option value=level.as_str() selected={current == level.as_str()}>
                        {level.as_str()}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {clo_input(state, "CLO Code", |f| &f.clo_code, |f| &mut f.clo_code)}
                <label class="dialog__label">
                    "Bloom's Taxonomy Level"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| {
                                if let Some(dialog) = s.dialog.as_mut() {
                                    dialog.form.bloom_level = value;
                                }
                            });
                        }
                    >
                        <option value="" selected=move || bloom().is_empty()>
                            "Select a level"
                        </option>
                        {bloom_options}
                    </select>
                </label>
                {clo_input(state, "Description", |f| &f.description, |f| &mut f.description)}
                {clo_input(state, "Version", |f| &f.version, |f| &mut f.version)}
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
fn MappingDialog(state: RwSignal<ClosState>, on_save: Callback<()>) -> impl IntoView {
    let saving = move || state.with(|s| s.mapping.as_ref().is_some_and(|d| d.saving));
    let error = move || state.with(|s| s.mapping.as_ref().and_then(|d| d.error.clone()));
    let kind = move || state.with(|s| s.mapping.as_ref().map(|d| d.form.outcome_kind));
    let close = move |_: leptos::ev::MouseEvent| state.update(|s| s.mapping = None);

    let set_kind = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let outcome_kind = if value == "PSO" { OutcomeKind::Pso } else { OutcomeKind::Po };
        state.update(|s| {
            if let Some(dialog) = s.mapping.as_mut() {
                dialog.form.outcome_kind = outcome_kind;
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Map CLO to Outcome"</h2>
                <label class="dialog__label">
                    "Outcome Type"
                    <select class="dialog__input" on:change=set_kind>
                        <option value="PO" selected=move || kind() == Some(OutcomeKind::Po)>
                            "Program Outcome (PO)"
                        </option>
                        <option value="PSO" selected=move || kind() == Some(OutcomeKind::Pso)>
                            "Program-Specific Outcome (PSO)"
                        </option>
                    </select>
                </label>
                {mapping_input(state, "Outcome Code", "text", |f| &f.outcome_code, |f| &mut f.outcome_code)}
                {mapping_input(state, "Correlation (1-3)", "number", |f| &f.correlation, |f| &mut f.correlation)}
                <Show when=move || error().is_some()>
                    <p class="dialog__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=close>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" prop:disabled=saving on:click=move |_| on_save.run(())>
                        {move || if saving() { "Saving..." } else { "Map" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn clo_input(
    state: RwSignal<ClosState>,
    label: &'static str,
    get: fn(&CloForm) -> &String,
    set: fn(&mut CloForm) -> &mut String,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
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

fn mapping_input(
    state: RwSignal<ClosState>,
    label: &'static str,
    kind: &'static str,
    get: fn(&MappingForm) -> &String,
    set: fn(&mut MappingForm) -> &mut String,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=kind
                prop:value=move || state.with(|s| s.mapping.as_ref().map(|d| get(&d.form).clone()).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| {
                        if let Some(dialog) = s.mapping.as_mut() {
                            *set(&mut dialog.form) = value;
                        }
                    });
                }
            />
        </label>
    }
}

fn load_courses(ctx: &PageContext, state: RwSignal<ClosState>, scopes: &Scopes) {
    let ticket = scopes.courses.begin();
    let ctx = ctx.clone();
    let clo_scope = scopes.clos.clone();
    spawn(async move {
        match ctx.api().courses().await {
            Ok(courses) if ticket.is_current() => {
                if let Some(selected) = state.try_update(|s| s.set_courses(courses)).flatten() {
                    load_clos(&ctx, state, &clo_scope, selected);
                }
            }
            Ok(_) => {}
            Err(err) if ticket.is_current() => ctx.fail(&ticket, "Loading courses", &err),
            Err(err) => ctx.expire_on(&err),
        }
    });
}

fn load_clos(ctx: &PageContext, state: RwSignal<ClosState>, scope: &ViewScope, course_id: String) {
    let ticket = scope.begin();
    state.update(|s| s.loading = true);
    let ctx = ctx.clone();
    spawn(async move {
        match ctx.api().clos_for_course(&course_id).await {
            Ok(clos) if ticket.is_current() => {
                state.update(|s| {
                    s.set_clos(&course_id, clos);
                });
            }
            Ok(_) => {}
            Err(err) if ticket.is_current() => {
                state.update(|s| s.loading = false);
                ctx.fail(&ticket, "Loading CLOs", &err);
            }
            Err(err) => ctx.expire_on(&err),
        }
    });
}

fn save_clo(ctx: &PageContext, state: RwSignal<ClosState>, scopes: &Scopes) {
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

    let ticket = scopes.clos.begin_mutation();
    let ctx = ctx.clone();
    let clo_scope = scopes.clos.clone();
    spawn(async move {
        let api = ctx.api();
        let result = match dialog.editing.as_deref() {
            Some(id) => api.update_clo(id, &input).await,
            None => api.create_clo(&input).await,
        };
        match result {
            Ok(()) if ticket.is_alive() => {
                state.update(|s| s.dialog = None);
                ctx.success(if dialog.is_edit() { "CLO updated." } else { "CLO created." });
                let selected = state.with_untracked(|s| s.selected_course.clone());
                if let Some(course_id) = selected {
                    load_clos(&ctx, state, &clo_scope, course_id);
                }
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
                ctx.fail(&ticket, "Saving CLO", &err);
            }
        }
    });
}

fn save_mapping(ctx: &PageContext, state: RwSignal<ClosState>, scopes: &Scopes) {
    let Some(dialog) = state.with_untracked(|s| s.mapping.clone()) else {
        return;
    };
    let mapping = match dialog.form.validate() {
        Ok(mapping) => mapping,
        Err(err) => {
            state.update(|s| {
                if let Some(open) = s.mapping.as_mut() {
                    open.fail(err.to_string());
                }
            });
            return;
        }
    };
    let started = state
        .try_update(|s| s.mapping.as_mut().is_some_and(FormDialog::begin_save))
        .unwrap_or(false);
    if !started {
        return;
    }

    let ticket = scopes.clos.begin_mutation();
    let ctx = ctx.clone();
    spawn(async move {
        match ctx.api().map_clo(&mapping).await {
            Ok(()) if ticket.is_alive() => {
                state.update(|s| s.mapping = None);
                ctx.success(format!("Mapped to {}.", mapping.outcome_code));
            }
            Ok(()) => {}
            Err(err) => {
                if ticket.is_alive() {
                    state.update(|s| {
                        if let Some(open) = s.mapping.as_mut() {
                            open.fail(err.user_message());
                        }
                    });
                }
                ctx.fail(&ticket, "Mapping CLO", &err);
            }
        }
    });
}
