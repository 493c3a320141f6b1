// src/ui/systems.rs
use std::any;

use bevy::prelude::*;

use crate::catalog::events::{MutationKind, MutationTaskResult, StatusFeedback};
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::UiFeedbackState;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<StatusFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prefer showing the first non-error, or the last error
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Post-save navigation: close the editor or popup that issued a mutation
/// once it succeeds. Failures leave everything open so the user can retry.
pub fn handle_mutation_navigation(
    mut events: EventReader<MutationTaskResult>,
    mut state: ResMut<AdminWindowState>,
) {
    for ev in events.read() {
        if ev.result.is_err() {
            if let Some(editor) = state.product_editor.as_mut() {
                editor.saving = false;
            }
            continue;
        }
        match &ev.kind {
            MutationKind::ProductCreated | MutationKind::ProductUpdated { .. } => {
                state.product_editor = None;
            }
            MutationKind::ProductDeleted => {}
            MutationKind::CategorySaved => {
                state.show_category_popup = false;
                state.category_edit_id = None;
                state.category_form = Default::default();
            }
            MutationKind::BrandSaved => {
                state.show_brand_popup = false;
                state.brand_edit_id = None;
                state.brand_form = Default::default();
            }
            MutationKind::CollectionCreated => {
                // Back to the list; editing resumes once the refetched list
                // shows the new collection.
                state.collection_editor = None;
            }
            MutationKind::CollectionUpdated { .. } => {}
            MutationKind::CollectionDeleted => {
                state.collection_editor = None;
            }
            MutationKind::CollectionItemChanged { .. } => {
                if let Some(editor) = state.collection_editor.as_mut() {
                    editor.add_product_id.clear();
                    editor.deal_edit = None;
                }
            }
            MutationKind::CategoryDeleted | MutationKind::BrandDeleted => {}
        }
    }
}

/// Transient feedback is scoped to the screen it happened on.
pub fn clear_ui_feedback_on_screen_change(
    state: Res<AdminWindowState>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
    mut last_screen: Local<Option<Screen>>,
) {
    if let Some(prev) = last_screen.as_ref() {
        if *prev != state.screen {
            ui_feedback_state.last_message.clear();
            ui_feedback_state.is_error = false;
        }
    }
    *last_screen = Some(state.screen);
}

/// Request a fetch unless the key is already cached or being fetched.
pub fn ensure_fetched(
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<crate::catalog::events::RequestFetch>,
    key: QueryKey,
) {
    if !cache.contains(&key) && !cache.is_in_flight(&key) {
        fetch_writer.write(crate::catalog::events::RequestFetch(key));
    }
}

#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>()
            .split("::")
            .last()
            .unwrap_or("UnknownEvent")
            .to_string();
    }

    let mut count = 0;
    for (entity, send_event_component) in query.iter() {
        count += 1;
        debug!(
            "Forwarding event type '{}' #{}: {:?}",
            *event_type_name, count, send_event_component.event
        );
        writer.write(send_event_component.event.clone());
        commands.entity(entity).remove::<SendEvent<E>>();
        commands.entity(entity).despawn();
    }

    if count > 0 {
        debug!(
            "Forwarded {} instance(s) of event type '{}'.",
            count, *event_type_name
        );
    }
}
