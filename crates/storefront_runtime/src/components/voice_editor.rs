use super::*;

const EDITOR_TITLE_ID: &str = "voice-editor-title";

fn voice_row(
    character: Character,
    voices: Vec<Voice>,
    session: Signal<Option<VoiceAssignmentSession>>,
    on_assign: Callback<(CharacterId, VoiceId)>,
) -> impl IntoView {
    let character_id = character.id.clone();
    let selected = Signal::derive({
        let character_id = character_id.clone();
        move || {
            session.with(|session| {
                session
                    .as_ref()
                    .and_then(|session| session.voice_for(&character_id))
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
        }
    });
    let options = voices
        .into_iter()
        .map(|voice| {
            let value = voice.id.to_string();
            let option_value = value.clone();
            view! {
                <option value=option_value selected=move || selected.with(|current| current == &value)>
                    {voice.name}
                </option>
            }
        })
        .collect_view();

    view! {
        <FieldGroup title=character.name.clone() layout_class="voice-row">
            <SelectField
                aria_label=format!("Voice for {}", character.name)
                value=selected
                on_change=Callback::new(move |ev| {
                    let value = event_target_value(&ev);
                    if !value.is_empty() {
                        on_assign.call((character_id.clone(), VoiceId::new(value)));
                    }
                })
            >
                <option value="" disabled=true selected=move || selected.with(String::is_empty)>
                    "Select a voice..."
                </option>
                {options}
            </SelectField>
        </FieldGroup>
    }
}

fn voice_editor_dialog(
    session: Signal<Option<VoiceAssignmentSession>>,
    on_assign: Callback<(CharacterId, VoiceId)>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (roster, voices) = session.with_untracked(|session| {
        session
            .as_ref()
            .map(|session| (session.roster().to_vec(), session.voices().to_vec()))
            .unwrap_or_default()
    });
    let can_save = Signal::derive(move || {
        session.with(|session| session.as_ref().is_some_and(VoiceAssignmentSession::can_save))
    });

    let body = if roster.is_empty() {
        view! {
            <EmptyState icon=IconName::People>
                <p>"No characters detected in this section."</p>
            </EmptyState>
        }
        .into_view()
    } else {
        roster
            .into_iter()
            .map(|character| voice_row(character, voices.clone(), session, on_assign))
            .collect_view()
    };

    view! {
        <Modal
            layout_class="voice-editor"
            aria_labelledby=EDITOR_TITLE_ID
            on_dismiss=on_cancel
        >
            <Stack gap=LayoutGap::Md>
                <Heading level=2 id=EDITOR_TITLE_ID>"Assign Character Voices"</Heading>
                <Text tone=TextTone::Secondary>
                    "Select a voice for each character to create your personalized audio experience. Your settings will be saved for this book."
                </Text>
                <div class="voice-editor-rows" data-ui-slot="rows">{body}</div>
                <Cluster justify=LayoutJustify::End ui_slot="footer">
                    <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| on_cancel.call(()))>
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        disabled=Signal::derive(move || !can_save.get())
                        on_click=Callback::new(move |_| on_save.call(()))
                    >
                        "Save Changes"
                    </Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}

#[component]
/// Modal editor over an open [`VoiceAssignmentSession`].
///
/// Nothing renders while `session` is `None`. Row changes go to `on_assign`; "Save Changes" calls
/// `on_save` and "Cancel", Escape or a backdrop click call `on_cancel`.
pub fn VoiceAssignmentEditor(
    #[prop(into)] session: Signal<Option<VoiceAssignmentSession>>,
    on_assign: Callback<(CharacterId, VoiceId)>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let open = create_memo(move |_| session.with(Option::is_some));

    move || {
        open.get()
            .then(|| voice_editor_dialog(session, on_assign, on_save, on_cancel))
    }
}
