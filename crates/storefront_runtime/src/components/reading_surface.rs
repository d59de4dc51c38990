use super::*;

const TYPOGRAPHY_POPOVER_ID: &str = "reader-typography";

/// Inline style applied to the reading column.
pub(crate) fn reading_style(settings: &ReaderSettings) -> String {
    format!(
        "font-size: {}px; font-family: {}; line-height: 1.7",
        settings.font_size,
        settings.font_family.css_stack()
    )
}

pub(crate) fn playback_label(playing: bool) -> &'static str {
    if playing {
        "Pause"
    } else {
        "Play"
    }
}

fn log_effect(diagnostics: Diagnostics, effect: &ReaderEffect) {
    match effect {
        ReaderEffect::VoiceAssignmentSaved(assignments) => {
            let count = assignments.len().to_string();
            diagnostics.info(
                "reader",
                "voice assignment saved",
                &[("characters", count.as_str())],
            );
        }
        ReaderEffect::VoiceDraftDiscarded { changed } => {
            let count = changed.len().to_string();
            diagnostics.debug(
                "reader",
                "voice draft discarded",
                &[("characters", count.as_str())],
            );
        }
        ReaderEffect::PlaybackChanged { playing } => {
            diagnostics.debug(
                "reader",
                "playback toggled",
                &[("state", if *playing { "playing" } else { "paused" })],
            );
        }
    }
}

fn font_family_options(
    settings: Memo<ReaderSettings>,
    dispatch: Callback<ReaderAction>,
) -> impl IntoView {
    [FontFamily::Serif, FontFamily::Sans]
        .into_iter()
        .map(|family| {
            view! {
                <SegmentedControlOption
                    aria_label=family.aria_label()
                    selected=Signal::derive(move || settings.with(|s| s.font_family == family))
                    on_click=Callback::new(move |_| dispatch.call(ReaderAction::SetFontFamily(family)))
                >
                    <span data-ui-font=family.token()>{family.label()}</span>
                </SegmentedControlOption>
            }
        })
        .collect_view()
}

#[component]
/// Full-screen reader with typography, playback and voice assignment controls.
///
/// Background page scrolling is suspended for as long as the surface is mounted. Settings start
/// from the `[reader]` configuration on every mount and are never persisted.
pub fn ReadingSurface(
    book: ReaderBook,
    /// Called with the full mapping each time the voice editor saves.
    #[prop(optional)]
    on_assignments_saved: Option<Callback<VoiceAssignment>>,
) -> impl IntoView {
    let runtime = use_storefront();
    let diagnostics = runtime.diagnostics;

    let scroll_guard = runtime.lock_scroll();
    on_cleanup(move || drop(scroll_guard));

    let state = create_rw_signal(ReaderState::new(
        ReaderSettings::from_config(&runtime.config.reader),
        book.characters.clone(),
        book.voices.clone(),
        book.assignments.clone(),
    ));

    let dispatch = Callback::new(move |action: ReaderAction| {
        let mut next = state.get_untracked();
        let previous = next.clone();
        match reduce_reader(&mut next, action) {
            Ok(effects) => {
                if next != previous {
                    state.set(next);
                }
                for effect in &effects {
                    log_effect(diagnostics, effect);
                    if let (ReaderEffect::VoiceAssignmentSaved(saved), Some(on_saved)) =
                        (effect, on_assignments_saved.as_ref())
                    {
                        on_saved.call(saved.clone());
                    }
                }
            }
            Err(err) => {
                let error = err.to_string();
                diagnostics.warn("reader", "action rejected", &[("error", error.as_str())]);
            }
        }
    });

    let settings = create_memo(move |_| state.with(|state| state.settings));
    let typography_open = create_memo(move |_| state.with(|state| state.typography_open));
    let voice_editor = create_memo(move |_| state.with(|state| state.voice_editor.clone()));
    let playing = Signal::derive(move || settings.with(|settings| settings.playing));

    let chapters = book
        .chapters
        .into_iter()
        .enumerate()
        .map(|(index, chapter)| {
            let heading_id = format!("chapter-{}", index + 1);
            view! {
                <section class="reader-chapter" aria-labelledby=heading_id.clone()>
                    <h2 id=heading_id>{chapter.title}</h2>
                    <p>{chapter.body}</p>
                </section>
            }
        })
        .collect_view();

    view! {
        <div
            class="reading-surface"
            data-ui-kind="reading-surface"
            data-ui-font=move || settings.with(|s| s.font_family.token())
            data-ui-playing=move || bool_token(playing.get())
        >
            <header class="reader-header">
                <LinkButton
                    href=AppRoute::Library.href()
                    variant=ButtonVariant::Quiet
                    aria_label="Back to library"
                    icon_only=IconName::ArrowLeft
                />
                <h1 class="reader-title">{book.title.clone()}</h1>
                <span class="reader-header-spacer" aria-hidden="true"></span>
            </header>

            <main class="reader-viewport" tabindex="0">
                <article
                    class="reader-column"
                    style=move || settings.with(reading_style)
                >
                    {chapters}
                </article>
            </main>

            <footer class="reader-controls">
                <div class="reader-typography">
                    <IconButton
                        icon=IconName::TextFont
                        variant=ButtonVariant::Outline
                        aria_label="Font Settings"
                        aria_expanded=typography_open
                        on_click=Callback::new(move |_| dispatch.call(ReaderAction::ToggleTypographyPanel))
                    />
                    <Popover
                        id=TYPOGRAPHY_POPOVER_ID
                        aria_label="Typography settings"
                        open=typography_open
                        on_dismiss=Callback::new(move |_| dispatch.call(ReaderAction::CloseTypographyPanel))
                    >
                        <Stack gap=LayoutGap::Md>
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Font Size"</Text>
                                <Cluster gap=LayoutGap::Sm>
                                    <IconButton
                                        icon=IconName::Minus
                                        variant=ButtonVariant::Outline
                                        aria_label="Decrease font size"
                                        disabled=Signal::derive(move || !settings.with(ReaderSettings::can_decrease_font))
                                        on_click=Callback::new(move |_| dispatch.call(ReaderAction::DecreaseFontSize))
                                    />
                                    <span class="reader-font-size" aria-live="polite">
                                        {move || format!("{}px", settings.with(|s| s.font_size))}
                                    </span>
                                    <IconButton
                                        icon=IconName::Plus
                                        variant=ButtonVariant::Outline
                                        aria_label="Increase font size"
                                        disabled=Signal::derive(move || !settings.with(ReaderSettings::can_increase_font))
                                        on_click=Callback::new(move |_| dispatch.call(ReaderAction::IncreaseFontSize))
                                    />
                                </Cluster>
                            </Stack>
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Font Family"</Text>
                                <SegmentedControl aria_label="Font family">
                                    {font_family_options(settings, dispatch)}
                                </SegmentedControl>
                            </Stack>
                        </Stack>
                    </Popover>
                </div>

                <div class="reader-playback">
                    <Button
                        variant=ButtonVariant::Primary
                        shape=ButtonShape::Circle
                        aria_label=Signal::derive(move || playback_label(playing.get()).to_string())
                        pressed=playing
                        on_click=Callback::new(move |_| dispatch.call(ReaderAction::TogglePlayback))
                    >
                        {move || {
                            let icon = if playing.get() { IconName::Pause } else { IconName::Play };
                            view! { <Icon icon size=IconSize::Md /> }
                        }}
                    </Button>
                    <RangeField
                        min="0"
                        max="100"
                        step="1"
                        aria_label="Playback progress"
                        value=Signal::derive(move || settings.with(|s| s.playback_position.to_string()))
                        on_input=Callback::new(move |ev| {
                            if let Ok(position) = event_target_value(&ev).parse::<i32>() {
                                dispatch.call(ReaderAction::SetPlaybackPosition(position));
                            }
                        })
                    />
                </div>

                <IconButton
                    icon=IconName::People
                    variant=ButtonVariant::Outline
                    aria_label="Assign Character Voices"
                    on_click=Callback::new(move |_| dispatch.call(ReaderAction::OpenVoiceEditor))
                />
            </footer>

            <VoiceAssignmentEditor
                session=voice_editor
                on_assign=Callback::new(move |(character, voice): (CharacterId, VoiceId)| {
                    dispatch.call(ReaderAction::AssignVoice { character, voice })
                })
                on_save=Callback::new(move |_| dispatch.call(ReaderAction::SaveVoiceAssignment))
                on_cancel=Callback::new(move |_| dispatch.call(ReaderAction::CancelVoiceAssignment))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reading_style_reflects_settings() {
        let settings = ReaderSettings {
            font_size: 21,
            font_family: FontFamily::Sans,
            playback_position: 0,
            playing: false,
        };
        assert_eq!(
            reading_style(&settings),
            "font-size: 21px; font-family: var(--font-body, system-ui, sans-serif); line-height: 1.7"
        );
    }

    #[test]
    fn playback_button_names_the_next_action() {
        assert_eq!(playback_label(false), "Play");
        assert_eq!(playback_label(true), "Pause");
    }
}
