use std::rc::Rc;

use shared::family::{FamilyMember, MemberCustomizer, AVAILABLE_COLORS, AVAILABLE_EMOJIS};
use yew::prelude::*;

const NO_EMOJI: &str = "👤";

enum CustomizeAction {
    Select(String),
    /// An empty emoji means none.
    SetEmoji(String, &'static str),
    SetColor(String, &'static str),
    Reset,
}

#[derive(PartialEq)]
struct CustomizerState(MemberCustomizer);

impl Reducible for CustomizerState {
    type Action = CustomizeAction;

    fn reduce(self: Rc<Self>, action: CustomizeAction) -> Rc<Self> {
        let mut customizer = self.0.clone();
        match action {
            CustomizeAction::Select(id) => customizer.select(&id),
            CustomizeAction::SetEmoji(id, emoji) => customizer.set_emoji(&id, emoji),
            CustomizeAction::SetColor(id, color) => customizer.set_color(&id, color),
            CustomizeAction::Reset => customizer.reset(),
        }
        Rc::new(Self(customizer))
    }
}

#[derive(Properties, PartialEq)]
pub struct CharacterCustomizationPopupProps {
    pub members: Vec<FamilyMember>,
    pub on_close: Callback<()>,
    pub on_save: Callback<Vec<FamilyMember>>,
}

#[function_component(CharacterCustomizationPopup)]
pub fn character_customization_popup(props: &CharacterCustomizationPopupProps) -> Html {
    let members = props.members.clone();
    let state = use_reducer(move || CustomizerState(MemberCustomizer::open(&members)));
    let customizer = &state.0;
    let dispatch = state.dispatcher();

    let on_reset = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.dispatch(CustomizeAction::Reset))
    };

    let on_save = {
        let state = state.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_| on_save.emit(state.0.clone().finish()))
    };

    let selected = customizer.selected().cloned();

    html! {
        <div class="popup-overlay">
            <div class="popup-container character-popup">
                <div class="popup-header">
                    <h2 class="popup-title">{ "Tilpass familiemedlemmer" }</h2>
                    <button type="button" class="popup-close-button" onclick={props.on_close.reform(|_| ())}>
                        { "×" }
                    </button>
                </div>

                <div class="customization-content">
                    <div class="members-sidebar">
                        <h3 class="sidebar-title">{ "Familiemedlemmer" }</h3>
                        <div class="members-list">
                            { for customizer.members().iter().map(|member| {
                                let is_selected = selected.as_ref().map_or(false, |s| s.id == member.id);
                                let id = member.id.clone();
                                let dispatch = dispatch.clone();
                                html! {
                                    <button
                                        key={member.id.clone()}
                                        class={classes!("member-item", is_selected.then_some("selected"))}
                                        onclick={Callback::from(move |_| dispatch.dispatch(CustomizeAction::Select(id.clone())))}
                                    >
                                        <span class="member-emoji">{ member.emoji.clone().unwrap_or_else(|| NO_EMOJI.to_string()) }</span>
                                        <span class="member-name">{ &member.name }</span>
                                        <div class="member-color-indicator" style={format!("background-color: {}", member.color)} />
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    if let Some(member) = selected {
                        <div class="customization-area">
                            <div class="preview-section">
                                <h3 class="section-title">{ "Forhåndsvisning" }</h3>
                                <div class="preview-card" style={format!("background-color: {}20", member.color)}>
                                    <div class="preview-emoji">{ member.emoji.clone().unwrap_or_else(|| NO_EMOJI.to_string()) }</div>
                                    <div class="preview-name">{ &member.name }</div>
                                </div>
                            </div>

                            <div class="emoji-section">
                                <h3 class="section-title">{ "Velg karakter" }</h3>
                                <div class="emoji-grid">
                                    { for std::iter::once("").chain(AVAILABLE_EMOJIS.iter().copied()).map(|emoji| {
                                        let chosen = member.emoji.as_deref().unwrap_or("") == emoji;
                                        let id = member.id.clone();
                                        let dispatch = dispatch.clone();
                                        html! {
                                            <button
                                                key={if emoji.is_empty() { NO_EMOJI } else { emoji }}
                                                class={classes!("emoji-option", chosen.then_some("selected"))}
                                                onclick={Callback::from(move |_| dispatch.dispatch(CustomizeAction::SetEmoji(id.clone(), emoji)))}
                                            >
                                                { if emoji.is_empty() { NO_EMOJI } else { emoji } }
                                            </button>
                                        }
                                    }) }
                                </div>
                            </div>

                            <div class="color-section">
                                <h3 class="section-title">{ "Velg farge" }</h3>
                                <div class="color-grid">
                                    { for AVAILABLE_COLORS.iter().copied().map(|color| {
                                        let id = member.id.clone();
                                        let dispatch = dispatch.clone();
                                        html! {
                                            <button
                                                key={color}
                                                class={classes!("color-option", (member.color == color).then_some("selected"))}
                                                style={format!("background-color: {}", color)}
                                                title={color}
                                                onclick={Callback::from(move |_| dispatch.dispatch(CustomizeAction::SetColor(id.clone(), color)))}
                                            />
                                        }
                                    }) }
                                </div>
                            </div>
                        </div>
                    }
                </div>

                <div class="popup-footer">
                    <button class="button-secondary" onclick={on_reset} disabled={!customizer.is_dirty()}>
                        { "Tilbakestill" }
                    </button>
                    <div class="footer-actions">
                        <button class="button-secondary" onclick={props.on_close.reform(|_| ())}>{ "Avbryt" }</button>
                        <button class="button-primary" onclick={on_save}>{ "Lagre endringer" }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
