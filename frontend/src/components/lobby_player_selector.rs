use shared::family::FamilyMember;
use shared::games::Lobby;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LobbyPlayerSelectorProps {
    pub members: Vec<FamilyMember>,
    pub lobby: Lobby,
    pub on_toggle: Callback<String>,
}

#[function_component(LobbyPlayerSelector)]
pub fn lobby_player_selector(props: &LobbyPlayerSelectorProps) -> Html {
    let players = props.lobby.selected_members(&props.members);

    html! {
        <section class="player-selector">
            <div>
                <h3 class="h3-select-players">{ "Selected Players:" }</h3>
                if players.is_empty() {
                    <p class="no-selection">{ "No players selected." }</p>
                } else {
                    <div class="selected-emoji-box">
                        { for players.iter().map(|m| html! {
                            <span key={m.id.clone()} class="emoji" title={m.name.clone()} style={format!("color: {}", m.color)}>
                                { m.avatar() }
                            </span>
                        }) }
                    </div>
                    <ul class="selected-names">
                        { for players.iter().map(|m| html! {
                            <li key={m.id.clone()} style={format!("color: {}", m.color)}>{ &m.name }</li>
                        }) }
                    </ul>
                }
            </div>

            <h2>{ "Who's playing?" }</h2>
            <div class="checkbox-container">
                { for props.members.iter().map(|member| {
                    let playing = props.lobby.is_playing(&member.id);
                    let id = member.id.clone();
                    let on_toggle = props.on_toggle.clone();
                    let style = if playing {
                        format!("background-color: {}; color: #fff", member.color)
                    } else {
                        "background-color: white; color: #000".to_string()
                    };
                    html! {
                        <label
                            key={member.id.clone()}
                            class={classes!("checkbox-label", if playing { "selected" } else { "unselected" })}
                            {style}
                        >
                            <input
                                type="checkbox"
                                checked={playing}
                                onchange={Callback::from(move |_| on_toggle.emit(id.clone()))}
                            />
                            { format!("{} {}", member.emoji.as_deref().unwrap_or("?"), member.name) }
                        </label>
                    }
                }) }
            </div>
        </section>
    }
}
