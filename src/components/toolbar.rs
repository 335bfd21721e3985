use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    pub on_fullscreen: Callback<()>,
    pub on_initial: Callback<()>,
    pub on_user: Callback<()>,
    pub on_rotate: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_file: Callback<File>,
    pub user_selected: bool,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let fs = {
        let cb = props.on_fullscreen.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let initial = {
        let cb = props.on_initial.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let user = {
        let cb = props.on_user.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rotate = {
        let cb = props.on_rotate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let file_changed = {
        let cb = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                cb.emit(file);
            }
            // Lets the same file be picked twice in a row
            input.set_value("");
        })
    };
    let active = "background:#1f6feb; border-color:#388bfd;";
    let (initial_style, user_style) = if props.user_selected {
        ("", active)
    } else {
        (active, "")
    };
    html! {<div id="toolbar" style="position:absolute; left:12px; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-wrap:wrap; gap:6px; align-items:center; z-index:10;">
        <button id="fullscreenBtn" onclick={fs}>{"Fullscreen"}</button>
        <span style="width:8px;"></span>
        <button id="initialBtn" onclick={initial} style={initial_style}>{"Sample"}</button>
        <button id="userBtn" onclick={user} style={user_style}>{"My image"}</button>
        <label style="display:flex; align-items:center; gap:4px; cursor:pointer;">
            <span>{"Open…"}</span>
            <input id="fileInput" type="file" accept="image/*" onchange={file_changed} style="display:none;" />
        </label>
        <span style="width:8px;"></span>
        <button id="rotateBtn" onclick={rotate}>{"Rotate"}</button>
        <button id="resetBtn" onclick={reset}>{"Reset"}</button>
    </div>}
}
