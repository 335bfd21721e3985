use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExitButtonProps {
    pub visible: bool,
    pub on_exit: Callback<()>,
}

#[function_component(ExitButton)]
pub fn exit_button(props: &ExitButtonProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let exit_cb = {
        let cb = props.on_exit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    html! {
        <button id="exitFullscreenBtn" onclick={exit_cb} style="position:absolute; left:50%; bottom:24px; transform:translateX(-50%); padding:12px 22px; font-size:16px; background:rgba(22,27,34,0.9); color:#e6edf3; border:1px solid #30363d; border-radius:24px; z-index:20;">
            {"Exit fullscreen"}
        </button>
    }
}
