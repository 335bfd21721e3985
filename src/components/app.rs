use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{File, Url};
use yew::prelude::*;

use super::{exit_button::ExitButton, image_stage::ImageStage, toolbar::Toolbar};
use crate::config::ViewerConfig;
use crate::host;
use crate::state::source::SourceKind;
use crate::state::{InputEvent, PresentationMode, Viewer, ViewerAction};
use crate::util::{clog, cwarn, now_ms};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ViewerConfig::load());
    let viewer = {
        let config = config.clone();
        use_reducer(move || Viewer::new(&config))
    };
    // Single pending hide. Replacing the Timeout drops and cancels the old one
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    // Host signals: fullscreen changes drive the mode, resizes force a redraw
    {
        let dispatcher = viewer.dispatcher();
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|win| {
                let fullscreen = win.document().map(|doc| {
                    let d = dispatcher.clone();
                    EventListener::new(&doc, "fullscreenchange", move |_| {
                        d.dispatch(ViewerAction::FullscreenChanged {
                            active: host::is_fullscreen(),
                        });
                    })
                });
                let resize = {
                    let d = dispatcher.clone();
                    EventListener::new(&win, "resize", move |_| d.dispatch(ViewerAction::Relayout))
                };
                (fullscreen, resize)
            });
            move || drop(listeners)
        });
    }

    // Exit control countdown, re-armed whenever the deadline moves
    {
        let hide_timer = hide_timer.clone();
        let dispatcher = viewer.dispatcher();
        use_effect_with(viewer.exit_control_deadline(), move |deadline| {
            let next = (*deadline).map(|deadline| {
                let delay = (deadline - now_ms()).max(0.0).ceil() as u32;
                Timeout::new(delay, move || {
                    dispatcher.dispatch(ViewerAction::ExpireExitControl { now: deadline });
                })
            });
            *hide_timer.borrow_mut() = next;
            || ()
        });
    }

    use_effect_with(viewer.mode(), |mode| {
        clog(&format!("presentation mode: {:?}", mode));
        || ()
    });

    let dispatch_cb = |action: ViewerAction| {
        let viewer = viewer.clone();
        Callback::from(move |_: ()| viewer.dispatch(action.clone()))
    };

    let on_input = {
        let viewer = viewer.clone();
        Callback::from(move |event: InputEvent| viewer.dispatch(ViewerAction::Input(event)))
    };
    let on_fullscreen = Callback::from(|_: ()| host::request_fullscreen());
    let on_exit = {
        let viewer = viewer.clone();
        Callback::from(move |_: ()| {
            host::request_exit_fullscreen();
            viewer.dispatch(ViewerAction::ExitControlActivated);
        })
    };
    let on_file = {
        let viewer = viewer.clone();
        Callback::from(move |file: File| match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                if let Some(previous) = viewer.sources().user_url() {
                    let _ = Url::revoke_object_url(previous);
                }
                clog(&format!("user image selected: {}", file.name()));
                viewer.dispatch(ViewerAction::UserImageChosen { url });
            }
            Err(err) => cwarn(&format!("user image rejected: {:?}", err)),
        })
    };

    let fixed = viewer.mode() == PresentationMode::Fixed;
    let src = AttrValue::from(viewer.sources().current_src().to_string());
    let transform_css = AttrValue::from(viewer.project().to_css());

    html! {
        <div id="viewer-root"
            class={classes!("viewer", fixed.then_some("fullscreen-mode"))}
            style="position:fixed; inset:0; overflow:hidden; background:#0e1116; color:#e6edf3;">
            <ImageStage
                {src}
                {transform_css}
                {on_input}
                on_load={dispatch_cb(ViewerAction::Relayout)}
            />
            if !fixed {
                <Toolbar
                    {on_fullscreen}
                    on_initial={dispatch_cb(ViewerAction::SelectInitial)}
                    on_user={dispatch_cb(ViewerAction::SelectUser)}
                    on_rotate={dispatch_cb(ViewerAction::Rotate)}
                    on_reset={dispatch_cb(ViewerAction::Reset)}
                    {on_file}
                    user_selected={viewer.sources().selected() == SourceKind::User}
                />
            }
            <ExitButton visible={viewer.exit_control_visible()} {on_exit} />
        </div>
    }
}
