use web_sys::TouchList;
use yew::prelude::*;

use crate::state::{InputEvent, InputKind, Point};
use crate::util::now_ms;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageStageProps {
    pub src: AttrValue,
    pub transform_css: AttrValue,
    pub on_input: Callback<InputEvent>,
    pub on_load: Callback<()>,
}

fn touch_points(touches: &TouchList) -> Vec<Point> {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

/// Full-surface input feed plus the transformed image. Every raw event is
/// forwarded; gating by mode happens in the viewer.
#[function_component(ImageStage)]
pub fn image_stage(props: &ImageStageProps) -> Html {
    let touch_cb = |kind: InputKind| {
        let cb = props.on_input.clone();
        Callback::from(move |e: TouchEvent| {
            cb.emit(InputEvent::touch(kind, touch_points(&e.touches()), now_ms()))
        })
    };
    let mousedown = {
        let cb = props.on_input.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() != 0 {
                return;
            }
            e.prevent_default();
            cb.emit(InputEvent::mouse(InputKind::Start, Some(mouse_point(&e)), now_ms()))
        })
    };
    let mousemove = {
        let cb = props.on_input.clone();
        Callback::from(move |e: MouseEvent| {
            // Hover without the primary button is not a drag
            if e.buttons() & 1 == 0 {
                return;
            }
            cb.emit(InputEvent::mouse(InputKind::Move, Some(mouse_point(&e)), now_ms()))
        })
    };
    let mouse_release = {
        let cb = props.on_input.clone();
        Callback::from(move |_e: MouseEvent| {
            cb.emit(InputEvent::mouse(InputKind::End, None, now_ms()))
        })
    };
    let onload = {
        let cb = props.on_load.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="stage"
            style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; overflow:hidden; touch-action:none; user-select:none;"
            ontouchstart={touch_cb(InputKind::Start)}
            ontouchmove={touch_cb(InputKind::Move)}
            ontouchend={touch_cb(InputKind::End)}
            ontouchcancel={touch_cb(InputKind::Cancel)}
            onmousedown={mousedown}
            onmousemove={mousemove}
            onmouseup={mouse_release.clone()}
            onmouseleave={mouse_release}
        >
            <img id="image"
                src={props.src.clone()}
                draggable="false"
                {onload}
                style={format!("max-width:100%; max-height:100%; transform-origin:center center; transform:{};", props.transform_css)}
            />
        </div>
    }
}
